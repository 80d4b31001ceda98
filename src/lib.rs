pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, DedupeConfig, ProjectConfig};
pub use core::etl::EtlEngine;
pub use core::pipeline::{DedupePipeline, ProjectPipeline};
pub use utils::error::{EtlError, Result};
