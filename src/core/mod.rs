pub mod dedupe;
pub mod etl;
pub mod pipeline;
pub mod project;

pub use crate::domain::model::{FieldMap, Record, TransformResult};
pub use crate::domain::ports::{
    ConfigProvider, DedupeConfigProvider, Pipeline, ProjectConfigProvider, Storage,
};
pub use crate::utils::error::Result;
