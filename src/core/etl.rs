use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting ETL process...");

        // Extract
        println!("Extracting data...");
        let raw_items = self.pipeline.extract()?;
        println!("Extracted {} items", raw_items.len());

        // Transform
        println!("Transforming data...");
        let result = self.pipeline.transform(raw_items)?;
        println!("Transformed {} records", result.records.len());
        if result.skipped_items > 0 {
            println!("Skipped {} non-record items", result.skipped_items);
        }
        if result.removed_duplicates > 0 {
            println!("Removed {} duplicate records", result.removed_duplicates);
        }

        // Load
        println!("Loading data...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
