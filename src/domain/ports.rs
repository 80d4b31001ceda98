use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use serde_json::Value;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait ProjectConfigProvider: ConfigProvider {
    fn fields(&self) -> &[String];
}

pub trait DedupeConfigProvider: ConfigProvider {
    fn key_field(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Value>>;
    fn transform(&self, items: Vec<Value>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
