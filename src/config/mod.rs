pub mod local;

use crate::core::{ConfigProvider, DedupeConfigProvider, ProjectConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_field_list, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

/// Job settings for the player field-projection tool. The defaults mirror the
/// reference data-prep workflow: take the full player dump and keep the five
/// fields the squad builder actually reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub input_path: String,
    pub output_path: String,
    pub fields: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            input_path: "players_orig.json".to_string(),
            output_path: "players.json".to_string(),
            fields: [
                "short_name",
                "long_name",
                "potential",
                "nationality_name",
                "preferred_foot",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl ConfigProvider for ProjectConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl ProjectConfigProvider for ProjectConfig {
    fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Validate for ProjectConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_field_list("fields", &self.fields)?;
        Ok(())
    }
}

/// Job settings for the team deduplication tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupeConfig {
    pub input_path: String,
    pub output_path: String,
    pub key_field: String,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            input_path: "teams.json".to_string(),
            output_path: "unique_teams.json".to_string(),
            key_field: "Team Name".to_string(),
        }
    }
}

impl ConfigProvider for DedupeConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl DedupeConfigProvider for DedupeConfig {
    fn key_field(&self) -> &str {
        &self.key_field
    }
}

impl Validate for DedupeConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("key_field", &self.key_field)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_validate() {
        assert!(ProjectConfig::default().validate().is_ok());
        assert!(DedupeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_project_config_rejects_empty_field_list() {
        let config = ProjectConfig {
            fields: vec![],
            ..ProjectConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_project_config_rejects_empty_input_path() {
        let config = ProjectConfig {
            input_path: String::new(),
            ..ProjectConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dedupe_config_rejects_blank_key_field() {
        let config = DedupeConfig {
            key_field: "  ".to_string(),
            ..DedupeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
