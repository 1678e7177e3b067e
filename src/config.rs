use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input.xml";
pub const DEFAULT_OUTPUT: &str = "filtered.xml";
pub const DEFAULT_PHONE_NUMBER: &str = "0600000000";

/// Everything one invocation needs, built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub phone_number: String,
    pub normalization: NormalizationConfig,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            normalization: NormalizationConfig::default(),
        }
    }
}

/// Country prefix table used by the phone normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    #[serde(default)]
    pub country_prefixes: Vec<CountryPrefix>,
}

/// Rewrites a leading international prefix to the national trunk prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPrefix {
    pub international: String,
    pub national: String,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            // France only; other countries have to be listed explicitly
            country_prefixes: vec![CountryPrefix {
                international: "+33".to_string(),
                national: "0".to_string(),
            }],
        }
    }
}

impl NormalizationConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NormalizationConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
