use crate::config::{CountryPrefix, NormalizationConfig};

/// Canonicalizes phone numbers so that formatting variants of the same
/// number compare equal.
///
/// Spaces are removed first, then the first matching international prefix
/// from the table is rewritten to its national form. Anything the table
/// does not know about passes through with only the spaces stripped.
#[derive(Debug, Clone)]
pub struct PhoneNormalizer {
    prefixes: Vec<CountryPrefix>,
}

impl PhoneNormalizer {
    pub fn new(config: &NormalizationConfig) -> Self {
        Self {
            prefixes: config.country_prefixes.clone(),
        }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let compact: String = raw.chars().filter(|c| *c != ' ').collect();

        for prefix in &self.prefixes {
            // An empty prefix would match everything
            if prefix.international.is_empty() {
                continue;
            }
            if let Some(rest) = compact.strip_prefix(prefix.international.as_str()) {
                return format!("{}{}", prefix.national, rest);
            }
        }

        compact
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new(&NormalizationConfig::default())
    }
}

/// Normalize with the default prefix table (`+33` to `0`).
pub fn normalize(raw: &str) -> String {
    PhoneNormalizer::default().normalize(raw)
}
