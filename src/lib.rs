pub mod archive;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod normalization;
pub mod record;

pub use archive::Archive;
pub use config::{CountryPrefix, FilterConfig, NormalizationConfig};
pub use error::FilterError;
pub use filter::{ArchiveSink, FileSink, FilterPipeline, FilterStats};
pub use normalization::{normalize, PhoneNormalizer};
pub use record::{MessageRecord, Status, StatusParseError};

use std::fs::File;
use std::io::BufReader;

/// Filter the archive at `config.input` into `config.output`.
///
/// The phone number is validated before any file is opened. The input file
/// is closed once decoding is done.
pub fn run(config: &FilterConfig) -> error::Result<FilterStats> {
    let pipeline = FilterPipeline::new(&config.phone_number, &config.normalization)?;

    let input_path =
        std::path::absolute(&config.input).map_err(|source| FilterError::PathResolution {
            path: config.input.clone(),
            source,
        })?;
    log::debug!("Resolved input path: {}", input_path.display());

    let file = File::open(&input_path).map_err(|source| FilterError::FileOpen {
        path: input_path.clone(),
        source,
    })?;

    log::info!(
        "Dump SMSes from {} to {}",
        config.input.display(),
        config.output.display()
    );

    let stats = pipeline.run(BufReader::new(file), FileSink::new(&config.output))?;

    if stats.written {
        log::info!("Dump SMS to {} finished", config.output.display());
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const INPUT: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<smses count="3" backup_set="set" backup_date="1609459200000">
  <sms protocol="0" address="+33612345678" date="1" type="1" body="one" read="1" status="-1" locked="0" date_sent="0" readable_date="" contact_name="Alice" />
  <sms protocol="0" address="0712345678" date="2" type="1" body="two" read="1" status="-1" locked="0" date_sent="0" readable_date="" contact_name="Bob" />
  <sms protocol="0" address="0612345678" date="3" type="2" body="three" read="1" status="null" locked="0" date_sent="0" readable_date="" contact_name="Alice" />
</smses>
"#;

    fn config_in(dir: &std::path::Path, phone_number: &str) -> FilterConfig {
        FilterConfig {
            input: dir.join("input.xml"),
            output: dir.join("filtered.xml"),
            phone_number: phone_number.to_string(),
            normalization: NormalizationConfig::default(),
        }
    }

    #[test]
    fn test_run_filters_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "+33 6 12 34 56 78");
        std::fs::write(&config.input, INPUT).unwrap();

        let stats = run(&config).unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.kept, 2);

        let output = codec::decode_file(&config.output).unwrap();
        let bodies: Vec<&str> = output.records.iter().map(|r| r.body.as_str()).collect();
        assert_eq!(bodies, vec!["one", "three"]);
        assert_eq!(output.count, 2);
        assert_eq!(output.backup_set, "set");
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "0612345678");

        match run(&config) {
            Err(FilterError::FileOpen { path, .. }) => assert!(path.is_absolute()),
            other => panic!("Expected file open error, got {other:?}"),
        }
        assert!(!config.output.exists());
    }

    #[test]
    fn test_run_empty_input_path() {
        let config = FilterConfig {
            input: PathBuf::new(),
            ..FilterConfig::default()
        };
        assert!(matches!(
            run(&config),
            Err(FilterError::PathResolution { .. })
        ));
    }

    #[test]
    fn test_run_blank_phone_number_checked_first() {
        let dir = tempfile::tempdir().unwrap();
        // Input does not exist; the phone number error must win
        let config = config_in(dir.path(), " ");
        assert!(matches!(run(&config), Err(FilterError::Configuration(_))));
    }
}
