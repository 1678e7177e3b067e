use crate::archive::Archive;
use crate::codec;
use crate::config::NormalizationConfig;
use crate::error::{FilterError, Result};
use crate::normalization::PhoneNormalizer;
use std::io::Read;
use std::path::PathBuf;

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    /// Records in the input archive.
    pub total: usize,
    /// Records whose address matched the target.
    pub kept: usize,
    /// False when the input had no records and nothing was written.
    pub written: bool,
}

/// Destination for the filtered archive.
///
/// Taken by value and only invoked when there is something to write, so a
/// file sink never creates its file on the empty-input path.
pub trait ArchiveSink {
    fn write_archive(self, archive: &Archive) -> Result<()>;
}

/// Writes to a path, creating or truncating the file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArchiveSink for FileSink {
    fn write_archive(self, archive: &Archive) -> Result<()> {
        let xml = codec::encode(archive)?;
        std::fs::write(&self.path, xml).map_err(|source| FilterError::Write {
            path: self.path,
            source,
        })
    }
}

/// Keeps the messages exchanged with one phone number.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    normalizer: PhoneNormalizer,
    target: String,
}

impl FilterPipeline {
    /// Fails when the target number is blank or normalizes to nothing.
    pub fn new(phone_number: &str, normalization: &NormalizationConfig) -> Result<Self> {
        if phone_number.trim().is_empty() {
            return Err(FilterError::Configuration(
                "No phone number provided".to_string(),
            ));
        }

        let normalizer = PhoneNormalizer::new(normalization);
        let target = normalizer.normalize(phone_number);
        if target.is_empty() {
            return Err(FilterError::Configuration(format!(
                "Phone number {phone_number:?} is not usable"
            )));
        }

        Ok(Self { normalizer, target })
    }

    /// Normalized form of the target number.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_match(&self, address: &str) -> bool {
        self.normalizer.normalize(address) == self.target
    }

    /// Stable filter: matching records in their original order, metadata
    /// copied, count recomputed.
    pub fn filter(&self, archive: &Archive) -> Archive {
        let kept = archive
            .records
            .iter()
            .filter(|record| self.is_match(&record.address))
            .inspect(|record| {
                log::debug!("Keep SMS from {} at {}", record.address, record.date)
            })
            .cloned()
            .collect();

        Archive::with_records(archive, kept)
    }

    /// Decode, filter and write. An input without any record short-circuits
    /// before the sink is touched; an input with records but no match still
    /// produces an (empty) archive.
    pub fn run<R: Read, S: ArchiveSink>(&self, input: R, sink: S) -> Result<FilterStats> {
        let archive = codec::decode(input)?;
        log::info!("SMS found: {}", archive.len());

        if archive.is_empty() {
            log::warn!("Input archive contains no SMS, nothing written");
            return Ok(FilterStats::default());
        }

        log::info!("Filter with {} as phone number", self.target);
        let filtered = self.filter(&archive);
        log::info!("SMS kept after filtering: {}", filtered.count);

        sink.write_archive(&filtered)?;

        Ok(FilterStats {
            total: archive.len(),
            kept: filtered.len(),
            written: true,
        })
    }
}
