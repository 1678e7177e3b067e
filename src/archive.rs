use crate::record::MessageRecord;
use serde::{Deserialize, Serialize};

/// The `<smses>` root of a backup file.
///
/// `backup_set` and `backup_date` are opaque and copied as-is. `count` is
/// whatever the file declared, unchecked and possibly negative; use
/// [`Archive::with_records`] to build an archive whose count is consistent
/// with its contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename = "smses")]
pub struct Archive {
    #[serde(rename = "@count", default)]
    pub count: i64,
    #[serde(rename = "@backup_set", default)]
    pub backup_set: String,
    #[serde(rename = "@backup_date", default)]
    pub backup_date: String,
    #[serde(rename = "sms", default)]
    pub records: Vec<MessageRecord>,
}

impl Archive {
    /// New archive carrying `source`'s metadata and the given records, with
    /// the declared count set to the number of records.
    pub fn with_records(source: &Archive, records: Vec<MessageRecord>) -> Self {
        Self {
            count: records.len() as i64,
            backup_set: source.backup_set.clone(),
            backup_date: source.backup_date.clone(),
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
