use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NULL_SENTINEL: &str = "null";

/// Delivery status of a message.
///
/// Backups store it as text: either the literal `null` or a numeric code
/// such as `-1` or `32`. It is parsed once when the record is read so a
/// bad value fails the decode instead of surfacing later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    #[default]
    Null,
    Code(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid message status {value:?}: expected \"null\" or an integer code")]
pub struct StatusParseError {
    pub value: String,
}

impl Status {
    pub fn is_null(&self) -> bool {
        matches!(self, Status::Null)
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Status::Null => None,
            Status::Code(code) => Some(*code),
        }
    }
}

impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NULL_SENTINEL {
            return Ok(Status::Null);
        }
        s.parse::<i64>()
            .map(Status::Code)
            .map_err(|_| StatusParseError {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Status {
    type Error = StatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Null => f.write_str(NULL_SENTINEL),
            Status::Code(code) => write!(f, "{code}"),
        }
    }
}

/// One `<sms>` entry of a backup archive.
///
/// Field order follows the attribute order of the backup format. Absent
/// attributes decode to their zero value, except `subject` and `number`
/// which keep their absence so it survives a rewrite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageRecord {
    #[serde(rename = "@protocol")]
    pub protocol: String,
    #[serde(rename = "@address")]
    pub address: String,
    /// Receipt time, milliseconds since the epoch.
    #[serde(rename = "@date")]
    pub date: i64,
    /// 1 = received, 2 = sent, other values are drafts/outbox/failed.
    #[serde(rename = "@type")]
    pub kind: i32,
    #[serde(rename = "@subject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "@toa")]
    pub toa: String,
    #[serde(rename = "@sc_toa")]
    pub sc_toa: String,
    #[serde(rename = "@body")]
    pub body: String,
    #[serde(rename = "@number", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "@service_center")]
    pub service_center: String,
    #[serde(rename = "@read")]
    pub read: bool,
    #[serde(rename = "@status")]
    pub status: Status,
    #[serde(rename = "@locked")]
    pub locked: bool,
    #[serde(rename = "@date_sent")]
    pub date_sent: i64,
    #[serde(rename = "@readable_date")]
    pub readable_date: String,
    #[serde(rename = "@contact_name")]
    pub contact_name: String,
}
