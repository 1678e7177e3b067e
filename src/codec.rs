//! Reading and writing SMS backup archives.
//!
//! The format is the `<smses>`/`<sms>` XML produced by Android backup apps.
//! All record data lives in attributes. Elements other than `<sms>` under
//! the root (such as `<mms>`) are skipped.

use crate::archive::Archive;
use crate::error::{FilterError, Result};
use quick_xml::events::Event;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const ROOT_ELEMENT: &str = "smses";
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Decode a whole archive. The input is read to the end first.
pub fn decode<R: Read>(mut reader: R) -> Result<Archive> {
    let mut xml = String::new();
    reader
        .read_to_string(&mut xml)
        .map_err(|e| FilterError::Decode(e.to_string()))?;

    check_root(&xml)?;

    quick_xml::de::from_str(&xml).map_err(|e| FilterError::Decode(e.to_string()))
}

pub fn decode_file(path: &Path) -> Result<Archive> {
    let file = File::open(path).map_err(|source| FilterError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    decode(BufReader::new(file))
}

/// Encode an archive, XML declaration included.
pub fn encode(archive: &Archive) -> Result<String> {
    let body =
        quick_xml::se::to_string(archive).map_err(|e| FilterError::Encode(e.to_string()))?;
    Ok(format!("{XML_DECLARATION}{}\n", escape_attribute_whitespace(&body)))
}

// XML readers fold raw tabs and line breaks inside attribute values into
// spaces, so they have to be written as character references. The
// serializer emits no indentation or text nodes for an archive, so every
// such character in its output belongs to an attribute value.
fn escape_attribute_whitespace(xml: &str) -> String {
    let mut escaped = String::with_capacity(xml.len());
    for c in xml.chars() {
        match c {
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// The serde layer accepts any root element name, so check it up front.
fn check_root(xml: &str) -> Result<()> {
    let mut reader = quick_xml::Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.name();
                if name.as_ref() == ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(FilterError::Decode(format!(
                    "expected root element <{ROOT_ELEMENT}> but found <{}>",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            Ok(Event::Eof) => {
                return Err(FilterError::Decode(
                    "document has no root element".to_string(),
                ))
            }
            Ok(_) => continue,
            Err(e) => return Err(FilterError::Decode(e.to_string())),
        }
    }
}
