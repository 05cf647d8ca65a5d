//! Parser for the RDS `Identifier Link` field
//!
//! RDS packs two lines into this field:
//!
//! ```text
//! https://console.aws.amazon.com/rds/home?region=us-west-2#
//! SourceId: my-db
//! ```

use snspark_core::{Error, Result};

const SOURCE_ID_MARKER: &str = "SourceId: ";

/// A parsed `Identifier Link`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierLink {
    /// First line, the console URL
    pub link: String,
    /// Second line, or the first line when there is only one
    pub title: String,
    /// Identifier following `SourceId: ` up to the end of its line, trimmed
    pub source_id: String,
}

impl IdentifierLink {
    pub fn parse(raw: &str) -> Result<Self> {
        let rest = raw
            .split(SOURCE_ID_MARKER)
            .nth(1)
            .ok_or_else(|| Error::MissingSourceId(raw.to_string()))?;
        let source_id = rest.lines().next().unwrap_or("").trim().to_string();

        let lines: Vec<&str> = raw.split('\n').collect();
        let (link, title) = match lines.as_slice() {
            [first, second, ..] => (*first, *second),
            [only] => (*only, *only),
            [] => ("", ""),
        };

        Ok(Self {
            link: link.to_string(),
            title: title.to_string(),
            source_id,
        })
    }
}
