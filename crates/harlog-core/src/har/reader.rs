use super::types::Har;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR file from the given path.
    ///
    /// The file is closed before returning, whether parsing succeeded or not.
    pub fn from_file(path: &Path) -> Result<Har> {
        tracing::debug!("Reading HAR file from: {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a HAR document from any byte stream.
    ///
    /// The whole stream must be a single JSON document; trailing data is an error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Har> {
        let har: Har = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                Error::Io(e.into())
            } else {
                Error::Parse(e)
            }
        })?;
        log_parsed(&har);
        Ok(har)
    }

    /// Parse a HAR document from a JSON string
    pub fn from_str(content: &str) -> Result<Har> {
        tracing::debug!("Parsing HAR from string");

        let har: Har = serde_json::from_str(content)?;
        log_parsed(&har);
        Ok(har)
    }

    /// Parse a HAR document from raw bytes
    pub fn from_slice(content: &[u8]) -> Result<Har> {
        tracing::debug!("Parsing HAR from {} bytes", content.len());

        let har: Har = serde_json::from_slice(content)?;
        log_parsed(&har);
        Ok(har)
    }
}

fn log_parsed(har: &Har) {
    tracing::info!(
        "Successfully parsed HAR {} with {} entries",
        har.log.version,
        har.log.entries.len()
    );
}
