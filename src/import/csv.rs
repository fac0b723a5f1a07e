//! CSV importer
//!
//! Runs the full pipeline over one file's text and assembles the resulting
//! [`IngestionEntry`].

use tracing::{debug, info};

use crate::config::IngestConfig;
use crate::models::{DatasetType, IngestionEntry, RawRecord};

use super::delimiter::Delimiter;
use super::headers::{HeaderKey, normalize_headers};
use super::lines::split_lines;
use super::rows::{DEFAULT_NULL_SENTINELS, PositionalFallback, RowMapper};
use super::tokenizer::parse_line;
use super::{ImportError, ImportResult};

/// Output of the generic parse, before entry assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCsv {
    pub delimiter: Delimiter,
    pub headers: Vec<HeaderKey>,
    /// One mapped row per non-blank data line, in source order
    pub rows: Vec<RawRecord>,
}

/// Importer for delimited text exports.
#[derive(Debug, Clone)]
pub struct CSVImporter {
    null_sentinels: Vec<String>,
    positional: Option<PositionalFallback>,
}

impl Default for CSVImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CSVImporter {
    /// Create an importer with the default null sentinels and positional fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fc_analytics_sdk::import::CSVImporter;
    ///
    /// let importer = CSVImporter::new();
    /// let parsed = importer.parse("id;nome\n1;Silva").unwrap();
    /// assert_eq!(parsed.rows[0].get("nome"), Some("Silva"));
    /// ```
    pub fn new() -> Self {
        Self {
            null_sentinels: DEFAULT_NULL_SENTINELS.iter().map(|s| s.to_string()).collect(),
            positional: Some(PositionalFallback::default()),
        }
    }

    /// Create an importer from the `[ingest]` and `[positional]` config sections
    pub fn from_config(config: &IngestConfig) -> Self {
        Self {
            null_sentinels: config.ingest.null_sentinels.clone(),
            positional: config.positional.fallback(),
        }
    }

    pub fn with_null_sentinels(mut self, sentinels: Vec<String>) -> Self {
        self.null_sentinels = sentinels;
        self
    }

    pub fn with_positional_fallback(mut self, positional: Option<PositionalFallback>) -> Self {
        self.positional = positional;
        self
    }

    /// Split, detect, tokenize, normalize and map one file's text.
    ///
    /// # Errors
    ///
    /// [`ImportError::EmptyFile`] when the text has no non-blank line and
    /// [`ImportError::NoHeaders`] when the header line has no columns.
    pub fn parse(&self, text: &str) -> ImportResult<ParsedCsv> {
        let lines = split_lines(text)?;
        let (header_line, data_lines) = lines.split_first().ok_or(ImportError::EmptyFile)?;

        let delimiter = Delimiter::detect(header_line.text);
        debug!("Detected delimiter {} from header line", delimiter);

        let raw_headers = parse_line(header_line.text, delimiter);
        let headers = normalize_headers(&raw_headers)?;
        debug!(
            "Normalized {} header(s): {}",
            headers.len(),
            headers
                .iter()
                .map(HeaderKey::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mapper = RowMapper::new(headers)
            .with_null_sentinels(self.null_sentinels.clone())
            .with_positional_fallback(self.positional);

        let rows: Vec<RawRecord> = data_lines
            .iter()
            .map(|line| mapper.map_row(&parse_line(line.text, delimiter)))
            .filter(|record| !record.is_empty())
            .collect();

        Ok(ParsedCsv {
            delimiter,
            headers: mapper.headers().to_vec(),
            rows,
        })
    }

    /// Parse a file and assemble an [`IngestionEntry`] for the given dataset slot.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Original file name, recorded in the entry history
    /// * `text` - Full file text
    /// * `dataset` - Dataset slot the entry belongs to
    ///
    /// # Errors
    ///
    /// Any [`parse`](Self::parse) error, or [`ImportError::NoDataRows`] when the file
    /// holds only a header line.
    pub fn import(
        &self,
        file_name: &str,
        text: &str,
        dataset: DatasetType,
    ) -> ImportResult<IngestionEntry> {
        let parsed = self.parse(text)?;
        if parsed.rows.is_empty() {
            return Err(ImportError::NoDataRows);
        }

        info!(
            "Imported {} row(s) for {} from {}",
            parsed.rows.len(),
            dataset,
            file_name
        );
        Ok(IngestionEntry::new(dataset, file_name, parsed.rows))
    }
}
