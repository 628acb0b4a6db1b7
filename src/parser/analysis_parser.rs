//! Analysis response parser using serde_json.

use std::io::Read;
use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{AnalysisResponse, Block, ExtractedTable};

use super::options::ParseOptions;
use super::{BlockGraph, TableReconstructor, WordIndex};

/// Document-analysis response parser.
///
/// Loads a saved response and reconstructs every table it contains.
pub struct AnalysisParser {
    response: AnalysisResponse,
    options: ParseOptions,
}

impl AnalysisParser {
    /// Open a response JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a response JSON file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a response from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a response from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let response: AnalysisResponse = serde_json::from_slice(data)?;
        Self::from_response_with_options(response, options)
    }

    /// Parse a response from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_bytes(json.as_bytes())
    }

    /// Parse a response from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a response from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Wrap an already decoded response.
    pub fn from_response(response: AnalysisResponse) -> Result<Self> {
        Self::from_response_with_options(response, ParseOptions::default())
    }

    /// Wrap an already decoded response with custom options.
    ///
    /// Responses from jobs that are still running or have failed are
    /// rejected, since their block lists are empty or partial.
    pub fn from_response_with_options(
        response: AnalysisResponse,
        options: ParseOptions,
    ) -> Result<Self> {
        if !response.is_complete() {
            let status = response
                .job_status
                .map(|s| s.to_string())
                .unwrap_or_default();
            return Err(Error::JobNotComplete(status));
        }
        log::debug!("Loaded analysis response with {} blocks", response.blocks.len());
        Ok(Self { response, options })
    }

    /// The decoded response.
    pub fn response(&self) -> &AnalysisResponse {
        &self.response
    }

    /// Reconstruct every selected table, in the order TABLE blocks appear.
    pub fn parse(&self) -> Result<Vec<ExtractedTable>> {
        let words = WordIndex::build(&self.response.blocks);
        let graph = BlockGraph::new(&self.response.blocks);
        let reconstructor =
            TableReconstructor::new(&words).with_error_mode(self.options.error_mode);

        let tables: Vec<&Block> = graph
            .tables()
            .filter(|t| self.options.pages.includes(t.page.unwrap_or(1)))
            .collect();
        log::debug!(
            "Reconstructing {} tables ({} words indexed)",
            tables.len(),
            words.len()
        );

        let extract = |table: &&Block| -> Result<ExtractedTable> {
            let cells = graph.cells_of(table);
            let geometry = reconstructor.reconstruct(&cells)?;
            Ok(ExtractedTable::new(table.id.clone(), table.page, geometry))
        };

        // Indexed collection keeps block order in both modes
        if self.options.parallel {
            tables.par_iter().map(extract).collect()
        } else {
            tables.iter().map(extract).collect()
        }
    }
}
