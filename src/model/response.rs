//! Analysis response types.

use super::{Block, BlockType};
use serde::{Deserialize, Serialize};

/// A decoded document-analysis response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisResponse {
    /// Document-level metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_metadata: Option<DocumentMetadata>,

    /// Status of the asynchronous analysis job (absent for synchronous calls)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatus>,

    /// Human-readable status detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    /// Version of the analysis model that produced the blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyze_document_model_version: Option<String>,

    /// All blocks, in the order the service returned them
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl AnalysisResponse {
    /// Create a response from a list of blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    /// Number of pages reported by the service.
    pub fn page_count(&self) -> Option<u32> {
        self.document_metadata.as_ref().map(|m| m.pages)
    }

    /// Iterate over blocks of one kind, in response order.
    pub fn blocks_of(&self, block_type: BlockType) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.block_type == block_type)
    }

    /// Number of TABLE blocks.
    pub fn table_count(&self) -> usize {
        self.blocks_of(BlockType::Table).count()
    }

    /// Check if the response contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check that the job finished with a usable result.
    pub fn is_complete(&self) -> bool {
        self.job_status.map_or(true, JobStatus::is_complete)
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadata {
    /// Number of pages in the analyzed document
    #[serde(default)]
    pub pages: u32,
}

/// Status of an asynchronous analysis job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Still running
    InProgress,
    /// Finished
    Succeeded,
    /// Finished with some pages missing
    PartialSuccess,
    /// Failed
    Failed,
}

impl JobStatus {
    /// Whether blocks from a job in this state are worth reading.
    pub fn is_complete(self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::PartialSuccess)
    }

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::PartialSuccess => "PARTIAL_SUCCESS",
            JobStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
