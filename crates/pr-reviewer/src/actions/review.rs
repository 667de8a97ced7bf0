//! Review actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    /// Review the selected file
    ReviewFile,
    /// Review every reviewable file that has no review yet
    ReviewAll,
    /// The batch moved on to the file at `index`
    BatchFileStarted {
        generation: u64,
        index: usize,
        filename: String,
    },
    /// Streamed text for `filename`
    Chunk {
        generation: u64,
        filename: String,
        text: String,
    },
    /// A batch file failed; the batch continues
    BatchFileFailed {
        generation: u64,
        filename: String,
        error: String,
    },
    /// Single-file review ended, with the failure reason if any
    Finished {
        generation: u64,
        error: Option<String>,
    },
    /// Batch review ended
    BatchFinished { generation: u64 },
}
