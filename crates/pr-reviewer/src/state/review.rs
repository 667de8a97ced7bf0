//! Review state

use std::collections::HashMap;

/// Streamed reviews and the lifecycle of the active review
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewState {
    /// Review text per filename. A key exists once a review has started.
    pub file_reviews: HashMap<String, String>,
    /// File currently being streamed, empty when idle
    pub current_review_file: String,
    /// Single-flight flag shared by single-file and batch reviews
    pub is_reviewing: bool,
    pub is_reviewing_all: bool,
    /// Failure of the last single-file review
    pub review_error: String,
    /// Position within the reviewable files of the batch pass
    pub review_all_current_index: usize,
}

impl ReviewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn review_for(&self, filename: &str) -> &str {
        self.file_reviews
            .get(filename)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_reviewed(&self, filename: &str) -> bool {
        self.file_reviews.contains_key(filename)
    }

    /// Mark `filename` as the streaming target with an empty review
    pub fn begin(&mut self, filename: &str) {
        self.current_review_file = filename.to_string();
        self.file_reviews.insert(filename.to_string(), String::new());
    }

    pub fn append(&mut self, filename: &str, text: &str) {
        self.file_reviews
            .entry(filename.to_string())
            .or_default()
            .push_str(text);
    }

    /// Leave the reviewing state regardless of outcome
    pub fn finish(&mut self) {
        self.is_reviewing = false;
        self.is_reviewing_all = false;
        self.current_review_file.clear();
    }
}
