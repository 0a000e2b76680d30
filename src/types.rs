use serde::{Deserialize, Serialize};

/// Counters describing one completed render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSummary {
    /// Number of non-empty paths consumed.
    pub paths: usize,
    /// Number of empty input lines skipped.
    pub empty_lines: usize,
    /// Deepest nesting level reached, in indent levels.
    pub max_depth: usize,
}
