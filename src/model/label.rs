use serde::{Deserialize, Serialize};

/// Maximum label name length, counted in characters after trimming
pub const MAX_NAME_LEN: usize = 20;

/// The 13-swatch label palette. The first entry is the default color.
pub const PALETTE: [&str; 13] = [
    "#505050", "#e57373", "#f06292", "#ba68c8", "#9575cd", "#7986cb", "#64b5f6", "#4dd0e1",
    "#4db6ac", "#81c784", "#ffd54f", "#ffb74d", "#a1887f",
];

/// A user-defined label. The name doubles as the identifier; it is
/// persisted under the field name `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "label")]
    pub name: String,
    /// Palette color, purely presentational
    pub color: String,
}
