//! Default values shared across the crate.

/// Initial capacity of a column.
pub const BUFFER_SIZE:          usize = 256;

/// Whether a CSV file is assumed to carry a header row.
pub const DEFAULT_HAS_HEADER:    bool = true;
/// Candidate attributes are scored in parallel by default.
pub const DEFAULT_PARALLEL:      bool = true;

/// Scores closer than this are treated as equal.
pub const NUMERIC_TOLERANCE:      f64 = 1e-9;

/// Indentation per depth level of the text rendering.
pub const PRINT_INDENT_WIDTH:   usize = 4;
