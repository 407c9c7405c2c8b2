//! Errors raised while reading a dataset or preparing the induction.
//! Everything here is detected before the first tree node is built.
use polars::prelude::PolarsError;
use thiserror::Error;

use std::io;


/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Id3Error>;


/// Error type of this crate.
/// All variants except `Io`, `Polars`, and `Serialize`
/// describe a malformed input dataset.
#[derive(Error, Debug)]
pub enum Id3Error {
    /// The dataset needs at least one attribute and a target column.
    #[error("invalid dataset: expected at least 2 columns, got {0}")]
    TooFewColumns(usize),

    /// The dataset has no rows.
    #[error("invalid dataset: the dataset has no rows")]
    NoRows,

    /// Two columns share a label.
    #[error("invalid dataset: duplicate column label `{0}`")]
    DuplicateLabel(String),

    /// An attribute column has no value to split on.
    #[error("invalid dataset: attribute `{0}` has an empty value set")]
    EmptyAttribute(String),

    /// The target column has no class value.
    #[error("invalid dataset: target `{0}` has no unique value")]
    EmptyTarget(String),

    /// The named target column does not exist.
    #[error("invalid dataset: target column `{0}` does not exist")]
    UnknownTarget(String),

    /// A row does not have as many cells as the header.
    #[error(
        "invalid dataset: line {line} has {found} cells, expected {expected}"
    )]
    RaggedRow {
        /// 1-indexed line number in the source.
        line: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of cells on the line.
        found: usize,
    },

    /// A column does not have as many rows as the first one.
    #[error(
        "invalid dataset: column `{column}` has {found} rows, expected {expected}"
    )]
    ColumnLength {
        /// Column label.
        column: String,
        /// Number of rows in the first column.
        expected: usize,
        /// Number of rows in this column.
        found: usize,
    },

    /// A cell is empty or null.
    #[error("invalid dataset: missing value in column `{column}` (row {row})")]
    MissingValue {
        /// Column label.
        column: String,
        /// 0-indexed row.
        row: usize,
    },

    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Converting a `polars::DataFrame` failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),

    /// Serializing the tree failed.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}


impl Id3Error {
    /// Returns `true` if this error reports a malformed dataset.
    pub fn is_invalid_dataset(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Polars(_) | Self::Serialize(_))
    }
}
