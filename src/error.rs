//! Error type shared by training, classification, and the I/O helpers.
use polars::prelude::PolarsError;

/// Errors raised at the boundary of this crate.
///
/// Row positions are indices into the rows handed to the failing call,
/// so the header row (if any) is row `0`.
#[derive(Debug, thiserror::Error)]
pub enum Id3Error {
    /// Classification was requested before any tree was trained.
    #[error("no decision tree has been trained yet, run the training phase first")]
    NotTrained,

    /// A value that never appeared in the training data
    /// was found at inference time.
    #[error("row {row}: value `{value}` of attribute `{attribute}` was not seen in training")]
    UnknownValue {
        /// Position of the offending row.
        row: usize,
        /// Name of the attribute column.
        attribute: String,
        /// The unseen value.
        value: String,
    },

    /// A row whose length differs from the trained column layout.
    #[error("row {row}: expected {expected} columns, found {found}")]
    RowLength {
        /// Position of the offending row.
        row: usize,
        /// Number of columns of the trained layout.
        expected: usize,
        /// Number of columns of the row.
        found: usize,
    },

    /// The training rows need at least one attribute and the class column.
    #[error("at least 2 columns are required (attributes + class), found {0}")]
    TooFewColumns(usize),

    /// No rows at all, not even a header.
    #[error("the input contains no rows")]
    EmptyInput,

    /// A header row but no example to learn from or to score.
    #[error("the rows contain a header but no examples")]
    NoExamples,

    /// A column name that does not exist in the header.
    #[error("the attribute named `{0}` does not exist")]
    UnknownAttribute(String),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A `polars` frame could not be converted.
    #[error(transparent)]
    Polars(#[from] PolarsError),

    /// A tree could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A deserialized classifier whose catalogs and tree disagree.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// Drawing the learning curve failed.
    #[error("failed to draw the plot: {0}")]
    Plot(String),
}

/// A `Result` alias whose error is [`Id3Error`].
pub type Result<T> = std::result::Result<T, Id3Error>;
