//! Reading raw rows and encoding them for training.
//!
//! Raw rows (`Vec<Vec<String>>`, header first) are turned into a
//! [`Schema`] of value catalogs and a list of [`Example`]s.
//! A [`Dataset`] is a view over these examples.

// Provides the value catalogs.
pub(crate) mod catalog;
// Provides the encoded training example.
pub(crate) mod example;
// Provides the dataset view used while growing a tree.
pub(crate) mod dataset;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use catalog::{LabelCatalog, Schema};
pub use example::Example;
pub use dataset::Dataset;
pub use reader::{SampleReader, read_csv, rows_from_dataframe};
