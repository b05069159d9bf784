#![warn(missing_docs)]

//!
//! A crate that learns decision trees over categorical data
//! with the ID3 algorithm.
//!
//! ID3 grows the tree top-down.
//! At each node it splits the examples on the attribute
//! that maximizes the information gain
//! (the reduction of the Shannon entropy of the class distribution),
//! creating one child per value of that attribute,
//! until the examples of a node share one class
//! or no attribute is left.
//!
//! The training data is a list of rows of strings.
//! The first row is the header and the last column is the class.
//!
//! ```no_run
//! use id3_tree::{Id3Builder, read_csv};
//!
//! let train = read_csv("/path/to/train.csv").unwrap();
//! let test = read_csv("/path/to/test.csv").unwrap();
//!
//! let f = Id3Builder::new()
//!     .build()
//!     .fit(&train)
//!     .unwrap();
//! print!("{f}");
//!
//! for label in f.classify_rows(&test, true).unwrap() {
//!     println!("{label}");
//! }
//! ```

pub mod error;
pub mod sample;
pub mod tree;
pub mod trainer;
pub mod research;
pub mod prelude;

pub(crate) mod common;


pub use error::{Id3Error, Result};

pub use sample::{
    LabelCatalog,
    Schema,
    Example,
    Dataset,
    SampleReader,
    read_csv,
    rows_from_dataframe,
};

pub use tree::{
    Id3,
    Id3Builder,
    Id3Classifier,
    Node,
};

pub use trainer::Id3Trainer;
