//! Exports the learner, the classifier, and the data types.
//!
pub use crate::tree::{
    // Learner
    Id3,
    Id3Builder,

    // Output
    Id3Classifier,
    Node,
};


pub use crate::sample::{
    // Catalogs and examples
    LabelCatalog,
    Schema,
    Example,
    Dataset,

    // Readers
    SampleReader,
    read_csv,
    rows_from_dataframe,
};


pub use crate::trainer::Id3Trainer;
pub use crate::error::Id3Error;
