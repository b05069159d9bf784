//! The ID3 learner and the decision tree it produces.

/// Defines the builder of `Id3`.
pub mod builder;
/// Defines the ID3 tree growing algorithm.
pub mod id3;
/// Defines the classifier produced by `Id3`.
pub mod classifier;

/// Defines the inner representation of `Id3Classifier`.
pub mod node;


pub use builder::Id3Builder;
pub use id3::{Id3, best_attribute};
pub use classifier::Id3Classifier;
pub use node::Node;
