//! A train-then-classify wrapper around [`Id3`].
use crate::error::{Id3Error, Result};
use crate::tree::{Id3, Id3Builder, Id3Classifier};


/// Keeps the most recently trained tree.
/// Classifying before any training is an [`Id3Error::NotTrained`].
///
/// # Example
/// ```no_run
/// use id3_tree::{Id3Trainer, read_csv};
///
/// let train = read_csv("/path/to/train.csv").unwrap();
/// let test = read_csv("/path/to/test.csv").unwrap();
///
/// let mut trainer = Id3Trainer::default();
/// trainer.train(&train).unwrap();
/// trainer.print_tree().unwrap();
/// for label in trainer.classify(&test).unwrap() {
///     println!("{label}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Id3Trainer {
    id3: Id3,
    classifier: Option<Id3Classifier>,
}


impl Id3Trainer {
    /// Construct a trainer that grows trees with `id3`.
    pub fn new(id3: Id3) -> Self {
        Self { id3, classifier: None }
    }


    /// Learn a tree from `rows` (header first, class last),
    /// replacing the previous one.
    /// On failure the previous tree is kept.
    pub fn train<S>(&mut self, rows: &[Vec<S>]) -> Result<()>
        where S: AsRef<str>
    {
        let f = self.id3.fit(rows)?;
        self.classifier = Some(f);
        Ok(())
    }


    /// Predict a class label for each data row of `rows`.
    /// `rows[0]` is a header and is skipped.
    pub fn classify<S>(&self, rows: &[Vec<S>]) -> Result<Vec<String>>
        where S: AsRef<str>
    {
        self.classifier()?.classify_rows(rows, true)
    }


    /// The trained classifier.
    pub fn classifier(&self) -> Result<&Id3Classifier> {
        self.classifier.as_ref().ok_or(Id3Error::NotTrained)
    }


    /// Returns `true` once a tree has been trained.
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.classifier.is_some()
    }


    /// The indented text form of the trained tree.
    pub fn tree_string(&self) -> Result<String> {
        Ok(self.classifier()?.to_string())
    }


    /// Print the trained tree to the standard output.
    pub fn print_tree(&self) -> Result<()> {
        print!("{}", self.tree_string()?);
        Ok(())
    }
}


impl Default for Id3Trainer {
    fn default() -> Self {
        Self::new(Id3Builder::new().build())
    }
}
