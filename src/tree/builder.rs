use super::Id3;


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for growing a tree.
///
/// # Example
///
/// ```no_run
/// use id3_tree::Id3Builder;
///
/// let id3 = Id3Builder::new()
///     .attributes(["outlook", "humidity", "windy"])
///     .parallel(true)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Id3Builder {
    attributes: Option<Vec<String>>,
    parallel: bool,
    verbose: bool,
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Restrict the attributes the tree may split on.
    /// By default, every attribute column is a candidate.
    /// The names are resolved against the header when fitting.
    pub fn attributes<I, T>(mut self, names: I) -> Self
        where I: IntoIterator<Item = T>,
              T: AsRef<str>,
    {
        let names = names.into_iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        self.attributes = Some(names);
        self
    }


    /// Grow sibling subtrees in parallel on the `rayon` thread pool.
    /// The resulting tree does not depend on this flag.
    /// Default value is `false`.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }


    /// Print the training statistics.
    /// Default value is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        Id3::new(self.attributes, self.parallel, self.verbose)
    }
}
