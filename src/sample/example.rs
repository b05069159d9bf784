/// A training example encoded through the catalogs of a
/// [`Schema`](super::Schema):
/// one value index per attribute and the class index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    attributes: Vec<usize>,
    class: usize,
}


impl Example {
    /// Construct a new example from resolved indices.
    #[inline]
    pub fn new(attributes: Vec<usize>, class: usize) -> Self {
        Self { attributes, class }
    }


    /// The value index of attribute `col`.
    #[inline]
    pub fn attribute(&self, col: usize) -> usize {
        self.attributes[col]
    }


    /// All value indices, in column order.
    #[inline]
    pub fn attributes(&self) -> &[usize] {
        &self.attributes[..]
    }


    /// The class index.
    #[inline]
    pub fn class(&self) -> usize {
        self.class
    }
}
