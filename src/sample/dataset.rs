//! Defines `Dataset`, the set of examples reaching a tree node.
use super::{
    catalog::Schema,
    example::Example,
};


/// A subset of the training examples together with
/// a shared reference to the catalogs they were encoded with.
///
/// A `Dataset` is never modified after construction.
/// [`Dataset::split_by_attribute`] returns new datasets that share
/// the schema and own disjoint subsets of the examples.
#[derive(Debug, Clone)]
pub struct Dataset<'a> {
    schema: &'a Schema,
    examples: Vec<&'a Example>,
}


impl<'a> Dataset<'a> {
    /// Construct the root dataset over all `examples`.
    pub fn new(schema: &'a Schema, examples: &'a [Example]) -> Self {
        let examples = examples.iter().collect();
        Self { schema, examples }
    }


    /// The schema shared by every dataset split from the root.
    #[inline]
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }


    /// The examples in this dataset.
    #[inline]
    pub fn examples(&self) -> &[&'a Example] {
        &self.examples[..]
    }


    /// Number of examples.
    #[inline]
    pub fn size(&self) -> usize {
        self.examples.len()
    }


    /// Returns `true` if there is no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }


    /// Number of examples per class index.
    /// The length is the number of classes in the schema.
    pub fn class_frequencies(&self) -> Vec<usize> {
        let mut frequencies = vec![0_usize; self.schema.n_class()];
        for example in self.examples.iter() {
            frequencies[example.class()] += 1;
        }
        frequencies
    }


    /// Shannon entropy (in bits) of the class distribution.
    /// The entropy of an empty dataset is `0`.
    pub fn entropy(&self) -> f64 {
        entropy(&self.class_frequencies(), self.size())
    }


    /// Returns `true` if all examples share one class.
    /// An empty dataset is trivially perfectly classified.
    pub fn is_perfectly_classified(&self) -> bool {
        match self.examples.split_first() {
            None => true,
            Some((first, rest)) => {
                rest.iter().all(|ex| ex.class() == first.class())
            },
        }
    }


    /// The class index with the highest frequency.
    /// Ties go to the smallest class index.
    /// An empty dataset has no majority, `0` is returned in that case.
    pub fn majority_class(&self) -> usize {
        let mut majority = 0_usize;
        let mut highest = 0_usize;
        for (class, freq) in self.class_frequencies().into_iter().enumerate() {
            if freq > highest {
                majority = class;
                highest = freq;
            }
        }
        majority
    }


    /// Split the examples by their value at `attribute`.
    /// The `i`-th dataset holds the examples whose value is
    /// the `i`-th entry of the attribute's catalog.
    /// Values without examples yield empty datasets.
    pub fn split_by_attribute(&self, attribute: usize) -> Vec<Dataset<'a>> {
        let n_value = self.schema.attribute(attribute).len();
        let mut subsets = vec![Vec::new(); n_value];
        for &example in self.examples.iter() {
            subsets[example.attribute(attribute)].push(example);
        }

        subsets.into_iter()
            .map(|examples| Self { schema: self.schema, examples })
            .collect()
    }


    /// The reduction of entropy obtained by splitting on `attribute`:
    /// `H(D) - Σ_v |D_v| / |D| * H(D_v)`.
    pub fn information_gain(&self, attribute: usize) -> f64 {
        let n_value = self.schema.attribute(attribute).len();
        let n_class = self.schema.n_class();

        // table[v][c] = # of examples with value `v` and class `c`.
        let mut table = vec![vec![0_usize; n_class]; n_value];
        for example in self.examples.iter() {
            table[example.attribute(attribute)][example.class()] += 1;
        }

        let n_sample = self.size() as f64;
        let remainder = table.iter()
            .map(|frequencies| {
                let size = frequencies.iter().sum::<usize>();
                if size == 0 {
                    0f64
                } else {
                    (size as f64 / n_sample) * entropy(frequencies, size)
                }
            })
            .sum::<f64>();

        self.entropy() - remainder
    }
}


/// Entropy of a class histogram whose total is `size`.
fn entropy(frequencies: &[usize], size: usize) -> f64 {
    if size == 0 {
        return 0f64;
    }
    let size = size as f64;
    -frequencies.iter()
        .map(|&freq| xlogx(freq as f64 / size))
        .sum::<f64>()
}


/// `x * log2(x)` with `0 * log2(0) = 0`.
#[inline(always)]
fn xlogx(x: f64) -> f64 {
    if x == 0f64 { 0f64 } else { x * x.log2() }
}
