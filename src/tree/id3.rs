use colored::Colorize;
use fixedbitset::FixedBitSet;
use rayon::prelude::*;

use std::fmt;
use std::time::Instant;

use crate::error::{Id3Error, Result};
use crate::sample::{Dataset, Schema};
use super::{
    node::Node,
    classifier::Id3Classifier,
};


const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// The ID3 algorithm (Iterative Dichotomiser 3).
/// Given training rows over categorical attributes,
/// [`Id3`] grows a decision tree that splits, at every node,
/// on the remaining attribute of maximal information gain,
/// and outputs it as an [`Id3Classifier`].
///
/// [`Id3`] is constructed
/// by [`Id3Builder`](super::Id3Builder).
///
/// # Example
/// ```no_run
/// use id3_tree::{Id3Builder, SampleReader};
///
/// let train = SampleReader::new()
///     .file("/path/to/train.csv")
///     .read()
///     .unwrap();
/// let test = SampleReader::new()
///     .file("/path/to/test.csv")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new()
///     .verbose(true)
///     .build();
/// let f = id3.fit(&train).unwrap();
/// println!("{f}");
///
/// let predictions = f.classify_rows(&test, true).unwrap();
/// for label in predictions {
///     println!("{label}");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3 {
    attributes: Option<Vec<String>>,
    parallel: bool,
    verbose: bool,
}


impl Id3 {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(
        attributes: Option<Vec<String>>,
        parallel: bool,
        verbose: bool,
    ) -> Self
    {
        Self { attributes, parallel, verbose }
    }


    /// Learn a decision tree from `rows`.
    /// `rows[0]` is the header, the last column is the class.
    pub fn fit<S>(&self, rows: &[Vec<S>]) -> Result<Id3Classifier>
        where S: AsRef<str>
    {
        let schema = Schema::from_rows(rows)?;
        let examples = schema.encode_rows(rows)?;
        if examples.is_empty() {
            return Err(Id3Error::NoExamples);
        }
        let remaining = self.candidates(&schema)?;

        if self.verbose {
            self.print_stats(&schema, examples.len(), &remaining);
        }

        let now = Instant::now();
        let root = {
            let dataset = Dataset::new(&schema, &examples);
            self.grow(&dataset, &remaining)
        };
        let time = now.elapsed().as_millis();

        let f = Id3Classifier::new(schema, root);
        if self.verbose {
            println!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
                 + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
                 + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
                 {:=^FULL_WIDTH$}",
                "Depth".bold(),
                f.depth().to_string().bold().yellow(),
                "# of leaves".bold(),
                f.n_leaves().to_string().bold().yellow(),
                "Time (ms)".bold(),
                time.to_string().bold().cyan(),
                "",
            );
        }
        Ok(f)
    }


    /// The attributes a split may use at the root.
    fn candidates(&self, schema: &Schema) -> Result<FixedBitSet> {
        let n_attribute = schema.n_attribute();
        let mut remaining = FixedBitSet::with_capacity(n_attribute);
        match &self.attributes {
            None => { remaining.insert_range(..); },
            Some(names) => {
                for name in names {
                    let col = schema.attribute_index(name)
                        .ok_or_else(|| Id3Error::UnknownAttribute(name.clone()))?;
                    remaining.insert(col);
                }
            },
        }
        Ok(remaining)
    }


    /// Grow the subtree for `dataset`.
    /// `remaining` holds the attributes not yet tested
    /// on the path from the root.
    ///
    /// `dataset` should not be empty,
    /// an empty child is turned into a leaf by its parent.
    /// Every index in `remaining` must be an attribute of the schema,
    /// [`Id3::fit`] builds such a set from the header.
    pub(crate) fn grow(&self, dataset: &Dataset<'_>, remaining: &FixedBitSet)
        -> Node
    {
        if dataset.is_perfectly_classified() {
            let class = dataset.examples()
                .first()
                .map(|example| example.class())
                .unwrap_or_else(|| dataset.majority_class());
            return Node::leaf(class);
        }

        let attribute = match best_attribute(dataset, remaining) {
            Some(attribute) => attribute,
            None => return Node::leaf(dataset.majority_class()),
        };

        let subsets = dataset.split_by_attribute(attribute);
        let mut remaining = remaining.clone();
        remaining.set(attribute, false);

        // The majority of this node labels its empty children.
        let majority = dataset.majority_class();
        let grow_child = |subset: &Dataset<'_>| {
            if subset.is_empty() {
                Node::leaf(majority)
            } else {
                self.grow(subset, &remaining)
            }
        };

        let children = if self.parallel {
            subsets.par_iter().map(grow_child).collect()
        } else {
            subsets.iter().map(grow_child).collect()
        };

        Node::branch(attribute, children)
    }


    /// print current settings.
    fn print_stats(
        &self,
        schema: &Schema,
        n_sample: usize,
        remaining: &FixedBitSet,
    )
    {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        let mode = if self.parallel { "parallel" } else { "sequential" };
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Learner".bold(),
            "ID3".bold().green(),
            "# of examples".bold(),
            n_sample.to_string().bold().yellow(),
            "# of attributes".bold(),
            remaining.count_ones(..).to_string().bold().yellow(),
            "# of classes".bold(),
            schema.n_class().to_string().bold().yellow(),
            "Growth".bold(),
            mode.bold().green(),
        );
    }
}


/// The attribute in `remaining` of maximal information gain.
/// Attributes are scanned in increasing column order and
/// only a strictly larger gain replaces the current best,
/// so the first maximal attribute wins.
/// Indices past the last attribute of the schema are ignored.
/// Returns `None` if no attribute remains.
pub fn best_attribute(dataset: &Dataset<'_>, remaining: &FixedBitSet)
    -> Option<usize>
{
    let n_attribute = dataset.schema().n_attribute();
    let mut best: Option<(usize, f64)> = None;
    for attribute in remaining.ones().take_while(|&col| col < n_attribute) {
        let gain = dataset.information_gain(attribute);
        match best {
            Some((_, best_gain)) if gain <= best_gain => {},
            _ => { best = Some((attribute, gain)); },
        }
    }
    best.map(|(attribute, _)| attribute)
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = match &self.attributes {
            None => "all".to_string(),
            Some(names) => names.join(", "),
        };
        write!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Attributes: {attributes}\n\
            - Parallel: {}\n\
            ----------\
            ",
            self.parallel,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Example;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn encode(rows: &[Vec<String>]) -> (Schema, Vec<Example>) {
        let schema = Schema::from_rows(rows).unwrap();
        let examples = schema.encode_rows(rows).unwrap();
        (schema, examples)
    }

    fn all_attributes(schema: &Schema) -> FixedBitSet {
        let mut remaining = FixedBitSet::with_capacity(schema.n_attribute());
        remaining.insert_range(..);
        remaining
    }

    #[test]
    fn pure_dataset_is_a_single_leaf() {
        let rows = rows(&[
            &["A", "B", "C", "cls"],
            &["x", "m", "p", "yes"],
            &["y", "n", "q", "yes"],
            &["z", "m", "q", "yes"],
        ]);
        let (schema, examples) = encode(&rows);
        let dataset = Dataset::new(&schema, &examples);

        let id3 = Id3::new(None, false, false);
        let root = id3.grow(&dataset, &all_attributes(&schema));
        assert_eq!(root, Node::leaf(0));
    }

    #[test]
    fn no_attribute_left_gives_the_majority() {
        let rows = rows(&[
            &["A", "cls"],
            &["x", "yes"],
            &["y", "no"],
            &["x", "yes"],
            &["y", "yes"],
        ]);
        let (schema, examples) = encode(&rows);
        let dataset = Dataset::new(&schema, &examples);

        let id3 = Id3::new(None, false, false);
        let root = id3.grow(&dataset, &FixedBitSet::with_capacity(1));
        assert_eq!(root, Node::leaf(0));
        assert_eq!(schema.class_label(0), "yes");
    }

    #[test]
    fn separating_attribute_is_chosen() {
        // `A` says nothing about the class, `B` decides it.
        let rows = rows(&[
            &["A", "B", "cls"],
            &["x", "m", "yes"],
            &["x", "n", "no"],
            &["y", "m", "yes"],
            &["y", "n", "no"],
        ]);
        let (schema, examples) = encode(&rows);
        let dataset = Dataset::new(&schema, &examples);

        assert_eq!(dataset.information_gain(0), 0f64);
        assert_eq!(dataset.information_gain(1), 1f64);
        assert_eq!(best_attribute(&dataset, &all_attributes(&schema)), Some(1));

        let id3 = Id3::new(None, false, false);
        let root = id3.grow(&dataset, &all_attributes(&schema));
        assert_eq!(root, Node::branch(1, vec![Node::leaf(0), Node::leaf(1)]));
    }

    #[test]
    fn equal_gains_go_to_the_first_attribute() {
        // `A` and `B` are mirror images of each other,
        // both have the gain 0.311...
        let rows = rows(&[
            &["A", "B", "cls"],
            &["x", "m", "yes"],
            &["x", "n", "no"],
            &["y", "m", "yes"],
            &["y", "n", "yes"],
        ]);
        let (schema, examples) = encode(&rows);
        let dataset = Dataset::new(&schema, &examples);

        let gain_a = dataset.information_gain(0);
        let gain_b = dataset.information_gain(1);
        assert_eq!(gain_a, gain_b);
        assert!(gain_a > 0.3 && gain_a < 0.32);

        assert_eq!(best_attribute(&dataset, &all_attributes(&schema)), Some(0));

        let mut only_b = FixedBitSet::with_capacity(2);
        only_b.insert(1);
        assert_eq!(best_attribute(&dataset, &only_b), Some(1));
        assert_eq!(best_attribute(&dataset, &FixedBitSet::with_capacity(2)), None);

        let mut past_the_end = FixedBitSet::with_capacity(8);
        past_the_end.insert_range(1..8);
        assert_eq!(best_attribute(&dataset, &past_the_end), Some(1));
        past_the_end.set(1, false);
        assert_eq!(best_attribute(&dataset, &past_the_end), None);
    }

    #[test]
    fn empty_children_take_the_parent_majority() {
        // `z` only shows up with `B=m`, so it is in the catalog
        // but never reaches the `B=n` subtree.
        let rows = rows(&[
            &["A", "B", "cls"],
            &["x", "m", "no"],
            &["x", "m", "no"],
            &["x", "m", "no"],
            &["y", "m", "no"],
            &["z", "m", "no"],
            &["x", "n", "yes"],
            &["x", "n", "yes"],
            &["y", "n", "no"],
        ]);
        let (schema, examples) = encode(&rows);
        let dataset = Dataset::new(&schema, &examples);
        assert!(dataset.information_gain(1) > dataset.information_gain(0));

        let id3 = Id3::new(None, false, false);
        let root = id3.grow(&dataset, &all_attributes(&schema));

        let expected = Node::branch(1, vec![
            Node::leaf(0),
            Node::branch(0, vec![
                Node::leaf(1),
                Node::leaf(0),
                // empty: majority of the `B=n` node (`yes`)
                Node::leaf(1),
            ]),
        ]);
        assert_eq!(root, expected);
    }

    #[test]
    fn parallel_growth_gives_the_same_tree() {
        let rows = rows(&[
            &["outlook", "temp", "humidity", "windy", "play"],
            &["sunny", "hot", "high", "false", "no"],
            &["sunny", "hot", "high", "true", "no"],
            &["overcast", "hot", "high", "false", "yes"],
            &["rainy", "mild", "high", "false", "yes"],
            &["rainy", "cool", "normal", "false", "yes"],
            &["rainy", "cool", "normal", "true", "no"],
            &["overcast", "cool", "normal", "true", "yes"],
            &["sunny", "mild", "high", "false", "no"],
            &["sunny", "cool", "normal", "false", "yes"],
            &["rainy", "mild", "normal", "false", "yes"],
            &["sunny", "mild", "normal", "true", "yes"],
            &["overcast", "mild", "high", "true", "yes"],
            &["overcast", "hot", "normal", "false", "yes"],
            &["rainy", "mild", "high", "true", "no"],
        ]);
        let sequential = Id3::new(None, false, false).fit(&rows).unwrap();
        let parallel = Id3::new(None, true, false).fit(&rows).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn restricted_attributes() {
        let rows = rows(&[
            &["A", "B", "cls"],
            &["x", "m", "yes"],
            &["x", "n", "no"],
            &["y", "m", "yes"],
            &["y", "n", "no"],
        ]);
        let id3 = Id3::new(Some(vec!["A".to_string()]), false, false);
        let f = id3.fit(&rows).unwrap();
        assert_eq!(f.root(), &Node::branch(0, vec![Node::leaf(0), Node::leaf(0)]));

        let id3 = Id3::new(Some(vec!["C".to_string()]), false, false);
        assert!(matches!(id3.fit(&rows), Err(Id3Error::UnknownAttribute(_))));
    }

    #[test]
    fn header_only_has_no_examples() {
        let rows = rows(&[&["A", "cls"]]);
        let id3 = Id3::new(None, false, false);
        assert!(matches!(id3.fit(&rows), Err(Id3Error::NoExamples)));
    }
}
