//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::{self, File};
use std::io::prelude::*;

use crate::common::checker::*;
use crate::error::Result;
use crate::sample::Schema;
use super::node::*;


/// Decision tree classifier produced by [`Id3`](super::Id3).
/// It owns the tree and the catalogs learnt from the training rows,
/// so it can classify raw rows on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Id3Classifier {
    schema: Schema,
    root: Node,
}


impl Id3Classifier {
    /// Construct a classifier from its parts.
    #[inline]
    pub fn new(schema: Schema, root: Node) -> Self {
        Self { schema, root }
    }


    /// The catalogs used to encode rows.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// The root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Depth of the tree. A single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves of the tree.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Predict the class index of the row at position `row`.
    /// The row may carry the class column (same layout as
    /// the training rows) or stop after the attributes.
    pub fn predict_index<S>(&self, row: usize, values: &[S]) -> Result<usize>
        where S: AsRef<str>
    {
        let n_attribute = self.schema.n_attribute();
        if values.len() != n_attribute + 1 {
            check_row_length(row, values.len(), n_attribute)?;
        }
        self.root.predict(&self.schema, row, values)
    }


    /// Predict the class label of a single row.
    pub fn classify<S>(&self, values: &[S]) -> Result<&str>
        where S: AsRef<str>
    {
        self.predict_index(0, values)
            .map(|class| self.schema.class_label(class))
    }


    /// Predict the class label of every data row of `rows`, in order.
    /// If `has_header` is `true`, `rows[0]` is skipped.
    /// Errors report the position of the row within `rows`.
    pub fn classify_rows<S>(&self, rows: &[Vec<S>], has_header: bool)
        -> Result<Vec<String>>
        where S: AsRef<str>
    {
        let skip = usize::from(has_header);
        rows.iter()
            .enumerate()
            .skip(skip)
            .map(|(row, values)| {
                self.predict_index(row, values)
                    .map(|class| self.schema.class_label(class).to_string())
            })
            .collect()
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(&self.schema, 0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Serialize the classifier to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }


    /// Deserialize a classifier from a JSON string.
    /// The tree is checked against the catalogs before it is returned,
    /// so a loaded classifier never indexes out of its catalogs.
    pub fn from_json(json: &str) -> Result<Self> {
        let classifier: Self = serde_json::from_str(json)?;
        classifier.check()?;
        Ok(classifier)
    }


    fn check(&self) -> Result<()> {
        self.schema.check_layout()?;
        self.root.check(&self.schema, &mut Vec::new())
    }


    /// Write the classifier to `path` as JSON.
    pub fn save<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }


    /// Read a classifier written by [`Id3Classifier::save`].
    pub fn load<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}


/// The indented text form of the tree.
/// Each branch value is printed as `attribute=value`
/// followed by its subtree indented by one more tab,
/// and each leaf as `Class: label`.
impl fmt::Display for Id3Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_tree(f, &self.schema, "")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Id3Error;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    // B=m -> yes, B=n -> (A=x -> no, A=y -> yes)
    fn classifier() -> Id3Classifier {
        let rows = rows(&[
            &["A", "B", "cls"],
            &["x", "m", "yes"],
            &["x", "n", "no"],
            &["y", "m", "yes"],
            &["y", "n", "yes"],
        ]);
        let schema = Schema::from_rows(&rows).unwrap();
        let root = Node::branch(1, vec![
            Node::leaf(0),
            Node::branch(0, vec![Node::leaf(1), Node::leaf(0)]),
        ]);
        Id3Classifier::new(schema, root)
    }

    #[test]
    fn classify_single_rows() {
        let f = classifier();
        assert_eq!(f.classify(&["x", "n", "yes"]).unwrap(), "no");
        assert_eq!(f.classify(&["y", "n"]).unwrap(), "yes");
        assert_eq!(f.classify(&["x", "m"]).unwrap(), "yes");
    }

    #[test]
    fn unvisited_attributes_are_not_looked_up() {
        let f = classifier();
        // `A` is never tested on the `B=m` path.
        assert_eq!(f.classify(&["unseen", "m"]).unwrap(), "yes");
    }

    #[test]
    fn unseen_value_is_an_error() {
        let f = classifier();
        let rows = rows(&[
            &["A", "B", "cls"],
            &["x", "m", "yes"],
            &["x", "o", "yes"],
        ]);
        match f.classify_rows(&rows, true) {
            Err(Id3Error::UnknownValue { row, attribute, value }) => {
                assert_eq!(row, 2);
                assert_eq!(attribute, "B");
                assert_eq!(value, "o");
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn wrong_row_length_is_an_error() {
        let f = classifier();
        let rows = rows(&[&["x", "m", "yes"], &["x"]]);
        match f.classify_rows(&rows, false) {
            Err(Id3Error::RowLength { row, expected, found }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn classify_rows_keeps_input_order() {
        let f = classifier();
        let rows = rows(&[
            &["A", "B", "cls"],
            &["y", "n", "?"],
            &["x", "n", "?"],
            &["x", "m", "?"],
        ]);
        let labels = f.classify_rows(&rows, true).unwrap();
        assert_eq!(labels, vec!["yes", "no", "yes"]);
    }

    #[test]
    fn display_indents_by_depth() {
        let f = classifier();
        let expected = "\
            B=m\n\
            \tClass: yes\n\
            B=n\n\
            \tA=x\n\
            \t\tClass: no\n\
            \tA=y\n\
            \t\tClass: yes\n\
        ";
        assert_eq!(f.to_string(), expected);
        assert_eq!(f.depth(), 2);
        assert_eq!(f.n_leaves(), 3);
    }

    #[test]
    fn json_round_trip_keeps_predictions() {
        let f = classifier();
        let back = Id3Classifier::from_json(&f.to_json().unwrap()).unwrap();

        assert_eq!(back, f);
        assert_eq!(back.classify(&["x", "n"]).unwrap(), "no");
    }

    fn assert_invalid(json: &str) {
        match Id3Classifier::from_json(json) {
            Err(Id3Error::InvalidModel(_)) => {},
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_leaf_is_rejected() {
        let json = classifier().to_json().unwrap();
        let tampered = json.replacen("\"class\": 1", "\"class\": 7", 1);
        assert_ne!(tampered, json);
        assert_invalid(&tampered);
    }

    #[test]
    fn repeated_catalog_value_is_rejected() {
        let json = classifier().to_json().unwrap()
            .split_whitespace()
            .collect::<String>();
        let tampered = json.replacen(r#"["x","y"]"#, r#"["x","x"]"#, 1);
        assert_ne!(tampered, json);
        assert!(matches!(
            Id3Classifier::from_json(&tampered),
            Err(Id3Error::Json(_))
        ));
    }

    #[test]
    fn inconsistent_trees_are_rejected() {
        let schema = classifier().schema().clone();
        let broken = [
            // too few children for `B`
            Node::branch(1, vec![Node::leaf(0)]),
            // no attribute 5
            Node::branch(5, vec![Node::leaf(0), Node::leaf(1)]),
            // `B` tested twice
            Node::branch(1, vec![
                Node::leaf(0),
                Node::branch(1, vec![Node::leaf(1), Node::leaf(0)]),
            ]),
        ];
        for root in broken {
            let json = Id3Classifier::new(schema.clone(), root)
                .to_json()
                .unwrap();
            assert_invalid(&json);
        }
    }

    #[test]
    fn quotes_are_escaped_in_dot_labels() {
        let rows = rows(&[
            &["size", "cls"],
            &["5\"", "yes"],
            &["3\"", "no"],
        ]);
        let schema = Schema::from_rows(&rows).unwrap();
        let root = Node::branch(0, vec![Node::leaf(0), Node::leaf(1)]);
        let f = Id3Classifier::new(schema, root);

        let mut path = std::env::temp_dir();
        path.push(format!("id3-escaped-{}.dot", std::process::id()));
        f.to_dot_file(&path).unwrap();
        let dot = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(dot.contains("node_0 -- node_1 [ label = \"5\\\"\" ];"));
    }

    #[test]
    fn dot_file_lists_every_node() {
        let f = classifier();
        let mut path = std::env::temp_dir();
        path.push(format!("id3-classifier-{}.dot", std::process::id()));

        f.to_dot_file(&path).unwrap();
        let dot = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.contains("node_0 [ label = \"B ?\" ];"));
        assert!(dot.contains("node_0 -- node_1 [ label = \"m\" ];"));
        assert!(dot.contains("node_0 -- node_2 [ label = \"n\" ];"));
        assert!(dot.contains("node_4 [ label = \"yes\", shape = box ];"));
        assert_eq!(dot.matches("shape = box").count(), 3);
    }
}
