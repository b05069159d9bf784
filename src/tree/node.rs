//! Defines the inner representation
//! of the decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::error::{Id3Error, Result};
use crate::sample::Schema;


/// Enumeration of branch and leaf nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests an attribute.
    /// `children[i]` is the subtree for the `i`-th value
    /// in the catalog of `attribute`.
    Branch {
        /// Column index of the tested attribute.
        attribute: usize,
        /// One subtree per catalog value.
        children: Vec<Node>,
    },

    /// A node that predicts a class.
    Leaf {
        /// Index of the predicted class.
        class: usize,
    },
}


impl Node {
    /// Returns a leaf predicting `class`.
    #[inline]
    pub fn leaf(class: usize) -> Self {
        Self::Leaf { class }
    }


    /// Returns a branch over `attribute`.
    #[inline]
    pub fn branch(attribute: usize, children: Vec<Node>) -> Self {
        Self::Branch { attribute, children }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Traverse the tree with the raw `values` of a row
    /// and return the predicted class index.
    /// `row` is only used to report errors.
    pub fn predict<S>(&self, schema: &Schema, row: usize, values: &[S])
        -> Result<usize>
        where S: AsRef<str>
    {
        match self {
            Self::Leaf { class } => Ok(*class),
            Self::Branch { attribute, children } => {
                let value = values[*attribute].as_ref();
                let ix = schema.value_index(row, *attribute, value)?;
                children[ix].predict(schema, row, values)
            },
        }
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { children, .. } => {
                1 + children.iter()
                    .map(|child| child.depth())
                    .max()
                    .unwrap_or(0)
            },
        }
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { children, .. } => {
                children.iter().map(|child| child.n_leaves()).sum()
            },
        }
    }


    /// Check that every index in the subtree is valid for `schema`.
    /// `path` holds the attributes tested above this node.
    pub(crate) fn check(&self, schema: &Schema, path: &mut Vec<usize>)
        -> Result<()>
    {
        match self {
            Self::Leaf { class } => {
                if *class >= schema.n_class() {
                    return Err(Id3Error::InvalidModel(format!(
                        "leaf predicts class {class}, \
                        but there are {} classes",
                        schema.n_class(),
                    )));
                }
                Ok(())
            },
            Self::Branch { attribute, children } => {
                let attribute = *attribute;
                if attribute >= schema.n_attribute() {
                    return Err(Id3Error::InvalidModel(format!(
                        "branch tests attribute {attribute}, \
                        but there are {} attributes",
                        schema.n_attribute(),
                    )));
                }
                if path.contains(&attribute) {
                    return Err(Id3Error::InvalidModel(format!(
                        "attribute `{}` is tested twice on one path",
                        schema.attribute_name(attribute),
                    )));
                }
                let n_value = schema.attribute(attribute).len();
                if children.len() != n_value {
                    return Err(Id3Error::InvalidModel(format!(
                        "branch on `{}` has {} children for {n_value} values",
                        schema.attribute_name(attribute),
                        children.len(),
                    )));
                }

                path.push(attribute);
                for child in children {
                    child.check(schema, path)?;
                }
                path.pop();
                Ok(())
            },
        }
    }


    /// Write the subtree in the indented text form.
    pub(crate) fn write_tree(
        &self,
        f: &mut fmt::Formatter<'_>,
        schema: &Schema,
        indent: &str,
    ) -> fmt::Result
    {
        match self {
            Self::Branch { attribute, children } => {
                let name = schema.attribute_name(*attribute);
                let values = schema.attribute(*attribute).values();
                let deeper = format!("{indent}\t");
                for (value, child) in values.iter().zip(children) {
                    writeln!(f, "{indent}{name}={value}")?;
                    child.write_tree(f, schema, &deeper)?;
                }
                Ok(())
            },
            Self::Leaf { class } => {
                writeln!(f, "{indent}Class: {}", schema.class_label(*class))
            },
        }
    }


    pub(crate) fn to_dot_info(&self, schema: &Schema, id: usize)
        -> (Vec<String>, usize)
    {
        match self {
            Self::Branch { attribute, children } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{name} ?\" ];\n",
                    name = escape_dot(schema.attribute_name(*attribute)),
                )];

                let values = schema.attribute(*attribute).values();
                let mut next_id = id + 1;
                for (value, child) in values.iter().zip(children) {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(
                        schema, child_id
                    );
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                        value = escape_dot(value),
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { class } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                    label = escape_dot(schema.class_label(*class)),
                );

                (vec![info], id + 1)
            },
        }
    }
}


/// Escape a label for a double-quoted dot string.
fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
