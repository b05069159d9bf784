//! Value catalogs for categorical columns.
//!
//! Every column of the training rows (attributes and the class)
//! gets a [`LabelCatalog`] that numbers its distinct values
//! in order of first appearance.
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::common::checker::*;
use crate::error::{Id3Error, Result};
use super::example::Example;


/// An ordered set of the distinct values of a column.
/// The index of a value is the position where it was first seen,
/// and it never changes once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelCatalog {
    values: Vec<String>,
    index: HashMap<String, usize>,
}


impl LabelCatalog {
    /// Returns the index of `value`, assigning the next free one
    /// if `value` is new.
    fn insert(&mut self, value: &str) -> usize {
        if let Some(&ix) = self.index.get(value) {
            return ix;
        }
        let ix = self.values.len();
        self.values.push(value.to_string());
        self.index.insert(value.to_string(), ix);
        ix
    }


    /// Returns the index assigned to `value`, if it was seen.
    #[inline]
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }


    /// Returns the value at position `ix`.
    #[inline]
    pub fn label(&self, ix: usize) -> Option<&str> {
        self.values.get(ix).map(|s| s.as_str())
    }


    /// Number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if no value was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// The values in index order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }
}


impl<S> FromIterator<S> for LabelCatalog
    where S: AsRef<str>
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = S>
    {
        let mut catalog = Self::default();
        for value in iter {
            catalog.insert(value.as_ref());
        }
        catalog
    }
}


/// Rebuild a catalog from its values in index order.
/// A repeated value is rejected since it would shift every later index.
impl TryFrom<Vec<String>> for LabelCatalog {
    type Error = Id3Error;

    fn try_from(values: Vec<String>) -> Result<Self> {
        let n_value = values.len();
        let catalog = values.into_iter().collect::<LabelCatalog>();
        if catalog.len() != n_value {
            return Err(Id3Error::InvalidModel(format!(
                "catalog {:?} repeats a value", catalog.values
            )));
        }
        Ok(catalog)
    }
}


impl From<LabelCatalog> for Vec<String> {
    fn from(catalog: LabelCatalog) -> Self {
        catalog.values
    }
}


/// The column layout learnt from the training rows:
/// the header names, one catalog per attribute,
/// and the catalog of the class column (the last one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    names: Vec<String>,
    attributes: Vec<LabelCatalog>,
    classes: LabelCatalog,
}


impl Schema {
    /// Build the catalogs from `rows`.
    /// `rows[0]` is the header and is only used for the column names.
    pub fn from_rows<S>(rows: &[Vec<S>]) -> Result<Self>
        where S: AsRef<str>
    {
        let n_column = check_training_rows(rows)?;
        let names = rows[0].iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();

        let data = &rows[1..];
        let mut catalogs = (0..n_column)
            .map(|col| {
                data.iter()
                    .map(|row| row[col].as_ref())
                    .collect::<LabelCatalog>()
            })
            .collect::<Vec<_>>();

        let classes = catalogs.pop()
            .expect("at least two columns were checked above");

        Ok(Self { names, attributes: catalogs, classes })
    }


    /// Encode the data rows of `rows` (header skipped) into examples.
    pub fn encode_rows<S>(&self, rows: &[Vec<S>]) -> Result<Vec<Example>>
        where S: AsRef<str>
    {
        rows.iter()
            .enumerate()
            .skip(1)
            .map(|(row, values)| self.encode(row, values))
            .collect()
    }


    /// Encode a single labelled row.
    /// `row` is only used to report errors.
    pub fn encode<S>(&self, row: usize, values: &[S]) -> Result<Example>
        where S: AsRef<str>
    {
        check_row_length(row, values.len(), self.n_column())?;

        let n_attribute = self.n_attribute();
        let attributes = (0..n_attribute)
            .map(|col| self.value_index(row, col, values[col].as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let label = values[n_attribute].as_ref();
        let class = self.classes.index_of(label)
            .ok_or_else(|| Id3Error::UnknownValue {
                row,
                attribute: self.class_name().to_string(),
                value: label.to_string(),
            })?;

        Ok(Example::new(attributes, class))
    }


    /// Look `value` up in the catalog of attribute `col`.
    pub fn value_index(&self, row: usize, col: usize, value: &str)
        -> Result<usize>
    {
        self.attributes[col].index_of(value)
            .ok_or_else(|| Id3Error::UnknownValue {
                row,
                attribute: self.names[col].clone(),
                value: value.to_string(),
            })
    }


    /// Number of attribute columns (the class column excluded).
    #[inline]
    pub fn n_attribute(&self) -> usize {
        self.attributes.len()
    }


    /// Number of columns including the class.
    #[inline]
    pub fn n_column(&self) -> usize {
        self.attributes.len() + 1
    }


    /// Number of distinct classes.
    #[inline]
    pub fn n_class(&self) -> usize {
        self.classes.len()
    }


    /// The catalog of attribute `col`.
    #[inline]
    pub fn attribute(&self, col: usize) -> &LabelCatalog {
        &self.attributes[col]
    }


    /// The header name of attribute `col`.
    #[inline]
    pub fn attribute_name(&self, col: usize) -> &str {
        &self.names[col]
    }


    /// Position of the attribute named `name`.
    /// The class column is not an attribute.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.names[..self.n_attribute()].iter()
            .position(|n| n == name)
    }


    /// The catalog of the class column.
    #[inline]
    pub fn classes(&self) -> &LabelCatalog {
        &self.classes
    }


    /// The header name of the class column.
    #[inline]
    pub fn class_name(&self) -> &str {
        &self.names[self.n_attribute()]
    }


    /// Check that the header covers every attribute and the class.
    pub(crate) fn check_layout(&self) -> Result<()> {
        if self.names.len() != self.n_column() {
            return Err(Id3Error::InvalidModel(format!(
                "{} column names for {} attributes and the class",
                self.names.len(),
                self.n_attribute(),
            )));
        }
        Ok(())
    }


    /// The label of class `ix`.
    /// Panics if `ix` is not a valid class index.
    #[inline]
    pub fn class_label(&self, ix: usize) -> &str {
        self.classes.label(ix)
            .unwrap_or_else(|| panic!("class index {ix} is out of range"))
    }
}
