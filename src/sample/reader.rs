use polars::prelude::*;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::Result;


/// The field separator used by default.
pub const DEFAULT_DELIMITER: char = ',';


/// A struct that reads a delimited text file into rows of strings.
/// The first line is kept as the header row,
/// so the result can be handed to the training phase as is.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use id3_tree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let rows = SampleReader::new()
///     .file(filename)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    delimiter: char,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }


    /// Set the field separator.
    /// Default is `','`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns its rows.
    /// Every field is trimmed and blank lines are skipped.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Vec<Vec<String>>> {
        let file = self.file
            .expect("The file name for csv is not set. Use `SampleReader::file`.");
        let file = File::open(file)?;

        let mut rows = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = line.split(self.delimiter)
                .map(|field| field.trim().to_string())
                .collect::<Vec<_>>();
            rows.push(row);
        }
        Ok(rows)
    }
}


/// Reads a comma-separated file into rows of strings.
/// This is a shorthand for `SampleReader::new().file(path).read()`.
pub fn read_csv<P>(path: P) -> Result<Vec<Vec<String>>>
    where P: AsRef<Path>
{
    SampleReader::new()
        .file(path)
        .read()
}


/// Convert `polars::DataFrame` into rows of strings.
/// The column names become the header row
/// and every cell is cast to a string.
/// A null cell becomes the empty string.
pub fn rows_from_dataframe(data: &DataFrame) -> Result<Vec<Vec<String>>> {
    let (n_sample, _) = data.shape();
    let header = data.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>();

    let mut rows = vec![Vec::with_capacity(header.len()); n_sample];
    for series in data.get_columns() {
        let series = series.cast(&DataType::Utf8)?;
        for (row, value) in rows.iter_mut().zip(series.utf8()?.into_iter()) {
            row.push(value.unwrap_or_default().to_string());
        }
    }

    let mut table = Vec::with_capacity(n_sample + 1);
    table.push(header);
    table.append(&mut rows);
    Ok(table)
}
