use crate::common::checker::*;
use crate::error::{Id3Error, Result};
use crate::tree::Id3Classifier;


/// The fraction of labelled rows that `f` classifies correctly.
/// Each row must have the full training layout (class column last).
/// If `has_header` is `true`, `rows[0]` is skipped.
///
/// A row holding a value `f` has never seen cannot be classified,
/// it counts as a misclassification.
pub fn accuracy<S>(f: &Id3Classifier, rows: &[Vec<S>], has_header: bool)
    -> Result<f64>
    where S: AsRef<str>
{
    let n_column = f.schema().n_column();
    let skip = usize::from(has_header);

    let mut n_sample = 0_usize;
    let mut n_correct = 0_usize;
    for (row, values) in rows.iter().enumerate().skip(skip) {
        check_row_length(row, values.len(), n_column)?;
        n_sample += 1;

        let label = values[n_column - 1].as_ref();
        match f.predict_index(row, values) {
            Ok(class) => {
                if f.schema().class_label(class) == label {
                    n_correct += 1;
                }
            },
            Err(Id3Error::UnknownValue { .. }) => {},
            Err(e) => return Err(e),
        }
    }

    if n_sample == 0 {
        return Err(Id3Error::NoExamples);
    }
    Ok(n_correct as f64 / n_sample as f64)
}


/// The zero-one loss, `1 - accuracy`.
pub fn zero_one_loss<S>(f: &Id3Classifier, rows: &[Vec<S>], has_header: bool)
    -> Result<f64>
    where S: AsRef<str>
{
    accuracy(f, rows, has_header).map(|acc| 1f64 - acc)
}
