//! Data structures and methods for dealing with datasets.

use std::fmt;

pub mod error;

pub use error::{DatasetError, Matrix};

/// A single item of training data.
///
/// A sample holds an input vector and an ideal (expected output) vector. Supervised learners read
/// both, while unsupervised learners only read the input. An ideal vector of length zero marks the
/// sample as unsupervised. A sample can also carry a label for identification, which learners
/// never consume.
///
/// The lengths of both vectors are fixed once the sample is built. Their values can be changed in
/// place through [`Sample::input_mut`] and [`Sample::ideal_mut`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    input: Vec<f64>,
    ideal: Vec<f64>,
    label: Option<String>,
}

impl Sample {
    /// Create a sample from its input vector, ideal vector, and label.
    ///
    /// The sample takes ownership of both vectors without copying them.
    pub fn new(input: Vec<f64>, ideal: Vec<f64>, label: Option<String>) -> Self {
        Self {
            input,
            ideal,
            label,
        }
    }

    /// Create a sample whose vectors are zero-filled with the given lengths.
    pub fn with_dimensions(n_input: usize, n_ideal: usize, label: Option<String>) -> Self {
        Self::new(vec![0.0; n_input], vec![0.0; n_ideal], label)
    }

    /// Create an unlabeled supervised sample with zero-filled vectors.
    pub fn supervised(n_input: usize, n_ideal: usize) -> Self {
        Self::with_dimensions(n_input, n_ideal, None)
    }

    /// Create an unlabeled unsupervised sample with a zero-filled input vector.
    pub fn unsupervised(n_input: usize) -> Self {
        Self::with_dimensions(n_input, 0, None)
    }

    /// Create an unsupervised sample from its input vector and label.
    pub fn from_input_labeled(input: Vec<f64>, label: Option<String>) -> Self {
        Self::new(input, Vec::new(), label)
    }

    /// Create an unlabeled unsupervised sample from its input vector.
    pub fn from_input(input: Vec<f64>) -> Self {
        Self::from_input_labeled(input, None)
    }

    /// Return the input vector.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Return the input vector for writing.
    pub fn input_mut(&mut self) -> &mut [f64] {
        &mut self.input
    }

    /// Return the ideal vector, which is empty for unsupervised samples.
    pub fn ideal(&self) -> &[f64] {
        &self.ideal
    }

    /// Return the ideal vector for writing.
    pub fn ideal_mut(&mut self) -> &mut [f64] {
        &mut self.ideal
    }

    /// Return the label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replace the label. Passing `None` removes it.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Return the length of the input vector.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Return the length of the ideal vector.
    pub fn ideal_len(&self) -> usize {
        self.ideal.len()
    }

    /// Return whether the sample has an expected output.
    pub fn is_supervised(&self) -> bool {
        !self.ideal.is_empty()
    }

    /// Return whether the sample has no expected output.
    pub fn is_unsupervised(&self) -> bool {
        self.ideal.is_empty()
    }

    /// Consume the sample, returning its input vector, ideal vector, and label.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Option<String>) {
        (self.input, self.ideal, self.label)
    }
}

impl From<Vec<f64>> for Sample {
    fn from(input: Vec<f64>) -> Self {
        Self::from_input(input)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[BasicData: input:{:?}, ideal:{:?}, label:",
            self.input, self.ideal
        )?;
        match &self.label {
            Some(label) => write!(f, "{}]", label),
            None => write!(f, "null]"),
        }
    }
}

/// Build one unlabeled sample per row of `input_data`, pairing it with the same row of
/// `ideal_data`.
///
/// The widths of the input and ideal vectors are taken from the first row of each matrix. Longer
/// rows are truncated to that width, and rows of `ideal_data` beyond the last input row are
/// ignored. Every sample owns freshly allocated vectors.
///
/// # Errors
///
/// Returns an error if `input_data` is empty, if `ideal_data` has fewer rows than `input_data`, or
/// if a row is shorter than the first row of its matrix.
pub fn convert_arrays<I, D>(input_data: &[I], ideal_data: &[D]) -> Result<Vec<Sample>, DatasetError>
where
    I: AsRef<[f64]>,
    D: AsRef<[f64]>,
{
    let n_input = input_data
        .first()
        .ok_or(DatasetError::EmptyInput)?
        .as_ref()
        .len();
    let n_ideal = ideal_data
        .first()
        .ok_or(DatasetError::MissingIdealRow { row: 0 })?
        .as_ref()
        .len();

    let mut samples = Vec::with_capacity(input_data.len());
    for (row, input) in input_data.iter().enumerate() {
        let input = leading(input.as_ref(), n_input, Matrix::Input, row)?;
        let ideal = ideal_data
            .get(row)
            .ok_or(DatasetError::MissingIdealRow { row })?;
        let ideal = leading(ideal.as_ref(), n_ideal, Matrix::Ideal, row)?;

        let mut sample = Sample::supervised(n_input, n_ideal);
        sample.input_mut().copy_from_slice(input);
        sample.ideal_mut().copy_from_slice(ideal);
        samples.push(sample);
    }
    Ok(samples)
}

fn leading(values: &[f64], width: usize, matrix: Matrix, row: usize) -> Result<&[f64], DatasetError> {
    values.get(..width).ok_or(DatasetError::ShortRow {
        matrix,
        row,
        expected: width,
        actual: values.len(),
    })
}
