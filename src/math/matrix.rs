use serde::{Serialize, Deserialize};

/// Dense row-major matrix.
///
/// The nested `data` layout is the one ferrite-nn writes into model JSON, so
/// weights trained there deserialize here unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data,
        }
    }

    /// True when `rows`/`cols` agree with the stored data.
    ///
    /// Model files are hand-editable, so the declared shape is never trusted
    /// before a forward pass.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }

    /// Row-vector product `input × self`.
    ///
    /// `input` must have `rows` elements; the result has `cols` elements.
    pub fn left_mul(&self, input: &[f64]) -> Vec<f64> {
        if input.len() != self.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = vec![0.0; self.cols];
        for (x, row) in input.iter().zip(&self.data) {
            for (acc, w) in res.iter_mut().zip(row) {
                *acc += x * w;
            }
        }
        res
    }

    /// First row, or an empty slice for a matrix without rows.
    pub fn first_row(&self) -> &[f64] {
        self.data.first().map_or(&[], |row| row.as_slice())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
