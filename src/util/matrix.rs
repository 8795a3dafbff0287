//! A dense integer matrix stored row by row.

use std::{fmt, str::FromStr};

use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::value::big_int::BigInt,
    util::{
        num::i64_mul_checked,
        words::{TokenListener, scan},
    },
};

/// A fixed-size `rows x cols` matrix of `i64`, stored row-major.
///
/// Elements are addressed with a single `(row, col)` pair. Every access is
/// bounds-checked and reports `RuntimeError::IndexOutOfBounds` instead of
/// panicking. Two matrices are equal when their dimensions and all their
/// elements are equal.
///
/// # Example
/// ```
/// use longcalc::util::matrix::Matrix;
///
/// let mut m: Matrix = "1 0 4\n0 2 -3".parse().unwrap();
/// assert_eq!((m.rows(), m.cols()), (2, 3));
///
/// m.scale(2).unwrap();
/// assert_eq!(m.get(1, 2).unwrap(), -6);
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows,
               cols,
               data: vec![0; rows * cols] }
    }

    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidArgument` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> EvalResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().position(|row| row.len() != cols) {
            return Err(RuntimeError::InvalidArgument { details:
                                                           format!("row {ragged} has {} columns, expected {cols}",
                                                                   rows[ragged].len()) });
        }

        Ok(Self { rows: rows.len(),
                  cols,
                  data: rows.into_iter().flatten().collect() })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    fn index_of(&self, row: usize, col: usize) -> EvalResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(RuntimeError::IndexOutOfBounds { row,
                                                        col,
                                                        rows: self.rows,
                                                        cols: self.cols });
        }
        Ok(row * self.cols + col)
    }

    /// Reads the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `RuntimeError::IndexOutOfBounds` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> EvalResult<i64> {
        self.index_of(row, col).map(|index| self.data[index])
    }

    /// Borrows the element at `(row, col)` for writing.
    ///
    /// # Errors
    /// Returns `RuntimeError::IndexOutOfBounds` outside the matrix.
    pub fn get_mut(&mut self, row: usize, col: usize) -> EvalResult<&mut i64> {
        let index = self.index_of(row, col)?;
        Ok(&mut self.data[index])
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `RuntimeError::IndexOutOfBounds` outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> EvalResult<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Multiplies every element by `factor` in place.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if any product leaves the `i64`
    /// range. The matrix is left untouched in that case.
    pub fn scale(&mut self, factor: i64) -> EvalResult<()> {
        self.data = self.data
                        .iter()
                        .map(|&value| i64_mul_checked(value, factor))
                        .collect::<EvalResult<_>>()?;
        Ok(())
    }
}

/// Collects the numbers of one text row.
#[derive(Default)]
struct RowCollector {
    values: Vec<i64>,
    error:  Option<RuntimeError>,
}

impl TokenListener for RowCollector {
    fn on_number(&mut self, value: i64) {
        self.values.push(value);
    }

    // Signed entries arrive as strings.
    fn on_string(&mut self, value: &str) {
        if self.error.is_some() {
            return;
        }
        match value.parse::<BigInt>().ok().and_then(|parsed| parsed.to_i64()) {
            Some(number) => self.values.push(number),
            None => {
                self.error = Some(RuntimeError::InvalidArgument { details:
                                                                      format!("'{value}' is not a 64-bit integer") });
            },
        }
    }
}

impl FromStr for Matrix {
    type Err = RuntimeError;

    /// Reads one row per non-blank line, entries separated by whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut offset = 0;

        for line in s.split_inclusive('\n') {
            let mut row = RowCollector::default();
            scan(line, &mut row).map_err(|err| match err {
                                    RuntimeError::LiteralTooLarge { position } => {
                                        RuntimeError::LiteralTooLarge { position: offset + position }
                                    },
                                    other => other,
                                })?;
            offset += line.len();

            if let Some(err) = row.error {
                return Err(err);
            }
            if !row.values.is_empty() {
                rows.push(row.values);
            }
        }

        Self::from_rows(rows)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(f, "{first}")?;
            }
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
