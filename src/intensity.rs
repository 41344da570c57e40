//! The markers-by-points intensity matrix consumed by the redundancy filter.

use nalgebra::{DMatrix, DVectorView};

/// A markers × points intensity matrix.
///
/// Column `j` holds the marker-intensity vector of point `j`. The matrix is
/// immutable once constructed; the redundancy filter only ever reads columns
/// from it.
///
/// # Example
///
/// ```
/// use cyto_kernels::IntensityMatrix;
///
/// // Two markers, three points, column-major.
/// let matrix = IntensityMatrix::from_column_major(2, 3, &[
///     1.0, 2.0, // point 0
///     1.1, 2.1, // point 1
///     9.0, 9.0, // point 2
/// ]).unwrap();
///
/// assert_eq!(matrix.nmarkers(), 2);
/// assert_eq!(matrix.npoints(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMatrix(DMatrix<f64>);

impl IntensityMatrix {
    /// Construct an intensity matrix from column-major values.
    ///
    /// `values` must hold exactly `nmarkers * npoints` elements, one column
    /// (point) after another.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensions`] if the value buffer length does not
    /// match the requested shape.
    pub fn from_column_major(
        nmarkers: usize,
        npoints: usize,
        values: &[f64],
    ) -> Result<Self, InvalidDimensions> {
        let expected = nmarkers * npoints;
        if values.len() == expected {
            Ok(Self(DMatrix::from_column_slice(nmarkers, npoints, values)))
        } else {
            Err(InvalidDimensions {
                nmarkers,
                npoints,
                got: values.len(),
            })
        }
    }

    /// The number of markers (rows).
    #[must_use]
    pub fn nmarkers(&self) -> usize {
        self.0.nrows()
    }

    /// The number of points (columns).
    #[must_use]
    pub fn npoints(&self) -> usize {
        self.0.ncols()
    }

    /// The marker-intensity vector of point `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point >= self.npoints()`.
    #[must_use]
    pub fn column(&self, point: usize) -> DVectorView<'_, f64> {
        self.0.column(point)
    }
}

impl From<DMatrix<f64>> for IntensityMatrix {
    fn from(matrix: DMatrix<f64>) -> Self {
        Self(matrix)
    }
}

impl From<IntensityMatrix> for DMatrix<f64> {
    fn from(matrix: IntensityMatrix) -> Self {
        matrix.0
    }
}

/// The error returned when a value buffer does not match the requested
/// matrix shape.
#[derive(Debug, thiserror::Error)]
#[error("expected {} values for a {nmarkers}x{npoints} matrix (got {got})", .nmarkers * .npoints)]
pub struct InvalidDimensions {
    nmarkers: usize,
    npoints: usize,
    got: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn accepts_a_matching_value_buffer() {
        let matrix = IntensityMatrix::from_column_major(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(matrix.nmarkers(), 2);
        assert_eq!(matrix.npoints(), 2);
    }

    #[test]
    fn rejects_a_short_value_buffer() {
        assert!(IntensityMatrix::from_column_major(2, 3, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn rejects_a_long_value_buffer() {
        assert!(IntensityMatrix::from_column_major(1, 1, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn accepts_an_empty_matrix() {
        let matrix = IntensityMatrix::from_column_major(0, 0, &[]).unwrap();
        assert_eq!(matrix.npoints(), 0);
    }

    #[test]
    fn columns_are_points() {
        let matrix =
            IntensityMatrix::from_column_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let point1 = matrix.column(1);
        assert_relative_eq!(point1[0], 3.0, epsilon = f64::EPSILON);
        assert_relative_eq!(point1[1], 4.0, epsilon = f64::EPSILON);
    }

    #[test]
    fn round_trips_through_dmatrix() {
        let raw = DMatrix::from_column_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let matrix = IntensityMatrix::from(raw.clone());
        assert_eq!(DMatrix::from(matrix), raw);
    }
}
