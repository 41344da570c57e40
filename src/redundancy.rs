//! Greedy redundancy filtering over a ranked ordering and a neighbour graph.
//!
//! The filter is a non-maximum-suppression pass over a similarity graph: the
//! first point visited in priority order wins, and marks every neighbour
//! whose intensity vector lies within the threshold on all markers as
//! covered. Covered points are never kept, but a keep decision is never
//! retracted — coverage is append-only.

use crate::IntensityMatrix;

/// The error returned when the redundancy filter's inputs disagree in shape
/// or contain an out-of-range index.
///
/// All variants are usage errors: the call fails before the filtering pass
/// begins, with no partial output.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The ordering and the neighbour-list collection disagree in length.
    #[error("length of ordering ({ordering}) does not match the number of neighbour lists ({groups})")]
    OrderingMismatch {
        /// Number of entries in the ordering.
        ordering: usize,
        /// Number of neighbour lists supplied.
        groups: usize,
    },

    /// The neighbour-list collection and the intensity matrix disagree in
    /// length.
    #[error("number of neighbour lists ({groups}) does not match the number of intensity columns ({columns})")]
    ColumnMismatch {
        /// Number of neighbour lists supplied.
        groups: usize,
        /// Number of columns (points) in the intensity matrix.
        columns: usize,
    },

    /// An ordering entry names a point outside the point set.
    #[error("ordering entry {index} is outside the point set of size {npoints}")]
    OrderingOutOfRange {
        /// The offending ordering entry.
        index: usize,
        /// Number of points.
        npoints: usize,
    },

    /// A neighbour list names a point outside the point set.
    ///
    /// Neighbour indices are 1-based, so valid values are `1..=npoints`.
    #[error("neighbour index {index} of point {point} is outside 1..={npoints}")]
    NeighbourOutOfRange {
        /// The point whose neighbour list holds the offending index.
        point: usize,
        /// The offending 1-based neighbour index.
        index: usize,
        /// Number of points.
        npoints: usize,
    },
}

/// Check every input shape and index before the filtering pass runs.
fn validate<L: AsRef<[usize]>>(
    intensities: &IntensityMatrix,
    ordering: &[usize],
    neighbour_lists: &[L],
) -> Result<(), FilterError> {
    let groups = neighbour_lists.len();
    if ordering.len() != groups {
        return Err(FilterError::OrderingMismatch {
            ordering: ordering.len(),
            groups,
        });
    }

    let npoints = intensities.npoints();
    if groups != npoints {
        return Err(FilterError::ColumnMismatch {
            groups,
            columns: npoints,
        });
    }

    if let Some(&index) = ordering.iter().find(|&&o| o >= npoints) {
        return Err(FilterError::OrderingOutOfRange { index, npoints });
    }

    for (point, neighbours) in neighbour_lists.iter().enumerate() {
        if let Some(&index) = neighbours
            .as_ref()
            .iter()
            .find(|&&n| !(1..=npoints).contains(&n))
        {
            return Err(FilterError::NeighbourOutOfRange {
                point,
                index,
                npoints,
            });
        }
    }

    Ok(())
}

/// Decide, for each point, whether it survives greedy redundancy
/// elimination.
///
/// Points are visited strictly in the order given by `ordering` (highest
/// priority first, as ranked by the caller). A point already covered by an
/// earlier kept point is skipped; otherwise it is kept, and every entry of
/// its neighbour list whose intensity column differs from the current
/// point's by at most `threshold` on **every** marker simultaneously is
/// marked covered. A difference exactly equal to `threshold` counts as
/// within.
///
/// `neighbour_lists` uses 1-based indices (the upstream convention); the
/// conversion to 0-based happens in exactly one place here. Neighbour
/// relations need not be symmetric.
///
/// Returns one flag per point, `true` where the point was kept. The pass is
/// fully deterministic for a fixed ordering.
///
/// # Errors
///
/// Fails before any filtering work — with no partial output — when the
/// ordering, neighbour-list collection and intensity-matrix columns disagree
/// in length, or when an ordering entry or neighbour index falls outside the
/// point set. See [`FilterError`].
///
/// # Example
///
/// ```
/// use cyto_kernels::{IntensityMatrix, filter_redundant};
///
/// let intensities = IntensityMatrix::from_column_major(1, 2, &[0.0, 0.05]).unwrap();
/// let kept = filter_redundant(&intensities, &[0, 1], &[vec![2], vec![]], 0.1).unwrap();
/// assert_eq!(kept, vec![true, false]);
/// ```
pub fn filter_redundant<L: AsRef<[usize]>>(
    intensities: &IntensityMatrix,
    ordering: &[usize],
    neighbour_lists: &[L],
    threshold: f64,
) -> Result<Vec<bool>, FilterError> {
    validate(intensities, ordering, neighbour_lists)?;

    let npoints = ordering.len();
    let mut kept = vec![false; npoints];
    let mut seen = vec![false; npoints];

    for &current in ordering {
        if seen[current] {
            continue;
        }
        kept[current] = true;

        let current_column = intensities.column(current);
        for &neighbour in neighbour_lists[current].as_ref() {
            let neighbour = neighbour - 1; // 1-based input
            let within = intensities
                .column(neighbour)
                .iter()
                .zip(current_column.iter())
                .all(|(a, b)| (a - b).abs() <= threshold);
            if within {
                seen[neighbour] = true;
            }
        }
    }

    Ok(kept)
}
