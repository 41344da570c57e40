//! C FFI bindings for the `cyto_kernels` crate.
//!
//! Both kernels take flattened inputs (a values array plus a per-point
//! lengths array for the jagged collections) and write their results into
//! caller-supplied output buffers. Every entry point returns a status code;
//! output buffers are only written on [`CYTO_OK`].

use cyto_kernels::{FilterError, IntensityMatrix, estimate_density, filter_redundant};

/// Call completed successfully and the output buffer was written.
pub const CYTO_OK: i32 = 0;

/// A required pointer argument was null.
pub const CYTO_NULL_POINTER: i32 = -1;

/// Input collection lengths disagree (ordering vs. neighbour lists vs.
/// intensity columns).
pub const CYTO_SHAPE_MISMATCH: i32 = 1;

/// An ordering entry or neighbour index falls outside the point set.
pub const CYTO_INDEX_OUT_OF_RANGE: i32 = 2;

/// Split a flat values array into per-point subslices.
fn split_jagged<'a, T>(values: &'a [T], lengths: &[usize]) -> Vec<&'a [T]> {
    let mut lists = Vec::with_capacity(lengths.len());
    let mut start = 0;
    for &len in lengths {
        lists.push(&values[start..start + len]);
        start += len;
    }
    lists
}

/// Estimate a local density score for each point from its neighbour
/// distances.
///
/// `distances` holds every point's neighbour distances back to back;
/// `lengths[i]` gives how many of them belong to point `i`. One density per
/// point is written to `out`.
///
/// Returns [`CYTO_OK`] on success, or [`CYTO_NULL_POINTER`] if any pointer
/// is null while `npoints > 0`.
///
/// # Safety
///
/// - `lengths` must be valid for reads of `npoints` elements.
/// - `distances` must be valid for reads of `sum(lengths)` elements.
/// - `out` must be valid for writes of `npoints` elements.
/// - All pointers may be null only when `npoints == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cyto_estimate_density(
    distances: *const f64,
    lengths: *const usize,
    npoints: usize,
    radius: f64,
    out: *mut f64,
) -> i32 {
    if npoints == 0 {
        return CYTO_OK;
    }
    if distances.is_null() || lengths.is_null() || out.is_null() {
        return CYTO_NULL_POINTER;
    }

    let lengths = unsafe { std::slice::from_raw_parts(lengths, npoints) };
    let total: usize = lengths.iter().sum();
    let values = unsafe { std::slice::from_raw_parts(distances, total) };
    let distance_lists = split_jagged(values, lengths);

    let densities = estimate_density(&distance_lists, radius);
    let out = unsafe { std::slice::from_raw_parts_mut(out, npoints) };
    out.copy_from_slice(&densities);
    CYTO_OK
}

/// Decide, for each point, whether it survives greedy redundancy
/// elimination.
///
/// `intensities` is a column-major `nmarkers` × `npoints` matrix (one column
/// per point). `ordering` is a 0-based priority permutation of the points.
/// `neighbours` holds every point's 1-based neighbour indices back to back;
/// `neighbour_lengths[i]` gives how many of them belong to point `i`. One
/// flag per point (1 = kept, 0 = suppressed) is written to `out`.
///
/// Returns [`CYTO_OK`] on success, [`CYTO_NULL_POINTER`] if any pointer is
/// null while `npoints > 0`, [`CYTO_SHAPE_MISMATCH`] when the input
/// collections disagree in length, or [`CYTO_INDEX_OUT_OF_RANGE`] when an
/// ordering entry or neighbour index falls outside the point set.
///
/// # Safety
///
/// - `intensities` must be valid for reads of `nmarkers * npoints` elements.
/// - `ordering` and `neighbour_lengths` must be valid for reads of `npoints`
///   elements each.
/// - `neighbours` must be valid for reads of `sum(neighbour_lengths)`
///   elements.
/// - `out` must be valid for writes of `npoints` elements.
/// - All pointers may be null only when `npoints == 0`.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn cyto_filter_redundant(
    intensities: *const f64,
    nmarkers: usize,
    npoints: usize,
    ordering: *const usize,
    neighbours: *const usize,
    neighbour_lengths: *const usize,
    threshold: f64,
    out: *mut u8,
) -> i32 {
    if npoints == 0 {
        return CYTO_OK;
    }
    if intensities.is_null()
        || ordering.is_null()
        || neighbours.is_null()
        || neighbour_lengths.is_null()
        || out.is_null()
    {
        return CYTO_NULL_POINTER;
    }

    let values = unsafe { std::slice::from_raw_parts(intensities, nmarkers * npoints) };
    let Ok(matrix) = IntensityMatrix::from_column_major(nmarkers, npoints, values) else {
        return CYTO_SHAPE_MISMATCH;
    };

    let ordering = unsafe { std::slice::from_raw_parts(ordering, npoints) };
    let lengths = unsafe { std::slice::from_raw_parts(neighbour_lengths, npoints) };
    let total: usize = lengths.iter().sum();
    let flat_neighbours = unsafe { std::slice::from_raw_parts(neighbours, total) };
    let neighbour_lists = split_jagged(flat_neighbours, lengths);

    match filter_redundant(&matrix, ordering, &neighbour_lists, threshold) {
        Ok(kept) => {
            let out = unsafe { std::slice::from_raw_parts_mut(out, npoints) };
            for (slot, flag) in out.iter_mut().zip(kept) {
                *slot = u8::from(flag);
            }
            CYTO_OK
        }
        Err(FilterError::OrderingMismatch { .. } | FilterError::ColumnMismatch { .. }) => {
            CYTO_SHAPE_MISMATCH
        }
        Err(FilterError::OrderingOutOfRange { .. } | FilterError::NeighbourOutOfRange { .. }) => {
            CYTO_INDEX_OUT_OF_RANGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_jagged_respects_lengths() {
        let values = [1.0, 2.0, 3.0];
        let lists = split_jagged(&values, &[2, 0, 1]);
        assert_eq!(lists, vec![&values[0..2], &values[2..2], &values[2..3]]);
    }

    #[test]
    fn split_jagged_of_nothing_is_empty() {
        let lists = split_jagged::<f64>(&[], &[]);
        assert!(lists.is_empty());
    }
}
