//! Local density estimation over precomputed neighbour distances.
//!
//! Each point's density is `1 + Σ w(d / radius)` over its neighbour
//! distances, where `w(u) = (1 − u³)³` is the tricube kernel. The leading `1`
//! accounts for the point's own zero self-distance, which callers do not
//! include in the distance lists.
//!
//! The kernel is evaluated **without clamping**: a distance beyond the radius
//! gives `u > 1` and a negative weight, which reduces the density score
//! rather than being zeroed. Callers are expected to have restricted the
//! distance lists to within (or near) the radius already.

/// Tricube weight for a normalised distance `u`.
///
/// Unclamped: `u > 1` yields a negative weight.
#[inline]
fn tricube(u: f64) -> f64 {
    let tmp = 1.0 - u * u * u;
    tmp * tmp * tmp
}

/// Estimate a local density score for each point from its neighbour
/// distances.
///
/// `distance_lists` holds, per point, the distances to its neighbours within
/// the chosen radius (jagged; lengths may differ per point). The output is
/// one score per point, in the same order as the input.
///
/// A point with an empty distance list scores exactly `1.0` (self only). A
/// zero or negative `radius` is not guarded against: the division produces
/// an infinite or sign-flipped ratio and the score degrades accordingly,
/// which is treated as a caller-input-quality issue rather than an error.
///
/// # Example
///
/// ```
/// use cyto_kernels::estimate_density;
///
/// let densities = estimate_density(&[vec![0.0], vec![]], 2.0);
/// assert_eq!(densities, vec![2.0, 1.0]);
/// ```
#[must_use]
pub fn estimate_density<D: AsRef<[f64]>>(distance_lists: &[D], radius: f64) -> Vec<f64> {
    distance_lists
        .iter()
        .map(|distances| {
            // Every point is its own nearest neighbour at distance zero.
            1.0 + distances
                .as_ref()
                .iter()
                .map(|d| tricube(d / radius))
                .sum::<f64>()
        })
        .collect()
}
