//! Entity collections and static geometry drawn by the scene.

pub mod ornaments;
pub mod snow;
pub mod stars;
pub mod tree;

use rand::Rng;

/// Uniform sample in `[low, high)`; collapses to `low` on an empty range.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
