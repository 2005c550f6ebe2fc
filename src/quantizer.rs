//! Maps each of the 48 scalar features onto a bin index, using a
//! feature-specific `(lo, hi)` range baked in at compile time.

use crate::landmark::NUM_FEATURES;

/// `(lo, hi)` range for feature index `i`, per the layout §4.2/§4.3 fix.
fn range_for(i: usize) -> (f32, f32) {
    match i {
        0..=9 => (0.0, 3.0),
        10..=14 => (-2.0, 2.0),
        15..=19 => (-2.0, 2.0),
        20..=24 => (0.0, 1.0),
        25..=38 => (0.0, 3.0),
        39..=43 => (-1.0, 1.0),
        44..=47 => (0.0, 3.0),
        _ => unreachable!("feature index out of range: {i}"),
    }
}

/// `quantize(v, lo, hi) -> bin in [0, num_bins-1]`.
pub fn quantize(v: f32, lo: f32, hi: f32, num_bins: usize) -> usize {
    let t = (v - lo) / (hi - lo + 1e-8);
    let t = t.clamp(0.0, 1.0);
    let bin = (t * num_bins as f32).floor() as usize;
    bin.min(num_bins - 1)
}

/// Quantizes all 48 features of a pose, returning one bin index per feature.
pub fn quantize_features(features: &[f32; NUM_FEATURES], num_bins: usize) -> [usize; NUM_FEATURES] {
    let mut bins = [0usize; NUM_FEATURES];
    for (i, bin) in bins.iter_mut().enumerate() {
        let (lo, hi) = range_for(i);
        *bin = quantize(features[i], lo, hi, num_bins);
    }
    bins
}
