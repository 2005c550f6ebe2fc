//! Ties the feature extractor, quantizer, and item memory together into a
//! single `encode` pass: pose -> bundled, binarized hypervector.

use crate::{
    hypervector::{Accumulator, HyperVector},
    item_memory::ItemMemory,
    landmark::{extract_features, Landmark, NUM_LANDMARKS},
    quantizer::quantize_features,
};

pub fn encode(
    landmarks: &[Landmark; NUM_LANDMARKS],
    dim: usize,
    num_bins: usize,
    item_memory: &mut ItemMemory,
) -> HyperVector {
    let features = extract_features(landmarks);
    let bins = quantize_features(&features, num_bins);

    let mut acc = Accumulator::zeros(dim);
    for (feature_index, &bin) in bins.iter().enumerate() {
        let hv = item_memory.get(feature_index, bin);
        acc.add_bipolar(hv);
    }
    acc.binarize()
}
