/// A fixed-length bipolar vector: every element is exactly `+1` or `-1`.
///
/// Represented as `Vec<i8>` rather than a bit-packed buffer. At the class
/// counts this crate targets (tens of few-shot gestures, not a
/// million-vector index) the simpler representation is both easier to
/// verify against the spec's arithmetic and fast enough; DESIGN.md records
/// bit-packing plus popcount-based cosine as a deliberately deferred
/// optimization, not an oversight.
#[derive(Clone, Debug, PartialEq)]
pub struct HyperVector(pub Vec<i8>);

impl HyperVector {
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }
}

/// An unbinarized accumulator: the running sum of bundled or added
/// hypervectors. Uses `f64` internally per §9 (bit-identical cross-language
/// reproducibility is not promised by this crate; encode/item-memory
/// determinism is the load-bearing contract instead).
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator(pub Vec<f64>);

impl Accumulator {
    pub fn zeros(dim: usize) -> Self {
        Self(vec![0.0; dim])
    }

    pub fn add_bipolar(&mut self, hv: &[i8]) {
        for (acc, &v) in self.0.iter_mut().zip(hv) {
            *acc += v as f64;
        }
    }

    /// `+1` if the element is `>= 0`, else `-1`. The tie rule (`>= 0 -> +1`)
    /// is part of the contract, not an implementation detail.
    pub fn binarize(&self) -> HyperVector {
        HyperVector(self.0.iter().map(|&v| if v >= 0.0 { 1 } else { -1 }).collect())
    }

    pub fn norm(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &Accumulator) -> f64 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }
}

/// `(a . b) / (||a|| ||b||)`, returning `0` if either norm is below `1e-8`.
pub fn cosine_similarity(a: &Accumulator, b: &Accumulator) -> f64 {
    let (norm_a, norm_b) = (a.norm(), b.norm());
    if norm_a < 1e-8 || norm_b < 1e-8 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}
