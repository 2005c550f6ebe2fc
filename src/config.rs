/// Construction-time configuration for a [`crate::GestureRecognizer`]. All
/// three of `dim`/`num_bins`/`threshold` are fixed for the recognizer's
/// lifetime and preserved by export/import; `seed` only parameterizes the
/// internal RNG and is never itself persisted (item memory keys derive their
/// own per-entry seed and ignore it, per §4.4).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognizerConfig {
    pub dim: usize,
    pub num_bins: usize,
    pub threshold: f64,
    pub seed: u32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            dim: 10_000,
            num_bins: 16,
            threshold: 0.25,
            seed: 42,
        }
    }
}
