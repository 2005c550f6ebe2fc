//! A few-shot hand gesture classifier built on hyperdimensional computing
//! (HDC). Given a stream of 21 three-dimensional hand landmarks, it encodes
//! each pose into a high-dimensional bipolar hypervector, incrementally
//! learns gesture classes from a handful of example poses, and classifies
//! live poses by nearest-prototype cosine similarity.
//!
//! The crate is synchronous and single-threaded per [`GestureRecognizer`]
//! instance: callers serialize their own calls, and a consumer wanting
//! parallelism across streams creates independent instances instead.

pub mod class_store;
mod config;
mod encoder;
pub mod error;
mod hypervector;
mod item_memory;
pub mod landmark;
mod quantizer;
mod rng;
pub mod serialize;

pub use class_store::PredictionResult;
pub use config::RecognizerConfig;
pub use error::GestureError;
pub use hypervector::HyperVector;
pub use landmark::{Landmark, NUM_LANDMARKS};
pub use serialize::RecognizerState;

use class_store::ClassStore;
use item_memory::ItemMemory;

/// Owns an item memory and a class store for its entire lifetime.
///
/// `clear_all` empties the class store but preserves the item memory and
/// configuration. `remove_gesture` removes exactly one class. `import`
/// replaces configuration and the class table atomically; the item memory
/// is logically reset and re-derived deterministically on next access.
pub struct GestureRecognizer {
    config: RecognizerConfig,
    item_memory: ItemMemory,
    classes: ClassStore,
}

impl GestureRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            item_memory: ItemMemory::new(config.dim),
            classes: ClassStore::new(config.dim),
            config,
        }
    }

    pub fn config(&self) -> RecognizerConfig {
        self.config
    }

    /// Encodes 21 landmarks into a bipolar hypervector. Pure and
    /// idempotent: the same landmarks and configuration always produce the
    /// same result. A degenerate pose (`hand_size < 1e-6`) silently encodes
    /// as the all-zero feature vector rather than failing.
    pub fn encode(&mut self, landmarks: &[Landmark]) -> Result<HyperVector, GestureError> {
        let array: [Landmark; NUM_LANDMARKS] =
            landmarks
                .try_into()
                .map_err(|_| GestureError::InvalidLandmarkCount {
                    expected: NUM_LANDMARKS,
                    found: landmarks.len(),
                })?;

        Ok(encoder::encode(
            &array,
            self.config.dim,
            self.config.num_bins,
            &mut self.item_memory,
        ))
    }

    /// Accumulates one example hypervector into `name`'s prototype
    /// (creating the class if it doesn't exist yet), returning the class's
    /// new example count. `name` is canonicalized to uppercase.
    pub fn add_example(&mut self, name: &str, hv: &HyperVector) -> usize {
        self.classes.add_example(name, hv)
    }

    /// Classifies `hv` against every known class by cosine similarity
    /// against its (unbinarized) prototype sum. Returns a null label if no
    /// class exists, or if the best similarity falls below the configured
    /// threshold.
    pub fn predict(&self, hv: &HyperVector) -> PredictionResult {
        self.classes.predict(hv, self.config.threshold)
    }

    pub fn get_class_names(&self) -> Vec<String> {
        self.classes.get_class_names()
    }

    pub fn get_example_count(&self, name: &str) -> usize {
        self.classes.get_example_count(name)
    }

    /// Empties the class store. The item memory (and configuration) is
    /// unaffected: re-encoding the same landmarks afterward yields the same
    /// hypervector as before clearing.
    pub fn clear_all(&mut self) {
        self.classes.clear_all();
    }

    /// Removes exactly one class, returning whether it was present.
    pub fn remove_gesture(&mut self, name: &str) -> bool {
        self.classes.remove_gesture(name)
    }

    pub fn export(&self) -> RecognizerState {
        let classes = self
            .classes
            .classes()
            .iter()
            .map(|c| {
                (
                    c.name.clone(),
                    serialize::SerializedClass {
                        prototype: c.prototype.0.clone(),
                        example_count: c.example_count,
                    },
                )
            })
            .collect();

        RecognizerState {
            dim: self.config.dim,
            num_bins: self.config.num_bins,
            threshold: self.config.threshold,
            classes,
        }
    }

    /// Replaces configuration and the class table atomically. On any
    /// validation failure the recognizer is left completely untouched. The
    /// item memory is logically reset: entries are re-derived deterministically
    /// from the new `(dim, numBins)` the next time they're referenced.
    pub fn import(&mut self, state: RecognizerState) -> Result<(), GestureError> {
        state.validate()?;

        let dim = state.dim;
        let num_bins = state.num_bins;
        let threshold = state.threshold;
        let classes = state.into_classes();

        self.config = RecognizerConfig {
            dim,
            num_bins,
            threshold,
            seed: self.config.seed,
        };
        self.classes.replace_all(dim, classes);
        self.item_memory = ItemMemory::new(dim);
        Ok(())
    }

    pub fn export_json(&self) -> Result<String, GestureError> {
        self.export().to_json()
    }

    pub fn import_json(&mut self, json: &str) -> Result<(), GestureError> {
        let state = RecognizerState::from_json(json)?;
        self.import(state)
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}
