//! Prototype accumulators, class lifecycle, and thresholded prediction.

use std::collections::HashMap;

use crate::hypervector::{cosine_similarity, Accumulator, HyperVector};

#[derive(Clone, Debug)]
pub struct GestureClass {
    pub name: String,
    pub prototype: Accumulator,
    pub example_count: usize,
}

/// The outcome of `predict`: the winning label (if any cleared the
/// threshold), every class's cosine similarity, and the winning score.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub label: Option<String>,
    pub similarities: HashMap<String, f64>,
    pub confidence: f64,
}

/// Insertion-ordered class table: a `Vec` holds the classes in the order
/// they were first added (so tie-breaks and iteration are deterministic),
/// with a name index for O(1) case-insensitive lookup.
pub struct ClassStore {
    classes: Vec<GestureClass>,
    index: HashMap<String, usize>,
    dim: usize,
}

impl ClassStore {
    pub fn new(dim: usize) -> Self {
        Self {
            classes: Vec::new(),
            index: HashMap::new(),
            dim,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Adds one example to `name`'s prototype (creating the class if
    /// absent), returning the class's new example count.
    pub fn add_example(&mut self, name: &str, hv: &HyperVector) -> usize {
        let key = name.to_uppercase();
        let dim = self.dim;
        let classes = &mut self.classes;
        let idx = *self.index.entry(key.clone()).or_insert_with(|| {
            classes.push(GestureClass {
                name: key.clone(),
                prototype: Accumulator::zeros(dim),
                example_count: 0,
            });
            classes.len() - 1
        });

        let class = &mut self.classes[idx];
        class.prototype.add_bipolar(hv.as_slice());
        class.example_count += 1;
        class.example_count
    }

    /// `(label, similarities, confidence)` per §4.6: empty store yields a
    /// null result; otherwise the strict-running-max scan picks the first
    /// class reaching the best similarity, and the threshold gates the
    /// label (`best_sim < threshold` -> no label, `==` still wins).
    pub fn predict(&self, hv: &HyperVector, threshold: f64) -> PredictionResult {
        if self.classes.is_empty() {
            return PredictionResult {
                label: None,
                similarities: HashMap::new(),
                confidence: 0.0,
            };
        }

        let query = Accumulator(hv.as_slice().iter().map(|&v| v as f64).collect());

        let mut similarities = HashMap::with_capacity(self.classes.len());
        let mut best_name: Option<&str> = None;
        let mut best_sim = f64::NEG_INFINITY;

        for class in &self.classes {
            let sim = cosine_similarity(&query, &class.prototype);
            similarities.insert(class.name.clone(), sim);
            if sim > best_sim {
                best_sim = sim;
                best_name = Some(&class.name);
            }
        }

        let label = match best_name {
            Some(name) if best_sim >= threshold => Some(name.to_string()),
            _ => None,
        };

        PredictionResult {
            label,
            similarities,
            confidence: best_sim,
        }
    }

    pub fn get_class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    pub fn get_example_count(&self, name: &str) -> usize {
        let key = name.to_uppercase();
        self.index
            .get(&key)
            .map(|&idx| self.classes[idx].example_count)
            .unwrap_or(0)
    }

    pub fn clear_all(&mut self) {
        self.classes.clear();
        self.index.clear();
    }

    /// Removes the named class, returning whether it was present.
    pub fn remove_gesture(&mut self, name: &str) -> bool {
        let key = name.to_uppercase();
        let Some(idx) = self.index.remove(&key) else {
            return false;
        };
        self.classes.remove(idx);
        // Every index past the removed one shifted down by one.
        for v in self.index.values_mut() {
            if *v > idx {
                *v -= 1;
            }
        }
        true
    }

    pub fn classes(&self) -> &[GestureClass] {
        &self.classes
    }

    /// Replaces the entire class table, e.g. during `import`.
    pub fn replace_all(&mut self, dim: usize, classes: Vec<GestureClass>) {
        self.dim = dim;
        self.index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        self.classes = classes;
    }
}
