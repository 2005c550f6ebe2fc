//! Portable export/import of recognizer state. The item memory is never
//! serialized — it is regenerated deterministically from `(dim, numBins)`.

use std::collections::HashMap;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::class_store::GestureClass;
use crate::error::GestureError;
use crate::hypervector::Accumulator;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SerializedClass {
    pub prototype: Vec<f64>,
    pub example_count: usize,
}

/// The exported state document, matching §4.7's field list exactly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecognizerState {
    pub dim: usize,
    pub num_bins: usize,
    pub threshold: f64,
    pub classes: HashMap<String, SerializedClass>,
}

impl RecognizerState {
    pub fn to_json(&self) -> Result<String, GestureError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GestureError::InvalidState { reason: e.to_string() })
    }

    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        serde_json::from_str(json).map_err(|e| GestureError::InvalidState {
            reason: e.to_string(),
        })
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), GestureError> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| GestureError::InvalidState { reason: e.to_string() })
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self, GestureError> {
        serde_json::from_reader(reader).map_err(|e| GestureError::InvalidState {
            reason: e.to_string(),
        })
    }

    /// Validates field presence (guaranteed by the type system once
    /// deserialized) and per-class prototype length against `dim`, failing
    /// with `InvalidState` on the first mismatch.
    pub fn validate(&self) -> Result<(), GestureError> {
        if self.dim == 0 {
            return Err(GestureError::InvalidState {
                reason: "dim must be positive".to_string(),
            });
        }
        if self.num_bins < 2 {
            return Err(GestureError::InvalidState {
                reason: "numBins must be at least 2".to_string(),
            });
        }
        for (name, class) in &self.classes {
            if class.prototype.len() != self.dim {
                return Err(GestureError::InvalidState {
                    reason: format!(
                        "class {name} has prototype length {}, expected {}",
                        class.prototype.len(),
                        self.dim
                    ),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn into_classes(self) -> Vec<GestureClass> {
        let mut names: Vec<&String> = self.classes.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| {
                let serialized = &self.classes[name];
                GestureClass {
                    name: name.clone(),
                    prototype: Accumulator(serialized.prototype.clone()),
                    example_count: serialized.example_count,
                }
            })
            .collect()
    }
}
