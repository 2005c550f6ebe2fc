//! Manual smoke-test for the recognizer: train a couple of gestures from a
//! landmarks fixture file and print predictions against held-out poses.
//!
//! ```text
//! cargo run --example predict_demo -- --fixture demos/fixtures/poses.json
//! ```

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gesture_hdc::{GestureRecognizer, Landmark};
use serde::Deserialize;

#[derive(Parser)]
struct Args {
    /// JSON file of named poses; see demos/fixtures/poses.json.
    #[arg(long, default_value = "demos/fixtures/poses.json")]
    fixture: PathBuf,
}

#[derive(Deserialize)]
struct PoseFixture {
    /// Gesture name -> list of example poses, each 21 `[x, y, z]` triples.
    training: std::collections::HashMap<String, Vec<Vec<[f32; 3]>>>,
    /// Poses to classify after training.
    probes: Vec<Vec<[f32; 3]>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.fixture)
        .with_context(|| format!("failed to read fixture {}", args.fixture.display()))?;
    let fixture: PoseFixture = serde_json::from_str(&raw).context("failed to parse fixture")?;

    let mut recognizer = GestureRecognizer::default();

    for (name, examples) in &fixture.training {
        for pose in examples {
            let landmarks = to_landmarks(pose);
            let hv = recognizer.encode(&landmarks)?;
            let count = recognizer.add_example(name, &hv);
            log::info!("trained {name} ({count} examples)");
        }
    }

    for (i, pose) in fixture.probes.iter().enumerate() {
        let landmarks = to_landmarks(pose);
        let hv = recognizer.encode(&landmarks)?;
        let result = recognizer.predict(&hv);
        println!(
            "probe {i}: label={:?} confidence={:.3}",
            result.label, result.confidence
        );
        for (name, sim) in &result.similarities {
            println!("  {name}: {sim:.3}");
        }
    }

    Ok(())
}

fn to_landmarks(points: &[[f32; 3]]) -> Vec<Landmark> {
    points
        .iter()
        .map(|&[x, y, z]| Landmark::new(x, y, z))
        .collect()
}
