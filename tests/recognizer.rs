//! End-to-end exercises of the public façade, as an external caller would
//! use it: construct, train a few classes from a handful of examples, then
//! classify and round-trip the state.

use gesture_hdc::{GestureRecognizer, Landmark, RecognizerConfig};
use pretty_assertions::assert_eq;

fn lm(x: f32, y: f32, z: f32) -> Landmark {
    Landmark::new(x, y, z)
}

fn open_palm() -> Vec<Landmark> {
    let mut pts = vec![lm(0.0, 0.0, 0.0)];
    for &x in &[-0.08, -0.04, 0.0, 0.04, 0.08] {
        for joint in 0..4 {
            pts.push(lm(x, -(0.03 + joint as f32 * 0.03), 0.0));
        }
    }
    pts
}

fn closed_fist() -> Vec<Landmark> {
    let mut pts = vec![lm(0.0, 0.0, 0.0)];
    for &x in &[-0.08, -0.04, 0.0, 0.04, 0.08] {
        for joint in 0..4 {
            pts.push(lm(x * 0.3, -(0.01 + joint as f32 * 0.003), 0.02));
        }
    }
    pts
}

fn peace_sign() -> Vec<Landmark> {
    // Index and middle extended, ring/pinky/thumb folded.
    let mut pts = vec![lm(0.0, 0.0, 0.0)];
    let extensions = [0.3, 1.0, 1.0, 0.3, 0.3];
    for (finger, &ext) in extensions.iter().enumerate() {
        let x = [-0.08, -0.04, 0.0, 0.04, 0.08][finger];
        for joint in 0..4 {
            let depth = 0.02 + joint as f32 * 0.03 * ext;
            pts.push(lm(x, -depth, 0.0));
        }
    }
    pts
}

#[test]
fn trains_and_classifies_three_gestures() {
    let mut rec = GestureRecognizer::default();

    let fist_examples: Vec<_> = (0..5).map(|_| rec.encode(&closed_fist()).unwrap()).collect();
    let palm_examples: Vec<_> = (0..5).map(|_| rec.encode(&open_palm()).unwrap()).collect();
    let peace_examples: Vec<_> = (0..5).map(|_| rec.encode(&peace_sign()).unwrap()).collect();

    for hv in &fist_examples {
        rec.add_example("fist", hv);
    }
    for hv in &palm_examples {
        rec.add_example("palm", hv);
    }
    for hv in &peace_examples {
        rec.add_example("peace", hv);
    }

    assert_eq!(
        rec.get_class_names(),
        vec!["FIST".to_string(), "PALM".to_string(), "PEACE".to_string()]
    );
    assert_eq!(rec.get_example_count("fist"), 5);

    let probe = rec.encode(&peace_sign()).unwrap();
    let result = rec.predict(&probe);
    assert_eq!(result.label, Some("PEACE".to_string()));
    assert!(result.similarities.len() == 3);
    for sim in result.similarities.values() {
        assert!((-1.0..=1.0).contains(sim));
    }
}

#[test]
fn held_out_predictions_survive_an_export_import_cycle() {
    let mut rec = GestureRecognizer::default();
    for _ in 0..3 {
        let hv = rec.encode(&closed_fist()).unwrap();
        rec.add_example("fist", &hv);
    }
    for _ in 0..4 {
        let hv = rec.encode(&open_palm()).unwrap();
        rec.add_example("palm", &hv);
    }

    let probes: Vec<_> = [closed_fist(), open_palm(), peace_sign()]
        .into_iter()
        .map(|pose| rec.encode(&pose).unwrap())
        .collect();

    let json = rec.export_json().unwrap();
    let mut restored = GestureRecognizer::default();
    restored.import_json(&json).unwrap();

    for probe in &probes {
        assert_eq!(rec.predict(probe), restored.predict(probe));
    }
}

#[test]
fn custom_configuration_is_preserved_across_encode_calls() {
    let config = RecognizerConfig {
        dim: 512,
        num_bins: 8,
        threshold: 0.5,
        seed: 7,
    };
    let mut rec = GestureRecognizer::new(config);
    let hv = rec.encode(&open_palm()).unwrap();
    assert_eq!(hv.dim(), 512);
    assert_eq!(rec.config().threshold, 0.5);
}

#[test]
fn removing_a_gesture_excludes_it_from_future_predictions() {
    let mut rec = GestureRecognizer::default();
    let fist = rec.encode(&closed_fist()).unwrap();
    let palm = rec.encode(&open_palm()).unwrap();
    rec.add_example("fist", &fist);
    rec.add_example("palm", &palm);

    assert!(rec.remove_gesture("FIST"));
    let result = rec.predict(&fist);
    assert_ne!(result.label, Some("FIST".to_string()));
    assert!(!result.similarities.contains_key("FIST"));
}
