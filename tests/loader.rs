//! Model asset discovery and fallback on disk.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use ferrite_sketch::{
    load_with_fallback, ActivationFunction, Layer, LoadOutcome, Matrix, ModelState, ModelVariant,
    Network,
};

fn tiny_digits_model() -> Network {
    Network::new(vec![Layer::new(
        Matrix::zeros(784, 10),
        Matrix::zeros(1, 10),
        ActivationFunction::Softmax,
    )])
}

fn write_model(dir: &Path, variant: ModelVariant, network: &Network) {
    let path = variant.path_in(dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    network.save_json(&path).unwrap();
}

#[test]
fn extended_variant_is_preferred() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), ModelVariant::Extended, &tiny_digits_model());
    write_model(dir.path(), ModelVariant::Digits, &tiny_digits_model());

    match load_with_fallback(dir.path()) {
        LoadOutcome::Loaded(variant, _) => assert_eq!(variant, ModelVariant::Extended),
        LoadOutcome::Failed(reason) => panic!("load failed: {}", reason),
    }
}

#[test]
fn falls_back_to_digits_when_extended_is_missing_or_broken() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), ModelVariant::Digits, &tiny_digits_model());

    assert!(matches!(load_with_fallback(dir.path()), LoadOutcome::Loaded(ModelVariant::Digits, _)));

    let broken = ModelVariant::Extended.path_in(dir.path());
    fs::create_dir_all(broken.parent().unwrap()).unwrap();
    fs::write(&broken, b"{ not json").unwrap();
    assert!(matches!(load_with_fallback(dir.path()), LoadOutcome::Loaded(ModelVariant::Digits, _)));
}

#[test]
fn both_missing_reports_each_attempt() {
    let dir = tempfile::tempdir().unwrap();
    match load_with_fallback(dir.path()) {
        LoadOutcome::Failed(reason) => {
            assert!(reason.contains("emnist_model"));
            assert!(reason.contains("mnist_model"));
        }
        LoadOutcome::Loaded(..) => panic!("nothing should load from an empty dir"),
    }
}

#[test]
fn training_buffers_in_model_json_are_tolerated() {
    // ferrite-nn writes training buffers alongside the weights.
    let dir = tempfile::tempdir().unwrap();
    let path = ModelVariant::Digits.path_in(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let row = vec![0.0_f64; 10];
    let json = serde_json::json!({
        "layers": [{
            "size": 10,
            "neurons": { "rows": 1, "cols": 10, "data": [row.clone()] },
            "pre_neurons": { "rows": 1, "cols": 10, "data": [row.clone()] },
            "weights": { "rows": 784, "cols": 10, "data": vec![row.clone(); 784] },
            "biases": { "rows": 1, "cols": 10, "data": [row.clone()] },
            "activator": "Softmax"
        }],
        "metadata": {
            "description": "mnist",
            "input_type": { "type": "ImageGrayscale", "width": 28, "height": 28 },
            "output_labels": null
        }
    });
    fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

    let network = Network::load_json(&path).unwrap();
    assert_eq!(network.input_size(), 784);
    assert_eq!(network.output_size(), 10);
}

#[test]
fn background_load_becomes_ready() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), ModelVariant::Digits, &tiny_digits_model());

    let mut state = ModelState::spawn(dir.path().to_path_buf());
    let deadline = Instant::now() + Duration::from_secs(10);
    while !state.is_ready() && Instant::now() < deadline {
        state.poll();
        thread::sleep(Duration::from_millis(5));
    }
    assert!(state.is_ready());
    assert_eq!(state.variant(), Some(ModelVariant::Digits));
    assert_eq!(state.status(), "ready");
}

#[test]
fn extended_model_with_wrong_input_size_falls_back_to_digits() {
    let dir = tempfile::tempdir().unwrap();
    let small = Network::new(vec![Layer::new(
        Matrix::zeros(100, 47),
        Matrix::zeros(1, 47),
        ActivationFunction::Softmax,
    )]);
    write_model(dir.path(), ModelVariant::Extended, &small);
    write_model(dir.path(), ModelVariant::Digits, &tiny_digits_model());

    match load_with_fallback(dir.path()) {
        LoadOutcome::Loaded(variant, network) => {
            assert_eq!(variant, ModelVariant::Digits);
            assert_eq!(network.input_size(), 784);
        }
        LoadOutcome::Failed(reason) => panic!("load failed: {}", reason),
    }
}
