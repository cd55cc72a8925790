//! Integration tests walking the public API end to end: building a
//! topology, wiring it, assigning weights, evaluating, and round-tripping
//! a snapshot through JSON on disk.

use approx::assert_abs_diff_eq;
use filament_nn::{Network, NetworkError, NetworkSnapshot};

#[test]
fn build_weight_evaluate_and_persist() {
    let mut network = Network::new(2, 1).expect("Network build should succeed");
    network.add_hidden_layer(2).expect("Hidden layer should append");

    // Explicit wiring; the first evaluate would also do this.
    network.connect().expect("Wiring should succeed");

    network.set_weights(&[1.0, -1.0, 0.5, -0.5, 1.0, -1.0]);
    assert_eq!(network.connector_count(), 6);

    let outputs = network
        .evaluate(&[1.0, -1.0])
        .expect("Evaluation should succeed");
    assert_abs_diff_eq!(outputs[0], 0.25, epsilon = 1e-12);

    // Persist to disk and rebuild.
    let dir = tempfile::tempdir().expect("Temp dir should be created");
    let path = dir.path().join("weighted.json");
    let path = path.to_str().expect("Path should be valid UTF-8");

    NetworkSnapshot::capture(&network)
        .save_json(path)
        .expect("Snapshot save should succeed");
    let mut restored = NetworkSnapshot::load_json(path)
        .expect("Snapshot load should succeed")
        .restore()
        .expect("Restore should succeed");

    let restored_outputs = restored
        .evaluate(&[1.0, -1.0])
        .expect("Evaluation should succeed");
    assert_eq!(restored_outputs, outputs);
    assert_eq!(restored.weights(), network.weights());
}

#[test]
fn deep_default_network_preserves_a_common_input() {
    let mut network = Network::new(5, 3).expect("Network build should succeed");
    for width in [8, 6, 4] {
        network
            .add_hidden_layer(width)
            .expect("Hidden layer should append");
    }

    let outputs = network
        .evaluate(&[-0.25; 5])
        .expect("Evaluation should succeed");
    assert_eq!(outputs, vec![-0.25, -0.25, -0.25]);
}

#[test]
fn wiring_is_one_shot_across_the_api() {
    let mut network = Network::new(2, 2).expect("Network build should succeed");
    network
        .evaluate(&[1.0, 0.0])
        .expect("Evaluation should succeed");

    assert_eq!(network.connect().unwrap_err(), NetworkError::AlreadyConnected);
    assert_eq!(
        network.add_hidden_layer(3).unwrap_err(),
        NetworkError::AlreadyConnected
    );
}
