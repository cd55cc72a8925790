use filament_nn::{Network, NetworkSnapshot};

fn main() {
    // --- Build and wire ---
    // 2 inputs -> 2 hidden -> 1 output gives six connections: 2x2 into the
    // hidden layer, then 2x1 into the output.
    let mut network = Network::new(2, 1).expect("Failed to build network");
    network.add_hidden_layer(2).expect("Failed to add hidden layer");
    network.connect().expect("Failed to connect network");

    // --- Assign weights ---
    // One weight per connection, in layer -> neuron -> connection order.
    let weights = [1.0, -1.0, 0.5, -0.5, 1.0, -1.0];
    network.set_weights(&weights);
    println!(
        "Assigned {} of {} weights",
        network.connector_count(),
        weights.len()
    );

    // --- Evaluate ---
    let inputs = [1.0, -1.0];
    let outputs = network.evaluate(&inputs).expect("Failed to evaluate");
    println!("Inputs:  {:?}", inputs);
    println!("Hidden:  {:?}", network.hidden()[0].values());
    println!("Output:  {:?}", outputs);

    // --- Round-trip through a JSON snapshot ---
    let snapshot_path = "weighted_network.json";
    let snapshot = NetworkSnapshot::capture(&network);
    snapshot
        .save_json(snapshot_path)
        .expect("Failed to save snapshot");
    println!("\nSnapshot saved to {}", snapshot_path);

    let mut restored = NetworkSnapshot::load_json(snapshot_path)
        .expect("Failed to load snapshot")
        .restore()
        .expect("Failed to restore network");
    let outputs = restored.evaluate(&inputs).expect("Failed to evaluate");
    println!("Restored output: {:?}", outputs);
}
