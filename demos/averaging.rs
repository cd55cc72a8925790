use filament_nn::Network;

fn main() {
    // --- Build network ---
    // 3 inputs -> 4 hidden -> 2 hidden -> 1 output, every connection at the
    // default weight of 1.
    let mut network = Network::new(3, 1).expect("Failed to build network");
    network.add_hidden_layer(4).expect("Failed to add hidden layer");
    network.add_hidden_layer(2).expect("Failed to add hidden layer");

    let widths: Vec<usize> = network.layers().map(|layer| layer.len()).collect();
    println!("Network layers: {:?}", widths);

    // --- Evaluate with a shared input value ---
    // With default weights every downstream neuron averages identical copies
    // of the same value, so it flows through unchanged.
    let inputs = [0.5, 0.5, 0.5];
    let outputs = network.evaluate(&inputs).expect("Failed to evaluate");
    println!("\nInputs:  {:?}", inputs);
    println!("Output:  {:?}", outputs);

    // --- Evaluate with mixed inputs ---
    // Each first-layer hidden neuron sees all three inputs, so it averages
    // them, and every layer after that preserves the average.
    let inputs = [1.0, 0.0, 0.5];
    let outputs = network.evaluate(&inputs).expect("Failed to evaluate");
    println!("\nInputs:  {:?}", inputs);
    println!("Output:  {:?}", outputs);
}
