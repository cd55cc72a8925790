use filament_nn::Network;
use rand::prelude::*;

fn main() {
    // --- Build and wire ---
    let mut network = Network::new(4, 2).expect("Failed to build network");
    network.add_hidden_layer(3).expect("Failed to add hidden layer");
    network.connect().expect("Failed to connect network");

    // --- Sample one weight per connection, uniform in [-1, 1] ---
    let mut rng = rand::thread_rng();
    let count = network.weights().len();
    let weights: Vec<f64> = (0..count).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
    network.set_weights(&weights);
    println!("Assigned {} random weights", network.connector_count());

    // --- Evaluate ---
    let inputs = [0.25, -0.75, 0.5, 1.0];
    let outputs = network.evaluate(&inputs).expect("Failed to evaluate");
    println!("Inputs:  {:?}", inputs);
    println!("Output:  {:?}", outputs);
}
