use std::iter;

use crate::errors::NetworkError;
use crate::layer::Layer;

/// A feed-forward network of averaging neurons.
///
/// A network is created with fixed input and output widths, optionally grows
/// hidden layers, and is wired exactly once: every neuron connects to every
/// neuron of the following layer. After wiring, only input values and
/// connection weights change; the topology is frozen.
///
/// Evaluation is synchronous and single-pass. Input neurons carry their
/// assigned values, every downstream neuron averages its weighted inputs,
/// and the output layer's values are returned in order.
#[derive(Debug)]
pub struct Network {
    input: Layer,
    hidden: Vec<Layer>,
    output: Layer,
    connected: bool,
    connector_count: usize,
}

impl Network {
    /// Creates a network with `num_inputs` input neurons, `num_outputs`
    /// output neurons, and no hidden layers. Both widths must be at
    /// least 1.
    pub fn new(num_inputs: usize, num_outputs: usize) -> Result<Network, NetworkError> {
        Ok(Network {
            input: Layer::new(num_inputs)?,
            hidden: Vec::new(),
            output: Layer::new(num_outputs)?,
            connected: false,
            connector_count: 0,
        })
    }

    /// Appends a hidden layer of `count` neurons after the current last
    /// hidden layer (or the input layer) and returns it. Fails once the
    /// network is connected, because wiring runs exactly once.
    pub fn add_hidden_layer(&mut self, count: usize) -> Result<&mut Layer, NetworkError> {
        if self.connected {
            return Err(NetworkError::AlreadyConnected);
        }
        self.hidden.push(Layer::new(count)?);
        let index = self.hidden.len() - 1;
        Ok(&mut self.hidden[index])
    }

    /// Wires the network: input to first hidden, each hidden to the next,
    /// last hidden to output (input directly to output when there are no
    /// hidden layers). Runs once, either explicitly or implicitly through
    /// the first `evaluate`; a second call fails.
    pub fn connect(&mut self) -> Result<(), NetworkError> {
        if self.connected {
            return Err(NetworkError::AlreadyConnected);
        }
        let mut layers = self.layers_mut();
        for i in 1..layers.len() {
            let (sources, targets) = layers.split_at_mut(i);
            sources[i - 1].connect_to(&mut *targets[0]);
        }
        self.connected = true;
        Ok(())
    }

    /// Runs one pass: assigns `inputs` to the input layer positionally,
    /// propagates layer by layer, and returns the output layer's values.
    ///
    /// The first call wires the network if `connect` was never called.
    /// Wiring happens before the inputs are validated, so a call with the
    /// wrong number of inputs can still leave the network connected.
    ///
    /// Arithmetic is plain `f64`: each neuron divides its accumulated sum
    /// by its incoming connection count, and averages that are not exactly
    /// representable in binary floating point round in the usual way.
    pub fn evaluate(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if !self.connected {
            self.connect()?;
        }
        self.input.set_values(inputs)?;
        self.propagate();
        Ok(self.output.values())
    }

    /// Evaluates and fires each layer into the next, front to back. Values
    /// land only in the following layer's accumulators, so evaluating a
    /// whole layer before firing it is equivalent to interleaving the two
    /// per neuron.
    fn propagate(&mut self) {
        let mut layers = self.layers_mut();
        for i in 1..layers.len() {
            let (sources, targets) = layers.split_at_mut(i);
            let source = &mut *sources[i - 1];
            source.evaluate();
            source.fire_into(&mut *targets[0]);
        }
        if let Some(last) = layers.last_mut() {
            last.evaluate();
        }
    }

    /// Assigns `weights` positionally across every connection in the
    /// network, walking layers front to back, each layer's neurons in
    /// order, and each neuron's outgoing connections in creation order.
    /// Assignment stops quietly when `weights` runs out, leaving the
    /// remaining connections untouched; `connector_count` reports how many
    /// were assigned by this call.
    pub fn set_weights(&mut self, weights: &[f64]) {
        let mut assigned = 0;
        for layer in self.layers_mut() {
            assigned += layer.set_weights(&weights[assigned..]);
        }
        self.connector_count = assigned;
    }

    /// Every connection weight in the network, in the same order
    /// `set_weights` consumes them.
    pub fn weights(&self) -> Vec<f64> {
        self.layers().flat_map(|layer| layer.weights()).collect()
    }

    /// The layers in evaluation order: input, hidden layers in insertion
    /// order, output.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        iter::once(&self.input)
            .chain(self.hidden.iter())
            .chain(iter::once(&self.output))
    }

    fn layers_mut(&mut self) -> Vec<&mut Layer> {
        iter::once(&mut self.input)
            .chain(self.hidden.iter_mut())
            .chain(iter::once(&mut self.output))
            .collect()
    }

    /// The input layer.
    pub fn input(&self) -> &Layer {
        &self.input
    }

    /// The hidden layers, in insertion order.
    pub fn hidden(&self) -> &[Layer] {
        &self.hidden
    }

    /// The output layer.
    pub fn output(&self) -> &Layer {
        &self.output
    }

    /// Whether the one-time wiring step has run.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Number of connections assigned a weight by the most recent
    /// `set_weights` call.
    pub fn connector_count(&self) -> usize {
        self.connector_count
    }
}
