use crate::errors::NetworkError;
use crate::neuron::neuron::Neuron;

/// An ordered, fixed-size row of neurons.
///
/// Neuron order is significant everywhere: values are assigned positionally,
/// wiring iterates neurons in order, and the flat weight layout walks them
/// in the same order.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `count` fresh neurons. A layer cannot be empty.
    pub fn new(count: usize) -> Result<Layer, NetworkError> {
        if count == 0 {
            return Err(NetworkError::EmptyLayer);
        }
        Ok(Layer {
            neurons: vec![Neuron::new(); count],
        })
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// The neurons in this layer, in creation order.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Assigns one value per neuron, positionally. The slice length must
    /// match the layer width exactly.
    pub fn set_values(&mut self, values: &[f64]) -> Result<(), NetworkError> {
        if values.len() != self.neurons.len() {
            return Err(NetworkError::ValueCountMismatch {
                expected: self.neurons.len(),
                actual: values.len(),
            });
        }
        for (neuron, &value) in self.neurons.iter_mut().zip(values) {
            neuron.value = value;
        }
        Ok(())
    }

    /// Current neuron values, in order.
    pub fn values(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.value).collect()
    }

    /// Wires every neuron in this layer to every neuron in `next`, source
    /// order outermost. Connection creation order matters: it defines the
    /// positional layout `set_weights` and `weights` traverse.
    pub fn connect_to(&mut self, next: &mut Layer) {
        for neuron in &mut self.neurons {
            for (target_index, target) in next.neurons.iter_mut().enumerate() {
                neuron.connect_to(target_index, target);
            }
        }
    }

    /// Runs the averaging step on every neuron, in order.
    pub fn evaluate(&mut self) {
        for neuron in &mut self.neurons {
            neuron.evaluate();
        }
    }

    /// Sends every neuron's value down its outgoing connections into the
    /// accumulators of `next`. `next` must be the layer this one was wired
    /// to by `connect_to`: connection targets index into it directly, and a
    /// narrower layer panics on the out-of-range index.
    pub fn fire_into(&self, next: &mut Layer) {
        for neuron in &self.neurons {
            for connection in neuron.outgoing() {
                connection.fire(neuron.value, &mut next.neurons[connection.target()]);
            }
        }
    }

    /// Assigns weights positionally across this layer's outgoing connections,
    /// neurons in order, each neuron's connections in creation order. Stops
    /// when `weights` runs out and returns how many were assigned.
    pub fn set_weights(&mut self, weights: &[f64]) -> usize {
        let mut assigned = 0;
        for neuron in &mut self.neurons {
            for connection in neuron.outgoing_mut() {
                match weights.get(assigned) {
                    Some(&weight) => {
                        connection.weight = weight;
                        assigned += 1;
                    }
                    None => return assigned,
                }
            }
        }
        assigned
    }

    /// Outgoing weights of this layer, in the order `set_weights` consumes
    /// them.
    pub fn weights(&self) -> Vec<f64> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.outgoing().iter().map(|c| c.weight))
            .collect()
    }
}
