use crate::neuron::neuron::Neuron;

/// A directed, weighted edge from a neuron to one neuron in the next layer.
///
/// Connections are owned by their source neuron and address their target by
/// position within the next layer, so the graph stays a flat arena of plain
/// values with no reference cycles.
#[derive(Debug, Clone)]
pub struct Connection {
    target: usize,
    pub weight: f64,
}

impl Connection {
    /// Creates a connection aimed at the neuron at `target` in the next
    /// layer. New connections start at the neutral weight 1.
    pub(crate) fn new(target: usize) -> Connection {
        Connection { target, weight: 1.0 }
    }

    /// Position of the target neuron within the next layer.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Delivers `value` scaled by this connection's weight into the target
    /// neuron's accumulator.
    pub fn fire(&self, value: f64, target: &mut Neuron) {
        target.receive(value * self.weight);
    }
}
