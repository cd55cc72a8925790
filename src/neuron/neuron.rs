use crate::neuron::connection::Connection;

/// A single averaging node.
///
/// Weighted inputs collect in a transient accumulator; `evaluate` turns the
/// accumulated sum into the neuron's value by dividing by the number of
/// incoming connections, then clears the accumulator for the next pass. The
/// divisor is the connection count, not the weight sum, so a neuron computes
/// the plain arithmetic mean of its weighted inputs.
///
/// A neuron with no incoming connections is a source: `evaluate` leaves its
/// value untouched, which is how input neurons carry caller-supplied values
/// through a pass.
#[derive(Debug, Clone, Default)]
pub struct Neuron {
    /// Current output value. Externally assigned for source neurons,
    /// computed by `evaluate` for everything downstream.
    pub value: f64,
    sum: f64,
    incoming: usize,
    outgoing: Vec<Connection>,
}

impl Neuron {
    pub fn new() -> Neuron {
        Neuron::default()
    }

    /// Connects this neuron to `target`, which lives at position
    /// `target_index` in the next layer. The new connection starts at
    /// weight 1, and the target is told to expect one more addend per pass.
    pub fn connect_to(&mut self, target_index: usize, target: &mut Neuron) {
        self.outgoing.push(Connection::new(target_index));
        target.register_incoming();
    }

    pub(crate) fn register_incoming(&mut self) {
        self.incoming += 1;
    }

    /// Adds a weighted input to the accumulator.
    pub fn receive(&mut self, amount: f64) {
        self.sum += amount;
    }

    /// Averages the accumulated inputs into `value` and resets the
    /// accumulator. Source neurons (no incoming connections) are left as
    /// they are.
    pub fn evaluate(&mut self) {
        if self.incoming > 0 {
            self.value = self.sum / self.incoming as f64;
            self.sum = 0.0;
        }
    }

    /// Number of connections feeding into this neuron.
    pub fn incoming_count(&self) -> usize {
        self.incoming
    }

    /// The connections leaving this neuron, in creation order.
    pub fn outgoing(&self) -> &[Connection] {
        &self.outgoing
    }

    pub(crate) fn outgoing_mut(&mut self) -> &mut [Connection] {
        &mut self.outgoing
    }
}
