use serde::{Serialize, Deserialize};

use crate::errors::NetworkError;
use crate::layer::Layer;
use crate::network::network::Network;

/// A fully serializable description of a network: its layer widths plus the
/// flat weight vector in canonical order.
///
/// `NetworkSnapshot` can be saved to / loaded from JSON independently of any
/// live network, making it possible to store and ship weight sets as plain
/// data and rebuild a ready-to-evaluate network from them later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Width of the input layer.
    pub inputs: usize,
    /// Widths of the hidden layers, input side first.
    pub hidden: Vec<usize>,
    /// Width of the output layer.
    pub outputs: usize,
    /// Connection weights in the order `Network::set_weights` consumes them.
    /// Empty when the snapshot was taken before the network was wired.
    pub weights: Vec<f64>,
}

impl NetworkSnapshot {
    /// Records the topology and weight vector of `network`.
    pub fn capture(network: &Network) -> NetworkSnapshot {
        NetworkSnapshot {
            inputs: network.input().len(),
            hidden: network.hidden().iter().map(Layer::len).collect(),
            outputs: network.output().len(),
            weights: network.weights(),
        }
    }

    /// Rebuilds a connected network from this snapshot and loads its weight
    /// vector. The returned network is wired and ready to evaluate.
    pub fn restore(&self) -> Result<Network, NetworkError> {
        let mut network = Network::new(self.inputs, self.outputs)?;
        for &count in &self.hidden {
            network.add_hidden_layer(count)?;
        }
        network.connect()?;
        network.set_weights(&self.weights);
        Ok(network)
    }

    /// Serializes the snapshot to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSnapshot` from a JSON file previously written
    /// by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSnapshot> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_topology_and_weights() {
        let mut network = Network::new(2, 1).unwrap();
        network.add_hidden_layer(2).unwrap();
        network.connect().unwrap();
        network.set_weights(&[1.0, -1.0, 0.5, -0.5, 1.0, -1.0]);

        let snapshot = NetworkSnapshot::capture(&network);
        assert_eq!(snapshot.inputs, 2);
        assert_eq!(snapshot.hidden, vec![2]);
        assert_eq!(snapshot.outputs, 1);
        assert_eq!(snapshot.weights, vec![1.0, -1.0, 0.5, -0.5, 1.0, -1.0]);
    }

    #[test]
    fn capture_before_wiring_has_no_weights() {
        let network = Network::new(3, 2).unwrap();
        let snapshot = NetworkSnapshot::capture(&network);
        assert_eq!(snapshot.inputs, 3);
        assert!(snapshot.weights.is_empty());

        // Restoring still yields a wired network, with default weights.
        let mut restored = snapshot.restore().unwrap();
        assert!(restored.is_connected());
        let outputs = restored.evaluate(&[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(outputs, vec![0.5, 0.5]);
    }

    #[test]
    fn restore_reproduces_evaluation_exactly() {
        let mut network = Network::new(2, 1).unwrap();
        network.add_hidden_layer(2).unwrap();
        network.connect().unwrap();
        network.set_weights(&[1.0, -1.0, 0.5, -0.5, 1.0, -1.0]);
        let expected = network.evaluate(&[1.0, -1.0]).unwrap();

        let mut restored = NetworkSnapshot::capture(&network).restore().unwrap();
        assert_eq!(restored.weights(), network.weights());
        assert_eq!(restored.evaluate(&[1.0, -1.0]).unwrap(), expected);
    }

    #[test]
    fn snapshots_round_trip_through_json() {
        let mut network = Network::new(2, 2).unwrap();
        network.add_hidden_layer(3).unwrap();
        network.connect().unwrap();
        network.set_weights(&[0.5; 12]);

        let snapshot = NetworkSnapshot::capture(&network);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: NetworkSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.inputs, snapshot.inputs);
        assert_eq!(parsed.hidden, snapshot.hidden);
        assert_eq!(parsed.outputs, snapshot.outputs);
        assert_eq!(parsed.weights, snapshot.weights);
    }
}
