pub mod errors;
pub mod neuron;
pub mod layer;
pub mod network;

// Convenience re-exports
pub use errors::network_error::NetworkError;
pub use neuron::connection::Connection;
pub use neuron::neuron::Neuron;
pub use layer::layer::Layer;
pub use network::network::Network;
pub use network::snapshot::NetworkSnapshot;
