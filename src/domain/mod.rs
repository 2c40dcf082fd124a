// Domain layer: outcome models and ports (interfaces) for the transport, storage and config.

pub mod model;
pub mod ports;
