// Domain layer: word list models, ports, and the pure filtering rules.

pub mod model;
pub mod ports;
pub mod services;
