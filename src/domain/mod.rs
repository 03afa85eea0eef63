// Domain layer: pipeline values and the ports the core layer implements.

pub mod model;
pub mod ports;
