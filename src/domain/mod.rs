// Domain layer: report models and ports. Nothing here performs I/O.

pub mod model;
pub mod ports;
