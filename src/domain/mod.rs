// Domain layer: electrode records, conversion options and the config port.

pub mod model;
pub mod ports;
