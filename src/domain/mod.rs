// Domain layer: the lead model and the ports both halves of the flow talk through.

pub mod model;
pub mod ports;
