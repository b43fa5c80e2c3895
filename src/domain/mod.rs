// Domain layer: forecast models, upstream schema and ports (interfaces).

pub mod element;
pub mod model;
pub mod ports;
pub mod upstream;
