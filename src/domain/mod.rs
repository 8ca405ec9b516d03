// Domain layer: entities and ports (repository interfaces). No
// dependencies beyond std/serde.

pub mod model;
pub mod ports;
