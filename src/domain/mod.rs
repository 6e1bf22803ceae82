// Domain layer: models and ports. Nothing here touches the filesystem directly.

pub mod model;
pub mod ports;
