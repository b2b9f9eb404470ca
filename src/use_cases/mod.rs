// Use cases layer: application workflows for the simulation service.

pub mod resolve;
pub mod simulate;
pub mod validate;
