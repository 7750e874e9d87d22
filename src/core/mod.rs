//! Core processing building blocks: the corner scanner, crop-box
//! resolution, and tuning parameters. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
