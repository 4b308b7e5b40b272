//! Simulation engine for DOGFIGHT.
//!
//! Owns the entity registries, runs the per-frame systems, and drives the
//! draw pass through the host `Renderer`. Completely headless (no windowing
//! or audio dependency), enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use dogfight_core as core;
pub use engine::GameEngine;

#[cfg(test)]
mod tests;
