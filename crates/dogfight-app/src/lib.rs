//! Frame driver and host-backend plumbing for DOGFIGHT.
//!
//! The simulation itself lives in `dogfight-sim`; this crate runs it at a
//! nominal cadence against whatever `Renderer`/`InputSource`/`AudioSink`
//! the host provides, and ships headless null backends for bots and tests.

pub mod game_loop;
pub mod headless;
