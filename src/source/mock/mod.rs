//! In-memory MIDI device registry for testing and simulation.
//!
//! This module provides `MockRegistry` and pre-built scenarios for driving
//! the menu engine without a real USB host stack.

mod registry;
mod scenarios;

pub use registry::{CONNECTED, DeviceId, MockDevice, MockRegistry};
