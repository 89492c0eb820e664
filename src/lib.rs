//! midimenu - MIDI device selection menu engine.
//!
//! Provides the navigation core of the device list on a hardware MIDI unit:
//! - `source` - the item source abstraction and an in-memory device registry
//! - `menu` - cursor, scroll window, encoder navigation and row projection
//! - `input` - decoded front-panel events and event scripts
//! - `config` - simulator rig configuration

pub mod config;
pub mod input;
pub mod menu;
pub mod source;
