//! Safe Rust bindings to the Csound 6 API.
//!
//! The [`Csound`] struct owns an opaque engine instance and exposes typed
//! operations over it: lifecycle, host-data round-tripping, the parameter
//! block, module/device enumeration, named channel access, utility listing
//! and the engine's two pseudo-random generators. Every operation is a direct
//! call into libcsound64; the wrapper marshals arguments and results but adds
//! no behavior of its own.
//!
//! Calls block the invoking thread until the native layer returns, and the
//! engine instance is not safe for concurrent invocation from multiple
//! threads.

mod channels;
mod devices;
mod engine;
mod enums;
mod hostdata;
mod marshal;
mod params;
mod random;

pub use crate::channels::{ChannelBehavior, ChannelHints, ChannelInfo, ControlChannelPtr};
pub use crate::devices::{AudioDevice, MidiDevice, Module, Modules};
pub use crate::engine::{Csound, NamedGen};
pub use crate::enums::{ControlChannelType, Status};
pub use crate::params::CsoundParams;
pub use crate::random::{rand31, RandMT};
