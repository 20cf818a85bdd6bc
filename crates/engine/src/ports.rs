//! Port traits for the host boundary
//!
//! This module defines the contract between the input core and the host
//! platform layer. The core never talks to hardware directly: the host
//! supplies an [`InputPort`] that enumerates connected hardware by reported
//! name and samples raw sources on demand. The driver supplies the tick
//! counter and delta time, so the port carries no clock.

use openinput_profile::RawSource;
use thiserror::Error;

/// One raw sample read from the hardware layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSample {
    /// Analog sample, conventionally in `[-1, 1]`.
    Value(f32),
    /// Digital sample.
    State(bool),
}

impl RawSample {
    /// The sample as an analog value; states read as 0/1.
    pub fn as_value(self) -> f32 {
        match self {
            RawSample::Value(v) => v,
            RawSample::State(true) => 1.0,
            RawSample::State(false) => 0.0,
        }
    }
}

/// Errors surfaced by the host platform layer.
#[derive(Error, Debug)]
pub enum PortError {
    /// Hardware enumeration failed. The manager recovers by treating the
    /// scan as an empty enumeration; this never propagates further.
    #[error("hardware enumeration failed: {0}")]
    Enumeration(String),
}

/// Host platform abstraction supplying hardware enumeration and raw
/// samples.
///
/// Implementations must be non-blocking: both methods are called from
/// inside the tick pipeline. `sample` must also be side-effect-free; it is
/// invoked once per control per tick, between the pre-update and
/// post-update phases.
pub trait InputPort {
    /// Reported names of currently connected hardware, in slot order.
    ///
    /// Called at most once per scan interval.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Enumeration`] when the platform listing call
    /// fails; the caller logs and proceeds with an empty enumeration.
    fn device_names(&mut self) -> Result<Vec<String>, PortError>;

    /// Sample one raw source.
    ///
    /// `slot` is the hardware slot the owning device is bound to, or `None`
    /// for slotless (keyboard-class) devices. Sources the port cannot
    /// resolve degrade to zero/unpressed rather than failing.
    fn sample(&mut self, slot: Option<u32>, source: &RawSource) -> RawSample;
}
