//! OpenInput Engine - Device Reconciliation and the Tick Pipeline
//!
//! This crate turns raw hardware input into stable logical controls. The
//! host drives one [`InputRuntime::update`] per frame; each tick the
//! [`DeviceManager`] reconciles the live hardware enumeration against the
//! profile catalog (attaching and detaching [`Device`]s), every attached
//! device samples its raw sources through the host's [`InputPort`], and the
//! per-control pipeline (dead-zone shaping, smoothing, change detection)
//! commits new values and dispatches change events to [`InputRegistry`]
//! subscribers.
//!
//! The core is single-threaded and cooperative: no operation blocks,
//! suspends, or mutates state outside the tick phases. Failure degrades to
//! "no input". Enumeration errors are logged and treated as an empty
//! hardware list, unmatched hardware gets a synthesized profile, and failed
//! control lookups return an inert null control.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

pub mod device;
pub mod manager;
pub mod ports;
pub mod prelude;
pub mod registry;
pub mod runtime;
pub mod virtual_port;

pub use device::{Device, DeviceId};
pub use manager::{DEVICE_REFRESH_INTERVAL, DeviceManager};
pub use ports::{InputPort, PortError, RawSample};
pub use registry::{InputEvent, InputRegistry, RegistryConfig, SubscriptionId};
pub use runtime::InputRuntime;
pub use virtual_port::VirtualInputPort;
