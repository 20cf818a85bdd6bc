//! Logical control state and analog shaping primitives for OpenInput
//!
//! This crate provides the leaf types of the input pipeline: the logical
//! control identity ([`ControlKind`]), the per-control state machine
//! ([`Control`]), and the pure shaping math applied to analog samples every
//! tick (dead zones, smoothing, change detection).
//!
//! # Overview
//!
//! Every tick a control receives at most one pending sample through one of
//! two paths:
//! - the **bypass path** (`set_raw_value`) for sources the hardware layer
//!   already shapes, such as mouse deltas, and
//! - the **shaping path** (`set_pre_value`) for analog axes that still need
//!   dead-zone remapping and smoothing.
//!
//! The owning device resolves pending samples into committed values during
//! its post-update pass using the functions in [`shaping`]. Change detection
//! compares committed values across ticks with a fixed absolute tolerance
//! ([`shaping::CHANGE_EPSILON`]).
//!
//! # Tick Safety
//!
//! All shaping functions are pure and allocation-free:
//! - No heap allocations
//! - O(1) time complexity
//! - Bounded execution time
//! - No syscalls or I/O

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod control;
pub mod kind;
pub mod shaping;

pub use control::{Control, NULL_CONTROL};
pub use kind::ControlKind;
pub use shaping::{
    CHANGE_EPSILON, apply_circular_dead_zone, apply_dead_zone, apply_smoothing, approximately,
    inverse_lerp, move_towards,
};
