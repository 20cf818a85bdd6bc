//! Per-control state
//!
//! A [`Control`] holds the committed value/state history of one logical
//! input plus the pending sample written by the hardware layer each tick.
//! The owning device drives the lifecycle: `pre_update` latches the previous
//! tick's committed values and clears pending samples, the sampling phase
//! fills exactly one of the two pending slots, and the device's post-update
//! pass resolves the pending sample into a committed value.

use crate::kind::ControlKind;
use crate::shaping::approximately;

/// State and shaping parameters for one logical input.
#[derive(Debug, Clone)]
pub struct Control {
    kind: ControlKind,
    handle: String,

    /// Player this control reports as; `None` inherits the device's player.
    pub player: Option<u32>,

    raw_value: Option<f32>,
    pre_value: Option<f32>,
    value: f32,
    last_value: f32,
    state: bool,
    last_state: bool,
    update_tick: u64,

    /// Lower dead-zone bound: magnitudes at or below collapse to 0.
    pub lower_dead_zone: f32,
    /// Upper dead-zone bound: magnitudes at or above saturate to 1.
    pub upper_dead_zone: f32,
    /// Smoothing sensitivity; (approximately) 1.0 disables smoothing.
    pub sensitivity: f32,
    /// Magnitude above which the digital state reads pressed.
    pub state_threshold: f32,
    /// Paired perpendicular axis for circular dead zones, resolved by the
    /// owning device. A lookup key, never a pointer.
    pub obverse: Option<ControlKind>,
}

/// Inert control returned by failed lookups.
///
/// Reports zero value, unpressed state, and never a change, so callers can
/// read any `(kind, player)` combination without null checks.
pub static NULL_CONTROL: Control = Control::inert();

impl Control {
    /// Create a control with neutral shaping parameters.
    pub fn new(kind: ControlKind, handle: impl Into<String>, player: Option<u32>) -> Self {
        Self {
            kind,
            handle: handle.into(),
            player,
            ..Control::inert()
        }
    }

    pub(crate) const fn inert() -> Self {
        Self {
            kind: ControlKind::None,
            handle: String::new(),
            player: None,
            raw_value: None,
            pre_value: None,
            value: 0.0,
            last_value: 0.0,
            state: false,
            last_state: false,
            update_tick: 0,
            lower_dead_zone: 0.0,
            upper_dead_zone: 1.0,
            sensitivity: 1.0,
            state_threshold: 0.0,
            obverse: None,
        }
    }

    /// The inert sentinel; see [`NULL_CONTROL`].
    pub fn null() -> &'static Control {
        &NULL_CONTROL
    }

    /// Whether this is the inert sentinel (or an unbound control).
    pub fn is_null(&self) -> bool {
        self.kind == ControlKind::None
    }

    /// Logical kind of this control.
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Display handle, e.g. `"Left Stick X"`.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Latch the previous tick's committed values and clear pending samples.
    pub fn pre_update(&mut self, _tick: u64) {
        self.last_value = self.value;
        self.last_state = self.state;
        self.raw_value = None;
        self.pre_value = None;
    }

    /// Write a pre-shaped sample that bypasses the dead-zone/smoothing
    /// pipeline (e.g. mouse deltas).
    pub fn set_raw_value(&mut self, value: f32) {
        self.raw_value = Some(value);
    }

    /// Write an analog sample pending dead-zone shaping and smoothing.
    pub fn set_pre_value(&mut self, value: f32) {
        self.pre_value = Some(value);
    }

    /// Commit an analog value and derive the digital state from it.
    pub fn update_with_value(&mut self, value: f32, tick: u64) {
        self.value = value;
        self.state = !approximately(value, 0.0) && value.abs() > self.state_threshold;
        self.update_tick = tick;
    }

    /// Commit a digital state; the analog value reads 0/1.
    pub fn update_with_state(&mut self, state: bool, tick: u64) {
        self.state = state;
        self.value = if state { 1.0 } else { 0.0 };
        self.update_tick = tick;
    }

    /// Pending bypass-path sample, if one was written this tick.
    pub fn raw_value(&self) -> Option<f32> {
        self.raw_value
    }

    /// Pending shaping-path sample, if one was written this tick.
    pub fn pre_value(&self) -> Option<f32> {
        self.pre_value
    }

    /// Whether either pending sample slot was written this tick.
    pub fn was_sampled(&self) -> bool {
        self.raw_value.is_some() || self.pre_value.is_some()
    }

    /// Committed analog value, in `[-1, 1]` for axes and `{0, 1}` for
    /// buttons.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value committed at the end of the previous tick.
    pub fn last_value(&self) -> f32 {
        self.last_value
    }

    /// Committed digital state.
    pub fn state(&self) -> bool {
        self.state
    }

    /// Digital state committed at the end of the previous tick.
    pub fn last_state(&self) -> bool {
        self.last_state
    }

    /// Tick of the most recent commit.
    pub fn update_tick(&self) -> u64 {
        self.update_tick
    }

    /// Whether the committed value or state differs from the previous
    /// tick's beyond the change epsilon.
    pub fn has_changed(&self) -> bool {
        self.state != self.last_state || !approximately(self.value, self.last_value)
    }

    /// Digital press edge this tick.
    pub fn was_pressed(&self) -> bool {
        self.state && !self.last_state
    }

    /// Digital release edge this tick.
    pub fn was_released(&self) -> bool {
        !self.state && self.last_state
    }
}
