//! Attached device and the per-tick control pipeline
//!
//! A [`Device`] owns the ordered controls built from its profile and drives
//! them through the tick phases: `pre_update` latches history and clears
//! pending samples, `sample` routes raw port samples into the controls, and
//! `post_update` resolves pending analog samples through dead-zone shaping
//! and smoothing, commits them, and raises change events.

use std::sync::Arc;

use openinput_controls::{Control, ControlKind, shaping};
use openinput_profile::CatalogEntry;

use crate::ports::{InputPort, RawSample};
use crate::registry::InputEvent;

/// Registry-assigned device identity, stable for the lifetime of one
/// attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(u64);

impl DeviceId {
    /// Identity of a device not yet attached to a registry.
    pub const UNASSIGNED: DeviceId = DeviceId(0);

    pub(crate) const fn new(raw: u64) -> Self {
        DeviceId(raw)
    }

    /// The raw id value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "device-{}", self.0)
    }
}

/// One attached input device: an ordered collection of controls bound to a
/// profile and (for joystick-class hardware) a hardware slot.
#[derive(Debug)]
pub struct Device {
    id: DeviceId,
    name: String,
    meta: String,

    /// Player this device is assigned to; `None` is unassigned/global.
    pub player: Option<u32>,
    /// Presentation tie-break; never affects pipeline behavior.
    pub sort_order: i32,

    last_change_tick: u64,
    controls: Vec<Control>,
    profile: Arc<CatalogEntry>,
    slot: Option<u32>,
}

impl Device {
    /// Build a device from a catalog entry, creating one control per
    /// declared binding in declaration order with the profile's resolved
    /// shaping parameters. `slot` is the hardware slot backing the device;
    /// keyboard-class devices pass `None`.
    pub fn from_profile(profile: Arc<CatalogEntry>, slot: Option<u32>) -> Self {
        let descriptor = profile.profile();
        let mut controls = Vec::with_capacity(descriptor.bindings.len());
        for binding in &descriptor.bindings {
            let mut control = Control::new(binding.control, binding.name.clone(), None);
            control.lower_dead_zone = descriptor.lower_dead_zone_for(binding);
            control.upper_dead_zone = descriptor.upper_dead_zone_for(binding);
            control.sensitivity = descriptor.sensitivity_for(binding);
            control.state_threshold = descriptor.state_threshold_for(binding);
            control.obverse = binding.obverse;
            controls.push(control);
        }

        Self {
            id: DeviceId::UNASSIGNED,
            name: descriptor.name.clone(),
            meta: descriptor.meta.clone(),
            player: None,
            sort_order: descriptor.sort_order,
            last_change_tick: 0,
            controls,
            profile,
            slot,
        }
    }

    /// Registry-assigned identity.
    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: DeviceId) {
        self.id = id;
    }

    /// Display name (the profile's name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text metadata.
    pub fn meta(&self) -> &str {
        &self.meta
    }

    /// The catalog entry this device was built from.
    pub fn profile(&self) -> &Arc<CatalogEntry> {
        &self.profile
    }

    /// Hardware slot backing this device; `None` for keyboard-class.
    pub fn slot(&self) -> Option<u32> {
        self.slot
    }

    /// Whether this device's profile is keyboard-class.
    pub fn is_keyboard_class(&self) -> bool {
        self.profile.profile().keyboard
    }

    /// Tick at which any control of this device last changed. Monotonic.
    pub fn last_change_tick(&self) -> u64 {
        self.last_change_tick
    }

    /// The owned controls, in declaration order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Whether this device is bound to exactly this catalog entry and slot.
    pub fn bound_to(&self, entry: &Arc<CatalogEntry>, slot: u32) -> bool {
        Arc::ptr_eq(&self.profile, entry) && self.slot == Some(slot)
    }

    /// Look up a control by kind and player.
    ///
    /// Linear scan in declaration order, first match wins. A miss returns
    /// the inert null control, so callers never need null checks.
    pub fn control(&self, kind: ControlKind, player: Option<u32>) -> &Control {
        self.controls
            .iter()
            .find(|c| c.kind() == kind && c.player == player)
            .unwrap_or_else(|| Control::null())
    }

    /// Look up a control by its kind's stable identifier. Not for per-tick
    /// paths.
    pub fn control_by_name(&self, name: &str, player: Option<u32>) -> &Control {
        match ControlKind::from_name(name) {
            Some(kind) => self.control(kind, player),
            None => Control::null(),
        }
    }

    /// Latch the previous tick's committed values and clear pending
    /// samples on every control.
    pub fn pre_update(&mut self, tick: u64) {
        for control in &mut self.controls {
            control.pre_update(tick);
        }
    }

    /// Read one raw sample per binding from the port and route it into the
    /// corresponding control: analog samples (with the binding's invert and
    /// scale applied) go to the bypass or shaping slot, digital samples
    /// commit immediately.
    pub fn sample(&mut self, port: &mut dyn InputPort, tick: u64) {
        let profile = Arc::clone(&self.profile);
        let slot = self.slot;
        for (control, binding) in self
            .controls
            .iter_mut()
            .zip(profile.profile().bindings.iter())
        {
            match port.sample(slot, &binding.source) {
                RawSample::Value(value) => {
                    let mut value = value * binding.scale;
                    if binding.invert {
                        value = -value;
                    }
                    if binding.raw {
                        control.set_raw_value(value);
                    } else {
                        control.set_pre_value(value);
                    }
                }
                RawSample::State(state) => control.update_with_state(state, tick),
            }
        }
    }

    /// Resolve pending analog samples, commit values, detect changes, and
    /// raise events.
    ///
    /// Runs in two passes over declaration order: the first resolves each
    /// pending sample (bypass values pass through; shaping values get the
    /// unpaired or circular dead zone, then smoothing against the previous
    /// committed value), the second commits and raises one event per
    /// changed control. A control with an obverse pairing additionally
    /// raises an event on every tick it was sampled, even unchanged: the
    /// paired axis's effective direction can change when its own raw value
    /// did not.
    pub fn post_update(&mut self, tick: u64, delta_time: f32, events: &mut Vec<InputEvent>) {
        let count = self.controls.len();

        let mut resolved: Vec<Option<f32>> = vec![None; count];
        for index in 0..count {
            let control = &self.controls[index];
            if let Some(raw) = control.raw_value() {
                resolved[index] = Some(raw);
            } else if let Some(pre) = control.pre_value() {
                let shaped = match control.obverse {
                    Some(obverse) => {
                        let obverse_pre = self
                            .control(obverse, control.player)
                            .pre_value()
                            .unwrap_or(0.0);
                        shaping::apply_circular_dead_zone(
                            pre,
                            obverse_pre,
                            control.lower_dead_zone,
                            control.upper_dead_zone,
                        )
                    }
                    None => {
                        shaping::apply_dead_zone(pre, control.lower_dead_zone, control.upper_dead_zone)
                    }
                };
                resolved[index] = Some(shaping::apply_smoothing(
                    shaped,
                    control.last_value(),
                    delta_time,
                    control.sensitivity,
                ));
            }
        }

        for index in 0..count {
            if let Some(value) = resolved[index] {
                self.controls[index].update_with_value(value, tick);
            }

            let control = &self.controls[index];
            let changed = control.has_changed();
            if changed {
                self.last_change_tick = tick;
            }
            if changed || (control.obverse.is_some() && control.was_sampled()) {
                events.push(InputEvent {
                    tick,
                    player: control.player.or(self.player),
                    device: self.id,
                    device_name: self.name.clone(),
                    control: control.kind(),
                    value: control.value(),
                    state: control.state(),
                });
            }
        }
    }

    /// Whether this device changed more recently than `other`.
    pub fn last_changed_after(&self, other: &Device) -> bool {
        self.last_change_tick > other.last_change_tick
    }

    /// Whether any menu-surface button was pressed this tick.
    pub fn menu_was_pressed(&self) -> bool {
        ControlKind::MENU_GROUP
            .iter()
            .any(|kind| self.control(*kind, None).was_pressed())
    }

    /// Left stick vector `(x, y)`.
    pub fn left_stick(&self, player: Option<u32>) -> (f32, f32) {
        (
            self.control(ControlKind::LeftStickX, player).value(),
            self.control(ControlKind::LeftStickY, player).value(),
        )
    }

    /// Right stick vector `(x, y)`.
    pub fn right_stick(&self, player: Option<u32>) -> (f32, f32) {
        (
            self.control(ControlKind::RightStickX, player).value(),
            self.control(ControlKind::RightStickY, player).value(),
        )
    }

    /// Horizontal dpad value: left reads negative, else right.
    pub fn dpad_x(&self, player: Option<u32>) -> f32 {
        let left = self.control(ControlKind::DPadLeft, player);
        if left.state() {
            -left.value()
        } else {
            self.control(ControlKind::DPadRight, player).value()
        }
    }

    /// Vertical dpad value: up reads positive, else down negative.
    /// `invert_y` flips the result.
    pub fn dpad_y(&self, invert_y: bool, player: Option<u32>) -> f32 {
        let up = self.control(ControlKind::DPadUp, player);
        let y = if up.state() {
            up.value()
        } else {
            -self.control(ControlKind::DPadDown, player).value()
        };
        if invert_y { -y } else { y }
    }

    /// Normalized dpad vector.
    pub fn dpad_vector(&self, invert_y: bool, player: Option<u32>) -> (f32, f32) {
        normalize(self.dpad_x(player), self.dpad_y(invert_y, player))
    }

    /// Primary directional vector: the dpad when deflected, else the left
    /// stick.
    pub fn direction(&self, invert_y: bool, player: Option<u32>) -> (f32, f32) {
        let (dx, dy) = self.dpad_vector(invert_y, player);
        if shaping::approximately(dx, 0.0) && shaping::approximately(dy, 0.0) {
            self.left_stick(player)
        } else {
            (dx, dy)
        }
    }
}

fn normalize(x: f32, y: f32) -> (f32, f32) {
    let magnitude = (x * x + y * y).sqrt();
    if magnitude < 1.0e-5 {
        (0.0, 0.0)
    } else {
        (x / magnitude, y / magnitude)
    }
}
