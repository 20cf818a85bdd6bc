//! Virtual input port for tests and examples
//!
//! A scriptable [`InputPort`] backed by in-memory state: tests plug and
//! unplug hardware by editing the device-name list, drive axes/buttons/keys
//! directly, and inject enumeration failures.

use std::collections::{HashMap, HashSet};

use openinput_profile::{PointerAxis, RawSource};

use crate::ports::{InputPort, PortError, RawSample};

/// Scriptable in-memory implementation of [`InputPort`].
#[derive(Debug, Default)]
pub struct VirtualInputPort {
    device_names: Vec<String>,
    axes: HashMap<(u32, u32), f32>,
    buttons: HashMap<(u32, u32), bool>,
    keys: HashSet<String>,
    mouse_deltas: [f32; 3],
    mouse_buttons: HashSet<u32>,
    fail_next_enumeration: bool,
}

impl VirtualInputPort {
    /// A port with no connected hardware.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the enumerated hardware names (slot order).
    pub fn set_device_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.device_names = names.into_iter().map(Into::into).collect();
    }

    /// Drive an analog axis on a slot.
    pub fn set_axis(&mut self, slot: u32, index: u32, value: f32) {
        self.axes.insert((slot, index), value);
    }

    /// Drive a button on a slot.
    pub fn set_button(&mut self, slot: u32, index: u32, pressed: bool) {
        self.buttons.insert((slot, index), pressed);
    }

    /// Press a named key.
    pub fn press_key(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    /// Release a named key.
    pub fn release_key(&mut self, key: &str) {
        self.keys.remove(key);
    }

    /// Drive a mouse movement delta.
    pub fn set_mouse_delta(&mut self, axis: PointerAxis, value: f32) {
        self.mouse_deltas[mouse_axis_index(axis)] = value;
    }

    /// Drive a mouse button.
    pub fn set_mouse_button(&mut self, index: u32, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(index);
        } else {
            self.mouse_buttons.remove(&index);
        }
    }

    /// Make the next enumeration call fail (one-shot).
    pub fn fail_next_enumeration(&mut self) {
        self.fail_next_enumeration = true;
    }
}

fn mouse_axis_index(axis: PointerAxis) -> usize {
    match axis {
        PointerAxis::X => 0,
        PointerAxis::Y => 1,
        PointerAxis::Wheel => 2,
    }
}

impl InputPort for VirtualInputPort {
    fn device_names(&mut self) -> Result<Vec<String>, PortError> {
        if self.fail_next_enumeration {
            self.fail_next_enumeration = false;
            return Err(PortError::Enumeration(
                "injected enumeration failure".to_string(),
            ));
        }
        Ok(self.device_names.clone())
    }

    fn sample(&mut self, slot: Option<u32>, source: &RawSource) -> RawSample {
        match source {
            RawSource::Axis { index } => {
                let value = slot
                    .and_then(|s| self.axes.get(&(s, *index)).copied())
                    .unwrap_or(0.0);
                RawSample::Value(value)
            }
            RawSource::Button { index } => {
                let pressed = slot
                    .and_then(|s| self.buttons.get(&(s, *index)).copied())
                    .unwrap_or(false);
                RawSample::State(pressed)
            }
            RawSource::Key { key } => RawSample::State(self.keys.contains(key)),
            RawSource::KeyAxis { negative, positive } => {
                let pos = if self.keys.contains(positive) { 1.0 } else { 0.0 };
                let neg = if self.keys.contains(negative) { 1.0 } else { 0.0 };
                RawSample::Value(pos - neg)
            }
            RawSource::MouseAxis { axis } => {
                RawSample::Value(self.mouse_deltas[mouse_axis_index(*axis)])
            }
            RawSource::MouseButton { index } => {
                RawSample::State(self.mouse_buttons.contains(index))
            }
        }
    }
}
