//! Profile type definitions

use openinput_controls::ControlKind;
use serde::{Deserialize, Serialize};

/// Address of one raw hardware input, interpreted by the host's input port.
///
/// `Axis` and `Button` are relative to the device's bound hardware slot;
/// the remaining variants are slot-independent and used by keyboard-class
/// profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawSource {
    /// Analog axis on the bound hardware slot.
    Axis {
        /// Zero-based axis index as reported by the hardware layer.
        index: u32,
    },
    /// Digital button on the bound hardware slot.
    Button {
        /// Zero-based button index as reported by the hardware layer.
        index: u32,
    },
    /// Named key on the system keyboard.
    Key {
        /// Key name in the host's convention (e.g. `"space"`, `"w"`).
        key: String,
    },
    /// Two keys composed into a bipolar `[-1, 1]` axis.
    KeyAxis {
        /// Key driving the axis toward -1.
        negative: String,
        /// Key driving the axis toward +1.
        positive: String,
    },
    /// Mouse movement delta on one pointer axis.
    MouseAxis {
        /// Which pointer axis to read.
        axis: PointerAxis,
    },
    /// Mouse button.
    MouseButton {
        /// Zero-based button index (0 = primary).
        index: u32,
    },
}

/// Pointer axis selector for [`RawSource::MouseAxis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAxis {
    /// Horizontal movement delta.
    X,
    /// Vertical movement delta.
    Y,
    /// Scroll wheel delta.
    Wheel,
}

/// One declared logical input: a raw source bound to a control kind plus
/// per-control shaping overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlBinding {
    /// Logical control this binding feeds.
    pub control: ControlKind,
    /// Display handle, e.g. `"Left Stick X"`.
    pub name: String,
    /// Raw source address.
    pub source: RawSource,

    /// Route analog samples through the bypass path (no dead zone or
    /// smoothing). Used for sources the host already shapes, e.g. mouse
    /// deltas.
    #[serde(default)]
    pub raw: bool,
    /// Negate analog samples before the pipeline.
    #[serde(default)]
    pub invert: bool,
    /// Scale analog samples before the pipeline.
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Override of the profile's lower dead-zone bound.
    #[serde(default)]
    pub lower_dead_zone: Option<f32>,
    /// Override of the profile's upper dead-zone bound.
    #[serde(default)]
    pub upper_dead_zone: Option<f32>,
    /// Override of the profile's smoothing sensitivity.
    #[serde(default)]
    pub sensitivity: Option<f32>,
    /// Override of the profile's digital state threshold.
    #[serde(default)]
    pub state_threshold: Option<f32>,

    /// Paired perpendicular axis for circular dead zones, referencing a
    /// control declared by the same profile.
    #[serde(default)]
    pub obverse: Option<ControlKind>,
}

impl ControlBinding {
    /// Create a binding with no overrides.
    pub fn new(control: ControlKind, name: impl Into<String>, source: RawSource) -> Self {
        Self {
            control,
            name: name.into(),
            source,
            raw: false,
            invert: false,
            scale: default_scale(),
            lower_dead_zone: None,
            upper_dead_zone: None,
            sensitivity: None,
            state_threshold: None,
            obverse: None,
        }
    }

    /// Route this binding's samples through the bypass path.
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Negate samples before the pipeline.
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Scale samples before the pipeline.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Override both dead-zone bounds.
    pub fn with_dead_zones(mut self, lower: f32, upper: f32) -> Self {
        self.lower_dead_zone = Some(lower);
        self.upper_dead_zone = Some(upper);
        self
    }

    /// Override the smoothing sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = Some(sensitivity);
        self
    }

    /// Override the digital state threshold.
    pub fn with_state_threshold(mut self, threshold: f32) -> Self {
        self.state_threshold = Some(threshold);
        self
    }

    /// Pair this axis with its perpendicular partner for circular dead
    /// zones.
    pub fn with_obverse(mut self, obverse: ControlKind) -> Self {
        self.obverse = Some(obverse);
        self
    }
}

/// Declarative mapping from a class of physical hardware to a logical
/// control layout and shaping parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceProfile {
    /// Human-readable profile name.
    pub name: String,
    /// Free-text metadata shown alongside the device.
    #[serde(default)]
    pub meta: String,

    /// Exact reported hardware names this profile matches.
    #[serde(default)]
    pub device_names: Vec<String>,
    /// Regex patterns over the reported hardware name.
    #[serde(default)]
    pub device_patterns: Vec<String>,

    /// Matches but must never be attached; suppresses known-bad
    /// enumerations.
    #[serde(default)]
    pub hidden: bool,
    /// Keyboard-class: no hardware slot backs the device and at most one
    /// instance is ever attached.
    #[serde(default)]
    pub keyboard: bool,

    /// Default lower dead-zone bound for analog bindings.
    #[serde(default = "default_lower_dead_zone")]
    pub lower_dead_zone: f32,
    /// Default upper dead-zone bound for analog bindings.
    #[serde(default = "default_upper_dead_zone")]
    pub upper_dead_zone: f32,
    /// Default smoothing sensitivity; 1.0 disables smoothing.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
    /// Default digital state threshold.
    #[serde(default)]
    pub state_threshold: f32,

    /// Presentation tie-break for devices of this profile; never affects
    /// behavior.
    #[serde(default)]
    pub sort_order: i32,

    /// Declared logical inputs, in layout order.
    #[serde(default)]
    pub bindings: Vec<ControlBinding>,
}

fn default_scale() -> f32 {
    1.0
}

fn default_lower_dead_zone() -> f32 {
    0.2
}

fn default_upper_dead_zone() -> f32 {
    0.9
}

fn default_sensitivity() -> f32 {
    1.0
}

impl DeviceProfile {
    /// Create an empty profile with default shaping parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: String::new(),
            device_names: Vec::new(),
            device_patterns: Vec::new(),
            hidden: false,
            keyboard: false,
            lower_dead_zone: default_lower_dead_zone(),
            upper_dead_zone: default_upper_dead_zone(),
            sensitivity: default_sensitivity(),
            state_threshold: 0.0,
            sort_order: 0,
            bindings: Vec::new(),
        }
    }

    /// Set the free-text metadata.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    /// Add exact reported-name matchers.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.device_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add regex pattern matchers over the reported name.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.device_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Mark this profile as matched-but-never-attached.
    pub fn hidden_profile(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Mark this profile as keyboard-class.
    pub fn keyboard_class(mut self) -> Self {
        self.keyboard = true;
        self
    }

    /// Set the default dead-zone bounds.
    pub fn with_dead_zones(mut self, lower: f32, upper: f32) -> Self {
        self.lower_dead_zone = lower;
        self.upper_dead_zone = upper;
        self
    }

    /// Set the default smoothing sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the presentation sort order.
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Append a declared logical input.
    pub fn with_binding(mut self, binding: ControlBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Synthesize the permissive profile used for hardware that matched
    /// nothing in the catalog: ten generic analogs and twenty generic
    /// buttons, matched by the exact reported name so the same hardware
    /// resolves to this entry on every later scan.
    pub fn unknown(device_name: &str) -> Self {
        let mut profile = DeviceProfile::new(format!("Unknown Device ({device_name})"))
            .with_meta("Synthesized profile for unmatched hardware")
            .with_names([device_name])
            .with_sort_order(100);

        for index in 0..10u32 {
            if let Some(kind) = ControlKind::analog(index as usize) {
                profile.bindings.push(ControlBinding::new(
                    kind,
                    format!("Analog {index}"),
                    RawSource::Axis { index },
                ));
            }
        }
        for index in 0..20u32 {
            if let Some(kind) = ControlKind::button(index as usize) {
                profile.bindings.push(ControlBinding::new(
                    kind,
                    format!("Button {index}"),
                    RawSource::Button { index },
                ));
            }
        }

        profile
    }

    /// Resolved lower dead zone for a binding (override or profile default).
    pub fn lower_dead_zone_for(&self, binding: &ControlBinding) -> f32 {
        binding.lower_dead_zone.unwrap_or(self.lower_dead_zone)
    }

    /// Resolved upper dead zone for a binding.
    pub fn upper_dead_zone_for(&self, binding: &ControlBinding) -> f32 {
        binding.upper_dead_zone.unwrap_or(self.upper_dead_zone)
    }

    /// Resolved sensitivity for a binding.
    pub fn sensitivity_for(&self, binding: &ControlBinding) -> f32 {
        binding.sensitivity.unwrap_or(self.sensitivity)
    }

    /// Resolved state threshold for a binding.
    pub fn state_threshold_for(&self, binding: &ControlBinding) -> f32 {
        binding.state_threshold.unwrap_or(self.state_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = DeviceProfile::new("Test Pad")
            .with_meta("test")
            .with_names(["Test Pad 2000"])
            .with_patterns([r"(?i)test pad"])
            .with_binding(ControlBinding::new(
                ControlKind::Action1,
                "Action 1",
                RawSource::Button { index: 0 },
            ));

        assert_eq!(profile.name, "Test Pad");
        assert_eq!(profile.device_names, vec!["Test Pad 2000"]);
        assert_eq!(profile.bindings.len(), 1);
        assert!(!profile.hidden);
        assert!(!profile.keyboard);
    }

    #[test]
    fn test_default_shaping_parameters() {
        let profile = DeviceProfile::new("Defaults");
        assert_eq!(profile.lower_dead_zone, 0.2);
        assert_eq!(profile.upper_dead_zone, 0.9);
        assert_eq!(profile.sensitivity, 1.0);
        assert_eq!(profile.state_threshold, 0.0);
    }

    #[test]
    fn test_binding_overrides_resolve() {
        let profile = DeviceProfile::new("Overrides").with_binding(
            ControlBinding::new(
                ControlKind::LeftTrigger,
                "Left Trigger",
                RawSource::Axis { index: 2 },
            )
            .with_dead_zones(0.05, 0.95)
            .with_sensitivity(0.5),
        );

        let binding = &profile.bindings[0];
        assert_eq!(profile.lower_dead_zone_for(binding), 0.05);
        assert_eq!(profile.upper_dead_zone_for(binding), 0.95);
        assert_eq!(profile.sensitivity_for(binding), 0.5);
        assert_eq!(profile.state_threshold_for(binding), 0.0);
    }

    #[test]
    fn test_unknown_profile_layout() {
        let profile = DeviceProfile::unknown("Weird Pad 9000");

        assert!(profile.name.contains("Weird Pad 9000"));
        assert_eq!(profile.device_names, vec!["Weird Pad 9000"]);
        assert!(!profile.hidden);
        assert!(!profile.keyboard);
        assert_eq!(profile.bindings.len(), 30);
        assert_eq!(profile.bindings[0].control, ControlKind::Analog0);
        assert_eq!(profile.bindings[10].control, ControlKind::Button0);
        assert_eq!(profile.bindings[29].control, ControlKind::Button19);
    }

    #[test]
    fn test_descriptor_deserializes_with_defaults() {
        let json = r#"{
            "name": "Minimal Pad",
            "device_names": ["Minimal Pad"],
            "bindings": [
                {
                    "control": "Action1",
                    "name": "Action 1",
                    "source": { "button": { "index": 0 } }
                }
            ]
        }"#;

        let profile: DeviceProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.lower_dead_zone, 0.2);
        assert_eq!(profile.upper_dead_zone, 0.9);
        assert_eq!(profile.bindings[0].scale, 1.0);
        assert!(!profile.bindings[0].raw);
        assert!(profile.bindings[0].obverse.is_none());
    }
}
