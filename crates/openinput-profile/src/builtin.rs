//! Built-in profile registration table
//!
//! The profile set is closed per build, so discovery is an explicit table:
//! every known profile is constructed here and registered by
//! [`ProfileCatalog::with_builtin_profiles`](crate::ProfileCatalog::with_builtin_profiles)
//! at startup.

use openinput_controls::ControlKind;

use crate::types::{ControlBinding, DeviceProfile, PointerAxis, RawSource};

/// Every profile shipped with the library, in registration order.
pub fn builtin_profiles() -> Vec<DeviceProfile> {
    vec![
        keyboard_and_mouse(),
        xbox_360_controller(),
        dualshock_4_controller(),
        suppressed_virtual_composite(),
    ]
}

fn key(name: &str) -> RawSource {
    RawSource::Key {
        key: name.to_string(),
    }
}

fn keyboard_and_mouse() -> DeviceProfile {
    DeviceProfile::new("Keyboard & Mouse")
        .keyboard_class()
        .with_meta("Standard desktop keyboard and mouse")
        .with_sort_order(50)
        // Key axes carry clean -1/0/1 samples, so the dead zone is the
        // identity band.
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftStickX,
                "Move X",
                RawSource::KeyAxis {
                    negative: "a".to_string(),
                    positive: "d".to_string(),
                },
            )
            .with_dead_zones(0.0, 1.0),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftStickY,
                "Move Y",
                RawSource::KeyAxis {
                    negative: "s".to_string(),
                    positive: "w".to_string(),
                },
            )
            .with_dead_zones(0.0, 1.0),
        )
        // Mouse deltas arrive pre-shaped by the host; bypass the pipeline.
        .with_binding(
            ControlBinding::new(
                ControlKind::RightStickX,
                "Look X",
                RawSource::MouseAxis {
                    axis: PointerAxis::X,
                },
            )
            .raw()
            .with_scale(0.1),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::RightStickY,
                "Look Y",
                RawSource::MouseAxis {
                    axis: PointerAxis::Y,
                },
            )
            .raw()
            .with_scale(0.1),
        )
        .with_binding(ControlBinding::new(
            ControlKind::DPadUp,
            "Up Arrow",
            key("up"),
        ))
        .with_binding(ControlBinding::new(
            ControlKind::DPadDown,
            "Down Arrow",
            key("down"),
        ))
        .with_binding(ControlBinding::new(
            ControlKind::DPadLeft,
            "Left Arrow",
            key("left"),
        ))
        .with_binding(ControlBinding::new(
            ControlKind::DPadRight,
            "Right Arrow",
            key("right"),
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Action1,
            "Space",
            key("space"),
        ))
        .with_binding(ControlBinding::new(ControlKind::Action2, "E", key("e")))
        .with_binding(ControlBinding::new(ControlKind::Action3, "Q", key("q")))
        .with_binding(ControlBinding::new(ControlKind::Action4, "R", key("r")))
        .with_binding(ControlBinding::new(
            ControlKind::RightTrigger,
            "Left Mouse Button",
            RawSource::MouseButton { index: 0 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::LeftTrigger,
            "Right Mouse Button",
            RawSource::MouseButton { index: 1 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Menu,
            "Escape",
            key("escape"),
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Start,
            "Return",
            key("return"),
        ))
}

fn xbox_360_controller() -> DeviceProfile {
    DeviceProfile::new("Xbox 360 Controller")
        .with_meta("Microsoft Xbox 360 wired/wireless pad")
        .with_names([
            "Xbox 360 Controller",
            "XBOX 360 For Windows (Controller)",
            "Controller (XBOX 360 For Windows)",
        ])
        .with_patterns([r"(?i)x[\s-]?box\s*360"])
        .with_sort_order(10)
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftStickX,
                "Left Stick X",
                RawSource::Axis { index: 0 },
            )
            .with_obverse(ControlKind::LeftStickY),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftStickY,
                "Left Stick Y",
                RawSource::Axis { index: 1 },
            )
            .inverted()
            .with_obverse(ControlKind::LeftStickX),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::RightStickX,
                "Right Stick X",
                RawSource::Axis { index: 3 },
            )
            .with_obverse(ControlKind::RightStickY),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::RightStickY,
                "Right Stick Y",
                RawSource::Axis { index: 4 },
            )
            .inverted()
            .with_obverse(ControlKind::RightStickX),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftTrigger,
                "Left Trigger",
                RawSource::Axis { index: 2 },
            )
            .with_dead_zones(0.1, 0.95),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::RightTrigger,
                "Right Trigger",
                RawSource::Axis { index: 5 },
            )
            .with_dead_zones(0.1, 0.95),
        )
        .with_binding(ControlBinding::new(
            ControlKind::Action1,
            "A",
            RawSource::Button { index: 0 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Action2,
            "B",
            RawSource::Button { index: 1 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Action3,
            "X",
            RawSource::Button { index: 2 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Action4,
            "Y",
            RawSource::Button { index: 3 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::LeftBumper,
            "Left Bumper",
            RawSource::Button { index: 4 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::RightBumper,
            "Right Bumper",
            RawSource::Button { index: 5 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Back,
            "Back",
            RawSource::Button { index: 6 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Start,
            "Start",
            RawSource::Button { index: 7 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::LeftStickButton,
            "Left Stick Button",
            RawSource::Button { index: 8 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::RightStickButton,
            "Right Stick Button",
            RawSource::Button { index: 9 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::DPadUp,
            "DPad Up",
            RawSource::Button { index: 10 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::DPadDown,
            "DPad Down",
            RawSource::Button { index: 11 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::DPadLeft,
            "DPad Left",
            RawSource::Button { index: 12 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::DPadRight,
            "DPad Right",
            RawSource::Button { index: 13 },
        ))
}

fn dualshock_4_controller() -> DeviceProfile {
    DeviceProfile::new("DualShock 4 Controller")
        .with_meta("Sony DualShock 4 pad")
        .with_names([
            "Sony Computer Entertainment Wireless Controller",
            "Wireless Controller",
        ])
        .with_patterns([r"(?i)dual\s*shock"])
        .with_sort_order(10)
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftStickX,
                "Left Stick X",
                RawSource::Axis { index: 0 },
            )
            .with_obverse(ControlKind::LeftStickY),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftStickY,
                "Left Stick Y",
                RawSource::Axis { index: 1 },
            )
            .inverted()
            .with_obverse(ControlKind::LeftStickX),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::RightStickX,
                "Right Stick X",
                RawSource::Axis { index: 2 },
            )
            .with_obverse(ControlKind::RightStickY),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::RightStickY,
                "Right Stick Y",
                RawSource::Axis { index: 5 },
            )
            .inverted()
            .with_obverse(ControlKind::RightStickX),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::LeftTrigger,
                "L2",
                RawSource::Axis { index: 3 },
            )
            .with_dead_zones(0.1, 0.95),
        )
        .with_binding(
            ControlBinding::new(
                ControlKind::RightTrigger,
                "R2",
                RawSource::Axis { index: 4 },
            )
            .with_dead_zones(0.1, 0.95),
        )
        .with_binding(ControlBinding::new(
            ControlKind::Action1,
            "Cross",
            RawSource::Button { index: 1 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Action2,
            "Circle",
            RawSource::Button { index: 2 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Action3,
            "Square",
            RawSource::Button { index: 0 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Action4,
            "Triangle",
            RawSource::Button { index: 3 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::LeftBumper,
            "L1",
            RawSource::Button { index: 4 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::RightBumper,
            "R1",
            RawSource::Button { index: 5 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Select,
            "Share",
            RawSource::Button { index: 8 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::Start,
            "Options",
            RawSource::Button { index: 9 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::LeftStickButton,
            "L3",
            RawSource::Button { index: 10 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::RightStickButton,
            "R3",
            RawSource::Button { index: 11 },
        ))
        .with_binding(ControlBinding::new(
            ControlKind::System,
            "PS",
            RawSource::Button { index: 12 },
        ))
}

/// Some hosts enumerate a phantom composite entry alongside real pads; it
/// matches here so it is recognized and never attached.
fn suppressed_virtual_composite() -> DeviceProfile {
    DeviceProfile::new("Virtual HID Composite")
        .with_meta("Known-bad composite enumeration; recognized but never attached")
        .with_patterns([r"(?i)virtual hid composite", r"(?i)vjoy emulated"])
        .hidden_profile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_profile;

    #[test]
    fn test_builtin_profiles_validate() {
        for profile in builtin_profiles() {
            validate_profile(&profile)
                .unwrap_or_else(|e| panic!("builtin profile '{}' invalid: {e}", profile.name));
        }
    }

    #[test]
    fn test_exactly_one_keyboard_class_profile() {
        let keyboards = builtin_profiles().iter().filter(|p| p.keyboard).count();
        assert_eq!(keyboards, 1);
    }

    #[test]
    fn test_stick_axes_are_obverse_paired() {
        for profile in builtin_profiles() {
            for binding in &profile.bindings {
                if let Some(obverse) = binding.obverse {
                    assert!(
                        profile.bindings.iter().any(|b| b.control == obverse),
                        "profile '{}' has dangling obverse",
                        profile.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_hidden_profile_matches_phantom_name() {
        let hidden = suppressed_virtual_composite();
        assert!(hidden.hidden);
        assert!(!hidden.device_patterns.is_empty());
    }
}
