//! Logical control identity
//!
//! A [`ControlKind`] tags one logical input independent of the physical
//! hardware that produces it. Profiles bind raw hardware sources to kinds;
//! lookups and change events are keyed by kind.

use serde::{Deserialize, Serialize};

/// Logical control tag, stable across frames and devices.
///
/// The `Analog0..9` and `Button0..19` variants are generic slots used by
/// synthesized profiles for hardware that matched nothing in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControlKind {
    /// Sentinel kind carried by the inert null control.
    #[default]
    None,

    /// Left analog stick, horizontal axis.
    LeftStickX,
    /// Left analog stick, vertical axis.
    LeftStickY,
    /// Left analog stick click.
    LeftStickButton,
    /// Right analog stick, horizontal axis.
    RightStickX,
    /// Right analog stick, vertical axis.
    RightStickY,
    /// Right analog stick click.
    RightStickButton,

    /// Directional pad up.
    DPadUp,
    /// Directional pad down.
    DPadDown,
    /// Directional pad left.
    DPadLeft,
    /// Directional pad right.
    DPadRight,

    /// Primary face button (bottom).
    Action1,
    /// Secondary face button (right).
    Action2,
    /// Tertiary face button (left).
    Action3,
    /// Quaternary face button (top).
    Action4,

    /// Left analog trigger.
    LeftTrigger,
    /// Right analog trigger.
    RightTrigger,
    /// Left shoulder bumper.
    LeftBumper,
    /// Right shoulder bumper.
    RightBumper,

    /// Back / view button.
    Back,
    /// Start button.
    Start,
    /// Select button.
    Select,
    /// System / guide button.
    System,
    /// Pause button.
    Pause,
    /// Menu button.
    Menu,

    /// Generic analog slot 0 (unknown-device profiles).
    Analog0,
    /// Generic analog slot 1.
    Analog1,
    /// Generic analog slot 2.
    Analog2,
    /// Generic analog slot 3.
    Analog3,
    /// Generic analog slot 4.
    Analog4,
    /// Generic analog slot 5.
    Analog5,
    /// Generic analog slot 6.
    Analog6,
    /// Generic analog slot 7.
    Analog7,
    /// Generic analog slot 8.
    Analog8,
    /// Generic analog slot 9.
    Analog9,

    /// Generic button slot 0 (unknown-device profiles).
    Button0,
    /// Generic button slot 1.
    Button1,
    /// Generic button slot 2.
    Button2,
    /// Generic button slot 3.
    Button3,
    /// Generic button slot 4.
    Button4,
    /// Generic button slot 5.
    Button5,
    /// Generic button slot 6.
    Button6,
    /// Generic button slot 7.
    Button7,
    /// Generic button slot 8.
    Button8,
    /// Generic button slot 9.
    Button9,
    /// Generic button slot 10.
    Button10,
    /// Generic button slot 11.
    Button11,
    /// Generic button slot 12.
    Button12,
    /// Generic button slot 13.
    Button13,
    /// Generic button slot 14.
    Button14,
    /// Generic button slot 15.
    Button15,
    /// Generic button slot 16.
    Button16,
    /// Generic button slot 17.
    Button17,
    /// Generic button slot 18.
    Button18,
    /// Generic button slot 19.
    Button19,
}

impl ControlKind {
    /// Every kind, in declaration order.
    pub const ALL: [ControlKind; 55] = [
        ControlKind::None,
        ControlKind::LeftStickX,
        ControlKind::LeftStickY,
        ControlKind::LeftStickButton,
        ControlKind::RightStickX,
        ControlKind::RightStickY,
        ControlKind::RightStickButton,
        ControlKind::DPadUp,
        ControlKind::DPadDown,
        ControlKind::DPadLeft,
        ControlKind::DPadRight,
        ControlKind::Action1,
        ControlKind::Action2,
        ControlKind::Action3,
        ControlKind::Action4,
        ControlKind::LeftTrigger,
        ControlKind::RightTrigger,
        ControlKind::LeftBumper,
        ControlKind::RightBumper,
        ControlKind::Back,
        ControlKind::Start,
        ControlKind::Select,
        ControlKind::System,
        ControlKind::Pause,
        ControlKind::Menu,
        ControlKind::Analog0,
        ControlKind::Analog1,
        ControlKind::Analog2,
        ControlKind::Analog3,
        ControlKind::Analog4,
        ControlKind::Analog5,
        ControlKind::Analog6,
        ControlKind::Analog7,
        ControlKind::Analog8,
        ControlKind::Analog9,
        ControlKind::Button0,
        ControlKind::Button1,
        ControlKind::Button2,
        ControlKind::Button3,
        ControlKind::Button4,
        ControlKind::Button5,
        ControlKind::Button6,
        ControlKind::Button7,
        ControlKind::Button8,
        ControlKind::Button9,
        ControlKind::Button10,
        ControlKind::Button11,
        ControlKind::Button12,
        ControlKind::Button13,
        ControlKind::Button14,
        ControlKind::Button15,
        ControlKind::Button16,
        ControlKind::Button17,
        ControlKind::Button18,
        ControlKind::Button19,
    ];

    /// Stable identifier for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            ControlKind::None => "None",
            ControlKind::LeftStickX => "LeftStickX",
            ControlKind::LeftStickY => "LeftStickY",
            ControlKind::LeftStickButton => "LeftStickButton",
            ControlKind::RightStickX => "RightStickX",
            ControlKind::RightStickY => "RightStickY",
            ControlKind::RightStickButton => "RightStickButton",
            ControlKind::DPadUp => "DPadUp",
            ControlKind::DPadDown => "DPadDown",
            ControlKind::DPadLeft => "DPadLeft",
            ControlKind::DPadRight => "DPadRight",
            ControlKind::Action1 => "Action1",
            ControlKind::Action2 => "Action2",
            ControlKind::Action3 => "Action3",
            ControlKind::Action4 => "Action4",
            ControlKind::LeftTrigger => "LeftTrigger",
            ControlKind::RightTrigger => "RightTrigger",
            ControlKind::LeftBumper => "LeftBumper",
            ControlKind::RightBumper => "RightBumper",
            ControlKind::Back => "Back",
            ControlKind::Start => "Start",
            ControlKind::Select => "Select",
            ControlKind::System => "System",
            ControlKind::Pause => "Pause",
            ControlKind::Menu => "Menu",
            ControlKind::Analog0 => "Analog0",
            ControlKind::Analog1 => "Analog1",
            ControlKind::Analog2 => "Analog2",
            ControlKind::Analog3 => "Analog3",
            ControlKind::Analog4 => "Analog4",
            ControlKind::Analog5 => "Analog5",
            ControlKind::Analog6 => "Analog6",
            ControlKind::Analog7 => "Analog7",
            ControlKind::Analog8 => "Analog8",
            ControlKind::Analog9 => "Analog9",
            ControlKind::Button0 => "Button0",
            ControlKind::Button1 => "Button1",
            ControlKind::Button2 => "Button2",
            ControlKind::Button3 => "Button3",
            ControlKind::Button4 => "Button4",
            ControlKind::Button5 => "Button5",
            ControlKind::Button6 => "Button6",
            ControlKind::Button7 => "Button7",
            ControlKind::Button8 => "Button8",
            ControlKind::Button9 => "Button9",
            ControlKind::Button10 => "Button10",
            ControlKind::Button11 => "Button11",
            ControlKind::Button12 => "Button12",
            ControlKind::Button13 => "Button13",
            ControlKind::Button14 => "Button14",
            ControlKind::Button15 => "Button15",
            ControlKind::Button16 => "Button16",
            ControlKind::Button17 => "Button17",
            ControlKind::Button18 => "Button18",
            ControlKind::Button19 => "Button19",
        }
    }

    /// Reverse lookup by stable identifier.
    ///
    /// Linear scan over [`ControlKind::ALL`]; fine for configuration and
    /// tooling paths, not for per-tick code.
    pub fn from_name(name: &str) -> Option<ControlKind> {
        ControlKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Nth generic analog slot, if it exists.
    pub const fn analog(index: usize) -> Option<ControlKind> {
        match index {
            0 => Some(ControlKind::Analog0),
            1 => Some(ControlKind::Analog1),
            2 => Some(ControlKind::Analog2),
            3 => Some(ControlKind::Analog3),
            4 => Some(ControlKind::Analog4),
            5 => Some(ControlKind::Analog5),
            6 => Some(ControlKind::Analog6),
            7 => Some(ControlKind::Analog7),
            8 => Some(ControlKind::Analog8),
            9 => Some(ControlKind::Analog9),
            _ => None,
        }
    }

    /// Nth generic button slot, if it exists.
    pub const fn button(index: usize) -> Option<ControlKind> {
        match index {
            0 => Some(ControlKind::Button0),
            1 => Some(ControlKind::Button1),
            2 => Some(ControlKind::Button2),
            3 => Some(ControlKind::Button3),
            4 => Some(ControlKind::Button4),
            5 => Some(ControlKind::Button5),
            6 => Some(ControlKind::Button6),
            7 => Some(ControlKind::Button7),
            8 => Some(ControlKind::Button8),
            9 => Some(ControlKind::Button9),
            10 => Some(ControlKind::Button10),
            11 => Some(ControlKind::Button11),
            12 => Some(ControlKind::Button12),
            13 => Some(ControlKind::Button13),
            14 => Some(ControlKind::Button14),
            15 => Some(ControlKind::Button15),
            16 => Some(ControlKind::Button16),
            17 => Some(ControlKind::Button17),
            18 => Some(ControlKind::Button18),
            19 => Some(ControlKind::Button19),
            _ => None,
        }
    }

    /// Buttons conventionally bound to a pause/menu surface.
    pub const MENU_GROUP: [ControlKind; 6] = [
        ControlKind::Back,
        ControlKind::Start,
        ControlKind::Select,
        ControlKind::System,
        ControlKind::Pause,
        ControlKind::Menu,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in ControlKind::ALL {
            assert_eq!(ControlKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(ControlKind::from_name("WarpDrive"), None);
        assert_eq!(ControlKind::from_name(""), None);
    }

    #[test]
    fn test_generic_slots() {
        assert_eq!(ControlKind::analog(0), Some(ControlKind::Analog0));
        assert_eq!(ControlKind::analog(9), Some(ControlKind::Analog9));
        assert_eq!(ControlKind::analog(10), None);
        assert_eq!(ControlKind::button(19), Some(ControlKind::Button19));
        assert_eq!(ControlKind::button(20), None);
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&ControlKind::LeftStickX).unwrap();
        assert_eq!(json, "\"LeftStickX\"");
    }
}
