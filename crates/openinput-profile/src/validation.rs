//! Profile validation

use crate::types::{ControlBinding, DeviceProfile};
use crate::{ProfileError, ProfileResult};

/// Structural checks applied before a profile enters the catalog.
///
/// # Errors
///
/// Returns [`ProfileError::Validation`] describing the first failed check.
pub fn validate_profile(profile: &DeviceProfile) -> ProfileResult<()> {
    if profile.name.is_empty() {
        return Err(ProfileError::Validation(
            "Profile name cannot be empty".to_string(),
        ));
    }

    if profile.keyboard
        && (!profile.device_names.is_empty() || !profile.device_patterns.is_empty())
    {
        return Err(ProfileError::Validation(format!(
            "Keyboard-class profile '{}' must not declare device matchers",
            profile.name
        )));
    }

    if !profile.keyboard && profile.device_names.is_empty() && profile.device_patterns.is_empty() {
        return Err(ProfileError::Validation(format!(
            "Profile '{}' must declare at least one device name or pattern",
            profile.name
        )));
    }

    if !profile.hidden && profile.bindings.is_empty() {
        return Err(ProfileError::Validation(format!(
            "Profile '{}' declares no control bindings",
            profile.name
        )));
    }

    validate_shaping(&profile.name, profile.lower_dead_zone, profile.upper_dead_zone)?;
    validate_sensitivity(&profile.name, profile.sensitivity)?;

    for binding in &profile.bindings {
        validate_shaping(
            &profile.name,
            profile.lower_dead_zone_for(binding),
            profile.upper_dead_zone_for(binding),
        )?;
        validate_sensitivity(&profile.name, profile.sensitivity_for(binding))?;
        validate_obverse(profile, binding)?;
    }

    Ok(())
}

fn validate_shaping(profile_name: &str, lower: f32, upper: f32) -> ProfileResult<()> {
    if !(0.0..1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || lower >= upper {
        return Err(ProfileError::Validation(format!(
            "Profile '{profile_name}' has invalid dead-zone bounds [{lower}, {upper}]; \
             expected 0 <= lower < upper <= 1"
        )));
    }
    Ok(())
}

fn validate_sensitivity(profile_name: &str, sensitivity: f32) -> ProfileResult<()> {
    if !(sensitivity > 0.0 && sensitivity <= 1.0) {
        return Err(ProfileError::Validation(format!(
            "Profile '{profile_name}' has sensitivity {sensitivity}; expected 0 < sensitivity <= 1"
        )));
    }
    Ok(())
}

fn validate_obverse(profile: &DeviceProfile, binding: &ControlBinding) -> ProfileResult<()> {
    let Some(obverse) = binding.obverse else {
        return Ok(());
    };
    if !profile.bindings.iter().any(|b| b.control == obverse) {
        return Err(ProfileError::Validation(format!(
            "Profile '{}' pairs {} with undeclared obverse {}",
            profile.name,
            binding.control.name(),
            obverse.name()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawSource;
    use openinput_controls::ControlKind;

    fn minimal_profile() -> DeviceProfile {
        DeviceProfile::new("Test Pad")
            .with_names(["Test Pad"])
            .with_binding(ControlBinding::new(
                ControlKind::Action1,
                "Action 1",
                RawSource::Button { index: 0 },
            ))
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile(&minimal_profile()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut profile = minimal_profile();
        profile.name = String::new();
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_missing_matchers_rejected() {
        let mut profile = minimal_profile();
        profile.device_names.clear();
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_keyboard_with_matchers_rejected() {
        let profile = minimal_profile().keyboard_class();
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_inverted_dead_zone_rejected() {
        let profile = minimal_profile().with_dead_zones(0.9, 0.2);
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_binding_override_dead_zone_rejected() {
        let profile = DeviceProfile::new("Bad Override")
            .with_names(["Bad Override"])
            .with_binding(
                ControlBinding::new(
                    ControlKind::LeftStickX,
                    "Left Stick X",
                    RawSource::Axis { index: 0 },
                )
                .with_dead_zones(0.8, 0.3),
            );
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_zero_sensitivity_rejected() {
        let profile = minimal_profile().with_sensitivity(0.0);
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_dangling_obverse_rejected() {
        let profile = DeviceProfile::new("Dangling")
            .with_names(["Dangling"])
            .with_binding(
                ControlBinding::new(
                    ControlKind::LeftStickX,
                    "Left Stick X",
                    RawSource::Axis { index: 0 },
                )
                .with_obverse(ControlKind::LeftStickY),
            );
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_hidden_profile_without_bindings_passes() {
        let profile = DeviceProfile::new("Suppressed")
            .with_patterns([r"(?i)suppressed"])
            .hidden_profile();
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_unknown_profile_validates() {
        assert!(validate_profile(&DeviceProfile::unknown("Weird Pad 9000")).is_ok());
    }
}
