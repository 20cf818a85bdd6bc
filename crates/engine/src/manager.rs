//! Device discovery and reconciliation
//!
//! The manager diffs the live hardware enumeration against the attached
//! device list each scan. Scans are interval-gated and short-circuited by
//! an opaque enumeration signature (count + joined names), so an unchanged
//! hardware set costs one enumeration call per second and nothing else.
//!
//! Per scan, the attach pass runs before the detach pass: a device swapped
//! at the same slot inside one scan window is re-evaluated by the matcher
//! check rather than transiently lost.

use openinput_profile::{ProfileCatalog, ProfileResult};
use tracing::{debug, error, info};

use crate::device::{Device, DeviceId};
use crate::ports::InputPort;
use crate::registry::InputRegistry;

/// Seconds between hardware enumeration scans.
pub const DEVICE_REFRESH_INTERVAL: f32 = 1.0;

/// Reconciles hardware enumeration against attached devices using the
/// profile catalog.
#[derive(Debug)]
pub struct DeviceManager {
    catalog: ProfileCatalog,
    refresh_timer: f32,
    enumeration_signature: Option<String>,
    keyboard_attached: bool,
}

impl DeviceManager {
    /// A manager over the given catalog.
    pub fn new(catalog: ProfileCatalog) -> Self {
        Self {
            catalog,
            refresh_timer: 0.0,
            enumeration_signature: None,
            keyboard_attached: false,
        }
    }

    /// A manager over the built-in profile table.
    ///
    /// # Errors
    ///
    /// Returns a registration error from the built-in table; not expected
    /// in practice.
    pub fn with_builtin_profiles() -> ProfileResult<Self> {
        Ok(Self::new(ProfileCatalog::with_builtin_profiles()?))
    }

    /// The owned profile catalog.
    pub fn catalog(&self) -> &ProfileCatalog {
        &self.catalog
    }

    /// Mutable catalog access (custom profile registration).
    pub fn catalog_mut(&mut self) -> &mut ProfileCatalog {
        &mut self.catalog
    }

    /// Run one reconciliation step.
    ///
    /// The scan is skipped entirely until the refresh interval elapses
    /// (except for the very first call), then skipped cheaply when the
    /// enumeration signature is unchanged. An enumeration failure is
    /// logged and treated as an empty hardware list for this scan.
    pub fn update(
        &mut self,
        registry: &mut InputRegistry,
        port: &mut dyn InputPort,
        delta_time: f32,
    ) {
        self.refresh_timer += delta_time;
        if self.enumeration_signature.is_some() && self.refresh_timer < DEVICE_REFRESH_INTERVAL {
            return;
        }
        self.refresh_timer = 0.0;

        let names = match port.device_names() {
            Ok(names) => names,
            Err(e) => {
                error!(error = %e, "hardware enumeration failed; treating as no attached hardware");
                Vec::new()
            }
        };

        let signature = enumeration_signature(&names);
        if self.enumeration_signature.as_deref() == Some(signature.as_str()) {
            return;
        }
        debug!(%signature, "hardware enumeration changed; refreshing device list");

        self.attach_keyboard_devices(registry);
        self.attach_enumerated_devices(registry, &names);
        self.detach_missing_devices(registry, &names);

        self.enumeration_signature = Some(signature);
    }

    /// Attach the keyboard-class device once ever. No hardware slot backs
    /// it and no scan detaches it.
    fn attach_keyboard_devices(&mut self, registry: &mut InputRegistry) {
        if self.keyboard_attached || registry.has_keyboard_device() {
            self.keyboard_attached = true;
            return;
        }
        let Some(entry) = self.catalog.keyboard_entries().next().cloned() else {
            return;
        };
        registry.attach_device(Device::from_profile(entry, None));
        self.keyboard_attached = true;
    }

    fn attach_enumerated_devices(&mut self, registry: &mut InputRegistry, names: &[String]) {
        for (index, name) in names.iter().enumerate() {
            let slot = index as u32;
            let entry = match self.catalog.resolve_or_synthesize(name) {
                Ok(entry) => entry,
                Err(e) => {
                    error!(slot, device_name = %name, error = %e, "profile resolution failed; skipping slot");
                    continue;
                }
            };

            let profile = entry.profile();
            if profile.hidden {
                debug!(slot, device_name = %name, profile = %profile.name, "profile is hidden; not attaching");
                continue;
            }
            if profile.keyboard && (self.keyboard_attached || registry.has_keyboard_device()) {
                debug!(slot, device_name = %name, "keyboard-class device already attached; skipping");
                continue;
            }
            if registry.devices().iter().any(|d| d.bound_to(&entry, slot)) {
                debug!(slot, device_name = %name, profile = %profile.name, "device already attached; skipping duplicate");
                continue;
            }

            info!(slot, device_name = %name, profile = %profile.name, "hardware matched profile");
            let keyboard = profile.keyboard;
            let device_slot = if keyboard { None } else { Some(slot) };
            registry.attach_device(Device::from_profile(entry, device_slot));
            if keyboard {
                self.keyboard_attached = true;
            }
        }
    }

    /// Detach every non-keyboard device whose slot fell off the end of the
    /// enumeration or whose slot's current name no longer satisfies its
    /// profile's matcher.
    fn detach_missing_devices(&self, registry: &mut InputRegistry, names: &[String]) {
        let stale: Vec<DeviceId> = registry
            .devices()
            .iter()
            .filter(|device| {
                if device.is_keyboard_class() {
                    return false;
                }
                let Some(slot) = device.slot() else {
                    return false;
                };
                match names.get(slot as usize) {
                    Some(name) => !device.profile().matches(name),
                    None => true,
                }
            })
            .map(Device::id)
            .collect();

        for id in stale {
            registry.detach_device(id);
        }
    }
}

fn enumeration_signature(names: &[String]) -> String {
    format!("{}: {}", names.len(), names.join(", "))
}
