//! Compiled profile catalog
//!
//! The catalog owns every registered profile, compiled for matching:
//! pattern strings become [`regex::Regex`] at registration so the per-scan
//! resolution path never recompiles. Resolution runs an exact-name pass
//! over all entries before the pattern pass, so a hardware name that is
//! both exactly listed and pattern-covered resolves to the exact entry.

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, warn};

use crate::types::DeviceProfile;
use crate::validation::validate_profile;
use crate::{ProfileError, ProfileResult};

/// A registered profile with its compiled pattern matchers.
#[derive(Debug)]
pub struct CatalogEntry {
    profile: DeviceProfile,
    patterns: Vec<Regex>,
}

impl CatalogEntry {
    fn compile(profile: DeviceProfile) -> ProfileResult<Self> {
        let mut patterns = Vec::with_capacity(profile.device_patterns.len());
        for pattern in &profile.device_patterns {
            let regex = Regex::new(pattern).map_err(|e| ProfileError::Pattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            patterns.push(regex);
        }
        Ok(Self { profile, patterns })
    }

    /// The profile descriptor.
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Whether `device_name` is exactly listed by this profile.
    pub fn matches_exact(&self, device_name: &str) -> bool {
        self.profile.device_names.iter().any(|n| n == device_name)
    }

    /// Whether any compiled pattern matches `device_name`.
    pub fn matches_pattern(&self, device_name: &str) -> bool {
        self.patterns.iter().any(|r| r.is_match(device_name))
    }

    /// Whether this profile recognizes `device_name` at all.
    pub fn matches(&self, device_name: &str) -> bool {
        self.matches_exact(device_name) || self.matches_pattern(device_name)
    }
}

/// Registry of every known profile, populated once at startup and extended
/// at runtime only by unknown-profile synthesis.
#[derive(Debug, Default)]
pub struct ProfileCatalog {
    entries: Vec<Arc<CatalogEntry>>,
}

impl ProfileCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog populated from the built-in registration table.
    ///
    /// # Errors
    ///
    /// Returns the first registration error; the built-in table is expected
    /// to always pass.
    pub fn with_builtin_profiles() -> ProfileResult<Self> {
        let mut catalog = Self::new();
        for profile in crate::builtin::builtin_profiles() {
            catalog.register(profile)?;
        }
        Ok(catalog)
    }

    /// Validate, compile, and append a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Validation`] for structural problems or
    /// [`ProfileError::Pattern`] when a device pattern does not compile.
    pub fn register(&mut self, profile: DeviceProfile) -> ProfileResult<Arc<CatalogEntry>> {
        validate_profile(&profile)?;
        let entry = Arc::new(CatalogEntry::compile(profile)?);
        debug!(profile = %entry.profile.name, "registered device profile");
        self.entries.push(Arc::clone(&entry));
        Ok(entry)
    }

    /// Resolve a reported hardware name: exact pass first, then patterns.
    pub fn match_device_name(&self, device_name: &str) -> Option<Arc<CatalogEntry>> {
        if let Some(entry) = self.entries.iter().find(|e| e.matches_exact(device_name)) {
            return Some(Arc::clone(entry));
        }
        self.entries
            .iter()
            .find(|e| e.matches_pattern(device_name))
            .map(Arc::clone)
    }

    /// Resolve a reported hardware name, synthesizing and registering a
    /// permissive profile when nothing matches.
    ///
    /// The warning for unmatched hardware fires exactly once per name: the
    /// synthesized entry persists, so the same hardware resolves through
    /// the exact pass on every later scan.
    ///
    /// # Errors
    ///
    /// Returns a registration error for the synthesized profile; its shape
    /// is fixed, so this is not expected in practice.
    pub fn resolve_or_synthesize(&mut self, device_name: &str) -> ProfileResult<Arc<CatalogEntry>> {
        if let Some(entry) = self.match_device_name(device_name) {
            return Ok(entry);
        }
        warn!(
            device_name,
            "hardware matches no known profile; synthesizing a permissive one"
        );
        self.register(DeviceProfile::unknown(device_name))
    }

    /// Registered keyboard-class entries, in registration order.
    pub fn keyboard_entries(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.entries.iter().filter(|e| e.profile.keyboard)
    }

    /// All registered entries, in registration order.
    pub fn entries(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
