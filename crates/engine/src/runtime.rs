//! Tick driver facade
//!
//! [`InputRuntime`] owns the port, registry, and manager and runs the
//! canonical tick sequence. The host calls [`InputRuntime::update`] once
//! per frame with the elapsed time; everything else is driven from there,
//! strictly sequentially, with no blocking or suspension.

use openinput_profile::ProfileResult;

use crate::manager::DeviceManager;
use crate::ports::InputPort;
use crate::registry::{InputRegistry, RegistryConfig};

/// Single-threaded cooperative driver for the whole input pipeline.
#[derive(Debug)]
pub struct InputRuntime<P: InputPort> {
    port: P,
    registry: InputRegistry,
    manager: DeviceManager,
    tick: u64,
}

impl<P: InputPort> InputRuntime<P> {
    /// A runtime over the given port and manager.
    pub fn new(port: P, manager: DeviceManager, config: RegistryConfig) -> Self {
        Self {
            port,
            registry: InputRegistry::new(config),
            manager,
            tick: 0,
        }
    }

    /// A runtime over the built-in profile table with default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns a registration error from the built-in table; not expected
    /// in practice.
    pub fn with_builtin_profiles(port: P) -> ProfileResult<Self> {
        Ok(Self::new(
            port,
            DeviceManager::with_builtin_profiles()?,
            RegistryConfig::default(),
        ))
    }

    /// Advance one tick: reconcile devices, latch control history, sample
    /// raw sources, then run the control pipeline and dispatch events.
    pub fn update(&mut self, delta_time: f32) {
        self.tick += 1;
        self.manager
            .update(&mut self.registry, &mut self.port, delta_time);
        self.registry.pre_update(self.tick);
        self.registry.sample(&mut self.port, self.tick);
        self.registry.post_update(self.tick, delta_time);
    }

    /// Current tick counter.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The registry context.
    pub fn registry(&self) -> &InputRegistry {
        &self.registry
    }

    /// Mutable registry access (configuration, subscriptions, player
    /// assignment).
    pub fn registry_mut(&mut self) -> &mut InputRegistry {
        &mut self.registry
    }

    /// The device manager.
    pub fn manager(&self) -> &DeviceManager {
        &self.manager
    }

    /// Mutable manager access (custom profile registration).
    pub fn manager_mut(&mut self) -> &mut DeviceManager {
        &mut self.manager
    }

    /// The host port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable port access.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}
