//! Input registry: attached devices, configuration, and event dispatch
//!
//! The registry is the explicit context object the tick driver threads
//! through the pipeline: it owns every attached [`Device`] in attachment
//! order, the global configuration, and the subscriber list change events
//! are dispatched to. Subscribers observe events synchronously during the
//! post-update phase and cannot mutate the pipeline they were raised from.

use openinput_controls::ControlKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::device::{Device, DeviceId};
use crate::ports::InputPort;

/// Global configuration surface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Flip the vertical component of derived directional accessors. Raw
    /// control values are never affected.
    #[serde(default)]
    pub invert_y_axis: bool,
}

/// One control change notification.
#[derive(Debug, Clone)]
pub struct InputEvent {
    /// Tick the change was committed on.
    pub tick: u64,
    /// Effective player: the control's override or the device's assignment.
    pub player: Option<u32>,
    /// Identity of the device that raised the event.
    pub device: DeviceId,
    /// Display name of the device that raised the event.
    pub device_name: String,
    /// The control that changed.
    pub control: ControlKind,
    /// Committed analog value.
    pub value: f32,
    /// Committed digital state.
    pub state: bool,
}

/// Handle returned by [`InputRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&InputEvent)>;

/// Process-wide aggregation of attached devices, change-event subscribers,
/// and global configuration.
pub struct InputRegistry {
    devices: Vec<Device>,
    config: RegistryConfig,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_device_id: u64,
    next_subscription_id: u64,
    events: Vec<InputEvent>,
}

impl std::fmt::Debug for InputRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRegistry")
            .field("devices", &self.devices.len())
            .field("config", &self.config)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for InputRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl InputRegistry {
    /// An empty registry with the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            devices: Vec::new(),
            config,
            subscribers: Vec::new(),
            next_device_id: 1,
            next_subscription_id: 1,
            events: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Mutable configuration access.
    pub fn config_mut(&mut self) -> &mut RegistryConfig {
        &mut self.config
    }

    /// Register a change-event subscriber.
    ///
    /// Subscribers run synchronously during post-update, in registration
    /// order, and must not attempt to mutate the pipeline.
    pub fn subscribe(&mut self, subscriber: impl Fn(&InputEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Attach a device, assigning its registry identity. Devices keep
    /// attachment order.
    pub fn attach_device(&mut self, mut device: Device) -> DeviceId {
        let id = DeviceId::new(self.next_device_id);
        self.next_device_id += 1;
        device.set_id(id);
        info!(
            %id,
            device = %device.name(),
            slot = ?device.slot(),
            "attached input device"
        );
        self.devices.push(device);
        id
    }

    /// Detach a device by identity.
    pub fn detach_device(&mut self, id: DeviceId) -> Option<Device> {
        let index = self.devices.iter().position(|d| d.id() == id)?;
        let device = self.devices.remove(index);
        info!(%id, device = %device.name(), "detached input device");
        Some(device)
    }

    /// Attached devices, in attachment order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Look up an attached device.
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id() == id)
    }

    /// Mutable device access (player assignment, sort order).
    pub fn device_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id() == id)
    }

    /// Whether a keyboard-class device is attached.
    pub fn has_keyboard_device(&self) -> bool {
        self.devices.iter().any(Device::is_keyboard_class)
    }

    /// The device that changed most recently; ties prefer the lower sort
    /// order.
    pub fn active_device(&self) -> Option<&Device> {
        self.devices.iter().max_by(|a, b| {
            a.last_change_tick()
                .cmp(&b.last_change_tick())
                .then_with(|| b.sort_order.cmp(&a.sort_order))
        })
    }

    /// Directional vector of a device with the configured vertical
    /// inversion applied.
    pub fn direction(&self, id: DeviceId) -> Option<(f32, f32)> {
        self.device(id)
            .map(|d| d.direction(self.config.invert_y_axis, None))
    }

    /// Phase 1: latch history and clear pending samples on every device.
    pub fn pre_update(&mut self, tick: u64) {
        for device in &mut self.devices {
            device.pre_update(tick);
        }
    }

    /// Phase 2: sample every device's raw sources through the port.
    pub fn sample(&mut self, port: &mut dyn InputPort, tick: u64) {
        for device in &mut self.devices {
            device.sample(port, tick);
        }
    }

    /// Phase 3: run the control pipeline on every device and dispatch the
    /// resulting events to all subscribers.
    ///
    /// Event order is control-declaration order within a device and
    /// attachment order across devices.
    pub fn post_update(&mut self, tick: u64, delta_time: f32) {
        let mut events = std::mem::take(&mut self.events);
        events.clear();

        for device in &mut self.devices {
            device.post_update(tick, delta_time, &mut events);
        }

        if !events.is_empty() {
            debug!(tick, count = events.len(), "dispatching input events");
        }
        for event in &events {
            for (_, subscriber) in &self.subscribers {
                subscriber(event);
            }
        }

        self.events = events;
    }
}
