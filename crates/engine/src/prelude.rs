//! Convenience re-exports for downstream hosts.

pub use crate::device::{Device, DeviceId};
pub use crate::manager::{DEVICE_REFRESH_INTERVAL, DeviceManager};
pub use crate::ports::{InputPort, PortError, RawSample};
pub use crate::registry::{InputEvent, InputRegistry, RegistryConfig, SubscriptionId};
pub use crate::runtime::InputRuntime;
pub use crate::virtual_port::VirtualInputPort;
pub use openinput_controls::{Control, ControlKind};
pub use openinput_profile::{
    ControlBinding, DeviceProfile, PointerAxis, ProfileCatalog, RawSource,
};
