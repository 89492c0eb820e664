//! In-memory MIDI device registry.
//!
//! `MockRegistry` exposes the four fixed MIDI ports below index zero and an
//! ordered list of hosted USB devices from index zero upwards, mirroring the
//! layout the device menu expects from the real registry.

use serde::{Deserialize, Serialize};

use crate::source::{ItemIndex, ItemSource};

/// Connection flag set on a hosted device with at least one live cable.
pub const CONNECTED: u8 = 0b0000_0001;

/// Stable identity of a MIDI device.
///
/// Hosted devices are keyed by a uid rather than by position so that a
/// remembered selection survives other devices being unplugged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceId {
    /// 5-pin DIN ports. Always present.
    Din,
    /// First upstream USB port (to a computer).
    UpstreamUsb1,
    /// Second upstream USB port (to a computer).
    UpstreamUsb2,
    /// Internal loopback port.
    Loopback,
    /// Device attached to the USB host port.
    Hosted(u32),
}

impl DeviceId {
    /// Fixed ports in index order, starting at `MockRegistry::MIN_INDEX`.
    pub const SPECIAL: [DeviceId; 4] = [
        DeviceId::Din,
        DeviceId::UpstreamUsb1,
        DeviceId::UpstreamUsb2,
        DeviceId::Loopback,
    ];
}

/// A hosted USB MIDI device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockDevice {
    /// Registry-unique identifier.
    pub uid: u32,
    /// Name shown on the display.
    pub name: String,
    /// Per-cable connection bits. Zero means disconnected.
    #[serde(default = "default_connection_flags")]
    pub connection_flags: u8,
}

fn default_connection_flags() -> u8 {
    CONNECTED
}

impl MockDevice {
    /// Creates a connected device.
    pub fn new(uid: u32, name: impl Into<String>) -> Self {
        Self {
            uid,
            name: name.into(),
            connection_flags: CONNECTED,
        }
    }

    /// Creates a device that is registered but has no live connection.
    pub fn disconnected(uid: u32, name: impl Into<String>) -> Self {
        Self {
            connection_flags: 0,
            ..Self::new(uid, name)
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection_flags != 0
    }
}

/// In-memory registry of MIDI devices.
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    /// Hosted devices in registration order.
    hosted: Vec<MockDevice>,
    /// Whether a computer is attached to the upstream USB port.
    upstream_connected: bool,
}

impl MockRegistry {
    /// Creates a registry with only the fixed ports and no computer attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a list of hosted devices.
    ///
    /// Later entries replace earlier ones with the same uid.
    pub fn from_devices(upstream_connected: bool, devices: Vec<MockDevice>) -> Self {
        let mut registry = Self {
            hosted: Vec::with_capacity(devices.len()),
            upstream_connected,
        };
        for device in devices {
            registry.plug_device(device);
        }
        registry
    }

    /// Hosted devices in index order.
    pub fn hosted(&self) -> &[MockDevice] {
        &self.hosted
    }

    /// Looks up a hosted device by uid.
    pub fn device(&self, uid: u32) -> Option<&MockDevice> {
        self.hosted.iter().find(|d| d.uid == uid)
    }

    /// Attaches a connected device and returns its index.
    pub fn plug(&mut self, uid: u32, name: impl Into<String>) -> ItemIndex {
        self.plug_device(MockDevice::new(uid, name))
    }

    /// Attaches `device` and returns its index.
    ///
    /// Re-plugging a known uid updates the existing entry in place.
    pub fn plug_device(&mut self, device: MockDevice) -> ItemIndex {
        let position = match self.hosted.iter().position(|d| d.uid == device.uid) {
            Some(pos) => {
                self.hosted[pos] = device;
                pos
            }
            None => {
                self.hosted.push(device);
                self.hosted.len() - 1
            }
        };
        ItemIndex::try_from(position).unwrap_or(ItemIndex::MAX)
    }

    /// Detaches a device, shifting later devices down by one index.
    pub fn unplug(&mut self, uid: u32) -> Option<MockDevice> {
        let pos = self.hosted.iter().position(|d| d.uid == uid)?;
        Some(self.hosted.remove(pos))
    }

    /// Sets or clears the connection flags of a hosted device.
    ///
    /// Returns `false` if no device has this uid.
    pub fn set_connected(&mut self, uid: u32, connected: bool) -> bool {
        match self.hosted.iter_mut().find(|d| d.uid == uid) {
            Some(device) => {
                device.connection_flags = if connected { CONNECTED } else { 0 };
                true
            }
            None => false,
        }
    }

    pub fn set_upstream_connected(&mut self, connected: bool) {
        self.upstream_connected = connected;
    }

    pub fn upstream_connected(&self) -> bool {
        self.upstream_connected
    }
}

impl ItemSource for MockRegistry {
    type Handle = DeviceId;

    const MIN_INDEX: ItemIndex = -4;

    fn count(&self) -> usize {
        DeviceId::SPECIAL.len() + self.hosted.len()
    }

    fn item_at(&self, index: ItemIndex) -> Option<DeviceId> {
        if index < 0 {
            let slot = usize::try_from(index - Self::MIN_INDEX).ok()?;
            return DeviceId::SPECIAL.get(slot).copied();
        }
        let slot = usize::try_from(index).ok()?;
        self.hosted.get(slot).map(|d| DeviceId::Hosted(d.uid))
    }

    fn is_selectable(&self, item: &DeviceId) -> bool {
        match item {
            DeviceId::Din | DeviceId::Loopback => true,
            DeviceId::UpstreamUsb1 | DeviceId::UpstreamUsb2 => self.upstream_connected,
            DeviceId::Hosted(uid) => self.device(*uid).is_some_and(MockDevice::is_connected),
        }
    }

    fn display_label(&self, item: &DeviceId) -> String {
        match item {
            DeviceId::Din => "DIN".to_string(),
            DeviceId::UpstreamUsb1 => "Computer 1".to_string(),
            DeviceId::UpstreamUsb2 => "Computer 2".to_string(),
            DeviceId::Loopback => "Loopback".to_string(),
            DeviceId::Hosted(uid) => self
                .device(*uid)
                .map(|d| d.name.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_ports_below_zero() {
        let registry = MockRegistry::new();
        assert_eq!(registry.count(), 4);
        assert_eq!(registry.upper_bound(), 0);
        assert_eq!(registry.item_at(-4), Some(DeviceId::Din));
        assert_eq!(registry.item_at(-3), Some(DeviceId::UpstreamUsb1));
        assert_eq!(registry.item_at(-2), Some(DeviceId::UpstreamUsb2));
        assert_eq!(registry.item_at(-1), Some(DeviceId::Loopback));
        assert_eq!(registry.item_at(-5), None);
        assert_eq!(registry.item_at(0), None);
    }

    #[test]
    fn test_upstream_ports_follow_connection() {
        let mut registry = MockRegistry::new();
        assert!(registry.is_selectable(&DeviceId::Din));
        assert!(registry.is_selectable(&DeviceId::Loopback));
        assert!(!registry.is_selectable(&DeviceId::UpstreamUsb1));

        registry.set_upstream_connected(true);
        assert!(registry.is_selectable(&DeviceId::UpstreamUsb1));
        assert!(registry.is_selectable(&DeviceId::UpstreamUsb2));
    }

    #[test]
    fn test_plug_and_unplug_shift_indices() {
        let mut registry = MockRegistry::new();
        assert_eq!(registry.plug(10, "Keystep"), 0);
        assert_eq!(registry.plug(11, "Digitakt"), 1);
        assert_eq!(registry.plug(12, "Launchpad"), 2);
        assert_eq!(registry.upper_bound(), 3);

        let removed = registry.unplug(11).unwrap();
        assert_eq!(removed.name, "Digitakt");
        assert_eq!(registry.upper_bound(), 2);
        assert_eq!(registry.item_at(1), Some(DeviceId::Hosted(12)));
        assert!(registry.unplug(11).is_none());
    }

    #[test]
    fn test_replug_updates_in_place() {
        let mut registry = MockRegistry::new();
        registry.plug_device(MockDevice::disconnected(7, "Old name"));
        registry.plug(8, "Other");
        assert_eq!(registry.plug(7, "New name"), 0);
        assert_eq!(registry.hosted().len(), 2);
        assert_eq!(registry.display_label(&DeviceId::Hosted(7)), "New name");
        assert!(registry.is_selectable(&DeviceId::Hosted(7)));
    }

    #[test]
    fn test_set_connected() {
        let mut registry = MockRegistry::new();
        registry.plug(1, "Keystep");
        assert!(registry.set_connected(1, false));
        assert!(!registry.is_selectable_at(0));
        // Still occupies its slot
        assert_eq!(registry.item_at(0), Some(DeviceId::Hosted(1)));
        assert!(registry.set_connected(1, true));
        assert!(registry.is_selectable_at(0));
        assert!(!registry.set_connected(99, true));
    }

    #[test]
    fn test_labels() {
        let registry = MockRegistry::from_devices(true, vec![MockDevice::new(3, "MPK mini")]);
        assert_eq!(registry.display_label(&DeviceId::Din), "DIN");
        assert_eq!(registry.display_label(&DeviceId::Hosted(3)), "MPK mini");
        // Stale handle after unplug renders empty
        assert_eq!(registry.display_label(&DeviceId::Hosted(4)), "");
    }

    #[test]
    fn test_deserialize_device_defaults_to_connected() {
        let device: MockDevice = serde_json::from_str(r#"{"uid": 5, "name": "Keystep"}"#).unwrap();
        assert!(device.is_connected());

        let device: MockDevice =
            serde_json::from_str(r#"{"uid": 6, "name": "Off", "connection_flags": 0}"#).unwrap();
        assert!(!device.is_connected());
    }
}
