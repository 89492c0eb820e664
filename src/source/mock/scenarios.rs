//! Pre-built registry scenarios for testing.
//!
//! These scenarios provide realistic device line-ups for exercising
//! filtering, scrolling and wraparound.

use super::registry::{MockDevice, MockRegistry};

impl MockRegistry {
    /// Fixed ports only, no computer attached.
    ///
    /// Selectable items: DIN and loopback.
    pub fn ports_only() -> Self {
        Self::new()
    }

    /// A computer on the upstream port and four hosted devices, one of
    /// which is unpowered.
    pub fn studio_rig() -> Self {
        Self::from_devices(
            true,
            vec![
                MockDevice::new(1, "Keystep 37"),
                MockDevice::disconnected(2, "Digitakt"),
                MockDevice::new(3, "Launchpad X"),
                MockDevice::new(4, "MPK mini"),
            ],
        )
    }

    /// Six hosted devices of which only one is connected.
    pub fn mostly_disconnected() -> Self {
        Self::from_devices(
            false,
            vec![
                MockDevice::disconnected(10, "Hub port 1"),
                MockDevice::disconnected(11, "Hub port 2"),
                MockDevice::disconnected(12, "Hub port 3"),
                MockDevice::new(13, "Microfreak"),
                MockDevice::disconnected(14, "Hub port 5"),
                MockDevice::disconnected(15, "Hub port 6"),
            ],
        )
    }

    /// `n` hosted devices behind a hub; every third one is disconnected.
    pub fn crowded(n: u32) -> Self {
        let devices = (0..n)
            .map(|i| {
                let name = format!("Device {}", i + 1);
                if i % 3 == 2 {
                    MockDevice::disconnected(100 + i, name)
                } else {
                    MockDevice::new(100 + i, name)
                }
            })
            .collect();
        Self::from_devices(true, devices)
    }
}
