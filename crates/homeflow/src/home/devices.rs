use serde::Serialize;
use tracing::debug;
use tracing::info;

use super::model::Device;
use super::model::DeviceStatus;

/// Label shown for the "every room" filter.
pub const ALL_ROOMS: &str = "Όλα";

/// Room selection for the device list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomFilter {
    #[default]
    All,
    Room(String),
}

impl RoomFilter {
    /// Parse a `?room=` query value. Missing, empty, `all` and the
    /// "every room" label all select every device.
    pub fn from_query(room: Option<&str>) -> Self {
        match room.map(str::trim) {
            None | Some("") | Some("all") | Some(ALL_ROOMS) => RoomFilter::All,
            Some(room) => RoomFilter::Room(room.to_string()),
        }
    }

    pub fn matches(&self, device: &Device) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Room(room) => device.room == *room,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RoomFilter::All => ALL_ROOMS,
            RoomFilter::Room(room) => room,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeviceStats {
    pub total: usize,
    /// Devices switched on
    pub active: usize,
    /// Devices reporting `online` or `active`
    pub connected: usize,
}

/// In-memory device list. Last write wins; unknown ids are no-ops.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    pub fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    /// Devices matching `filter`, in seed order.
    pub fn filter(&self, filter: &RoomFilter) -> Vec<Device> {
        self.devices
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect()
    }

    /// Distinct rooms in first-seen order.
    pub fn rooms(&self) -> Vec<String> {
        let mut rooms: Vec<String> = Vec::new();
        for device in &self.devices {
            if !rooms.contains(&device.room) {
                rooms.push(device.room.clone());
            }
        }
        rooms
    }

    /// Flip a device on or off, mirroring the change into its status.
    pub fn toggle(&mut self, id: &str) -> Option<&Device> {
        let Some(device) = self.devices.iter_mut().find(|d| d.id == id) else {
            debug!("toggle for unknown device {}, ignoring", id);
            return None;
        };

        device.is_on = !device.is_on;
        device.status = if device.is_on {
            DeviceStatus::Active
        } else {
            DeviceStatus::Online
        };
        info!(
            "Device {} ({}) -> on={}, status={}",
            device.id, device.name, device.is_on, device.status
        );

        Some(&*device)
    }

    /// Set a device's value, clamped to `0..=max_value`.
    pub fn set_value(&mut self, id: &str, value: i64) -> Option<&Device> {
        let Some(device) = self.devices.iter_mut().find(|d| d.id == id) else {
            debug!("value update for unknown device {}, ignoring", id);
            return None;
        };

        let clamped = value.clamp(0, i64::from(device.max_value));
        // Fits: bounded by max_value, which is a u32.
        device.value = clamped as u32;
        debug!(
            "Device {} value -> {}{} (requested {})",
            device.id, device.value, device.unit, value
        );

        Some(&*device)
    }

    pub fn stats(&self) -> DeviceStats {
        DeviceStats {
            total: self.devices.len(),
            active: self.devices.iter().filter(|d| d.is_on).count(),
            connected: self
                .devices
                .iter()
                .filter(|d| d.status.is_connected())
                .count(),
        }
    }
}
