use serde::Serialize;
use strum::Display;
use strum::IntoStaticStr;

/// Icon identifiers understood by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Icon {
    Home,
    Dashboard,
    Smartphone,
    Settings,
    User,
    MapPin,
    Clock,
    Calendar,
    Thermometer,
    Lightbulb,
    Droplets,
    Blinds,
    Music,
    Speaker,
    Shield,
    Wifi,
    CheckCircle,
    Bath,
    Car,
    Brain,
    Zap,
    Power,
    TrendingUp,
    Battery,
    Star,
}

impl Icon {
    /// Glyph drawn in place of the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Dashboard => "📊",
            Icon::Smartphone => "📱",
            Icon::Settings => "⚙️",
            Icon::User => "👤",
            Icon::MapPin => "📍",
            Icon::Clock => "🕒",
            Icon::Calendar => "📅",
            Icon::Thermometer => "🌡️",
            Icon::Lightbulb => "💡",
            Icon::Droplets => "💧",
            Icon::Blinds => "🪟",
            Icon::Music => "🎵",
            Icon::Speaker => "🔊",
            Icon::Shield => "🛡️",
            Icon::Wifi => "📶",
            Icon::CheckCircle => "✅",
            Icon::Bath => "🛁",
            Icon::Car => "🚗",
            Icon::Brain => "🧠",
            Icon::Zap => "⚡",
            Icon::Power => "⏻",
            Icon::TrendingUp => "📈",
            Icon::Battery => "🔋",
            Icon::Star => "⭐",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceCategory {
    Climate,
    Lighting,
    Water,
    Blinds,
    Audio,
    Security,
}

impl DeviceCategory {
    pub fn icon(self) -> Icon {
        match self {
            DeviceCategory::Climate => Icon::Thermometer,
            DeviceCategory::Lighting => Icon::Lightbulb,
            DeviceCategory::Water => Icon::Droplets,
            DeviceCategory::Blinds => Icon::Blinds,
            DeviceCategory::Audio => Icon::Music,
            DeviceCategory::Security => Icon::Shield,
        }
    }

    /// Label of the value slider on the devices page.
    pub fn control_label(self) -> &'static str {
        match self {
            DeviceCategory::Lighting => "Ρύθμιση Φωτεινότητας",
            DeviceCategory::Climate => "Ρύθμιση Θερμοκρασίας",
            DeviceCategory::Audio => "Ρύθμιση Έντασης",
            _ => "Ρύθμιση Τιμής",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    Active,
}

impl DeviceStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, DeviceStatus::Online | DeviceStatus::Active)
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceStatus::Active => "Ενεργό",
            DeviceStatus::Online => "Σε αναμονή",
            DeviceStatus::Offline => "Εκτός λειτουργίας",
        }
    }
}

/// A mocked smart-home device.
///
/// `value` stays within `0..=max_value`, and `status` is only
/// [`DeviceStatus::Active`] while the device is on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub room: String,
    pub category: DeviceCategory,
    pub is_on: bool,
    pub value: u32,
    pub max_value: u32,
    pub unit: String,
    pub status: DeviceStatus,
    pub automation: bool,
    pub capabilities: Vec<String>,
}

/// What fires an automation rule. Only time-based triggers carry a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Trigger {
    Time {
        description: String,
        schedule: String,
    },
    Location {
        description: String,
    },
}

impl Trigger {
    pub fn description(&self) -> &str {
        match self {
            Trigger::Time { description, .. } | Trigger::Location { description } => description,
        }
    }

    pub fn schedule(&self) -> Option<&str> {
        match self {
            Trigger::Time { schedule, .. } => Some(schedule),
            Trigger::Location { .. } => None,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Trigger::Time { .. } => Icon::Calendar,
            Trigger::Location { .. } => Icon::MapPin,
        }
    }
}

/// Named description of a trigger and its actions. Nothing executes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomationRule {
    pub id: String,
    pub name: String,
    pub trigger: Trigger,
    pub actions: Vec<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSetting {
    pub id: String,
    pub name: String,
    pub address: String,
    pub radius_m: u32,
    pub is_home: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioAction {
    pub icon: Icon,
    pub text: &'static str,
    pub status: ActionStatus,
}

/// One entry of the scripted demo timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioStep {
    pub time: &'static str,
    pub location: &'static str,
    pub distance: &'static str,
    pub actions: &'static [ScenarioAction],
}
