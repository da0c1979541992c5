//! Literal data every session starts from.

use super::model::ActionStatus;
use super::model::AutomationRule;
use super::model::Device;
use super::model::DeviceCategory;
use super::model::DeviceStatus;
use super::model::Icon;
use super::model::LocationSetting;
use super::model::ScenarioAction;
use super::model::ScenarioStep;
use super::model::Trigger;

#[allow(clippy::too_many_arguments)]
fn device(
    id: &str,
    name: &str,
    room: &str,
    category: DeviceCategory,
    status: DeviceStatus,
    is_on: bool,
    (value, max_value, unit): (u32, u32, &str),
    automation: bool,
    capabilities: &[&str],
) -> Device {
    Device {
        id: id.to_string(),
        name: name.to_string(),
        room: room.to_string(),
        category,
        is_on,
        value,
        max_value,
        unit: unit.to_string(),
        status,
        automation,
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn devices() -> Vec<Device> {
    vec![
        device(
            "1",
            "Κλιματιστικό",
            "Σαλόνι",
            DeviceCategory::Climate,
            DeviceStatus::Active,
            true,
            (25, 35, "°C"),
            true,
            &["temperature", "fan_speed", "mode"],
        ),
        device(
            "2",
            "Φώτα Οροφής",
            "Υπνοδωμάτιο",
            DeviceCategory::Lighting,
            DeviceStatus::Online,
            false,
            (80, 100, "%"),
            true,
            &["brightness", "color", "dimming"],
        ),
        device(
            "3",
            "Θερμοσίφωνας",
            "Μπάνιο",
            DeviceCategory::Water,
            DeviceStatus::Active,
            true,
            (45, 60, "°C"),
            false,
            &["temperature", "schedule"],
        ),
        device(
            "4",
            "Ρολά",
            "Σαλόνι",
            DeviceCategory::Blinds,
            DeviceStatus::Online,
            false,
            (0, 100, "%"),
            true,
            &["position", "tilt", "schedule"],
        ),
        device(
            "5",
            "Sonos One",
            "Κουζίνα",
            DeviceCategory::Audio,
            DeviceStatus::Active,
            true,
            (65, 100, "%"),
            true,
            &["volume", "playlist", "equalizer"],
        ),
        device(
            "6",
            "Ring Doorbell",
            "Είσοδος",
            DeviceCategory::Security,
            DeviceStatus::Online,
            true,
            (100, 100, "%"),
            false,
            &["motion_detection", "recording", "live_view"],
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn rules() -> Vec<AutomationRule> {
    vec![
        AutomationRule {
            id: "1".to_string(),
            name: "Καλώς ήρθες σπίτι".to_string(),
            trigger: Trigger::Location {
                description: "Όταν φτάνω σπίτι".to_string(),
            },
            actions: strings(&["Άνοιγμα φώτων σαλονιού", "A/C στους 25°C", "Μουσική Relax"]),
            active: true,
        },
        AutomationRule {
            id: "2".to_string(),
            name: "Αναχώρηση από σπίτι".to_string(),
            trigger: Trigger::Location {
                description: "Όταν φεύγω από σπίτι".to_string(),
            },
            actions: strings(&[
                "Κλείσιμο όλων των φώτων",
                "A/C σε εξοικονόμηση",
                "Σύστημα ασφαλείας ON",
            ]),
            active: true,
        },
        AutomationRule {
            id: "3".to_string(),
            name: "Καληνύχτα".to_string(),
            trigger: Trigger::Time {
                description: "Καθημερινά στις 23:00".to_string(),
                schedule: "23:00".to_string(),
            },
            actions: strings(&["Κλείσιμο φώτων", "Κλείσιμο ρολών", "Θερμοσίφωνας OFF"]),
            active: true,
        },
        AutomationRule {
            id: "4".to_string(),
            name: "Πρωινό ξύπνημα".to_string(),
            trigger: Trigger::Time {
                description: "Καθημερινά στις 07:30".to_string(),
                schedule: "07:30".to_string(),
            },
            actions: strings(&["Άνοιγμα ρολών", "Θερμοσίφωνας ON", "Μουσική Energizing"]),
            active: false,
        },
    ]
}

pub fn locations() -> Vec<LocationSetting> {
    vec![
        LocationSetting {
            id: "1".to_string(),
            name: "Σπίτι".to_string(),
            address: "Λεωφ. Αθηνών 123, Αθήνα".to_string(),
            radius_m: 100,
            is_home: true,
        },
        LocationSetting {
            id: "2".to_string(),
            name: "Δουλειά".to_string(),
            address: "Πλ. Συντάγματος 5, Αθήνα".to_string(),
            radius_m: 50,
            is_home: false,
        },
    ]
}

const fn action(icon: Icon, text: &'static str, status: ActionStatus) -> ScenarioAction {
    ScenarioAction { icon, text, status }
}

/// The arrival scenario played on the landing page.
pub static SCENARIO: [ScenarioStep; 4] = [
    ScenarioStep {
        time: "17:40",
        location: "Δουλειά",
        distance: "2.5 km",
        actions: &[
            action(Icon::MapPin, "Ανίχνευση τοποθεσίας", ActionStatus::Completed),
            action(Icon::Clock, "Υπολογισμός άφιξης", ActionStatus::Active),
        ],
    },
    ScenarioStep {
        time: "17:43",
        location: "Στο δρόμο",
        distance: "800m",
        actions: &[
            action(Icon::Thermometer, "A/C στους 25°C", ActionStatus::Active),
            action(Icon::Lightbulb, "Προετοιμασία φωτισμού", ActionStatus::Pending),
        ],
    },
    ScenarioStep {
        time: "17:45",
        location: "Κοντά στο σπίτι",
        distance: "200m",
        actions: &[
            action(Icon::Music, "Playlist 'Relax' ▶️", ActionStatus::Active),
            action(Icon::Droplets, "Έναρξη μπάνιου", ActionStatus::Active),
            action(Icon::Wifi, "Σύνδεση με WiFi", ActionStatus::Completed),
        ],
    },
    ScenarioStep {
        time: "17:47",
        location: "Σπίτι",
        distance: "0m",
        actions: &[
            action(Icon::CheckCircle, "Καλώς ήρθες σπίτι! 🏡", ActionStatus::Completed),
            action(Icon::Speaker, "Όλα έτοιμα για εσένα", ActionStatus::Completed),
        ],
    },
];
