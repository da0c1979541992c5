use serde::Serialize;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;
use strum::IntoEnumIterator;

/// Switches on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Preference {
    Notifications,
    LocationAccess,
    VoiceControl,
}

impl Preference {
    pub fn label(self) -> &'static str {
        match self {
            Preference::Notifications => "Ενεργοποίηση Ειδοποιήσεων",
            Preference::LocationAccess => "Πρόσβαση στην Τοποθεσία",
            Preference::VoiceControl => "Φωνητικός Έλεγχος",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preference::Notifications => "Λήψη ειδοποιήσεων για αυτοματισμούς και συσκευές",
            Preference::LocationAccess => "Απαραίτητη για την ανίχνευση άφιξης και αναχώρησης",
            Preference::VoiceControl => "Έλεγχος συσκευών με φωνητικές εντολές",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub notifications: bool,
    pub location_access: bool,
    pub voice_control: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            location_access: true,
            voice_control: true,
        }
    }
}

impl Preferences {
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::Notifications => self.notifications,
            Preference::LocationAccess => self.location_access,
            Preference::VoiceControl => self.voice_control,
        }
    }

    /// Flip a switch and return its new value.
    pub fn toggle(&mut self, pref: Preference) -> bool {
        let slot = match pref {
            Preference::Notifications => &mut self.notifications,
            Preference::LocationAccess => &mut self.location_access,
            Preference::VoiceControl => &mut self.voice_control,
        };
        *slot = !*slot;
        *slot
    }

    pub fn entries(&self) -> Vec<(Preference, bool)> {
        Preference::iter().map(|p| (p, self.get(p))).collect()
    }
}
