//! Simulated presence detection.
//!
//! There is no real location source: the simulator looks at the hour of the
//! day and calls the user "away" during working hours.

use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::Timelike;
use serde::Serialize;
use tracing::info;

use crate::config::PresenceConfig;

pub const HOME_LABEL: &str = "Στο σπίτι";
pub const AWAY_LABEL: &str = "Δουλειά";

/// Source of the hour used for presence evaluation.
pub trait Clock: Send + Sync {
    /// Hour of the day, 0-23.
    fn hour(&self) -> u32;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// A clock stuck at a settable hour.
#[derive(Debug, Default)]
pub struct FixedClock {
    hour: AtomicU32,
}

impl FixedClock {
    pub fn new(hour: u32) -> Self {
        Self {
            hour: AtomicU32::new(hour),
        }
    }

    pub fn set(&self, hour: u32) {
        self.hour.store(hour, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presence {
    pub state: PresenceState,
    pub location: String,
    /// Expected arrival time, only while away
    pub arrival: Option<String>,
}

impl Presence {
    pub fn home() -> Self {
        Self {
            state: PresenceState::Home,
            location: HOME_LABEL.to_string(),
            arrival: None,
        }
    }

    pub fn away(arrival: &str) -> Self {
        Self {
            state: PresenceState::Away,
            location: AWAY_LABEL.to_string(),
            arrival: Some(arrival.to_string()),
        }
    }

    pub fn is_away(&self) -> bool {
        self.state == PresenceState::Away
    }
}

/// Two-state HOME/AWAY machine re-evaluated on every tick.
pub struct PresenceSimulator {
    away_from: u32,
    away_until: u32,
    arrival: String,
    clock: Arc<dyn Clock>,
    current: Presence,
}

impl PresenceSimulator {
    pub fn new(config: &PresenceConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            away_from: config.away_from,
            away_until: config.away_until,
            arrival: config.arrival.clone(),
            clock,
            current: Presence::home(),
        }
    }

    /// Presence for a given hour. Both window bounds are inclusive.
    pub fn evaluate(&self, hour: u32) -> Presence {
        if (self.away_from..=self.away_until).contains(&hour) {
            Presence::away(&self.arrival)
        } else {
            Presence::home()
        }
    }

    /// Read the clock and update the current presence.
    pub fn tick(&mut self) -> &Presence {
        let hour = self.clock.hour();
        let next = self.evaluate(hour);
        if next.state != self.current.state {
            info!(
                "Presence {:?} -> {:?} (hour {})",
                self.current.state, next.state, hour
            );
        }
        self.current = next;
        &self.current
    }

    pub fn current(&self) -> &Presence {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator(hour: u32) -> (PresenceSimulator, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(hour));
        let sim = PresenceSimulator::new(&PresenceConfig::default(), clock.clone());
        (sim, clock)
    }

    #[test]
    fn test_working_hours_are_away() {
        let (sim, _) = simulator(0);
        let presence = sim.evaluate(10);
        assert_eq!(presence.state, PresenceState::Away);
        assert_eq!(presence.arrival.as_deref(), Some("18:30"));
        assert_eq!(presence.location, AWAY_LABEL);
    }

    #[test]
    fn test_evening_is_home() {
        let (sim, _) = simulator(0);
        let presence = sim.evaluate(20);
        assert_eq!(presence.state, PresenceState::Home);
        assert_eq!(presence.arrival, None);
        assert_eq!(presence.location, HOME_LABEL);
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let (sim, _) = simulator(0);
        assert!(sim.evaluate(9).is_away());
        assert!(sim.evaluate(17).is_away());
        assert!(!sim.evaluate(8).is_away());
        assert!(!sim.evaluate(18).is_away());
    }

    #[test]
    fn test_starts_home_until_first_tick() {
        let (mut sim, clock) = simulator(10);
        assert_eq!(sim.current(), &Presence::home());

        assert!(sim.tick().is_away());

        clock.set(20);
        assert_eq!(sim.tick(), &Presence::home());
    }

    #[test]
    fn test_custom_window() {
        let config = PresenceConfig {
            away_from: 22,
            away_until: 23,
            arrival: "07:00".to_string(),
            ..PresenceConfig::default()
        };
        let sim = PresenceSimulator::new(&config, Arc::new(FixedClock::new(0)));
        assert_eq!(sim.evaluate(23), Presence::away("07:00"));
        assert_eq!(sim.evaluate(10), Presence::home());
    }
}
