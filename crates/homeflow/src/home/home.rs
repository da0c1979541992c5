use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::interval_at;
use tokio::time::Instant;
use tracing::info;

use super::automations::RuleRegistry;
use super::demo::DemoPlayer;
use super::demo::DemoSnapshot;
use super::devices::DeviceRegistry;
use super::devices::DeviceStats;
use super::devices::RoomFilter;
use super::model::AutomationRule;
use super::model::Device;
use super::model::LocationSetting;
use super::preferences::Preference;
use super::preferences::Preferences;
use super::presence::Clock;
use super::presence::Presence;
use super::presence::PresenceSimulator;
use super::seed;
use super::task::ScheduledTask;
use crate::config::Config;

/// The whole mocked household for one running instance.
///
/// Owns the device and rule lists, the preference switches, and the two
/// simulators together with the timer tasks that drive them.
pub struct Home {
    devices: Mutex<DeviceRegistry>,
    rules: Mutex<RuleRegistry>,
    locations: Vec<LocationSetting>,
    preferences: Mutex<Preferences>,

    presence: Arc<Mutex<PresenceSimulator>>,
    presence_interval: Duration,
    presence_task: Mutex<Option<ScheduledTask>>,

    demo: Arc<Mutex<DemoPlayer>>,
    demo_interval: Duration,
    demo_task: Mutex<Option<ScheduledTask>>,
}

impl Home {
    /// Seed a fresh household. No timers run until [`Home::start`].
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            devices: Mutex::new(DeviceRegistry::new(seed::devices())),
            rules: Mutex::new(RuleRegistry::new(seed::rules())),
            locations: seed::locations(),
            preferences: Mutex::new(Preferences::default()),
            presence: Arc::new(Mutex::new(PresenceSimulator::new(&config.presence, clock))),
            presence_interval: config.presence.interval(),
            presence_task: Mutex::new(None),
            demo: Arc::new(Mutex::new(DemoPlayer::new(&seed::SCENARIO))),
            demo_interval: config.demo.step_interval(),
            demo_task: Mutex::new(None),
        }
    }

    pub fn presence_interval(&self) -> Duration {
        self.presence_interval
    }

    pub fn demo_interval(&self) -> Duration {
        self.demo_interval
    }

    /// Start the presence simulator. The first evaluation happens one full
    /// period from now; calling this again restarts the timer.
    pub async fn start(&self) {
        let presence = Arc::clone(&self.presence);
        let period = self.presence_interval;

        let task = ScheduledTask::spawn("presence", async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                presence.lock().await.tick();
            }
        });

        if let Some(old) = self.presence_task.lock().await.replace(task) {
            old.cancel();
        }
        info!("Presence simulator running every {:?}", period);
    }

    /// Cancel every timer task.
    pub async fn shutdown(&self) {
        for slot in [&self.presence_task, &self.demo_task] {
            if let Some(task) = slot.lock().await.take() {
                info!("Stopping task '{}'", task.name());
                task.cancel();
            }
        }
    }

    pub async fn devices(&self, filter: &RoomFilter) -> Vec<Device> {
        self.devices.lock().await.filter(filter)
    }

    pub async fn rooms(&self) -> Vec<String> {
        self.devices.lock().await.rooms()
    }

    pub async fn device_stats(&self) -> DeviceStats {
        self.devices.lock().await.stats()
    }

    pub async fn toggle_device(&self, id: &str) -> Option<Device> {
        self.devices.lock().await.toggle(id).cloned()
    }

    pub async fn set_device_value(&self, id: &str, value: i64) -> Option<Device> {
        self.devices.lock().await.set_value(id, value).cloned()
    }

    pub async fn rules(&self) -> Vec<AutomationRule> {
        self.rules.lock().await.list().to_vec()
    }

    pub async fn toggle_rule(&self, id: &str) -> Option<AutomationRule> {
        self.rules.lock().await.toggle(id).cloned()
    }

    pub async fn delete_rule(&self, id: &str) -> Option<AutomationRule> {
        self.rules.lock().await.delete(id)
    }

    pub fn locations(&self) -> &[LocationSetting] {
        &self.locations
    }

    pub async fn preferences(&self) -> Preferences {
        *self.preferences.lock().await
    }

    pub async fn toggle_preference(&self, pref: Preference) -> bool {
        self.preferences.lock().await.toggle(pref)
    }

    pub async fn presence(&self) -> Presence {
        self.presence.lock().await.current().clone()
    }

    pub async fn demo(&self) -> DemoSnapshot {
        self.demo.lock().await.snapshot()
    }

    /// Rewind the demo and drive it forward one step per interval.
    ///
    /// Any driver from a previous start is cancelled first, so at most one
    /// playback is in flight.
    pub async fn start_demo(&self) -> DemoSnapshot {
        let mut slot = self.demo_task.lock().await;
        if let Some(old) = slot.take() {
            old.cancel();
        }

        let snapshot = {
            let mut player = self.demo.lock().await;
            player.start();
            player.snapshot()
        };

        if snapshot.playing {
            let demo = Arc::clone(&self.demo);
            let period = self.demo_interval;
            *slot = Some(ScheduledTask::spawn("demo", async move {
                let mut ticker = interval_at(Instant::now() + period, period);
                loop {
                    ticker.tick().await;
                    let mut player = demo.lock().await;
                    player.advance();
                    if !player.is_playing() {
                        break;
                    }
                }
            }));
        }

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::presence::FixedClock;
    use crate::home::presence::PresenceState;

    fn home(hour: u32) -> Home {
        Home::new(&Config::default(), Arc::new(FixedClock::new(hour)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_presence_flips_after_first_period() {
        let home = home(10);
        home.start().await;

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(home.presence().await.state, PresenceState::Home);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let presence = home.presence().await;
        assert_eq!(presence.state, PresenceState::Away);
        assert_eq!(presence.arrival.as_deref(), Some("18:30"));

        home.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_presence_follows_clock() {
        let clock = Arc::new(FixedClock::new(20));
        let home = Home::new(&Config::default(), clock.clone());
        home.start().await;

        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(home.presence().await, Presence::home());

        clock.set(10);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(home.presence().await.is_away());

        home.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_plays_to_the_end() {
        let home = home(20);
        let snapshot = home.start_demo().await;
        assert_eq!(snapshot.cursor, 0);
        assert!(snapshot.playing);

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(home.demo().await.cursor, 1);

        tokio::time::sleep(Duration::from_secs(4)).await;
        let snapshot = home.demo().await;
        assert_eq!(snapshot.cursor, 3);
        assert!(!snapshot.playing);
        assert!(snapshot.finished);

        // A further period changes nothing
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(home.demo().await.cursor, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restarting_demo_replaces_driver() {
        let home = home(20);
        home.start_demo().await;
        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(home.demo().await.cursor, 1);

        // Restart halfway between ticks; the old driver must not advance the
        // new playback at the 4s mark.
        home.start_demo().await;
        assert_eq!(home.demo().await.cursor, 0);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(home.demo().await.cursor, 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(home.demo().await.cursor, 1);

        home.shutdown().await;
    }

    #[tokio::test]
    async fn test_registries_share_state() {
        let home = home(20);
        let toggled = home.toggle_device("2").await.unwrap();
        assert!(toggled.is_on);

        let all = home.devices(&RoomFilter::All).await;
        assert!(all.iter().find(|d| d.id == "2").unwrap().is_on);

        assert!(home.delete_rule("9").await.is_none());
        assert_eq!(home.rules().await.len(), 4);
    }
}
