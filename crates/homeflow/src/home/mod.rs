mod automations;
mod demo;
mod devices;
mod home;
pub mod model;
mod preferences;
pub mod presence;
mod seed;
mod task;

pub use automations::RuleRegistry;
pub use demo::DemoPlayer;
pub use demo::DemoSnapshot;
pub use demo::DemoStep;
pub use demo::StepPhase;
pub use devices::DeviceRegistry;
pub use devices::DeviceStats;
pub use devices::RoomFilter;
pub use devices::ALL_ROOMS;
pub use home::Home;
pub use preferences::Preference;
pub use preferences::Preferences;
pub use presence::Clock;
pub use presence::FixedClock;
pub use presence::Presence;
pub use presence::PresenceState;
pub use presence::SystemClock;
pub use seed::SCENARIO;
pub use task::ScheduledTask;
