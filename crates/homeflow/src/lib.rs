pub mod api;
pub mod config;
pub mod home;
mod pages;
pub mod views;

pub use config::format_diagnostics;
pub use config::Config;
pub use config::Diagnostic;
pub use config::LogLevel;
pub use home::Home;
pub use home::SystemClock;
