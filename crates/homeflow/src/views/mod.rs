//! Server-rendered HTML pages.
//!
//! Every page is a Leptos component rendered to a string per request. There
//! is no client-side hydration: interaction goes through plain HTML forms and
//! timer-driven state is picked up by a meta refresh.

mod controls;
mod dashboard;
mod devices;
mod icon;
mod landing;
mod layout;
mod not_found;
mod settings;

use leptos::*;

use crate::home::model::AutomationRule;
use crate::home::model::Device;
use crate::home::model::LocationSetting;
use crate::home::DemoSnapshot;
use crate::home::DeviceStats;
use crate::home::Preferences;
use crate::home::Presence;
use crate::home::RoomFilter;
use dashboard::DashboardView;
pub use devices::room_href;
use devices::DevicesView;
use landing::LandingView;
pub use layout::Route;
use not_found::NotFoundView;
use settings::SettingsView;

fn document<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    format!("<!DOCTYPE html>{}", leptos::ssr::render_to_string(view))
}

/// Encode a query string value as `application/x-www-form-urlencoded`.
pub(crate) fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

pub fn render_landing(demo: DemoSnapshot, refresh_secs: Option<u64>, signed_up: bool) -> String {
    document(move || {
        view! { <LandingView demo=demo refresh_secs=refresh_secs signed_up=signed_up/> }
    })
}

pub fn render_dashboard(
    presence: Presence,
    devices: Vec<Device>,
    stats: DeviceStats,
    refresh_secs: u64,
) -> String {
    document(move || {
        view! {
            <DashboardView
                presence=presence
                devices=devices
                stats=stats
                refresh_secs=refresh_secs
            />
        }
    })
}

pub fn render_devices(
    filter: RoomFilter,
    rooms: Vec<String>,
    devices: Vec<Device>,
    stats: DeviceStats,
) -> String {
    document(move || {
        view! { <DevicesView filter=filter rooms=rooms devices=devices stats=stats/> }
    })
}

pub fn render_settings(
    rules: Vec<AutomationRule>,
    locations: Vec<LocationSetting>,
    preferences: Preferences,
) -> String {
    document(move || {
        view! { <SettingsView rules=rules locations=locations preferences=preferences/> }
    })
}

pub fn render_not_found(path: &str) -> String {
    let path = path.to_string();
    document(move || view! { <NotFoundView path=path/> })
}
