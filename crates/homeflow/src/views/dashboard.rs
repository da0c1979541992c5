use leptos::*;

use super::controls::StatCard;
use super::controls::ToggleSwitch;
use super::icon::IconGlyph;
use super::layout::Route;
use super::layout::Shell;
use crate::home::model::Device;
use crate::home::model::DeviceStatus;
use crate::home::model::Icon;
use crate::home::DeviceStats;
use crate::home::Presence;

fn status_badge(status: DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Active => "badge accent",
        DeviceStatus::Online => "badge outline",
        DeviceStatus::Offline => "badge danger",
    }
}

#[component]
fn DeviceTile(device: Device) -> impl IntoView {
    let Device {
        id,
        name,
        category,
        is_on,
        value,
        unit,
        status,
        automation,
        ..
    } = device;

    view! {
        <article class=if is_on { "card device on" } else { "card device" }>
            <header class="device-header">
                <div class="device-icon"><IconGlyph icon=category.icon()/></div>
                <div class="device-title">
                    <h3>{name}</h3>
                    <div class="badges">
                        <span class=status_badge(status)>{status.label()}</span>
                        {automation.then(|| view! { <span class="badge secondary">"AUTO"</span> })}
                    </div>
                </div>
                <ToggleSwitch
                    action=format!("/devices/{}/toggle", id)
                    on=is_on
                    fields=vec![("from", "dashboard".to_string())]
                />
            </header>
            <div class="device-footer">
                <span class="device-value">{format!("{} {}", value, unit)}</span>
                <span class=format!("status-dot {}", status)><IconGlyph icon=Icon::Wifi/></span>
            </div>
        </article>
    }
}

#[component]
pub fn DashboardView(
    presence: Presence,
    devices: Vec<Device>,
    stats: DeviceStats,
    refresh_secs: u64,
) -> impl IntoView {
    let away = presence.is_away();
    let Presence {
        location, arrival, ..
    } = presence;
    let banner_arrival = arrival.clone();

    view! {
        <Shell title="Dashboard" route=Route::Dashboard refresh_secs=Some(refresh_secs)>
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="muted">"Έλεγχος και παρακολούθηση του έξυπνου σπιτιού σου"</p>
                </div>
                <div class="card presence">
                    <IconGlyph icon=Icon::MapPin/>
                    <div>
                        <div class="presence-location">{location}</div>
                        {arrival.map(|time| view! {
                            <div class="muted">{format!("Άφιξη: {}", time)}</div>
                        })}
                    </div>
                </div>
            </div>

            <div class="grid four">
                <StatCard icon=Icon::Power value=stats.active.to_string() label="Ενεργές Συσκευές" highlight=true/>
                <StatCard icon=Icon::Zap value="2.4" label="kWh Σήμερα" highlight=true/>
                <StatCard icon=Icon::TrendingUp value="85%" label="Αποδοτικότητα"/>
                <StatCard icon=Icon::Battery value="€3.2" label="Κόστος Σήμερα"/>
            </div>

            <div class="section-title">
                <h2>"Συσκευές"</h2>
                <a href="/settings" class="button outline">
                    <IconGlyph icon=Icon::Settings/>
                    "Ρυθμίσεις"
                </a>
            </div>
            <div class="grid three">
                {devices
                    .into_iter()
                    .map(|device| view! { <DeviceTile device=device/> })
                    .collect::<Vec<_>>()}
            </div>

            {away.then(|| view! {
                <div class="banner accent">
                    <IconGlyph icon=Icon::Clock/>
                    <div>
                        <h3>"Αυτόματη Λειτουργία Ενεργή"</h3>
                        <p class="muted">
                            {format!(
                                "Το σπίτι θα προετοιμαστεί αυτόματα για την επιστροφή σου στις {}",
                                banner_arrival.unwrap_or_default()
                            )}
                        </p>
                    </div>
                </div>
            })}
        </Shell>
    }
}
