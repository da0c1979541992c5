use leptos::*;

use super::controls::StatCard;
use super::controls::ToggleSwitch;
use super::icon::IconGlyph;
use super::layout::Route;
use super::layout::Shell;
use crate::home::model::Device;
use crate::home::model::Icon;
use crate::home::DeviceStats;
use crate::home::RoomFilter;
use crate::home::ALL_ROOMS;

/// Link to the devices page filtered to `room`.
pub fn room_href(filter: &RoomFilter) -> String {
    match filter {
        RoomFilter::All => "/devices".to_string(),
        RoomFilter::Room(room) => format!("/devices?room={}", super::encode_query(room)),
    }
}

/// Hidden form fields that bring the user back to the same filter.
fn return_fields(filter: &RoomFilter) -> Vec<(&'static str, String)> {
    let mut fields = vec![("from", "devices".to_string())];
    if let RoomFilter::Room(room) = filter {
        fields.push(("room", room.clone()));
    }
    fields
}

#[component]
fn ValueControl(device: Device, filter: RoomFilter) -> impl IntoView {
    let input_id = format!("value-{}", device.id);
    let room = match filter {
        RoomFilter::Room(room) => Some(room),
        RoomFilter::All => None,
    };

    view! {
        <form method="post" action=format!("/devices/{}/value", device.id) class="value-form">
            <label for=input_id.clone()>{device.category.control_label()}</label>
            <input
                id=input_id
                type="range"
                name="value"
                min="0"
                max=device.max_value.to_string()
                step="1"
                value=device.value.to_string()
            />
            {room.map(|room| view! { <input type="hidden" name="room" value=room/> })}
            <div class="range-scale">
                <span>{format!("0{}", device.unit)}</span>
                <span>{format!("{}{}", device.max_value, device.unit)}</span>
            </div>
            <button type="submit" class="button small">"Εφαρμογή"</button>
        </form>
    }
}

#[component]
fn DeviceCard(device: Device, filter: RoomFilter) -> impl IntoView {
    let control = device.is_on.then(|| {
        let device = device.clone();
        let filter = filter.clone();
        view! { <ValueControl device=device filter=filter/> }
    });
    let fields = return_fields(&filter);
    let Device {
        id,
        name,
        room,
        category,
        is_on,
        value,
        unit,
        status,
        capabilities,
        ..
    } = device;

    view! {
        <article class=if is_on { format!("card device on {}", status) } else { "card device".to_string() }>
            <header class="device-header">
                <div class="device-icon"><IconGlyph icon=category.icon()/></div>
                <div class="device-title">
                    <h3>{name}</h3>
                    <div class="badges">
                        <span class="badge outline">{room}</span>
                        <span class=format!("status-dot {}", status)></span>
                    </div>
                </div>
                <ToggleSwitch action=format!("/devices/{}/toggle", id) on=is_on fields=fields/>
            </header>

            <div class="device-reading">
                <span class="muted">"Τρέχουσα Τιμή:"</span>
                <span class="device-value">{format!("{}{}", value, unit)}</span>
            </div>

            {control}

            <div class="capabilities">
                <span class="label">"Δυνατότητες:"</span>
                {capabilities
                    .into_iter()
                    .map(|capability| view! {
                        <span class="badge secondary">{capability.replace('_', " ")}</span>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}

#[component]
pub fn DevicesView(
    filter: RoomFilter,
    rooms: Vec<String>,
    devices: Vec<Device>,
    stats: DeviceStats,
) -> impl IntoView {
    let room_buttons = std::iter::once(RoomFilter::All)
        .chain(rooms.into_iter().map(RoomFilter::Room))
        .map(|option| {
            let selected = option == filter;
            view! {
                <a
                    href=room_href(&option)
                    class=if selected { "button room selected" } else { "button room outline" }
                >
                    {option.label().to_string()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let empty = devices.is_empty().then(|| {
        let label = filter.label().to_string();
        view! {
            <div class="card empty">
                <IconGlyph icon=Icon::Power/>
                <h3>"Δεν βρέθηκαν συσκευές"</h3>
                <p class="muted">{format!("Δεν υπάρχουν συσκευές στο δωμάτιο \"{}\".", label)}</p>
                <a href=room_href(&RoomFilter::All) class="button outline">{ALL_ROOMS}</a>
            </div>
        }
    });

    let cards = devices
        .into_iter()
        .map(|device| {
            let filter = filter.clone();
            view! { <DeviceCard device=device filter=filter/> }
        })
        .collect::<Vec<_>>();

    view! {
        <Shell title="Συσκευές" route=Route::Devices>
            <div class="page-header">
                <div>
                    <h1>"Συσκευές"</h1>
                    <p class="muted">"Χειρισμός και έλεγχος όλων των έξυπνων συσκευών του σπιτιού"</p>
                </div>
            </div>

            <div class="room-filter">{room_buttons}</div>

            <div class="grid three">
                <StatCard icon=Icon::Power value=stats.active.to_string() label="Ενεργές"/>
                <StatCard icon=Icon::Wifi value=stats.connected.to_string() label="Συνδεδεμένες"/>
                <StatCard icon=Icon::Smartphone value=stats.total.to_string() label="Σύνολο"/>
            </div>

            <div class="grid three">{cards}</div>
            {empty}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_href_encodes_greek() {
        assert_eq!(room_href(&RoomFilter::All), "/devices");
        assert_eq!(
            room_href(&RoomFilter::Room("Σαλόνι".to_string())),
            "/devices?room=%CE%A3%CE%B1%CE%BB%CF%8C%CE%BD%CE%B9"
        );
        assert_eq!(
            room_href(&RoomFilter::Room("Living Room".to_string())),
            "/devices?room=Living+Room"
        );
    }

    #[test]
    fn test_return_fields_keep_filter() {
        assert_eq!(return_fields(&RoomFilter::All).len(), 1);

        let fields = return_fields(&RoomFilter::Room("Κουζίνα".to_string()));
        assert_eq!(fields[1], ("room", "Κουζίνα".to_string()));
    }
}
