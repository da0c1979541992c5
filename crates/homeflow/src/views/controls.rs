//! Small widgets shared between pages

use leptos::*;

use super::icon::IconGlyph;
use crate::home::model::Icon;

/// On/off switch backed by a POST form.
///
/// `fields` become hidden inputs, e.g. which page to return to.
#[component]
pub fn ToggleSwitch(
    action: String,
    on: bool,
    #[prop(optional)] fields: Vec<(&'static str, String)>,
) -> impl IntoView {
    view! {
        <form method="post" action=action class="inline">
            {fields
                .into_iter()
                .map(|(name, value)| view! { <input type="hidden" name=name value=value/> })
                .collect::<Vec<_>>()}
            <button
                type="submit"
                class=if on { "switch on" } else { "switch" }
                aria-pressed=on.to_string()
            >
                <span class="switch-knob"></span>
            </button>
        </form>
    }
}

#[component]
pub fn StatCard(
    icon: Icon,
    #[prop(into)] value: String,
    label: &'static str,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    view! {
        <div class=if highlight { "card stat-card highlight" } else { "card stat-card" }>
            <IconGlyph icon=icon/>
            <div>
                <div class="stat-value">{value}</div>
                <div class="stat-label">{label}</div>
            </div>
        </div>
    }
}
