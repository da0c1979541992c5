use leptos::*;

use crate::home::model::Icon;

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    let name: &'static str = icon.into();
    view! {
        <span class="icon" data-icon=name aria-hidden="true">{icon.glyph()}</span>
    }
}
