use leptos::*;

use super::controls::ToggleSwitch;
use super::icon::IconGlyph;
use super::layout::Route;
use super::layout::Shell;
use crate::home::model::AutomationRule;
use crate::home::model::Icon;
use crate::home::model::LocationSetting;
use crate::home::Preferences;

#[component]
fn RuleCard(rule: AutomationRule) -> impl IntoView {
    let icon = rule.trigger.icon();
    let trigger = rule.trigger.description().to_string();
    let schedule = rule.trigger.schedule().map(str::to_string);
    let AutomationRule {
        id,
        name,
        actions,
        active,
        ..
    } = rule;

    view! {
        <article class=if active { "card rule active" } else { "card rule inactive" }>
            <header class="rule-header">
                <span class=if active { "status-dot active" } else { "status-dot" }></span>
                <div class="rule-title">
                    <h3>{name}</h3>
                    <p class="muted">
                        <IconGlyph icon=icon/>
                        {trigger}
                        {schedule.map(|at| view! { <span class="badge secondary">{at}</span> })}
                    </p>
                </div>
                <ToggleSwitch action=format!("/settings/rules/{}/toggle", id) on=active/>
                <form method="post" action=format!("/settings/rules/{}/delete", id) class="inline">
                    <button type="submit" class="button ghost" aria-label="Διαγραφή">"🗑"</button>
                </form>
            </header>
            <div class="rule-actions">
                <span class="label">"Ενέργειες:"</span>
                {actions
                    .into_iter()
                    .map(|action| view! { <span class="badge outline">{action}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}

#[component]
fn LocationCard(location: LocationSetting) -> impl IntoView {
    let LocationSetting {
        name,
        address,
        radius_m,
        is_home,
        ..
    } = location;

    view! {
        <article class="card location">
            <div class=if is_home { "location-icon home" } else { "location-icon" }>
                <IconGlyph icon=Icon::MapPin/>
            </div>
            <div>
                <h3>
                    {name}
                    {is_home.then(|| view! { <span class="badge accent">"Κύρια"</span> })}
                </h3>
                <p class="muted">{address}</p>
                <p class="muted small">{format!("Ακτίνα ανίχνευσης: {}μ", radius_m)}</p>
            </div>
        </article>
    }
}

#[component]
pub fn SettingsView(
    rules: Vec<AutomationRule>,
    locations: Vec<LocationSetting>,
    preferences: Preferences,
) -> impl IntoView {
    let rule_cards = if rules.is_empty() {
        view! { <p class="muted">"Δεν υπάρχουν κανόνες αυτοματισμού."</p> }.into_view()
    } else {
        rules
            .into_iter()
            .map(|rule| view! { <RuleCard rule=rule/> })
            .collect::<Vec<_>>()
            .into_view()
    };

    view! {
        <Shell title="Ρυθμίσεις" route=Route::Settings>
            <div class="page-header">
                <div>
                    <h1>"Ρυθμίσεις"</h1>
                    <p class="muted">"Παραμετροποίηση αυτοματισμών και προτιμήσεων του HomeFlow"</p>
                </div>
            </div>

            <section class="settings-section">
                <h2>"Κανόνες Αυτοματισμού"</h2>
                <div class="stack">{rule_cards}</div>
            </section>

            <section class="settings-section">
                <h2>"Τοποθεσίες"</h2>
                <div class="stack">
                    {locations
                        .into_iter()
                        .map(|location| view! { <LocationCard location=location/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="settings-section">
                <h2><IconGlyph icon=Icon::Settings/>"Προτιμήσεις"</h2>
                <div class="card stack">
                    {preferences
                        .entries()
                        .into_iter()
                        .map(|(pref, enabled)| view! {
                            <div class="preference">
                                <div>
                                    <div class="preference-label">{pref.label()}</div>
                                    <p class="muted">{pref.description()}</p>
                                </div>
                                <ToggleSwitch
                                    action=format!("/settings/preferences/{}/toggle", pref)
                                    on=enabled
                                />
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </Shell>
    }
}
