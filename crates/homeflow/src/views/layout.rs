//! Page shell and navigation

use leptos::*;

use super::icon::IconGlyph;
use crate::home::model::Icon;

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    Devices,
    Settings,
    /// Anything the router does not know; no link is marked active.
    Unknown,
}

const NAV_ITEMS: [(Route, &str, &str, Icon); 4] = [
    (Route::Home, "/", "Αρχική", Icon::Home),
    (Route::Dashboard, "/dashboard", "Dashboard", Icon::Dashboard),
    (Route::Devices, "/devices", "Συσκευές", Icon::Smartphone),
    (Route::Settings, "/settings", "Ρυθμίσεις", Icon::Settings),
];

#[component]
pub fn Navigation(current: Route) -> impl IntoView {
    view! {
        <nav class="nav">
            <a href="/" class="nav-brand">
                <span class="brand-mark"><IconGlyph icon=Icon::Home/></span>
                <span class="brand-name">"HomeFlow"</span>
            </a>

            <div class="nav-links">
                {NAV_ITEMS
                    .iter()
                    .map(|&(route, href, label, icon)| {
                        let active = route == current;
                        view! {
                            <a
                                href=href
                                class=if active { "nav-link active" } else { "nav-link" }
                                aria-current=active.then_some("page")
                            >
                                <IconGlyph icon=icon/>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <span class="nav-user">
                <IconGlyph icon=Icon::User/>
                "Παναγιώτα"
            </span>
        </nav>
    }
}

/// Full HTML document around a page body.
///
/// With `refresh_secs` set the browser reloads the page on that period,
/// which is how timer-driven state reaches the screen.
#[component]
pub fn Shell(
    title: &'static str,
    route: Route,
    #[prop(optional_no_strip)] refresh_secs: Option<u64>,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="el">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {refresh_secs.map(|secs| view! { <meta http-equiv="refresh" content=secs.to_string()/> })}
                <title>{format!("{} · HomeFlow", title)}</title>
                <link rel="stylesheet" href="/assets/homeflow.css"/>
            </head>
            <body>
                <Navigation current=route/>
                <main class="page">{children()}</main>
            </body>
        </html>
    }
}
