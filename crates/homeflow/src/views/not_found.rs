use leptos::*;

use super::layout::Route;
use super::layout::Shell;

#[component]
pub fn NotFoundView(path: String) -> impl IntoView {
    view! {
        <Shell title="404" route=Route::Unknown>
            <div class="card empty">
                <h1>"404"</h1>
                <p class="muted">{format!("Η σελίδα \"{}\" δεν βρέθηκε.", path)}</p>
                <a href="/" class="button primary">"Επιστροφή στην Αρχική"</a>
            </div>
        </Shell>
    }
}
