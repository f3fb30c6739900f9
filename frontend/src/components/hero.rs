//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Bulk Excel Unlocker"</h1>
            <p class="subtitle">
                "Unlock multiple password-protected Excel files at once. "
                "Drop in .xlsx or .xls files (up to 20MB each), enter the shared "
                "password, and download everything back as one archive."
            </p>
        </div>
    }
}
