//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Your files are processed in memory only. No data is stored on our servers."</div>
            <div class="footer-links">
                <a
                    href="https://github.com/bulk-excel-unlocker/unlocker"
                    class="footer-link"
                    target="_blank"
                >
                    "GitHub"
                </a>
            </div>
        </footer>
    }
}
