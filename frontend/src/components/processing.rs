//! Processing indicator shown while an unlock request is in flight.
//!
//! The bar is decorative: it advances on a fixed wall-clock schedule and
//! stalls at 90%. Completion is signaled by the form leaving its processing
//! state, which unmounts this component and cancels any pending timers.

use gloo_timers::callback::Timeout;
use leptos::*;

/// Milliseconds after mount paired with the percentage to show.
const PROGRESS_SCHEDULE: &[(u32, u32)] = &[
    (300, 30),
    (800, 60),
    (1_500, 70),
    (2_500, 80),
    (4_000, 90),
];

#[component]
pub fn ProcessingIndicator(files_count: usize) -> impl IntoView {
    let (progress, set_progress) = create_signal(0u32);

    let timers: Vec<Timeout> = PROGRESS_SCHEDULE
        .iter()
        .map(|&(delay_ms, percent)| {
            Timeout::new(delay_ms, move || set_progress.set(percent))
        })
        .collect();

    // Dropping a Timeout clears it, so unmounting mid-request leaks nothing.
    on_cleanup(move || drop(timers));

    let files_label = if files_count == 1 { "file" } else { "files" };

    view! {
        <div class="processing">
            <div class="processing-icon">"🔓"</div>
            <h3 class="processing-title">"Processing Files"</h3>
            <p class="processing-subtitle">
                {format!("Unlocking {} {}...", files_count, files_label)}
            </p>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
        </div>
    }
}
