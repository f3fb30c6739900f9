//! Bulk Excel Unlocker - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for unlocking batches of password-protected
//! Excel files through the unlock service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand bar)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns selection, password, processing state)    │
//! │  ├── Hero (title, description)                              │
//! │  ├── UnlockForm: DropZone + PasswordInput + actions         │
//! │  │   or ProcessingIndicator while a request is in flight    │
//! │  └── NoticesHost (transient notifications)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - common types (selection, state machine, notices, errors)
//! - [`files`] - pure intake validation
//! - [`components`] - UI components (DropZone, PasswordInput, etc.)
//! - [`services`] - backend communication (unlock, download)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::SubmitEvent;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod files;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Selection
    SelectedFile,
    // State machine
    ProcessingState, SubmitBlock, UnlockArtifact,
    // Notices
    Notice, NoticeLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

use types::{check_submit, unlocked_message};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the form session. Children receive read signals and
    // callbacks; every mutation funnels back through here.
    let (files, set_files) = create_signal(Vec::<SelectedFile>::new());
    let (password, set_password) = create_signal(String::new());
    let (state, set_state) = create_signal(ProcessingState::Idle);
    let (notices, set_notices) = create_signal(Vec::<Notice>::new());

    // Selection changes invalidate a stored artifact: with the sum-type
    // state, "Done without a result" collapses to Idle.
    let on_files_change = move |selection: Vec<SelectedFile>| {
        set_files.set(selection);
        if state.get_untracked().artifact().is_some() {
            log::info!("Selection changed, discarding previous result");
            set_state.set(ProcessingState::Idle);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Cooperative mutual exclusion: one request in flight at a time.
        if state.get_untracked().is_processing() {
            return;
        }

        let password_value = password.get_untracked();
        match check_submit(files.get_untracked().len(), &password_value) {
            Err(SubmitBlock::NoFiles) => {
                push_notice(
                    set_notices,
                    NoticeLevel::Error,
                    "No files selected",
                    "Please select at least one Excel file to unlock.",
                );
                return;
            }
            Err(SubmitBlock::BlankPassword) => {
                push_notice(
                    set_notices,
                    NoticeLevel::Error,
                    "Password required",
                    "Please enter the password for your Excel files.",
                );
                return;
            }
            Ok(()) => {}
        }

        let selection = files.get_untracked();
        let count = selection.len();
        set_state.set(ProcessingState::Processing);
        log::info!("Submitting {} file(s) for unlocking", count);

        spawn_local(async move {
            match unlock_files(&selection, &password_value, BACKEND_URL).await {
                Ok(bytes) => {
                    // try_set: a response landing after teardown is dropped
                    // silently instead of writing to a dead signal.
                    if set_state
                        .try_set(ProcessingState::Done(UnlockArtifact { bytes }))
                        .is_none()
                    {
                        push_notice(
                            set_notices,
                            NoticeLevel::Success,
                            "Files unlocked successfully",
                            &unlocked_message(count),
                        );
                    }
                }
                Err(e) => {
                    log::error!("Unlock failed: {}", e);
                    if set_state.try_set(ProcessingState::Idle).is_none() {
                        push_notice(
                            set_notices,
                            NoticeLevel::Error,
                            "Error unlocking files",
                            e.detail(),
                        );
                    }
                }
            }
        });
    };

    let on_download = move |_| {
        if let Some(artifact) = state.get_untracked().artifact() {
            if let Err(e) = save_bytes(&artifact.bytes, DOWNLOAD_FILENAME) {
                log::error!("Download failed: {}", e);
                push_notice(set_notices, NoticeLevel::Error, "Download failed", e.detail());
            }
        }
    };

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <div class="card">
                <Show
                    when=move || !state.get().is_processing()
                    fallback=move || view! {
                        <ProcessingIndicator files_count=files.get_untracked().len()/>
                    }
                >
                    <form on:submit=on_submit>
                        <div class="form-section">
                            <h3 class="form-section-title">"Select Excel Files"</h3>
                            <DropZone
                                files=files
                                on_change=on_files_change
                                set_notices=set_notices
                            />
                        </div>

                        <div class="form-section">
                            <h3 class="form-section-title">"Password"</h3>
                            <p class="form-section-hint">
                                "Enter the password that works for all selected Excel files."
                            </p>
                            <PasswordInput
                                value=password
                                on_change=move |value| set_password.set(value)
                                disabled=Signal::derive(move || state.get().is_processing())
                            />
                        </div>

                        <div class="form-actions">
                            <Show
                                when=move || state.get().artifact().is_some()
                                fallback=move || view! {
                                    <button
                                        type="submit"
                                        class="primary-button"
                                        disabled=move || {
                                            files.get().is_empty()
                                                || password.get().trim().is_empty()
                                        }
                                    >
                                        "Unlock Files"
                                    </button>
                                }
                            >
                                <button
                                    type="button"
                                    class="primary-button"
                                    on:click=on_download
                                >
                                    "Download Unlocked Files"
                                </button>
                                <button type="submit" class="secondary-button">
                                    "Process Again"
                                </button>
                            </Show>
                        </div>
                    </form>
                </Show>
            </div>

            <NoticesHost notices=notices set_notices=set_notices/>
        </div>

        <Footer/>
    }
}
