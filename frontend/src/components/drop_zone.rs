//! File intake component with drag & drop support.
//!
//! Screens every candidate through the validation layer, reports each
//! rejection as its own notice, and hands the grown (or shrunk) selection
//! back to the owning form.

use leptos::*;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

use crate::components::push_notice;
use crate::files::{format_file_size, screen_candidates, without_index, FileMeta, RejectReason};
use crate::types::{Notice, NoticeLevel, SelectedFile};

#[component]
pub fn DropZone(
    /// Current selection, owned by the parent form
    files: ReadSignal<Vec<SelectedFile>>,
    /// Called with the full new selection on every accepted change
    #[prop(into)]
    on_change: Callback<Vec<SelectedFile>>,
    set_notices: WriteSignal<Vec<Notice>>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);

    let process_candidates = move |list: FileList| {
        let candidates: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        if candidates.is_empty() {
            return;
        }

        let current = files.get_untracked();
        let existing_names: Vec<String> = current.iter().map(|f| f.name.clone()).collect();
        let metas: Vec<FileMeta> = candidates
            .iter()
            .map(|file| FileMeta {
                name: file.name(),
                size: file.size() as u64,
                content_type: file.type_(),
            })
            .collect();

        let intake = screen_candidates(&metas, &existing_names);

        for rejection in &intake.rejected {
            let title = match rejection.reason {
                RejectReason::Duplicate => "Duplicate file",
                _ => "Invalid file",
            };
            push_notice(
                set_notices,
                NoticeLevel::Error,
                title,
                &rejection.reason.message(&rejection.name),
            );
        }

        if intake.accepted.is_empty() {
            return;
        }

        let mut selection = current;
        for index in intake.accepted {
            selection.push(SelectedFile::from_handle(candidates[index].clone()));
        }
        log::info!("Selection grew to {} file(s)", selection.len());
        on_change.call(selection);
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
    };
    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            process_candidates(list);
        }
    };

    let on_file_input = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            process_candidates(list);
        }
        // Reset so picking the same file again fires another change event.
        input.set_value("");
    };

    let remove_file = move |index: usize| {
        let selection = without_index(files.get_untracked(), index);
        log::info!("Removed file at {}, {} left", index, selection.len());
        on_change.call(selection);
    };

    view! {
        <div class="drop-zone-wrapper">
            <div
                class="drop-zone"
                class:dragging=move || is_dragging.get()
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="drop-zone-icon">"📄"</div>
                <h3 class="drop-zone-title">"Drag & Drop Excel Files"</h3>
                <p class="drop-zone-hint">"or click to browse (.xlsx, .xls)"</p>
                <p class="drop-zone-hint">"Maximum file size: 20MB per file"</p>
                <input
                    type="file"
                    id="fileInput"
                    accept=".xlsx,.xls"
                    multiple
                    style="display:none"
                    on:change=on_file_input
                />
                <label for="fileInput" class="browse-button">
                    "Select Files"
                </label>
            </div>

            <Show when=move || !files.get().is_empty() fallback=|| view! { }>
                <div class="file-list">
                    <h3 class="file-list-title">"Selected Files"</h3>
                    <ul>
                        <For
                            each=move || files.get().into_iter().enumerate()
                            // Key carries the position: rows re-render when
                            // a removal shifts the indices under them.
                            key=|(index, file)| format!("{}-{}", file.name, index)
                            children=move |(index, file)| {
                                view! {
                                    <li class="file-row">
                                        <div class="file-info">
                                            <p class="file-name">{file.name.clone()}</p>
                                            <p class="file-size">{format_file_size(file.size)}</p>
                                        </div>
                                        <button
                                            type="button"
                                            class="file-remove"
                                            on:click=move |_| remove_file(index)
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}
