//! Shared password field with a visibility toggle.

use leptos::*;

#[component]
pub fn PasswordInput(
    /// Current password value
    value: ReadSignal<String>,
    /// Called with the new value on every keystroke
    #[prop(into)]
    on_change: Callback<String>,
    /// Disables the input and the toggle while a request is in flight
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (show_password, set_show_password) = create_signal(false);

    view! {
        <div class="password-field">
            <input
                type=move || if show_password.get() { "text" } else { "password" }
                class="password-input"
                placeholder="Enter password for Excel files"
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
                disabled=disabled
            />
            <button
                type="button"
                class="password-toggle"
                on:click=move |_| set_show_password.update(|show| *show = !*show)
                disabled=disabled
            >
                {move || if show_password.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
