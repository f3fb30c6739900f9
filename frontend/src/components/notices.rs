//! Transient notification stack.
//!
//! Every user-facing event (intake rejections, submit guards, unlock
//! success or failure) lands here as an individual notice so the user can
//! tell exactly which file or step it concerns.

use std::sync::atomic::{AtomicUsize, Ordering};

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{MAX_NOTICES, NOTICE_TTL_MS};
use crate::types::{Notice, NoticeLevel};

static NEXT_NOTICE_ID: AtomicUsize = AtomicUsize::new(0);

/// Pushes a notice onto the stack and schedules its dismissal.
///
/// The oldest notice is dropped once the stack is full. The message is
/// mirrored to the console log at a matching level.
pub fn push_notice(
    set_notices: WriteSignal<Vec<Notice>>,
    level: NoticeLevel,
    title: &str,
    message: &str,
) {
    let id = NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed);

    match level {
        NoticeLevel::Error => log::error!("{}: {}", title, message),
        _ => log::info!("{}: {}", title, message),
    }

    let notice = Notice {
        id,
        level,
        title: title.to_string(),
        message: message.to_string(),
    };

    set_notices.update(|notices| {
        notices.push(notice);
        if notices.len() > MAX_NOTICES {
            notices.remove(0);
        }
    });

    // One-shot timer; try_update in case the app was torn down meanwhile.
    Timeout::new(NOTICE_TTL_MS, move || {
        let _ = set_notices.try_update(|notices| notices.retain(|n| n.id != id));
    })
    .forget();
}

#[component]
pub fn NoticesHost(
    notices: ReadSignal<Vec<Notice>>,
    set_notices: WriteSignal<Vec<Notice>>,
) -> impl IntoView {
    view! {
        <div class="notices">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class_name = format!("notice {}", notice.level.css_class());
                    let message = (!notice.message.is_empty())
                        .then(|| view! { <div class="notice-message">{notice.message.clone()}</div> });
                    view! {
                        <div class=class_name>
                            <div class="notice-body">
                                <div class="notice-title">{notice.title}</div>
                                {message}
                            </div>
                            <button
                                class="notice-close"
                                on:click=move |_| {
                                    set_notices.update(|n| n.retain(|x| x.id != id));
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
