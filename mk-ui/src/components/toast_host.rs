//! Fixed-position stack of toasts from the app's [`ToastQueue`].

use crate::js_bridge::sleep_ms;
use crate::state::{toast_colors, ToastQueue, SWEEP_MILLIS};
use dioxus::prelude::*;

/// Renders the queue and expires its toasts. Mount once, next to the
/// `ToastQueue` provider.
#[component]
pub fn ToastHost() -> Element {
    let queue = use_context::<ToastQueue>();
    use_future(move || async move {
        loop {
            sleep_ms(SWEEP_MILLIS).await;
            queue.sweep();
        }
    });
    let toasts = queue.toasts();

    rsx! {
        div {
            style: "position: fixed; top: 16px; left: 50%; transform: translateX(-50%); z-index: 2000; display: flex; flex-direction: column; gap: 8px; align-items: center;",
            for toast in toasts {
                {
                    let (background, color, border) = toast_colors(toast.notice.level);
                    let id = toast.id;
                    let message = toast.notice.message.clone();
                    rsx! {
                        div {
                            key: "{id}",
                            style: "padding: 8px 16px; border-radius: 6px; background: {background}; color: {color}; border: 1px solid {border}; box-shadow: 0 3px 6px rgba(0,0,0,0.12); cursor: pointer; min-width: 200px;",
                            onclick: move |_| queue.dismiss(id),
                            "{message}"
                        }
                    }
                }
            }
        }
    }
}
