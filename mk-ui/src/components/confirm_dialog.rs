//! Yes/no confirmation built on [`Modal`].

use super::Modal;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    #[props(default = "OK".to_string())]
    pub confirm_label: String,
    /// Disables the buttons while the confirmed action runs
    #[props(default = false)]
    pub busy: bool,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    let on_confirm = props.on_confirm;
    let on_cancel = props.on_cancel;

    rsx! {
        Modal {
            title: props.title.clone(),
            width: 420,
            on_close: move |_| on_cancel.call(()),
            p { style: "margin: 0 0 20px 0;", "{props.message}" }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                button {
                    disabled: props.busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    style: "background: #ff4d4f; color: #fff; border: 1px solid #ff4d4f; border-radius: 4px; padding: 4px 12px;",
                    disabled: props.busy,
                    onclick: move |_| on_confirm.call(()),
                    "{props.confirm_label}"
                }
            }
        }
    }
}
