//! Modal dialog shell.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: EventHandler<()>,
    #[props(default = 520)]
    pub width: u32,
    pub children: Element,
}

/// Centered dialog over a dimmed backdrop. Callers mount it only while open,
/// so the content starts fresh each time.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    let panel_style = format!(
        "background: #fff; border-radius: 8px; width: {}px; max-width: 92vw; max-height: 86vh; overflow: auto; box-shadow: 0 6px 16px rgba(0,0,0,0.16);",
        props.width
    );

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.45); z-index: 1000; display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_close.call(()),
            div {
                style: "{panel_style}",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    style: "display: flex; align-items: center; padding: 16px 24px; border-bottom: 1px solid #f0f0f0;",
                    h3 { style: "margin: 0; font-size: 16px; flex: 1;", "{props.title}" }
                    button {
                        style: "border: none; background: none; font-size: 18px; cursor: pointer; color: #999;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div {
                    style: "padding: 16px 24px;",
                    {props.children}
                }
            }
        }
    }
}
