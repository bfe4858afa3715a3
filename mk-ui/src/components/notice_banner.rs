//! Inline banner for a [`Notice`] that must stay on screen, such as an app
//! that could not start.

use crate::state::toast_colors;
use dioxus::prelude::*;
use mk_model::{Notice, NoticeLevel};

/// Heading shown before the message.
pub fn level_label(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "Done",
        NoticeLevel::Info => "Note",
        NoticeLevel::Warning => "Warning",
        NoticeLevel::Error => "Error",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    /// Second line telling the user what to try next.
    pub hint: Option<String>,
}

#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let (background, color, border) = toast_colors(props.notice.level);
    let label = level_label(props.notice.level);
    let message = props.notice.message.clone();

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: {background}; color: {color}; border-radius: 4px; border: 1px solid {border};",
            strong { "{label}: " }
            "{message}"
            if let Some(hint) = props.hint.clone() {
                div {
                    style: "margin-top: 4px; font-size: 12px; color: #595959;",
                    "{hint}"
                }
            }
        }
    }
}
