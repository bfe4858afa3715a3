//! Coloured tag for a record's process status.

use dioxus::prelude::*;
use mk_model::ProcessStatus;

/// Background, text and border colour for a status tone.
pub fn tone_colors(tone: &str) -> (&'static str, &'static str, &'static str) {
    match tone {
        "green" => ("#F6FFED", "#389E0D", "#B7EB8F"),
        "red" => ("#FFF1F0", "#CF1322", "#FFA39E"),
        "orange" => ("#FFF7E6", "#D46B08", "#FFD591"),
        _ => ("#FAFAFA", "#000000E0", "#D9D9D9"),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusTagProps {
    pub status: ProcessStatus,
}

#[component]
pub fn StatusTag(props: StatusTagProps) -> Element {
    let (background, color, border) = tone_colors(props.status.tone());
    let label = props.status.label().to_string();

    rsx! {
        span {
            style: "display: inline-block; padding: 0 7px; font-size: 12px; line-height: 20px; border-radius: 4px; background: {background}; color: {color}; border: 1px solid {border};",
            "{label}"
        }
    }
}
