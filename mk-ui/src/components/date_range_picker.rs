//! Date range picker with start and end date inputs.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangePickerProps {
    /// `YYYY-MM-DD` or empty
    pub start: String,
    /// `YYYY-MM-DD` or empty
    pub end: String,
    /// Called with `(start, end)` whenever either input changes
    pub on_change: EventHandler<(String, String)>,
}

/// Controlled pair of date inputs; the owner decides when the pair forms a range.
#[component]
pub fn DateRangePicker(props: DateRangePickerProps) -> Element {
    let start = props.start.clone();
    let end = props.end.clone();
    let on_change = props.on_change;

    let on_start_change = {
        let end = end.clone();
        move |evt: Event<FormData>| on_change.call((evt.value(), end.clone()))
    };
    let on_end_change = {
        let start = start.clone();
        move |evt: Event<FormData>| on_change.call((start.clone(), evt.value()))
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
