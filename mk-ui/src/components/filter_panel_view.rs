//! Filter inputs for one metrics panel.
//!
//! Owns a [`FilterPanel`] and loads its remote option lists on mount. The
//! snapshot only leaves through `on_search`, once per search or reset.

use crate::components::{DateRangePicker, MultiSelect};
use crate::state::ToastQueue;
use dioxus::prelude::*;
use mk_dashboard::{fetch_options, FilterField, FilterPanel, MetricsPanel, OptionSource};
use mk_gateway::Gateway;
use mk_model::{DateRange, FilterSnapshot, OptionItem};

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelViewProps {
    pub panel: MetricsPanel,
    #[props(default = false)]
    pub loading: bool,
    pub on_search: EventHandler<FilterSnapshot>,
}

fn owned(items: Vec<&OptionItem>) -> Vec<OptionItem> {
    items.into_iter().cloned().collect()
}

#[component]
pub fn FilterPanelView(props: FilterPanelViewProps) -> Element {
    let panel = props.panel;
    let on_search = props.on_search;
    let gateway = use_context::<Gateway>();
    let toasts = use_context::<ToastQueue>();
    let mut filter = use_signal(|| FilterPanel::new(panel.filter_fields()));
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);

    use_effect(move || {
        for &source in panel.option_sources() {
            filter.write().begin_loading(source);
            let gateway = gateway.clone();
            spawn(async move {
                let result = fetch_options(&gateway, panel, source).await;
                filter.write().options_loaded(source, result, &toasts);
            });
        }
    });

    let on_dates = move |(s, e): (String, String)| {
        filter.write().set_time_range(DateRange::parse(&s, &e));
        start.set(s);
        end.set(e);
    };
    let on_submit = move |_| {
        let snapshot = filter.read().search(&toasts);
        on_search.call(snapshot);
    };
    let on_reset = move |_| {
        let snapshot = filter.write().reset(&toasts);
        start.set(String::new());
        end.set(String::new());
        on_search.call(snapshot);
    };

    let state = filter.read();
    let draft = state.draft().clone();
    let departments = owned(state.visible_departments());
    let courses = owned(state.visible_courses());
    let types = owned(state.visible_types());
    let departments_loading = state.options(OptionSource::Departments).loading;
    let courses_loading = state.options(OptionSource::Courses).loading;
    let department_query = state.department_query().to_string();
    let course_query = state.course_query().to_string();
    let type_query = state.type_query().to_string();
    let has_dates = state.has_field(FilterField::TimeRange);
    let has_departments = state.has_field(FilterField::Departments);
    let has_types = state.has_field(FilterField::Types);
    let has_courses = state.has_field(FilterField::Courses);
    drop(state);

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start; padding: 12px; background: #fafafa; border-radius: 6px; margin-bottom: 12px;",
            if has_dates {
                DateRangePicker {
                    start: start(),
                    end: end(),
                    on_change: on_dates,
                }
            }
            if has_departments {
                MultiSelect {
                    label: "Departments",
                    options: departments,
                    selected: draft.departments.clone(),
                    query: department_query,
                    loading: departments_loading,
                    on_query: move |q| filter.write().set_department_query(q),
                    on_toggle: move |id: String| filter.write().toggle_department(&id),
                    on_clear: move |_| filter.write().clear_departments(),
                }
            }
            if has_types {
                MultiSelect {
                    label: "Types",
                    options: types,
                    selected: draft.types.clone(),
                    query: type_query,
                    on_query: move |q| filter.write().set_type_query(q),
                    on_toggle: move |id: String| filter.write().toggle_type(&id),
                    on_clear: move |_| filter.write().clear_types(),
                }
            }
            if has_courses {
                MultiSelect {
                    label: "Courses",
                    options: courses,
                    selected: draft.courses.clone(),
                    query: course_query,
                    loading: courses_loading,
                    on_query: move |q| filter.write().set_course_query(q),
                    on_toggle: move |id: String| filter.write().toggle_course(&id),
                    on_clear: move |_| filter.write().clear_courses(),
                }
            }
            div {
                style: "display: flex; gap: 8px; align-self: flex-end;",
                button {
                    style: "background: #1677ff; color: #fff; border: 1px solid #1677ff; border-radius: 4px; padding: 4px 15px;",
                    disabled: props.loading,
                    onclick: on_submit,
                    "Search"
                }
                button {
                    style: "border-radius: 4px; padding: 4px 15px;",
                    onclick: on_reset,
                    "Reset"
                }
            }
        }
    }
}
