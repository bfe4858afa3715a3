//! Reusable Dioxus RSX components for the review table and metrics dashboard.

mod catalog_search_view;
mod chart_container;
mod chart_header;
mod confirm_dialog;
mod date_range_picker;
mod echart_panel;
mod filter_panel_view;
mod loading_spinner;
mod modal;
mod multi_select;
mod notice_banner;
mod pagination_bar;
mod record_details;
mod record_form_view;
mod record_table;
mod search_form;
mod status_tag;
mod toast_host;

pub use catalog_search_view::CatalogSearchView;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use confirm_dialog::ConfirmDialog;
pub use date_range_picker::DateRangePicker;
pub use echart_panel::EchartPanel;
pub use filter_panel_view::FilterPanelView;
pub use loading_spinner::LoadingSpinner;
pub use modal::Modal;
pub use multi_select::MultiSelect;
pub use notice_banner::{level_label, NoticeBanner};
pub use pagination_bar::{page_items, PageItem, PaginationBar};
pub use record_details::RecordDetails;
pub use record_form_view::RecordFormView;
pub use record_table::{next_sort, toggle_status, RecordTable};
pub use search_form::SearchForm;
pub use status_tag::StatusTag;
pub use toast_host::ToastHost;
