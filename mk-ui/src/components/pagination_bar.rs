//! Page navigation and page-size selector under the record table.

use dioxus::prelude::*;
use mk_model::query::PAGE_SIZE_OPTIONS;
use mk_model::{PageRequest, Pagination};

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Page numbers around `current`, always including the first and last page.
pub fn page_items(current: u32, count: u32) -> Vec<PageItem> {
    const SPAN: u32 = 2;
    if count == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, count);
    let low = current.saturating_sub(SPAN).max(1);
    let high = (current + SPAN).min(count);

    let mut items = Vec::new();
    if low > 1 {
        items.push(PageItem::Page(1));
        if low > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((low..=high).map(PageItem::Page));
    if high < count {
        if high + 1 < count {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(count));
    }
    items
}

#[derive(Props, Clone, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub on_change: EventHandler<PageRequest>,
}

#[component]
pub fn PaginationBar(props: PaginationBarProps) -> Element {
    let on_change = props.on_change;
    let pagination = props.pagination;
    let current = pagination.current;
    let page_size = pagination.page_size;
    let count = pagination.page_count();
    let summary = pagination.summary();
    let items = page_items(current, count);

    let on_size = move |evt: Event<FormData>| {
        if let Ok(size) = evt.value().parse::<u32>() {
            on_change.call(PageRequest::first(size));
        }
    };

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end; align-items: center; gap: 6px; margin-top: 12px;",
            span { style: "margin-right: 8px; color: #666;", "{summary}" }
            button {
                disabled: current <= 1,
                onclick: move |_| on_change.call(PageRequest::new(current.saturating_sub(1), page_size)),
                "‹"
            }
            for (i, item) in items.into_iter().enumerate() {
                {
                    match item {
                        PageItem::Page(n) => {
                            let style = if n == current {
                                "border: 1px solid #1677ff; color: #1677ff;"
                            } else {
                                ""
                            };
                            rsx! {
                                button {
                                    key: "p{n}",
                                    style: "{style}",
                                    onclick: move |_| on_change.call(PageRequest::new(n, page_size)),
                                    "{n}"
                                }
                            }
                        }
                        PageItem::Gap => rsx! {
                            span { key: "gap{i}", "…" }
                        },
                    }
                }
            }
            button {
                disabled: current >= count,
                onclick: move |_| on_change.call(PageRequest::new(current + 1, page_size)),
                "›"
            }
            select {
                onchange: on_size,
                for size in PAGE_SIZE_OPTIONS {
                    option {
                        key: "{size}",
                        value: "{size}",
                        selected: size == page_size,
                        "{size} / page"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(page_items(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn long_ranges_collapse_with_gaps() {
        assert_eq!(
            page_items(10, 20),
            vec![Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
        );
    }

    #[test]
    fn no_gap_next_to_the_ends() {
        assert_eq!(
            page_items(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(page_items(1, 5).last(), Some(&Page(5)));
    }

    #[test]
    fn current_is_clamped() {
        assert_eq!(page_items(9, 2), vec![Page(1), Page(2)]);
    }
}
