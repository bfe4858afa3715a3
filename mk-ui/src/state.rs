//! Toast notifications managed via Dioxus context.
//!
//! Each app provides one [`ToastQueue`] with `use_context_provider` and hands
//! `&queue` to anything that takes a [`Notifier`]. A toast expires
//! [`TOAST_MILLIS`] after it is raised; [`ToastHost`](crate::components::ToastHost),
//! mounted once at the app root, sweeps expired toasts, so a toast outlives
//! the component that raised it.

use dioxus::prelude::*;
use mk_model::{Notice, NoticeLevel, Notifier};

pub const TOAST_MILLIS: f64 = 3000.0;

/// How often the host checks for expired toasts.
pub const SWEEP_MILLIS: i32 = 250;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    /// Epoch milliseconds after which the toast is removed.
    pub expires_at: f64,
}

/// Visible toasts in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastList {
    pub fn push(&mut self, notice: Notice, now: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            notice,
            expires_at: now + TOAST_MILLIS,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop every toast whose time is up; `true` if any was dropped.
    pub fn sweep(&mut self, now: f64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Reactive list of visible toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    list: Signal<ToastList>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            list: Signal::new(ToastList::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.list.read().toasts().to_vec()
    }

    pub fn dismiss(&self, id: u64) {
        let mut list = self.list;
        list.write().dismiss(id);
    }

    /// Remove expired toasts. Only writes the signal when something expired.
    pub fn sweep(&self) {
        let now = js_sys::Date::now();
        let mut list = self.list;
        if list.peek().toasts().iter().any(|t| t.expires_at <= now) {
            list.write().sweep(now);
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        let mut list = self.list;
        list.write().push(notice, js_sys::Date::now());
    }
}

/// Background, text and border colour for a toast.
pub fn toast_colors(level: NoticeLevel) -> (&'static str, &'static str, &'static str) {
    match level {
        NoticeLevel::Success => ("#F6FFED", "#389E0D", "#B7EB8F"),
        NoticeLevel::Info => ("#E6F4FF", "#0958D9", "#91CAFF"),
        NoticeLevel::Warning => ("#FFFBE6", "#D48806", "#FFE58F"),
        NoticeLevel::Error => ("#FFF2F0", "#CF1322", "#FFCCC7"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_distinct_colors() {
        let levels = [
            NoticeLevel::Success,
            NoticeLevel::Info,
            NoticeLevel::Warning,
            NoticeLevel::Error,
        ];
        let texts: std::collections::HashSet<_> =
            levels.iter().map(|l| toast_colors(*l).1).collect();
        assert_eq!(texts.len(), levels.len());
    }

    #[test]
    fn toasts_expire_on_their_own_deadline() {
        let mut list = ToastList::default();
        let first = list.push(Notice::success("Created"), 1_000.0);
        let second = list.push(Notice::error("Server error"), 2_500.0);
        assert_ne!(first, second);

        assert!(!list.sweep(3_999.0));
        assert_eq!(list.toasts().len(), 2);

        assert!(list.sweep(4_000.0));
        let left: Vec<u64> = list.toasts().iter().map(|t| t.id).collect();
        assert_eq!(left, vec![second]);

        assert!(list.sweep(5_500.0));
        assert!(list.toasts().is_empty());
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut list = ToastList::default();
        let a = list.push(Notice::info("a"), 0.0);
        let b = list.push(Notice::info("b"), 0.0);
        list.dismiss(a);
        assert_eq!(list.toasts().len(), 1);
        assert_eq!(list.toasts()[0].id, b);
        assert_eq!(list.toasts()[0].expires_at, TOAST_MILLIS);
    }
}
