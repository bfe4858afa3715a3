//! Request sequencing.
//!
//! Every fetch is stamped with a [`FetchTicket`] from a [`FetchSequence`].
//! Only the most recently issued ticket may apply its result, so a slow
//! response can never overwrite the data of a newer one.

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket source for one stream of requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// True if `ticket` is the last one issued.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn latest(&self) -> Option<FetchTicket> {
        (self.latest > 0).then_some(FetchTicket(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = FetchSequence::new();
        assert_eq!(seq.latest(), None);

        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
        assert_eq!(seq.latest(), Some(second));
    }
}
