//! Request generations for overlapping dataset fetches.
//!
//! Every filter change starts a fresh fetch. Only the result of the most
//! recently issued fetch may be rendered; older ones are dropped when they
//! resolve.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchGeneration {
    latest: u64,
}

impl FetchGeneration {
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut generation = FetchGeneration::default();
        let first = generation.issue();
        let second = generation.issue();
        assert!(second > first);
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut generation = FetchGeneration::default();
        let slow = generation.issue();
        let fast = generation.issue();
        // the later fetch resolves first and renders
        assert!(generation.is_current(fast));
        // the earlier one resolves afterwards and must be discarded
        assert!(!generation.is_current(slow));
    }

    #[test]
    fn overlapping_fetches_render_last_issued_selection() {
        let mut generation = FetchGeneration::default();
        let mut rendered: Option<&str> = None;
        let issued = [(generation.issue(), "first"), (generation.issue(), "second"), (generation.issue(), "third")];
        // resolve in an arbitrary order
        for idx in [2, 0, 1] {
            let (ticket, label) = issued[idx];
            if generation.is_current(ticket) {
                rendered = Some(label);
            }
        }
        assert_eq!(rendered, Some("third"));
    }
}
