//! Fetch sequencing guard for the listing pages.
//!
//! List fetches are idempotent reads and are not cancelled when inputs
//! change rapidly, so a stale response can arrive after a newer request
//! was issued. Each fetch takes a ticket from a monotonically
//! increasing per-page sequence; a completion handler applies its
//! response only if its ticket is still the latest issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Per-page request sequence.
#[derive(Debug, Default)]
pub struct FetchSequence {
    issued: AtomicU64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new fetch, superseding all earlier ones.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the latest issued fetch. A `false`
    /// result means the response must be discarded.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued.load(Ordering::SeqCst)
    }
}
