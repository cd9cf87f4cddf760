//! Last-write-wins gate for deferred recipe generation
//!
//! Every generate request takes a ticket. When the delayed work finishes its
//! result is only applied if no newer request was made in the meantime.
//! Nothing is ever cancelled.

use std::time::Duration;

/// Delay between the generate request and showing the result
pub const GENERATION_DELAY: Duration = Duration::from_millis(1500);

/// Identifies one generate request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for GenerationTicket {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct GenerationGate {
    latest: u64,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; it supersedes all earlier ones
    pub fn begin(&mut self) -> GenerationTicket {
        self.latest = self.latest.wrapping_add(1);
        GenerationTicket(self.latest)
    }

    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Pass the result through only if the ticket is still the latest
    pub fn complete<T>(&self, ticket: GenerationTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding superseded generation"
            );
            None
        }
    }
}
