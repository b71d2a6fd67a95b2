/// Stamp carried by an in-flight request: the generation it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Per-loader request counter.
///
/// Every new request advances the generation; a completion is only applied
/// while its [`Ticket`] is still the current generation. Advancing without
/// issuing a ticket (see [`RequestGeneration::invalidate`]) abandons whatever
/// is in flight.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Starts a new generation and returns its ticket.
    pub fn advance(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Makes every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}
