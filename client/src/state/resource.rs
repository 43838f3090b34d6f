//! Per-resource request bookkeeping shared by the data stores.
//!
//! DESIGN
//! ======
//! Each fetchable resource carries its own loading/error/has-loaded flags and
//! a generation counter. `begin` hands out a ticket; a completion is applied
//! only if its ticket still matches, so a superseded or cancelled request can
//! never overwrite newer state.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

/// Ticket identifying one in-flight request for a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Loading/error flags for one resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFlags {
    pub loading: bool,
    pub error: Option<String>,
    pub has_loaded: bool,
    generation: u64,
}

impl ResourceFlags {
    /// Mark a request as started. Clears any previous error.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.generation)
    }

    /// Whether `ticket` belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation == ticket.0
    }

    /// Record a completion. Returns `false` (and changes nothing) for stale tickets.
    pub fn finish(&mut self, ticket: Ticket, error: Option<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.has_loaded = true;
        self.error = error.map(|e| if e.trim().is_empty() { "Error desconocido".to_owned() } else { e });
        true
    }

    /// Drop whatever is in flight; its completion will be ignored.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Forget that the resource was ever loaded (e.g. when the subject changes).
    pub fn reset(&mut self) {
        self.cancel();
        self.error = None;
        self.has_loaded = false;
    }
}
