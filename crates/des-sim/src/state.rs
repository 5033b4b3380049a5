//! Customers and the FIFO waiting line.

use des_core::{CustomerId, SimTime};

/// A customer present in the system.
///
/// Created when an Arrival event is handled; removed from the waiting line
/// when their Completion event is handled.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Customer {
    pub id:           CustomerId,
    pub arrival_time: SimTime,
}

/// The single FIFO waiting line, insertion-ordered by arrival.
///
/// The first `server_count` positions conceptually occupy service slots; the
/// engine never tracks per-server identity because servers are
/// interchangeable — a server is "available" iff the line is shorter than the
/// server count.
///
/// Removal is by customer identity, never by position: by the time a
/// Completion event fires, the customer may no longer be at the head (with
/// several servers, services finish out of arrival order).
#[derive(Default, Debug)]
pub struct WaitingLine {
    customers: Vec<Customer>,
}

impl WaitingLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly arrived customer at the tail.
    pub fn push_back(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Remove the customer with the given ID, preserving the order of the
    /// rest.  Returns `None` if no such customer is in the line — the caller
    /// treats that as a broken identity-tracking invariant.
    pub fn remove(&mut self, id: CustomerId) -> Option<Customer> {
        let pos = self.customers.iter().position(|c| c.id == id)?;
        Some(self.customers.remove(pos))
    }

    /// The customer at line position `index` (0 = head), if occupied.
    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
