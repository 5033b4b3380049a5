//! Strongly typed, zero-cost identifier wrappers.
//!
//! IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` for
//! direct display and arithmetic in reporting code.

use std::fmt;

/// Unique identifier of a customer within one simulation run.
///
/// Assigned sequentially starting from 1 as customers arrive.  This is the
/// identity key for waiting-line removal: completion events reference a
/// customer by ID, never by line position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerId(pub u32);

impl CustomerId {
    /// The ID the engine hands to the first arriving customer.
    pub const FIRST: CustomerId = CustomerId(1);

    /// Return this ID and advance `self` to the next sequential value.
    #[inline]
    pub fn take_next(&mut self) -> CustomerId {
        let id = *self;
        self.0 += 1;
        id
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer#{}", self.0)
    }
}
