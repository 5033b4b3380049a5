//! `des-core` — foundational types for the `rust_des` discrete-event
//! simulation framework.
//!
//! This crate is a dependency of every other `des-*` crate.  It intentionally
//! has no `des-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`ids`]      | `CustomerId`                                  |
//! | [`time`]     | `SimTime`, `SimClock`, `SimConfig`            |
//! | [`variate`]  | `SimRng` (seeded), exponential variates       |
//! | [`error`]    | `DesError`, `DesResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod time;
pub mod variate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DesError, DesResult};
pub use ids::CustomerId;
pub use time::{SimClock, SimConfig, SimTime};
pub use variate::SimRng;
