//! Roster registry
//!
//! Owns every record for one session and is the single writer of the
//! department and manager links between them.

pub mod ids;
pub mod store;

pub use ids::{HashedIds, IdGenerator, SequentialIds};
pub use store::{RosterError, RosterResult, RosterStore};
