//! `epi-agent` — agent state for the epi framework.
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`heading`] | The 8 fixed movement directions                 |
//! | [`agent`]   | `Agent`, `HistoryEntry`                         |

pub mod agent;
pub mod heading;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, HistoryEntry};
pub use heading::{random_velocity, HEADINGS};
