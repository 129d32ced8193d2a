//! `epi-core` — foundational types for the `epi` compartmental simulation
//! framework.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `ClusterId`, `CompartmentId`                 |
//! | [`geom`]   | `Vec2`, `Rect`                                          |
//! | [`color`]  | `Rgb` display color                                     |
//! | [`phase`]  | `Phase`, `RowMarker`                                    |
//! | [`rng`]    | `SimRng` (explicit, optionally seeded random source)    |
//! | [`config`] | `SimConfig`                                             |
//! | [`error`]  | `EpiError`, `EpiResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod color;
pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod phase;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgb;
pub use config::SimConfig;
pub use error::{EpiError, EpiResult};
pub use geom::{Rect, Vec2};
pub use ids::{AgentId, ClusterId, CompartmentId};
pub use phase::{Phase, RowMarker};
pub use rng::SimRng;
