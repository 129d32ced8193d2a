//! `epi-model` — disease compartments and the per-cluster catalog.
//!
//! A [`CompartmentCatalog`] is the value-semantic description of one
//! cluster's disease model: the set of named compartments, their
//! infectiousness and initial-ratio weights, and the insertion-ordered
//! outgoing transition edges evaluated first-match-wins each tick.
//!
//! Catalogs are plain values.  Cloning one gives a fully independent copy, so
//! every cluster edits its own model without aliasing another cluster's —
//! there is no shared template object anywhere.
//!
//! | Module          | Contents                                         |
//! |-----------------|--------------------------------------------------|
//! | [`compartment`] | `Compartment`, transition edge storage           |
//! | [`catalog`]     | `CompartmentCatalog` and its editing operations  |
//! | [`defaults`]    | The standard SEIR-like model and its constants   |
//! | [`error`]       | `CatalogError`, `CatalogResult`                  |

pub mod catalog;
pub mod compartment;
pub mod defaults;
pub mod error;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::CompartmentCatalog;
pub use compartment::Compartment;
pub use defaults::{default_catalog, names};
pub use error::{CatalogError, CatalogResult};
