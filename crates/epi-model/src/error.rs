use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A setter named a compartment the catalog does not contain.  Raised
    /// before any mutation, so the catalog is left untouched.
    #[error("unknown compartment \"{0}\"")]
    UnknownCompartment(String),

    #[error("duplicate compartment \"{0}\"")]
    DuplicateCompartment(String),

    /// A catalog's well-known role (susceptible / exposed / dead) names a
    /// missing compartment.
    #[error("catalog is missing required {0} compartment \"{1}\"")]
    MissingRole(&'static str, String),

    /// The dead compartment was constructed with outgoing transitions.
    /// DEAD is terminal; agents there never transition again.
    #[error("dead compartment \"{0}\" must have no outgoing transitions")]
    DeadNotTerminal(String),

    /// The sum of all initial-ratio weights is zero; the cumulative
    /// distribution would be undefined and no agent could be assigned a
    /// compartment.
    #[error("total initial-ratio weight is zero")]
    ZeroInitialWeight,
}

pub type CatalogResult<T> = Result<T, CatalogError>;
