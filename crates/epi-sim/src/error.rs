use epi_core::ClusterId;
use epi_model::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("cluster {0} not found")]
    ClusterNotFound(ClusterId),

    #[error("simulation configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
