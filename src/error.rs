use thiserror::Error;

/// Top-level error type for the layered renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the figure model (faces, bundles and their handles).
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("face has {count} vertices, at least 3 are required")]
    TooFewVertices { count: usize },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised while rendering a figure.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("stacking order of bundle is cyclic: {remaining} faces can never be placed")]
    CyclicStacking { remaining: usize },
}

/// Convenience type alias for results using [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;
