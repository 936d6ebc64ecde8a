use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to resolve the address to a location")]
    Geocode,
    #[error("Invalid geographic position")]
    InvalidPosition,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// `true` for failures that happened before anything was written,
    /// i.e. the caller may resubmit without risking a duplicate record.
    pub const fn is_side_effect_free(&self) -> bool {
        matches!(self, Self::Geocode | Self::InvalidPosition)
    }
}
