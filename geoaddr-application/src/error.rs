use std::io;

use thiserror::Error;

use geoaddr_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(err.into())
    }
}

impl AppError {
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Business(UsecaseError::Repo(RepoError::NotFound))
        )
    }
}
