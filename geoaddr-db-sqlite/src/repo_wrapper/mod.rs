// Implements the repository traits for both connection guards by
// delegating into the shared `repo_impl` functions.

use geoaddr_core::{entities::*, repositories::*};

use super::repo_impl;

mod read_only;
mod read_write;

type Result<T> = std::result::Result<T, Error>;
