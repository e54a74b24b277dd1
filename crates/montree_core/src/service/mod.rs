//! Use-case services over repositories and the sequencing engine.
//!
//! # Responsibility
//! - Fetch curriculum and assignment snapshots, run the pure pipeline, and
//!   shape results for callers.
//! - Keep CLI/API layers decoupled from storage details.
//!
//! # Invariants
//! - Every call recomputes from a fresh snapshot; nothing is cached.

pub mod curriculum_service;
pub mod progress_service;

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    /// Child id is blank after trim.
    InvalidChildId,
    /// Normalized area key has no curriculum row.
    UnknownArea(String),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChildId => write!(f, "child id must not be blank"),
            Self::UnknownArea(key) => write!(f, "unknown curriculum area: {key}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::AreaNotFound(key) => Self::UnknownArea(key),
            other => Self::Repo(other),
        }
    }
}
