//! Curriculum sequencing and progress-frontier core for Montree.
//! This crate owns work placement, merge, frontier and progress invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sequencing;
pub mod service;

pub use config::{ConfigError, EngineConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError, LoggingOptions};
pub use model::assignment::{Assignment, WorkStatus};
pub use model::curriculum::{CurriculumArea, CurriculumWork};
pub use model::progress::{AreaProgress, ChildProgress, Frontier, StatusCounts};
pub use model::ModelValidationError;
pub use repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
pub use repo::curriculum_repo::{catalog_area, CurriculumRepository, SqliteCurriculumRepository};
pub use repo::{RepoError, RepoResult};
pub use sequencing::area_key::{canonical_work_name, normalize_area_key, AreaKeyNormalizer};
pub use sequencing::fuzzy::score;
pub use sequencing::position::{find_position, KeywordRule, PositionFinder, RangeScaling};
pub use sequencing::SequencingEngine;
pub use service::curriculum_service::{CurriculumService, ImportSummary};
pub use service::progress_service::ProgressService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
