//! Assignment repository contracts and SQLite implementation.
//!
//! Assignments are stored verbatim: area labels and work names keep their
//! free-text form and are only normalized by the sequencing engine.

use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::assignment::{Assignment, WorkStatus};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const ASSIGNMENT_SELECT_SQL: &str = "SELECT
    child_id,
    area,
    work_name,
    status
FROM assignments";

pub trait AssignmentRepository {
    /// Records one assignment and returns its generated id.
    fn record_assignment(&self, assignment: &Assignment) -> RepoResult<Uuid>;
    /// Lists one child's assignments in recording order.
    fn list_for_child(&self, child_id: &str) -> RepoResult<Vec<Assignment>>;
    /// Lists every assignment in recording order.
    fn list_all(&self) -> RepoResult<Vec<Assignment>>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    /// Creates a repository over a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn query(&self, sql: &str, child_id: Option<&str>) -> RepoResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = match child_id {
            Some(child_id) => stmt.query([child_id])?,
            None => stmt.query([])?,
        };
        let mut assignments = Vec::new();
        while let Some(row) = rows.next()? {
            assignments.push(parse_assignment_row(row)?);
        }
        Ok(assignments)
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn record_assignment(&self, assignment: &Assignment) -> RepoResult<Uuid> {
        assignment.validate()?;

        let assignment_id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO assignments (assignment_id, child_id, area, work_name, status)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                assignment_id.to_string(),
                assignment.child_id,
                assignment.area,
                assignment.work_name,
                assignment.status.as_str(),
            ],
        )?;
        Ok(assignment_id)
    }

    fn list_for_child(&self, child_id: &str) -> RepoResult<Vec<Assignment>> {
        self.query(
            &format!("{ASSIGNMENT_SELECT_SQL} WHERE child_id = ?1 ORDER BY rowid ASC;"),
            Some(child_id),
        )
    }

    fn list_all(&self) -> RepoResult<Vec<Assignment>> {
        self.query(&format!("{ASSIGNMENT_SELECT_SQL} ORDER BY rowid ASC;"), None)
    }
}

fn parse_assignment_row(row: &Row<'_>) -> RepoResult<Assignment> {
    let status_text: String = row.get("status")?;
    let status = WorkStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in assignments.status"
        ))
    })?;

    Ok(Assignment {
        child_id: row.get("child_id")?,
        area: row.get("area")?,
        work_name: row.get("work_name")?,
        status,
    })
}
