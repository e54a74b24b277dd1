//! Curriculum area/work repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Work listings are ordered by `sequence ASC`.
//! - `replace_area_works` swaps an area's list atomically.
//! - Stored sequences are unique per area.

use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::curriculum::{CurriculumArea, CurriculumWork};
use crate::model::ModelValidationError;
use crate::sequencing::area_key::{area_display, log_area_key};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use uuid::Uuid;

const WORK_SELECT_SQL: &str = "SELECT
    work_id,
    name,
    sequence,
    area_key,
    is_imported
FROM curriculum_works";

/// Repository interface for curriculum areas and their ordered works.
pub trait CurriculumRepository {
    /// Inserts or updates one area's display metadata.
    fn upsert_area(&self, area: &CurriculumArea) -> RepoResult<()>;
    /// Lists every area ordered by key.
    fn list_areas(&self) -> RepoResult<Vec<CurriculumArea>>;
    /// Loads one area by canonical key.
    fn get_area(&self, area_key: &str) -> RepoResult<Option<CurriculumArea>>;
    /// Appends an authored work at the end of an area's sequence.
    fn append_work(&self, area_key: &str, name: &str) -> RepoResult<CurriculumWork>;
    /// Lists one area's works in sequence order.
    fn list_works(&self, area_key: &str) -> RepoResult<Vec<CurriculumWork>>;
    /// Replaces one area's full work list with `works`.
    fn replace_area_works(&self, area_key: &str, works: &[CurriculumWork]) -> RepoResult<()>;
}

/// Builds an area row for `key` using catalog display metadata.
pub fn catalog_area(key: &str) -> CurriculumArea {
    let (name, icon, color) = area_display(key);
    CurriculumArea::new(key, name, icon, color)
}

/// SQLite-backed curriculum repository.
pub struct SqliteCurriculumRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCurriculumRepository<'conn> {
    /// Creates a repository over a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn ensure_area_exists(&self, area_key: &str) -> RepoResult<()> {
        if self.get_area(area_key)?.is_none() {
            return Err(RepoError::AreaNotFound(area_key.to_string()));
        }
        Ok(())
    }
}

impl CurriculumRepository for SqliteCurriculumRepository<'_> {
    fn upsert_area(&self, area: &CurriculumArea) -> RepoResult<()> {
        area.validate()?;
        self.conn.execute(
            "INSERT INTO curriculum_areas (area_key, name, icon, color)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(area_key) DO UPDATE SET
                name = excluded.name,
                icon = excluded.icon,
                color = excluded.color;",
            params![area.key, area.name, area.icon, area.color],
        )?;
        Ok(())
    }

    fn list_areas(&self) -> RepoResult<Vec<CurriculumArea>> {
        let mut stmt = self.conn.prepare(
            "SELECT area_key, name, icon, color FROM curriculum_areas ORDER BY area_key ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut areas = Vec::new();
        while let Some(row) = rows.next()? {
            areas.push(parse_area_row(row)?);
        }
        Ok(areas)
    }

    fn get_area(&self, area_key: &str) -> RepoResult<Option<CurriculumArea>> {
        let area = self
            .conn
            .query_row(
                "SELECT area_key, name, icon, color FROM curriculum_areas WHERE area_key = ?1;",
                [area_key],
                |row| {
                    Ok(CurriculumArea {
                        key: row.get("area_key")?,
                        name: row.get("name")?,
                        icon: row.get("icon")?,
                        color: row.get("color")?,
                    })
                },
            )
            .optional()?;
        Ok(area)
    }

    fn append_work(&self, area_key: &str, name: &str) -> RepoResult<CurriculumWork> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        self.ensure_area_exists(area_key)?;

        let max_sequence: i64 = tx.query_row(
            "SELECT COALESCE(MAX(sequence), 0) FROM curriculum_works WHERE area_key = ?1;",
            [area_key],
            |row| row.get(0),
        )?;
        let sequence = u32::try_from(max_sequence + 1).map_err(|_| {
            RepoError::InvalidData(format!(
                "sequence overflow in curriculum_works for area `{area_key}`"
            ))
        })?;

        let work = CurriculumWork::new(Uuid::new_v4().to_string(), name.trim(), sequence, area_key);
        work.validate()?;
        insert_work(&tx, &work)?;
        tx.commit()?;
        Ok(work)
    }

    fn list_works(&self, area_key: &str) -> RepoResult<Vec<CurriculumWork>> {
        let mut stmt = self.conn.prepare(&format!(
            "{WORK_SELECT_SQL}
             WHERE area_key = ?1
             ORDER BY sequence ASC, work_id ASC;"
        ))?;
        let mut rows = stmt.query([area_key])?;
        let mut works = Vec::new();
        while let Some(row) = rows.next()? {
            works.push(parse_work_row(row)?);
        }
        Ok(works)
    }

    fn replace_area_works(&self, area_key: &str, works: &[CurriculumWork]) -> RepoResult<()> {
        for work in works {
            work.validate()?;
            if work.area_key != area_key {
                return Err(RepoError::ForeignWork {
                    area_key: area_key.to_string(),
                    work_id: work.id.clone(),
                });
            }
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        self.ensure_area_exists(area_key)?;
        tx.execute("DELETE FROM curriculum_works WHERE area_key = ?1;", [area_key])?;
        for work in works {
            insert_work(&tx, work)?;
        }
        tx.commit()?;

        info!(
            "event=curriculum_replace module=repo status=ok area={} works={}",
            log_area_key(area_key),
            works.len()
        );
        Ok(())
    }
}

fn insert_work(tx: &Transaction<'_>, work: &CurriculumWork) -> RepoResult<()> {
    tx.execute(
        "INSERT INTO curriculum_works (area_key, work_id, name, sequence, is_imported)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            work.area_key,
            work.id,
            work.name,
            i64::from(work.sequence),
            i64::from(work.is_imported),
        ],
    )?;
    Ok(())
}

fn parse_area_row(row: &Row<'_>) -> RepoResult<CurriculumArea> {
    let area = CurriculumArea {
        key: row.get("area_key")?,
        name: row.get("name")?,
        icon: row.get("icon")?,
        color: row.get("color")?,
    };
    area.validate()?;
    Ok(area)
}

fn parse_work_row(row: &Row<'_>) -> RepoResult<CurriculumWork> {
    let work_id: String = row.get("work_id")?;

    let raw_sequence: i64 = row.get("sequence")?;
    let sequence = u32::try_from(raw_sequence).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid sequence `{raw_sequence}` for work `{work_id}`"
        ))
    })?;

    let is_imported = match row.get::<_, i64>("is_imported")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_imported value `{other}` for work `{work_id}`"
            )));
        }
    };

    let work = CurriculumWork {
        id: work_id,
        name: row.get("name")?,
        sequence,
        area_key: row.get("area_key")?,
        is_imported,
    };
    work.validate().map_err(|err| match err {
        ModelValidationError::ZeroSequence { work_id } => {
            RepoError::InvalidData(format!("work `{work_id}` has sequence 0"))
        }
        other => RepoError::Validation(other),
    })?;
    Ok(work)
}
