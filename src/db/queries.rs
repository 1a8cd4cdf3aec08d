use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::interval::WorkInterval;
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

/// Query cap on list reads: only the most recent 200 records are returned.
pub const LIST_LIMIT: i64 = 200;

pub fn map_row(row: &Row) -> Result<WorkInterval> {
    let begin_str: String = row.get("begin_date")?;
    let end_str: String = row.get("end_date")?;

    let begin = NaiveDate::parse_from_str(&begin_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(begin_str.clone())),
        )
    })?;

    let end = NaiveDate::parse_from_str(&end_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(end_str.clone())),
        )
    })?;

    Ok(WorkInterval {
        id: row.get("id")?,
        owner_id: row.get("owner_id")?,
        begin,
        end,
        days: row.get("days")?,
        location: row.get("location")?,
        notes: row.get("notes")?,
        status: row.get::<_, i64>("status")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new interval and return its assigned id.
pub fn insert_interval(conn: &Connection, iv: &WorkInterval) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO intervals (owner_id, begin_date, end_date, days, location, notes, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            iv.owner_id,
            iv.begin_str(),
            iv.end_str(),
            iv.days,
            iv.location,
            iv.notes,
            if iv.status { 1 } else { 0 },
            iv.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load a single interval by id. Fails with NotFound when absent.
pub fn get_interval(conn: &Connection, id: i64) -> AppResult<WorkInterval> {
    let mut stmt = conn.prepare("SELECT * FROM intervals WHERE id = ?1")?;

    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound(id))
}

/// Update an interval (all fields except id and owner).
pub fn update_interval(conn: &Connection, iv: &WorkInterval) -> AppResult<()> {
    conn.execute(
        "UPDATE intervals
         SET begin_date = ?1, end_date = ?2, days = ?3,
             location = ?4, notes = ?5, status = ?6
         WHERE id = ?7",
        params![
            iv.begin_str(),
            iv.end_str(),
            iv.days,
            iv.location,
            iv.notes,
            if iv.status { 1 } else { 0 },
            iv.id,
        ],
    )?;
    Ok(())
}

/// Narrow update of the status flag only.
pub fn set_interval_status(conn: &Connection, id: i64, valid: bool) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE intervals SET status = ?1 WHERE id = ?2",
        params![if valid { 1 } else { 0 }, id],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

/// Permanently remove an interval.
pub fn delete_interval(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM intervals WHERE id = ?1", [id])?;

    if deleted == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

/// Load the intervals of a single owner, in creation order, capped at
/// LIST_LIMIT records.
pub fn list_for_owner(pool: &mut DbPool, owner_id: &str) -> AppResult<Vec<WorkInterval>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM intervals
         WHERE owner_id = ?1
         ORDER BY id ASC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![owner_id, LIST_LIMIT], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Cross-owner variant of the list: the shared public feed.
pub fn list_all(pool: &mut DbPool) -> AppResult<Vec<WorkInterval>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM intervals
         ORDER BY id ASC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([LIST_LIMIT], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}

/// Sum of `days` over an owner's intervals where status = true.
pub fn sum_valid_days(conn: &Connection, owner_id: &str) -> AppResult<i64> {
    let sum: i64 = conn.query_row(
        "SELECT IFNULL(SUM(days), 0) FROM intervals
         WHERE owner_id = ?1 AND status = 1",
        [owner_id],
        |row| row.get(0),
    )?;
    Ok(sum)
}
