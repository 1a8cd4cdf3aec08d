//! Identity collaborator: resolves stable user ids to display profiles.
//!
//! The accounting logic never talks to the `users` table directly; it goes
//! through the IdentityProvider trait so the directory backing it can be
//! swapped out.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::params;
use serde::Serialize;

/// Minimal display profile of an owner.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
}

pub trait IdentityProvider {
    /// Resolve a single id. Fails with ProfileLookup when unknown.
    fn profile(&self, id: &str) -> AppResult<UserProfile>;

    /// Resolve a set of ids in one call.
    fn profiles(&self, ids: &[String]) -> AppResult<Vec<UserProfile>> {
        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            out.push(self.profile(id)?);
        }
        Ok(out)
    }
}

/// User directory backed by the `users` table of the application database.
pub struct LocalDirectory<'a> {
    conn: &'a Connection,
}

impl<'a> LocalDirectory<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Register or update a profile.
    pub fn upsert(&self, profile: &UserProfile) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO users (id, username, avatar_url)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET username = ?2, avatar_url = ?3",
            params![profile.id, profile.username, profile.avatar_url],
        )?;
        Ok(())
    }

    /// List every registered profile, ordered by id.
    pub fn all(&self) -> AppResult<Vec<UserProfile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, username, avatar_url FROM users ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(UserProfile {
                id: row.get(0)?,
                username: row.get(1)?,
                avatar_url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl IdentityProvider for LocalDirectory<'_> {
    fn profile(&self, id: &str) -> AppResult<UserProfile> {
        let found = self
            .conn
            .prepare("SELECT id, username, avatar_url FROM users WHERE id = ?1")?
            .query_row([id], |row| {
                Ok(UserProfile {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    avatar_url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            })
            .optional()?;

        found.ok_or_else(|| AppError::ProfileLookup(id.to_string()))
    }
}
