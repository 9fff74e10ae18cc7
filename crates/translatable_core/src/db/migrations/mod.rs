//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Render migration templates with configured table/column names.
//! - Apply pending migrations atomically.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - Templates only use `{table}` and `{owner}` placeholders.
//! - `user_version` covers the whole database. A configured table that is
//!   missing from an up-to-date database is provisioned by replaying every
//!   migration for it; templates must therefore stay re-runnable.

use crate::config::StorageSettings;
use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    template: &'static str,
}

impl Migration {
    fn render(&self, settings: &StorageSettings) -> String {
        self.template
            .replace("{table}", &settings.table_name)
            .replace("{owner}", &settings.owner_prefix)
    }
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    template: include_str!("0001_attribute_translations.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection, settings: &StorageSettings) -> DbResult<()> {
    settings.validate()?;

    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    let table_ready = table_exists(conn, &settings.table_name)?;
    if current_version == latest && table_ready {
        return Ok(());
    }
    let applied_version = if table_ready { current_version } else { 0 };

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= applied_version {
            continue;
        }

        tx.execute_batch(&migration.render(settings))?;
        tx.execute_batch(&format!(
            "PRAGMA user_version = {};",
            migration.version.max(current_version)
        ))?;
        info!(
            "event=db_migrate module=db status=ok version={} table={}",
            migration.version, settings.table_name
        );
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version stored in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Whether a table named `table` exists in the main schema.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{Migration, MIGRATIONS};
    use crate::config::StorageSettings;

    #[test]
    fn versions_are_strictly_increasing() {
        let versions: Vec<u32> = MIGRATIONS.iter().map(|m| m.version).collect();
        assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(versions.first(), Some(&1));
    }

    #[test]
    fn render_substitutes_every_placeholder() {
        let settings = StorageSettings {
            table_name: "product_texts".to_string(),
            owner_prefix: "owner".to_string(),
        };
        let migration: &Migration = &MIGRATIONS[0];
        let sql = migration.render(&settings);

        assert!(!sql.contains('{'));
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS product_texts"));
        assert!(sql.contains("owner_type TEXT NOT NULL"));
        assert!(sql.contains("owner_id TEXT NOT NULL"));
    }
}
