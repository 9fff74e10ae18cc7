//! Translation repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Load every translation record belonging to one owner.
//! - Persist a collection in one transaction (the autosave cascade).
//!
//! # Invariants
//! - New records (no id) are inserted; changed records are updated by id,
//!   never matched by content; unchanged records are not written.
//! - In-memory ids and change flags are applied only after commit, so a
//!   failed save leaves the collection exactly as it was.
//! - Loaded records take the owner they were queried with.

use crate::config::StorageSettings;
use crate::db::migrations::{current_user_version, latest_version, table_exists};
use crate::db::DbError;
use crate::model::collection::TranslationCollection;
use crate::model::translation::{AttributeTranslation, OwnerRef, TranslationId};
use log::{debug, error, info};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for translation persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TranslationId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(String),
    MissingRequiredColumn { table: String, column: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "translation record not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted translation data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table is missing: {table}"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column is missing: {table}.{column}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outcome of one save cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl SaveSummary {
    pub fn written(&self) -> usize {
        self.inserted + self.updated
    }
}

/// Repository interface for translation records.
pub trait TranslationRepository {
    /// Returns every record stored for `owner`, oldest first.
    fn load_for_owner(&self, owner: &OwnerRef) -> RepoResult<Vec<AttributeTranslation>>;
    /// Counts records stored for `owner`.
    fn count_for_owner(&self, owner: &OwnerRef) -> RepoResult<u64>;
    /// Persists all new and changed records of `collection` atomically.
    fn save_collection(
        &mut self,
        collection: &mut TranslationCollection,
    ) -> RepoResult<SaveSummary>;
}

/// SQL rendered once from storage settings.
#[derive(Debug, Clone)]
struct TranslationSql {
    select_by_owner: String,
    count_by_owner: String,
    insert: String,
    update: String,
}

impl TranslationSql {
    fn render(settings: &StorageSettings) -> Self {
        let table = settings.table_name.as_str();
        let owner_type = settings.owner_type_column();
        let owner_id = settings.owner_id_column();
        Self {
            select_by_owner: format!(
                "SELECT id, attribute, locale, text
                 FROM {table}
                 WHERE {owner_type} = ?1 AND {owner_id} = ?2
                 ORDER BY id ASC;"
            ),
            count_by_owner: format!(
                "SELECT COUNT(*) FROM {table} WHERE {owner_type} = ?1 AND {owner_id} = ?2;"
            ),
            insert: format!(
                "INSERT INTO {table} ({owner_type}, {owner_id}, attribute, locale, text)
                 VALUES (?1, ?2, ?3, ?4, ?5);"
            ),
            update: format!(
                "UPDATE {table}
                 SET
                    text = ?1,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?2 AND {owner_type} = ?3 AND {owner_id} = ?4;"
            ),
        }
    }
}

/// SQLite-backed translation repository.
pub struct SqliteTranslationRepository<'conn> {
    conn: &'conn mut Connection,
    sql: TranslationSql,
}

impl<'conn> SqliteTranslationRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection, settings: StorageSettings) -> RepoResult<Self> {
        settings.validate().map_err(DbError::from)?;
        ensure_connection_ready(conn, &settings)?;
        let sql = TranslationSql::render(&settings);
        Ok(Self { conn, sql })
    }
}

impl TranslationRepository for SqliteTranslationRepository<'_> {
    fn load_for_owner(&self, owner: &OwnerRef) -> RepoResult<Vec<AttributeTranslation>> {
        let mut stmt = self.conn.prepare(&self.sql.select_by_owner)?;
        let mut rows = stmt.query(params![owner.owner_type, owner.owner_id.to_string()])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_translation_row(row, owner)?);
        }

        debug!(
            "event=translations_load module=repo status=ok owner={} count={}",
            owner,
            records.len()
        );
        Ok(records)
    }

    fn count_for_owner(&self, owner: &OwnerRef) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            &self.sql.count_by_owner,
            params![owner.owner_type, owner.owner_id.to_string()],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative record count `{count}`")))
    }

    fn save_collection(
        &mut self,
        collection: &mut TranslationCollection,
    ) -> RepoResult<SaveSummary> {
        let started_at = Instant::now();
        let owner = collection.owner().clone();

        match write_collection(self.conn, &self.sql, &owner, collection) {
            Ok((summary, assigned)) => {
                let records = collection.records_mut();
                for (index, id) in assigned {
                    records[index].mark_persisted(id);
                }
                info!(
                    "event=translations_save module=repo status=ok owner={} inserted={} updated={} unchanged={} duration_ms={}",
                    owner,
                    summary.inserted,
                    summary.updated,
                    summary.unchanged,
                    started_at.elapsed().as_millis()
                );
                Ok(summary)
            }
            Err(err) => {
                error!(
                    "event=translations_save module=repo status=error owner={} duration_ms={} error={}",
                    owner,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Writes pending records in one transaction and returns the ids to apply
/// per record index once committed.
fn write_collection(
    conn: &mut Connection,
    sql: &TranslationSql,
    owner: &OwnerRef,
    collection: &TranslationCollection,
) -> RepoResult<(SaveSummary, Vec<(usize, TranslationId)>)> {
    let owner_id = owner.owner_id.to_string();
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let mut summary = SaveSummary::default();
    let mut assigned = Vec::new();

    for (index, record) in collection.iter().enumerate() {
        if record.owner != *owner {
            return Err(RepoError::InvalidData(format!(
                "record {}/{} belongs to {} but was saved with {}",
                record.attribute, record.locale, record.owner, owner
            )));
        }

        match record.id {
            None => {
                tx.execute(
                    &sql.insert,
                    params![
                        owner.owner_type,
                        owner_id,
                        record.attribute,
                        record.locale,
                        record.text(),
                    ],
                )?;
                assigned.push((index, tx.last_insert_rowid()));
                summary.inserted += 1;
            }
            Some(id) if record.has_pending_changes() => {
                let changed = tx.execute(
                    &sql.update,
                    params![record.text(), id, owner.owner_type, owner_id],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound(id));
                }
                assigned.push((index, id));
                summary.updated += 1;
            }
            Some(_) => summary.unchanged += 1,
        }
    }

    tx.commit()?;
    Ok((summary, assigned))
}

fn parse_translation_row(row: &Row<'_>, owner: &OwnerRef) -> RepoResult<AttributeTranslation> {
    Ok(AttributeTranslation::persisted(
        row.get("id")?,
        owner.clone(),
        row.get::<_, String>("attribute")?,
        row.get::<_, String>("locale")?,
        row.get("text")?,
    ))
}

fn ensure_connection_ready(conn: &Connection, settings: &StorageSettings) -> RepoResult<()> {
    let actual_version = current_user_version(conn)?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table = settings.table_name.as_str();
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table.to_string()));
    }

    let required = [
        "id".to_string(),
        settings.owner_type_column(),
        settings.owner_id_column(),
        "attribute".to_string(),
        "locale".to_string(),
        "text".to_string(),
        "updated_at".to_string(),
    ];
    for column in required {
        if !table_has_column(conn, table, &column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: table.to_string(),
                column,
            });
        }
    }

    Ok(())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
