//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/update/delete/list APIs over the `records` table.
//! - Keep SQL and column encoding inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate the entity before any SQL mutation.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Listing order is `id DESC` (most recently inserted first).
//! - Deleting a missing id succeeds without touching other rows.

use crate::db::migrations::ensure_latest;
use crate::db::DbError;
use crate::model::person::{Gender, JobTitle, PersonId, NEW_PERSON_ID};
use crate::validation::{validate_fields, ValidationErrorCode};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const PERSON_SELECT_SQL: &str = "SELECT
    id,
    name,
    age,
    job_title,
    gender
FROM records";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationErrorCode),
    Db(DbError),
    NotFound(PersonId),
    /// Caller-supplied ids must be positive.
    InvalidId(PersonId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid person: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::InvalidId(id) => write!(f, "invalid person id: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidId(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationErrorCode> for RepoError {
    fn from(value: ValidationErrorCode) -> Self {
        Self::Validation(value)
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

/// Storage shape of one `records` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonEntity {
    /// `None` until the row exists.
    pub id: Option<PersonId>,
    pub name: String,
    pub age: u32,
    pub job_title: JobTitle,
    pub gender: Gender,
}

impl PersonEntity {
    pub fn validate(&self) -> Result<(), ValidationErrorCode> {
        validate_fields(&self.name, self.age, self.job_title, self.gender)
    }
}

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    /// Inserts a new row, or replaces the row with the same explicit id.
    fn insert_person(&self, entity: &PersonEntity) -> RepoResult<PersonId>;
    /// Replaces the row matching `entity.id`; `NotFound` when absent.
    fn update_person(&self, entity: &PersonEntity) -> RepoResult<()>;
    /// Removes the row for `id`. Missing ids are not an error.
    fn delete_person(&self, id: PersonId) -> RepoResult<()>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<PersonEntity>>;
    /// Lists every row, newest id first.
    fn list_persons(&self) -> RepoResult<Vec<PersonEntity>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a connection after checking its schema is fully migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_latest(conn)?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn insert_person(&self, entity: &PersonEntity) -> RepoResult<PersonId> {
        entity.validate()?;

        match entity.id {
            None => {
                self.conn.execute(
                    "INSERT INTO records (name, age, job_title, gender)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        entity.name.as_str(),
                        entity.age,
                        entity.job_title.as_str(),
                        entity.gender.as_str(),
                    ],
                )?;
                Ok(self.conn.last_insert_rowid())
            }
            Some(id) => {
                ensure_positive_id(id)?;
                self.conn.execute(
                    "INSERT INTO records (id, name, age, job_title, gender)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        age = excluded.age,
                        job_title = excluded.job_title,
                        gender = excluded.gender;",
                    params![
                        id,
                        entity.name.as_str(),
                        entity.age,
                        entity.job_title.as_str(),
                        entity.gender.as_str(),
                    ],
                )?;
                Ok(id)
            }
        }
    }

    fn update_person(&self, entity: &PersonEntity) -> RepoResult<()> {
        let id = entity.id.ok_or(RepoError::NotFound(NEW_PERSON_ID))?;
        entity.validate()?;

        let changed = self.conn.execute(
            "UPDATE records
             SET
                name = ?1,
                age = ?2,
                job_title = ?3,
                gender = ?4
             WHERE id = ?5;",
            params![
                entity.name.as_str(),
                entity.age,
                entity.job_title.as_str(),
                entity.gender.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM records WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<PersonEntity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE id = ?1;"))?;
        let raw = stmt.query_row([id], read_raw_row).optional()?;
        raw.map(parse_person_row).transpose()
    }

    fn list_persons(&self) -> RepoResult<Vec<PersonEntity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();

        while let Some(row) = rows.next()? {
            persons.push(parse_person_row(read_raw_row(row)?)?);
        }

        Ok(persons)
    }
}

/// Column values as stored, before enum and range decoding.
struct RawPersonRow {
    id: PersonId,
    name: String,
    age: i64,
    job_title: String,
    gender: String,
}

fn read_raw_row(row: &Row<'_>) -> rusqlite::Result<RawPersonRow> {
    Ok(RawPersonRow {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        job_title: row.get("job_title")?,
        gender: row.get("gender")?,
    })
}

fn parse_person_row(raw: RawPersonRow) -> RepoResult<PersonEntity> {
    let age = u32::try_from(raw.age).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid age `{}` in records.age for id {}",
            raw.age, raw.id
        ))
    })?;

    let job_title = JobTitle::from_str(&raw.job_title).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid job title `{}` in records.job_title for id {}",
            raw.job_title, raw.id
        ))
    })?;

    let gender = Gender::from_str(&raw.gender).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid gender `{}` in records.gender for id {}",
            raw.gender, raw.id
        ))
    })?;

    let entity = PersonEntity {
        id: Some(raw.id),
        name: raw.name,
        age,
        job_title,
        gender,
    };
    entity.validate().map_err(|err| {
        RepoError::InvalidData(format!("row {} violates record rules: {err}", raw.id))
    })?;
    Ok(entity)
}

fn ensure_positive_id(id: PersonId) -> RepoResult<()> {
    if id <= NEW_PERSON_ID {
        return Err(RepoError::InvalidId(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_person_row, RawPersonRow, RepoError};

    fn raw(age: i64, job_title: &str, gender: &str) -> RawPersonRow {
        RawPersonRow {
            id: 7,
            name: "Ada".to_string(),
            age,
            job_title: job_title.to_string(),
            gender: gender.to_string(),
        }
    }

    #[test]
    fn parse_rejects_unknown_enum_tags() {
        let err = parse_person_row(raw(30, "ASTRONAUT", "FEMALE")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(message) if message.contains("ASTRONAUT")));
    }

    #[test]
    fn parse_rejects_out_of_range_age() {
        let err = parse_person_row(raw(-1, "OTHER", "MALE")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));

        let err = parse_person_row(raw(150, "OTHER", "MALE")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(message) if message.contains("row 7")));
    }

    #[test]
    fn parse_accepts_valid_row() {
        let entity = parse_person_row(raw(30, "QA_TESTER", "MALE")).unwrap();
        assert_eq!(entity.id, Some(7));
        assert_eq!(entity.age, 30);
    }
}
