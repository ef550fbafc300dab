//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Convert raw form strings into validated core records.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Mutations always return a `PersonActionResponse` envelope.
//! - Enum values cross the boundary as their storage tags
//!   (`PRODUCT_MANAGER`, `FEMALE`, ...).

use infokeeper_core::db::open_db;
use infokeeper_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    person_from_input, Gender, JobTitle, Person, PersonId, PersonInput, PersonService,
    SqlitePersonRepository,
};
use log::warn;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

const DB_PATH_ENV: &str = "INFOKEEPER_DB_PATH";
const DB_FILE_NAME: &str = "infokeeper.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One stored person as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonItem {
    pub id: i64,
    pub name: String,
    pub age: u32,
    /// Storage tag, e.g. `ANDROID_DEVELOPER`.
    pub job_title: String,
    /// Storage tag, e.g. `MALE`.
    pub gender: String,
}

impl From<Person> for PersonItem {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            age: person.age,
            job_title: person.job_title.as_str().to_string(),
            gender: person.gender.as_str().to_string(),
        }
    }
}

/// Response envelope for insert/update/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected person id on success.
    pub person_id: Option<i64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Validation codes (`name_empty`, `age_zero`, ...) in form order.
    pub field_errors: Vec<String>,
}

impl PersonActionResponse {
    fn success(message: impl Into<String>, person_id: PersonId) -> Self {
        Self {
            ok: true,
            person_id: Some(person_id),
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            person_id: None,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn invalid(field_errors: Vec<String>) -> Self {
        Self {
            ok: false,
            person_id: None,
            message: "Validation failed.".to_string(),
            field_errors,
        }
    }
}

/// Response envelope for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonListResponse {
    /// Newest first.
    pub items: Vec<PersonItem>,
    pub message: String,
}

/// Validates form input and stores a new person.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - `age` is the raw text field; it is parsed only after validation.
/// - Returns `field_errors` when any field is invalid; nothing is stored.
#[flutter_rust_bridge::frb(sync)]
pub fn person_insert(
    name: String,
    age: String,
    job_title: String,
    gender: String,
) -> PersonActionResponse {
    let person = match person_from_form(name, age, job_title, gender) {
        Ok(person) => person,
        Err(response) => return response,
    };

    match with_person_service(|service| Ok(service.insert_person_returning_id(&person))) {
        Ok(Some(id)) => PersonActionResponse::success("Person saved.", id),
        Ok(None) => PersonActionResponse::failure("person_insert failed: could not save person"),
        Err(err) => PersonActionResponse::failure(format!("person_insert failed: {err}")),
    }
}

/// Validates form input and replaces the stored person with `id`.
///
/// # FFI contract
/// - Unknown ids return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn person_update(
    id: i64,
    name: String,
    age: String,
    job_title: String,
    gender: String,
) -> PersonActionResponse {
    let person = match person_from_form(name, age, job_title, gender) {
        Ok(person) => Person { id, ..person },
        Err(response) => return response,
    };

    match with_person_service(|service| Ok(service.update_person(&person))) {
        Ok(true) => PersonActionResponse::success("Person updated.", id),
        Ok(false) => PersonActionResponse::failure(format!(
            "person_update failed: person {id} could not be updated"
        )),
        Err(err) => PersonActionResponse::failure(format!("person_update failed: {err}")),
    }
}

/// Deletes a person by id.
///
/// # FFI contract
/// - Deleting an unknown id succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn person_delete(id: i64) -> PersonActionResponse {
    match with_person_service(|service| Ok(service.delete_person(id))) {
        Ok(true) => PersonActionResponse::success("Person deleted.", id),
        Ok(false) => PersonActionResponse::failure(format!(
            "person_delete failed: person {id} could not be deleted"
        )),
        Err(err) => PersonActionResponse::failure(format!("person_delete failed: {err}")),
    }
}

/// Lists every stored person, newest first.
///
/// # FFI contract
/// - Never panics; storage errors yield an empty list plus message.
#[flutter_rust_bridge::frb(sync)]
pub fn person_list() -> PersonListResponse {
    match with_person_service(|service| service.list_persons().map_err(|err| err.to_string())) {
        Ok(persons) => {
            let items = persons.into_iter().map(PersonItem::from).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No records.".to_string()
            } else {
                format!("Found {} record(s).", items.len())
            };
            PersonListResponse { items, message }
        }
        Err(err) => {
            warn!("event=person_list module=ffi status=error error={err}");
            PersonListResponse {
                items: Vec::new(),
                message: format!("person_list failed: {err}"),
            }
        }
    }
}

/// Job title tags in form display order, `NOT_SELECTED` first.
#[flutter_rust_bridge::frb(sync)]
pub fn job_title_options() -> Vec<String> {
    JobTitle::ALL
        .iter()
        .map(|title| title.as_str().to_string())
        .collect()
}

/// Gender tags in form display order, `NOT_SELECTED` first.
#[flutter_rust_bridge::frb(sync)]
pub fn gender_options() -> Vec<String> {
    Gender::ALL
        .iter()
        .map(|gender| gender.as_str().to_string())
        .collect()
}

/// Builds an unsaved `Person` from raw form fields.
fn person_from_form(
    name: String,
    age: String,
    job_title: String,
    gender: String,
) -> Result<Person, PersonActionResponse> {
    let job_title = parse_selection::<JobTitle>(&job_title)
        .map_err(|err| PersonActionResponse::failure(err.to_string()))?;
    let gender = parse_selection::<Gender>(&gender)
        .map_err(|err| PersonActionResponse::failure(err.to_string()))?;

    let input = PersonInput {
        name,
        age,
        job_title,
        gender,
    };
    person_from_input(&input).map_err(|validation| {
        PersonActionResponse::invalid(
            validation
                .errors()
                .into_iter()
                .map(|code| code.code().to_string())
                .collect(),
        )
    })
}

/// Empty selection strings mean the user picked nothing.
fn parse_selection<T: FromStr + Default>(value: &str) -> Result<T, T::Err> {
    if value.trim().is_empty() {
        return Ok(T::default());
    }
    T::from_str(value)
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_person_service<T>(
    f: impl FnOnce(&PersonService<SqlitePersonRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("DB open failed: {err}"))?;
    let repo =
        SqlitePersonRepository::try_new(&conn).map_err(|err| format!("repo init failed: {err}"))?;
    let service = PersonService::new(repo);
    f(&service)
}
