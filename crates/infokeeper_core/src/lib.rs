//! Core domain logic for InfoKeeper.
//! This crate is the single source of truth for person record invariants.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use controller::{
    FormError, FormOutcome, InfoFormController, InfoFormState, InfoListController, InfoListState,
    ListError, ListOutcome,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::person::{Gender, JobTitle, Person, PersonId, UnknownTagError, NEW_PERSON_ID};
pub use repo::person_repo::{
    PersonEntity, PersonRepository, RepoError, RepoResult, SqlitePersonRepository,
};
pub use service::person_service::PersonService;
pub use validation::{
    parse_age, person_from_input, validate_age, validate_age_value, validate_gender,
    validate_job_title, validate_name, validate_person_input, PersonInput, PersonValidation,
    ValidationErrorCode, ValidationResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
