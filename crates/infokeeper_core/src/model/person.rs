//! Person domain model.
//!
//! # Responsibility
//! - Define the UI-facing person record and its enum selections.
//! - Provide stable text tags for storage and FFI transport.
//!
//! # Invariants
//! - `id == NEW_PERSON_ID` means the record has not been persisted yet.
//! - Enum tags are SCREAMING_SNAKE_CASE and are persisted verbatim in
//!   `records`; renaming a tag requires a migration.

use crate::validation::{validate_fields, ValidationErrorCode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned row identifier.
pub type PersonId = i64;

/// Placeholder id carried by records that were never persisted.
pub const NEW_PERSON_ID: PersonId = 0;

/// Job title selection offered by the input form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobTitle {
    /// Form default; never valid on a saved record.
    #[default]
    NotSelected,
    AndroidDeveloper,
    IosDeveloper,
    FrontendDeveloper,
    BackendDeveloper,
    JavaDeveloper,
    PythonDeveloper,
    QaTester,
    UiUxDesigner,
    ProductManager,
    ScrumMaster,
    Other,
}

impl JobTitle {
    /// Every selectable value, in form display order.
    pub const ALL: [JobTitle; 12] = [
        JobTitle::NotSelected,
        JobTitle::AndroidDeveloper,
        JobTitle::IosDeveloper,
        JobTitle::FrontendDeveloper,
        JobTitle::BackendDeveloper,
        JobTitle::JavaDeveloper,
        JobTitle::PythonDeveloper,
        JobTitle::QaTester,
        JobTitle::UiUxDesigner,
        JobTitle::ProductManager,
        JobTitle::ScrumMaster,
        JobTitle::Other,
    ];

    /// Stable tag used in storage and across FFI.
    pub fn as_str(self) -> &'static str {
        match self {
            JobTitle::NotSelected => "NOT_SELECTED",
            JobTitle::AndroidDeveloper => "ANDROID_DEVELOPER",
            JobTitle::IosDeveloper => "IOS_DEVELOPER",
            JobTitle::FrontendDeveloper => "FRONTEND_DEVELOPER",
            JobTitle::BackendDeveloper => "BACKEND_DEVELOPER",
            JobTitle::JavaDeveloper => "JAVA_DEVELOPER",
            JobTitle::PythonDeveloper => "PYTHON_DEVELOPER",
            JobTitle::QaTester => "QA_TESTER",
            JobTitle::UiUxDesigner => "UI_UX_DESIGNER",
            JobTitle::ProductManager => "PRODUCT_MANAGER",
            JobTitle::ScrumMaster => "SCRUM_MASTER",
            JobTitle::Other => "OTHER",
        }
    }

    pub fn is_selected(self) -> bool {
        self != JobTitle::NotSelected
    }
}

impl Display for JobTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobTitle {
    type Err = UnknownTagError;

    /// Parses a tag case-insensitively, ignoring surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        JobTitle::ALL
            .into_iter()
            .find(|title| title.as_str() == normalized)
            .ok_or_else(|| UnknownTagError::new("job_title", value))
    }
}

/// Gender selection offered by the input form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Form default; never valid on a saved record.
    #[default]
    NotSelected,
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::NotSelected, Gender::Male, Gender::Female];

    /// Stable tag used in storage and across FFI.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::NotSelected => "NOT_SELECTED",
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    pub fn is_selected(self) -> bool {
        self != Gender::NotSelected
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == normalized)
            .ok_or_else(|| UnknownTagError::new("gender", value))
    }
}

/// Returned when a text tag does not name any enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTagError {
    /// Field the tag was meant for (`job_title` or `gender`).
    pub field: &'static str,
    pub value: String,
}

impl UnknownTagError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl Display for UnknownTagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} tag `{}`", self.field, self.value)
    }
}

impl Error for UnknownTagError {}

/// UI-facing person record.
///
/// Value object: updates replace the whole record for a given `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// `NEW_PERSON_ID` until the store assigns one.
    pub id: PersonId,
    pub name: String,
    pub age: u32,
    pub job_title: JobTitle,
    pub gender: Gender,
}

impl Person {
    /// Creates an unsaved record (`id == NEW_PERSON_ID`).
    pub fn new(name: impl Into<String>, age: u32, job_title: JobTitle, gender: Gender) -> Self {
        Self::with_id(NEW_PERSON_ID, name, age, job_title, gender)
    }

    /// Creates a record that refers to an existing (or caller-chosen) row id.
    pub fn with_id(
        id: PersonId,
        name: impl Into<String>,
        age: u32,
        job_title: JobTitle,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            job_title,
            gender,
        }
    }

    /// Returns whether this record still carries the placeholder id.
    pub fn is_new(&self) -> bool {
        self.id == NEW_PERSON_ID
    }

    /// Checks every field rule and returns the first violation.
    pub fn validate(&self) -> Result<(), ValidationErrorCode> {
        validate_fields(&self.name, self.age, self.job_title, self.gender)
    }
}
