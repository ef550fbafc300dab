//! Field validation rules for person input.
//!
//! # Responsibility
//! - Check each form field independently against static rules.
//! - Report failures as stable error codes for UI message lookup.
//!
//! # Invariants
//! - Every function here is pure: no I/O, no shared state.
//! - A failing result always carries exactly one error code.

use crate::model::person::{Gender, JobTitle, Person};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest accepted name, counted in Unicode scalar values.
pub const MAX_NAME_LENGTH: usize = 20;
/// Highest accepted age in years.
pub const MAX_AGE: u32 = 100;

/// Reason a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    NameEmpty,
    NameTooLong,
    AgeNotANumber,
    AgeZero,
    AgeTooHigh,
    JobTitleNotSelected,
    GenderNotSelected,
}

impl ValidationErrorCode {
    /// Stable identifier the UI maps to a localized message.
    pub fn code(self) -> &'static str {
        match self {
            Self::NameEmpty => "name_empty",
            Self::NameTooLong => "name_too_long",
            Self::AgeNotANumber => "age_not_a_number",
            Self::AgeZero => "age_zero",
            Self::AgeTooHigh => "age_too_high",
            Self::JobTitleNotSelected => "job_title_not_selected",
            Self::GenderNotSelected => "gender_not_selected",
        }
    }
}

impl Display for ValidationErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameEmpty => write!(f, "name cannot be empty"),
            Self::NameTooLong => write!(f, "name must be at most {MAX_NAME_LENGTH} characters"),
            Self::AgeNotANumber => write!(f, "age must be a whole number"),
            Self::AgeZero => write!(f, "age cannot be zero"),
            Self::AgeTooHigh => write!(f, "age must be at most {MAX_AGE}"),
            Self::JobTitleNotSelected => write!(f, "job title must be selected"),
            Self::GenderNotSelected => write!(f, "gender must be selected"),
        }
    }
}

impl Error for ValidationErrorCode {}

/// Outcome of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// `Some` exactly when `is_valid == false`.
    pub error: Option<ValidationErrorCode>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: ValidationErrorCode) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }
}

impl Default for ValidationResult {
    /// Untouched form fields render without an error.
    fn default() -> Self {
        Self::valid()
    }
}

/// Raw form input before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonInput {
    pub name: String,
    /// Free text from the age field; parsed only after validation passes.
    pub age: String,
    pub job_title: JobTitle,
    pub gender: Gender,
}

/// Per-field results for one form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonValidation {
    pub name: ValidationResult,
    pub age: ValidationResult,
    pub job_title: ValidationResult,
    pub gender: ValidationResult,
}

impl PersonValidation {
    /// Returns `true` when every field passed; gates persistence.
    pub fn is_valid_info(&self) -> bool {
        self.name.is_valid && self.age.is_valid && self.job_title.is_valid && self.gender.is_valid
    }

    /// Error codes of failing fields in form order.
    pub fn errors(&self) -> Vec<ValidationErrorCode> {
        [self.name, self.age, self.job_title, self.gender]
            .into_iter()
            .filter_map(|result| result.error)
            .collect()
    }
}

/// Validates every field of a form submission.
pub fn validate_person_input(input: &PersonInput) -> PersonValidation {
    check_input(input).0
}

/// Validates a submission and builds the unsaved record from it.
///
/// Age text is parsed once; the parsed value feeds both the age check and
/// the returned `Person`.
///
/// # Errors
/// Returns the per-field results when any field failed.
pub fn person_from_input(input: &PersonInput) -> Result<Person, PersonValidation> {
    match check_input(input) {
        (validation, Some(age)) if validation.is_valid_info() => Ok(Person::new(
            input.name.clone(),
            age,
            input.job_title,
            input.gender,
        )),
        (validation, _) => Err(validation),
    }
}

fn check_input(input: &PersonInput) -> (PersonValidation, Option<u32>) {
    let age = parse_age(&input.age);
    let validation = PersonValidation {
        name: validate_name(&input.name),
        age: age.map_or(
            ValidationResult::invalid(ValidationErrorCode::AgeNotANumber),
            validate_age_value,
        ),
        job_title: validate_job_title(input.job_title),
        gender: validate_gender(input.gender),
    };
    (validation, age)
}

/// Rejects blank names and names longer than `MAX_NAME_LENGTH`.
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        ValidationResult::invalid(ValidationErrorCode::NameEmpty)
    } else if name.chars().count() > MAX_NAME_LENGTH {
        ValidationResult::invalid(ValidationErrorCode::NameTooLong)
    } else {
        ValidationResult::valid()
    }
}

/// Validates age text as typed by the user.
///
/// Surrounding whitespace is ignored. Signs, decimals and values that do not
/// fit `u32` all count as "not a number".
pub fn validate_age(age: &str) -> ValidationResult {
    match parse_age(age) {
        Some(value) => validate_age_value(value),
        None => ValidationResult::invalid(ValidationErrorCode::AgeNotANumber),
    }
}

/// Validates an already-parsed age.
pub fn validate_age_value(age: u32) -> ValidationResult {
    if age == 0 {
        ValidationResult::invalid(ValidationErrorCode::AgeZero)
    } else if age > MAX_AGE {
        ValidationResult::invalid(ValidationErrorCode::AgeTooHigh)
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_job_title(job_title: JobTitle) -> ValidationResult {
    if job_title.is_selected() {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(ValidationErrorCode::JobTitleNotSelected)
    }
}

pub fn validate_gender(gender: Gender) -> ValidationResult {
    if gender.is_selected() {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(ValidationErrorCode::GenderNotSelected)
    }
}

/// Checks typed record fields and returns the first violation.
///
/// Field order is name, age, job title, gender, matching the form layout.
pub fn validate_fields(
    name: &str,
    age: u32,
    job_title: JobTitle,
    gender: Gender,
) -> Result<(), ValidationErrorCode> {
    [
        validate_name(name),
        validate_age_value(age),
        validate_job_title(job_title),
        validate_gender(gender),
    ]
    .into_iter()
    .find_map(|result| result.error)
    .map_or(Ok(()), Err)
}

/// Parses age text with the same rules `validate_age` applies.
pub fn parse_age(age: &str) -> Option<u32> {
    let trimmed = age.trim();
    // `u32::from_str` accepts a leading `+`; the form does not.
    if trimmed.starts_with('+') {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        parse_age, person_from_input, validate_age, validate_gender, validate_job_title,
        validate_name, validate_person_input, PersonInput, ValidationErrorCode,
    };
    use crate::model::person::{Gender, JobTitle};

    #[test]
    fn name_rules() {
        assert_eq!(
            validate_name("").error,
            Some(ValidationErrorCode::NameEmpty)
        );
        assert_eq!(
            validate_name("   ").error,
            Some(ValidationErrorCode::NameEmpty)
        );
        assert_eq!(
            validate_name(&"x".repeat(21)).error,
            Some(ValidationErrorCode::NameTooLong)
        );
        assert!(validate_name(&"x".repeat(20)).is_valid);
        assert!(validate_name("John").is_valid);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(validate_name(&"é".repeat(20)).is_valid);
    }

    #[test]
    fn name_length_counts_scalar_values_outside_the_bmp() {
        // 20 emoji are 40 UTF-16 units; the limit applies to scalar values.
        assert!(validate_name(&"😀".repeat(20)).is_valid);
        assert_eq!(
            validate_name(&"😀".repeat(21)).error,
            Some(ValidationErrorCode::NameTooLong)
        );
    }

    #[test]
    fn age_rules() {
        assert_eq!(validate_age("0").error, Some(ValidationErrorCode::AgeZero));
        assert_eq!(
            validate_age("101").error,
            Some(ValidationErrorCode::AgeTooHigh)
        );
        assert_eq!(
            validate_age("abc").error,
            Some(ValidationErrorCode::AgeNotANumber)
        );
        assert_eq!(
            validate_age("").error,
            Some(ValidationErrorCode::AgeNotANumber)
        );
        assert!(validate_age("25").is_valid);
        assert!(validate_age(" 100 ").is_valid);
    }

    #[test]
    fn signed_and_overflowing_ages_are_not_numbers() {
        assert_eq!(parse_age("-3"), None);
        assert_eq!(parse_age("+3"), None);
        assert_eq!(parse_age("99999999999"), None);
    }

    #[test]
    fn selection_rules() {
        assert!(!validate_job_title(JobTitle::NotSelected).is_valid);
        assert!(validate_job_title(JobTitle::AndroidDeveloper).is_valid);
        assert_eq!(
            validate_gender(Gender::NotSelected).error,
            Some(ValidationErrorCode::GenderNotSelected)
        );
        assert!(validate_gender(Gender::Male).is_valid);
    }

    #[test]
    fn empty_form_reports_every_field_in_order() {
        let validation = validate_person_input(&PersonInput::default());
        assert!(!validation.is_valid_info());
        assert_eq!(
            validation.errors(),
            vec![
                ValidationErrorCode::NameEmpty,
                ValidationErrorCode::AgeNotANumber,
                ValidationErrorCode::JobTitleNotSelected,
                ValidationErrorCode::GenderNotSelected,
            ]
        );
    }

    #[test]
    fn person_from_input_uses_the_validated_age() {
        let input = PersonInput {
            name: "Jane Doe".to_string(),
            age: " 42 ".to_string(),
            job_title: JobTitle::ProductManager,
            gender: Gender::Female,
        };
        let person = person_from_input(&input).expect("valid input");
        assert!(person.is_new());
        assert_eq!(person.name, "Jane Doe");
        assert_eq!(person.age, 42);
        assert_eq!(person.job_title, JobTitle::ProductManager);
        assert_eq!(person.gender, Gender::Female);
    }

    #[test]
    fn person_from_input_returns_field_results_on_failure() {
        let input = PersonInput {
            name: "Jane".to_string(),
            age: "4.5".to_string(),
            job_title: JobTitle::ProductManager,
            gender: Gender::Female,
        };
        let validation = person_from_input(&input).expect_err("age is not a number");
        assert_eq!(validation, validate_person_input(&input));
        assert_eq!(validation.errors(), vec![ValidationErrorCode::AgeNotANumber]);
    }
}
