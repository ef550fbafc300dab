//! Screen controllers for the entry form and the record list.
//!
//! # Responsibility
//! - Own per-screen state that the UI layer polls after each action.
//! - Drive validation before persistence and refresh lists after deletes.
//!
//! # Invariants
//! - State is updated synchronously before an action method returns.
//! - The form never calls the service unless every field validated.

use crate::model::person::{Person, PersonId};
use crate::repo::person_repo::PersonRepository;
use crate::service::person_service::PersonService;
use crate::validation::{person_from_input, PersonInput, PersonValidation};
use log::{debug, warn};

/// Screen-level error shown outside individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    SaveFailed,
}

impl FormError {
    pub fn code(self) -> &'static str {
        match self {
            Self::SaveFailed => "general_error",
        }
    }
}

/// Entry form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoFormState {
    pub input: PersonInput,
    pub validation: PersonValidation,
    pub error: Option<FormError>,
}

/// Result of a save action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// At least one field failed; see `InfoFormState::validation`.
    Invalid,
    /// Stored; the UI moves on to the list screen.
    Saved(PersonId),
    /// Persistence failed; the UI still moves on and shows `FormError`.
    SaveFailed,
}

impl FormOutcome {
    /// Whether the UI should navigate to the list screen.
    pub fn navigates_to_list(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Controller behind the entry form.
pub struct InfoFormController<'svc, R: PersonRepository> {
    service: &'svc PersonService<R>,
    state: InfoFormState,
}

impl<'svc, R: PersonRepository> InfoFormController<'svc, R> {
    pub fn new(service: &'svc PersonService<R>) -> Self {
        Self {
            service,
            state: InfoFormState::default(),
        }
    }

    pub fn state(&self) -> &InfoFormState {
        &self.state
    }

    /// Validates the submitted input and saves it when every field passes.
    pub fn submit(&mut self, input: PersonInput) -> FormOutcome {
        let checked = person_from_input(&input);
        self.state.input = input;

        let person = match checked {
            Ok(person) => {
                self.state.validation = PersonValidation::default();
                person
            }
            Err(validation) => {
                self.state.validation = validation;
                let fields = validation
                    .errors()
                    .iter()
                    .map(|code| code.code())
                    .collect::<Vec<_>>()
                    .join(",");
                debug!("event=form_submit module=controller status=invalid error_codes={fields}");
                return FormOutcome::Invalid;
            }
        };

        match self.service.insert_person_returning_id(&person) {
            Some(id) => {
                self.state.error = None;
                FormOutcome::Saved(id)
            }
            None => {
                self.state.error = Some(FormError::SaveFailed);
                FormOutcome::SaveFailed
            }
        }
    }

    /// Clears input, validation and error state.
    pub fn reset(&mut self) {
        self.state = InfoFormState::default();
    }
}

/// Screen-level error for the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    LoadFailed,
    DeleteFailed,
}

impl ListError {
    pub fn code(self) -> &'static str {
        match self {
            Self::LoadFailed => "load_failed",
            Self::DeleteFailed => "general_error",
        }
    }
}

/// List screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoListState {
    /// Newest first.
    pub persons: Vec<Person>,
    pub error: Option<ListError>,
}

/// Result of a delete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    PersonDeleted,
    DeleteFailed,
}

/// Controller behind the record list.
pub struct InfoListController<'svc, R: PersonRepository> {
    service: &'svc PersonService<R>,
    state: InfoListState,
}

impl<'svc, R: PersonRepository> InfoListController<'svc, R> {
    /// Creates the controller and loads the current rows.
    pub fn new(service: &'svc PersonService<R>) -> Self {
        let mut controller = Self {
            service,
            state: InfoListState::default(),
        };
        controller.refresh();
        controller
    }

    pub fn state(&self) -> &InfoListState {
        &self.state
    }

    /// Reloads rows from the service.
    ///
    /// On failure the previous rows stay visible and `error` is set.
    pub fn refresh(&mut self) {
        match self.service.list_persons() {
            Ok(persons) => {
                self.state.persons = persons;
                self.state.error = None;
            }
            Err(err) => {
                warn!("event=list_refresh module=controller status=error error={err}");
                self.state.error = Some(ListError::LoadFailed);
            }
        }
    }

    /// Deletes one row, then reloads the list.
    pub fn delete(&mut self, id: PersonId) -> ListOutcome {
        if !self.service.delete_person(id) {
            self.state.error = Some(ListError::DeleteFailed);
            return ListOutcome::DeleteFailed;
        }
        self.refresh();
        ListOutcome::PersonDeleted
    }
}
