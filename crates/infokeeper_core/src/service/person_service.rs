//! Person use-case service.
//!
//! # Responsibility
//! - Translate between the UI-facing `Person` and storage `PersonEntity`.
//! - Collapse mutation failures into boolean success signals.
//!
//! # Invariants
//! - Mutation APIs never return an error; failures are logged and reported
//!   as `false`/`None`.
//! - Read APIs propagate repository errors unchanged.
//! - Diagnostics carry ids and error codes only, never record contents.

use crate::model::person::{Person, PersonId, NEW_PERSON_ID};
use crate::repo::person_repo::{PersonEntity, PersonRepository, RepoError, RepoResult};
use log::{debug, warn};

impl From<&Person> for PersonEntity {
    fn from(person: &Person) -> Self {
        Self {
            id: (!person.is_new()).then_some(person.id),
            name: person.name.clone(),
            age: person.age,
            job_title: person.job_title,
            gender: person.gender,
        }
    }
}

impl From<PersonEntity> for Person {
    fn from(entity: PersonEntity) -> Self {
        Self {
            id: entity.id.unwrap_or(NEW_PERSON_ID),
            name: entity.name,
            age: entity.age,
            job_title: entity.job_title,
            gender: entity.gender,
        }
    }
}

/// Use-case service wrapper for person CRUD operations.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a person; returns `true` on success.
    pub fn insert_person(&self, person: &Person) -> bool {
        self.insert_person_returning_id(person).is_some()
    }

    /// Persists a person and returns the id the store assigned (or kept).
    pub fn insert_person_returning_id(&self, person: &Person) -> Option<PersonId> {
        match self.repo.insert_person(&PersonEntity::from(person)) {
            Ok(id) => {
                debug!("event=person_insert module=service status=ok person_id={id}");
                Some(id)
            }
            Err(err) => {
                log_mutation_failure("person_insert", person.id, &err);
                None
            }
        }
    }

    /// Replaces the stored row for `person.id`; returns `true` on success.
    ///
    /// Unknown ids report `false`.
    pub fn update_person(&self, person: &Person) -> bool {
        match self.repo.update_person(&PersonEntity::from(person)) {
            Ok(()) => {
                debug!(
                    "event=person_update module=service status=ok person_id={}",
                    person.id
                );
                true
            }
            Err(err) => {
                log_mutation_failure("person_update", person.id, &err);
                false
            }
        }
    }

    /// Deletes by id; deleting a missing id still returns `true`.
    pub fn delete_person(&self, id: PersonId) -> bool {
        match self.repo.delete_person(id) {
            Ok(()) => {
                debug!("event=person_delete module=service status=ok person_id={id}");
                true
            }
            Err(err) => {
                log_mutation_failure("person_delete", id, &err);
                false
            }
        }
    }

    /// Lists persons newest first.
    pub fn list_persons(&self) -> RepoResult<Vec<Person>> {
        let entities = self.repo.list_persons()?;
        Ok(entities.into_iter().map(Person::from).collect())
    }

    /// Gets one person by id.
    pub fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        Ok(self.repo.get_person(id)?.map(Person::from))
    }
}

fn log_mutation_failure(event: &str, person_id: PersonId, err: &RepoError) {
    warn!(
        "event={event} module=service status=error person_id={person_id} error_code={} error={err}",
        repo_error_code(err)
    );
}

fn repo_error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(code) => code.code(),
        RepoError::Db(_) => "db_error",
        RepoError::NotFound(_) => "not_found",
        RepoError::InvalidId(_) => "invalid_id",
        RepoError::InvalidData(_) => "invalid_data",
    }
}

#[cfg(test)]
mod tests {
    use super::PersonService;
    use crate::model::person::{Gender, JobTitle, Person, PersonId};
    use crate::repo::person_repo::{PersonEntity, PersonRepository, RepoError, RepoResult};
    use std::cell::RefCell;

    /// Repository double that records calls and fails on demand.
    #[derive(Default)]
    struct FakeRepo {
        rows: RefCell<Vec<PersonEntity>>,
        fail_writes: bool,
    }

    impl PersonRepository for FakeRepo {
        fn insert_person(&self, entity: &PersonEntity) -> RepoResult<PersonId> {
            if self.fail_writes {
                return Err(RepoError::InvalidData("disk full".to_string()));
            }
            let mut rows = self.rows.borrow_mut();
            let id = entity.id.unwrap_or(rows.len() as PersonId + 1);
            rows.push(PersonEntity {
                id: Some(id),
                ..entity.clone()
            });
            Ok(id)
        }

        fn update_person(&self, entity: &PersonEntity) -> RepoResult<()> {
            Err(RepoError::NotFound(entity.id.unwrap_or_default()))
        }

        fn delete_person(&self, _id: PersonId) -> RepoResult<()> {
            if self.fail_writes {
                return Err(RepoError::InvalidData("locked".to_string()));
            }
            Ok(())
        }

        fn get_person(&self, id: PersonId) -> RepoResult<Option<PersonEntity>> {
            Ok(self
                .rows
                .borrow()
                .iter()
                .find(|row| row.id == Some(id))
                .cloned())
        }

        fn list_persons(&self) -> RepoResult<Vec<PersonEntity>> {
            Ok(self.rows.borrow().clone())
        }
    }

    fn jane() -> Person {
        Person::new("Jane Doe", 25, JobTitle::ProductManager, Gender::Female)
    }

    #[test]
    fn new_person_maps_to_entity_without_id() {
        let entity = PersonEntity::from(&jane());
        assert_eq!(entity.id, None);
        assert_eq!(entity.name, "Jane Doe");
    }

    #[test]
    fn entity_maps_back_to_person_with_id() {
        let mut entity = PersonEntity::from(&jane());
        entity.id = Some(4);
        let person = Person::from(entity);
        assert_eq!(person.id, 4);
        assert_eq!(person.job_title, JobTitle::ProductManager);
    }

    #[test]
    fn write_failures_collapse_to_false() {
        let service = PersonService::new(FakeRepo {
            fail_writes: true,
            ..FakeRepo::default()
        });
        assert!(!service.insert_person(&jane()));
        assert_eq!(service.insert_person_returning_id(&jane()), None);
        assert!(!service.update_person(&jane()));
        assert!(!service.delete_person(1));
    }

    #[test]
    fn insert_then_get_uses_assigned_id() {
        let service = PersonService::new(FakeRepo::default());
        let id = service.insert_person_returning_id(&jane()).unwrap();
        let loaded = service.get_person(id).unwrap().unwrap();
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.name, "Jane Doe");
    }
}
