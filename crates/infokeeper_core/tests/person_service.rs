use infokeeper_core::db::open_db_in_memory;
use infokeeper_core::{Gender, JobTitle, Person, PersonService, SqlitePersonRepository};

#[test]
fn jane_doe_insert_list_delete_flow() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let jane = Person::new("Jane Doe", 25, JobTitle::ProductManager, Gender::Female);
    assert!(service.insert_person(&jane));

    let listed = service.list_persons().unwrap();
    assert_eq!(listed.len(), 1);
    let stored = &listed[0];
    assert!(stored.id > 0);
    assert_eq!(
        Person {
            id: jane.id,
            ..stored.clone()
        },
        jane
    );

    assert!(service.delete_person(stored.id));
    assert!(service.list_persons().unwrap().is_empty());
}

#[test]
fn inserted_records_roundtrip_except_for_id() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let people = vec![
        Person::new("John Doe", 30, JobTitle::AndroidDeveloper, Gender::Male),
        Person::new("Alice Smith", 28, JobTitle::QaTester, Gender::Female),
        Person::new("Ünïcødé Näme", 100, JobTitle::Other, Gender::Male),
    ];
    for person in &people {
        assert!(service.insert_person(person));
    }

    let mut listed = service.list_persons().unwrap();
    listed.reverse();
    assert_eq!(listed.len(), people.len());
    for (stored, original) in listed.iter().zip(&people) {
        assert_eq!(stored.name, original.name);
        assert_eq!(stored.age, original.age);
        assert_eq!(stored.job_title, original.job_title);
        assert_eq!(stored.gender, original.gender);
    }
}

#[test]
fn list_is_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let ids = ["One", "Two", "Three"]
        .into_iter()
        .map(|name| {
            service
                .insert_person_returning_id(&Person::new(name, 20, JobTitle::Other, Gender::Male))
                .unwrap()
        })
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3]);

    let names = service
        .list_persons()
        .unwrap()
        .into_iter()
        .map(|person| person.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Three", "Two", "One"]);
}

#[test]
fn invalid_or_missing_records_report_false() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let invalid = Person::new("", 25, JobTitle::Other, Gender::Male);
    assert!(!service.insert_person(&invalid));

    let unknown = Person::with_id(404, "Nobody", 25, JobTitle::Other, Gender::Male);
    assert!(!service.update_person(&unknown));

    let unsaved = Person::new("Unsaved", 25, JobTitle::Other, Gender::Male);
    assert!(!service.update_person(&unsaved));

    assert!(service.list_persons().unwrap().is_empty());
}

#[test]
fn update_replaces_stored_record() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let id = service
        .insert_person_returning_id(&Person::new("Draft", 25, JobTitle::Other, Gender::Male))
        .unwrap();
    let updated = Person::with_id(id, "Final", 26, JobTitle::JavaDeveloper, Gender::Female);
    assert!(service.update_person(&updated));

    assert_eq!(service.get_person(id).unwrap(), Some(updated));
}

#[test]
fn delete_missing_id_succeeds_without_touching_rows() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    assert!(service.insert_person(&Person::new("Stay", 40, JobTitle::Other, Gender::Female)));
    assert!(service.delete_person(12345));
    assert_eq!(service.list_persons().unwrap().len(), 1);
}
