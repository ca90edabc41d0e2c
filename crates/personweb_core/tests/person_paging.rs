use personweb_core::db::open_db_in_memory;
use personweb_core::{Person, PersonRepository, PersonService, SqlitePersonRepository, MAX_COUNT};

fn numbered_person(index: usize) -> Person {
    Person::new(
        format!("First{index}"),
        format!("Last{index}"),
        format!("person{index}@example.com"),
        format!("10.0.0.{index}"),
    )
}

#[test]
fn range_read_returns_rows_at_or_above_id_in_ascending_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    // Leave only ids {2, 5, 7, 9} behind.
    for index in 1..=9 {
        repo.add_person(&numbered_person(index)).unwrap();
    }
    for id in [1, 3, 4, 6, 8] {
        repo.delete_person(id).unwrap();
    }

    let page = repo.get_persons_from_id(5, 2).unwrap();
    let ids: Vec<_> = page.iter().map(|person| person.id).collect();
    assert_eq!(ids, vec![5, 7]);
}

#[test]
fn range_read_is_not_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    repo.add_person(&numbered_person(1)).unwrap();
    repo.add_person(&numbered_person(2)).unwrap();
    repo.delete_person(1).unwrap();

    // No row with id 1 remains; the scan still finds the next id up.
    let page = repo.get_persons_from_id(1, 1).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 2);
}

#[test]
fn range_read_past_the_highest_id_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    repo.add_person(&numbered_person(1)).unwrap();

    assert!(repo.get_persons_from_id(100, 5).unwrap().is_empty());
}

#[test]
fn list_applies_the_given_limit_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    for index in 1..=15 {
        repo.add_person(&numbered_person(index)).unwrap();
    }

    assert_eq!(repo.list_persons(10).unwrap().len(), 10);
    // No clamping inside the store: a large limit returns everything.
    assert_eq!(repo.list_persons(100).unwrap().len(), 15);
}

#[test]
fn list_returns_rows_in_ascending_id_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    for index in 1..=5 {
        repo.add_person(&numbered_person(index)).unwrap();
    }

    let ids: Vec<_> = repo
        .list_persons(5)
        .unwrap()
        .iter()
        .map(|person| person.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn service_clamps_list_count_to_the_maximum() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::new(&conn));

    for index in 1..=15 {
        service.add_person(&numbered_person(index)).unwrap();
    }

    let page = service.list_persons(Some(100)).unwrap();
    assert_eq!(page.len(), MAX_COUNT as usize);
}

#[test]
fn service_defaults_list_count_when_none_is_given() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::new(&conn));

    for index in 1..=15 {
        service.add_person(&numbered_person(index)).unwrap();
    }

    let page = service.list_persons(None).unwrap();
    assert_eq!(page.len(), 10);
}

#[test]
fn service_defaults_range_read_to_a_single_record() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::new(&conn));

    for index in 1..=3 {
        service.add_person(&numbered_person(index)).unwrap();
    }

    let page = service.get_persons_from_id(1, None).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 1);
}

#[test]
fn service_clamps_range_read_count() {
    let conn = open_db_in_memory().unwrap();
    let service = PersonService::new(SqlitePersonRepository::new(&conn));

    for index in 1..=15 {
        service.add_person(&numbered_person(index)).unwrap();
    }

    let page = service.get_persons_from_id(1, Some(50)).unwrap();
    assert_eq!(page.len(), MAX_COUNT as usize);
}
