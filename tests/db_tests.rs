use contacts::db::*;
use contacts::model::*;

fn setup() -> rusqlite::Connection {
    schema::test_connection()
}

#[test]
fn contact_insert_and_find() {
    let conn = setup();

    let mut ada = Contact::create("Ada Lovelace".into(), "555-0101".into());
    ada.email = Some("ada@example.com".into());
    ada.contact_type = Some("Work".into());
    contact_repo::insert(&conn, &ada).unwrap();

    let found = contact_repo::find_by_id(&conn, ada.id).unwrap().unwrap();
    assert_eq!(found.name, "Ada Lovelace");
    assert_eq!(found.phone, "555-0101");
    assert_eq!(found.email, Some("ada@example.com".into()));
    assert_eq!(found.contact_type, Some("Work".into()));
    assert_eq!(found.created_at.timestamp_micros(), ada.created_at.timestamp_micros());
}

#[test]
fn find_by_id_returns_none_for_unknown() {
    let conn = setup();
    assert!(contact_repo::find_by_id(&conn, Id::generate())
        .unwrap()
        .is_none());
}

#[test]
fn find_all_keeps_insertion_order() {
    let conn = setup();

    let names = ["Zed", "Amy", "Moe"];
    for name in names {
        contact_repo::insert(&conn, &Contact::create(name.into(), "1".into())).unwrap();
    }

    let all = contact_repo::find_all(&conn).unwrap();
    let found: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(found, names);
}

#[test]
fn contact_update() {
    let conn = setup();

    let mut grace = Contact::create("Grace Hopper".into(), "555-0202".into());
    contact_repo::insert(&conn, &grace).unwrap();

    grace.phone = "555-0203".into();
    grace.contact_type = Some("Personal".into());
    assert!(contact_repo::update(&conn, &grace).unwrap());

    let found = contact_repo::find_by_id(&conn, grace.id).unwrap().unwrap();
    assert_eq!(found.phone, "555-0203");
    assert_eq!(found.contact_type, Some("Personal".into()));
}

#[test]
fn update_missing_row_reports_false() {
    let conn = setup();
    let ghost = Contact::create("Ghost".into(), "0".into());
    assert!(!contact_repo::update(&conn, &ghost).unwrap());
}

#[test]
fn contact_delete() {
    let conn = setup();

    let alan = Contact::create("Alan Turing".into(), "555-0303".into());
    contact_repo::insert(&conn, &alan).unwrap();

    assert!(contact_repo::delete(&conn, alan.id).unwrap());
    assert!(contact_repo::find_by_id(&conn, alan.id).unwrap().is_none());
    assert!(!contact_repo::delete(&conn, alan.id).unwrap());
}

#[test]
fn duplicate_id_is_rejected() {
    let conn = setup();

    let contact = Contact::create("Twin".into(), "2".into());
    contact_repo::insert(&conn, &contact).unwrap();
    assert!(contact_repo::insert(&conn, &contact).is_err());
}
