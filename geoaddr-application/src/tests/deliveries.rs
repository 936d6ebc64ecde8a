use super::prelude::*;

#[test]
fn create_and_list_deliveries() {
    let fixture = BackendFixture::new();
    let user = UserId::new(7);
    let created = fixture.create_delivery(user, (1.5, 2.5));
    assert_eq!(created.user_id, user);
    assert!(!created.deleted);
    assert_eq!(
        created.address.pos,
        MapPoint::try_from_lat_lng_deg(1.5, 2.5)
    );

    let listed = flows::deliveries_of_user(&fixture.db_connections, user).unwrap();
    assert_eq!(listed, vec![created]);
    // Other users see nothing.
    assert!(
        flows::deliveries_of_user(&fixture.db_connections, UserId::new(8))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn cross_user_lookup_is_not_found() {
    let fixture = BackendFixture::new();
    let owner = UserId::new(1);
    let created = fixture.create_delivery(owner, (0.0, 0.0));
    let id = created.address.id.as_str();

    let res = flows::get_delivery(&fixture.db_connections, UserId::new(2), id);
    assert!(res.unwrap_err().is_not_found());
    // Indistinguishable from an id that never existed.
    let res = flows::get_delivery(&fixture.db_connections, owner, "no-such-id");
    assert!(res.unwrap_err().is_not_found());
}

#[test]
fn soft_delete_is_idempotent_and_keeps_the_record() {
    let fixture = BackendFixture::new();
    let user = UserId::new(3);
    let created = fixture.create_delivery(user, (0.0, 0.0));
    let id = created.address.id.as_str();

    assert_eq!(
        flows::delete_delivery(&fixture.db_connections, user, id).unwrap(),
        1
    );
    assert_eq!(
        flows::delete_delivery(&fixture.db_connections, user, id).unwrap(),
        1
    );

    // Still retrievable, with the flag set.
    let stored = flows::get_delivery(&fixture.db_connections, user, id).unwrap();
    assert!(stored.deleted);
    // Still listed for the owner.
    assert_eq!(
        flows::deliveries_of_user(&fixture.db_connections, user)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn foreign_delete_matches_nothing() {
    let fixture = BackendFixture::new();
    let owner = UserId::new(1);
    let created = fixture.create_delivery(owner, (0.0, 0.0));
    let id = created.address.id.as_str();

    assert_eq!(
        flows::delete_delivery(&fixture.db_connections, UserId::new(2), id).unwrap(),
        0
    );
    assert!(
        !flows::get_delivery(&fixture.db_connections, owner, id)
            .unwrap()
            .deleted
    );
}
