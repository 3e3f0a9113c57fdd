use std::collections::HashSet;

use tally_types::{EntityRef, EntityUid, IdentityKind, ParticipantKey};

#[test]
fn kind_names_are_stable() {
    assert_eq!(IdentityKind::Player.to_string(), "player");
    assert_eq!(IdentityKind::Entity.to_string(), "entity");
    assert_eq!(IdentityKind::FakePlayer.to_string(), "fake_player");
}

#[test]
fn keys_display_their_backing() {
    let entity = ParticipantKey::Entity(EntityUid::from_raw(9));
    let name = ParticipantKey::Name("alice".to_owned());
    assert_eq!(entity.to_string(), "entity:9");
    assert_eq!(name.to_string(), "name:alice");
}

#[test]
fn entity_and_name_keys_never_collide() {
    let mut keys = HashSet::new();
    keys.insert(ParticipantKey::Entity(EntityUid::from_raw(1)));
    keys.insert(ParticipantKey::Name("1".to_owned()));
    keys.insert(ParticipantKey::Name("1".to_owned()));
    assert_eq!(keys.len(), 2);
}

#[test]
fn entity_ref_round_trips_through_serde() {
    let entity = EntityRef {
        uid: EntityUid::from_raw(3),
        name: "Creeper".to_owned(),
        is_player: false,
    };
    let json = serde_json::to_string(&entity).unwrap();
    let back: EntityRef = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entity);
}
