//! Saving a session's state and picking it up again.

use satchel_foundation::ItemRegistry;
use satchel_runtime::{Session, from_bytes, load_from_file, save_to_file, to_bytes};

fn played() -> Session {
    let mut session = Session::with_registry(ItemRegistry::from_names([
        "MaterialA",
        "WeaponA",
        "FoodA",
    ]));
    session.run_script(
        "initialize 4 materiala 1 weapona[equip]\n\
         save as start\n\
         write [hp=12,price=80] to fooda\n\
         break 2 slots\n\
         has 10 weapon slots\n\
         use start",
        None,
    );
    session
}

#[test]
fn state_survives_bytes() {
    let session = played();
    let restored = from_bytes(&to_bytes(session.state()).unwrap()).unwrap();
    assert_eq!(&restored, session.state());
    assert_eq!(restored.pouch().offset(), 2);
    assert_eq!(restored.next_reload_name(), Some("start"));
    assert!(restored.named_saves().contains_key("start"));
}

#[test]
fn restored_state_keeps_playing_the_same() {
    let original = played();
    let bytes = to_bytes(original.state()).unwrap();

    let mut resumed = Session::with_registry(original.registry().clone())
        .with_state(from_bytes(&bytes).unwrap());
    let mut continued = original.clone();

    for line in ["reload", "get 2 materiala", "!sort material"] {
        continued.run_line(line);
        resumed.run_line(line);
    }
    assert_eq!(continued.state(), resumed.state());
}

#[test]
fn state_survives_files() {
    let session = played();
    let path = std::env::temp_dir().join("satchel_integration_state.msgpack");

    save_to_file(session.state(), &path).unwrap();
    let mut fresh = Session::new();
    fresh.set_state(load_from_file(&path).unwrap());
    assert_eq!(fresh.state(), session.state());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn dumps_match_after_roundtrip() {
    let session = played();
    let restored = Session::new().with_state(from_bytes(&to_bytes(session.state()).unwrap()).unwrap());
    assert_eq!(restored.dump(None).unwrap(), session.dump(None).unwrap());
    assert_eq!(
        restored.dump(Some("start")).unwrap(),
        session.dump(Some("start")).unwrap()
    );
}
