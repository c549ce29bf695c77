use super::*;

fn temp_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("umkm-admin-{}", uuid::Uuid::new_v4()))
        .join("local-storage.json")
}

#[test]
fn load_from_missing_file_is_none() {
    let store = FileTokenStore::new(temp_path());
    assert_eq!(store.load(), None);
}

#[test]
fn save_then_load_round_trips_and_creates_dirs() {
    let path = temp_path();
    let store = FileTokenStore::new(&path);

    store.save(&SessionToken::new("tok_xyz")).unwrap();

    assert!(path.exists());
    assert_eq!(store.load(), Some(SessionToken::new("tok_xyz")));
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn save_keeps_other_keys() {
    let path = temp_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"theme":"dark","token":"old"}"#).unwrap();
    let store = FileTokenStore::new(&path);

    store.save(&SessionToken::new("new")).unwrap();

    let items: BTreeMap<String, String> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(items.get("theme").map(String::as_str), Some("dark"));
    assert_eq!(items.get("token").map(String::as_str), Some("new"));
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn clear_removes_only_token() {
    let path = temp_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"theme":"dark","token":"old"}"#).unwrap();
    let store = FileTokenStore::new(&path);

    store.clear().unwrap();

    assert_eq!(store.load(), None);
    assert!(std::fs::read_to_string(&path).unwrap().contains("theme"));
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn clear_on_missing_file_is_ok() {
    let store = FileTokenStore::new(temp_path());
    assert!(store.clear().is_ok());
}

#[test]
fn corrupt_file_is_a_storage_error() {
    let path = temp_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json").unwrap();
    let store = FileTokenStore::new(&path);

    let err = store.save(&SessionToken::new("t")).unwrap_err();
    assert!(matches!(err, LoginError::Storage(_)));
    assert_eq!(store.load(), None);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
