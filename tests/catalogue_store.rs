//! End-to-end behaviour of the catalogue against a real profile file

use std::fs;

use ssh_gui_manager::config::{LoadWarning, Profile, ProfileStore, StoreConfig};
use ssh_gui_manager::{build_command, ProfileCatalogue};
use tempfile::TempDir;

fn store(dir: &TempDir) -> ProfileStore {
    ProfileStore::new(StoreConfig::new(dir.path().join("ssh-gui-manager")))
}

#[test]
fn edits_survive_a_restart() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut catalogue = ProfileCatalogue::open(store(&dir));
    catalogue
        .add(
            Profile::new("web1", "10.0.0.5")
                .with_user("alice")
                .with_port(2222)
                .with_identity_file("/home/a/.ssh/id")
                .with_extra_args("-A"),
        )
        .unwrap();
    catalogue.add(Profile::new("x", "h")).unwrap();
    let copy = catalogue.duplicate(0).unwrap();
    catalogue.delete(1).unwrap();
    drop(catalogue);

    let catalogue = ProfileCatalogue::open(store(&dir));
    let names: Vec<_> = catalogue.profiles().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["web1", "web1 (copy)"]);
    assert_eq!(copy, 2);

    let web = catalogue.get(0).unwrap();
    assert_eq!(
        build_command(web),
        "ssh -p 2222 -i /home/a/.ssh/id -A alice@10.0.0.5"
    );
    assert_eq!(build_command(catalogue.get(1).unwrap()), build_command(web));
}

#[test]
fn hand_written_file_is_sanitized() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&dir);
    store.config().ensure_dir().unwrap();
    fs::write(
        store.path(),
        r#"[
  {"name": "  prod  ", "host": "prod.example.com", "port": "2022", "user": "deploy"},
  {"name": "broken", "host": ""},
  {"name": "float", "host": "f", "port": 22.0}
]"#,
    )
    .unwrap();

    let catalogue = ProfileCatalogue::open(store);
    assert!(catalogue.load_warning().is_none());
    assert_eq!(catalogue.len(), 2);

    let prod = catalogue.get(0).unwrap();
    assert_eq!(prod.name, "prod");
    assert_eq!(prod.port, 2022);
    assert_eq!(build_command(prod), "ssh -p 2022 deploy@prod.example.com");
    assert_eq!(build_command(catalogue.get(1).unwrap()), "ssh f");
}

#[test]
fn corrupt_file_starts_empty_and_is_replaced_on_save() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&dir);
    store.config().ensure_dir().unwrap();
    fs::write(store.path(), "[{\"name\": \"a\", \"host\": \"h\", ").unwrap();

    let mut catalogue = ProfileCatalogue::open(store.clone());
    assert!(catalogue.is_empty());
    assert!(matches!(
        catalogue.load_warning(),
        Some(LoadWarning::Malformed { .. })
    ));

    catalogue.add(Profile::new("fresh", "h")).unwrap();
    let reloaded = store.load();
    assert!(reloaded.warning.is_none());
    assert_eq!(reloaded.profiles.len(), 1);
}

#[test]
fn saved_document_matches_expected_layout() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut catalogue = ProfileCatalogue::open(store(&dir));
    catalogue
        .add(Profile::new("x", "h").with_jump_host("bastion"))
        .unwrap();

    let text = fs::read_to_string(catalogue.store().path()).unwrap();
    assert_eq!(
        text,
        r#"[
  {
    "name": "x",
    "host": "h",
    "user": "",
    "port": 22,
    "identity_file": "",
    "jump_host": "bastion",
    "extra_args": ""
  }
]"#
    );
}
