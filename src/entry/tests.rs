use super::*;

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_parse_projects_known_fields() {
    let entry = DesktopEntry::parse(
        Path::new("/apps/firefox.desktop"),
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=Firefox\n\
         Name[de]=Feuerfuchs\n\
         GenericName=Web Browser\n\
         Comment=Browse the Web\n\
         Icon=firefox\n\
         Exec=firefox %u\n\
         Path=/tmp\n\
         Terminal=false\n\
         Keywords=web;browser; internet ;\n\
         Categories=Network;\n",
    )
    .unwrap();

    assert_eq!(entry.path, Path::new("/apps/firefox.desktop"));
    assert_eq!(entry.name, "Firefox");
    assert_eq!(entry.generic_name, "Web Browser");
    assert_eq!(entry.comment, "Browse the Web");
    assert_eq!(entry.icon, "firefox");
    assert_eq!(entry.exec, "firefox %u");
    assert_eq!(entry.working_dir, "/tmp");
    assert_eq!(entry.terminal, "false");
    assert_eq!(entry.kind, EntryKind::Application);
    assert_eq!(entry.keywords, ["web", "browser", "internet"]);
    assert!(!entry.runs_in_terminal());
}

#[test]
fn test_parse_defaults_missing_fields_to_empty() {
    let entry = DesktopEntry::parse(Path::new("x.desktop"), "[Desktop Entry]\nName=X\n").unwrap();
    assert_eq!(entry.exec, "");
    assert_eq!(entry.hidden, "");
    assert_eq!(entry.kind, EntryKind::Unspecified);
    assert!(entry.keywords.is_empty());
    assert!(entry.try_exec_path.is_none());
}

#[test]
fn test_parse_entry_kinds() {
    for (value, kind) in [
        ("Link", EntryKind::Link),
        ("Directory", EntryKind::Directory),
        ("Service", EntryKind::Other("Service".into())),
    ] {
        let text = format!("[Desktop Entry]\nType={value}\n");
        let entry = DesktopEntry::parse(Path::new("x.desktop"), &text).unwrap();
        assert_eq!(entry.kind, kind);
    }
}

#[test]
fn test_parse_without_section_fails() {
    let err = DesktopEntry::parse(Path::new("x.desktop"), "[KDE Desktop Entry]\nName=X\n")
        .unwrap_err();
    assert!(matches!(err, Error::MissingSection { .. }), "{err}");
}

#[test]
fn test_load_visible_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "foo.desktop", "[Desktop Entry]\nName=Foo\nExec=foo\n");
    let entry = load(&path).unwrap().unwrap();
    assert_eq!(entry.name, "Foo");
    assert_eq!(entry.path, path);
}

#[test]
fn test_load_skips_hidden_and_no_display() {
    let dir = tempfile::tempdir().unwrap();
    let hidden = write(&dir, "a.desktop", "[Desktop Entry]\nName=A\nHidden=true\n");
    let no_display = write(&dir, "b.desktop", "[Desktop Entry]\nName=B\nNoDisplay=true\n");
    assert!(load(&hidden).unwrap().is_none());
    assert!(load(&no_display).unwrap().is_none());
}

#[test]
fn test_load_only_literal_true_hides() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "a.desktop",
        "[Desktop Entry]\nName=A\nHidden=True\nNoDisplay=1\n",
    );
    assert!(load(&path).unwrap().is_some());
}

#[cfg(unix)]
#[test]
fn test_load_resolves_try_exec() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "sh.desktop", "[Desktop Entry]\nName=Shell\nTryExec=sh\n");
    let entry = load(&path).unwrap().unwrap();
    let resolved = entry.try_exec_path.unwrap();
    assert!(resolved.is_absolute());
    assert_eq!(resolved.file_name().unwrap(), "sh");
}

#[test]
fn test_load_drops_unresolvable_try_exec_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "gone.desktop",
        "[Desktop Entry]\nName=Gone\nTryExec=dlaunch-test-no-such-program\n",
    );
    assert!(load(&path).unwrap().is_none());
}

#[test]
fn test_load_tolerates_latin1_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.desktop");
    std::fs::write(&path, b"[Desktop Entry]\nName=Foo\nName[de]=F\xFCr\nExec=foo\n").unwrap();
    let entry = load(&path).unwrap().unwrap();
    assert_eq!(entry.name, "Foo");
    assert_eq!(entry.exec, "foo");
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("absent.desktop")).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "{err}");
}

#[test]
fn test_display_key_composition() {
    assert_eq!(
        compose_key("Firefox", "Web Browser", "Browse the Web"),
        "Firefox (Web Browser; Browse the Web)"
    );
    assert_eq!(compose_key("Firefox", "", "Browse the Web"), "Firefox (Browse the Web)");
    assert_eq!(compose_key("Firefox", "Web Browser", ""), "Firefox (Web Browser)");
    assert_eq!(compose_key("Firefox", "", ""), "Firefox");
}

#[test]
fn test_display_key_uses_entry_fields() {
    let entry = DesktopEntry {
        name: "htop".into(),
        comment: "Process viewer".into(),
        ..DesktopEntry::default()
    };
    assert_eq!(entry.display_key(), "htop (Process viewer)");
}
