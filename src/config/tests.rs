use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.terminal.command, "x-terminal-emulator");
    assert_eq!(config.terminal.exec_flag, "-e");
    assert_eq!(config.picker.command, "dmenu");
    assert_eq!(config.picker.lines, 10);
    assert!(config.picker.case_insensitive);
    assert!(config.picker.early_grab);
    assert!(!config.picker.bottom);
    assert!(!config.discovery.keep_going);
    assert_eq!(
        &config.discovery.roots[..2],
        [
            PathBuf::from("/usr/share/applications"),
            PathBuf::from("/usr/local/share/applications")
        ]
    );
}

#[test]
fn test_user_root_is_under_home() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let config = Config::default();
    assert_eq!(
        config.discovery.roots.last(),
        Some(&home.join(".local/share/applications"))
    );
}

#[test]
fn test_get_set_roundtrip() {
    let mut config = Config::default();
    config.set_value("picker.lines", "5").unwrap();
    config.set_value("picker.prompt", "run").unwrap();
    config.set_value("discovery.keep_going", "true").unwrap();
    config.set_value("terminal.command", "urxvt").unwrap();
    assert_eq!(config.get_value("picker.lines").unwrap(), "5");
    assert_eq!(config.get_value("picker.prompt").unwrap(), "run");
    assert_eq!(config.get_value("discovery.keep_going").unwrap(), "true");
    assert_eq!(config.get_value("terminal.command").unwrap(), "urxvt");

    config.set_value("picker.prompt", "").unwrap();
    assert_eq!(config.picker.prompt, None);
}

#[test]
fn test_set_roots_splits_path_list() {
    let mut config = Config::default();
    config.set_value("discovery.roots", "/a:/b/c").unwrap();
    assert_eq!(
        config.discovery.roots,
        [PathBuf::from("/a"), PathBuf::from("/b/c")]
    );
    assert_eq!(config.get_value("discovery.roots").unwrap(), "/a:/b/c");
}

#[test]
fn test_set_rejects_bad_values() {
    let mut config = Config::default();
    assert!(config.set_value("picker.lines", "-1").is_err());
    assert!(config.set_value("picker.bottom", "yes").is_err());
    assert!(config.set_value("terminal.command", "").is_err());
    assert!(config.set_value("terminal.exec_flag", "").is_err());
    assert!(config.set_value("nope", "1").is_err());
    assert!(config.get_value("nope").is_err());
}

#[test]
fn test_apply_override() {
    let mut config = Config::default();
    config.apply_override("picker.bottom = true").unwrap();
    assert!(config.picker.bottom);
    assert!(config.apply_override("picker.bottom").is_err());
}

#[test]
fn test_toml_output_has_one_table_per_section() {
    let mut config = Config::default();
    config.discovery.roots = vec![PathBuf::from("/usr/share/applications")];
    config.picker.prompt = Some("run".into());
    let rendered = config.to_toml().unwrap();
    for table in ["[discovery]", "[terminal]", "[picker]"] {
        assert!(rendered.contains(table), "{rendered}");
    }
    assert!(rendered.contains("command = \"dmenu\""), "{rendered}");
    assert!(rendered.contains("exec_flag = \"-e\""), "{rendered}");
    assert!(rendered.contains("prompt = \"run\""), "{rendered}");
    assert!(rendered.contains("keep_going = false"), "{rendered}");
}

#[test]
fn test_toml_output_omits_unset_prompt() {
    let rendered = Config::default().to_toml().unwrap();
    assert!(!rendered.contains("prompt"), "{rendered}");
}

#[test]
fn test_toml_output_reflects_overrides() {
    let mut config = Config::default();
    config.apply_override("picker.lines=3").unwrap();
    config.apply_override("terminal.command=urxvt").unwrap();
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("lines = 3"), "{rendered}");
    assert!(rendered.contains("command = \"urxvt\""), "{rendered}");
}
