use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nuunpad"))
}

/// Isolated home for one test: config dir, store snapshot, export dir.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create sandbox"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    fn config_home(&self) -> PathBuf {
        self.path("config")
    }

    fn write_store(&self, contents: &str) -> PathBuf {
        let path = self.path("local-storage.json");
        std::fs::write(&path, contents).expect("write store");
        path
    }

    fn write_config(&self, contents: &str) {
        let dir = self.config_home().join("nuunpad");
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("write config");
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("HOME", self.root.path())
            .env("NO_COLOR", "1")
            .env_remove("NUUNPAD_STORE")
            .env_remove("NUUNPAD_CONFIG")
            .env_remove("RUST_LOG")
            .current_dir(self.root.path());
        cmd
    }
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("run nuunpad")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read file")
}

const SAMPLE_STORE: &str = r#"{"note-1": "hello", "note-2": "", "other": "x"}"#;

#[test]
fn test_export_writes_timestamped_file() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);
    let out = sandbox.path("exports");

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("export")
        .arg("--output-dir")
        .arg(&out)
        .arg("--at")
        .arg("2024-03-07T09:05"));
    assert_success(&output);

    let exported = out.join("nuunpad-notes-07-03-2024-09-05.json");
    assert_eq!(read(&exported), "{\n  \"note-1\": \"hello\"\n}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("status=ok"));
    assert!(stdout.contains("notes=1"));
}

#[test]
fn test_export_to_stdout() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);

    let output = run(sandbox
        .command()
        .arg("export")
        .arg("--stdout")
        .env("NUUNPAD_STORE", &store));
    assert_success(&output);

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(parsed, serde_json::json!({ "note-1": "hello" }));
}

#[test]
fn test_export_empty_store_is_empty_object() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(r#"{"theme": "dark"}"#);

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("export")
        .arg("--stdout"));
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "{}");
}

#[test]
fn test_export_json_report() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(r#"{"note-a": "1", "note-b": "2"}"#);
    let out = sandbox.path("out");

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("export")
        .arg("-o")
        .arg(&out)
        .arg("--at")
        .arg("2031-12-31 23:59")
        .arg("--json"));
    assert_success(&output);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report is JSON");
    assert_eq!(report["filename"], "nuunpad-notes-31-12-2031-23-59.json");
    assert_eq!(report["note_count"], 2);
    assert!(out.join("nuunpad-notes-31-12-2031-23-59.json").exists());
}

#[test]
fn test_export_without_at_uses_pattern() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);
    let out = sandbox.path("now");

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("--quiet")
        .arg("export")
        .arg("-o")
        .arg(&out));
    assert_success(&output);

    let names: Vec<String> = std::fs::read_dir(&out)
        .expect("read export dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names.len(), 1);
    let name = &names[0];
    let stamp = name
        .strip_prefix("nuunpad-notes-")
        .and_then(|rest| rest.strip_suffix(".json"))
        .expect("export file name shape");
    let widths: Vec<usize> = stamp.split('-').map(str::len).collect();
    assert_eq!(widths, vec![2, 2, 4, 2, 2]);
    assert!(stamp.chars().all(|c| c.is_ascii_digit() || c == '-'));
}

#[test]
fn test_config_supplies_store_and_output_dir() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);
    let out = sandbox.path("configured");
    sandbox.write_config(&format!(
        "[store]\npath = \"{}\"\n\n[export]\noutput_dir = \"{}\"\n",
        store.display(),
        out.display()
    ));

    let output = run(sandbox.command().arg("export").arg("--at").arg("2024-03-07T09:05"));
    assert_success(&output);
    assert!(out.join("nuunpad-notes-07-03-2024-09-05.json").exists());
}

#[test]
fn test_conflict_fail_exits_with_export_failed() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);
    let out = sandbox.path("exports");

    let export = |policy: &str| {
        run(sandbox
            .command()
            .arg("--store")
            .arg(&store)
            .arg("export")
            .arg("-o")
            .arg(&out)
            .arg("--at")
            .arg("2024-03-07T09:05")
            .arg("--on-conflict")
            .arg(policy))
    };

    assert_success(&export("fail"));
    let second = export("fail");
    assert_eq!(second.status.code(), Some(5));

    assert_success(&export("suffix"));
    assert!(out.join("nuunpad-notes-07-03-2024-09-05 (1).json").exists());
}

#[test]
fn test_missing_store_exits_not_found() {
    let sandbox = Sandbox::new();

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(sandbox.path("absent.json"))
        .arg("export")
        .arg("--stdout"));
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No note store found"));
}

#[test]
fn test_unconfigured_store_exits_not_found() {
    let sandbox = Sandbox::new();

    let output = run(sandbox.command().arg("list"));
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_invalid_at_exits_invalid_input() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("export")
        .arg("--stdout")
        .arg("--at")
        .arg("next tuesday"));
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_invalid_snapshot_fails() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(r#"{"note-1": 42}"#);

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("export")
        .arg("--stdout"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("note-1"));
}

#[test]
fn test_list_json_and_plain() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(
        r#"{"note-1": "hello", "note-2": "", "note-3": "héllo!", "note-to do": "milk"}"#,
    );

    let json = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .arg("--json"));
    assert_success(&json);
    let items: serde_json::Value = serde_json::from_slice(&json.stdout).expect("list JSON");
    assert_eq!(
        items,
        serde_json::json!([
            { "key": "note-1", "chars": 5 },
            { "key": "note-3", "chars": 6 },
            { "key": "note-to do", "chars": 4 },
        ])
    );

    let plain = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .arg("--format")
        .arg("plain"));
    assert_success(&plain);
    assert_eq!(
        String::from_utf8_lossy(&plain.stdout).trim_end(),
        "note-1\t5\nnote-3\t6\nnote-to do\t4"
    );
}

#[test]
fn test_list_table_format_when_piped() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);

    let output = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .arg("--format")
        .arg("table"));

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PREVIEW"));
    assert!(stdout.contains("note-1"));
    assert!(!stdout.contains("other"));
}

#[test]
fn test_list_rejects_bad_output_flags() {
    let sandbox = Sandbox::new();
    let store = sandbox.write_store(SAMPLE_STORE);

    let unknown = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .arg("--format")
        .arg("csv"));
    assert_eq!(unknown.status.code(), Some(4));

    let both = run(sandbox
        .command()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .arg("--json")
        .arg("--format")
        .arg("plain"));
    assert_eq!(both.status.code(), Some(4));
    assert!(both.stdout.is_empty());
}

#[test]
fn test_config_init_then_show() {
    let sandbox = Sandbox::new();

    let init = run(sandbox.command().arg("config").arg("--init"));
    assert_success(&init);
    let config_path = sandbox.config_home().join("nuunpad").join("config.toml");
    assert!(config_path.exists());

    let again = run(sandbox.command().arg("config").arg("--init"));
    assert_eq!(again.status.code(), Some(4));

    let show = run(sandbox.command().arg("config"));
    assert_success(&show);
    assert!(String::from_utf8_lossy(&show.stdout).contains("on_conflict = \"suffix\""));
}

#[test]
fn test_completions_generate() {
    let sandbox = Sandbox::new();

    let output = run(sandbox.command().arg("completions").arg("bash"));
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("nuunpad"));
}
