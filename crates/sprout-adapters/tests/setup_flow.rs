//! End-to-end setup runs against the in-memory adapters.

use std::cell::RefCell;
use std::path::Path;

use sprout_adapters::{MemoryFilesystem, ScriptedFailure, ScriptedRunner};
use sprout_core::{
    application::{ApplicationError, ProgressReporter, SetupService, VerificationOutcome},
    domain::{Toolchain, notices},
    error::SproutError,
};

const ROOT: &str = "/work/demo";
const SETTINGS: &str = "/work/demo/.cookiecutter.json";

#[derive(Default)]
struct Transcript(RefCell<Vec<String>>);

impl Transcript {
    fn has(&self, line: &str) -> bool {
        self.0.borrow().iter().any(|l| l == line)
    }
}

impl ProgressReporter for Transcript {
    fn announce(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
    fn warn(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
    fn notice(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}

fn project(settings: &str) -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file(SETTINGS, settings)
        .with_file("/work/demo/.pre-commit-config.yaml", "repos: []\n")
        .with_file("/work/demo/.github/workflows/tests.yml", "on: push\n")
        .with_file("/work/demo/pyproject.toml", "[tool.poetry]\n")
}

fn service(fs: &MemoryFilesystem, runner: &ScriptedRunner) -> SetupService {
    SetupService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        Toolchain::default(),
    )
}

#[test]
fn default_settings_commit_install_and_verify() {
    let fs = project("{\n    \"project_name\": \"demo\"\n}");
    let runner = ScriptedRunner::new();
    let out = Transcript::default();

    let report = service(&fs, &runner)
        .run(Path::new(ROOT), Path::new(SETTINGS), &out)
        .unwrap();

    assert_eq!(
        runner.history(),
        [
            "git init -q -b master",
            "git add .",
            "git commit -m \"initial commit\"",
            "poetry --no-ansi -n lock",
            "poetry --no-ansi -n install",
            "poetry --no-ansi -n run nox --error-on-missing-interpreters \
             --error-on-external-run --non-interactive -k \"not safety and not docs\"",
        ]
    );
    assert_eq!(report.verification, VerificationOutcome::Passed);
    assert!(fs.exists_at("/work/demo/.github/workflows/tests.yml"));
    assert_eq!(
        fs.read_file(Path::new(SETTINGS)).as_deref(),
        Some("{\n  \"project_name\": \"demo\"\n}\n")
    );
    assert!(out.has(notices::FOLLOW_UP[0]));
}

#[test]
fn disabled_git_strips_vcs_files_and_tolerates_missing_verifier() {
    let fs = project(r#"{"initialize_git": false, "enforce_checks_on_creation": false}"#);
    let runner = ScriptedRunner::new().fail_when("nox", ScriptedFailure::Missing);
    let out = Transcript::default();

    let report = service(&fs, &runner)
        .run(Path::new(ROOT), Path::new(SETTINGS), &out)
        .unwrap();

    assert!(!fs.exists_at("/work/demo/.pre-commit-config.yaml"));
    assert!(!fs.exists_at("/work/demo/.github"));
    assert!(fs.exists_at("/work/demo/pyproject.toml"));
    assert_eq!(report.removed.len(), 2);
    assert!(out.has(notices::CONTINUING_WITHOUT_VERIFICATION));
    assert!(out.has(notices::FOLLOW_UP[0]));
    assert!(runner.history().iter().all(|c| !c.starts_with("git ")));
}

#[test]
fn enforced_checks_with_missing_verifier_abort() {
    let fs = project(r#"{"initialize_git": false, "enforce_checks_on_creation": true}"#);
    let runner = ScriptedRunner::new().fail_when("nox", ScriptedFailure::Missing);
    let out = Transcript::default();

    let err = service(&fs, &runner)
        .run(Path::new(ROOT), Path::new(SETTINGS), &out)
        .unwrap_err();

    assert!(matches!(
        err,
        SproutError::Application(ApplicationError::VerificationFailed { .. })
    ));
    assert!(out.has(notices::VERIFIER_UNAVAILABLE));
    assert!(!out.has(notices::FOLLOW_UP[0]));
    assert!(
        runner
            .history()
            .contains(&"poetry --no-ansi -n run pre-commit install".to_owned())
    );
}

#[test]
fn running_twice_leaves_settings_byte_identical() {
    let fs = project("{\"b\": [1, 2], \"a\": {\"z\": null, \"y\": \"x\"}}");
    let runner = ScriptedRunner::new();
    let svc = service(&fs, &runner);

    svc.normalize_settings(Path::new(SETTINGS)).unwrap();
    let first = fs.read_file(Path::new(SETTINGS)).unwrap();
    svc.normalize_settings(Path::new(SETTINGS)).unwrap();
    let second = fs.read_file(Path::new(SETTINGS)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn git_failure_aborts_before_dependencies() {
    let fs = project("{}");
    let runner = ScriptedRunner::new().fail_when("commit", ScriptedFailure::Exit(1));
    let out = Transcript::default();

    let err = service(&fs, &runner)
        .run(Path::new(ROOT), Path::new(SETTINGS), &out)
        .unwrap_err();

    assert!(matches!(
        err,
        SproutError::Application(ApplicationError::CommandFailed { code: Some(1), .. })
    ));
    assert_eq!(runner.history().len(), 3);
}

trait ExistsAt {
    fn exists_at(&self, path: &str) -> bool;
}

impl ExistsAt for MemoryFilesystem {
    fn exists_at(&self, path: &str) -> bool {
        use sprout_core::application::Filesystem;
        self.exists(Path::new(path))
    }
}
