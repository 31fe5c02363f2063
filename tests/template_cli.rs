#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EXPECTED: &str = "AWSTemplateFormatVersion: 2010-09-09
Description: Additional resources for the api service
Parameters:
  Param1:
    Type: String
Resources:
  Bucket:
    Type: AWS::S3::Bucket
Outputs:
  Output1:
    Value: foo
";

fn stackfold_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("stackfold"));
    cmd.current_dir(temp.path())
        .env("STACKFOLD_GLOBAL_CONFIG", temp.path().join("global"))
        .env_remove("STACKFOLD_LOG")
        .arg("--no-color");
    cmd
}

fn write_addons(root: &Path, svc: &str, files: &[(&str, &str)]) {
    let dir = root.join(svc).join("addons");
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn complete_service(temp: &TempDir) {
    write_addons(
        temp.path(),
        "api",
        &[
            ("params.yaml", "Param1:\n  Type: String\n"),
            ("outputs.yaml", "Output1:\n  Value: foo\n"),
            ("s3-bucket.yaml", "Bucket:\n  Type: AWS::S3::Bucket\n"),
            ("notes.txt", "not part of the template"),
        ],
    );
}

#[test]
fn test_template_prints_to_stdout() {
    let temp = TempDir::new().unwrap();
    complete_service(&temp);

    stackfold_cmd(&temp)
        .args(["template", "api"])
        .assert()
        .success()
        .stdout(EXPECTED)
        .stderr(predicate::str::contains("Composed addons template"));
}

#[test]
fn test_template_is_stable_across_runs() {
    let temp = TempDir::new().unwrap();
    complete_service(&temp);
    write_addons(
        temp.path(),
        "api",
        &[
            ("b-queue.yml", "Queue:\n  Type: AWS::SQS::Queue"),
            ("a-topic.yaml", "Topic:\n  Type: AWS::SNS::Topic"),
        ],
    );

    let first = stackfold_cmd(&temp).args(["template", "api"]).output().unwrap();
    let second = stackfold_cmd(&temp).args(["template", "api"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    assert!(text.contains("Resources:\n  Topic:\n    Type: AWS::SNS::Topic\n  Queue:\n    Type: AWS::SQS::Queue\n  Bucket:\n"));
}

#[test]
fn test_template_writes_output_file() {
    let temp = TempDir::new().unwrap();
    complete_service(&temp);
    let out = temp.path().join("build").join("addons.yml");

    stackfold_cmd(&temp)
        .args(["template", "api", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote template to"));

    assert_eq!(fs::read_to_string(out).unwrap(), EXPECTED);
}

#[test]
fn test_missing_files_are_reported() {
    let temp = TempDir::new().unwrap();
    write_addons(
        temp.path(),
        "api",
        &[("s3-bucket.yaml", "Bucket:\n  Type: AWS::S3::Bucket")],
    );

    stackfold_cmd(&temp)
        .args(["template", "api"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "addons directory has missing file(s): params.yaml, outputs.yaml",
        ));
}

#[test]
fn test_missing_directory_is_reported() {
    let temp = TempDir::new().unwrap();

    stackfold_cmd(&temp)
        .args(["template", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read addons directory for service web"))
        .stderr(predicate::str::contains("missing file").not());
}

#[test]
fn test_list_shows_categories() {
    let temp = TempDir::new().unwrap();
    complete_service(&temp);

    stackfold_cmd(&temp)
        .args(["ls", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt       ignored"))
        .stdout(predicate::str::contains("outputs.yaml    outputs"))
        .stdout(predicate::str::contains("params.yaml     parameters"))
        .stdout(predicate::str::contains("s3-bucket.yaml  resources"));
}

#[test]
fn test_config_changes_addons_dir() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("api").join("extras");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("params.yaml"), "Param1:\n  Type: String").unwrap();
    fs::write(dir.join("outputs.yaml"), "Output1:\n  Value: foo").unwrap();
    fs::write(dir.join("s3-bucket.yaml"), "Bucket:\n  Type: AWS::S3::Bucket").unwrap();

    stackfold_cmd(&temp)
        .args(["config", "addons-dir", "extras"])
        .assert()
        .success()
        .stdout(predicate::str::contains("addons-dir set to extras"));

    assert!(temp.path().join(".stackfold/config.json").exists());

    stackfold_cmd(&temp)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("addons-dir = extras"));

    stackfold_cmd(&temp)
        .args(["template", "api"])
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_workspace_flag() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    write_addons(
        &project,
        "api",
        &[
            ("params.yml", "Param1:\n  Type: String"),
            ("outputs.yml", "Output1:\n  Value: foo"),
            ("bucket.yml", "Bucket:\n  Type: AWS::S3::Bucket"),
        ],
    );

    stackfold_cmd(&temp)
        .arg("-C")
        .arg(&project)
        .args(["template", "api", "--blocks"])
        .assert()
        .success()
        .stdout(EXPECTED);
}
