use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn write_store(dir: &TempDir, entries: usize) -> std::path::PathBuf {
    let mut body: Vec<String> = (0..entries)
        .map(|i| format!(r#""t{i}": "<t{}>/level{i}""#, i + 1))
        .collect();
    body.push(format!(
        r#""t{entries}": {{"linux": "/srv", "windows": "D:\\srv"}}"#
    ));

    let path = dir.path().join("paths.json");
    std::fs::write(&path, format!("{{{}}}", body.join(","))).expect("failed to write store");
    path
}

fn tokpath(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tokpath").expect("failed to locate tokpath binary");
    cmd.stdout(Stdio::null()).stderr(Stdio::null());
    cmd.arg("--quiet")
        .arg("--platform")
        .arg("linux")
        .arg("--store")
        .arg(store);
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("tokpath").expect("failed to locate tokpath binary");
            let output = cmd.arg("--version").output().expect("failed to run tokpath");
            black_box(output);
        });
    });
}

fn bench_cli_resolve(c: &mut Criterion) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = write_store(&dir, 8);

    c.bench_function("cli_resolve_nested", |b| {
        b.iter(|| {
            let status = tokpath(&store)
                .args(["resolve", "<t0>/leaf", "--separator", "slash"])
                .status()
                .expect("failed to execute tokpath resolve");
            black_box(status.success());
        });
    });
}

fn bench_cli_validate(c: &mut Criterion) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = write_store(&dir, 200);

    c.bench_function("cli_validate_store", |b| {
        b.iter(|| {
            let status = tokpath(&store)
                .arg("validate")
                .arg(&store)
                .status()
                .expect("failed to execute tokpath validate");
            black_box(status.success());
        });
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_resolve,
    bench_cli_validate
);
criterion_main!(cli_benches);
