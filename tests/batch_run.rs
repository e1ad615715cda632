use signal_scheduler::batch::{read_report, run_batch};
use signal_scheduler::config::Config;
use signal_scheduler::output_model;
use signal_scheduler::Strategy;
use std::fs;
use std::path::PathBuf;

const CITY: &str = "6 4 5 2 1000
2 0 rue-de-londres 1
0 1 rue-d-amsterdam 1
3 1 rue-d-athenes 1
2 3 rue-de-rome 2
1 2 rue-de-moscou 3
4 rue-de-londres rue-d-amsterdam rue-de-moscou rue-de-rome
3 rue-d-athenes rue-de-moscou rue-de-londres
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "signal_scheduler_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("input")).unwrap();
    dir
}

#[tokio::test]
async fn bad_file_does_not_stop_the_batch() {
    let dir = scratch_dir("isolation");
    fs::write(dir.join("input").join("good.txt"), CITY).unwrap();
    fs::write(dir.join("input").join("bad.txt"), "6 4 5\n").unwrap();

    let config = Config {
        input_dir: dir.join("input"),
        output_dir: dir.join("output"),
        strategy: Strategy::Weighted,
        json: true,
        inputs: vec!["bad".into(), "missing".into(), "good".into()],
        ..Config::default()
    };
    let summary = run_batch(config).await;

    assert_eq!(summary.records.len(), 3);
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed(), 2);
    assert!(!summary.all_succeeded());
    assert_eq!(summary.records[0].status, "failed");
    assert!(summary.records[0].message.contains("header"));
    assert_eq!(summary.records[1].status, "failed");
    assert_eq!(summary.records[2].status, "ok");

    let written = fs::read_to_string(dir.join("output").join("good_out.txt")).unwrap();
    let parsed = output_model::from_text(&written).unwrap();
    assert_eq!(parsed.len(), summary.records[2].schedules);
    assert!(dir.join("output").join("good_out.json").exists());
    assert!(!dir.join("output").join("bad_out.txt").exists());

    let report = read_report(&dir.join("output").join("run_report.csv")).unwrap();
    assert_eq!(report, summary.records);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn naive_run_writes_expected_schedules() {
    let dir = scratch_dir("naive");
    fs::write(dir.join("input").join("a.txt"), CITY).unwrap();

    let config = Config {
        input_dir: dir.join("input"),
        output_dir: dir.join("output"),
        no_report: true,
        inputs: vec!["a".into()],
        ..Config::default()
    };
    let summary = run_batch(config).await;
    assert!(summary.all_succeeded());

    // 0, 2 and 3 have one incoming street each; 1 has two.
    let written = fs::read_to_string(dir.join("output").join("a_out.txt")).unwrap();
    assert_eq!(
        written,
        "4\n0\n1\nrue-de-londres 6\n2\n1\nrue-de-moscou 6\n3\n1\nrue-de-rome 6\n1\n2\nrue-d-amsterdam 1\nrue-d-athenes 1\n"
    );
    assert!(!dir.join("output").join("run_report.csv").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn inputs_sharing_a_stem_do_not_overwrite_each_other() {
    let dir = scratch_dir("collision");
    fs::create_dir_all(dir.join("x")).unwrap();
    fs::create_dir_all(dir.join("y")).unwrap();
    let first = dir.join("x").join("a.txt");
    let second = dir.join("y").join("a.txt");
    fs::write(&first, "10 2 1 0 1\n0 1 first 1\n").unwrap();
    fs::write(&second, "10 2 1 0 1\n0 1 second 1\n").unwrap();

    let config = Config {
        output_dir: dir.join("output"),
        no_report: true,
        inputs: vec![
            first.display().to_string(),
            second.display().to_string(),
            first.display().to_string(),
        ],
        ..Config::default()
    };
    let summary = run_batch(config).await;

    assert_eq!(summary.records.len(), 3);
    assert_eq!(summary.records[0].status, "ok");
    assert_eq!(summary.records[1].status, "failed");
    assert!(summary.records[1].message.contains("already written"));
    assert_eq!(summary.records[2].status, "failed");

    let written = fs::read_to_string(dir.join("output").join("a_out.txt")).unwrap();
    assert_eq!(written, "1\n1\n1\nfirst 10\n");

    let _ = fs::remove_dir_all(&dir);
}
