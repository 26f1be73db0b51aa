use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SOLUTION: &str = "Step_Solution_E_gr_V.txt";
const PROBABILITIES: &str = "Step_Probabilities.txt";

fn stepplot() -> Command {
    Command::cargo_bin("stepplot").expect("binary should be built")
}

fn write_solution(dir: &Path, columns: usize) {
    let mut text = String::new();
    for i in 0..40 {
        let x = i as f64 * 0.05;
        let re = (3.0 * x).cos();
        let im = (3.0 * x).sin();
        let values = [x, re, im, re * re + im * im];
        let line: Vec<String> = values[..columns].iter().map(|v| format!("{v:.10}")).collect();
        text.push_str(&line.join(" , "));
        text.push('\n');
    }
    fs::write(dir.join(SOLUTION), text).unwrap();
}

fn svg_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .count()
}

#[test]
fn plots_wavefunction_in_working_directory() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_solution(temp.path(), 4);

    stepplot()
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let svg = fs::read_to_string(temp.path().join("Step_Solution_E_gr_V.svg")).unwrap();
    assert!(svg.contains("real part"));
    assert!(svg.contains("imaginary part"));
    assert!(svg.contains("probability density"));
    assert_eq!(svg_count(temp.path()), 1);
}

#[test]
fn single_curve_wavefunction() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_solution(temp.path(), 2);

    stepplot()
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(temp.path().to_str().unwrap()))
        .stderr(predicate::str::is_empty());

    assert_eq!(svg_count(temp.path()), 1);
}

#[test]
fn missing_input_logs_one_error_and_exits_cleanly() {
    let temp = TempDir::new().expect("tempdir should be created");

    let output = stepplot()
        .current_dir(temp.path())
        .arg("--ratio")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error: stepplot::render_wavefunction_plot(): File not found",
        ))
        .stderr(predicate::str::contains(
            "Error: stepplot::render_ratio_plot(): File not found",
        ))
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 2);
    assert_eq!(svg_count(temp.path()), 0);
}

#[test]
fn ratio_plot_is_disabled_by_default() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_solution(temp.path(), 4);
    fs::write(temp.path().join(PROBABILITIES), "0.5,0,1\n1.5,0.9,0.1\n").unwrap();

    stepplot().current_dir(temp.path()).assert().success();

    assert!(!temp.path().join("Step_Probabilities.svg").exists());
}

#[test]
fn two_column_ratio_file_is_rejected() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_solution(temp.path(), 4);
    fs::write(temp.path().join(PROBABILITIES), "0.5,0\n1.5,0.9\n").unwrap();

    let output = stepplot()
        .current_dir(temp.path())
        .arg("--ratio")
        .assert()
        .success()
        .stderr(predicate::str::contains(concat!(
            "Error: stepplot::render_ratio_plot(): ",
            "Step_Probabilities.txt requires at least 3 columns, found 2",
        )))
        .get_output()
        .clone();

    assert_eq!(String::from_utf8(output.stderr).unwrap().lines().count(), 1);
    assert!(!temp.path().join("Step_Probabilities.svg").exists());
    assert!(temp.path().join("Step_Solution_E_gr_V.svg").exists());
}

#[test]
fn ratio_plot_renders_with_flag() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_solution(temp.path(), 4);
    fs::write(
        temp.path().join(PROBABILITIES),
        "0.5 , 0 , 1\n1.0 , 0 , 1\n1.5 , 0.93 , 0.07\n2.0 , 0.97 , 0.03\n",
    )
    .unwrap();

    stepplot()
        .current_dir(temp.path())
        .args(["--ratio", "--regime", "below"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step_Probabilities.svg"));

    let svg = fs::read_to_string(temp.path().join("Step_Probabilities.svg")).unwrap();
    assert!(svg.contains("transmission"));
    assert!(svg.contains("reflection"));
}

#[test]
fn malformed_input_is_reported() {
    let temp = TempDir::new().expect("tempdir should be created");
    fs::write(temp.path().join(SOLUTION), "0,1\n0.1,abc\n").unwrap();

    stepplot()
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("'abc' is not a number"));

    assert_eq!(svg_count(temp.path()), 0);
}

#[test]
fn writes_log_file_when_requested() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_solution(temp.path(), 4);
    let log = temp.path().join("run.log");

    stepplot()
        .current_dir(temp.path())
        .arg("--log")
        .arg(&log)
        .assert()
        .success();

    let text = fs::read_to_string(log).unwrap();
    assert!(text.contains("Starting stepplot"));
    assert!(text.contains("Wrote"));
    assert!(text.contains("stepplot exited"));
}
