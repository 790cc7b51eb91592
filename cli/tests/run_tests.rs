use clap::Parser;
use dupdetect::args::Args;
use dupdetect::{run, ExitStatus, InputError};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const PARSER_PY: &str = "def parse(tokens):\n    out = []\n    for tok in tokens:\n        out.append(tok.strip())\n    return out\n";
const RENDER_C: &str = "void render(struct frame *f) {\n    draw(f->pixels);\n    flush(f);\n}\n";
const MATH_JAVA: &str = "class MathUtil { static int square(int v) { return v * v; } }\n";

fn project() -> TempDir {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.py"), PARSER_PY).unwrap();
    fs::write(src.join("b.py"), PARSER_PY).unwrap();
    fs::write(src.join("render.c"), RENDER_C).unwrap();
    fs::write(src.join("MathUtil.java"), MATH_JAVA).unwrap();
    fs::write(src.join("README.md"), "# not source").unwrap();
    dir
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn run_args(argv: &[&str]) -> (anyhow::Result<ExitStatus>, String) {
    let mut full = vec!["dupdetect"];
    full.extend_from_slice(argv);
    let args = Args::parse_from(full);
    let mut buf = Vec::new();
    let status = run(&args, &mut buf);
    (status, String::from_utf8(buf).unwrap())
}

fn similarity(json: &Value, file: &str, other: &str) -> Option<f64> {
    json["files"]
        .as_array()?
        .iter()
        .find(|f| f["identifier"] == file)?["entries"]
        .as_array()?
        .iter()
        .find(|e| e["identifier"] == other)?["similarity"]
        .as_f64()
}

#[test]
fn json_report_flags_the_copied_file() {
    let dir = project();
    let root = path_str(dir.path());
    let (status, out) = run_args(&["-d", root.as_str(), "--project-root-dir", root.as_str(), "--json"]);
    assert_eq!(status.unwrap(), ExitStatus::Success);

    let json: Value = serde_json::from_str(&out).unwrap();
    let files = json["files"].as_array().unwrap();
    let names: Vec<&str> = files.iter().map(|f| f["identifier"].as_str().unwrap()).collect();
    // corpus order, README.md excluded by extension
    assert_eq!(names, vec!["src/MathUtil.java", "src/a.py", "src/b.py", "src/render.c"]);

    let copy = similarity(&json, "src/a.py", "src/b.py").unwrap();
    assert!((copy - 100.0).abs() < 0.01);
    let other = similarity(&json, "src/a.py", "src/render.c").unwrap();
    assert!(other < copy);
    assert!(similarity(&json, "src/a.py", "src/a.py").is_none());
}

#[test]
fn fail_threshold_sets_exit_status() {
    let dir = project();
    let root = path_str(dir.path());
    let (status, out) = run_args(&["-d", root.as_str(), "-t", "90"]);
    assert_eq!(status.unwrap(), ExitStatus::ThresholdExceeded);
    assert!(out.contains("Code duplication threshold exceeded. Please consult logs."));
    assert_eq!(ExitStatus::ThresholdExceeded.code(), 2);
}

#[test]
fn ignore_threshold_trims_report() {
    let dir = project();
    let root = path_str(dir.path());
    let (status, out) =
        run_args(&["-d", root.as_str(), "--project-root-dir", root.as_str(), "-j", "--ignore-threshold", "50"]);
    assert_eq!(status.unwrap(), ExitStatus::Success);
    let json: Value = serde_json::from_str(&out).unwrap();
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    for file in files {
        for entry in file["entries"].as_array().unwrap() {
            assert!(entry["raw_similarity"].as_f64().unwrap() >= 50.0);
        }
    }
}

#[test]
fn text_report_is_written_per_file() {
    colored::control::set_override(false);
    let dir = project();
    let root = path_str(dir.path());
    let (status, out) = run_args(&["-d", root.as_str(), "--project-root-dir", root.as_str()]);
    assert_eq!(status.unwrap(), ExitStatus::Success);
    assert!(out.contains("Code duplication probability for src/a.py"));
    assert!(out.contains("Similarity (%)"));
    assert!(out.contains("100.00"));
    assert!(!out.contains("threshold exceeded"));
}

#[test]
fn csv_output_with_line_counts() {
    let dir = project();
    let root = path_str(dir.path());
    let csv_path = dir.path().join("report.csv");
    let csv_arg = path_str(&csv_path);
    let (status, _) = run_args(&[
        "-d",
        root.as_str(),
        "--project-root-dir",
        root.as_str(),
        "-j",
        "--show-loc",
        "--csv-output",
        csv_arg.as_str(),
    ]);
    assert_eq!(status.unwrap(), ExitStatus::Success);
    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("File A,#LoC A,File B,#LoC B,Similarity"));
    assert!(csv.lines().any(|l| l.starts_with("src/a.py,5,src/b.py,5,")));
}

#[test]
fn selected_files_and_ignore_list() {
    let dir = project();
    let a = path_str(&dir.path().join("src/a.py"));
    let b = path_str(&dir.path().join("src/b.py"));
    let c = path_str(&dir.path().join("src/render.c"));
    let (status, out) = run_args(&["-f", a.as_str(), b.as_str(), c.as_str(), "--ignore-files", c.as_str(), "-j"]);
    assert_eq!(status.unwrap(), ExitStatus::Success);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert!(!out.contains("render.c"));
}

#[test]
fn only_code_ignores_comment_differences() {
    let dir = tempdir().unwrap();
    let with_docs = "def total(xs):\n    \"\"\"Sum all the values.\"\"\"\n    acc = 0\n    for x in xs:\n        acc += x  # accumulate\n    return acc\n";
    let bare = "def total(xs):\n    acc = 0\n    for x in xs:\n        acc += x\n    return acc\n";
    fs::write(dir.path().join("one.py"), with_docs).unwrap();
    fs::write(dir.path().join("two.py"), bare).unwrap();
    fs::write(dir.path().join("three.py"), "import os\nprint(os.getcwd())\n").unwrap();
    let root = path_str(dir.path());

    let (_, raw) = run_args(&["-d", root.as_str(), "--project-root-dir", root.as_str(), "-j"]);
    let raw: Value = serde_json::from_str(&raw).unwrap();
    let (_, stripped) = run_args(&["-d", root.as_str(), "--project-root-dir", root.as_str(), "-j", "--only-code"]);
    let stripped: Value = serde_json::from_str(&stripped).unwrap();

    let before = similarity(&raw, "one.py", "two.py").unwrap();
    let after = similarity(&stripped, "one.py", "two.py").unwrap();
    assert!(before < 100.0);
    assert!((after - 100.0).abs() < 0.01);
}

#[test]
fn single_file_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lonely.c"), "int main(void) { return 0; }").unwrap();
    let root = path_str(dir.path());
    let (status, out) = run_args(&["-d", root.as_str()]);
    let err = status.unwrap_err();
    assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::NotEnoughSources)));
    assert!(out.is_empty());
}

#[test]
fn missing_directory_is_bad_input() {
    let dir = tempdir().unwrap();
    let missing = path_str(&dir.path().join("missing"));
    let (status, _) = run_args(&["-d", missing.as_str()]);
    let err = status.unwrap_err();
    assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::NotADirectory(_))));
}
