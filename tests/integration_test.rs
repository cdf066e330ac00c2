//! Integration tests for check-circular-import using the library interface

use std::fs;
use std::path::Path;

use check_circular_import::analyzer::ImportAnalyzer;
use check_circular_import::config::IgnorePatterns;
use check_circular_import::detector::CycleDetector;
use check_circular_import::graph::ImportGraphBuilder;
use check_circular_import::reports::{AnalysisSummary, JsonReportGenerator, ReportGenerator};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

/// Write `(relative path, source)` pairs under a fresh project root
fn create_project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (relative, source) in files {
        write_file(temp_dir.path(), relative, source);
    }
    temp_dir
}

fn write_file(root: &Path, relative: &str, source: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, source).unwrap();
}

fn check(root: &Path, ignore: &IgnorePatterns) -> AnalysisSummary {
    let mut analyzer = ImportAnalyzer::new();
    analyzer.analyze_project(root, ignore, None, None).unwrap();

    let mut graph_builder = ImportGraphBuilder::new();
    graph_builder.build_from_analysis(&analyzer).unwrap();

    let mut detector = CycleDetector::new();
    detector.detect_cycles(graph_builder.graph()).unwrap();

    AnalysisSummary::new(&analyzer, graph_builder.graph(), &detector)
}

fn check_project(files: &[(&str, &str)]) -> AnalysisSummary {
    let temp_dir = create_project(files);
    check(temp_dir.path(), &IgnorePatterns::defaults())
}

fn cycles(summary: &AnalysisSummary) -> Vec<Vec<&str>> {
    summary
        .cycles
        .iter()
        .map(|cycle| cycle.iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn test_two_module_cycle() {
    let summary = check_project(&[("a.py", "import b\n"), ("b.py", "import a\n")]);

    assert_eq!(cycles(&summary), vec![vec!["a", "b"]]);
    assert_eq!(summary.stats.modules, 2);
    assert_eq!(summary.stats.dependencies, 2);
    assert_eq!(summary.stats.cycles_found, 1);
}

#[test]
fn test_three_module_cycle_reported_once() {
    let summary = check_project(&[
        ("x.py", "import y\n"),
        ("y.py", "import z\n"),
        ("z.py", "import x\n"),
    ]);

    assert_eq!(cycles(&summary), vec![vec!["x", "y", "z"]]);
}

#[test]
fn test_syntax_error_is_recorded_not_fatal() {
    let summary = check_project(&[("a.py", "import os\nclass Broken(:\n"), ("b.py", "x = 1\n")]);

    assert!(summary.cycles.is_empty());
    assert_eq!(summary.stats.modules, 2);
    assert_eq!(summary.parse_errors.len(), 1);
    assert_eq!(summary.parse_errors[0].module, "a");
    assert!(summary.parse_errors[0].message.contains("line 2"));
}

#[test]
fn test_python2_module_is_a_parse_error_without_edges() {
    let summary = check_project(&[
        ("a.py", "import b\n"),
        ("b.py", "import a\nprint \"legacy\"\n"),
    ]);

    assert!(summary.cycles.is_empty());
    assert_eq!(summary.stats.modules, 2);
    assert_eq!(summary.stats.dependencies, 0);
    assert_eq!(summary.parse_errors.len(), 1);
    assert_eq!(summary.parse_errors[0].module, "b");
    assert!(summary.parse_errors[0].message.contains("line 2"));
}

#[test]
fn test_acyclic_project_with_external_imports() {
    let summary = check_project(&[
        ("main.py", "import os\nimport sys\nfrom app import service\n"),
        ("app/__init__.py", ""),
        ("app/service.py", "import requests\nfrom app import models\n"),
        ("app/models.py", "from dataclasses import dataclass\n"),
    ]);

    assert!(summary.cycles.is_empty());
    assert_eq!(summary.stats.modules, 4);
    // main -> app, main -> app.service, app.service -> app, app.service -> app.models
    assert_eq!(summary.stats.dependencies, 4);
    assert_eq!(summary.stats.modules_with_dependencies, 2);
}

#[test]
fn test_default_ignores_hide_virtualenv_cycles() {
    let summary = check_project(&[
        ("app.py", "import lib\n"),
        ("lib.py", ""),
        ("venv/site.py", "import other\n"),
        ("venv/other.py", "import site\n"),
        ("pkg.egg-info/x.py", "import x\n"),
    ]);

    assert!(summary.cycles.is_empty());
    assert_eq!(summary.stats.modules, 2);
}

#[test]
fn test_user_ignore_patterns_extend_defaults() {
    let temp_dir = create_project(&[
        ("app.py", "import lib\n"),
        ("lib.py", ""),
        ("legacy/old.py", "import legacy.older\n"),
        ("legacy/older.py", "import legacy.old\n"),
        ("venv/ignored.py", "import ignored\n"),
    ]);

    let with_legacy = check(temp_dir.path(), &IgnorePatterns::defaults());
    assert_eq!(cycles(&with_legacy), vec![vec!["legacy.old", "legacy.older"]]);

    let ignore = IgnorePatterns::with_additional(["legacy"]).unwrap();
    let without_legacy = check(temp_dir.path(), &ignore);
    assert!(without_legacy.cycles.is_empty());
    assert_eq!(without_legacy.stats.modules, 2);
}

#[test]
fn test_relative_imports_inside_package() {
    let summary = check_project(&[
        ("pkg/__init__.py", ""),
        ("pkg/a.py", "from .b import helper\n"),
        ("pkg/b.py", "from . import a\n"),
    ]);

    assert_eq!(cycles(&summary), vec![vec!["pkg.a", "pkg.b"]]);
}

#[test]
fn test_nested_packages_and_parent_relative_imports() {
    let summary = check_project(&[
        ("app/__init__.py", ""),
        ("app/api/__init__.py", ""),
        ("app/api/views.py", "from app.core.models import User\n"),
        ("app/core/__init__.py", ""),
        ("app/core/models.py", "from ..api import views\n"),
    ]);

    assert_eq!(cycles(&summary), vec![vec!["app.api.views", "app.core.models"]]);
}

#[test]
fn test_relative_import_above_root_is_a_warning() {
    let temp_dir = create_project(&[("top.py", "from ... import anything\nimport other\n"), ("other.py", "")]);

    let mut analyzer = ImportAnalyzer::new();
    analyzer
        .analyze_project(temp_dir.path(), &IgnorePatterns::defaults(), None, None)
        .unwrap();

    assert!(analyzer.parse_errors().is_empty());
    assert_eq!(analyzer.resolution_warnings().len(), 1);
    assert_eq!(analyzer.resolution_warnings()[0].module, "top");
}

#[test]
fn test_imports_in_functions_and_try_blocks_count() {
    let summary = check_project(&[
        (
            "a.py",
            "try:\n    import b\nexcept ImportError:\n    b = None\n",
        ),
        ("b.py", "def late():\n    from a import thing\n    return thing\n"),
    ]);

    assert_eq!(cycles(&summary), vec![vec!["a", "b"]]);
}

#[test]
fn test_string_and_dynamic_imports_are_ignored() {
    let summary = check_project(&[
        ("a.py", "import importlib\nmod = importlib.import_module('b')\nTEXT = 'import b'\n"),
        ("b.py", "import a\n"),
    ]);

    assert!(summary.cycles.is_empty());
    assert_eq!(summary.stats.dependencies, 1);
}

#[test]
fn test_overlapping_cycles_are_all_distinct() {
    let summary = check_project(&[
        ("a.py", "import b\n"),
        ("b.py", "import a\nimport c\n"),
        ("c.py", "import b\n"),
    ]);

    assert_eq!(cycles(&summary), vec![vec!["a", "b"], vec!["b", "c"]]);
}

#[test]
fn test_self_import_is_reported() {
    let summary = check_project(&[("loop.py", "import loop\n")]);

    assert_eq!(cycles(&summary), vec![vec!["loop"]]);
}

#[test]
fn test_results_are_deterministic() {
    let temp_dir = create_project(&[
        ("m1.py", "import m2\nimport m4\n"),
        ("m2.py", "import m3\n"),
        ("m3.py", "import m1\n"),
        ("m4.py", "import m5\n"),
        ("m5.py", "import m4\nimport m1\n"),
    ]);

    let first = check(temp_dir.path(), &IgnorePatterns::defaults());
    for _ in 0..5 {
        let again = check(temp_dir.path(), &IgnorePatterns::defaults());
        assert_eq!(again.cycles, first.cycles);
        assert_eq!(again.stats, first.stats);
    }
}

#[test]
fn test_missing_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let mut analyzer = ImportAnalyzer::new();
    let result = analyzer.analyze_project(&missing, &IgnorePatterns::defaults(), None, None);

    assert!(result.is_err());
}

#[test]
fn test_json_report_round_trip() {
    let summary = check_project(&[
        ("a.py", "import b\n"),
        ("b.py", "import a\n"),
        ("c.py", "def oops(:\n"),
    ]);

    let report = JsonReportGenerator::new(false)
        .generate_report(&summary)
        .unwrap();
    let json: Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["stats"]["modules"], 3);
    assert_eq!(json["stats"]["dependencies"], 2);
    assert_eq!(json["stats"]["modules_with_dependencies"], 2);
    assert_eq!(json["stats"]["cycles_found"], 1);
    assert_eq!(json["cycles"], serde_json::json!([["a", "b"]]));
    assert_eq!(json["parse_errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["root"], summary.root.display().to_string());
}
