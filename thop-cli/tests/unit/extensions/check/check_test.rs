use super::*;
use crate::helpers::*;
use thop_core::models::Violation;

fn create_tiny_pairs(indices: &[usize]) -> Vec<CheckPair> {
    indices
        .iter()
        .map(|&index| CheckPair {
            instance_path: TINY_INSTANCE_PATH.to_string(),
            solution_path: get_tiny_solution_path(index),
        })
        .collect()
}

fn write_to_string(write: impl FnOnce(BufWriter<&mut Vec<u8>>) -> GenericResult<()>) -> String {
    let mut buffer = Vec::new();
    write(BufWriter::new(&mut buffer)).expect("cannot write");

    String::from_utf8(buffer).expect("not utf8")
}

#[test]
fn can_check_pairs_isolating_errors() {
    let pairs = create_tiny_pairs(&[1, 2, 3, 4]);

    let outcomes = check_solutions(&pairs, false, &Environment::new_silent(2)).expect("cannot check");

    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes.iter().map(|outcome| outcome.solution_path.as_str()).collect::<Vec<_>>(),
        pairs.iter().map(|pair| pair.solution_path.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(outcomes[0].result.as_ref().map(|verdict| verdict.is_feasible()), Ok(true));
    assert_eq!(
        outcomes[1].result.as_ref().map(|verdict| verdict.violations.clone()),
        Ok(vec![Violation::UncollectableItem])
    );
    assert_eq!(
        outcomes[2].result.as_ref().map(|verdict| verdict.tags()),
        Ok(vec!["capacity_exceeded", "time_exceeded"])
    );
    assert!(!outcomes[3].is_evaluated());
}

#[test]
fn can_report_missing_files() {
    let pairs = vec![
        CheckPair { instance_path: "missing.thop".to_string(), solution_path: get_tiny_solution_path(1) },
        CheckPair { instance_path: TINY_INSTANCE_PATH.to_string(), solution_path: "missing.thop.sol".to_string() },
    ];

    let outcomes = check_solutions(&pairs, false, &Environment::new_silent(1)).expect("cannot check");

    let errors = outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().err())
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("cannot open instance file 'missing.thop'"));
    assert!(errors[1].starts_with("cannot read solution file 'missing.thop.sol'"));
}

#[test]
fn can_write_report_lines() {
    let pairs = create_tiny_pairs(&[1, 4]);
    let outcomes = check_solutions(&pairs, false, &Environment::new_silent(1)).expect("cannot check");

    let report = write_to_string(|writer| write_report(&outcomes, writer));

    let lines = report.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("{TINY_INSTANCE_PATH:<30} {:<30} 30.000", get_tiny_solution_path(1)));
    assert!(lines[1].contains("cannot evaluate: cannot read solution"));
    assert!(lines[1].ends_with("line 1: unbalanced brackets: '[2, 3, 4'"));
}

#[test]
fn can_write_json_records() {
    let pairs = create_tiny_pairs(&[1, 2, 4]);
    let outcomes = check_solutions(&pairs, false, &Environment::new_silent(1)).expect("cannot check");

    let json = write_to_string(|writer| write_json(&outcomes, writer));

    let records: serde_json::Value = serde_json::from_str(&json).expect("invalid json");
    let records = records.as_array().expect("not an array");
    assert_eq!(records.len(), 3);

    assert_eq!(records[0]["feasible"], true);
    assert_eq!(records[0]["verdict"]["score"]["profit"], 30.);
    assert_eq!(records[0]["instance"], TINY_INSTANCE_PATH);

    assert_eq!(records[1]["feasible"], false);
    assert_eq!(records[1]["verdict"]["violations"][0]["type"], "uncollectable_item");
    assert!(records[1].get("error").is_none());

    assert_eq!(records[2]["feasible"], false);
    assert!(records[2].get("verdict").is_none());
    assert!(records[2]["error"].as_str().is_some_and(|err| err.contains("unbalanced brackets")));
}

#[test]
fn can_draw_only_feasible_solutions() {
    let tmpdir = tempfile::tempdir().expect("cannot create temp dir");
    let copy_solution = |index: usize| {
        let path = tmpdir.path().join(format!("solution_{index}.sol"));
        std::fs::copy(get_tiny_solution_path(index), &path).expect("cannot copy solution");
        path.display().to_string()
    };
    let pairs = [1, 2]
        .iter()
        .map(|&index| CheckPair { instance_path: TINY_INSTANCE_PATH.to_string(), solution_path: copy_solution(index) })
        .collect::<Vec<_>>();

    check_solutions(&pairs, true, &Environment::new_silent(1)).expect("cannot check");

    assert!(std::path::Path::new(&get_drawing_path(&pairs[0].solution_path)).exists());
    assert!(!std::path::Path::new(&get_drawing_path(&pairs[1].solution_path)).exists());
}
