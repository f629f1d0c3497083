use super::*;

const TINY_INSTANCE_PATH: &str = "../data/instances/tiny_01_unc_01_01.thop";

fn get_solution_path(index: usize) -> String {
    format!("../data/solutions/tiny_01_unc_01_01_{index:02}.thop.sol")
}

fn get_check_matches(args: &[&str]) -> ArgMatches {
    let args = ["check", "-q"].iter().chain(args.iter()).copied().collect::<Vec<_>>();

    get_check_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_check_many_pairs_writing_json() {
    let tmpdir = tempfile::tempdir().unwrap();
    let out_path = tmpdir.path().join("result.json").display().to_string();
    let (solution_1, solution_2) = (get_solution_path(1), get_solution_path(2));
    let matches = get_check_matches(&[
        "-i",
        TINY_INSTANCE_PATH,
        "-s",
        &solution_1,
        "-i",
        TINY_INSTANCE_PATH,
        "-s",
        &solution_2,
        "--json",
        "-o",
        &out_path,
    ]);

    let result = run_check(&matches);

    assert_eq!(result, Ok(()));
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json.as_array().map(|records| records.len()), Some(2));
    assert_eq!(json[0]["feasible"], true);
    assert_eq!(json[1]["feasible"], false);
}

#[test]
fn can_write_report_lines_to_file() {
    let tmpdir = tempfile::tempdir().unwrap();
    let out_path = tmpdir.path().join("report.txt").display().to_string();
    let solution = get_solution_path(3);
    let matches = get_check_matches(&["-i", TINY_INSTANCE_PATH, "-s", &solution, "-o", &out_path]);

    run_check(&matches).unwrap();

    let report = std::fs::read_to_string(&out_path).unwrap();
    assert!(report.trim_end().ends_with("infeasible solution [capacity exceeded] [time exceeded] 719.469347 50.000000"));
}

#[test]
fn can_fail_when_some_pair_cannot_be_evaluated() {
    let tmpdir = tempfile::tempdir().unwrap();
    let out_path = tmpdir.path().join("report.txt").display().to_string();
    let (solution_1, solution_4) = (get_solution_path(1), get_solution_path(4));
    let matches = get_check_matches(&[
        "-i",
        TINY_INSTANCE_PATH,
        "-s",
        &solution_1,
        "-i",
        TINY_INSTANCE_PATH,
        "-s",
        &solution_4,
        "-o",
        &out_path,
    ]);

    let result = run_check(&matches);

    assert_eq!(result, Err("1 of 2 solution(s) could not be evaluated".to_string()));
    assert_eq!(std::fs::read_to_string(&out_path).unwrap().lines().count(), 2);
}

#[test]
fn can_reject_mismatched_pairs() {
    let solution = get_solution_path(1);
    let matches = get_check_matches(&["-i", TINY_INSTANCE_PATH, "-i", TINY_INSTANCE_PATH, "-s", &solution]);

    let result = run_check(&matches);

    assert_eq!(
        result,
        Err("amount of instance and solution files should match, got 2 instance(s) and 1 solution(s)".to_string())
    );
}
