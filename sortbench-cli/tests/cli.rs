use sortbench::{FixedWorkload, RandomWorkload};
use sortbench_cli::{
    commands::interactive::{session, Choice},
    config::Profile,
};

use crate::helper::TestDir;

mod helper;

fn quick_profile() -> Profile {
    Profile {
        iterations: 10,
        ..Default::default()
    }
}

fn run_session(input: &str) -> (Choice, String) {
    let mut workload = FixedWorkload(vec![5, 3, 8, 1, 9, 2]);
    let mut output = vec![];
    let choice = session(
        &quick_profile(),
        &mut workload,
        &mut input.as_bytes(),
        &mut output,
    )
    .unwrap();
    (choice, String::from_utf8(output).unwrap())
}

#[test]
fn quitting_prints_no_results() {
    let (choice, output) = run_session("Q\n");
    assert_eq!(choice, Choice::Quit);
    assert!(output.contains("Your list is: [5, 3, 8, 1, 9, 2]"));
    assert!(output.contains("The sorted list is: [1, 2, 3, 5, 8, 9]"));
    assert!(!output.contains("Bubble Sort"));
    assert!(output.contains("Thank you for using the Algorithm Comparator!"));
}

#[test]
fn running_reports_every_algorithm() {
    let (choice, output) = run_session("nope\nrun\n");
    assert_eq!(choice, Choice::Run);
    assert!(output.contains("That was not a valid input. Please try again."));
    for name in [
        "Bubble Sort",
        "Insertion Sort",
        "Selection Sort",
        "Quick Sort",
        "Merge Sort",
        "Heap Sort",
        "Radix Sort",
        "Counting Sort",
        "Shell Sort",
        "Bucket Sort",
    ] {
        let line = output
            .lines()
            .find(|l| l.starts_with(&format!("{name}: ")))
            .unwrap_or_else(|| panic!("missing {name} in {output}"));
        assert!(line.ends_with(" s"), "{line}");
    }
    // Results come out in catalogue order
    let bubble = output.find("Bubble Sort:").unwrap();
    let bucket = output.find("Bucket Sort:").unwrap();
    assert!(bubble < bucket);
}

#[test]
fn failing_algorithms_are_reported_inline() {
    let mut workload = FixedWorkload(vec![4, -1, 2]);
    let mut output = vec![];
    session(
        &quick_profile(),
        &mut workload,
        &mut "r\n".as_bytes(),
        &mut output,
    )
    .unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Counting Sort: failed (invalid input: negative value -1 at index 1)"));
    assert!(output.contains("Merge Sort: "));
}

#[test]
fn eof_ends_the_session() {
    let mut workload = RandomWorkload::seeded(10, 1..=100, 1);
    let mut output = vec![];
    let choice = session(
        &quick_profile(),
        &mut workload,
        &mut "".as_bytes(),
        &mut output,
    )
    .unwrap();
    assert_eq!(choice, Choice::Quit);
}

#[test]
fn run_writes_csv() -> anyhow::Result<()> {
    let dir = TestDir::new()?;
    let config = dir.file(
        "sortbench.toml",
        r#"
        [profiles.default]
        iterations = 5
        "#,
    )?;
    let csv = dir.path().join("results.csv");
    let args = [
        "run",
        "--config",
        config.to_str().unwrap(),
        "--seed",
        "3",
        "--format",
        "yaml",
        "--output-csv",
        csv.to_str().unwrap(),
    ];
    dir.sortbench(&args)?;
    dir.sortbench(&args)?;
    let content = std::fs::read_to_string(&csv)?;
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(
        lines[0],
        "runid,algorithm,len,iterations,policy,elapsed_ms,normalized"
    );
    assert_eq!(lines.len(), 1 + 2 * 10);
    assert!(lines[1].contains(",bubble,10,5,reuse,"));
    Ok(())
}

#[test]
fn run_fails_when_an_algorithm_fails() -> anyhow::Result<()> {
    let dir = TestDir::new()?;
    let config = dir.file(
        "sortbench.toml",
        r#"
        [profiles.negative]
        iterations = 2
        algorithms = ["merge", "counting"]

        [profiles.negative.workload]
        min = -50
        max = -1
        "#,
    )?;
    let err = dir
        .sortbench(&[
            "run",
            "--config",
            config.to_str().unwrap(),
            "--profile",
            "negative",
        ])
        .unwrap_err();
    assert_eq!(err.to_string(), "1 of 2 algorithms failed");
    Ok(())
}

#[test]
fn run_rejects_unknown_profile() -> anyhow::Result<()> {
    let dir = TestDir::new()?;
    let config = dir.file("sortbench.toml", "[profiles.default]\n")?;
    let err = dir
        .sortbench(&["run", "--config", config.to_str().unwrap(), "--profile", "nope"])
        .unwrap_err();
    assert!(err.to_string().contains("nope"));
    Ok(())
}
