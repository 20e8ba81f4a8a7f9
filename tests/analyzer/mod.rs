use avlbench::{
    analyzer::{Analyzer, SHOWN_IN_ORDER},
    set::SequentialSet,
    student::Student,
    util::random::distinct_students,
};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[test]
fn test_analyzer_run() {
    let mut rng = StdRng::seed_from_u64(3);
    let students = distinct_students(&mut rng, 200);

    let mut analyzer = Analyzer::new(students.clone(), Some(5));
    let report = analyzer.run(500, 50);

    assert_eq!(report.insertion.records, 200);
    assert_eq!(report.insertion.size, 200);

    assert_eq!(report.search.searches, 500);
    assert_eq!(report.search.found, 500);
    let (example, found) = report.search.example.clone().unwrap();
    assert!(found);
    assert!(students.contains(&example));

    assert_eq!(report.traversal.len, 200);
    let first: Vec<&str> = report
        .traversal
        .first
        .iter()
        .map(|student| student.student_id.as_str())
        .collect();
    assert_eq!(first.len(), SHOWN_IN_ORDER);
    assert_eq!(first, vec!["S0000000", "S0000001", "S0000002", "S0000003", "S0000004"]);

    assert_eq!(report.removal.attempted, 50);
    assert_eq!(report.removal.removed, 50);
    assert_eq!(report.removal.size, 150);

    // the first records in load order are gone
    for student in &students[..50] {
        assert!(!analyzer.tree().search(student));
    }
    for student in &students[50..] {
        assert!(analyzer.tree().search(student));
    }
    assert_eq!(analyzer.tree().verify(), Ok(()));

    let summary = report.to_string();
    assert!(summary.contains("found 500 of 500"));
    assert!(summary.contains("removed 50 of 50, tree size 150"));
}

#[test]
fn test_analyzer_duplicates_and_short_list() {
    let students = vec![
        Student::with_id("S3"),
        Student::with_id("S1"),
        Student::with_id("S3"),
        Student::with_id("S2"),
    ];

    let mut analyzer = Analyzer::new(students, Some(1));
    let report = analyzer.run(10, 100);

    assert_eq!(report.insertion.records, 4);
    assert_eq!(report.insertion.size, 3);
    assert_eq!(report.search.found, 10);
    assert_eq!(report.traversal.len, 3);

    // the second S3 is already gone when its turn comes
    assert_eq!(report.removal.attempted, 4);
    assert_eq!(report.removal.removed, 3);
    assert_eq!(report.removal.size, 0);
    assert!(analyzer.tree().is_empty());
}

#[test]
fn test_analyzer_empty() {
    let mut analyzer = Analyzer::new(Vec::new(), None);
    let report = analyzer.run(100, 100);

    assert_eq!(report.insertion.size, 0);
    assert_eq!(report.search.searches, 0);
    assert_eq!(report.search.elapsed, Duration::ZERO);
    assert!(report.search.example.is_none());
    assert_eq!(report.traversal.len, 0);
    assert_eq!(report.removal.attempted, 0);
    assert_eq!(report.avg_insertion_ms(), 0.0);
    assert_eq!(report.avg_search_ms(), 0.0);
    assert_eq!(report.avg_removal_ms(), 0.0);
}

#[test]
fn test_analyzer_bundled_dataset() {
    let dataset = avlbench::dataset::load("data/dataset.csv").unwrap();
    let records = dataset.students.len();

    let mut analyzer = Analyzer::new(dataset.students, Some(0));
    let report = analyzer.run(100, 10);

    assert_eq!(report.insertion.size, records);
    assert_eq!(report.traversal.len, records);
    assert_eq!(report.removal.size, records - 10);
}
