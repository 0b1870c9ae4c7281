// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end enumeration runs with pinned per-depth counts.

use ballsort_census::config::EnumerationConfig;
use ballsort_census::enumerate::{
    DepthObserver, DepthReport, LevelEnumerator, MemorySnapshot, ReportPrinter,
};
use ballsort_census::position::Position;

fn counts(reports: &[DepthReport]) -> Vec<(usize, usize)> {
    reports.iter().map(|r| (r.total, r.starts)).collect()
}

fn run(config: EnumerationConfig) -> Vec<DepthReport> {
    LevelEnumerator::new(config).unwrap().run(&mut [])
}

#[test]
fn test_one_color_one_spare() {
    let reports = run(EnumerationConfig::new(1, 1, 1));
    assert_eq!(counts(&reports), vec![(1, 1), (1, 0), (1, 0), (0, 0)]);
    let depths: Vec<usize> = reports.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 3]);
}

#[test]
fn test_two_colors_one_spare() {
    let reports = run(EnumerationConfig::new(2, 1, 2));
    assert_eq!(
        counts(&reports),
        vec![
            (1, 1),
            (1, 0),
            (3, 0),
            (6, 1),
            (12, 0),
            (16, 3),
            (16, 6),
            (15, 5),
            (11, 4),
            (4, 1),
            (2, 1),
            (0, 0),
        ]
    );
    assert_eq!(reports.last().map(|r| r.visited), Some(87));
}

#[test]
fn test_two_colors_two_spares() {
    let reports = run(EnumerationConfig::new(2, 2, 2));
    assert_eq!(
        counts(&reports),
        vec![
            (1, 1),
            (1, 0),
            (5, 0),
            (11, 1),
            (25, 0),
            (39, 3),
            (42, 6),
            (33, 5),
            (8, 7),
            (1, 0),
            (0, 0),
        ]
    );
}

#[test]
fn test_examples_are_start_positions() {
    for report in run(EnumerationConfig::new(2, 1, 1)) {
        match &report.example {
            Some(example) => {
                assert!(report.starts > 0);
                assert!(example.is_start_position(1));
                assert_eq!(example.color_counts(), vec![4, 4, 4]);
            }
            None => assert_eq!(report.starts, 0),
        }
    }
}

#[test]
fn test_parallel_run_matches_serial_run() {
    let serial = run(EnumerationConfig::new(3, 1, 1));
    let parallel = run(EnumerationConfig::new(3, 1, 3).with_parallel_threshold(0));
    assert_eq!(serial, parallel);

    let totals: Vec<usize> = serial.iter().map(|r| r.total).collect();
    assert_eq!(
        totals,
        vec![1, 1, 3, 10, 37, 98, 205, 340, 516, 684, 798, 845, 813, 648, 423, 222, 65, 13, 3, 0]
    );
    let starts: usize = serial.iter().map(|r| r.starts).sum();
    assert_eq!(starts, 759);
}

#[test]
fn test_report_printer_output() {
    let mut enumerator = LevelEnumerator::new(EnumerationConfig::new(1, 1, 1)).unwrap();
    let mut printer = ReportPrinter::new(Vec::new());
    enumerator.run(&mut [&mut printer]);
    let text = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(
        text,
        "Depth  0:        1 total        1 starts \n\
         Example:\n|    |\n|AAAA|\n\n\
         Depth  1:        1 total        0 starts \n\
         Depth  2:        1 total        0 starts \n\
         Depth  3:        0 total        0 starts \n"
    );
}

#[derive(Default)]
struct DepthRecorder {
    depths: Vec<usize>,
    frontier_sizes: Vec<usize>,
}

impl DepthObserver for DepthRecorder {
    fn on_depth_completed(&mut self, report: &DepthReport, enumerator: &LevelEnumerator) {
        self.depths.push(report.depth);
        self.frontier_sizes.push(enumerator.frontier().len());
    }
}

#[test]
fn test_observer_sees_every_depth() {
    let mut recorder = DepthRecorder::default();
    LevelEnumerator::new(EnumerationConfig::new(2, 1, 1))
        .unwrap()
        .run(&mut [&mut recorder]);
    assert_eq!(recorder.depths, (0..=11).collect::<Vec<_>>());
    assert_eq!(recorder.frontier_sizes[3], 6);
    assert_eq!(recorder.frontier_sizes[11], 0);
}

#[test]
fn test_memory_snapshot_files() {
    let dir = std::env::temp_dir().join(format!("ballsort-snapshot-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let prefix = dir.join("mem");

    let mut snapshot = MemorySnapshot::new(&prefix);
    LevelEnumerator::new(EnumerationConfig::new(1, 1, 1))
        .unwrap()
        .run(&mut [&mut snapshot]);

    for depth in 0..=3 {
        let contents = std::fs::read_to_string(snapshot.path_for(depth)).unwrap();
        assert!(contents.starts_with(&format!("depth: {}\n", depth)));
    }
    let last = std::fs::read_to_string(snapshot.path_for(3)).unwrap();
    assert!(last.contains("visited_keys: 3\n"));
    assert!(last.contains("frontier_positions: 0\n"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_frontier_positions_are_canonical() {
    let mut canonicalizer = ballsort_census::Canonicalizer::new();
    let mut enumerator = LevelEnumerator::new(EnumerationConfig::new(2, 2, 1)).unwrap();
    while enumerator.step().is_some() {
        for position in enumerator.frontier() {
            let again: Position = canonicalizer.canonical_form(position, 2);
            assert_eq!(&again, position);
        }
    }
}
