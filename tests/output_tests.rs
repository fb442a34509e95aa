use pretty_assertions::assert_eq;
use std::path::Path;
use xdebug_trace_reduce::output::{read_report, render_summary, write_banner, write_record, write_report};
use xdebug_trace_reduce::parser::{ReducedLine, ReductionReport, ReductionStats};

fn record(delta_time: f64, delta_memory: i64, line: &str) -> ReducedLine {
    ReducedLine {
        delta_time,
        delta_memory,
        line: line.to_string(),
    }
}

#[test]
fn test_text_output_layout() {
    let mut out = Vec::new();

    write_banner(&mut out, Path::new("trace.xt"), 1).unwrap();
    write_record(&mut out, &record(0.0011, 401224, "    0.0011     401224     -> f()")).unwrap();
    write_record(&mut out, &record(0.0036, -12608, "    0.0061     405504     -> exit()")).unwrap();

    let expected = "Processing trace.xt with stack frame depth of 1\n\
                    \n\
                    0.0011           401224     0.0011     401224     -> f()\n\
                    0.0036           -12608     0.0061     405504     -> exit()\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_summary_lists_counters() {
    let stats = ReductionStats {
        lines_read: 12,
        skipped: 3,
        before_baseline: 1,
        retained: 4,
        filtered: 4,
        malformed: 0,
    };
    let summary = render_summary(&stats, Some(14), Some(16));

    assert!(summary.contains("Baseline:        14"));
    assert!(summary.contains("Threshold:       16"));
    assert!(summary.contains("Lines read:      12"));
    assert!(summary.contains("Filtered:        4"));
}

#[test]
fn test_report_round_trip_through_file() {
    let report = ReductionReport {
        version: "1.0.0".to_string(),
        trace_file: "trace.xt".to_string(),
        depth: 1,
        baseline: None,
        threshold: None,
        records: Vec::new(),
        stats: ReductionStats::default(),
        generated_at: "2024-01-01T00:00:00Z".to_string(),
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.baseline, None);
    assert!(loaded.records.is_empty());
    assert_eq!(loaded.generated_at, report.generated_at);
}
