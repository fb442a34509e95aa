use std::io::Cursor;
use xdebug_trace_reduce::parser::tokenizer::{is_header_line, is_root_frame};
use xdebug_trace_reduce::parser::{extract_metric_pair, indentation_count, MetricPair, TraceLineReader};

#[test]
fn test_indentation_count_scenario_line() {
    assert_eq!(indentation_count(" {main}()  0.0010 131072"), 4);
}

#[test]
fn test_indentation_count_includes_inner_spacing() {
    // Same depth in the call tree, different count because of argument spacing
    let plain = "    0.0019     412800       -> f() /a.php:7";
    let spaced = "    0.0019     412800       -> f(class Closure {  }) /a.php:7";
    assert!(indentation_count(spaced) > indentation_count(plain));
}

#[test]
fn test_extract_metric_pair_xdebug_columns() {
    let line = "    0.0031     420928       -> App->route() /var/www/app.php:21";
    assert_eq!(extract_metric_pair(line), Some(MetricPair::new(0.0031, 420928)));
}

#[test]
fn test_extract_metric_pair_skips_leading_noise() {
    let line = "v2 0.0031 420928 -> f()";
    assert_eq!(extract_metric_pair(line), Some(MetricPair::new(0.0031, 420928)));
}

#[test]
fn test_extract_metric_pair_missing() {
    assert_eq!(extract_metric_pair("                           >=> NULL"), None);
    assert_eq!(extract_metric_pair(""), None);
}

#[test]
fn test_markers() {
    assert!(is_header_line("TRACE END   [2024-05-14 09:12:03]", "TRACE"));
    assert!(!is_header_line("    0.0002 392640 -> {main}()", "TRACE"));
    assert!(is_root_frame("    0.0002 392640 -> {main}() /index.php:0", "{main}()"));
    assert!(!is_root_frame("    0.0002 392640 -> main() /index.php:0", "{main}()"));
}

#[test]
fn test_reader_over_fixture() {
    let data = include_str!("fixtures/sample.xt");
    let lines: Vec<String> = TraceLineReader::new(Cursor::new(data))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(lines.len(), 12);
    assert!(lines[0].starts_with("TRACE START"));
    assert_eq!(lines[11], "");
}
