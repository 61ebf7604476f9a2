use selq::convert::{json_to_value, parse_json, value_to_json};
use selq::executor::{QueryError, Record, execute, run, try_run};
use selq::output::to_canonical;
use selq::{ParseError, Value, parse_query};

const PEOPLE: &str = r#"[
    {"name": "Alice", "age": 30, "score": 95},
    {"name": "Bob", "age": 22, "score": 66},
    {"name": "Carol", "age": 45, "score": 88}
]"#;

fn people() -> Value {
    parse_json(PEOPLE).unwrap()
}

fn record(pairs: Vec<(&str, Value)>) -> Record {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get("name").map(to_canonical).unwrap_or_default())
        .collect()
}

// ============================================================================
// Filtering and projection
// ============================================================================

#[test]
fn test_select_where_greater_than() {
    let records = run("SELECT name,score FROM data WHERE age > 25", &people());

    assert_eq!(
        records,
        vec![
            record(vec![("name", "Alice".into()), ("score", 95.0.into())]),
            record(vec![("name", "Carol".into()), ("score", 88.0.into())]),
        ]
    );
}

#[test]
fn test_record_columns_follow_select_order() {
    let records = run("SELECT score,name FROM data WHERE age < 25", &people());

    assert_eq!(records.len(), 1);
    let columns: Vec<&str> = records[0].keys().map(String::as_str).collect();
    assert_eq!(columns, vec!["score", "name"]);
}

#[test]
fn test_no_where_returns_every_row() {
    let records = run("SELECT name FROM data", &people());
    assert_eq!(names(&records), vec!["\"Alice\"", "\"Bob\"", "\"Carol\""]);
}

#[test]
fn test_equality_on_strings() {
    let records = run(r#"SELECT age FROM data WHERE name == "Bob""#, &people());
    assert_eq!(records, vec![record(vec![("age", 22.0.into())])]);
}

#[test]
fn test_equality_number_against_number_literal() {
    let records = run("SELECT name FROM data WHERE age == 45", &people());
    assert_eq!(names(&records), vec!["\"Carol\""]);
}

#[test]
fn test_missing_field_projects_null() {
    let records = run("SELECT name,email FROM data WHERE age > 40", &people());
    assert_eq!(
        records,
        vec![record(vec![("name", "Carol".into()), ("email", Value::Null)])]
    );
}

#[test]
fn test_duplicate_fields_collapse() {
    let records = run("SELECT name,name FROM data WHERE age > 40", &people());
    assert_eq!(records, vec![record(vec![("name", "Carol".into())])]);
}

#[test]
fn test_dropped_where_projects_all_rows() {
    let records = run("SELECT x FROM data WHERE y", &people());

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r == &record(vec![("x", Value::Null)])));
}

// ============================================================================
// Only an explicit false removes a row
// ============================================================================

#[test]
fn test_type_mismatch_keeps_row() {
    // age > "old" is Null for every row, so nothing is filtered out
    let records = run("SELECT name FROM data WHERE age > old", &people());
    assert_eq!(records.len(), 3);
}

#[test]
fn test_missing_predicate_field_keeps_row() {
    let root = parse_json(r#"[{"name": "Alice", "age": 30}, {"name": "Dan"}]"#).unwrap();
    let records = run("SELECT name FROM data WHERE age > 25", &root);
    assert_eq!(names(&records), vec!["\"Alice\"", "\"Dan\""]);
}

#[test]
fn test_unsupported_operator_keeps_every_row() {
    let records = run("SELECT name FROM data WHERE age >= 100", &people());
    assert_eq!(records.len(), 3);
}

#[test]
fn test_and_filters_on_booleans() {
    let root = parse_json(
        r#"[{"id": 1, "active": true}, {"id": 2, "active": false}, {"id": 3, "active": "yes"}]"#,
    )
    .unwrap();

    // The literal `true` is a string, so `&&` never sees two booleans
    let records = run("SELECT id FROM data WHERE active && true", &root);
    assert_eq!(records.len(), 3);
}

#[test]
fn test_equality_on_booleans_uses_rendering() {
    let root = parse_json(r#"[{"id": 1, "active": true}, {"id": 2, "active": false}]"#).unwrap();

    // `true` (boolean) renders as `true`, the literal renders as `"true"`
    let records = run("SELECT id FROM data WHERE active == true", &root);
    assert_eq!(records.len(), 0);
}

#[test]
fn test_non_object_rows() {
    let root = parse_json(r#"[1, "two", null, {"a": 3}]"#).unwrap();
    let records = run("SELECT a FROM data WHERE a > 2", &root);

    assert_eq!(
        records,
        vec![
            record(vec![("a", Value::Null)]),
            record(vec![("a", Value::Null)]),
            record(vec![("a", Value::Null)]),
            record(vec![("a", 3.0.into())]),
        ]
    );
}

#[test]
fn test_double_space_in_predicate_returns_every_row() {
    let records = run("SELECT name FROM data WHERE age  > 25", &people());
    assert_eq!(names(&records), vec!["\"Alice\"", "\"Bob\"", "\"Carol\""]);
}

#[test]
fn test_tab_after_where_returns_every_row() {
    let records = run("SELECT name FROM data WHERE\tage > 25", &people());
    assert_eq!(records.len(), 3);
}

#[test]
fn test_equality_past_scientific_cutover() {
    let root = parse_json(r#"[{"id": 1, "big": 1e16}, {"id": 2, "big": 1e15}]"#).unwrap();

    // Both sides are numbers, so both render `1e16`
    let records = run("SELECT id FROM data WHERE big == 10000000000000000", &root);
    assert_eq!(records, vec![record(vec![("id", 1.0.into())])]);
}

// ============================================================================
// Failure handling
// ============================================================================

#[test]
fn test_unparseable_query_gives_nothing() {
    assert!(run("SELECT name", &people()).is_empty());
    assert!(run("", &people()).is_empty());
    assert!(run("FETCH name FROM data", &people()).is_empty());
}

#[test]
fn test_non_array_root_gives_nothing() {
    let root = parse_json(r#"{"name": "Alice"}"#).unwrap();
    assert!(run("SELECT name FROM data", &root).is_empty());
    assert!(run("SELECT name FROM data", &Value::Null).is_empty());
}

#[test]
fn test_try_run_reports_errors() {
    assert_eq!(
        try_run("SELECT name", &people()),
        Err(QueryError::Parse(ParseError::MissingFrom))
    );
    assert_eq!(
        try_run("SELECT name FROM data", &Value::String("x".into())),
        Err(QueryError::NotAnArray { found: "string" })
    );
}

#[test]
fn test_empty_array() {
    assert_eq!(try_run("SELECT a FROM data", &Value::Array(vec![])), Ok(vec![]));
}

#[test]
fn test_execute_parsed_query_twice() {
    let query = parse_query("SELECT name FROM data WHERE score < 90").unwrap();
    let root = people();

    let first = execute(&query, &root);
    let second = execute(&query, &root);
    assert_eq!(first, second);
    assert_eq!(names(&first), vec!["\"Bob\"", "\"Carol\""]);
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_parse_json_keeps_key_order() {
    let value = parse_json(r#"{"z": 1, "a": [true, null], "m": "s"}"#).unwrap();
    assert_eq!(to_canonical(&value), r#"{"z": 1.0, "a": [true, null], "m": "s"}"#);
}

#[test]
fn test_parse_json_rejects_bad_text() {
    assert!(parse_json("[1, 2").is_err());
}

#[test]
fn test_json_round_trip() {
    let original: serde_json::Value =
        serde_json::from_str(r#"{"n": 1.5, "i": 7, "s": "x", "l": [null, false]}"#).unwrap();
    let value = json_to_value(original.clone());
    assert_eq!(value_to_json(value), original);
}

#[test]
fn test_non_finite_numbers_become_null() {
    assert_eq!(value_to_json(Value::Number(f64::NAN)), serde_json::Value::Null);
    assert_eq!(value_to_json(Value::Number(f64::INFINITY)), serde_json::Value::Null);
}

#[test]
fn test_canonical_text_parses_back() {
    let value = people();
    let reparsed = parse_json(&to_canonical(&value)).unwrap();
    assert_eq!(reparsed, value);
}
