//! Tests for result rendering and delivery.

mod common;

use common::MockPlatform;
use gleaner_core::{
    ChannelId, Delivery, FieldMap, Reporter, ReporterBuilder, ResultRecord, extract_fields, render,
};

fn record(user: &str, fields: &[(&str, Option<&str>)]) -> ResultRecord {
    let mut data = FieldMap::default();
    for (key, value) in fields {
        data.insert(*key, value.map(str::to_string));
    }
    ResultRecord::new(user, data)
}

/// One record whose rendered line is exactly `len` characters long.
fn record_of_length(len: usize) -> ResultRecord {
    // `u: {"k":"` + value + `"}` is 11 characters of framing
    record("u", &[("k", Some("x".repeat(len - 11).as_str()))])
}

#[test]
fn test_render_one_line_per_record_in_order() {
    let records = vec![
        record("ada", &[("name", Some("Ada")), ("score", Some("10"))]),
        record("bob", &[("name", Some("Bob"))]),
        record("cy", &[("score", Some("7"))]),
    ];
    let text = render(&records).expect("Renders");
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(
        lines,
        vec![
            r#"ada: {"name":"Ada","score":"10"}"#,
            r#"bob: {"name":"Bob"}"#,
            r#"cy: {"score":"7"}"#,
        ]
    );
}

#[test]
fn test_render_omits_absent_values() {
    let text = render(&[record("ada", &[("name", None), ("score", Some("3"))])]).expect("Renders");
    assert_eq!(text, r#"ada: {"score":"3"}"#);

    let text = render(&[record("ada", &[("name", None)])]).expect("Renders");
    assert_eq!(text, "ada: {}");
}

#[test]
fn test_render_puts_index_like_keys_first() {
    let fields = extract_fields(&["2", "1"], "1\na\n2\nb");
    let text = render(&[ResultRecord::new("ada", fields)]).expect("Renders");
    assert_eq!(text, r#"ada: {"1":"a","2":"b"}"#);

    let text = render(&[record(
        "ada",
        &[("name", Some("x")), ("10", Some("y")), ("07", Some("z")), ("3", Some("w"))],
    )])
    .expect("Renders");
    assert_eq!(text, r#"ada: {"3":"w","10":"y","name":"x","07":"z"}"#);
}

#[test]
fn test_render_escapes_json() {
    let text = render(&[record("ada", &[("quote", Some("say \"hi\""))])]).expect("Renders");
    assert_eq!(text, r#"ada: {"quote":"say \"hi\""}"#);
}

#[test]
fn test_record_length_helper() {
    let text = render(&[record_of_length(2001)]).expect("Renders");
    assert_eq!(text.chars().count(), 2001);
}

#[tokio::test]
async fn test_inline_when_file_output_disabled() {
    let platform = MockPlatform::new(1);
    let reporter = Reporter::default();
    let records = vec![record_of_length(5000)];

    let delivery = reporter
        .report(&platform, ChannelId(9), &records)
        .await
        .expect("Reports");

    assert_eq!(delivery, Delivery::Inline);
    let texts = platform.texts.lock().unwrap();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].0, ChannelId(9));
    assert_eq!(texts[0].1.chars().count(), 5000);
    assert!(platform.files.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_inline_at_exactly_the_limit() {
    let staging = tempfile::tempdir().expect("Temp dir");
    let platform = MockPlatform::new(1);
    let reporter = ReporterBuilder::default()
        .file_output(true)
        .staging_dir(staging.path())
        .build()
        .expect("Valid reporter");

    let delivery = reporter
        .report(&platform, ChannelId(9), &[record_of_length(2000)])
        .await
        .expect("Reports");

    assert_eq!(delivery, Delivery::Inline);
    assert!(platform.files.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_output_goes_out_as_file() {
    let staging = tempfile::tempdir().expect("Temp dir");
    let platform = MockPlatform::new(1);
    let reporter = ReporterBuilder::default()
        .file_output(true)
        .staging_dir(staging.path())
        .build()
        .expect("Valid reporter");
    let records = vec![record_of_length(2001)];
    let expected = render(&records).expect("Renders");

    let delivery = reporter
        .report(&platform, ChannelId(9), &records)
        .await
        .expect("Reports");

    assert!(platform.texts.lock().unwrap().is_empty());
    let files = platform.files.lock().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, ChannelId(9));
    assert_eq!(files[0].2, expected);
    assert!(files[0].1.starts_with(staging.path()));

    let Delivery::Attachment(path) = delivery else {
        panic!("expected attachment delivery");
    };
    assert_eq!(path, files[0].1);
    assert!(!path.exists(), "staging file is removed after upload");
}

#[tokio::test]
async fn test_staging_names_are_unique() {
    let staging = tempfile::tempdir().expect("Temp dir");
    let platform = MockPlatform::new(1);
    let reporter = ReporterBuilder::default()
        .file_output(true)
        .staging_dir(staging.path())
        .build()
        .expect("Valid reporter");
    let records = vec![record_of_length(3000)];

    reporter.report(&platform, ChannelId(9), &records).await.expect("Reports");
    reporter.report(&platform, ChannelId(9), &records).await.expect("Reports");

    let files = platform.files.lock().unwrap();
    assert_ne!(files[0].1, files[1].1);
}

#[tokio::test]
async fn test_empty_report_sends_nothing() {
    let platform = MockPlatform::new(1);
    let delivery = Reporter::default()
        .report(&platform, ChannelId(9), &[])
        .await
        .expect("Reports");

    assert_eq!(delivery, Delivery::Empty);
    assert!(platform.texts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_failure_is_an_error_and_cleans_up() {
    let staging = tempfile::tempdir().expect("Temp dir");
    let platform = MockPlatform::new(1).failing_sends();
    let reporter = ReporterBuilder::default()
        .file_output(true)
        .staging_dir(staging.path())
        .build()
        .expect("Valid reporter");

    let result = reporter
        .report(&platform, ChannelId(9), &[record_of_length(2500)])
        .await;

    assert!(result.is_err());
    let leftover = std::fs::read_dir(staging.path()).expect("Readable").count();
    assert_eq!(leftover, 0);
}
