use scaffold_util::table::{BoundaryStrategy, DecodeOptions, Record, Table, TableError, decode_table};

const CASCADES: &str = "NAME      VERSION  GROUPS\nno-group  v1\nfoo       v1       foo\n";

const STATES: &str = "\
TASK        WORKFLOW  STATUS   STARTED              FINISHED
write_file  foo       success  2024-03-01T10:00:00  2024-03-01T10:00:05
read_file   foo       running  2024-03-01T10:00:06
cleanup     foo
";

fn zip_manually(table: &Table, header: &[String]) -> Vec<Record> {
    table
        .rows()
        .expect("row table")
        .iter()
        .map(|cells| header.iter().cloned().zip(cells.iter().cloned()).collect())
        .collect()
}

fn header_of(content: &str) -> Vec<String> {
    let table = decode_table(content, &DecodeOptions::default().with_header(false)).expect("decode header");
    table.rows().expect("row table")[0].clone()
}

#[test]
fn cascade_listing_decodes_to_records() {
    let table = decode_table(CASCADES, &DecodeOptions::records()).expect("decode");
    let expected = serde_json::json!([
        {"NAME": "no-group", "VERSION": "v1", "GROUPS": ""},
        {"NAME": "foo", "VERSION": "v1", "GROUPS": "foo"}
    ]);
    assert_eq!(serde_json::to_value(&table).unwrap(), expected);
}

#[test]
fn cascade_listing_decodes_to_rows() {
    let table = decode_table(CASCADES, &DecodeOptions::default()).expect("decode");
    let expected = serde_json::json!([["no-group", "v1", ""], ["foo", "v1", "foo"]]);
    assert_eq!(serde_json::to_value(&table).unwrap(), expected);
}

#[test]
fn records_equal_rows_zipped_with_header() {
    for content in [CASCADES, STATES] {
        let rows = decode_table(content, &DecodeOptions::default()).expect("rows");
        let records = decode_table(content, &DecodeOptions::records()).expect("records");
        let zipped = zip_manually(&rows, &header_of(content));
        assert_eq!(records.records().unwrap(), zipped.as_slice());
    }
}

#[test]
fn decoding_is_repeatable() {
    for options in [
        DecodeOptions::default(),
        DecodeOptions::records(),
        DecodeOptions::default().with_header(false),
        DecodeOptions::records().with_strategy(BoundaryStrategy::Intersection),
    ] {
        let first = decode_table(STATES, &options).expect("first");
        let second = decode_table(STATES, &options).expect("second");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn ragged_rows_fill_missing_cells_with_empty_strings() {
    let table = decode_table(STATES, &DecodeOptions::records()).expect("decode");
    let records = table.records().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["FINISHED"], "2024-03-01T10:00:05");
    assert_eq!(records[1]["STARTED"], "2024-03-01T10:00:06");
    assert_eq!(records[1]["FINISHED"], "");
    assert_eq!(records[2]["TASK"], "cleanup");
    assert_eq!(records[2]["STATUS"], "");
    assert_eq!(records[2]["STARTED"], "");
}

#[test]
fn records_without_header_always_fail() {
    let options = DecodeOptions::records().with_header(false);
    for content in ["", "\n", CASCADES, STATES, "x"] {
        assert!(matches!(decode_table(content, &options), Err(TableError::Configuration(_))));
    }
}

#[test]
fn blank_content_always_fails_to_parse() {
    for content in ["", "\n", "\n\n", "\r\n\r\n"] {
        for options in [DecodeOptions::default(), DecodeOptions::records()] {
            assert!(matches!(decode_table(content, &options), Err(TableError::Parse(_))));
        }
    }
}

#[test]
fn row_order_follows_input_order() {
    let content = "NAME\nc\na\nb\n";
    let table = decode_table(content, &DecodeOptions::default()).expect("decode");
    let names: Vec<&str> = table.rows().unwrap().iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn tabwriter_style_trailing_padding_is_trimmed() {
    let content = "NAME      VERSION  GROUPS  \nfoo       v1       [foo]   \n";
    let table = decode_table(content, &DecodeOptions::records()).expect("decode");
    assert_eq!(table.records().unwrap()[0]["GROUPS"], "[foo]");
}

#[test]
fn intersection_strategy_keeps_multiword_headers_together() {
    let content = "CREATED AT  NAME\n2024-01-01  foo\n2024-02-02  bar\n";

    let first_line = decode_table(content, &DecodeOptions::records()).expect("first line");
    let keys: Vec<&str> = first_line.records().unwrap()[0].keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["CREATED", "AT", "NAME"]);

    let options = DecodeOptions::records().with_strategy(BoundaryStrategy::Intersection);
    let intersected = decode_table(content, &options).expect("intersection");
    let record = &intersected.records().unwrap()[1];
    assert_eq!(record["CREATED AT"], "2024-02-02");
    assert_eq!(record["NAME"], "bar");
}
