//! Unit tests for position-based field extraction.

use rtaudit_ingest::extract_field;
use rtaudit_model::field;

#[test]
fn urn_line_matches() {
    let line = "001\tURNumber\t1234567\tSMITH";
    assert_eq!(extract_field(line, &field::URN), Some("1234567"));
}

#[test]
fn modality_and_group_share_an_index_pair() {
    let modality_line = "002\tSeries\t3\t2020-06-18\tX\tModality\tCT";
    assert_eq!(extract_field(modality_line, &field::MODALITY), Some("CT"));
    assert_eq!(extract_field(modality_line, &field::GROUP_NUMBER), None);

    let group_line = "002\tSeries\t3\t2020-06-18\tX\tGroupNumber\t1";
    assert_eq!(extract_field(group_line, &field::GROUP_NUMBER), Some("1"));
    assert_eq!(extract_field(group_line, &field::MODALITY), None);
}

#[test]
fn short_line_yields_none() {
    assert_eq!(extract_field("URNumber", &field::URN), None);
    assert_eq!(extract_field("", &field::URN), None);
    assert_eq!(extract_field("a\tURNumber", &field::URN), None);
}

#[test]
fn wrong_key_yields_none() {
    let line = "001\tAccession\t1234567";
    assert_eq!(extract_field(line, &field::URN), None);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let line = "001\tURNumber\t1234567\r\n";
    assert_eq!(extract_field(line, &field::URN), Some("1234567"));
}

#[test]
fn extraction_is_case_sensitive() {
    let line = "001\turnumber\t1234567";
    assert_eq!(extract_field(line, &field::URN), None);
}
