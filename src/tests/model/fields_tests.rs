use super::*;

use time::Month;

#[test]
fn hours_accepts_empty_and_in_range_values() {
    for v in ["", "0", "7", "7.5", "12"] {
        assert_eq!(validate_hours(v), Ok(()), "value {:?}", v);
    }
}

#[test]
fn hours_rejects_out_of_range() {
    for v in ["-1", "13", "12.5"] {
        assert_eq!(
            validate_hours(v),
            Err("must be between 0 and 12".to_string()),
            "value {:?}",
            v
        );
    }
}

#[test]
fn hours_rejects_non_numeric() {
    assert_eq!(validate_hours("abc"), Err("must be a number".to_string()));
    assert_eq!(validate_hours("1,5"), Err("must be a number".to_string()));
}

#[test]
fn registry_is_ordered_and_only_hours_validates() {
    assert_eq!(FIELDS.len(), FIELD_COUNT);
    assert_eq!(field(DATE_IDX).map(|f| f.name), Some("Date (DD/MM/YYYY)"));
    assert_eq!(field(ISSUE_LINK_IDX).map(|f| f.name), Some("GitHub Issue Link"));
    assert_eq!(field(PROJECT_IDX).map(|f| f.name), Some("Project Name"));
    assert_eq!(field(PROGRESS_IDX).map(|f| f.name), Some("Progress Note"));
    assert_eq!(field(HOURS_IDX).map(|f| f.name), Some("Hours Spent"));
    assert!(field(CONFIRM_IDX).is_none());

    let validators: Vec<usize> = FIELDS
        .iter()
        .enumerate()
        .filter(|(_, f)| f.validate.is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(validators, vec![HOURS_IDX]);
}

#[test]
fn defaults_fill_date_and_project() {
    let today = Date::from_calendar_date(2024, Month::March, 5).unwrap();
    let defaults: Vec<Option<String>> = FIELDS
        .iter()
        .map(|f| f.default.map(|d| d(today)))
        .collect();
    assert_eq!(
        defaults,
        vec![
            Some("05/03/2024".to_string()),
            None,
            Some("N/A".to_string()),
            None,
            None,
        ]
    );
}
