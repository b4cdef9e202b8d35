mod common;

use chrono::{TimeZone, Utc};
use common::{sample_fiscal_year, sample_report_batch};
use mmbi_core::{EntityForm, FiscalYear, FormError, ReportBatch};
use serde_json::{json, Value};

#[test]
fn new_form_starts_blank_with_current_minute_timestamps() {
    let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 59).unwrap();
    let form = EntityForm::<FiscalYear>::new_at(None, now).unwrap();

    let id = form.control("id").unwrap();
    assert!(id.value.is_null());
    assert!(id.disabled);
    assert_eq!(form.control("lastUpdatedAt").unwrap().value, "2024-05-06T07:08");
    assert!(form.control("fiscalYearCode").unwrap().value.is_null());
    assert_eq!(
        form.missing_required(),
        vec!["endDate", "fiscalYearCode", "startDate"]
    );
    assert!(!form.is_valid());
}

#[test]
fn form_from_entity_shows_date_times_in_input_format() {
    let form = EntityForm::new(Some(&sample_fiscal_year())).unwrap();

    assert_eq!(form.control("id").unwrap().value, 1201);
    assert_eq!(form.control("startDate").unwrap().value, "2024-01-01");
    assert_eq!(form.control("lastUpdatedAt").unwrap().value, "2024-03-01T08:15");
    assert!(form.control("fiscalYearCode").unwrap().required);
    assert!(form.is_valid());
}

#[test]
fn get_entity_reads_back_the_original_entity() {
    let year = sample_fiscal_year();
    let form = EntityForm::new(Some(&year)).unwrap();
    assert_eq!(form.get_entity().unwrap(), year);

    let batch = sample_report_batch();
    let form = EntityForm::new(Some(&batch)).unwrap();
    assert_eq!(form.get_entity().unwrap(), batch);
}

#[test]
fn edits_flow_into_the_entity() {
    let mut form = EntityForm::new(Some(&sample_fiscal_year())).unwrap();
    form.set_value("fiscalYearCode", json!("FY2024-R")).unwrap();
    form.set_value("lastUpdatedAt", json!("2024-04-02T16:45")).unwrap();
    form.set_value("endDate", Value::Null).unwrap();

    let edited = form.get_entity().unwrap();
    assert_eq!(edited.id, Some(1201));
    assert_eq!(edited.fiscal_year_code.as_deref(), Some("FY2024-R"));
    assert_eq!(
        edited.last_updated_at,
        Some(Utc.with_ymd_and_hms(2024, 4, 2, 16, 45, 0).unwrap())
    );
    assert_eq!(edited.end_date, None);
    assert_eq!(form.missing_required(), vec!["endDate"]);
}

#[test]
fn id_and_unknown_controls_reject_edits() {
    let mut form = EntityForm::<ReportBatch>::new(None).unwrap();

    let err = form.set_value("id", json!(9)).unwrap_err();
    assert!(matches!(err, FormError::DisabledControl(name) if name == "id"));
    let err = form.set_value("nickname", json!("x")).unwrap_err();
    assert!(matches!(err, FormError::UnknownControl(name) if name == "nickname"));
    assert!(form.control("id").unwrap().value.is_null());
}

#[test]
fn malformed_date_time_input_is_reported_with_its_field() {
    let mut form = EntityForm::new(Some(&sample_report_batch())).unwrap();
    form.set_value("uploadTimeStamp", json!("yesterday")).unwrap();

    match form.get_entity().unwrap_err() {
        FormError::InvalidDateTime { field, value } => {
            assert_eq!(field, "uploadTimeStamp");
            assert_eq!(value, "yesterday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_date_time_input_clears_the_value() {
    let mut form = EntityForm::new(Some(&sample_report_batch())).unwrap();
    form.set_value("uploadTimeStamp", json!("  ")).unwrap();

    assert_eq!(form.get_entity().unwrap().upload_time_stamp, None);
    assert_eq!(form.missing_required(), vec!["uploadTimeStamp"]);
}

#[test]
fn reset_replaces_every_control() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut form = EntityForm::new(Some(&sample_fiscal_year())).unwrap();
    form.reset_at(None, now).unwrap();

    assert!(form.control("id").unwrap().value.is_null());
    assert_eq!(form.control("lastUpdatedAt").unwrap().value, "2024-01-01T00:00");
    assert_eq!(form.raw_value()["placeholders"], json!([]));
}
