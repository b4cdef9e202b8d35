#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use mmbi_core::{
    AppConfig, FiscalYear, FiscalYearStatus, HttpRequest, HttpResponse, HttpTransport,
    PlaceholderRef, ReportBatch, ReportBatchStatus, TransportError,
};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const BASE: &str = "http://bi.test/services/moneymarketbi/api";

/// Transport that replays scripted responses and records every request.
#[derive(Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, reply: Result<HttpResponse, TransportError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) {
        self.reply(Ok(response(status, Some(body.to_string()), &[])));
    }

    pub fn reply_status(&self, status: u16) {
        self.reply(Ok(response(status, None, &[])));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

pub fn response(status: u16, body: Option<String>, headers: &[(&str, &str)]) -> HttpResponse {
    HttpResponse {
        status,
        headers: headers
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
            .collect::<BTreeMap<_, _>>(),
        body,
    }
}

pub fn config() -> AppConfig {
    AppConfig {
        api_base_url: "http://bi.test".to_string(),
        ..AppConfig::default()
    }
}

pub fn sample_fiscal_year() -> FiscalYear {
    FiscalYear {
        id: Some(1201),
        fiscal_year_code: Some("FY2024".to_string()),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        fiscal_year_status: Some(FiscalYearStatus::Open),
        last_updated_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap()),
        created_by: None,
        placeholders: vec![PlaceholderRef {
            id: Some(7),
            description: Some("audited".to_string()),
        }],
    }
}

pub fn sample_report_batch() -> ReportBatch {
    ReportBatch {
        id: Some(55),
        report_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        upload_time_stamp: Some(Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap()),
        active: Some(true),
        description: Some("June placements".to_string()),
        file_name: Some("mm-2024-06.csv".to_string()),
        process_flag: Some(ReportBatchStatus::Uploaded),
        uploaded_by: None,
    }
}
