mod common;

use common::{config, sample_fiscal_year, RecordingTransport};
use mmbi_core::{
    rest_service, EntityResource, FiscalYear, FiscalYearRef, HttpMethod, QueryOptions,
    RestEntityService,
};
use serde_json::json;
use std::borrow::Cow;
use std::sync::Arc;

fn service(
    transport: &Arc<RecordingTransport>,
) -> RestEntityService<FiscalYear, Arc<RecordingTransport>> {
    rest_service(&config(), Arc::clone(transport))
}

fn year(id: i64, code: &str) -> FiscalYear {
    FiscalYear {
        id: Some(id),
        fiscal_year_code: Some(code.to_string()),
        ..FiscalYear::default()
    }
}

#[tokio::test]
async fn save_creates_unsaved_and_updates_saved_entities() {
    let transport = RecordingTransport::new();
    transport.reply_json(201, json!({ "id": 1 }));
    transport.reply_json(200, json!({ "id": 1201 }));
    let service = service(&transport);

    service.save(&sample_fiscal_year().to_new()).await.unwrap();
    service.save(&sample_fiscal_year()).await.unwrap();

    let methods: Vec<HttpMethod> = transport
        .requests()
        .iter()
        .map(|request| request.method)
        .collect();
    assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Put]);
}

#[tokio::test]
async fn delete_and_search_delegate_to_repository() {
    let transport = RecordingTransport::new();
    transport.reply_status(200);
    transport.reply_status(503);
    let service = service(&transport);

    let deleted = service.delete(1201).await.unwrap();
    assert_eq!(deleted.status, 200);

    let found = service.search(&QueryOptions::new().search("FY")).await;
    assert!(found.items().is_empty());
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn compare_matches_entities_against_relation_views() {
    let transport = RecordingTransport::new();
    let service = service(&transport);
    let entity = sample_fiscal_year();
    let view = FiscalYearRef::from(&entity);
    let other = year(9, "FY2031");

    assert!(service.compare(Some(&entity), Some(&view)));
    assert!(!service.compare(Some(&other), Some(&view)));
    assert!(service.compare::<FiscalYear, FiscalYearRef>(None, None));
    assert!(!service.compare(None::<&FiscalYear>, Some(&view)));
    assert_eq!(service.get_identifier(&entity), Some(1201));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn add_to_collection_keeps_existing_reference_when_nothing_is_new() {
    let transport = RecordingTransport::new();
    let service = service(&transport);
    let options = vec![year(1, "FY2022"), year(2, "FY2023")];
    let selected = year(2, "FY2023 (edited)");

    let merged = service.add_to_collection_if_missing(&options, [Some(&selected), None]);
    assert!(matches!(merged, Cow::Borrowed(_)));
    assert!(std::ptr::eq(merged.as_ref(), options.as_slice()));
}

#[test]
fn add_to_collection_prepends_each_new_id_once() {
    let transport = RecordingTransport::new();
    let service = service(&transport);
    let options = vec![year(1, "FY2022"), year(2, "FY2023")];
    let current = year(3, "FY2024");
    let current_again = year(3, "FY2024 again");

    let merged = service.add_to_collection_if_missing(
        &options,
        [None, Some(&current), Some(&current_again)],
    );

    assert_eq!(merged.len(), options.len() + 1);
    assert_eq!(merged[0], current);
    assert_eq!(&merged[1..], options.as_slice());
}
