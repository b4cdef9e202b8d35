mod common;

use common::{config, RecordingTransport};
use mmbi_core::{
    resolve_entity, rest_service, Navigator, RepoError, ReportBatch, Resolution,
    RestEntityService, RouteParams, TransportError,
};
use serde_json::json;
use std::cell::RefCell;
use std::sync::Arc;

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, commands: &[&str]) {
        self.visits
            .borrow_mut()
            .push(commands.iter().map(|part| part.to_string()).collect());
    }
}

impl RecordingNavigator {
    fn visits(&self) -> Vec<Vec<String>> {
        self.visits.borrow().clone()
    }
}

fn service(
    transport: &Arc<RecordingTransport>,
) -> RestEntityService<ReportBatch, Arc<RecordingTransport>> {
    rest_service(&config(), Arc::clone(transport))
}

#[tokio::test]
async fn missing_id_resolves_to_create_without_calling_backend() {
    let transport = RecordingTransport::new();
    let navigator = RecordingNavigator::default();

    let resolved = resolve_entity(&service(&transport), &RouteParams::new(), &navigator)
        .await
        .unwrap();

    assert_eq!(resolved, Resolution::Create);
    assert_eq!(transport.request_count(), 0);
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn present_id_resolves_to_entity_with_one_call() {
    let transport = RecordingTransport::new();
    transport.reply_json(200, json!({ "id": 55, "description": "June placements" }));
    let navigator = RecordingNavigator::default();
    let params = RouteParams::new().with("id", "55");

    let resolved = resolve_entity(&service(&transport), &params, &navigator)
        .await
        .unwrap();

    let batch = resolved.into_entity().unwrap();
    assert_eq!(batch.id, Some(55));
    assert_eq!(transport.request_count(), 1);
    assert!(transport.requests()[0].url.ends_with("/api/report-batches/55"));
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn empty_body_redirects_to_not_found() {
    let transport = RecordingTransport::new();
    transport.reply_status(200);
    let navigator = RecordingNavigator::default();
    let params = RouteParams::new().with("id", "55");

    let resolved = resolve_entity(&service(&transport), &params, &navigator)
        .await
        .unwrap();

    assert_eq!(resolved, Resolution::NotFound);
    assert_eq!(navigator.visits(), vec![vec!["404".to_string()]]);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn backend_404_redirects_to_not_found() {
    let transport = RecordingTransport::new();
    transport.reply_status(404);
    let navigator = RecordingNavigator::default();
    let params = RouteParams::new().with("id", "404404");

    let resolved = resolve_entity(&service(&transport), &params, &navigator)
        .await
        .unwrap();

    assert_eq!(resolved, Resolution::NotFound);
    assert_eq!(navigator.visits().len(), 1);
}

#[tokio::test]
async fn non_numeric_id_redirects_without_calling_backend() {
    let transport = RecordingTransport::new();
    let navigator = RecordingNavigator::default();
    let params = RouteParams::new().with("id", "latest");

    let resolved = resolve_entity(&service(&transport), &params, &navigator)
        .await
        .unwrap();

    assert_eq!(resolved, Resolution::NotFound);
    assert_eq!(transport.request_count(), 0);
    assert_eq!(navigator.visits().len(), 1);
}

#[tokio::test]
async fn other_failures_propagate_without_redirect_or_retry() {
    let transport = RecordingTransport::new();
    transport.reply(Err(TransportError::Connect("http://bi.test".to_string())));
    let navigator = RecordingNavigator::default();
    let params = RouteParams::new().with("id", "55");

    let err = resolve_entity(&service(&transport), &params, &navigator)
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Transport(_)));
    assert_eq!(transport.request_count(), 1);
    assert!(navigator.visits().is_empty());
}
