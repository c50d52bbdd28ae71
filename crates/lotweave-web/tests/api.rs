//! End-to-end tests for the HTTP surface, driven through the router
//! without a network listener.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use lotweave_store::Store;

fn harness() -> (Router, Store, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("lots_db.csv"));
    (lotweave_web::router(store.clone()), store, dir)
}

fn lot_l100() -> Value {
    json!({
        "LOT NUMBER": "L100",
        "FABRICS": "Cotton",
        "SHORT NO.": "5",
        "ROLL NO.": "12",
        "MTR": "100",
        "JOBBER": "Raj",
        "PANNO": "3",
        "THREAD": "T1",
        "LENGTH": "10",
        "SIZE": "M",
        "K.P.": "2",
        "BELT": "1",
        "RATE": "50",
        "WASHING": "Yes"
    })
}

fn post_lots(body: &Value) -> Request<Body> {
    Request::post("/lots")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_starts_empty() {
    let (app, _store, _dir) = harness();
    let response = app
        .oneshot(Request::get("/lots").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_add_lot_persists_and_defaults_dates() {
    let (app, store, _dir) = harness();
    let response = app.oneshot(post_lots(&lot_l100())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(body["LOT NUMBER"], "L100");
    assert_eq!(body["FAB. DATE"], Value::String(today.clone()));
    assert_eq!(body["JOB DATE"], Value::String(today));

    let collection = store.load();
    assert_eq!(collection.len(), 1);
    assert!(collection.contains_lot("L100"));
}

#[tokio::test]
async fn test_duplicate_submission_is_rejected() {
    let (app, store, _dir) = harness();
    let first = app.clone().oneshot(post_lots(&lot_l100())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post_lots(&lot_l100())).await.unwrap();
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(second).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("unique"));

    // Collection size stays at 1.
    assert_eq!(store.load().len(), 1);
}

#[tokio::test]
async fn test_missing_fields_each_report() {
    let (app, store, _dir) = harness();
    let mut body = lot_l100();
    body.as_object_mut().unwrap().remove("JOBBER");
    body["WASHING"] = json!("");

    let response = app.oneshot(post_lots(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body_json(response).await["errors"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.as_str().unwrap().contains("JOBBER")));
    assert!(errors.iter().any(|e| e.as_str().unwrap().contains("WASHING")));
    assert!(store.load().is_empty());
}

#[tokio::test]
async fn test_delete_reports_rows_affected() {
    let (app, _store, _dir) = harness();
    app.clone().oneshot(post_lots(&lot_l100())).await.unwrap();

    let response = app
        .clone()
        .oneshot(Request::delete("/lots/L100").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "deleted": 1 }));

    // Deleting a missing key is a no-op, still 200.
    let response = app
        .oneshot(Request::delete("/lots/L100").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "deleted": 0 }));
}

#[tokio::test]
async fn test_replace_validates_grid_edits() {
    let (app, store, _dir) = harness();
    app.clone().oneshot(post_lots(&lot_l100())).await.unwrap();

    let mut edited = store.load().into_records();
    edited[0].fabrics = "Linen".to_string();
    let put = |records: String| {
        Request::put("/lots")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(records))
            .unwrap()
    };

    let response = app
        .clone()
        .oneshot(put(serde_json::to_string(&edited).unwrap()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "records": 1 }));
    assert_eq!(store.load().get("L100").unwrap().fabrics, "Linen");

    // A grid edit duplicating the key is rejected and changes nothing.
    let twice = vec![edited[0].clone(), edited[0].clone()];
    let response = app
        .oneshot(put(serde_json::to_string(&twice).unwrap()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.load().len(), 1);
}

#[tokio::test]
async fn test_export_matches_backing_file() {
    let (app, store, _dir) = harness();
    app.clone().oneshot(post_lots(&lot_l100())).await.unwrap();

    let response = app
        .oneshot(Request::get("/export.csv").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "text/csv"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let on_disk = std::fs::read(store.path()).unwrap();
    assert_eq!(bytes.as_ref(), on_disk.as_slice());
}
