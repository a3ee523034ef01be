//! Integration tests for the generic resource routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use rt_api::create_app;

fn tenant_body() -> Value {
    json!({"firstName": "A", "lastName": "B", "email": "a@b.com", "phone": "555"})
}

#[actix_web::test]
async fn test_create_then_read_tenant() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["firstName"], "A");

    let expected = json!({"id": 1, "firstName": "A", "lastName": "B", "email": "a@b.com", "phone": "555"});

    let req = test::TestRequest::get().uri("/tenants?id=1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, expected);

    let req = test::TestRequest::get().uri("/tenants/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, expected);

    let req = test::TestRequest::get().uri("/tenants/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([expected]));
}

#[actix_web::test]
async fn test_empty_collection_lists_as_empty_array() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::get().uri("/properties").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_missing_record_is_404() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::get().uri("/tenants/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Tenant not found"}));
}

#[actix_web::test]
async fn test_update_replaces_record() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/tenants/update")
        .set_json(json!({"id": 1, "firstName": "C", "lastName": "D", "email": "c@d.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "updated"}));

    let req = test::TestRequest::get().uri("/tenants/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["firstName"], "C");
    assert_eq!(body["phone"], "");
}

#[actix_web::test]
async fn test_update_without_id_is_rejected() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/tenants/update")
        .set_json(json!({"firstName": "C", "lastName": "D", "email": "c@d.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Identifier is required for update"}));

    let req = test::TestRequest::get().uri("/tenants/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["firstName"], "A");
}

#[actix_web::test]
async fn test_update_is_a_full_replacement() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    test::call_service(&app, req).await;

    // required fields cannot be left out of an update
    let req = test::TestRequest::put()
        .uri("/tenants/update")
        .set_json(json!({"id": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));

    let req = test::TestRequest::get().uri("/tenants/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"id": 1, "firstName": "A", "lastName": "B", "email": "a@b.com", "phone": "555"})
    );
}

#[actix_web::test]
async fn test_update_of_missing_record_still_succeeds() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::put()
        .uri("/tenants/update")
        .set_json(json!({"id": 42, "firstName": "C", "lastName": "D", "email": "c@d.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_removes_record_and_tolerates_missing_ids() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    test::call_service(&app, req).await;

    for _ in 0..2 {
        let req = test::TestRequest::delete().uri("/tenants/delete/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": "deleted"}));
    }

    let req = test::TestRequest::get().uri("/tenants/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_lease_requires_positive_rent() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/leases")
        .set_json(json!({"tenantId": 1, "unitId": 1, "start": 1_700_000_000, "rentAmount": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Field must not be empty or zero: rentAmount"}));

    let req = test::TestRequest::post()
        .uri("/leases")
        .set_json(json!({"tenantId": 1, "unitId": 1, "start": 1_700_000_000}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));

    let req = test::TestRequest::get().uri("/leases").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_malformed_body_is_400() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/tenants")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_non_numeric_id_is_400() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    for uri in ["/tenants/abc", "/tenants?id=abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Invalid identifier: abc"}));
    }

    let req = test::TestRequest::delete().uri("/tenants/delete/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unsupported_verb_is_405() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let cases = [
        test::TestRequest::delete().uri("/tenants"),
        test::TestRequest::post().uri("/tenants/1"),
        test::TestRequest::get().uri("/tenants/update"),
        test::TestRequest::get().uri("/tenants/delete/1"),
        test::TestRequest::get().uri("/login"),
    ];

    for req in cases {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }
}

#[actix_web::test]
async fn test_unknown_path_is_404() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::get().uri("/landlords").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Not found"}));
}

#[actix_web::test]
async fn test_foreign_key_violation_is_500() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    let req = test::TestRequest::post()
        .uri("/units")
        .set_json(json!({"propertyId": 999, "unitNumber": "1A"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[actix_web::test]
async fn test_payment_confirmation_round_trips_as_base64() {
    let app = test::init_service(create_app(common::test_state().await)).await;

    // user -> property -> unit -> tenant -> lease
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(common::registration("owner@example.com", "pw"))
        .to_request();
    let registered: Value = test::call_and_read_body_json(&app, req).await;
    let owner = registered["user"]["id"].clone();

    let steps = [
        ("/properties", json!({"ownerUserId": owner, "name": "Maple Court"})),
        ("/units", json!({"propertyId": 1, "unitNumber": "A"})),
        ("/tenants", tenant_body()),
        (
            "/leases",
            json!({"tenantId": 1, "unitId": 1, "start": 1_700_000_000, "rentAmount": 120_000}),
        ),
    ];
    for (uri, body) in steps {
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "{}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(json!({
            "leaseId": 1,
            "amount": 120_000,
            "date": 1_700_100_000,
            "method": "check",
            "confirmation": "aGVsbG8="
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/payments/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["confirmation"], "aGVsbG8=");
    assert_eq!(body["method"], "check");
}
