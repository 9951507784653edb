//
//  insightly-rs
//  tests/smoke_test.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

mod common;

use common::client_for;
use insightly::smoke::{self, SmokeReport};
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_contact_create_delete_then_not_found() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/v2.2/Contacts")
        .with_status(201)
        .with_body(r#"{"CONTACT_ID": 77, "FIRST_NAME": "Testy", "LAST_NAME": "McTesterson"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v2.2/Contacts/77")
        .with_status(202)
        .create_async()
        .await;
    let gone = server
        .mock("GET", "/v2.2/Contacts/77")
        .with_status(404)
        .with_body(r#"{"Message": "Not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let created = client
        .add_contact(&serde_json::json!({"FIRST_NAME": "Testy", "LAST_NAME": "McTesterson"}))
        .await
        .unwrap();
    let id = created["CONTACT_ID"].as_i64().unwrap();
    assert!(id > 0);

    client.delete_contact(id).await.unwrap();
    let err = client.contact(id).await.unwrap_err();
    assert!(err.is_not_found());

    create.assert_async().await;
    delete.assert_async().await;
    gone.assert_async().await;
}

#[tokio::test]
async fn test_smoke_contact_lifecycle_passes() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v2.2/Contacts")
        .with_status(201)
        .with_body(r#"{"CONTACT_ID": 77, "FIRST_NAME": "Testy"}"#)
        .create_async()
        .await;
    // First read succeeds; the read after the delete falls through to 404.
    let found = server
        .mock("GET", "/v2.2/Contacts/77")
        .with_status(200)
        .with_body(r#"{"CONTACT_ID": 77}"#)
        .expect(1)
        .create_async()
        .await;
    let gone = server
        .mock("GET", "/v2.2/Contacts/77")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    for sub in ["Emails", "Notes", "Tasks"] {
        server
            .mock("GET", format!("/v2.2/Contacts/77/{sub}").as_str())
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
    }
    server
        .mock("GET", "/v2.2/Tags/77")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/v2.2/Contacts")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "CONTACT_ID": 77,
            "BACKGROUND": "Created by insightly-smoke"
        })))
        .with_status(200)
        .with_body(r#"{"CONTACT_ID": 77}"#)
        .create_async()
        .await;
    server
        .mock("DELETE", "/v2.2/Contacts/77")
        .with_status(202)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut report = SmokeReport::quiet();
    smoke::contact_lifecycle(&client, &mut report).await;

    assert_eq!(report.failed(), 0, "{}", report.summary());
    assert_eq!(report.passed(), 10);
    assert_eq!(report.exit_code(), 0);

    found.assert_async().await;
    gone.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_smoke_run_reports_failures() {
    let mut server = Server::new_async().await;
    for method in ["GET", "POST", "PUT", "DELETE"] {
        server
            .mock(method, Matcher::Any)
            .with_status(500)
            .create_async()
            .await;
    }

    let client = client_for(&server);
    let mut report = SmokeReport::quiet();
    smoke::run(&client, &mut report).await;

    assert!(!report.is_success());
    assert!(report.failed() > 20);
    assert_eq!(report.exit_code(), 1);
}
