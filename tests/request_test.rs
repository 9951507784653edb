//
//  insightly-rs
//  tests/request_test.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

mod common;

use common::{client_for, AUTHORIZATION};
use insightly::{InsightlyClient, InsightlyError};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_get_sends_basic_auth_and_accept() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2.2/Users/Me")
        .match_header("authorization", AUTHORIZATION)
        .match_header("accept", "application/json")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"USER_ID": 7, "FIRST_NAME": "Ada"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let me = client.current_user().await.unwrap();

    assert_eq!(me["USER_ID"], 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_and_put_send_json_content_type() {
    let mut server = Server::new_async().await;
    let post = server
        .mock("POST", "/v2.2/Anything")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"A": 1})))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/v2.2/Anything")
        .match_header("content-type", "application/json")
        .match_body(r#"{"raw":true}"#)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    client.post("/Anything").body(&json!({"A": 1})).send().await.unwrap();
    client
        .put("Anything")
        .body_raw(r#"{"raw":true}"#)
        .send()
        .await
        .unwrap();

    post.assert_async().await;
    put.assert_async().await;
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2.2/Contacts")
        .match_header("x-trace", "abc")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let contacts = client
        .get("/Contacts")
        .header("X-Trace", "abc")
        .as_json_array()
        .await
        .unwrap();

    assert!(contacts.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_header_fails_before_sending() {
    let server = Server::new_async().await;
    let client = client_for(&server);

    let err = client
        .get("/Contacts")
        .header("bad header", "x")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, InsightlyError::InvalidHeader(_)));
    assert!(!err.has_response());
}

#[tokio::test]
async fn test_success_statuses_return_body() {
    let mut server = Server::new_async().await;
    for (path, status) in [("/v2.2/A", 200), ("/v2.2/B", 201), ("/v2.2/C", 202)] {
        server
            .mock("GET", path)
            .with_status(status)
            .with_body("body")
            .create_async()
            .await;
    }

    let client = client_for(&server);
    for path in ["/A", "/B", "/C"] {
        assert_eq!(client.get(path).as_string().await.unwrap(), "body");
    }
}

#[tokio::test]
async fn test_other_statuses_are_errors_with_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2.2/Contacts/404")
        .with_status(404)
        .with_body(r#"{"Message": "Contact not found"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/v2.2/Broken")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;
    server
        .mock("DELETE", "/v2.2/Contacts/1")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);

    let err = client.contact(404).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "Server returned status code 404");
    assert_eq!(
        err.response().unwrap().server_message().as_deref(),
        Some("Contact not found")
    );

    let err = client.get("/Broken").as_string().await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.response().unwrap().body, "oops");

    // 204 is a 2xx but still not one of the accepted codes.
    let err = client.delete_contact(1).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(204));
}

#[tokio::test]
async fn test_malformed_json() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2.2/Contacts/1")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;
    server
        .mock("GET", "/v2.2/Contacts")
        .with_status(200)
        .with_body(r#"{"CONTACT_ID": 1}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    let err = client.contact(1).await.unwrap_err();
    assert!(matches!(err, InsightlyError::Json(_)));

    let err = client.get("/Contacts").as_json_array().await.unwrap_err();
    assert!(matches!(
        err,
        InsightlyError::UnexpectedBody {
            expected: "array",
            found: "object"
        }
    ));
}

#[tokio::test]
async fn test_typed_json() {
    #[derive(serde::Deserialize)]
    struct Country {
        #[serde(rename = "COUNTRY_NAME")]
        name: String,
    }

    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2.2/Countries")
        .with_status(200)
        .with_body(r#"[{"COUNTRY_NAME": "Zimbabwe"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let countries: Vec<Country> = client.get("/Countries").as_json().await.unwrap();
    assert_eq!(countries[0].name, "Zimbabwe");
}

#[tokio::test]
async fn test_unreachable_server() {
    let client = InsightlyClient::with_endpoint("test-key", "http://127.0.0.1:1/v2.2").unwrap();
    let err = client.users().await.unwrap_err();

    assert!(matches!(err, InsightlyError::Transport(_)));
    assert!(err.is_unreachable());
    assert!(!err.has_response());
    assert_eq!(err.status(), None);
}
