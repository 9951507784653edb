//
//  insightly-rs
//  tests/resources_test.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

mod common;

use common::{client_for, AUTHORIZATION};
use insightly::api::query::{ContactQuery, LeadQuery, OrganizationQuery, QueryOptions};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_add_without_id_posts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v2.2/Contacts")
        .match_body(Matcher::Json(json!({"FIRST_NAME": "Testy"})))
        .with_status(201)
        .with_body(r#"{"CONTACT_ID": 1001, "FIRST_NAME": "Testy"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let created = client
        .add_contact(&json!({"FIRST_NAME": "Testy"}))
        .await
        .unwrap();

    assert_eq!(created["CONTACT_ID"], 1001);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_with_positive_id_puts() {
    let mut server = Server::new_async().await;
    let put = server
        .mock("PUT", "/v2.2/Tasks")
        .match_body(Matcher::PartialJson(json!({"TASK_ID": 55})))
        .with_status(200)
        .with_body(r#"{"TASK_ID": 55}"#)
        .create_async()
        .await;
    let post = server
        .mock("POST", "/v2.2/Tasks")
        .with_status(201)
        .with_body(r#"{"TASK_ID": 56}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .add_task(&json!({"TASK_ID": 55, "TITLE": "Call back"}))
        .await
        .unwrap();
    client
        .add_task(&json!({"TASK_ID": 0, "TITLE": "Zero id"}))
        .await
        .unwrap();
    client
        .add_task(&json!({"TASK_ID": null, "TITLE": "Null id"}))
        .await
        .unwrap();

    put.assert_async().await;
    post.assert_async().await;
}

#[tokio::test]
async fn test_large_and_fractional_ids_still_put() {
    let mut server = Server::new_async().await;
    let put = server
        .mock("PUT", "/v2.2/Tasks")
        .with_status(200)
        .with_body(r#"{"TASK_ID": 1}"#)
        .expect(3)
        .create_async()
        .await;
    let post = server
        .mock("POST", "/v2.2/Tasks")
        .with_status(201)
        .with_body("{}")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    for task in [
        json!({"TASK_ID": 1e20, "TITLE": "Huge id"}),
        json!({"TASK_ID": 2.5, "TITLE": "Fractional id"}),
        json!({"TASK_ID": "0.5", "TITLE": "String id"}),
    ] {
        client.add_task(&task).await.unwrap();
    }

    put.assert_async().await;
    post.assert_async().await;
}

#[tokio::test]
async fn test_categories_use_category_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v2.2/ProjectCategories")
        .with_status(200)
        .with_body(r#"{"CATEGORY_ID": 3}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .add_project_category(&json!({"CATEGORY_ID": "3", "CATEGORY_NAME": "Internal"}))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_write_validation_failure_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v2.2/Organisations")
        .with_status(400)
        .with_body(r#"{"Message": "ORGANISATION_NAME is required"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.add_organization(&json!({})).await.unwrap_err();

    assert!(err.is_client_error());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[tokio::test]
async fn test_contact_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2.2/Contacts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), "a@b.com".into()),
            Matcher::UrlEncoded("ids".into(), "1,2,3".into()),
            Matcher::UrlEncoded("$top".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ContactQuery::new()
        .email("a@b.com")
        .ids([1, 2, 3])
        .options(QueryOptions::new().top(5));
    client.contacts(&query).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_odata_query_is_exact_and_stable() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2.2/Contacts")
        .match_query(Matcher::Exact("$top=5&$orderby=NAME%20desc".into()))
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ContactQuery::new().options(QueryOptions::new().top(5).order_by("NAME desc"));
    client.contacts(&query).await.unwrap();
    client.contacts(&query).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_filters_are_repeated_in_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2.2/Opportunities")
        .match_query(Matcher::Exact(
            "$skip=10&$filter=PROBABILITY%20gt%2050&$filter=BID_AMOUNT%20gt%201000".into(),
        ))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let options = QueryOptions::new()
        .top(0)
        .skip(10)
        .filters(["PROBABILITY gt 50", "BID_AMOUNT gt 1000"]);
    client.opportunities(&options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_lead_and_organization_parameters() {
    let mut server = Server::new_async().await;
    let leads = server
        .mock("GET", "/v2.2/Leads")
        .match_query(Matcher::Exact("tag=hot&includeConverted=true&$top=2".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let organizations = server
        .mock("GET", "/v2.2/Organisations")
        .match_query(Matcher::UrlEncoded("domain".into(), "example.com".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .leads(
            &LeadQuery::new()
                .tag("hot")
                .include_converted(true)
                .options(QueryOptions::new().top(2)),
        )
        .await
        .unwrap();
    client
        .organizations(&OrganizationQuery::new().domain("example.com"))
        .await
        .unwrap();

    leads.assert_async().await;
    organizations.assert_async().await;
}

#[tokio::test]
async fn test_sub_resource_paths() {
    let mut server = Server::new_async().await;
    let paths = [
        "/v2.2/Contacts/9/Emails",
        "/v2.2/Leads/9/Notes",
        "/v2.2/Organisations/9/Tasks",
        "/v2.2/Opportunities/9/StateHistory",
        "/v2.2/Projects/9/Notes",
        "/v2.2/Notes/9/Comments",
        "/v2.2/Tasks/9/Comments",
        "/v2.2/Emails/9/Comments",
        "/v2.2/Tags/9",
    ];
    let mut mocks = Vec::new();
    for path in paths {
        mocks.push(
            server
                .mock("GET", path)
                .match_header("authorization", AUTHORIZATION)
                .with_status(200)
                .with_body("[]")
                .create_async()
                .await,
        );
    }

    let client = client_for(&server);
    client.contact_emails(9).await.unwrap();
    client.lead_notes(9).await.unwrap();
    client.organization_tasks(9).await.unwrap();
    client.opportunity_state_history(9).await.unwrap();
    client.project_notes(9).await.unwrap();
    client.note_comments(9).await.unwrap();
    client.task_comments(9).await.unwrap();
    client.email_comments(9).await.unwrap();
    client.tags(9).await.unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_comment_endpoints() {
    let mut server = Server::new_async().await;
    let add = server
        .mock("POST", "/v2.2/Notes/4/Comments")
        .match_body(Matcher::Json(json!({"BODY": "Looks good"})))
        .with_status(201)
        .with_body(r#"{"COMMENT_ID": 12, "BODY": "Looks good"}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/v2.2/Comments")
        .with_status(200)
        .with_body(r#"{"COMMENT_ID": 12}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v2.2/Comments/12")
        .with_status(202)
        .create_async()
        .await;

    let client = client_for(&server);
    let comment = client
        .add_note_comment(4, &json!({"BODY": "Looks good"}))
        .await
        .unwrap();
    assert_eq!(comment["COMMENT_ID"], 12);

    client
        .update_comment(&json!({"COMMENT_ID": 12, "BODY": "Edited"}))
        .await
        .unwrap();
    client.delete_comment(12).await.unwrap();

    // The listing is not offered by the API and never hits the network.
    assert!(client.comments().await.unwrap().is_empty());

    add.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_team_members() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/v2.2/TeamMembers")
        .match_query(Matcher::UrlEncoded("teamid".into(), "8".into()))
        .with_status(200)
        .with_body(r#"[{"PERMISSION_ID": 1, "TEAM_ID": 8, "MEMBER_USER_ID": 3}]"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/v2.2/TeamMembers")
        .with_status(201)
        .with_body(r#"{"PERMISSION_ID": 2}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/v2.2/TeamMembers")
        .with_status(200)
        .with_body(r#"{"PERMISSION_ID": 2}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v2.2/TeamMembers/2")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let members = client.team_members(8).await.unwrap();
    assert_eq!(members.len(), 1);

    let member = json!({"TEAM_ID": 8, "MEMBER_USER_ID": 4});
    client.add_team_member(&member).await.unwrap();
    client
        .update_team_member(&json!({"PERMISSION_ID": 2, "TEAM_ID": 8, "MEMBER_USER_ID": 4}))
        .await
        .unwrap();
    client.delete_team_member(2).await.unwrap();

    list.assert_async().await;
    add.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_custom_field_id_is_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2.2/CustomFields/CONTACT_FIELD_1")
        .with_status(200)
        .with_body(r#"{"CUSTOM_FIELD_ID": "CONTACT_FIELD_1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let field = client.custom_field("CONTACT_FIELD_1").await.unwrap();
    assert_eq!(field["CUSTOM_FIELD_ID"], "CONTACT_FIELD_1");

    mock.assert_async().await;
}
