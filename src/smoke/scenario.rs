//
//  insightly-rs
//  smoke/scenario.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! The calls made by the smoke test, grouped by what they touch.
//!
//! Steps that need an id from an earlier call are skipped when that call
//! failed. The earlier failure is already on the report.

use serde_json::{json, Map, Value};
use tracing::info;

use super::SmokeReport;
use crate::api::common::positive_id;
use crate::api::query::{ContactQuery, LeadQuery, OrganizationQuery, QueryOptions};
use crate::api::resources::contacts::CONTACT_ID;
use crate::api::resources::leads::LEAD_ID;
use crate::api::resources::organizations::ORGANISATION_ID;
use crate::InsightlyClient;

/// Records returned by each listing call.
const PAGE: i64 = 5;

/// Runs every section in order.
pub async fn run(client: &InsightlyClient, report: &mut SmokeReport) {
    info!(endpoint = client.endpoint(), "Starting smoke test");
    account(client, report).await;
    lookups(client, report).await;
    listings(client, report).await;
    contact_lifecycle(client, report).await;
    lead_lifecycle(client, report).await;
    organization_lifecycle(client, report).await;
}

/// Account-level reads: the key's user, users, teams and the instance.
pub async fn account(client: &InsightlyClient, report: &mut SmokeReport) {
    if let Some(me) = report.check("current_user()", client.current_user().await) {
        if let Some(id) = id_of(&me, "USER_ID") {
            report.check(&format!("user({id})"), client.user(id).await);
        }
    }
    report.check("users()", client.users().await);
    report.check("instance()", client.instance().await);

    let teams = report.check("teams()", client.teams(&page()).await);
    if let Some(id) = teams.as_deref().and_then(|t| first_id(t, "TEAM_ID")) {
        report.check(&format!("team({id})"), client.team(id).await);
        report.check(
            &format!("team_members({id})"),
            client.team_members(id).await,
        );
    }
}

/// Reference data and per-account lookup lists.
pub async fn lookups(client: &InsightlyClient, report: &mut SmokeReport) {
    report.check("countries()", client.countries().await);
    report.check("currencies()", client.currencies().await);
    report.check("relationships()", client.relationships().await);

    let fields = report.check("custom_fields()", client.custom_fields().await);
    if let Some(name) = fields
        .as_deref()
        .and_then(|f| f.first())
        .and_then(|f| f.get("FIELD_NAME"))
        .and_then(Value::as_str)
    {
        report.check(
            &format!("custom_field({name})"),
            client.custom_field(name).await,
        );
    }

    let pipelines = report.check("pipelines()", client.pipelines().await);
    if let Some(id) = pipelines.as_deref().and_then(|p| first_id(p, "PIPELINE_ID")) {
        report.check(&format!("pipeline({id})"), client.pipeline(id).await);
    }
    let stages = report.check("pipeline_stages()", client.pipeline_stages().await);
    if let Some(id) = stages.as_deref().and_then(|s| first_id(s, "STAGE_ID")) {
        report.check(
            &format!("pipeline_stage({id})"),
            client.pipeline_stage(id).await,
        );
    }

    report.check("file_categories()", client.file_categories().await);
    report.check(
        "opportunity_categories()",
        client.opportunity_categories().await,
    );
    report.check("project_categories()", client.project_categories().await);
    report.check("task_categories()", client.task_categories().await);
    report.check("lead_sources()", client.lead_sources().await);
    report.check("lead_statuses()", client.lead_statuses().await);
    report.check(
        "opportunity_state_reasons()",
        client.opportunity_state_reasons().await,
    );

    report.check("comments()", client.comments().await);
}

/// First page of every record collection, plus one record from each.
pub async fn listings(client: &InsightlyClient, report: &mut SmokeReport) {
    let contacts = report.check(
        "contacts(top 5)",
        client.contacts(&ContactQuery::new().options(page())).await,
    );
    if let Some(id) = contacts.as_deref().and_then(|c| first_id(c, CONTACT_ID)) {
        report.check(&format!("contact({id})"), client.contact(id).await);
    }

    report.check(
        "leads(top 5)",
        client.leads(&LeadQuery::new().options(page())).await,
    );

    let organizations = report.check(
        "organizations(top 5)",
        client
            .organizations(&OrganizationQuery::new().options(page()))
            .await,
    );
    if let Some(id) = organizations
        .as_deref()
        .and_then(|o| first_id(o, ORGANISATION_ID))
    {
        report.check(
            &format!("organization({id})"),
            client.organization(id).await,
        );
        report.check(
            &format!("organization_notes({id})"),
            client.organization_notes(id).await,
        );
    }

    let opportunities = report.check(
        "opportunities(top 5)",
        client.opportunities(&page()).await,
    );
    if let Some(id) = opportunities
        .as_deref()
        .and_then(|o| first_id(o, "OPPORTUNITY_ID"))
    {
        report.check(
            &format!("opportunity({id})"),
            client.opportunity(id).await,
        );
        report.check(
            &format!("opportunity_state_history({id})"),
            client.opportunity_state_history(id).await,
        );
    }

    let projects = report.check("projects(top 5)", client.projects(&page()).await);
    if let Some(id) = projects.as_deref().and_then(|p| first_id(p, "PROJECT_ID")) {
        report.check(&format!("project({id})"), client.project(id).await);
    }

    let tasks = report.check("tasks(top 5)", client.tasks(&page()).await);
    if let Some(id) = tasks.as_deref().and_then(|t| first_id(t, "TASK_ID")) {
        report.check(&format!("task({id})"), client.task(id).await);
        report.check(
            &format!("task_comments({id})"),
            client.task_comments(id).await,
        );
    }

    let notes = report.check("notes(top 5)", client.notes(&page()).await);
    if let Some(id) = notes.as_deref().and_then(|n| first_id(n, "NOTE_ID")) {
        report.check(&format!("note({id})"), client.note(id).await);
        report.check(
            &format!("note_comments({id})"),
            client.note_comments(id).await,
        );
    }

    let emails = report.check("emails(top 5)", client.emails(&page()).await);
    if let Some(id) = emails.as_deref().and_then(|e| first_id(e, "EMAIL_ID")) {
        report.check(&format!("email({id})"), client.email(id).await);
        report.check(
            &format!("email_comments({id})"),
            client.email_comments(id).await,
        );
    }

    report.check("events(top 5)", client.events(&page()).await);
}

/// Creates a contact, reads it back, updates it, deletes it and checks it is gone.
pub async fn contact_lifecycle(client: &InsightlyClient, report: &mut SmokeReport) {
    let contact = json!({
        "SALUTATION": "Mr",
        "FIRST_NAME": "Testy",
        "LAST_NAME": "McTesterson",
    });

    let Some(created) = report.check("add_contact(new)", client.add_contact(&contact).await)
    else {
        return;
    };
    let id = id_of(&created, CONTACT_ID);
    report.check_that(
        "add_contact returned CONTACT_ID",
        id.is_some(),
        "response has no positive CONTACT_ID",
    );
    let Some(id) = id else {
        return;
    };

    report.check(&format!("contact({id})"), client.contact(id).await);
    report.check(
        &format!("contact_emails({id})"),
        client.contact_emails(id).await,
    );
    report.check(
        &format!("contact_notes({id})"),
        client.contact_notes(id).await,
    );
    report.check(
        &format!("contact_tasks({id})"),
        client.contact_tasks(id).await,
    );
    report.check(&format!("tags({id})"), client.tags(id).await);

    let mut updated = created;
    updated.insert("BACKGROUND".to_string(), json!("Created by insightly-smoke"));
    report.check(
        &format!("add_contact({id}) update"),
        client.add_contact(&Value::Object(updated)).await,
    );

    report.check(
        &format!("delete_contact({id})"),
        client.delete_contact(id).await,
    );
    report.check_not_found(
        &format!("contact({id}) after delete"),
        client.contact(id).await,
    );
}

/// Creates and deletes a lead.
pub async fn lead_lifecycle(client: &InsightlyClient, report: &mut SmokeReport) {
    let lead = json!({"FIRST_NAME": "Testy", "LAST_NAME": "McTesterson"});

    let Some(created) = report.check("add_lead(new)", client.add_lead(&lead).await) else {
        return;
    };
    if let Some(id) = id_of(&created, LEAD_ID) {
        report.check(&format!("lead({id})"), client.lead(id).await);
        report.check(&format!("delete_lead({id})"), client.delete_lead(id).await);
    }
}

/// Creates and deletes an organisation.
pub async fn organization_lifecycle(client: &InsightlyClient, report: &mut SmokeReport) {
    let organization = json!({"ORGANISATION_NAME": "Smoke Test Ltd"});

    let Some(created) = report.check(
        "add_organization(new)",
        client.add_organization(&organization).await,
    ) else {
        return;
    };
    if let Some(id) = id_of(&created, ORGANISATION_ID) {
        report.check(
            &format!("delete_organization({id})"),
            client.delete_organization(id).await,
        );
    }
}

fn page() -> QueryOptions {
    QueryOptions::new().top(PAGE)
}

fn id_of(record: &Map<String, Value>, field: &str) -> Option<i64> {
    record.get(field).and_then(positive_id)
}

fn first_id(records: &[Value], field: &str) -> Option<i64> {
    records
        .iter()
        .find_map(|record| record.get(field).and_then(positive_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_skips_records_without_one() {
        let records = vec![json!({"NAME": "a"}), json!({"TEAM_ID": 0}), json!({"TEAM_ID": 12})];
        assert_eq!(first_id(&records, "TEAM_ID"), Some(12));
        assert_eq!(first_id(&[], "TEAM_ID"), None);
    }

    #[test]
    fn test_page_asks_for_five() {
        assert_eq!(page().top, Some(5));
    }
}
