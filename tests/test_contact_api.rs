mod common;

use common::{is_generated_id, spawn_app, TestResult};
use portfolio_cms::domain::model::{ContactPatch, ContactStatus};
use serde_json::{json, Value};

fn message(name: &str) -> Value {
    json!({
        "name": name,
        "email": "visitor@example.com",
        "subject": "Mariage en juin",
        "category": "mariage",
        "message": "Bonjour, êtes-vous disponible ?"
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_submit_contact_message() -> TestResult {
    let app = spawn_app(true).await?;

    let (status, body) = app.post_json("/api/contact", &message("Claire")).await?;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Message envoyé avec succès. Nous vous répondrons dans les plus brefs délais."
    );
    assert!(is_generated_id(body["data"]["id"].as_str().unwrap(), "contact"));
    assert_eq!(body["data"]["status"], "new");
    assert_eq!(body["data"]["phone"], Value::Null);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_contact_rejects_bad_email() -> TestResult {
    let app = spawn_app(false).await?;

    let mut body = message("Bad");
    body["email"] = json!("visitor-at-example.com");
    let (status, resp) = app.post_json("/api/contact", &body).await?;
    assert_eq!(status, 422);
    assert!(resp["detail"].as_str().unwrap().contains("email"));

    let (_, listed) = app.get_json("/api/contact").await?;
    assert_eq!(listed["pagination"]["total"], 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_contacts_newest_first_with_status_filter() -> TestResult {
    let app = spawn_app(false).await?;

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let (_, body) = app.post_json("/api/contact", &message(name)).await?;
        ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let patch = ContactPatch {
        status: Some(ContactStatus::Replied),
    };
    app.service.contacts.update(&ids[1], &patch).await?.unwrap();

    let (status, body) = app.get_json("/api/contact").await?;
    assert_eq!(status, 200);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["c", "b", "a"]);
    assert_eq!(
        body["pagination"],
        json!({"total": 3, "page": 1, "per_page": 20, "total_pages": 1})
    );

    let (_, replied) = app.get_json("/api/contact?status=replied").await?;
    assert_eq!(replied["pagination"]["total"], 1);
    assert_eq!(replied["data"][0]["name"], "b");

    let (_, fresh) = app.get_json("/api/contact?status=new&per_page=1&page=2").await?;
    assert_eq!(fresh["pagination"]["total"], 2);
    assert_eq!(fresh["pagination"]["total_pages"], 2);
    assert_eq!(fresh["data"][0]["name"], "a");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_contact_query_validation() -> TestResult {
    let app = spawn_app(false).await?;

    for query in ["status=archived", "per_page=101", "page=0"] {
        let (status, _) = app.get_json(&format!("/api/contact?{query}")).await?;
        assert_eq!(status, 422, "query {query}");
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_contact_accepts_date_only_session_date() -> TestResult {
    let app = spawn_app(false).await?;

    let mut body = message("Dates");
    body["date"] = json!("2024-06-01");
    let (status, resp) = app.post_json("/api/contact", &body).await?;
    assert_eq!(status, 200);
    assert_eq!(resp["data"]["date"], "2024-06-01T00:00:00.000000Z");

    body["date"] = json!("le 1er juin");
    let (status, _) = app.post_json("/api/contact", &body).await?;
    assert_eq!(status, 422);
    Ok(())
}
