//! Repository listing tests against a mock GitHub API

use repos_export::github::{GitHubClient, Permission};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build one repository object as the listing endpoint returns it
fn repo_json(name: &str, owner: &str, push: Option<bool>) -> serde_json::Value {
    let mut repo = json!({
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "description": format!("{} repository", name),
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "private": false,
        "language": "Rust",
        "stargazers_count": 7,
        "updated_at": "2024-03-01T12:00:00Z",
        "owner": { "login": owner }
    });

    if let Some(push) = push {
        repo["permissions"] = json!({ "admin": false, "push": push, "pull": true });
    }

    repo
}

/// Mount a page of the listing endpoint for `owner`
async fn mount_page(server: &MockServer, owner: &str, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", owner)))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_owned_and_pushable_repos_are_kept() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "acme",
        1,
        json!([
            repo_json("widget", "acme", Some(true)),
            repo_json("helper", "bob", Some(true)),
        ]),
    )
    .await;
    mount_page(&server, "acme", 2, json!([])).await;

    let client = GitHubClient::with_api_base(None, server.uri()).unwrap();
    let records = client.list_repos_with_write_access("acme").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "widget");
    assert_eq!(records[0].permissions, Permission::Admin);
    assert_eq!(records[1].name, "helper");
    assert_eq!(records[1].permissions, Permission::Write);
}

#[tokio::test]
async fn test_read_only_collaborations_are_excluded() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "acme",
        1,
        json!([
            repo_json("widget", "acme", Some(true)),
            repo_json("library", "bob", Some(false)),
            repo_json("docs", "carol", None),
        ]),
    )
    .await;
    mount_page(&server, "acme", 2, json!([])).await;

    let client = GitHubClient::with_api_base(None, server.uri()).unwrap();
    let records = client.list_repos_with_write_access("acme").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "widget");
}

#[tokio::test]
async fn test_anonymous_listing_without_permissions_objects() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "acme",
        1,
        json!([
            repo_json("widget", "acme", None),
            repo_json("gadget", "acme", None),
        ]),
    )
    .await;
    mount_page(&server, "acme", 2, json!([])).await;

    let client = GitHubClient::with_api_base(None, server.uri()).unwrap();
    let records = client.list_repos_with_write_access("acme").await.unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.permissions == Permission::Admin));
}

#[tokio::test]
async fn test_api_order_is_preserved_across_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "acme",
        1,
        json!([
            repo_json("newest", "acme", None),
            repo_json("middle", "acme", None),
        ]),
    )
    .await;
    mount_page(&server, "acme", 2, json!([repo_json("oldest", "acme", None)])).await;
    mount_page(&server, "acme", 3, json!([])).await;

    let client = GitHubClient::with_api_base(None, server.uri()).unwrap();
    let records = client.list_repos_with_write_access("acme").await.unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_empty_first_page_yields_no_repositories() {
    let server = MockServer::start().await;
    mount_page(&server, "acme", 1, json!([])).await;

    let client = GitHubClient::with_api_base(None, server.uri()).unwrap();
    let records = client.list_repos_with_write_access("acme").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_unauthorized_response_aborts_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/acme/repos"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client =
        GitHubClient::with_api_base(Some("bad-token".to_string()), server.uri()).unwrap();
    let result = client.list_repos_with_write_access("acme").await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("401"));
}

#[tokio::test]
async fn test_failure_on_later_page_discards_earlier_pages() {
    let server = MockServer::start().await;
    mount_page(&server, "acme", 1, json!([repo_json("widget", "acme", None)])).await;
    Mock::given(method("GET"))
        .and(path("/users/acme/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base(None, server.uri()).unwrap();
    let result = client.list_repos_with_write_access("acme").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_request_shape_matches_listing_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/acme/repos"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .and(query_param("sort", "updated"))
        .and(query_param("direction", "desc"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .and(header("Authorization", "token secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubClient::with_api_base(Some("secret".to_string()), server.uri()).unwrap();
    let records = client.list_repos_with_write_access("acme").await.unwrap();

    assert!(records.is_empty());
}
