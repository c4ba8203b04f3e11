#![allow(dead_code)]

use gh_to_gitea::{GiteaCredentials, GithubCredentials};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GH_TOKEN: &str = "ghp_test_token";
pub const GH_USER: &str = "octocat";
pub const GT_TOKEN: &str = "gitea_test_token";
pub const GT_USER: &str = "mirror-bot";

pub fn github_credentials(server: &MockServer) -> GithubCredentials {
    GithubCredentials {
        username: GH_USER.to_string(),
        token: GH_TOKEN.to_string(),
        api_url: server.uri(),
        timeout: None,
    }
}

pub fn gitea_credentials(server: &MockServer) -> GiteaCredentials {
    GiteaCredentials {
        url: server.uri(),
        token: GT_TOKEN.to_string(),
        timeout: None,
    }
}

pub fn gh_repo(name: &str, fork: bool, private: bool, description: Option<&str>) -> Value {
    json!({
        "id": 1,
        "name": name,
        "full_name": format!("{GH_USER}/{name}"),
        "description": description,
        "private": private,
        "fork": fork,
        "html_url": format!("https://github.com/{GH_USER}/{name}"),
        "clone_url": format!("https://github.com/{GH_USER}/{name}.git"),
    })
}

pub fn github_user_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", format!("Bearer {GH_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": GH_USER, "id": 1})))
}

pub fn github_page_mock(page: usize, repos: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .and(query_param("type", "owner"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos))
}

pub fn gitea_user_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .and(header("authorization", format!("token {GT_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": GT_USER, "id": 7})))
}

pub fn gitea_repo_mock(name: &str, status: u16) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/repos/{GT_USER}/{name}")))
        .respond_with(ResponseTemplate::new(status))
}

pub fn gitea_migrate_mock(status: u16) -> Mock {
    Mock::given(method("POST"))
        .and(path("/api/v1/repos/migrate"))
        .respond_with(ResponseTemplate::new(status).set_body_string("{}"))
}

/// Bodies of the migrate calls received by `server`, in order
pub async fn migrate_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == "POST" && r.url.path() == "/api/v1/repos/migrate")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}
