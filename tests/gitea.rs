mod common;

use common::*;
use gh_to_gitea::{
    GhToGiteaErrorKind, GiteaPlatform, MirrorOutcome, MirrorRequest, RepoPresence,
    TargetPlatform,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gitea(server: &MockServer) -> GiteaPlatform {
    gitea_user_mock().mount(server).await;
    GiteaPlatform::authenticate(&gitea_credentials(server), &github_credentials(server))
        .await
        .unwrap()
}

fn request(name: &str) -> MirrorRequest {
    MirrorRequest {
        repo_name: name.to_string(),
        description: format!("A mirror of {name}"),
        clone_addr: format!("https://github.com/octocat/{name}.git"),
    }
}

#[tokio::test]
async fn authenticate_caches_login() {
    let server = MockServer::start().await;
    gitea_user_mock().expect(1).mount(&server).await;

    let gitea = GiteaPlatform::authenticate(&gitea_credentials(&server), &github_credentials(&server))
        .await
        .unwrap();
    assert_eq!(gitea.get_username(), GT_USER);
    gitea_repo_mock("a", 404).mount(&server).await;
    gitea.repository_exists("a").await.unwrap();
    gitea.repository_exists("a").await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn rejected_token_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token is required"))
        .mount(&server)
        .await;

    let err = GiteaPlatform::authenticate(&gitea_credentials(&server), &github_credentials(&server))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &GhToGiteaErrorKind::Authentication);
}

#[tokio::test]
async fn existence_is_scoped_to_the_login() {
    let server = MockServer::start().await;
    let gitea = gitea(&server).await;
    gitea_repo_mock("present", 200).mount(&server).await;
    gitea_repo_mock("absent", 404).mount(&server).await;
    gitea_repo_mock("flaky", 503).mount(&server).await;

    assert_eq!(
        gitea.repository_exists("present").await.unwrap(),
        RepoPresence::Present
    );
    assert_eq!(
        gitea.repository_exists("absent").await.unwrap(),
        RepoPresence::Absent
    );
    let flaky = gitea.repository_exists("flaky").await.unwrap();
    assert_eq!(flaky, RepoPresence::Unknown(503));
    assert!(!flaky.exists());
}

#[tokio::test]
async fn public_mirror_payload() {
    let server = MockServer::start().await;
    let gitea = gitea(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repos/migrate"))
        .and(header("authorization", format!("token {GT_TOKEN}").as_str()))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "repo_name": "dotfiles",
            "description": "A mirror of dotfiles",
            "clone_addr": "https://github.com/octocat/dotfiles.git",
            "service": "github",
            "wiki": true,
            "auth_token": GH_TOKEN,
            "mirror": true,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = gitea.create_mirror(request("dotfiles"), false).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::Created);
    server.verify().await;
}

#[tokio::test]
async fn private_mirror_payload_carries_credentials() {
    let server = MockServer::start().await;
    let gitea = gitea(&server).await;
    gitea_migrate_mock(201).mount(&server).await;

    gitea.create_mirror(request("secret"), true).await.unwrap();
    let bodies = migrate_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["auth_username"], GH_USER);
    assert_eq!(bodies[0]["auth_password"], GH_TOKEN);
    assert_eq!(bodies[0]["auth_token"], GH_TOKEN);
    assert_eq!(bodies[0]["mirror"], true);
    assert_eq!(bodies[0]["wiki"], true);
    assert_eq!(bodies[0]["service"], "github");
}

#[tokio::test]
async fn conflict_is_already_exists() {
    let server = MockServer::start().await;
    let gitea = gitea(&server).await;
    gitea_migrate_mock(409).mount(&server).await;

    let outcome = gitea.create_mirror(request("dup"), false).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::AlreadyExists);
}

#[tokio::test]
async fn unexpected_status_keeps_diagnostics_without_secrets() {
    let server = MockServer::start().await;
    let gitea = gitea(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repos/migrate"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid clone address"))
        .mount(&server)
        .await;

    let outcome = gitea.create_mirror(request("bad"), true).await.unwrap();
    match outcome {
        MirrorOutcome::UnexpectedFailure {
            status,
            body,
            request,
        } => {
            assert_eq!(status, 422);
            assert_eq!(body, "invalid clone address");
            assert!(request.contains("\"repo_name\":\"bad\""));
            assert!(!request.contains(GH_TOKEN));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}
