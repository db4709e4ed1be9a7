use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tourvia::error::Error;
use tourvia::terms::TermDraft;
use tourvia::Tourvia;

fn client_for(server: &MockServer) -> Tourvia {
    Tourvia::new(&server.uri()).unwrap()
}

#[tokio::test]
async fn mutations_notify_subscribers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/terms"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "type": "PRIVACY_POLICY", "content": "We collect very little."
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/terms/3"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).terms_manager();
    let mut changes = manager.subscribe();
    assert_eq!(*changes.borrow(), 0);

    let draft = TermDraft {
        kind: "PRIVACY_POLICY".to_string(),
        content: "We collect very little.".to_string(),
        version: None,
    };
    let term = manager.create(&draft).await.unwrap();
    assert_eq!(term.label(), "Privacy Policy");

    changes.changed().await.unwrap();
    assert_eq!(*changes.borrow(), 1);

    manager.delete(3).await.unwrap();
    changes.changed().await.unwrap();
    assert_eq!(*changes.borrow(), 2);
}

#[tokio::test]
async fn failed_mutation_does_not_notify() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/terms"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "content is required"
        })))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).terms_manager();
    let changes = manager.subscribe();

    let draft = TermDraft {
        kind: "PRIVACY_POLICY".to_string(),
        content: String::new(),
        version: None,
    };
    assert!(manager.create(&draft).await.is_err());
    assert_eq!(*changes.borrow(), 0);
    assert!(manager.error().unwrap().contains("content is required"));
}

#[tokio::test]
async fn embedded_error_in_2xx_body_is_a_failure() {
    let mock_server = MockServer::start().await;

    // the backend sometimes reports logical failures inside a 200 body
    Mock::given(method("GET"))
        .and(path("/api/terms/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "terms document has been archived"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.terms().get(9).await;

    match result {
        Err(Error::Api(message)) => assert_eq!(message, "terms document has been archived"),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn list_accepts_both_kind_spellings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/terms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "type": "PRIVACY_POLICY", "content": "a"},
            {"id": 2, "title": "TERMS_OF_SERVICE", "content": "b"}
        ])))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).terms_manager();
    let terms = manager.fetch_all().await.unwrap();

    assert_eq!(terms[0].label(), "Privacy Policy");
    assert_eq!(terms[1].label(), "Terms Of Service");
}
