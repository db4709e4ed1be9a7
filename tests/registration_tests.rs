use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tourvia::error::Error;
use tourvia::registration::{LookupQuery, MemberDraft, RegistrationDraft};
use tourvia::Tourvia;

fn client_for(server: &MockServer) -> Tourvia {
    Tourvia::new(&server.uri()).unwrap()
}

fn draft(leader: &str, members: Vec<&str>) -> RegistrationDraft {
    RegistrationDraft {
        leader_name: leader.to_string(),
        visit_date: "2026-09-01".to_string(),
        members: members
            .into_iter()
            .map(|name| MemberDraft {
                name: name.to_string(),
                age: None,
                sex: None,
                nationality: None,
            })
            .collect(),
    }
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/island-entry/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).registration_manager();

    let result = manager.register(&draft("", vec!["Ana"])).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let result = manager.register(&draft("Ana Reyes", vec![])).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    mock_server.verify().await;
}

#[tokio::test]
async fn successful_registration_returns_the_generated_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/island-entry/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "registration": {
                "id": 11,
                "unique_code": "XYZ",
                "leader_name": "Ana Reyes",
                "visit_date": "2026-09-01",
                "status": "UNPAID",
                "total_fee": 300.0
            },
            "members": [
                {"id": 1, "name": "Ana Reyes"},
                {"id": 2, "name": "Ben Reyes"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).registration_manager();
    let record = manager
        .register(&draft("Ana Reyes", vec!["Ana Reyes", "Ben Reyes"]))
        .await
        .unwrap();

    assert_eq!(record.registration.unique_code, "XYZ");
    assert_eq!(record.members.len(), 2);
    // the new registration is visible locally without a re-fetch
    assert_eq!(manager.registrations().len(), 1);
    assert_eq!(manager.registrations()[0].unique_code, "XYZ");
}

#[tokio::test]
async fn paid_lookup_allows_check_in() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/island-entry/members"))
        .and(query_param("unique_code", "ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "registration": {
                "id": 5,
                "unique_code": "ABC123",
                "leader_name": "Ana Reyes",
                "status": "PAID"
            },
            "members": [{"name": "Ana Reyes"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/island-entry/check-in"))
        .and(body_json(json!({"unique_code": "ABC123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "checked in"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).registration_manager();
    let record = manager
        .lookup(&LookupQuery::UniqueCode("ABC123".to_string()))
        .await
        .unwrap();

    assert!(record.can_check_in());
    assert!(!record.needs_payment());

    manager.check_in(&record.registration.unique_code).await.unwrap();
    mock_server.verify().await;
}

#[tokio::test]
async fn unpaid_lookup_requires_payment_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/island-entry/members"))
        .and(query_param("name", "Ana Reyes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "registration": {
                "id": 5,
                "unique_code": "ABC123",
                "leader_name": "Ana Reyes",
                "status": "UNPAID"
            },
            "members": []
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/island-entry/5/mark-paid"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).registration_manager();
    let record = manager
        .lookup(&LookupQuery::LeaderName("Ana Reyes".to_string()))
        .await
        .unwrap();

    assert!(!record.can_check_in());
    assert!(record.needs_payment());

    manager.mark_paid(record.registration.id).await.unwrap();
    mock_server.verify().await;
}

#[tokio::test]
async fn export_returns_raw_xlsx_bytes() {
    let mock_server = MockServer::start().await;

    // xlsx files are zip containers; PK is the zip magic
    let body = b"PK\x03\x04fake-xlsx-payload".to_vec();
    Mock::given(method("GET"))
        .and(path("/api/island-entry/export"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).registration_manager();
    let bytes = manager.export_xlsx().await.unwrap();

    assert_eq!(bytes, body);
}

#[tokio::test]
async fn lookup_miss_surfaces_the_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/island-entry/members"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "registration not found"
        })))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).registration_manager();
    let result = manager
        .lookup(&LookupQuery::UniqueCode("NOPE".to_string()))
        .await;

    match result {
        Err(Error::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "registration not found");
        }
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
    assert!(manager.error().unwrap().contains("registration not found"));
}
