use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tourvia::auth::UserRole;
use tourvia::bookings::BookingStatus;
use tourvia::incidents::{IncidentDraft, IncidentStatus, PhotoAttachment};
use tourvia::Tourvia;

fn client_for(server: &MockServer) -> Tourvia {
    Tourvia::new(&server.uri()).unwrap()
}

#[tokio::test]
async fn booking_status_change_and_payment_leave_local_state_alone() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "user_id": 4, "status": "PENDING", "is_paid": false}
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/bookings/1/status"))
        .and(body_json(json!({"status": "CONFIRMED"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/bookings/1/mark-paid"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).booking_manager();
    manager.fetch_all().await.unwrap();

    manager.change_status(1, BookingStatus::Confirmed).await.unwrap();
    manager.mark_paid(1).await.unwrap();

    // transitions require a re-fetch to become visible
    assert_eq!(manager.bookings()[0].status, BookingStatus::Pending);
    assert_eq!(manager.bookings()[0].is_paid, Some(false));
    mock_server.verify().await;
}

#[tokio::test]
async fn bookings_for_one_spot_use_the_spot_sub_route() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bookings/spot/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "user_id": 4, "spot_id": 12, "status": "CONFIRMED", "party_size": 2},
            {"id": 5, "user_id": 9, "spot_id": 12, "status": "PENDING"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bookings = client.bookings().list_for_spot(12).await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|b| b.spot_id == Some(12)));
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
    mock_server.verify().await;
}

#[tokio::test]
async fn incident_report_with_photos_appends_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/incidents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 8,
            "user_id": 4,
            "title": "Broken railing",
            "description": "Viewing deck, north side",
            "status": "PENDING",
            "photos": ["https://cdn.tourvia.example/incidents/8/1.jpg"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/incidents/8/status"))
        .and(body_json(json!({"status": "IN_PROGRESS"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).incident_manager();
    let draft = IncidentDraft {
        title: "Broken railing".to_string(),
        description: "Viewing deck, north side".to_string(),
        location: Some("Lookout trail".to_string()),
        photos: vec![PhotoAttachment {
            file_name: "railing.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }],
    };

    let incident = manager.report(&draft).await.unwrap();
    assert_eq!(incident.status, IncidentStatus::Pending);
    assert_eq!(manager.incidents().len(), 1);

    manager.change_status(8, IncidentStatus::InProgress).await.unwrap();
    mock_server.verify().await;
}

#[tokio::test]
async fn role_change_replaces_the_local_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "email": "ana@tourvia.example", "role": "TOURIST"},
            {"id": 2, "email": "ben@tourvia.example", "role": "TOURIST"}
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/users/1/role"))
        .and(body_json(json!({"role": "STAFF"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "email": "ana@tourvia.example", "role": "STAFF"
        })))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).user_manager();
    manager.fetch_all().await.unwrap();

    manager.change_role(1, UserRole::Staff).await.unwrap();

    let users = manager.users();
    assert_eq!(users[0].role, UserRole::Staff);
    assert_eq!(users[1].role, UserRole::Tourist);
}

#[tokio::test]
async fn user_delete_filters_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "email": "ana@tourvia.example", "role": "TOURIST"},
            {"id": 2, "email": "ben@tourvia.example", "role": "TOURIST"}
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let manager = client_for(&mock_server).user_manager();
    manager.fetch_all().await.unwrap();

    manager.delete(2).await.unwrap();
    let users = manager.users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
}
