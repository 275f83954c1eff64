use crate::common::{
    EMAIL, PASSWORD, login_body, logged_in_client, tour_event_json, tourist_json,
};
use mockito::{Matcher, Server};
use serde_json::json;
use tourist_hub_client::prelude::*;

#[tokio::test]
async fn test_register_and_setup_profile() {
    setup_logger();
    let mut server = Server::new_async().await;

    let register = server
        .mock("POST", REGISTER_PATH)
        .match_body(Matcher::PartialJson(json!({
            "emailAddress": EMAIL,
            "firstName": "Sara",
            "userType": "Tourist"
        })))
        .with_status(201)
        .with_body(json!({"userId": "u-1", "emailAddress": EMAIL}).to_string())
        .expect(1)
        .create_async()
        .await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_body(login_body("A1", "R1", tourist_json()))
        .expect(1)
        .create_async()
        .await;
    let profile = server
        .mock("PUT", "/api/users/u-1")
        .match_header("authorization", "Bearer A1")
        .match_body(Matcher::Json(json!({
            "passportNumber": "P1234567",
            "dateOfBirth": "1990-04-01",
            "gender": "Female"
        })))
        .with_status(200)
        .with_body(
            json!({
                "userId": "u-1",
                "firstName": "Sara",
                "lastName": "Khan",
                "emailAddress": EMAIL,
                "passportNumber": "P1234567"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = Arc::new(TouristHubClient::with_base_url(&server.url()).unwrap());
    let workflow = TouristServiceImpl::new(client.clone());
    let registration = TouristRegistration {
        email_address: EMAIL.to_string(),
        password: PASSWORD.to_string(),
        first_name: "Sara".to_string(),
        last_name: "Khan".to_string(),
        passport_number: Some("P1234567".to_string()),
        date_of_birth: Some("1990-04-01".to_string()),
        gender: Some("Female".to_string()),
        ..Default::default()
    };

    let user = workflow.register_and_setup_profile(&registration).await.unwrap();

    register.assert_async().await;
    login.assert_async().await;
    profile.assert_async().await;
    assert_eq!(user.user_id, "u-1");
    assert_eq!(user.extra.get("passportNumber"), Some(&json!("P1234567")));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_register_failure_stops_workflow() {
    setup_logger();
    let mut server = Server::new_async().await;

    let _register = server
        .mock("POST", REGISTER_PATH)
        .with_status(409)
        .with_body(json!({"error": {"code": "EMAIL_EXISTS", "message": "Email already registered"}}).to_string())
        .create_async()
        .await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .expect(0)
        .create_async()
        .await;

    let client = Arc::new(TouristHubClient::with_base_url(&server.url()).unwrap());
    let workflow = TouristServiceImpl::new(client);
    let registration = TouristRegistration {
        email_address: EMAIL.to_string(),
        password: PASSWORD.to_string(),
        ..Default::default()
    };

    let result = workflow.register_and_setup_profile(&registration).await;

    login.assert_async().await;
    assert_eq!(result.unwrap_err().status().map(|s| s.as_u16()), Some(409));
}

#[tokio::test]
async fn test_browse_tour_templates_with_filters() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let templates = server
        .mock("GET", TOUR_TEMPLATES_PATH)
        .match_query(Matcher::UrlEncoded("type".into(), "Hajj".into()))
        .with_status(200)
        .with_body(
            json!([{
                "templateId": "t-1",
                "templateName": "Hajj 2024",
                "type": "Hajj",
                "startDate": "2024-06-10",
                "endDate": "2024-06-30",
                "sitesToVisit": ["Mina", "Arafat", "Muzdalifah"]
            }])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let result = workflow
        .browse_tour_templates(&json!({"type": "Hajj"}))
        .await
        .unwrap();

    templates.assert_async().await;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].sites_to_visit.len(), 3);
}

#[tokio::test]
async fn test_view_available_tour_events_without_filters() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let events = server
        .mock("GET", TOUR_EVENTS_PATH)
        .with_status(200)
        .with_body(json!([tour_event_json("e-1", 4, "Active", &[])]).to_string())
        .expect(1)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let result = workflow.view_available_tour_events(&Value::Null).await.unwrap();

    events.assert_async().await;
    assert_eq!(result[0].remaining_tourists, 4);
}

#[tokio::test]
async fn test_register_for_tour() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let _event = server
        .mock("GET", "/api/tour-events/e-1")
        .with_status(200)
        .with_body(tour_event_json("e-1", 3, "Active", &[]).to_string())
        .create_async()
        .await;
    let register = server
        .mock("POST", "/api/tour-events/e-1/register")
        .match_header("authorization", "Bearer A1")
        .with_status(201)
        .with_body(r#"{"registrationId":"r-1","tourEventId":"e-1","userId":"u-1","status":"Pending"}"#)
        .expect(1)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let registration = workflow.register_for_tour("e-1").await.unwrap();

    register.assert_async().await;
    assert_eq!(registration.status, Some(RegistrationStatus::Pending));
    assert_eq!(registration.registration_id.as_deref(), Some("r-1"));
}

#[tokio::test]
async fn test_register_for_fully_booked_tour_is_refused() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let _event = server
        .mock("GET", "/api/tour-events/e-1")
        .with_status(200)
        .with_body(tour_event_json("e-1", 0, "Active", &[]).to_string())
        .create_async()
        .await;
    let register = server
        .mock("POST", "/api/tour-events/e-1/register")
        .expect(0)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let result = workflow.register_for_tour("e-1").await;

    register.assert_async().await;
    match result {
        Err(AppError::InvalidInput(message)) => assert_eq!(message, "Tour is fully booked"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_for_inactive_tour_is_refused() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let _event = server
        .mock("GET", "/api/tour-events/e-2")
        .with_status(200)
        .with_body(tour_event_json("e-2", 5, "Draft", &[]).to_string())
        .create_async()
        .await;
    let register = server
        .mock("POST", "/api/tour-events/e-2/register")
        .expect(0)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let result = workflow.register_for_tour("e-2").await;

    register.assert_async().await;
    match result {
        Err(AppError::InvalidInput(message)) => assert_eq!(
            message,
            "Tour is not available for registration (Status: Draft)"
        ),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_view_tour_schedule() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let schedule = server
        .mock("GET", "/api/tour-events/e-1/schedule")
        .with_status(200)
        .with_body(
            json!([
                {"activityId": "a-1", "activityDate": "2024-12-01", "activityType": "Arrival",
                 "description": "Hotel check-in", "startTime": "14:00", "endTime": "18:00",
                 "location": "Makkah"},
                {"activityId": "a-2", "activityDate": "2024-12-02", "activityType": "Religious",
                 "description": "Umrah", "startTime": "05:00", "endTime": "10:00",
                 "location": "Masjid al-Haram", "webLink": "https://example.com/guide"}
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let activities = workflow.view_tour_schedule("e-1").await.unwrap();

    schedule.assert_async().await;
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[1].web_link.as_deref(), Some("https://example.com/guide"));
}

#[tokio::test]
async fn test_upload_document() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("passport.jpg");
    std::fs::write(&file_path, b"jpeg-data").unwrap();

    let upload = server
        .mock("POST", DOCUMENTS_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="type"\r\n\r\npassport"#.to_string()),
            Matcher::Regex(r#"name="description"\r\n\r\nPassport scan"#.to_string()),
            Matcher::Regex("jpeg-data".to_string()),
        ]))
        .with_status(201)
        .with_body(r#"{"documentId":"d-1","fileName":"passport.jpg","type":"passport","fileSize":9}"#)
        .expect(1)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let document = workflow
        .upload_document(&file_path, "passport", "Passport scan")
        .await
        .unwrap();

    upload.assert_async().await;
    assert_eq!(document.file_name, "passport.jpg");
}

#[tokio::test]
async fn test_view_my_documents() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let documents = server
        .mock("GET", DOCUMENTS_PATH)
        .with_status(200)
        .with_body(
            r#"[{"documentId":"d-1","fileName":"passport.jpg","type":"passport","fileSize":2048,"uploadDate":"2024-05-01T10:00:00Z"}]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let result = workflow.view_my_documents().await.unwrap();

    documents.assert_async().await;
    assert_eq!(result[0].human_size(), "2.00 KB");
}

#[tokio::test]
async fn test_download_blank_forms() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let _forms = server
        .mock("GET", BLANK_FORMS_PATH)
        .with_status(200)
        .with_body("%PDF-1.4 forms")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join(DEFAULT_FORMS_FILE);
    let workflow = TouristServiceImpl::new(client);
    let saved = workflow.download_blank_forms(&save_path).await.unwrap();

    assert_eq!(std::fs::read_to_string(saved).unwrap(), "%PDF-1.4 forms");
}

#[tokio::test]
async fn test_view_my_registrations_filters_by_current_user() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let _events = server
        .mock("GET", TOUR_EVENTS_PATH)
        .with_status(200)
        .with_body(
            json!([
                tour_event_json("e-1", 3, "Active", &["u-1", "u-5"]),
                tour_event_json("e-2", 8, "Active", &["u-5"]),
                tour_event_json("e-3", 0, "Completed", &["u-1"])
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let registered = workflow.view_my_registrations().await.unwrap();

    let ids: Vec<&str> = registered.iter().map(|e| e.tour_event_id.as_str()).collect();
    assert_eq!(ids, vec!["e-1", "e-3"]);
}

#[tokio::test]
async fn test_view_my_registrations_requires_login() {
    let mut server = Server::new_async().await;
    let events = server
        .mock("GET", TOUR_EVENTS_PATH)
        .expect(0)
        .create_async()
        .await;

    let client = Arc::new(TouristHubClient::with_base_url(&server.url()).unwrap());
    let workflow = TouristServiceImpl::new(client);
    let result = workflow.view_my_registrations().await;

    events.assert_async().await;
    assert!(matches!(result, Err(AppError::NotAuthenticated)));
}

#[tokio::test]
async fn test_update_profile() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, tourist_json()).await;

    let update = server
        .mock("PUT", "/api/users/u-1")
        .match_body(Matcher::Json(json!({"phoneNumber": "+44 7700 900999"})))
        .with_status(200)
        .with_body(
            json!({
                "userId": "u-1",
                "firstName": "Sara",
                "lastName": "Khan",
                "emailAddress": EMAIL,
                "phoneNumber": "+44 7700 900999"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let workflow = TouristServiceImpl::new(client);
    let changes = ProfileUpdate {
        phone_number: Some("+44 7700 900999".to_string()),
        ..Default::default()
    };
    let user = workflow.update_profile(&changes).await.unwrap();

    update.assert_async().await;
    assert_eq!(user.phone_number.as_deref(), Some("+44 7700 900999"));
}
