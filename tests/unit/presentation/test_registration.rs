use serde_json::json;
use tourist_hub_client::presentation::{Registration, RegistrationStatus};

#[test]
fn test_registration_status_deserialization() {
    let approved: RegistrationStatus = serde_json::from_value(json!("Approved")).unwrap();
    assert_eq!(approved, RegistrationStatus::Approved);

    let unknown: RegistrationStatus = serde_json::from_value(json!("Waitlisted")).unwrap();
    assert_eq!(unknown, RegistrationStatus::Other("Waitlisted".to_string()));
}

#[test]
fn test_registration_status_display() {
    assert_eq!(RegistrationStatus::Pending.to_string(), "Pending");
    assert_eq!(RegistrationStatus::Rejected.to_string(), "Rejected");
    assert_eq!(
        RegistrationStatus::Other("Cancelled".to_string()).to_string(),
        "Cancelled"
    );
}

#[test]
fn test_unknown_status_survives_round_trip() {
    let registration: Registration =
        serde_json::from_value(json!({"userId": "u-1", "status": "Cancelled"})).unwrap();
    assert_eq!(registration.status_label(), "Cancelled");
    assert!(!registration.has_status(&RegistrationStatus::Pending));

    let back = serde_json::to_value(&registration).unwrap();
    assert_eq!(back["status"], "Cancelled");
}

#[test]
fn test_known_status_serializes_as_wire_text() {
    assert_eq!(
        serde_json::to_value(RegistrationStatus::Approved).unwrap(),
        json!("Approved")
    );
}

#[test]
fn test_registration_with_nested_user() {
    let registration: Registration = serde_json::from_value(json!({
        "registrationId": "r-1",
        "tourEventId": "e-1",
        "userId": "u-1",
        "status": "Approved",
        "registrationDate": "2024-05-01T09:00:00Z",
        "user": {
            "userId": "u-1",
            "firstName": "Sara",
            "lastName": "Khan",
            "emailAddress": "sara@example.com"
        }
    }))
    .unwrap();

    assert!(registration.has_status(&RegistrationStatus::Approved));
    assert_eq!(registration.user.unwrap().full_name(), "Sara Khan");
    assert!(registration.notes.is_none());
}

#[test]
fn test_registration_without_status_stays_unset() {
    let registration: Registration =
        serde_json::from_value(json!({"registrationId": "r-2"})).unwrap();
    assert!(registration.status.is_none());
    assert_eq!(registration.status_label(), "N/A");
    assert!(!registration.has_status(&RegistrationStatus::Pending));

    let back = serde_json::to_value(&registration).unwrap();
    assert!(back.get("status").is_none());
}
