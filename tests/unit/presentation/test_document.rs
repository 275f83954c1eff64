use serde_json::json;
use tourist_hub_client::presentation::{Activity, Document};

#[test]
fn test_document_deserialization() {
    let document: Document = serde_json::from_value(json!({
        "documentId": "d-1",
        "fileName": "passport.pdf",
        "type": "passport",
        "description": "Main passport",
        "uploadDate": "2024-05-02T10:15:00.000Z",
        "fileSize": 1536
    }))
    .unwrap();

    assert_eq!(document.document_type, "passport");
    assert_eq!(document.human_size(), "1.50 KB");
    assert_eq!(document.upload_day(), "2024-05-02");
    assert_eq!(document.description_or_default(), "Main passport");
}

#[test]
fn test_document_defaults() {
    let document = Document {
        document_id: "d-2".to_string(),
        description: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(document.human_size(), "0 Bytes");
    assert_eq!(document.upload_day(), "unknown");
    assert_eq!(document.description_or_default(), "No description");
}

#[test]
fn test_activity_deserialization() {
    let activity: Activity = serde_json::from_value(json!({
        "activityId": "a-1",
        "activityDate": "2024-06-16",
        "islamicDate": "10 Dhul Hijjah 1445",
        "activityType": "Religious",
        "description": "First Umrah performance",
        "startTime": "05:00",
        "endTime": "12:00",
        "location": "Masjid al-Haram"
    }))
    .unwrap();

    assert_eq!(activity.islamic_date.as_deref(), Some("10 Dhul Hijjah 1445"));
    assert!(activity.web_link.is_none());
    assert!(activity.extra.is_empty());
}
