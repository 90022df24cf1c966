//! End-to-end tests: roster file on disk to formatted reply.

use std::fs;

use sutradhara_agent::Router;
use sutradhara_core::{Mode, Offline};
use sutradhara_skills::{RosterError, RosterLoader};
use tempfile::tempdir;

#[tokio::test]
async fn test_roster_file_to_reply() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("members.json");
    fs::write(
        &path,
        r#"{"data": [
            {"name": "Isha", "USN": "1SN21", "points": 64, "Tech-skills": {"Machine Learning": 2}},
            {"name": "Jay", "USN": "1SN22", "points": 88, "Tech-skills": ["machine learning", "SQL"]},
            {"name": "Kavya", "USN": "1SN23", "points": 75, "Soft-skills": ["Design"]}
        ]}"#,
    )
    .unwrap();

    let members = RosterLoader::new()
        .add_path(&path)
        .add_path(dir.path().join("missing.json"))
        .load_all()
        .await
        .unwrap();
    assert_eq!(members.len(), 3);

    let router = Router::new(Offline);
    let mut session = router.session();
    let reply = router
        .respond(
            &mut session,
            "Find me 5 members for Machine Learning",
            &members,
            Mode::FindMembers,
        )
        .await;

    let jay = reply.find("Jay").unwrap();
    let isha = reply.find("Isha").unwrap();
    assert!(jay < isha, "{reply}");
    assert!(!reply.contains("Kavya"));
}

#[tokio::test]
async fn test_malformed_roster_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("members.json");
    fs::write(&path, "{ not json").unwrap();

    let err = RosterLoader::load(&path).await.unwrap_err();
    assert!(matches!(err, RosterError::Parse(_)));

    let err = RosterLoader::load(&dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::ReadFile { .. }));
}
