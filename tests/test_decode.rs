use paceline_gateway::models::{AggregatedEntry, Organization, Track, TrackEntry};

#[test]
fn test_entry_missing_fields_decode_to_defaults() {
    let entry: TrackEntry = serde_json::from_str(r#"{"userId": "u1"}"#).unwrap();

    assert_eq!(entry.user_id, "u1");
    assert_eq!(entry.user_name, "");
    assert_eq!(entry.rank, 0);
    assert_eq!(entry.base_score, 0.0);
    assert_eq!(entry.total_score, 0.0);
    assert_eq!(entry.current_streak, 0);
    assert_eq!(entry.longest_streak, 0);
    assert_eq!(entry.streak_multiplier, 1.0);
}

#[test]
fn test_entry_full_payload_decodes() {
    let entry: TrackEntry = serde_json::from_str(
        r#"{
            "rank": 2,
            "userId": "u7",
            "userName": "Ada",
            "baseScore": 10.5,
            "totalScore": 17.85,
            "currentStreak": 7,
            "longestStreak": 9,
            "streakMultiplier": 1.7
        }"#,
    )
    .unwrap();

    assert_eq!(entry.rank, 2);
    assert_eq!(entry.user_id, "u7");
    assert_eq!(entry.user_name, "Ada");
    assert_eq!(entry.base_score, 10.5);
    assert_eq!(entry.total_score, 17.85);
    assert_eq!(entry.current_streak, 7);
    assert_eq!(entry.longest_streak, 9);
    assert_eq!(entry.streak_multiplier, 1.7);
}

#[test]
fn test_track_accepts_underscore_id_and_week_number() {
    let track: Track =
        serde_json::from_str(r#"{"_id": "t1", "name": "Morning runs", "weekNumber": 3}"#).unwrap();

    assert_eq!(track.id, "t1");
    assert_eq!(track.name, "Morning runs");
    assert_eq!(track.current_week, Some(3));
    assert_eq!(track.description, None);
    assert_eq!(track.member_count, None);
}

#[test]
fn test_track_accepts_plain_id_and_current_week() {
    let track: Track = serde_json::from_str(
        r#"{"id": "t2", "name": "Daily reading", "currentWeek": 5, "memberCount": 12}"#,
    )
    .unwrap();

    assert_eq!(track.id, "t2");
    assert_eq!(track.current_week, Some(5));
    assert_eq!(track.member_count, Some(12));
}

#[test]
fn test_organization_accepts_underscore_id() {
    let org: Organization =
        serde_json::from_str(r#"{"_id": "org-1", "name": "Runners Club", "trackCount": 4}"#)
            .unwrap();

    assert_eq!(org.id, "org-1");
    assert_eq!(org.name, "Runners Club");
    assert_eq!(org.track_count, Some(4));
    assert_eq!(org.member_count, None);
    assert_eq!(org.created_at, None);
}

#[test]
fn test_aggregated_entry_serializes_camel_case() {
    let entry = AggregatedEntry {
        rank: 1,
        user_id: "u1".to_string(),
        user_name: "Ada".to_string(),
        base_score: 15.0,
        total_score: 22.0,
        current_streak: 7,
        streak_multiplier: 1.7,
    };

    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["rank"], 1);
    assert_eq!(json["userId"], "u1");
    assert_eq!(json["userName"], "Ada");
    assert_eq!(json["baseScore"], 15.0);
    assert_eq!(json["totalScore"], 22.0);
    assert_eq!(json["currentStreak"], 7);
    assert_eq!(json["streakMultiplier"], 1.7);
}
