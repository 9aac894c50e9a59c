//! Unit tests for MLB Stats API types

use super::*;
use serde_json::json;

#[cfg(test)]
mod people_tests {
    use super::*;

    #[test]
    fn test_search_person_to_summary() {
        let envelope: PeopleEnvelope = serde_json::from_value(json!({
            "copyright": "Copyright 2024 MLB Advanced Media, L.P.",
            "people": [
                {
                    "id": 592450,
                    "fullName": "Aaron Judge",
                    "currentTeam": { "id": 147, "name": "New York Yankees" }
                }
            ]
        }))
        .unwrap();

        let summaries: Vec<PlayerSummary> =
            envelope.people.into_iter().map(PlayerSummary::from).collect();
        assert_eq!(
            summaries,
            vec![PlayerSummary {
                id: PlayerId::new(592450),
                full_name: "Aaron Judge".to_string(),
                current_team: Some("New York Yankees".to_string()),
            }]
        );
    }

    #[test]
    fn test_person_without_team() {
        let person: Person = serde_json::from_value(json!({
            "id": 121578,
            "fullName": "Babe Ruth"
        }))
        .unwrap();

        let summary = PlayerSummary::from(person.clone());
        assert_eq!(summary.current_team, None);

        let meta = PlayerMetadata::from(person);
        assert_eq!(meta.team_id, None);
        assert_eq!(meta.current_team, None);
        assert_eq!(meta.primary_position, None);
    }

    #[test]
    fn test_person_to_metadata() {
        let person: Person = serde_json::from_value(json!({
            "id": 660271,
            "fullName": "Shohei Ohtani",
            "primaryPosition": { "code": "Y", "abbreviation": "TWP" },
            "currentTeam": { "id": 119, "name": "Los Angeles Dodgers", "link": "/api/v1/teams/119" }
        }))
        .unwrap();

        let meta = PlayerMetadata::from(person);
        assert_eq!(meta.id, PlayerId::new(660271));
        assert_eq!(meta.full_name, "Shohei Ohtani");
        assert_eq!(meta.primary_position.as_deref(), Some("TWP"));
        assert_eq!(meta.current_team.as_deref(), Some("Los Angeles Dodgers"));
        assert_eq!(meta.team_id, Some(TeamId::new(119)));
    }

    #[test]
    fn test_missing_people_key_is_empty() {
        let envelope: PeopleEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.people.is_empty());
    }

    #[test]
    fn test_person_missing_required_fields_fails() {
        let missing_name = serde_json::from_value::<PeopleEnvelope>(json!({
            "people": [ { "id": 1 } ]
        }));
        assert!(missing_name.is_err());

        let missing_id = serde_json::from_value::<PeopleEnvelope>(json!({
            "people": [ { "fullName": "No Id" } ]
        }));
        assert!(missing_id.is_err());
    }

    #[test]
    fn test_metadata_serializes_with_upstream_names() {
        let meta = PlayerMetadata {
            id: PlayerId::new(1),
            full_name: "Test Player".to_string(),
            primary_position: Some("SS".to_string()),
            current_team: None,
            team_id: Some(TeamId::new(42)),
        };

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["fullName"], "Test Player");
        assert_eq!(value["primaryPosition"], "SS");
        assert_eq!(value["currentTeam"], serde_json::Value::Null);
        assert_eq!(value["teamId"], 42);
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn test_first_split_of_first_group_is_used() {
        let envelope: StatsEnvelope = serde_json::from_value(json!({
            "stats": [
                {
                    "type": { "displayName": "career" },
                    "group": { "displayName": "hitting" },
                    "splits": [
                        { "stat": { "avg": ".281", "homeRuns": 315 } },
                        { "stat": { "avg": ".999", "homeRuns": 1 } }
                    ]
                },
                {
                    "splits": [ { "stat": { "avg": ".000" } } ]
                }
            ]
        }))
        .unwrap();

        let record = envelope.into_stat_record(PlayerId::new(592450)).unwrap();
        assert_eq!(record.player_id, PlayerId::new(592450));
        assert_eq!(record.get("avg"), Some(&json!(".281")));
        assert_eq!(record.get("homeRuns"), Some(&json!(315)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_empty_payload_shapes_yield_none() {
        let shapes = [
            json!({}),
            json!({ "stats": [] }),
            json!({ "stats": [ { "splits": [] } ] }),
            json!({ "stats": [ { } ] }),
            json!({ "stats": [ { "splits": [ { } ] } ] }),
            json!({ "stats": [ { "splits": [ { "stat": {} } ] } ] }),
        ];

        for shape in shapes {
            let envelope: StatsEnvelope = serde_json::from_value(shape.clone()).unwrap();
            assert!(
                envelope.into_stat_record(PlayerId::new(1)).is_none(),
                "expected no record for {shape}"
            );
        }
    }

    #[test]
    fn test_stat_record_preserves_key_order() {
        let envelope: StatsEnvelope = serde_json::from_value(json!({
            "stats": [ { "splits": [ { "stat": {
                "gamesPlayed": 150, "runs": 100, "avg": ".300", "atBats": 600
            } } ] } ]
        }))
        .unwrap();

        let record = envelope.into_stat_record(PlayerId::new(7)).unwrap();
        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["gamesPlayed", "runs", "avg", "atBats"]);
    }

    #[test]
    fn test_stat_record_serializes_flat() {
        let mut stats = Map::new();
        stats.insert("avg".to_string(), json!(".250"));
        let record = StatRecord {
            player_id: PlayerId::new(9),
            stats,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({ "player_id": 9, "avg": ".250" }));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!(".312")), ".312");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!(true)), "true");
    }
}
