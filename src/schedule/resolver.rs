//! Schedule Resolution
//!
//! Pure selection pipeline: pick the active time window for a match type,
//! extract its setting, and assemble the localized result. No I/O; the
//! caller supplies the already-fetched documents.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::schedule::document::{MatchSetting, ScheduleDocument, ScheduleNode};
use crate::schedule::localize::localized_name;
use crate::schedule::types::{MatchQuery, MatchType, ScheduleInfo};

// == Placeholders ==
const UNKNOWN_RULE: &str = "Unknown Rule";
const UNKNOWN_STAGE: &str = "Unknown Stage";

// == Resolve Schedule ==
/// Resolves the rotation active at `at` for `match_type`.
///
/// Scans the match type's node list in order for the first window whose
/// half-open interval `[startTime, endTime)` contains `at`, filters the
/// setting by submode where the match type requires it, and localizes the
/// rule and stage identifiers against `catalog`. Returns `None` when no
/// window is active or the matched node carries no usable setting.
pub fn resolve_schedule(
    doc: &ScheduleDocument,
    catalog: &Value,
    at: DateTime<Utc>,
    match_type: MatchType,
) -> Option<ScheduleInfo> {
    let query = match_type.query();
    let at_ms = at.timestamp_millis();

    let node = doc
        .data
        .node_list(query.list)
        .iter()
        .find(|node| contains(node, at_ms))?;

    let setting = extract_setting(node, &query)?;

    let rule = match &setting.vs_rule {
        Some(rule) => localized_name(catalog, &rule.id),
        None => UNKNOWN_RULE.to_string(),
    };

    let stage = |index: usize| match setting.vs_stages.get(index) {
        Some(stage) => localized_name(catalog, &stage.id),
        None => UNKNOWN_STAGE.to_string(),
    };

    debug!(%match_type, start = %node.start_time, "resolved active window");

    Some(ScheduleInfo {
        rule,
        stages: [stage(0), stage(1)],
        start_time: node.start_time.clone(),
        end_time: node.end_time.clone(),
    })
}

/// Half-open interval test: `start <= at < end`, compared as epoch
/// milliseconds. Nodes with unparseable timestamps never match.
fn contains(node: &ScheduleNode, at_ms: i64) -> bool {
    let (Some(start), Some(end)) = (parse_ms(&node.start_time), parse_ms(&node.end_time)) else {
        return false;
    };
    at_ms >= start && at_ms < end
}

fn parse_ms(time: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(time)
        .ok()
        .map(|t| t.timestamp_millis())
}

/// Picks the match setting from the node's slot, filtering by the submode
/// discriminator when the match type carries one.
fn extract_setting<'a>(node: &'a ScheduleNode, query: &MatchQuery) -> Option<&'a MatchSetting> {
    let slot = node.setting_slot(query.setting)?;
    match query.submode {
        Some(mode) => slot
            .entries()
            .iter()
            .find(|s| s.mode.as_deref() == Some(mode)),
        None => slot.entries().first(),
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with(lists: Value) -> ScheduleDocument {
        let mut data = json!({
            "regularSchedules": { "nodes": [] },
            "bankaraSchedules": { "nodes": [] },
            "xSchedules": { "nodes": [] },
            "eventSchedules": { "nodes": [] }
        });
        for (key, value) in lists.as_object().unwrap() {
            data[key.as_str()] = value.clone();
        }
        serde_json::from_value(json!({ "data": data })).unwrap()
    }

    fn regular_node(start: &str, end: &str, rule: &str, stages: &[&str]) -> Value {
        json!({
            "startTime": start,
            "endTime": end,
            "regularMatchSetting": {
                "vsRule": { "id": rule },
                "vsStages": stages.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>()
            }
        })
    }

    fn catalog() -> Value {
        json!({
            "area": { "name": "Splat Zones" },
            "turf": { "name": "Turf War" },
            "101": { "name": "Stage A" },
            "102": { "name": "Stage B" },
            "103": { "name": "Stage C" },
            "104": { "name": "Stage D" }
        })
    }

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_resolves_active_regular_window() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T02:00:00Z", "area", &["101", "102"])
            ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Regular)
                .unwrap();

        assert_eq!(
            info,
            ScheduleInfo {
                rule: "Splat Zones".to_string(),
                stages: ["Stage A".to_string(), "Stage B".to_string()],
                start_time: "2024-01-01T00:00:00Z".to_string(),
                end_time: "2024-01-01T02:00:00Z".to_string(),
            }
        );
    }

    #[test]
    fn test_no_active_window_is_absent() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T02:00:00Z", "area", &["101", "102"])
            ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T03:00:00Z"), MatchType::Regular);
        assert!(info.is_none());
    }

    #[test]
    fn test_interval_is_half_open() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T02:00:00Z", "area", &["101"]),
                regular_node("2024-01-01T02:00:00Z", "2024-01-01T04:00:00Z", "turf", &["103"])
            ]}
        }));
        let catalog = catalog();

        // Start instant is included
        let info =
            resolve_schedule(&doc, &catalog, at("2024-01-01T00:00:00Z"), MatchType::Regular)
                .unwrap();
        assert_eq!(info.rule, "Splat Zones");

        // End instant belongs to the next window, not this one
        let info =
            resolve_schedule(&doc, &catalog, at("2024-01-01T02:00:00Z"), MatchType::Regular)
                .unwrap();
        assert_eq!(info.rule, "Turf War");
        assert_eq!(info.start_time, "2024-01-01T02:00:00Z");
    }

    #[test]
    fn test_overlapping_windows_first_in_list_order_wins() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T04:00:00Z", "area", &["101"]),
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T04:00:00Z", "turf", &["103"])
            ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Regular)
                .unwrap();
        assert_eq!(info.rule, "Splat Zones");
    }

    #[test]
    fn test_unparseable_timestamps_never_match() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [
                regular_node("not a time", "2024-01-01T02:00:00Z", "area", &["101"]),
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T02:00:00Z", "turf", &["103"])
            ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Regular)
                .unwrap();
        assert_eq!(info.rule, "Turf War");
    }

    #[test]
    fn test_submode_partitions_shared_window() {
        let doc = doc_with(json!({
            "bankaraSchedules": { "nodes": [ {
                "startTime": "2024-01-01T00:00:00Z",
                "endTime": "2024-01-01T02:00:00Z",
                "bankaraMatchSettings": [
                    { "mode": "CHALLENGE", "vsRule": { "id": "area" }, "vsStages": [ { "id": "101" }, { "id": "102" } ] },
                    { "mode": "OPEN", "vsRule": { "id": "turf" }, "vsStages": [ { "id": "103" }, { "id": "104" } ] }
                ]
            } ]}
        }));
        let catalog = catalog();
        let t = at("2024-01-01T01:00:00Z");

        let open = resolve_schedule(&doc, &catalog, t, MatchType::BankaraOpen).unwrap();
        let challenge = resolve_schedule(&doc, &catalog, t, MatchType::BankaraChallenge).unwrap();

        assert_eq!(open.rule, "Turf War");
        assert_eq!(open.stages, ["Stage C".to_string(), "Stage D".to_string()]);
        assert_eq!(challenge.rule, "Splat Zones");
        assert_eq!(challenge.stages, ["Stage A".to_string(), "Stage B".to_string()]);
        assert_ne!(open, challenge);
    }

    #[test]
    fn test_submode_without_matching_entry_is_absent() {
        let doc = doc_with(json!({
            "bankaraSchedules": { "nodes": [ {
                "startTime": "2024-01-01T00:00:00Z",
                "endTime": "2024-01-01T02:00:00Z",
                "bankaraMatchSettings": [
                    { "mode": "CHALLENGE", "vsStages": [] }
                ]
            } ]}
        }));

        let info = resolve_schedule(
            &doc,
            &catalog(),
            at("2024-01-01T01:00:00Z"),
            MatchType::BankaraOpen,
        );
        assert!(info.is_none());
    }

    #[test]
    fn test_missing_setting_slot_is_absent() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [ {
                "startTime": "2024-01-01T00:00:00Z",
                "endTime": "2024-01-01T02:00:00Z"
            } ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Regular);
        assert!(info.is_none());
    }

    #[test]
    fn test_short_stage_list_renders_placeholders() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T02:00:00Z", "area", &["101"])
            ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Regular)
                .unwrap();
        assert_eq!(info.stages, ["Stage A".to_string(), UNKNOWN_STAGE.to_string()]);
    }

    #[test]
    fn test_missing_rule_renders_placeholder() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [ {
                "startTime": "2024-01-01T00:00:00Z",
                "endTime": "2024-01-01T02:00:00Z",
                "regularMatchSetting": { "vsStages": [ { "id": "101" } ] }
            } ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Regular)
                .unwrap();
        assert_eq!(info.rule, UNKNOWN_RULE);
    }

    #[test]
    fn test_unresolvable_identifier_passes_through_verbatim() {
        let doc = doc_with(json!({
            "regularSchedules": { "nodes": [
                regular_node("2024-01-01T00:00:00Z", "2024-01-01T02:00:00Z", "unknown/rule", &["999"])
            ]}
        }));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Regular)
                .unwrap();
        assert_eq!(info.rule, "unknown/rule");
        assert_eq!(info.stages[0], "999");
    }

    #[test]
    fn test_fest_defaults_to_no_windows() {
        let doc = doc_with(json!({}));

        let info =
            resolve_schedule(&doc, &catalog(), at("2024-01-01T01:00:00Z"), MatchType::Fest);
        assert!(info.is_none());
    }
}
