//! Schedule Document Model
//!
//! Typed shape of the upstream schedule document, validated once at the
//! repository boundary. Only the fields the resolver actually reads are
//! modeled; everything else in the upstream JSON is ignored.

use serde::Deserialize;

use crate::schedule::types::{NodeListKey, SettingKey};

// == Document Root ==
/// The raw schedule document, rooted at its `data` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDocument {
    pub data: ScheduleData,
}

/// Per-match-type node lists.
///
/// All lists are required except `festSchedules`, which the upstream omits
/// outside fest periods and therefore defaults to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    pub regular_schedules: NodeList,
    pub bankara_schedules: NodeList,
    pub x_schedules: NodeList,
    pub event_schedules: NodeList,
    #[serde(default)]
    pub fest_schedules: NodeList,
}

impl ScheduleData {
    /// Returns the node list a match type scans.
    pub(crate) fn node_list(&self, key: NodeListKey) -> &[ScheduleNode] {
        let list = match key {
            NodeListKey::Regular => &self.regular_schedules,
            NodeListKey::Bankara => &self.bankara_schedules,
            NodeListKey::X => &self.x_schedules,
            NodeListKey::Event => &self.event_schedules,
            NodeListKey::Fest => &self.fest_schedules,
        };
        &list.nodes
    }
}

/// A `{ nodes: [...] }` wrapper as the upstream nests its lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<ScheduleNode>,
}

// == Schedule Node ==
/// One rotation window with its per-match-type setting slots.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleNode {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub regular_match_setting: Option<SettingSlot>,
    #[serde(default)]
    pub bankara_match_settings: Option<SettingSlot>,
    #[serde(default)]
    pub x_match_setting: Option<SettingSlot>,
    #[serde(default)]
    pub league_match_setting: Option<SettingSlot>,
    #[serde(default)]
    pub fest_match_setting: Option<SettingSlot>,
}

impl ScheduleNode {
    /// Returns the setting slot a match type reads, if the node carries it.
    pub(crate) fn setting_slot(&self, key: SettingKey) -> Option<&SettingSlot> {
        match key {
            SettingKey::Regular => self.regular_match_setting.as_ref(),
            SettingKey::Bankara => self.bankara_match_settings.as_ref(),
            SettingKey::X => self.x_match_setting.as_ref(),
            SettingKey::League => self.league_match_setting.as_ref(),
            SettingKey::Fest => self.fest_match_setting.as_ref(),
        }
    }
}

// == Setting Slot ==
/// A setting slot holding either one setting or a list of them.
///
/// `bankaraMatchSettings` is a list partitioned by the `mode` field; the
/// other slots hold a single object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SettingSlot {
    Many(Vec<MatchSetting>),
    One(Box<MatchSetting>),
}

impl SettingSlot {
    /// Uniform view over the slot's settings.
    pub fn entries(&self) -> &[MatchSetting] {
        match self {
            SettingSlot::Many(settings) => settings,
            SettingSlot::One(setting) => std::slice::from_ref(setting),
        }
    }
}

// == Match Setting ==
/// Rule and stage identifiers for one match setting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSetting {
    /// Submode discriminator for settings sharing one window
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub vs_rule: Option<VsRule>,
    #[serde(default)]
    pub vs_stages: Vec<VsStage>,
}

/// Rule reference by opaque identifier path.
#[derive(Debug, Clone, Deserialize)]
pub struct VsRule {
    pub id: String,
}

/// Stage reference by opaque identifier path.
#[derive(Debug, Clone, Deserialize)]
pub struct VsStage {
    pub id: String,
}
