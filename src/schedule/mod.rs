//! Schedule Module
//!
//! Typed schedule documents, the match-type vocabulary, time-window
//! resolution, and locale-catalog lookup.

mod document;
mod localize;
mod resolver;
mod types;

// Re-export public types
pub use document::{
    MatchSetting, NodeList, ScheduleData, ScheduleDocument, ScheduleNode, SettingSlot, VsRule,
    VsStage,
};
pub use localize::localized_name;
pub use resolver::resolve_schedule;
pub use types::{Locale, MatchType, ScheduleInfo};
