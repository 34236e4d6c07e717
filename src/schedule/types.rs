//! Schedule Vocabulary
//!
//! Closed sets of match types and locales, and the resolved schedule
//! output shape.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ClientError;

// == Match Type ==
/// The six online match rotations.
///
/// Each variant maps to a fixed (node list, setting slot, submode) triple
/// via [`MatchType::query`]; the mapping is part of the contract, not
/// runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Regular (Turf War)
    Regular,
    /// Anarchy Battle, Open
    BankaraOpen,
    /// Anarchy Battle, Series
    BankaraChallenge,
    /// X Battle
    XMatch,
    /// Challenge (league) events
    Event,
    /// Splatfest battles, only populated while a fest runs
    Fest,
}

/// Which node list of the document a match type scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeListKey {
    Regular,
    Bankara,
    X,
    Event,
    Fest,
}

/// Which per-node setting slot a match type reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingKey {
    Regular,
    Bankara,
    X,
    League,
    Fest,
}

/// The fixed lookup triple for one match type.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MatchQuery {
    pub list: NodeListKey,
    pub setting: SettingKey,
    /// Discriminator matched against a setting's `mode` field, for match
    /// types that share one node list
    pub submode: Option<&'static str>,
}

impl MatchType {
    /// Returns the lookup triple for this match type.
    pub(crate) fn query(self) -> MatchQuery {
        match self {
            MatchType::Regular => MatchQuery {
                list: NodeListKey::Regular,
                setting: SettingKey::Regular,
                submode: None,
            },
            MatchType::BankaraOpen => MatchQuery {
                list: NodeListKey::Bankara,
                setting: SettingKey::Bankara,
                submode: Some("OPEN"),
            },
            MatchType::BankaraChallenge => MatchQuery {
                list: NodeListKey::Bankara,
                setting: SettingKey::Bankara,
                submode: Some("CHALLENGE"),
            },
            MatchType::XMatch => MatchQuery {
                list: NodeListKey::X,
                setting: SettingKey::X,
                submode: None,
            },
            MatchType::Event => MatchQuery {
                list: NodeListKey::Event,
                setting: SettingKey::League,
                submode: None,
            },
            MatchType::Fest => MatchQuery {
                list: NodeListKey::Fest,
                setting: SettingKey::Fest,
                submode: None,
            },
        }
    }

    /// Returns the canonical string form.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Regular => "regular",
            MatchType::BankaraOpen => "bankara_open",
            MatchType::BankaraChallenge => "bankara_challenge",
            MatchType::XMatch => "xmatch",
            MatchType::Event => "event",
            MatchType::Fest => "fest",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(MatchType::Regular),
            "bankara_open" => Ok(MatchType::BankaraOpen),
            "bankara_challenge" => Ok(MatchType::BankaraChallenge),
            "xmatch" => Ok(MatchType::XMatch),
            "event" => Ok(MatchType::Event),
            "fest" => Ok(MatchType::Fest),
            other => Err(ClientError::InvalidMatchType(other.to_string())),
        }
    }
}

// == Locale ==
/// Locales the upstream publishes catalogs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    DeDe,
    EnGb,
    EnUs,
    EsEs,
    EsMx,
    FrCa,
    FrFr,
    ItIt,
    #[default]
    JaJp,
    KoKr,
    NlNl,
    RuRu,
    ZhCn,
    ZhTw,
}

impl Locale {
    /// Returns the locale tag used in upstream URLs and cache keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::DeDe => "de-DE",
            Locale::EnGb => "en-GB",
            Locale::EnUs => "en-US",
            Locale::EsEs => "es-ES",
            Locale::EsMx => "es-MX",
            Locale::FrCa => "fr-CA",
            Locale::FrFr => "fr-FR",
            Locale::ItIt => "it-IT",
            Locale::JaJp => "ja-JP",
            Locale::KoKr => "ko-KR",
            Locale::NlNl => "nl-NL",
            Locale::RuRu => "ru-RU",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de-DE" => Ok(Locale::DeDe),
            "en-GB" => Ok(Locale::EnGb),
            "en-US" => Ok(Locale::EnUs),
            "es-ES" => Ok(Locale::EsEs),
            "es-MX" => Ok(Locale::EsMx),
            "fr-CA" => Ok(Locale::FrCa),
            "fr-FR" => Ok(Locale::FrFr),
            "it-IT" => Ok(Locale::ItIt),
            "ja-JP" => Ok(Locale::JaJp),
            "ko-KR" => Ok(Locale::KoKr),
            "nl-NL" => Ok(Locale::NlNl),
            "ru-RU" => Ok(Locale::RuRu),
            "zh-CN" => Ok(Locale::ZhCn),
            "zh-TW" => Ok(Locale::ZhTw),
            other => Err(ClientError::InvalidLocale(other.to_string())),
        }
    }
}

// == Schedule Info ==
/// A resolved rotation window with localized names.
///
/// Ephemeral output, rebuilt on every resolution call; only the raw
/// documents are cached. Start and end times are the node's raw strings,
/// passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleInfo {
    /// Localized rule name
    pub rule: String,
    /// Localized stage names, always two slots
    pub stages: [String; 2],
    /// Window start, raw upstream string
    pub start_time: String,
    /// Window end, raw upstream string
    pub end_time: String,
}
