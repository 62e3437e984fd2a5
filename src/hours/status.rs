use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::hours::OpeningHours;
use crate::time::TimeSpan;

/// Tri-state classification used to pick a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusKind {
    #[display("open")]
    Open,
    #[display("closed")]
    Closed,
    #[display("unknown")]
    Unknown,
}

/// Which source wins when an activity carries both a raw opening-hours
/// string and a backend-computed open flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// A non-empty local hours string overrides the backend flag.
    #[default]
    LocalFirst,
    /// The backend flag overrides the local hours string.
    BackendFirst,
}

/// The generic display texts used when the backend flag, or nothing at
/// all, decides the status. The texts for a parsed hours string quote the
/// raw string itself and are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusTexts {
    closed_fallback: String,
    open_all_day: String,
    unknown: String,
}

impl Default for StatusTexts {
    fn default() -> Self {
        Self {
            closed_fallback: "check with the venue".to_string(),
            open_all_day: "Open all day".to_string(),
            unknown: "Hours unknown".to_string(),
        }
    }
}

impl StatusTexts {
    #[must_use]
    pub fn closed_fallback(&self) -> &str {
        &self.closed_fallback
    }

    #[must_use]
    pub fn open_all_day(&self) -> &str {
        &self.open_all_day
    }

    #[must_use]
    pub fn unknown(&self) -> &str {
        &self.unknown
    }
}

/// Display-ready classification of one activity window.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", display)]
pub struct BusinessStatus {
    kind: StatusKind,
    display: String,
}

impl BusinessStatus {
    /// Classifies `window` against the available hours information,
    /// using the default display texts.
    ///
    /// Never fails and never panics: all ambiguity collapses to
    /// [`StatusKind::Unknown`]. The result is a display hint, not a
    /// booking guarantee.
    #[must_use]
    pub fn evaluate(
        window: &TimeSpan,
        open_hours: Option<&str>,
        open_ok: Option<bool>,
        closed_reason: Option<&str>,
        policy: StatusPolicy,
    ) -> Self {
        Self::evaluate_with(
            window,
            open_hours,
            open_ok,
            closed_reason,
            policy,
            &StatusTexts::default(),
        )
    }

    /// Like [`Self::evaluate`], with the generic display texts taken from
    /// the preferences instead of the defaults.
    #[must_use]
    pub fn evaluate_with(
        window: &TimeSpan,
        open_hours: Option<&str>,
        open_ok: Option<bool>,
        closed_reason: Option<&str>,
        policy: StatusPolicy,
        texts: &StatusTexts,
    ) -> Self {
        let hours = open_hours.map(str::trim).filter(|raw| !raw.is_empty());

        match policy {
            StatusPolicy::LocalFirst => Self::from_hours(window, hours)
                .or_else(|| Self::from_backend(open_ok, closed_reason, texts))
                .unwrap_or_else(|| Self::unknown(texts)),
            StatusPolicy::BackendFirst => Self::from_backend(open_ok, closed_reason, texts)
                .or_else(|| Self::from_hours(window, hours))
                .unwrap_or_else(|| Self::unknown(texts)),
        }
    }

    fn from_hours(window: &TimeSpan, hours: Option<&str>) -> Option<Self> {
        let raw = hours?;
        let schedule = OpeningHours::parse(raw);

        Some(match schedule.is_open_for(window) {
            Some(true) => Self {
                kind: StatusKind::Open,
                display: format!("Open: {}", raw),
            },
            Some(false) => Self {
                kind: StatusKind::Closed,
                display: format!("Closed: {}", raw),
            },
            // the string was non-empty, but nothing in it parsed
            None => Self {
                kind: StatusKind::Unknown,
                display: format!("Hours: {}", raw),
            },
        })
    }

    fn from_backend(
        open_ok: Option<bool>,
        closed_reason: Option<&str>,
        texts: &StatusTexts,
    ) -> Option<Self> {
        Some(match open_ok? {
            false => Self {
                kind: StatusKind::Closed,
                display: format!(
                    "Closed: {}",
                    closed_reason.unwrap_or(&texts.closed_fallback)
                ),
            },
            true => Self {
                kind: StatusKind::Open,
                display: texts.open_all_day.clone(),
            },
        })
    }

    fn unknown(texts: &StatusTexts) -> Self {
        Self {
            kind: StatusKind::Unknown,
            display: texts.unknown.clone(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }
}
