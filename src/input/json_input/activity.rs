use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::hours::{BusinessStatus, StatusPolicy, StatusTexts};
use crate::time::{TimeSpan, TimeStamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[display("sightseeing")]
    Sightseeing,
    #[display("dining")]
    Dining,
    #[display("shopping")]
    Shopping,
    #[display("entertainment")]
    Entertainment,
    #[display("transportation")]
    Transportation,
    #[display("accommodation")]
    Accommodation,
    #[display("culture")]
    Culture,
    #[display("nature")]
    Nature,
}

/// A single scheduled item inside one day of the itinerary.
///
/// This mirrors the planning API's activity object. The optional fields are
/// annotations the upstream may or may not attach, `open_hours` in
/// particular is free text and must be tolerated in any shape.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Activity {
    name: String,
    #[serde(rename = "type")]
    kind: ActivityType,
    location: String,
    start_time: TimeStamp,
    end_time: TimeStamp,
    duration_minutes: u32,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance_km_from_prev: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    drive_time_min_from_prev: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    open_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    open_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    closed_reason: Option<String>,
}

impl Activity {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> ActivityType {
        self.kind
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub const fn start_time(&self) -> TimeStamp {
        self.start_time
    }

    #[must_use]
    pub const fn end_time(&self) -> TimeStamp {
        self.end_time
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn estimated_cost(&self) -> Option<u32> {
        self.estimated_cost
    }

    #[must_use]
    pub fn tips(&self) -> Option<&str> {
        self.tips.as_deref()
    }

    #[must_use]
    pub fn distance_km_from_prev(&self) -> Option<f64> {
        self.distance_km_from_prev
    }

    #[must_use]
    pub const fn drive_time_min_from_prev(&self) -> Option<u32> {
        self.drive_time_min_from_prev
    }

    #[must_use]
    pub fn open_hours(&self) -> Option<&str> {
        self.open_hours.as_deref()
    }

    #[must_use]
    pub const fn open_ok(&self) -> Option<bool> {
        self.open_ok
    }

    #[must_use]
    pub fn closed_reason(&self) -> Option<&str> {
        self.closed_reason.as_deref()
    }

    /// The proposed occupancy window of this activity.
    #[must_use]
    pub fn window(&self) -> TimeSpan {
        TimeSpan::new(self.start_time, self.end_time)
    }

    /// Classifies this activity against its hours annotations, using the
    /// default display texts.
    #[must_use]
    pub fn business_status(&self, policy: StatusPolicy) -> BusinessStatus {
        self.business_status_with(policy, &StatusTexts::default())
    }

    /// Like [`Self::business_status`], with the display texts taken from
    /// the preferences.
    #[must_use]
    pub fn business_status_with(&self, policy: StatusPolicy, texts: &StatusTexts) -> BusinessStatus {
        BusinessStatus::evaluate_with(
            &self.window(),
            self.open_hours(),
            self.open_ok,
            self.closed_reason(),
            policy,
            texts,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::hours::StatusKind;
    use crate::time_stamp;

    fn activity(json: serde_json::Value) -> Activity {
        serde_json::from_value(json).expect("activity json should deserialize")
    }

    #[test]
    fn test_deserialize_minimal_activity() {
        let activity = activity(serde_json::json!({
            "name": "故宫博物院",
            "type": "sightseeing",
            "location": "北京市东城区景山前街4号",
            "start_time": "09:00",
            "end_time": "12:00",
            "duration_minutes": 180,
            "description": "参观明清两代皇宫",
        }));

        assert_eq!(activity.kind(), ActivityType::Sightseeing);
        assert_eq!(activity.start_time(), time_stamp!(9:00));
        assert_eq!(activity.window().duration_minutes(), 180);
        assert_eq!(activity.open_hours(), None);
        assert_eq!(activity.estimated_cost(), None);
    }

    #[test]
    fn test_status_uses_the_hours_annotation() {
        let activity = activity(serde_json::json!({
            "name": "Lunch",
            "type": "dining",
            "location": "somewhere",
            "start_time": "12:00",
            "end_time": "13:00",
            "duration_minutes": 60,
            "description": "",
            "open_hours": "11:00-14:00, 17:00-22:00",
            "open_ok": false,
            "closed_reason": "closed for holiday",
        }));

        let status = activity.business_status(StatusPolicy::LocalFirst);
        assert_eq!(status.kind(), StatusKind::Open);

        let status = activity.business_status(StatusPolicy::BackendFirst);
        assert_eq!(status.kind(), StatusKind::Closed);
    }

    #[test]
    fn test_malformed_time_is_rejected_at_load() {
        let result: Result<Activity, _> = serde_json::from_value(serde_json::json!({
            "name": "Lunch",
            "type": "dining",
            "location": "somewhere",
            "start_time": "noonish",
            "end_time": "13:00",
            "duration_minutes": 60,
            "description": "",
        }));

        assert!(result.is_err());
    }
}
