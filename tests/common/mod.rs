use serde_json::{json, Value};

use trip_hours::input::{Config, TripPlan};

#[must_use]
pub fn activity(name: &str, start: &str, end: &str, duration_minutes: u32) -> Value {
    json!({
        "name": name,
        "type": "sightseeing",
        "location": "somewhere in town",
        "start_time": start,
        "end_time": end,
        "duration_minutes": duration_minutes,
        "description": "",
    })
}

#[must_use]
#[allow(dead_code)]
pub fn with(mut activity: Value, key: &str, value: Value) -> Value {
    activity[key] = value;
    activity
}

#[must_use]
pub fn day(date: &str, estimated_daily_cost: u32, activities: Vec<Value>) -> Value {
    json!({
        "date": date,
        "day_title": "a day in town",
        "activities": activities,
        "daily_summary": "",
        "estimated_daily_cost": estimated_daily_cost,
    })
}

#[must_use]
pub fn plan(
    start: &str,
    end: &str,
    duration_days: u32,
    total_cost: u32,
    days: Vec<Value>,
) -> TripPlan {
    serde_json::from_value(json!({
        "destination": "北京",
        "duration_days": duration_days,
        "theme": "文化古都之旅",
        "start_date": start,
        "end_date": end,
        "daily_plans": days,
        "total_estimated_cost": total_cost,
        "general_tips": ["准备舒适的步行鞋"],
    }))
    .expect("plan json should deserialize")
}

#[must_use]
#[allow(dead_code)]
pub fn config(plan: TripPlan) -> Config {
    Config::from_plan(plan).build()
}
