//! Tests the rendered report, both to a file and to a fresh directory.

use serde_json::json;

use trip_hours::generate_report;
use trip_hours::input::Config;

mod common;

fn report_for(plan: trip_hours::input::TripPlan) -> String {
    let temp_dir = tempfile::tempdir().expect("temp dir should be creatable");
    let output = temp_dir.path().join("reports/plan.txt");

    let config = {
        let mut builder = Config::from_plan(plan);
        builder.output(&output);
        builder.build()
    };

    generate_report(&config).expect("the report should render");

    std::fs::read_to_string(&output).expect("the report file should exist")
}

#[test]
fn test_report_contains_badges_and_totals() {
    let open = common::with(
        common::activity("故宫博物院", "09:00", "12:00", 180),
        "open_hours",
        json!("08:30-17:00"),
    );
    let open = common::with(open, "estimated_cost", json!(60));

    let closed = common::with(
        common::activity("午餐", "11:30", "14:30", 180),
        "open_hours",
        json!("09:00-12:00,14:00-18:00"),
    );

    let plan = common::plan(
        "2024-03-15",
        "2024-03-16",
        2,
        300,
        vec![
            common::day("2024-03-15", 100, vec![open]),
            common::day("2024-03-16", 200, vec![closed]),
        ],
    );

    let report = report_for(plan);

    assert!(report.contains("Trip: 北京 (文化古都之旅)"));
    assert!(report.contains("Dates: 2024-03-15 to 2024-03-16 (2 day(s))"));
    assert!(report.contains("[open] 故宫博物院 (Open: 08:30-17:00)"));
    assert!(report.contains("cost: ¥60"));
    assert!(report.contains("[closed] 午餐 (Closed: 09:00-12:00,14:00-18:00)"));
    assert!(report.contains("day total: ¥100"));
    assert!(report.contains("total: ¥300"));
    assert!(report.contains("tip: 准备舒适的步行鞋"));
}

#[test]
fn test_report_marks_unknown_hours() {
    let plan = common::plan(
        "2024-03-15",
        "2024-03-15",
        1,
        0,
        vec![common::day(
            "2024-03-15",
            0,
            vec![common::activity("夜市", "19:00", "21:00", 120)],
        )],
    );

    let report = report_for(plan);

    assert!(report.contains("[?] 夜市 (Hours unknown)"));
}
