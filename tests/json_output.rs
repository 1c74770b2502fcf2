use kira_dpcrqc::ctx::Ctx;
use kira_dpcrqc::io::json_writer::build_report;
use kira_dpcrqc::io::write_json;
use kira_dpcrqc::pipeline::Pipeline;
use kira_dpcrqc::plate::Plate;
use serde_json::Value;

fn run(report_outliers: bool) -> Ctx {
    let mut ctx = Ctx::new(Plate::demo(), 20.0, 2e-15, report_outliers, true, "0.0.0-test");
    Pipeline::standard().run(&mut ctx).unwrap();
    ctx
}

#[test]
fn json_report_populated() {
    let ctx = run(true);
    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "kira-dpcrqc");
    assert_eq!(json["version"], "0.0.0-test");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["wells"], 3);
    assert_eq!(json["input_meta"]["threshold"], 20.0);
    assert_eq!(json["stats"]["total_values"], 15);
    assert_eq!(json["stats"]["count_above_threshold"], 4);
    assert_eq!(json["outliers"]["q1"], 5.0);
    assert_eq!(json["outliers"]["q3"], 34.0);
    assert_eq!(json["outliers"]["upper_bound"], 77.5);
    assert!(json["outliers"]["values"].as_array().unwrap().is_empty());
    assert!(json["copy_number"]["copies_per_ul"].as_f64().unwrap() > 1e20);
    assert!(json["warnings"].is_array());
}

#[test]
fn json_outliers_null_when_disabled() {
    let ctx = run(false);
    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    assert!(json["outliers"].is_null());
    assert!(json["stats"].is_object());
}

#[test]
fn write_json_is_parseable() {
    let ctx = run(true);
    let mut buf = Vec::new();
    write_json(&mut buf, &ctx.report).unwrap();
    let parsed: Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed["stats"]["average"], 16.4);
    assert!(buf.ends_with(b"\n"));
}
