//! Example SNS batches bundled for `snspark selftest`

pub const FIXTURES: &[(&str, &str)] = &[
    (
        "autoscaling_terminate",
        include_str!("../../../tests/fixtures/autoscaling_terminate.json"),
    ),
    ("rds_event", include_str!("../../../tests/fixtures/rds_event.json")),
    ("cloudwatch_ok", include_str!("../../../tests/fixtures/cloudwatch_ok.json")),
    (
        "cloudwatch_alarm",
        include_str!("../../../tests/fixtures/cloudwatch_alarm.json"),
    ),
    (
        "cloudwatch_insufficient_data",
        include_str!("../../../tests/fixtures/cloudwatch_insufficient_data.json"),
    ),
    (
        "elasticache_snapshot",
        include_str!("../../../tests/fixtures/elasticache_snapshot.json"),
    ),
];
