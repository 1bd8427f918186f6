#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Small dataset covering: a duty with one break, a duty crossing midnight
/// without breaks, a duty without events, mixed string/integer ids.
pub const SAMPLE_DATASET: &str = r#"{
  "stops": [
    { "stop_id": "A", "stop_name": "Central Station" },
    { "stop_id": "B", "stop_name": "Harbour" },
    { "stop_id": "A", "stop_name": "Duplicate A" }
  ],
  "duties": [
    { "duty_id": "1" },
    { "duty_id": 2 },
    { "duty_id": "99" }
  ],
  "vehicles": [
    {
      "vehicle_id": "V1",
      "vehicle_events": [
        { "duty_id": "1", "vehicle_event_type": "pre_trip", "start_time": "0.06:40", "end_time": "0.07:00", "origin_stop_id": "A", "destination_stop_id": "A" },
        { "duty_id": "1", "vehicle_event_type": "service_trip", "start_time": "0.07:00", "end_time": "0.08:10", "origin_stop_id": "A", "destination_stop_id": "B" },
        { "duty_id": "1", "vehicle_event_type": "service_trip", "start_time": "0.08:40", "end_time": "0.09:30", "origin_stop_id": "B", "destination_stop_id": "A" },
        { "duty_id": 2, "vehicle_event_type": "service_trip", "start_time": "0.23:30", "end_time": "1.00:20", "origin_stop_id": "B", "destination_stop_id": "C" }
      ]
    },
    {
      "vehicle_id": 7,
      "vehicle_events": [
        { "duty_id": "2", "vehicle_event_type": "service_trip", "start_time": "1.00:30", "end_time": "1.01:00", "origin_stop_id": "C", "destination_stop_id": "A" },
        { "vehicle_event_type": "depot_pull_in", "start_time": "1.01:00", "end_time": "1.01:15" }
      ]
    },
    { "vehicle_id": "V3" }
  ]
}"#;

pub fn drc() -> Command {
    let mut cmd = cargo_bin_cmd!("dutyreport");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Unique path inside the system temp dir, with any previous file removed.
pub fn temp_path(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("dutyreport_{name}"));
    if path.is_dir() {
        fs::remove_dir_all(&path).ok();
    } else {
        fs::remove_file(&path).ok();
    }
    path
}

/// Write `json` to a temp file and return its path as string.
pub fn write_dataset(name: &str, json: &str) -> String {
    let path = temp_path(&format!("{name}.json"));
    fs::write(&path, json).expect("write dataset fixture");
    path.to_string_lossy().to_string()
}

/// Path of a config file that does not exist (→ defaults).
pub fn missing_config(name: &str) -> String {
    temp_path(&format!("{name}.conf")).to_string_lossy().to_string()
}
