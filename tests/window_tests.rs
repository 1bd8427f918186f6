use dutyreport::core::calculator::windows::index_by_duty;
use dutyreport::core::{NO_END_TIME, NO_START_TIME, generate_windows};
use dutyreport::errors::AppError;
use dutyreport::models::{Duty, EntityId, Vehicle, VehicleEvent};

fn event_with(duty: &str, start: Option<&str>, end: Option<&str>) -> VehicleEvent {
    VehicleEvent {
        duty_id: Some(EntityId::from(duty)),
        start_time: start.map(str::to_string),
        end_time: end.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_earliest_start_latest_end_over_overlapping_events() {
    let duties = vec![Duty::new("1"), Duty::new("2")];
    let vehicles = vec![
        Vehicle::new(vec![
            VehicleEvent::for_duty("1", "0.08:00", "0.10:00"),
            VehicleEvent::for_duty("1", "0.07:00", "0.11:00"),
        ]),
        Vehicle::new(vec![VehicleEvent::for_duty("2", "0.09:00", "0.14:00")]),
    ];

    let windows = generate_windows(&duties, &vehicles).unwrap();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].start_label(), "0.07:00");
    assert_eq!(windows[0].end_label(), "0.11:00");
    assert_eq!(windows[1].start_label(), "0.09:00");
    assert_eq!(windows[1].end_label(), "0.14:00");
}

#[test]
fn test_only_end_time() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![event_with("1", None, Some("0.10:00"))])];

    let w = &generate_windows(&duties, &vehicles).unwrap()[0];
    assert_eq!(w.start, None);
    assert_eq!(w.start_label(), NO_START_TIME);
    assert_eq!(w.end_label(), "0.10:00");
}

#[test]
fn test_only_start_time() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![event_with("1", Some("0.08:00"), None)])];

    let w = &generate_windows(&duties, &vehicles).unwrap()[0];
    assert_eq!(w.start_label(), "0.08:00");
    assert_eq!(w.end_label(), NO_END_TIME);
}

#[test]
fn test_no_matching_events_yields_sentinels() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![]), Vehicle::new(vec![event_with("7", Some("0.01:00"), Some("0.02:00"))])];

    let windows = generate_windows(&duties, &vehicles).unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start_label(), "No Start Time Found");
    assert_eq!(windows[0].end_label(), "No End Time Found");
    assert_eq!(windows[0].first_stop_id, None);
    assert_eq!(windows[0].last_stop_id, None);
}

#[test]
fn test_one_window_per_duty_in_duty_order() {
    let duties: Vec<Duty> = ["c", "a", "b", "a"].into_iter().map(Duty::new).collect();
    let vehicles = vec![Vehicle::new(vec![VehicleEvent::for_duty("a", "0.01:00", "0.02:00")])];

    let windows = generate_windows(&duties, &vehicles).unwrap();
    let ids: Vec<&str> = windows.iter().map(|w| w.duty_id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b", "a"]);
    assert_eq!(windows[1], windows[3]);
}

#[test]
fn test_window_times_are_canonical() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![VehicleEvent::for_duty("1", "1.7:5", "1.9:0")])];

    let w = &generate_windows(&duties, &vehicles).unwrap()[0];
    assert_eq!(w.start_label(), "1.07:05");
    assert_eq!(w.end_label(), "1.09:00");
}

#[test]
fn test_cross_day_comparison() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![
        VehicleEvent::for_duty("1", "0.23:00", "1.00:30"),
        VehicleEvent::for_duty("1", "1.01:00", "1.02:00"),
    ])];

    let w = &generate_windows(&duties, &vehicles).unwrap()[0];
    assert_eq!(w.start_label(), "0.23:00");
    assert_eq!(w.end_label(), "1.02:00");
}

#[test]
fn test_first_and_last_stop_ids_follow_extreme_events() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![
        VehicleEvent::for_duty("1", "0.08:00", "0.09:00").with_stops(Some("B"), Some("C")),
        VehicleEvent::for_duty("1", "0.07:00", "0.08:00").with_stops(Some("A"), Some("B")),
        // same start as the previous one: the earlier-seen event is kept
        VehicleEvent::for_duty("1", "0.07:00", "0.07:30").with_stops(Some("X"), Some("X")),
        VehicleEvent::for_duty("1", "0.09:00", "0.10:00").with_stops(Some("C"), Some("D")),
    ])];

    let w = &generate_windows(&duties, &vehicles).unwrap()[0];
    assert_eq!(w.first_stop_id, Some(EntityId::from("A")));
    assert_eq!(w.last_stop_id, Some(EntityId::from("D")));
}

#[test]
fn test_ties_on_start_and_end_keep_the_first_seen_event() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![
        Vehicle::new(vec![
            VehicleEvent::for_duty("1", "0.07:00", "0.09:00").with_stops(Some("A"), Some("P")),
        ]),
        Vehicle::new(vec![
            VehicleEvent::for_duty("1", "0.07:00", "0.08:00").with_stops(Some("Z"), Some("Y")),
            VehicleEvent::for_duty("1", "0.08:00", "0.09:00").with_stops(Some("Y"), Some("Q")),
        ]),
    ];

    let w = &generate_windows(&duties, &vehicles).unwrap()[0];
    assert_eq!(w.start_label(), "0.07:00");
    assert_eq!(w.end_label(), "0.09:00");
    assert_eq!(w.first_stop_id, Some(EntityId::from("A")));
    assert_eq!(w.last_stop_id, Some(EntityId::from("P")));
}

#[test]
fn test_integer_and_string_duty_ids_match() {
    let dataset = dutyreport::models::Dataset::from_json(
        r#"{"duties":[{"duty_id":5}],"stops":[],
            "vehicles":[{"vehicle_events":[{"duty_id":"5","start_time":"0.05:00","end_time":"0.06:00"}]}]}"#,
    )
    .unwrap();

    let w = &generate_windows(&dataset.duties, &dataset.vehicles).unwrap()[0];
    assert_eq!(w.start_label(), "0.05:00");
}

#[test]
fn test_malformed_time_fails_fast() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![VehicleEvent::for_duty("1", "0.25:00", "0.26:00")])];

    let res = generate_windows(&duties, &vehicles);
    assert!(matches!(res, Err(AppError::InvalidTime(_))));
}

#[test]
fn test_malformed_time_on_other_duty_is_ignored() {
    let duties = vec![Duty::new("1")];
    let vehicles = vec![Vehicle::new(vec![
        VehicleEvent::for_duty("1", "0.05:00", "0.06:00"),
        VehicleEvent::for_duty("2", "garbage", "garbage"),
    ])];

    assert!(generate_windows(&duties, &vehicles).is_ok());
}

#[test]
fn test_index_keeps_input_order() {
    let vehicles = vec![
        Vehicle::new(vec![VehicleEvent::for_duty("1", "0.03:00", "0.04:00")]),
        Vehicle::new(vec![
            VehicleEvent::for_duty("1", "0.01:00", "0.02:00"),
            VehicleEvent {
                duty_id: None,
                ..Default::default()
            },
        ]),
    ];

    let index = index_by_duty(&vehicles);
    assert_eq!(index.len(), 1);
    let starts: Vec<&str> = index[&EntityId::from("1")]
        .iter()
        .filter_map(|e| e.start_time.as_deref())
        .collect();
    assert_eq!(starts, ["0.03:00", "0.01:00"]);
}
