//! End-to-end coverage of bridge planning against the bundled Italian language pack.

use std::path::Path;
use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::json;

use feriapp::bridge::bridgeplanner::BridgePlanner;
use feriapp::bridge::bridgerequest::BridgeRequest;
use feriapp::bridge::yearbridges::YearBridges;
use feriapp::configuration::Configuration;
use feriapp::time::calendar::holidayregistry::{HolidayRegistry, HolidaySource};
use feriapp::time::calendar::weeklyoffdays::WeeklyOffDays;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn weekend() -> WeeklyOffDays {
    WeeklyOffDays::from_indices(&[0, 6]).unwrap()
}

#[fixture]
fn registry() -> Arc<HolidayRegistry> {
    let language_pack_path = format!("{}/data/", env!("CARGO_MANIFEST_DIR"));
    Arc::new(HolidayRegistry::with_defaults(&language_pack_path))
}

#[rstest]
fn milano_gets_sant_ambrogio(registry: Arc<HolidayRegistry>) {
    let holidays = registry.get_holidays(2020, "IT", "Milano");

    assert!(holidays.contains(&date(2020, 12, 7)));
    assert_eq!(holidays.len(), 13);
}

#[rstest]
fn city_holiday_on_a_national_holiday_counts_once(registry: Arc<HolidayRegistry>) {
    assert_eq!(registry.get_holidays(2020, "IT", "Venezia").len(), 12);
}

#[rstest]
fn christmas_2019_is_a_top_bridge(registry: Arc<HolidayRegistry>) {
    let planner = BridgePlanner::new(registry, "IT", date(2019, 1, 1));

    let year_bridges = planner.bridges_by_year(2019, 2, "Milano", weekend(), false).unwrap();

    let christmas = year_bridges.bridges()
        .iter()
        .find(|b| b.start() == date(2019, 12, 21))
        .expect("christmas bridge");
    assert_eq!(christmas.end(), date(2019, 12, 26));
    assert_eq!(
        (christmas.holidays_count(), christmas.weekdays_count(), christmas.days_count()),
        (4, 2, 6)
    );
    assert!(christmas.is_top());
}

#[rstest]
fn sant_ambrogio_bridge_in_2020(registry: Arc<HolidayRegistry>) {
    let planner = BridgePlanner::new(registry, "IT", date(2020, 1, 1));

    let year_bridges = planner.bridges_by_year(2020, 0, "Milano", weekend(), false).unwrap();

    assert!(year_bridges.bridges()
        .iter()
        .any(|b| b.start() == date(2020, 12, 5) && b.end() == date(2020, 12, 8)));
}

#[rstest]
fn plan_serializes_to_the_wire_format(registry: Arc<HolidayRegistry>) {
    let planner = BridgePlanner::new(registry, "IT", date(2019, 4, 19));
    let request: BridgeRequest = serde_json::from_value(json!({
        "dayOfHolidays": 2,
        "customHolidays": [],
        "city": "Milano",
        "daysOff": [0, 6],
        "yearsScope": 1
    })).unwrap();

    let plan = planner.plan(&request).unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value[0]["years"], json!(["2019"]));
    assert_eq!(value[0]["holidaysCount"], json!(6));
    assert_eq!(value[0]["weekdaysCount"], json!(4));
    assert_eq!(value[0]["daysCount"], json!(10));
    assert_eq!(value[0]["bridges"][0], json!({
        "start": "2019-12-21",
        "end": "2019-12-26",
        "holidaysCount": 4,
        "weekdaysCount": 2,
        "daysCount": 6,
        "isTop": true,
        "id": "2019-12-21-2019-12-26"
    }));
    let round_trip: Vec<YearBridges> = serde_json::from_value(value).unwrap();
    assert_eq!(round_trip, plan);
}

#[rstest]
fn years_scanned_in_parallel_match_sequential_scans(registry: Arc<HolidayRegistry>) {
    let planner = BridgePlanner::new(registry, "IT", date(2024, 1, 1));
    let years = [2024, 2025, 2026, 2027];

    let sequential: Vec<YearBridges> = years.iter()
        .map(|&year| planner.bridges_by_year(year, 3, "Roma", weekend(), false).unwrap())
        .collect();
    let parallel: Vec<YearBridges> = thread::scope(|scope| {
        let handles: Vec<_> = years.iter()
            .map(|&year| {
                let planner = &planner;
                scope.spawn(move || planner.bridges_by_year(year, 3, "Roma", weekend(), false).unwrap())
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
}

#[rstest]
fn bundled_configuration_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("feriapp.json");

    let configuration = Configuration::from_reader(&path).unwrap();

    assert_eq!(configuration.locale(), "IT");
    assert_eq!(configuration.national_calendar_manager().names(), vec!["IT".to_owned(), "SM".to_owned()]);
}
