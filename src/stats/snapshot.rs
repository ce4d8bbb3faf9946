//! Point-in-time copy of recorder state and its JSON shape.
//! Used by: stats::recorder, handlers::stats.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::duration::format_duration;

/// Owned snapshot; holds no references into the recorder.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub pid: u32,
    pub uptime: Duration,
    pub observed_at: DateTime<Utc>,
    pub status_code_count: BTreeMap<String, u64>,
    pub total_status_code_count: BTreeMap<String, u64>,
    pub count: u64,
    pub total_count: u64,
    pub total_response_time: Duration,
    pub average_response_time: Duration,
}

impl StatsSnapshot {
    pub fn uptime_sec(&self) -> f64 {
        self.uptime.as_secs_f64()
    }

    pub fn total_response_time_sec(&self) -> f64 {
        self.total_response_time.as_secs_f64()
    }

    pub fn average_response_time_sec(&self) -> f64 {
        self.average_response_time.as_secs_f64()
    }
}

#[derive(Serialize)]
struct StatsJson<'a> {
    pid: u32,
    uptime: String,
    uptime_sec: f64,
    time: String,
    unixtime: i64,
    status_code_count: &'a BTreeMap<String, u64>,
    total_status_code_count: &'a BTreeMap<String, u64>,
    count: u64,
    total_count: u64,
    total_response_time: String,
    total_response_time_sec: f64,
    average_response_time: String,
    average_response_time_sec: f64,
}

impl Serialize for StatsSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StatsJson {
            pid: self.pid,
            uptime: format_duration(self.uptime),
            uptime_sec: self.uptime_sec(),
            time: self.observed_at.to_string(),
            unixtime: self.observed_at.timestamp(),
            status_code_count: &self.status_code_count,
            total_status_code_count: &self.total_status_code_count,
            count: self.count,
            total_count: self.total_count,
            total_response_time: format_duration(self.total_response_time),
            total_response_time_sec: self.total_response_time_sec(),
            average_response_time: format_duration(self.average_response_time),
            average_response_time_sec: self.average_response_time_sec(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatsSnapshot {
        StatsSnapshot {
            pid: 42,
            uptime: Duration::from_millis(1_500),
            observed_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
            status_code_count: BTreeMap::from([("200".to_string(), 2)]),
            total_status_code_count: BTreeMap::from([
                ("200".to_string(), 5),
                ("404".to_string(), 1),
            ]),
            count: 2,
            total_count: 6,
            total_response_time: Duration::from_millis(600),
            average_response_time: Duration::from_millis(100),
        }
    }

    #[test]
    fn json_carries_every_contract_field() {
        let v = serde_json::to_value(sample()).unwrap();
        for field in [
            "pid",
            "uptime",
            "uptime_sec",
            "time",
            "unixtime",
            "status_code_count",
            "total_status_code_count",
            "count",
            "total_count",
            "total_response_time",
            "total_response_time_sec",
            "average_response_time",
            "average_response_time_sec",
        ] {
            assert!(v.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn durations_serialize_as_string_and_seconds() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["uptime"], "1.5s");
        assert_eq!(v["uptime_sec"], 1.5);
        assert_eq!(v["total_response_time"], "600ms");
        assert_eq!(v["average_response_time"], "100ms");
        assert!((v["average_response_time_sec"].as_f64().unwrap() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn counts_and_time_fields() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["pid"], 42);
        assert_eq!(v["unixtime"], 1_700_000_000);
        assert_eq!(v["count"], 2);
        assert_eq!(v["total_count"], 6);
        assert_eq!(v["status_code_count"]["200"], 2);
        assert_eq!(v["total_status_code_count"]["404"], 1);
    }
}
