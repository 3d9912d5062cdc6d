//! JSON payload shapes for each endpoint.

use crate::schema::{Measurement, Reading};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One measurement row rendered as `{ "<date>": <prcp> }`.
#[derive(Clone, Debug, PartialEq)]
pub struct PrecipitationEntry {
    pub date: String,
    pub prcp: Option<Reading>,
}

impl Serialize for PrecipitationEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.prcp)?;
        map.end()
    }
}

impl From<(String, Option<Reading>)> for PrecipitationEntry {
    fn from((date, prcp): (String, Option<Reading>)) -> Self {
        PrecipitationEntry { date, prcp }
    }
}

/// Station id to station name. Sorted keys; a repeated id keeps the last name read, a NULL name is `null`.
pub type StationDirectory = BTreeMap<String, Option<String>>;

pub fn station_directory(stations: Vec<(String, Option<String>)>) -> StationDirectory {
    stations.into_iter().collect()
}

/// Flatten rows into `[station, date, tobs, station, date, tobs, ...]`.
pub fn flatten_tobs(rows: &[Measurement]) -> Vec<Value> {
    rows.iter()
        .flat_map(|m| {
            [
                Value::String(m.station.clone()),
                Value::String(m.date.clone()),
                Value::Number(m.tobs.0.clone()),
            ]
        })
        .collect()
}

/// Temperature aggregates for a single date.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailySummary {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "TMIN")]
    pub tmin: Option<Reading>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<Reading>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<Reading>,
}

impl From<(String, Option<Reading>, Option<Reading>, Option<Reading>)> for DailySummary {
    fn from((date, tmin, tmax, tavg): (String, Option<Reading>, Option<Reading>, Option<Reading>)) -> Self {
        DailySummary {
            date,
            tmin,
            tmax,
            tavg,
        }
    }
}

/// Temperature aggregates over a whole range, echoing the requested bounds verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeSummary {
    #[serde(rename = "Start Date")]
    pub start: String,
    #[serde(rename = "End Date")]
    pub end: String,
    #[serde(rename = "TMIN")]
    pub tmin: Option<Reading>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<Reading>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<Reading>,
}
