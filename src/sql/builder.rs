//! Builds the read-only SELECT statements served by the API.

use crate::schema::{measurement as m, station as s};

/// Quote identifier for SQLite (safe: only from the declared schema).
fn quoted(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn columns(idents: &[&str]) -> String {
    idents.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

fn temperature_aggregates() -> String {
    let tobs = quoted(m::TOBS);
    format!("MIN({tobs}), MAX({tobs}), AVG({tobs})")
}

/// Every (date, prcp) pair, oldest first.
pub fn select_precipitation() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} ASC",
        columns(&[m::DATE, m::PRCP]),
        quoted(m::TABLE),
        quoted(m::DATE)
    )
}

/// Station id and name pairs.
pub fn select_stations() -> String {
    format!("SELECT {} FROM {}", columns(&[s::STATION, s::NAME]), quoted(s::TABLE))
}

/// Station with the most dated measurements. Ties go to the lowest station id.
pub fn select_most_active_station() -> String {
    let station = quoted(m::STATION);
    let date = quoted(m::DATE);
    format!(
        "SELECT {station}, COUNT({date}) FROM {} GROUP BY {station} ORDER BY COUNT({date}) DESC, {station} ASC LIMIT 1",
        quoted(m::TABLE)
    )
}

/// Most recent date across the whole measurement table.
pub fn select_latest_date() -> String {
    let date = quoted(m::DATE);
    format!("SELECT {date} FROM {} ORDER BY {date} DESC LIMIT 1", quoted(m::TABLE))
}

/// Measurements of one station within an inclusive date window, newest first.
/// Params: station, window start, window end.
pub fn select_station_window() -> String {
    let date = quoted(m::DATE);
    format!(
        "SELECT {} FROM {} WHERE {} = ? AND {date} >= ? AND {date} <= ? ORDER BY {date} DESC",
        columns(&[m::ID, m::STATION, m::DATE, m::PRCP, m::TOBS]),
        quoted(m::TABLE),
        quoted(m::STATION)
    )
}

/// Per-day min/max/avg temperature from a start date onward. Param: start.
pub fn select_daily_summary_from() -> String {
    let date = quoted(m::DATE);
    format!(
        "SELECT {date}, {} FROM {} WHERE {date} >= ? GROUP BY {date} ORDER BY {date} ASC",
        temperature_aggregates(),
        quoted(m::TABLE)
    )
}

/// Min/max/avg temperature over a whole inclusive date range. Params: start, end.
pub fn select_range_summary() -> String {
    let date = quoted(m::DATE);
    format!(
        "SELECT {} FROM {} WHERE {date} >= ? AND {date} <= ?",
        temperature_aggregates(),
        quoted(m::TABLE)
    )
}
