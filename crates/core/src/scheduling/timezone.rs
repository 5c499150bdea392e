//! Wall-clock <-> UTC conversion, DST-safe for arbitrary IANA zones.
//!
//! The forward direction (zone wall-clock -> UTC) cannot be read off
//! directly; it is found by fixed-point iteration: seed a guess with the
//! naive fields interpreted as UTC, observe what wall-clock that guess
//! formats to in the zone, shift by the difference, repeat. DST shifts
//! the offset by at most an hour, so the loop converges geometrically
//! once inside the right offset; it is capped at three rounds and the
//! last guess is accepted even if unverified.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use hireflow_domain::constants::TZ_CONVERGENCE_ROUNDS;
use hireflow_domain::{HireflowError, Result};

/// Convert a zone wall-clock date and time into a UTC instant.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let desired = NaiveDateTime::new(date, time);
    let mut guess = Utc.from_utc_datetime(&desired);

    for _ in 0..TZ_CONVERGENCE_ROUNDS {
        let observed = guess.with_timezone(&tz).naive_local();
        let delta = desired - observed;
        if delta.is_zero() {
            break;
        }
        guess += delta;
    }

    guess
}

/// Convert a UTC instant into zone wall-clock fields plus the offset
/// abbreviation (e.g. "EDT"). Display-only; direct and non-iterative.
pub fn utc_to_local(instant: DateTime<Utc>, tz: Tz) -> (NaiveDate, NaiveTime, String) {
    let local = instant.with_timezone(&tz);
    (local.date_naive(), local.time(), local.format("%Z").to_string())
}

/// Parse an IANA zone name, failing fast on unknown zones.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| HireflowError::InvalidInput(format!("unknown timezone: {name}")))
}

/// Parse a "YYYY-MM-DD" calendar date.
pub fn parse_local_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| HireflowError::InvalidInput(format!("invalid date {value:?}: {e}")))
}

/// Parse an "HH:MM" wall-clock time.
pub fn parse_local_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| HireflowError::InvalidInput(format!("invalid time {value:?}: {e}")))
}
