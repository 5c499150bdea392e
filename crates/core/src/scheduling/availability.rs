//! Free-slot computation over a reconciled busy-interval set.
//!
//! Policy is fixed, not per-call configuration: interviews happen on
//! weekdays inside the 12:00-18:00 local window, with a 15-minute buffer
//! between a slot and any adjacent busy interval. Each gap yields at most
//! one slot, placed at the earliest possible start.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use chrono_tz::Tz;
use hireflow_domain::constants::{
    SLOT_BUFFER_MINUTES, WORKING_DAY_END_HOUR, WORKING_DAY_START_HOUR,
};
use hireflow_domain::{AvailableSlot, CalendarEvent, DateRange};

/// A busy interval projected into zone wall-clock time.
struct LocalBusy {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Compute ordered free slots of exactly `duration_minutes` within the
/// window, date-ascending then start-ascending.
///
/// Pure function: identical inputs yield identical output. Ranking by
/// quality is deferred to the dialogue layer.
pub fn find_slots(
    busy: &[CalendarEvent],
    range: DateRange,
    duration_minutes: i64,
    tz: Tz,
) -> Vec<AvailableSlot> {
    let duration = Duration::minutes(duration_minutes);
    let buffer = Duration::minutes(SLOT_BUFFER_MINUTES);

    let local_busy: Vec<LocalBusy> = busy
        .iter()
        .map(|event| LocalBusy {
            start: event.start.with_timezone(&tz).naive_local(),
            end: event.end.with_timezone(&tz).naive_local(),
        })
        .collect();

    let first_day = range.start.with_timezone(&tz).date_naive();
    let last_day = range.end.with_timezone(&tz).date_naive();

    let mut slots = Vec::new();
    let mut day = first_day;
    while day <= last_day {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            collect_day_slots(day, &local_busy, duration, buffer, &mut slots);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    slots
}

fn collect_day_slots(
    day: NaiveDate,
    all_busy: &[LocalBusy],
    duration: Duration,
    buffer: Duration,
    slots: &mut Vec<AvailableSlot>,
) {
    let window_start = day.and_time(working_time(WORKING_DAY_START_HOUR));
    let window_end = day.and_time(working_time(WORKING_DAY_END_HOUR));

    let mut day_busy: Vec<&LocalBusy> = all_busy
        .iter()
        .filter(|b| b.start < window_end && b.end > window_start)
        .collect();
    day_busy.sort_by_key(|b| b.start);

    let mut slot_start = window_start;
    for busy in &day_busy {
        // A slot needs its duration plus the buffer before the next meeting.
        if busy.start > slot_start && busy.start - slot_start >= duration + buffer {
            push_slot(day, slot_start, duration, slots);
        }
        let after_busy = busy.end + buffer;
        if after_busy > slot_start {
            slot_start = after_busy;
        }
    }

    if slot_start <= window_end && window_end - slot_start >= duration {
        push_slot(day, slot_start, duration, slots);
    }
}

fn push_slot(day: NaiveDate, start: NaiveDateTime, duration: Duration, slots: &mut Vec<AvailableSlot>) {
    slots.push(AvailableSlot {
        date: day,
        day_name: day.format("%A").to_string(),
        start: start.time(),
        end: (start + duration).time(),
        duration_minutes: duration.num_minutes(),
    });
}

fn working_time(hour: u32) -> NaiveTime {
    // Hours come from domain constants and are always in range.
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}
