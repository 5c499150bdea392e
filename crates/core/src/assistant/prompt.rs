//! Generation-request assembly for the scheduling assistant

use chrono::NaiveDate;
use chrono_tz::Tz;
use hireflow_domain::constants::MAX_SUGGESTED_SLOTS;
use hireflow_domain::{AvailableSlot, CalendarEvent};

use crate::scheduling::timezone::utc_to_local;

/// Build the system prompt: today's date, target zone, requested
/// duration, the busy list to avoid, the free list to choose from, and
/// the JSON reply contract.
pub fn build_system_prompt(
    today: NaiveDate,
    tz: Tz,
    duration_minutes: i64,
    busy: &[CalendarEvent],
    free: &[AvailableSlot],
) -> String {
    let mut prompt = String::new();
    prompt.push_str("You are an interview scheduling assistant for a job seeker.\n");
    prompt.push_str(&format!("Today's date: {today}. Timezone: {tz}.\n"));
    prompt.push_str(&format!("The user wants a {duration_minutes}-minute interview slot.\n\n"));

    if busy.is_empty() {
        prompt.push_str("Existing commitments to avoid: none.\n");
    } else {
        prompt.push_str("Existing commitments to avoid:\n");
        for event in busy {
            let (date, start, _) = utc_to_local(event.start, tz);
            let (_, end, _) = utc_to_local(event.end, tz);
            prompt.push_str(&format!(
                "- {date} {}-{} {}\n",
                start.format("%H:%M"),
                end.format("%H:%M"),
                event.title
            ));
        }
    }

    prompt.push('\n');
    if free.is_empty() {
        prompt.push_str("Available slots: none in the requested range.\n");
    } else {
        prompt.push_str("Available slots (pick only from these):\n");
        for slot in free {
            prompt.push_str(&format!(
                "- {} {} {}-{}\n",
                slot.day_name,
                slot.date,
                slot.start.format("%H:%M"),
                slot.end.format("%H:%M"),
            ));
        }
    }

    prompt.push_str(&format!(
        "\nReply with strict JSON only, no Markdown: {{\"message\": string, \
         \"suggestedSlots\": [{{\"date\": \"YYYY-MM-DD\", \"startTime\": \"HH:MM\", \
         \"endTime\": \"HH:MM\", \"datetimeLocal\": \"YYYY-MM-DDTHH:MM\", \
         \"reason\": string}}]}}. Propose at most {MAX_SUGGESTED_SLOTS} slots, \
         all taken verbatim from the available list."
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime, TimeZone, Utc};
    use chrono_tz::America::New_York;
    use hireflow_domain::EventSource;

    use super::*;

    #[test]
    fn prompt_lists_busy_in_local_time() {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 17, 0, 0).single().expect("valid");
        let busy = vec![CalendarEvent {
            id: "e1".into(),
            title: "Phone screen".into(),
            start,
            end: start + Duration::minutes(60),
            source: EventSource::ExternalCalendar,
        }];
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date");

        let prompt = build_system_prompt(today, New_York, 30, &busy, &[]);

        // 17:00 UTC is 13:00 in New York in June.
        assert!(prompt.contains("- 2025-06-02 13:00-14:00 Phone screen"));
        assert!(prompt.contains("Available slots: none"));
        assert!(prompt.contains("Today's date: 2025-06-02"));
    }

    #[test]
    fn prompt_lists_free_slots_and_contract() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date");
        let free = vec![AvailableSlot {
            date: today,
            day_name: "Monday".into(),
            start: NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"),
            end: NaiveTime::from_hms_opt(12, 30, 0).expect("valid time"),
            duration_minutes: 30,
        }];

        let prompt = build_system_prompt(today, New_York, 30, &[], &free);

        assert!(prompt.contains("- Monday 2025-06-02 12:00-12:30"));
        assert!(prompt.contains("suggestedSlots"));
        assert!(prompt.contains("at most 3 slots"));
    }
}
