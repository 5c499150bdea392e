//! Calendar API client implementing the busy-event port.
//!
//! Fetches events for a configured calendar over the v3 events endpoint.
//! Any failure is reported as `CollaboratorUnavailable` so that
//! availability computation can proceed without this source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireflow_core::scheduling::ports::BusyEventSource;
use hireflow_domain::{CalendarConfig, CalendarEvent, DateRange, EventSource, HireflowError, Result};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::http::HttpClient;

const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Calendar API client for one configured calendar.
#[derive(Clone)]
pub struct CalendarApiClient {
    http: HttpClient,
    base_url: String,
    calendar_id: String,
    access_token: String,
}

impl CalendarApiClient {
    pub fn new(config: &CalendarConfig, http: HttpClient) -> Self {
        Self {
            http,
            base_url: CALENDAR_API_BASE.to_string(),
            calendar_id: config.calendar_id.clone(),
            access_token: config.access_token.clone(),
        }
    }

    /// Point the client at a different API base (for testing).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch_events(&self, window: &DateRange) -> Result<Vec<CalendarEvent>> {
        let url = format!("{}/calendars/{}/events", self.base_url, self.calendar_id);
        let query = [
            ("timeMin", window.start.to_rfc3339()),
            ("timeMax", window.end.to_rfc3339()),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
        ];

        debug!(calendar_id = %self.calendar_id, "fetching events from calendar API");

        let request =
            self.http.request(Method::GET, &url).bearer_auth(&self.access_token).query(&query);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| HireflowError::CollaboratorUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(HireflowError::CollaboratorUnavailable(format!(
                "calendar API error ({status}): {body}"
            )));
        }

        let payload: EventsResponse = response.json().await.map_err(|e| {
            HireflowError::CollaboratorUnavailable(format!("malformed calendar response: {e}"))
        })?;

        let mut events = Vec::with_capacity(payload.items.len());
        for item in payload.items {
            // All-day events carry a date instead of a dateTime and do not
            // block specific hours.
            let (Some(start_raw), Some(end_raw)) = (item.start.date_time, item.end.date_time)
            else {
                warn!(event_id = %item.id, "skipping all-day calendar event");
                continue;
            };

            let (Some(start), Some(end)) = (parse_instant(&start_raw), parse_instant(&end_raw))
            else {
                warn!(event_id = %item.id, "skipping calendar event with unparseable times");
                continue;
            };

            events.push(CalendarEvent {
                id: item.id,
                title: item.summary.unwrap_or_else(|| "(busy)".to_string()),
                start,
                end,
                source: EventSource::ExternalCalendar,
            });
        }

        Ok(events)
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl BusyEventSource for CalendarApiClient {
    async fn fetch_busy(&self, window: DateRange) -> Result<Vec<CalendarEvent>> {
        self.fetch_events(&window).await
    }
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    items: Vec<ApiEvent>,
}

#[derive(Debug, Deserialize)]
struct ApiEvent {
    id: String,
    summary: Option<String>,
    start: ApiEventTime,
    end: ApiEventTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date_time: Option<String>,
    #[allow(dead_code)]
    date: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeZone;
    use serde_json::json;
    use wiremock::matchers::{bearer_token, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(base_url: String) -> CalendarApiClient {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .max_attempts(1)
            .build()
            .expect("http client");

        let config = CalendarConfig {
            calendar_id: "primary".to_string(),
            access_token: "cal-token".to_string(),
        };
        CalendarApiClient::new(&config, http).with_base_url(base_url)
    }

    fn june_window() -> DateRange {
        DateRange::new(
            Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).single().expect("valid"),
            Utc.with_ymd_and_hms(2025, 6, 6, 23, 0, 0).single().expect("valid"),
        )
    }

    #[tokio::test]
    async fn fetches_and_maps_timed_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .and(bearer_token("cal-token"))
            .and(query_param("singleEvents", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": "evt-1",
                        "summary": "Phone screen",
                        "start": { "dateTime": "2025-06-02T17:00:00Z" },
                        "end": { "dateTime": "2025-06-02T18:00:00Z" }
                    },
                    {
                        "id": "evt-2",
                        "start": { "dateTime": "2025-06-03T14:00:00-04:00" },
                        "end": { "dateTime": "2025-06-03T15:00:00-04:00" }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let events = client.fetch_busy(june_window()).await.expect("events fetched");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "evt-1");
        assert_eq!(events[0].title, "Phone screen");
        assert_eq!(events[0].source, EventSource::ExternalCalendar);
        // Untitled events still block time.
        assert_eq!(events[1].title, "(busy)");
        // Offset times are normalised to UTC.
        assert_eq!(
            events[1].start,
            Utc.with_ymd_and_hms(2025, 6, 3, 18, 0, 0).single().expect("valid")
        );
    }

    #[tokio::test]
    async fn skips_all_day_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": "evt-all-day",
                        "summary": "Public holiday",
                        "start": { "date": "2025-06-02" },
                        "end": { "date": "2025-06-03" }
                    },
                    {
                        "id": "evt-timed",
                        "summary": "Standup",
                        "start": { "dateTime": "2025-06-02T13:00:00Z" },
                        "end": { "dateTime": "2025-06-02T13:15:00Z" }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let events = client.fetch_busy(june_window()).await.expect("events fetched");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "evt-timed");
    }

    #[tokio::test]
    async fn api_error_maps_to_collaborator_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(503).set_body_string("backend unavailable"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let result = client.fetch_busy(june_window()).await;

        assert!(matches!(result, Err(HireflowError::CollaboratorUnavailable(_))));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_collaborator_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let result = client.fetch_busy(june_window()).await;

        assert!(matches!(result, Err(HireflowError::CollaboratorUnavailable(_))));
    }
}
