//! Entry store talking to the portal's `/crop-calendar` endpoints.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Response, StatusCode, Url};

use super::EntryStore;
use crate::{
    error::{CalendarError, NetworkResultExt, Result},
    models::{EntryId, PlannerEntry},
    params::NewEntry,
};

/// HTTP client for the portal backend.
///
/// `base_url` is the API root, e.g. `https://portal.example/api`; resource
/// paths are appended to it segment by segment.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: Url,
}

impl RestStore {
    /// # Errors
    ///
    /// Returns `CalendarError::Configuration` unless `base_url` is an
    /// absolute http(s) URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let raw = base_url.as_ref().trim();
        let base_url = Url::parse(raw).map_err(|e| CalendarError::Configuration {
            message: format!("Invalid API URL '{raw}': {e}"),
        })?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(CalendarError::Configuration {
                message: format!("API URL must be an http(s) address, got '{raw}'"),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// `{base}/crop-calendar/{segments...}`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CalendarError::Configuration {
                message: format!("API URL cannot take a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .push("crop-calendar")
            .extend(segments);
        Ok(url)
    }

    /// Turns non-success statuses into errors. A 404 on an id-addressed
    /// call means the entry is gone.
    async fn check(response: Response, id: Option<&EntryId>) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Backend request failed ({status}): {body}");

        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(CalendarError::EntryNotFound { id: id.to_string() }),
            _ => Err(CalendarError::HttpStatus {
                status: status.as_u16(),
                message: body,
            }),
        }
    }
}

#[async_trait]
impl EntryStore for RestStore {
    fn name(&self) -> &str {
        "rest"
    }

    async fn list(&self, user_id: &str) -> Result<Vec<PlannerEntry>> {
        let url = self.url(&[user_id])?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .net_context("Failed to fetch planner entries")?;

        Self::check(response, None)
            .await?
            .json()
            .await
            .net_context("Failed to parse planner entries")
    }

    async fn create(&self, entry: &NewEntry) -> Result<PlannerEntry> {
        let url = self.url(&[])?;
        debug!("POST {url} ({} / {})", entry.crop_name, entry.activity);

        let response = self
            .client
            .post(url)
            .json(entry)
            .send()
            .await
            .net_context("Failed to create planner entry")?;

        Self::check(response, None)
            .await?
            .json()
            .await
            .net_context("Failed to parse created entry")
    }

    async fn set_completed(&self, id: &EntryId, completed: bool) -> Result<()> {
        // The response body is a bare confirmation; callers re-list.
        let url = self.url(&[id.as_str()])?;
        debug!("PUT {url} completed={completed}");

        let response = self
            .client
            .put(url)
            .query(&[("completed", completed)])
            .send()
            .await
            .net_context("Failed to update planner entry")?;

        Self::check(response, Some(id)).await.map(|_| ())
    }

    async fn delete(&self, id: &EntryId) -> Result<()> {
        let url = self.url(&[id.as_str()])?;
        debug!("DELETE {url}");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .net_context("Failed to delete planner entry")?;

        Self::check(response, Some(id)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    use super::*;

    /// Serves one canned HTTP/1.1 response and hands back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];

            let header_end = loop {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "connection closed before headers were complete");
                request.extend_from_slice(&buf[..n]);
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&request[..header_end]).into_owned();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            while request.len() < header_end + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "connection closed before body was complete");
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/api"), handle)
    }

    #[test]
    fn test_url_appends_segments_after_trailing_slash() {
        let store = RestStore::new("https://portal.example/api/").unwrap();
        assert_eq!(
            store.url(&["farmer-1"]).unwrap().as_str(),
            "https://portal.example/api/crop-calendar/farmer-1"
        );
        assert_eq!(
            store.url(&[]).unwrap().as_str(),
            "https://portal.example/api/crop-calendar"
        );
    }

    #[test]
    fn test_url_segments_are_percent_encoded() {
        let store = RestStore::new("https://portal.example/api").unwrap();
        assert_eq!(
            store.url(&["a/b?c#d"]).unwrap().as_str(),
            "https://portal.example/api/crop-calendar/a%2Fb%3Fc%23d"
        );
        assert_eq!(
            store.url(&["farmer one"]).unwrap().as_str(),
            "https://portal.example/api/crop-calendar/farmer%20one"
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        for raw in ["not a url", "ftp://portal.example/api", "mailto:farmer@example.com"] {
            let err = RestStore::new(raw).unwrap_err();
            assert!(matches!(err, CalendarError::Configuration { .. }), "{raw}: {err:?}");
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // Port 9 (discard) is closed on test hosts.
        let store = RestStore::new("http://127.0.0.1:9/api").unwrap();
        let err = store.list("farmer-1").await.unwrap_err();
        assert!(matches!(err, CalendarError::Network { .. }), "got {err:?}");
        assert_eq!(err.notice("load activities"), "Failed to load activities");
    }

    #[tokio::test]
    async fn test_put_404_is_entry_not_found() {
        let (base, server) = serve_once("404 Not Found", r#"{"detail":"Entry not found"}"#).await;
        let store = RestStore::new(base).unwrap();

        let err = store
            .set_completed(&EntryId("abc-123".to_string()), true)
            .await
            .unwrap_err();
        assert!(matches!(err, CalendarError::EntryNotFound { ref id } if id == "abc-123"), "got {err:?}");

        let request = server.await.unwrap();
        assert!(
            request.starts_with("PUT /api/crop-calendar/abc-123?completed=true HTTP/1.1\r\n"),
            "{request}"
        );
    }

    #[tokio::test]
    async fn test_get_500_is_http_status() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
        let store = RestStore::new(base).unwrap();

        let err = store.list("farmer-1").await.unwrap_err();
        match &err {
            CalendarError::HttpStatus { status, message } => {
                assert_eq!(*status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        assert_eq!(err.notice("load activities"), "Failed to load activities");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/crop-calendar/farmer-1 HTTP/1.1\r\n"), "{request}");
    }

    #[tokio::test]
    async fn test_delete_500_is_http_status_not_missing_entry() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;
        let store = RestStore::new(base).unwrap();

        let err = store.delete(&EntryId("abc-123".to_string())).await.unwrap_err();
        assert!(matches!(err, CalendarError::HttpStatus { status: 500, .. }), "got {err:?}");

        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /api/crop-calendar/abc-123 HTTP/1.1\r\n"), "{request}");
    }

    #[tokio::test]
    async fn test_post_parses_backend_entry() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"id":"9b1c","user_id":"farmer-1","crop_name":"Wheat","activity":"Sowing","scheduled_date":"2025-10-15","notes":null,"completed":false,"created_at":"2025-06-30T08:15:00.123456+00:00"}"#,
        )
        .await;
        let store = RestStore::new(base).unwrap();

        let new_entry = NewEntry {
            user_id: "farmer-1".to_string(),
            crop_name: "Wheat".to_string(),
            activity: "Sowing".to_string(),
            scheduled_date: date(2025, 10, 15),
            notes: None,
        };
        let created = store.create(&new_entry).await.unwrap();

        assert_eq!(created.id.as_str(), "9b1c");
        assert_eq!(created.scheduled_date, date(2025, 10, 15));
        assert_eq!(created.notes, None);
        assert!(!created.completed);
        assert_eq!(
            created.created_at,
            "2025-06-30T08:15:00.123456Z".parse::<Timestamp>().unwrap()
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/crop-calendar HTTP/1.1\r\n"), "{request}");
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "user_id": "farmer-1",
                "crop_name": "Wheat",
                "activity": "Sowing",
                "scheduled_date": "2025-10-15",
                "notes": null
            })
        );
    }
}
