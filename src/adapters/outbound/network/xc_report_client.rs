use crate::report_export::domain::{ReportKind, ReportPayload};
use crate::ports::outbound::ReportRepository;
use crate::shared::error::ExportError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

const APPLICATION_JSON: &str = "application/json";

/// Location of one application report on the scanning server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocation {
    pub server_url: String,
    pub app_id: String,
    pub report_id: String,
}

impl ReportLocation {
    pub fn new(server_url: String, app_id: String, report_id: String) -> Self {
        Self {
            server_url,
            app_id,
            report_id,
        }
    }

    /// `{server}/rest/report/{appId}/{reportId}/browseReport/{file}`
    pub fn endpoint(&self, kind: ReportKind) -> String {
        format!(
            "{}/rest/report/{}/{}/browseReport/{}",
            self.server_url.trim_end_matches('/'),
            urlencoding::encode(&self.app_id),
            urlencoding::encode(&self.report_id),
            kind.file_name()
        )
    }
}

/// Basic authentication credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// XcReportClient adapter for the scanning server's report REST API
///
/// Implements the ReportRepository port with an async reqwest client.
/// Each report is fetched exactly once; failures are returned to the caller
/// without retrying.
pub struct XcReportClient {
    client: reqwest::Client,
    location: ReportLocation,
    credentials: Credentials,
}

impl XcReportClient {
    /// Creates a client. `timeout` of `None` waits for the server indefinitely.
    pub fn new(
        location: ReportLocation,
        credentials: Credentials,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("xc-report-export/{}", version);
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            location,
            credentials,
        })
    }
}

#[async_trait]
impl ReportRepository for XcReportClient {
    async fn fetch_report(&self, kind: ReportKind) -> Result<ReportPayload> {
        let url = self.location.endpoint(kind);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .send()
            .await
            .map_err(|e| ExportError::ReportFetchError {
                report: kind.to_string(),
                url: url.clone(),
                details: format!("{:#}", anyhow::Error::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::ReportStatusError {
                report: kind.to_string(),
                url,
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ExportError::ReportFetchError {
                report: kind.to_string(),
                url: url.clone(),
                details: e.to_string(),
            })?;

        let payload: ReportPayload =
            serde_json::from_slice(&body).map_err(|e| ExportError::ReportParseError {
                report: kind.to_string(),
                details: e.to_string(),
            })?;

        Ok(payload)
    }
}
