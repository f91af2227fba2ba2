//! Landing page served at `/`.
//!
//! Plain text is the default; the HTML page is an alternate presentation of
//! the same information.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use devicedesk_app::ports::{DeviceRepository, SoftwareRequestRepository};

use crate::state::AppState;

const SERVICE_NAME: &str = "Device Integration API";

/// A route advertised on the HTML landing page.
pub struct Endpoint {
    method: &'static str,
    path: &'static str,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/api/v1/health",
    },
    Endpoint {
        method: "GET",
        path: "/api/v1/devices/{user_id}",
    },
    Endpoint {
        method: "GET",
        path: "/api/v1/devices/{device_id}/status",
    },
    Endpoint {
        method: "POST",
        path: "/api/v1/devices/{device_id}/request_software",
    },
    Endpoint {
        method: "GET",
        path: "/api/v1/software_requests/{request_id}",
    },
];

/// How the landing page is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingStyle {
    #[default]
    Text,
    Html,
}

/// What the landing page shows.
#[derive(Debug, Clone)]
pub struct LandingPage {
    pub version: String,
    pub style: LandingStyle,
}

/// HTML landing page template.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    service: &'static str,
    version: String,
    endpoints: &'static [Endpoint],
}

impl IntoResponse for LandingTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

impl LandingPage {
    #[must_use]
    pub fn new(version: impl Into<String>, style: LandingStyle) -> Self {
        Self {
            version: version.into(),
            style,
        }
    }

    /// One-line status message.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{SERVICE_NAME} is running. Version {}", self.version)
    }

    /// Standalone HTML page listing the API endpoints.
    #[must_use]
    pub fn html(&self) -> LandingTemplate {
        LandingTemplate {
            service: SERVICE_NAME,
            version: self.version.clone(),
            endpoints: ENDPOINTS,
        }
    }

    /// Render in the configured style.
    #[must_use]
    pub fn render(&self) -> Response {
        match self.style {
            LandingStyle::Text => self.text().into_response(),
            LandingStyle::Html => self.html().into_response(),
        }
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new("1.0", LandingStyle::Text)
    }
}

/// `GET /`
pub async fn index<DR, SR>(State(state): State<AppState<DR, SR>>) -> Response
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    state.landing.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_version_in_text() {
        let page = LandingPage::new("2.3.1", LandingStyle::Text);
        assert!(page.text().contains("Version 2.3.1"));
    }

    #[test]
    fn should_list_endpoints_in_html() {
        let page = LandingPage::new("1.0", LandingStyle::Html);
        let html = page.html().to_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Version 1.0"));
        assert!(html.contains("<code>POST /api/v1/devices/{device_id}/request_software</code>"));
        assert_eq!(html.matches("<li>").count(), ENDPOINTS.len());
    }

    #[test]
    fn should_escape_version_in_html() {
        let page = LandingPage::new("<b>1.0</b>", LandingStyle::Html);
        let html = page.html().to_string();
        assert!(html.contains("Version &lt;b&gt;1.0"));
        assert!(!html.contains("<b>1.0</b>"));
    }

    #[test]
    fn should_parse_style_from_lowercase() {
        let style: LandingStyle = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(style, LandingStyle::Html);
    }
}
