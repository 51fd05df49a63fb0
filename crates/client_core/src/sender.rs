use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::FormFields, error::ApiError, protocol::CONTACT_API_ROUTE};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Stand-in latency for the simulated backend.
pub const SIMULATED_SEND_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Delivers a contact message to whatever backend handles leads.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, fields: &FormFields) -> Result<(), SendError>;
}

#[async_trait]
impl<T: ContactSender + ?Sized> ContactSender for std::sync::Arc<T> {
    async fn send(&self, fields: &FormFields) -> Result<(), SendError> {
        (**self).send(fields).await
    }
}

/// Waits a fixed delay and reports success without contacting anything.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(SIMULATED_SEND_DELAY)
    }
}

#[async_trait]
impl ContactSender for SimulatedSender {
    async fn send(&self, fields: &FormFields) -> Result<(), SendError> {
        debug!(delay_ms = self.delay.as_millis() as u64, service = %fields.service, "simulating contact send");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Posts the form as JSON to the site server's contact API.
#[derive(Debug, Clone)]
pub struct HttpContactSender {
    http: Client,
    endpoint: Url,
}

impl HttpContactSender {
    pub fn new(server_url: &str) -> Result<Self, url::ParseError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(server_url)?.join(CONTACT_API_ROUTE)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSender for HttpContactSender {
    async fn send(&self, fields: &FormFields) -> Result<(), SendError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(fields)
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match response.json::<ApiError>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        };
        warn!(status = status.as_u16(), %message, endpoint = %self.endpoint, "contact submission rejected");
        Err(SendError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use shared::error::ErrorCode;
    use tokio::net::TcpListener;

    use super::*;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        format!("http://{addr}")
    }

    fn fields() -> FormFields {
        FormFields {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            service: "Web Development".into(),
            message: "Hello".into(),
            ..FormFields::default()
        }
    }

    #[test]
    fn endpoint_is_joined_onto_the_server_url() {
        let sender = HttpContactSender::new("http://localhost:8080/ignored").expect("url");
        assert_eq!(sender.endpoint().as_str(), "http://localhost:8080/api/contact");
        assert!(HttpContactSender::new("not a url").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_sender_waits_then_succeeds() {
        let started = tokio::time::Instant::now();
        SimulatedSender::default().send(&fields()).await.expect("send");
        assert!(started.elapsed() >= SIMULATED_SEND_DELAY);
    }

    #[tokio::test]
    async fn http_sender_posts_json_fields() {
        let app = Router::new().route(
            CONTACT_API_ROUTE,
            post(|Json(body): Json<FormFields>| async move {
                assert_eq!(body.email, "jane@example.com");
                StatusCode::OK
            }),
        );
        let base = serve(app).await;
        HttpContactSender::new(&base)
            .expect("url")
            .send(&fields())
            .await
            .expect("send");
    }

    #[tokio::test]
    async fn http_sender_surfaces_rejections() {
        let app = Router::new().route(
            CONTACT_API_ROUTE,
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiError::new(ErrorCode::Validation, "bad form")),
                )
            }),
        );
        let base = serve(app).await;
        let err = HttpContactSender::new(&base)
            .expect("url")
            .send(&fields())
            .await
            .expect_err("should reject");
        assert_eq!(
            err,
            SendError::Rejected {
                status: 422,
                message: "bad form".into()
            }
        );
    }

    #[tokio::test]
    async fn http_sender_reports_unreachable_server_as_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = HttpContactSender::new(&format!("http://{addr}"))
            .expect("url")
            .send(&fields())
            .await
            .expect_err("should fail");
        assert!(matches!(err, SendError::Network(_)));
    }
}
