// src/infrastructure/mail/resend.rs
use crate::application::ports::mailer::{EmailMessage, MailError, Mailer};
use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

/// Transactional-email adapter over the Resend HTTP API. One POST per
/// send, no batching and no idempotency key; a caller that retries risks
/// a duplicate email.
#[derive(Clone)]
pub struct ResendMailer {
    http: Client,
    base_url: Url,
    api_key: String,
    from: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

impl ResendMailer {
    pub fn new(
        api_key: impl Into<String>,
        from: impl Into<String>,
        base_url: Url,
        http: Client,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.into(),
            from: from.into(),
        }
    }

    /// Credentials were already validated by [`AppConfig::from_env`]; a
    /// process without them never reaches this point.
    pub fn from_config(config: &AppConfig) -> Result<Self, MailError> {
        let base_url = Url::parse(config.resend_base_url())
            .map_err(|err| MailError::Transport(format!("invalid provider base url: {err}")))?;
        Ok(Self::new(
            config.resend_api_key(),
            config.smtp_from(),
            base_url,
            Client::new(),
        ))
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let url = self
            .base_url
            .join("emails")
            .map_err(|err| MailError::Transport(err.to_string()))?;

        let body = SendRequest {
            from: &self.from,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<unavailable>"));
            return Err(MailError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actor::EmailAddress;
    use httpmock::prelude::*;
    use serde_json::json;

    fn mailer(base_url: &Url) -> ResendMailer {
        ResendMailer::new(
            "re_test_key",
            "\"Law Nation\" <no-reply@lawnation.in>",
            base_url.clone(),
            Client::new(),
        )
    }

    fn message() -> EmailMessage {
        EmailMessage {
            to: EmailAddress::new("priya@example.com").unwrap(),
            subject: "Article Received".into(),
            html: "<p>received</p>".into(),
        }
    }

    #[tokio::test]
    async fn send_issues_exactly_one_provider_call() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/")).unwrap();

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/emails")
                    .header("authorization", "Bearer re_test_key")
                    .json_body(json!({
                        "from": "\"Law Nation\" <no-reply@lawnation.in>",
                        "to": ["priya@example.com"],
                        "subject": "Article Received",
                        "html": "<p>received</p>"
                    }));
                then.status(200)
                    .json_body(json!({ "id": "email-1" }));
            })
            .await;

        mailer(&base).send(&message()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn provider_rejection_surfaces_status_and_body() {
        let server = MockServer::start_async().await;
        let base = Url::parse(&server.url("/")).unwrap();

        server
            .mock_async(|when, then| {
                when.method(POST).path("/emails");
                then.status(422).body("invalid sender");
            })
            .await;

        let err = mailer(&base).send(&message()).await.unwrap_err();
        match err {
            MailError::Provider { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "invalid sender");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        // Port 9 is discard; nothing is listening there in the test env.
        let base = Url::parse("http://127.0.0.1:9/").unwrap();
        let err = mailer(&base).send(&message()).await.unwrap_err();
        assert!(matches!(err, MailError::Transport(_)));
    }
}
