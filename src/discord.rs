pub mod embed;
pub mod notification;

use reqwest::{
    StatusCode, Url,
    blocking::{Client, Response},
    header::CONTENT_TYPE,
};

use crate::discord::notification::Payload;

/// How an HTTP response from the webhook is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Any response counts as delivered, whatever its status code.
    #[default]
    AnyResponse,
    /// Only 2xx responses count as delivered.
    RequireSuccess,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent { status: StatusCode },
    /// A response arrived but [`StatusPolicy::RequireSuccess`] refused its status.
    Rejected { status: StatusCode },
    /// No response at all (connection, DNS, timeout, ...).
    Failed { reason: String },
}

impl Delivery {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

#[derive(Debug, Clone)]
pub struct WebhookSender {
    http_client: Client,
    policy: StatusPolicy,
}

impl WebhookSender {
    #[must_use]
    pub fn new(policy: StatusPolicy) -> Self {
        Self::with_client(Client::new(), policy)
    }

    #[must_use]
    pub const fn with_client(http_client: Client, policy: StatusPolicy) -> Self {
        Self {
            http_client,
            policy,
        }
    }

    /// Posts the payload to the webhook once.
    ///
    /// Failures are logged and reported through the returned [`Delivery`];
    /// this never returns an error.
    pub fn send(&self, payload: &Payload<'_>, url: &Url) -> Delivery {
        let body: String = match payload.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Could not serialize webhook payload: {e}");
                return Delivery::Failed {
                    reason: e.to_string(),
                };
            }
        };
        log::debug!("Webhook payload: {body}");

        let result = self
            .http_client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send();

        match result {
            Ok(resp) => self.judge(&resp),
            Err(e) => {
                // The webhook URL carries the token
                let e = e.without_url();
                log::error!("Error sending notification to Discord: {e}");
                Delivery::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn judge(&self, resp: &Response) -> Delivery {
        let status: StatusCode = resp.status();
        if self.policy == StatusPolicy::RequireSuccess && !status.is_success() {
            log::error!("Discord rejected the notification with status {status}");
            return Delivery::Rejected { status };
        }
        if !status.is_success() {
            log::warn!("Discord answered with status {status}; treating it as delivered");
        }
        log::info!("Discord notification sent. Status: {status}");
        Delivery::Sent { status }
    }
}

impl Default for WebhookSender {
    fn default() -> Self {
        Self::new(StatusPolicy::default())
    }
}
