//! Message delivery seam.
//!
//! [`MessageChannel`] is the single point where a prepared reminder leaves the system. The
//! production implementation posts to the proxy; tests substitute an in-memory channel.

use std::{collections::BTreeMap, future::Future};

use entity::sea_orm_active_enums::MessageType;
use serde::{Deserialize, Serialize};

use crate::server::proxy::{ProxyClient, SEND_MESSAGE_PATH};

/// Person a templated message is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Name shown in the message
    pub name: String,
    /// Digits only
    pub phone: String,
}

/// Outcome of a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    /// Delivered through the given message type, `Sms`/`Lms` when the provider failed over
    Delivered(MessageType),
    Failed(String),
}

/// Sends a registered template to one recipient.
pub trait MessageChannel: Send + Sync {
    /// Delivers `template_code` with `variables` substituted, preferring `channel`.
    ///
    /// With `failover` set the provider may fall back to SMS/LMS when the preferred channel
    /// fails. Transport problems are reported as [`DeliveryResult::Failed`], never as an error.
    fn send_templated_message(
        &self,
        channel: MessageType,
        recipient: &Recipient,
        template_code: &str,
        variables: &BTreeMap<String, String>,
        failover: bool,
    ) -> impl Future<Output = DeliveryResult> + Send;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    channel: MessageType,
    template_code: &'a str,
    failover: bool,
    recipient: &'a Recipient,
    variables: &'a BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageResponse {
    success: bool,
    #[serde(default)]
    channel: Option<MessageType>,
    #[serde(default)]
    error: Option<String>,
}

impl MessageChannel for ProxyClient {
    async fn send_templated_message(
        &self,
        channel: MessageType,
        recipient: &Recipient,
        template_code: &str,
        variables: &BTreeMap<String, String>,
        failover: bool,
    ) -> DeliveryResult {
        let request = SendMessageRequest {
            channel,
            template_code,
            failover,
            recipient,
            variables,
        };

        let response = match self
            .http
            .post(self.url(SEND_MESSAGE_PATH))
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(template_code, "Failed to reach alimtalk proxy: {}", err);

                return DeliveryResult::Failed(err.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            return DeliveryResult::Failed(format!("proxy responded with status {}", status));
        }

        match response.json::<SendMessageResponse>().await {
            Ok(SendMessageResponse { success: true, channel: delivered, .. }) => {
                DeliveryResult::Delivered(delivered.unwrap_or(channel))
            }
            Ok(SendMessageResponse { error, .. }) => DeliveryResult::Failed(
                error.unwrap_or_else(|| "delivery rejected by provider".to_string()),
            ),
            Err(err) => DeliveryResult::Failed(format!("invalid proxy response: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, time::Duration};

    use entity::sea_orm_active_enums::MessageType;
    use mockito::{Matcher, Server};

    use super::{DeliveryResult, MessageChannel, Recipient};
    use crate::server::proxy::ProxyClient;

    fn recipient() -> Recipient {
        Recipient {
            name: "홍길동".to_string(),
            phone: "01012345678".to_string(),
        }
    }

    fn variables() -> BTreeMap<String, String> {
        BTreeMap::from([("#{조합명}".to_string(), "테스트조합".to_string())])
    }

    /// Expect the delivering channel reported by the proxy to be returned
    #[tokio::test]
    async fn reports_failover_channel() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/alimtalk/send")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "channel": "KAKAO",
                "templateCode": "CONSENT_REMINDER",
                "failover": true,
                "recipient": { "phone": "01012345678" },
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"channel":"SMS"}"#)
            .create_async()
            .await;

        let client = ProxyClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let result = client
            .send_templated_message(
                MessageType::Kakao,
                &recipient(),
                "CONSENT_REMINDER",
                &variables(),
                true,
            )
            .await;

        assert_eq!(result, DeliveryResult::Delivered(MessageType::Sms));
        mock.assert_async().await;
    }

    /// Expect a rejected delivery to carry the provider error
    #[tokio::test]
    async fn reports_provider_rejection() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/alimtalk/send")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":false,"error":"invalid number"}"#)
            .create_async()
            .await;

        let client = ProxyClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let result = client
            .send_templated_message(
                MessageType::Kakao,
                &recipient(),
                "CONSENT_REMINDER",
                &variables(),
                false,
            )
            .await;

        assert_eq!(result, DeliveryResult::Failed("invalid number".to_string()));
    }

    /// Expect a non-2xx status to be a failed delivery rather than an error
    #[tokio::test]
    async fn treats_server_error_as_failed_delivery() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/alimtalk/send")
            .with_status(502)
            .create_async()
            .await;

        let client = ProxyClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let result = client
            .send_templated_message(
                MessageType::Kakao,
                &recipient(),
                "REGISTER_INVITE",
                &variables(),
                true,
            )
            .await;

        assert!(matches!(result, DeliveryResult::Failed(_)));
    }
}
