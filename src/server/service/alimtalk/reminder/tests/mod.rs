
use std::{
    collections::{BTreeMap, VecDeque},
    sync::Mutex,
};

use entity::sea_orm_active_enums::MessageType;
use unionhub_test_utils::prelude::*;

use crate::server::proxy::channel::{DeliveryResult, MessageChannel, Recipient};

use super::*;

/// In-memory channel answering with queued results, `Delivered(Kakao)` once exhausted.
#[derive(Default)]
struct RecordingChannel {
    results: Mutex<VecDeque<DeliveryResult>>,
    sent: Mutex<Vec<(Recipient, String, BTreeMap<String, String>, bool)>>,
}

impl RecordingChannel {
    fn with_results(results: Vec<DeliveryResult>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            sent: Mutex::default(),
        }
    }

    fn sent(&self) -> Vec<(Recipient, String, BTreeMap<String, String>, bool)> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessageChannel for RecordingChannel {
    async fn send_templated_message(
        &self,
        _channel: MessageType,
        recipient: &Recipient,
        template_code: &str,
        variables: &BTreeMap<String, String>,
        failover: bool,
    ) -> DeliveryResult {
        self.sent.lock().unwrap().push((
            recipient.clone(),
            template_code.to_string(),
            variables.clone(),
            failover,
        ));

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(DeliveryResult::Delivered(MessageType::Kakao))
    }
}
