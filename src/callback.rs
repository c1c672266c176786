// ABOUTME: Decodes inbound delivery-report and inbound-SMS callback parameters
// ABOUTME: Projects explicit GET/POST parameter maps into typed records plus the ack payload

use std::collections::HashMap;

use tracing::debug;

use crate::datatypes::{DeliveryReason, DeliveryStatus};

/// Which parameter set of the inbound request the gateway was configured
/// to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallbackMethod {
    Get,
    #[default]
    Post,
}

/// The parameters of one inbound callback request.
///
/// The caller's HTTP layer extracts both maps and hands them over; the
/// decoder reads only the one selected by its configured method.
#[derive(Debug, Clone, Default)]
pub struct CallbackRequest {
    get: HashMap<String, String>,
    post: HashMap<String, String>,
}

impl CallbackRequest {
    pub fn new(get: HashMap<String, String>, post: HashMap<String, String>) -> Self {
        Self { get, post }
    }

    pub fn from_get(params: HashMap<String, String>) -> Self {
        Self {
            get: params,
            post: HashMap::new(),
        }
    }

    pub fn from_post(params: HashMap<String, String>) -> Self {
        Self {
            get: HashMap::new(),
            post: params,
        }
    }

    fn params(&self, method: CallbackMethod) -> &HashMap<String, String> {
        match method {
            CallbackMethod::Get => &self.get,
            CallbackMethod::Post => &self.post,
        }
    }
}

/// Normalized delivery report pushed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub message_id: String,
    pub destination_address: String,
    pub status_code: i32,
    pub time_stamp: String,
    pub operator: String,
    pub reason_code: i32,
    pub operator_time_stamp: String,
    pub status_text: String,
}

impl DeliveryReport {
    pub fn status_description(&self) -> &'static str {
        DeliveryStatus::describe(self.status_code)
    }

    pub fn reason_description(&self) -> &'static str {
        DeliveryReason::describe(self.reason_code)
    }
}

/// Normalized mobile-originated message pushed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundSms {
    pub destination_address: String,
    pub originator_address: String,
    pub message: String,
    pub message_id: String,
    pub time_stamp: String,
    pub operator: String,
}

/// Read-only projections over an inbound request's parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackDecoder {
    method: CallbackMethod,
}

impl CallbackDecoder {
    pub fn new(method: CallbackMethod) -> Self {
        Self { method }
    }

    /// Extracts a delivery report.
    ///
    /// Returns `None` when the mandatory `MessageId` parameter is absent:
    /// the request is not a gateway callback, which is not an error.
    /// Omittable fields take their vendor defaults.
    pub fn delivery_report(&self, request: &CallbackRequest) -> Option<DeliveryReport> {
        let params = request.params(self.method);
        let message_id = params.get("MessageId")?.clone();
        debug!("Decoding delivery report for message {}", message_id);
        Some(DeliveryReport {
            message_id,
            destination_address: text_field(params, "DestinationAddress"),
            status_code: numeric_field(params, "StatusCode"),
            time_stamp: text_field(params, "TimeStamp"),
            operator: text_field(params, "Operator"),
            reason_code: numeric_field(params, "ReasonCode"),
            operator_time_stamp: text_field(params, "OperatorTimeStamp"),
            status_text: text_field(params, "StatusText"),
        })
    }

    /// Extracts an inbound mobile-originated message.
    ///
    /// Returns `None` when the mandatory `MessageId` parameter is absent.
    pub fn inbound_sms(&self, request: &CallbackRequest) -> Option<InboundSms> {
        let params = request.params(self.method);
        let message_id = params.get("MessageId")?.clone();
        debug!("Decoding inbound SMS {}", message_id);
        Some(InboundSms {
            destination_address: text_field(params, "DestinationAddress"),
            originator_address: text_field(params, "OriginatorAddress"),
            message: text_field(params, "Message"),
            message_id,
            time_stamp: text_field(params, "TimeStamp"),
            operator: text_field(params, "Operator"),
        })
    }
}

/// The response body the callback endpoint returns to the gateway.
pub fn acknowledgement(ack: bool) -> String {
    format!("<DeliveryResponse ack=\"{ack}\"/>")
}

fn text_field(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

fn numeric_field(params: &HashMap<String, String>, key: &str) -> i32 {
    params
        .get(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}
