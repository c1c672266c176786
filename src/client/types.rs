// ABOUTME: Supporting types for client operations: credentials, options, transport config
// ABOUTME: and the per-part result records returned by the send pipeline

use std::time::Duration;

use crate::client::error::IpxError;
use crate::datatypes::{DataCoding, OriginatorTon, ReasonCode, ResponseCode, SubmitResponse};

/// Tariff class applied when the caller does not override it.
pub const DEFAULT_TARIFF_CLASS: &str = "EUR0";

/// Sentinel the gateway understands as "no relative validity".
pub const NO_VALIDITY: i64 = -1;

/// Gateway account credentials, sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Per-call send configuration with gateway defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SendOptions {
    /// Originator type-of-number, alphanumeric unless overridden.
    pub originator_ton: OriginatorTon,
    /// Explicit DCS override; when absent the flash flag decides.
    pub dcs: Option<i32>,
    /// Send as a class-0 flash message.
    pub flash: bool,
    /// Request delivery reports for every part.
    pub delivery_report: bool,
    /// Relative validity in minutes; absent means gateway default.
    pub validity_time: Option<i64>,
    pub tariff_class: String,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            originator_ton: OriginatorTon::default(),
            dcs: None,
            flash: false,
            delivery_report: false,
            validity_time: None,
            tariff_class: DEFAULT_TARIFF_CLASS.to_owned(),
        }
    }
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_originator_ton(mut self, ton: OriginatorTon) -> Self {
        self.originator_ton = ton;
        self
    }

    /// Force a raw DCS value, overriding the flash flag.
    pub fn with_dcs(mut self, dcs: i32) -> Self {
        self.dcs = Some(dcs);
        self
    }

    pub fn flash(mut self) -> Self {
        self.flash = true;
        self
    }

    pub fn with_delivery_report(mut self) -> Self {
        self.delivery_report = true;
        self
    }

    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.validity_time = Some(minutes);
        self
    }

    pub fn with_tariff_class(mut self, tariff_class: impl Into<String>) -> Self {
        self.tariff_class = tariff_class.into();
        self
    }

    /// The DCS value that goes on the wire for these options.
    pub fn effective_dcs(&self) -> i32 {
        DataCoding::resolve(self.dcs, self.flash).value()
    }

    pub fn status_report_flag(&self) -> i32 {
        if self.delivery_report { 1 } else { 0 }
    }

    pub fn validity_or_sentinel(&self) -> i64 {
        self.validity_time.unwrap_or(NO_VALIDITY)
    }
}

/// Construction-time configuration handed to the transport collaborator.
///
/// Orchestration never reads these; retries, timeouts and certificate
/// handling are entirely the transport's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub response_timeout: Duration,
    pub connect_attempts: u32,
    pub verify_certificate: bool,
    pub cache_wsdl: bool,
}

impl TransportConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(10),
            response_timeout: Duration::from_secs(30),
            connect_attempts: 1,
            verify_certificate: true,
            cache_wsdl: true,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    pub fn with_connect_attempts(mut self, attempts: u32) -> Self {
        self.connect_attempts = attempts;
        self
    }

    pub fn without_certificate_verification(mut self) -> Self {
        self.verify_certificate = false;
        self
    }

    pub fn without_wsdl_cache(mut self) -> Self {
        self.cache_wsdl = false;
        self
    }
}

/// Outcome of one message part.
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    Success(MessageReceipt),
    Error(IpxError),
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SendResult::Success(_))
    }

    pub fn receipt(&self) -> Option<&MessageReceipt> {
        match self {
            SendResult::Success(receipt) => Some(receipt),
            SendResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&IpxError> {
        match self {
            SendResult::Success(_) => None,
            SendResult::Error(error) => Some(error),
        }
    }
}

/// Acknowledgement details for one accepted message part.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReceipt {
    pub correlation_id: Option<String>,
    pub message_id: String,
    pub response_code: i32,
    pub reason_code: Option<i32>,
    pub response_message: String,
    pub temporary_error: bool,
    pub billing_status: Option<i32>,
    pub vat: Option<f64>,
    /// The destination string exactly as sent for this part.
    pub recipients: String,
}

impl MessageReceipt {
    pub(crate) fn from_response(response: SubmitResponse, recipients: String) -> Self {
        Self {
            correlation_id: response.correlation_id,
            message_id: response.message_id,
            response_code: response.response_code,
            reason_code: response.reason_code,
            response_message: response.response_message,
            temporary_error: response.temporary_error,
            billing_status: response.billing_status,
            vat: response.vat,
            recipients,
        }
    }

    pub fn response_description(&self) -> &'static str {
        ResponseCode::describe(self.response_code)
    }

    pub fn reason_description(&self) -> Option<&'static str> {
        self.reason_code.map(ReasonCode::describe)
    }
}

/// Everything a send produced: one result per attempted part, plus the
/// recipient list as it stands after partial-success pruning. The list
/// passed to `send_sms` is never mutated; callers account for the pruned
/// list here across retries.
#[derive(Debug, Clone, PartialEq)]
pub struct SendReport {
    pub results: Vec<SendResult>,
    pub recipients: Vec<String>,
}

impl SendReport {
    /// Report for a send rejected before any transport contact.
    pub(crate) fn rejected(error: IpxError, recipients: Vec<String>) -> Self {
        Self {
            results: vec![SendResult::Error(error)],
            recipients,
        }
    }

    /// True when every attempted part was accepted.
    pub fn is_success(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(SendResult::is_success)
    }

    pub fn first_error(&self) -> Option<&IpxError> {
        self.results.iter().find_map(SendResult::error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_options_defaults() {
        let options = SendOptions::default();
        assert_eq!(options.originator_ton, OriginatorTon::Alphanumeric);
        assert_eq!(options.effective_dcs(), 17);
        assert_eq!(options.status_report_flag(), 0);
        assert_eq!(options.validity_or_sentinel(), NO_VALIDITY);
        assert_eq!(options.tariff_class, DEFAULT_TARIFF_CLASS);
    }

    #[test]
    fn test_flash_selects_dcs_16() {
        assert_eq!(SendOptions::new().flash().effective_dcs(), 16);
    }

    #[test]
    fn test_explicit_dcs_wins_over_flash() {
        let options = SendOptions::new().flash().with_dcs(245);
        assert_eq!(options.effective_dcs(), 245);
    }

    #[test]
    fn test_delivery_report_flag() {
        assert_eq!(SendOptions::new().with_delivery_report().status_report_flag(), 1);
    }

    #[test]
    fn test_transport_config_defaults() {
        let config = TransportConfig::new("https://sms.example.test/soap");
        assert!(config.verify_certificate);
        assert!(config.cache_wsdl);
        assert_eq!(config.connect_attempts, 1);
    }

    #[test]
    fn test_report_success_requires_entries() {
        let empty = SendReport {
            results: Vec::new(),
            recipients: Vec::new(),
        };
        assert!(!empty.is_success());
    }
}
