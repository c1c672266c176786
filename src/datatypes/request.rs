// ABOUTME: Wire-facing records exchanged with the SOAP transport collaborator
// ABOUTME: Field names follow the gateway's SendRequest/SendResponse schema

use thiserror::Error;

use crate::datatypes::OriginatorTon;

/// One outbound SendRequest, one per message part.
///
/// Field names mirror the gateway's SOAP schema. The optional fields are
/// accepted by the gateway but never populated by this client; they stay
/// `None` and serialize as empty elements.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub correlation_id: Option<String>,
    pub originating_address: String,
    pub originator_ton: OriginatorTon,
    /// Semicolon-joined when the part targets several recipients.
    pub destination_address: String,
    pub user_data: String,
    /// Zero-padded hex UDH, present only for concatenated parts.
    pub user_data_header: Option<String>,
    pub dcs: i32,
    pub pid: Option<i32>,
    /// Relative validity in minutes, -1 when the caller set none.
    pub relative_validity_time: i64,
    pub delivery_time: Option<String>,
    /// 1 requests a delivery report, 0 does not.
    pub status_report_flags: i32,
    pub account_name: Option<String>,
    pub tariff_class: String,
    pub vat: Option<f64>,
    pub reference_id: Option<String>,
    pub service_name: Option<String>,
    pub service_category: Option<String>,
    pub service_meta_data: Option<String>,
    pub campaign_id: Option<String>,
    pub username: String,
    pub password: String,
}

/// The gateway's SendResponse record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmitResponse {
    pub correlation_id: Option<String>,
    pub message_id: String,
    pub response_code: i32,
    pub reason_code: Option<i32>,
    pub response_message: String,
    pub temporary_error: bool,
    pub billing_status: Option<i32>,
    pub vat: Option<f64>,
}

/// SOAP-level fault raised by the transport collaborator: connection
/// failures, timeouts and envelope faults all surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{fault_code}: {fault_string}")]
pub struct TransportFault {
    pub fault_code: String,
    pub fault_string: String,
}

impl TransportFault {
    pub fn new(fault_code: impl Into<String>, fault_string: impl Into<String>) -> Self {
        Self {
            fault_code: fault_code.into(),
            fault_string: fault_string.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_fault_display() {
        let fault = TransportFault::new("HTTP", "connection refused");
        assert_eq!(fault.to_string(), "HTTP: connection refused");
    }

    #[test]
    fn test_submit_response_default_is_empty() {
        let response = SubmitResponse::default();
        assert_eq!(response.response_code, 0);
        assert!(response.message_id.is_empty());
        assert!(response.reason_code.is_none());
    }
}
