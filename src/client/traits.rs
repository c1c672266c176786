// ABOUTME: Core client traits using native async functions
// ABOUTME: Defines the transport collaborator contract and the message sending interface

use crate::client::types::{SendOptions, SendReport};
use crate::datatypes::{SubmitRequest, SubmitResponse, TransportFault};

/// Contract for the SOAP transport collaborator.
///
/// The transport owns everything below the envelope: endpoint selection,
/// timeouts, connect attempts, certificate verification and WSDL handling
/// (see [`TransportConfig`](crate::client::types::TransportConfig)). This
/// crate never constructs one; callers supply an implementation.
pub trait SoapTransport {
    /// Performs one SendRequest round trip.
    ///
    /// Returns the gateway's response record, or a fault for any
    /// connection-, timeout- or envelope-level failure.
    async fn call(&mut self, request: &SubmitRequest) -> Result<SubmitResponse, TransportFault>;
}

/// Message sending operations.
///
/// Implementations must process parts strictly in order and stop at the
/// first hard failure; the returned report always carries one entry per
/// attempted part.
pub trait SmsTransmitter {
    /// Sends a text message to one or more recipients.
    ///
    /// The message is validated against the GSM 7-bit alphabet and split
    /// into at most five parts before any transport contact. The report
    /// carries per-part results and the recipient list as it stands after
    /// partial-success pruning.
    async fn send_sms(
        &mut self,
        message: &str,
        recipients: &[String],
        originator: &str,
        options: &SendOptions,
    ) -> SendReport;

    /// Sends raw message bytes, gating on UTF-8 well-formedness first.
    ///
    /// Invalid input yields a single-entry error report without contacting
    /// the transport.
    async fn send_sms_bytes(
        &mut self,
        message: &[u8],
        recipients: &[String],
        originator: &str,
        options: &SendOptions,
    ) -> SendReport {
        match std::str::from_utf8(message) {
            Ok(text) => self.send_sms(text, recipients, originator, options).await,
            Err(source) => SendReport::rejected(source.into(), recipients.to_vec()),
        }
    }
}
