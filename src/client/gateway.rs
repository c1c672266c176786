// ABOUTME: The IPX gateway client: builds one request per message part and walks
// ABOUTME: them sequentially, reconciling partial success and aborting on hard failure

use tracing::{debug, warn};

use crate::client::error::IpxError;
use crate::client::traits::{SmsTransmitter, SoapTransport};
use crate::client::types::{Credentials, MessageReceipt, SendOptions, SendReport, SendResult};
use crate::datatypes::{ReasonCode, ResponseCode, SubmitRequest};
use crate::encoding;
use crate::segment::{self, MessagePart};

/// Client for the IPX SOAP SMS gateway.
///
/// Owns its transport exclusively; sharing a client across concurrent
/// callers requires external synchronization. Each send is stateless, one
/// transport round trip per message part, strictly in order.
pub struct IpxClient<T> {
    transport: T,
    credentials: Credentials,
}

impl<T: SoapTransport> IpxClient<T> {
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Hands the transport collaborator back to the caller.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: SoapTransport> SmsTransmitter for IpxClient<T> {
    async fn send_sms(
        &mut self,
        message: &str,
        recipients: &[String],
        originator: &str,
        options: &SendOptions,
    ) -> SendReport {
        let mut recipients: Vec<String> = recipients.to_vec();

        if let Err(error) = encoding::validate_alphabet(message) {
            return SendReport::rejected(error, recipients);
        }
        let parts = match segment::split_message(message) {
            Ok(parts) => parts,
            Err(error) => return SendReport::rejected(error, recipients),
        };

        debug!(
            "Sending {} part(s) to {} recipient(s)",
            parts.len(),
            recipients.len()
        );

        let mut results = Vec::with_capacity(parts.len());
        for part in &parts {
            let request = build_request(part, &recipients, originator, options, &self.credentials);
            let destination = request.destination_address.clone();

            let response = match self.transport.call(&request).await {
                Ok(response) => response,
                Err(fault) => {
                    warn!("Transport fault on part {}: {}", part.sequence, fault);
                    results.push(SendResult::Error(fault.into()));
                    break;
                }
            };

            match ResponseCode::try_from(response.response_code) {
                Ok(ResponseCode::Ok) => {
                    results.push(SendResult::Success(MessageReceipt::from_response(
                        response,
                        destination,
                    )));
                }
                Ok(ResponseCode::PartialSuccess) => {
                    let codes =
                        match parse_partial_success(&response.response_message, recipients.len()) {
                            Ok(codes) => codes,
                            Err(error) => {
                                warn!("Rejecting partial success response: {}", error);
                                results.push(SendResult::Error(error));
                                break;
                            }
                        };
                    prune_recipients(&mut recipients, &codes);
                    debug!(
                        "Partial success on part {}, {} recipient(s) remain",
                        part.sequence,
                        recipients.len()
                    );
                    results.push(SendResult::Success(MessageReceipt::from_response(
                        response,
                        destination,
                    )));
                }
                _ => {
                    warn!(
                        "Gateway error {} on part {}: {}",
                        response.response_code, part.sequence, response.response_message
                    );
                    results.push(SendResult::Error(IpxError::Gateway {
                        response_code: response.response_code,
                        response_message: response.response_message,
                        description: ResponseCode::describe(response.response_code),
                        reason_code: response.reason_code,
                        reason_description: response.reason_code.map(ReasonCode::describe),
                    }));
                    break;
                }
            }
        }

        SendReport {
            results,
            recipients,
        }
    }
}

/// Materializes the outbound request for one part. Sentinel fields the
/// client never populates stay `None`.
fn build_request(
    part: &MessagePart,
    recipients: &[String],
    originator: &str,
    options: &SendOptions,
    credentials: &Credentials,
) -> SubmitRequest {
    SubmitRequest {
        correlation_id: None,
        originating_address: originator.to_owned(),
        originator_ton: options.originator_ton,
        destination_address: recipients.join(";"),
        user_data: part.text.clone(),
        user_data_header: part.udh.map(|udh| udh.to_hex()),
        dcs: options.effective_dcs(),
        pid: None,
        relative_validity_time: options.validity_or_sentinel(),
        delivery_time: None,
        status_report_flags: options.status_report_flag(),
        account_name: None,
        tariff_class: options.tariff_class.clone(),
        vat: None,
        reference_id: None,
        service_name: None,
        service_category: None,
        service_meta_data: None,
        campaign_id: None,
        username: credentials.username.clone(),
        password: credentials.password.clone(),
    }
}

/// Extracts the per-recipient code list embedded in a partial-success
/// response message, e.g. `"Partial success: (0;1;0)"`.
///
/// Fails closed: a missing or malformed parenthesized list, or a code
/// count that does not match the live recipient list, is an error rather
/// than a silent no-op, so a resend can never target recipients the
/// gateway did not report on.
fn parse_partial_success(message: &str, expected: usize) -> Result<Vec<i32>, IpxError> {
    let malformed = || IpxError::PartialSuccessFormat(message.to_owned());

    let open = message.find('(').ok_or_else(malformed)?;
    let close = message.rfind(')').ok_or_else(malformed)?;
    if close <= open {
        return Err(malformed());
    }

    let codes = message[open + 1..close]
        .split(';')
        .map(|code| code.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;

    if codes.len() != expected {
        return Err(malformed());
    }
    Ok(codes)
}

/// Drops every recipient whose per-recipient code is non-zero. Positions
/// correspond to the semicolon-joined destination order.
fn prune_recipients(recipients: &mut Vec<String>, codes: &[i32]) {
    let mut position = 0;
    recipients.retain(|_| {
        let keep = codes[position] == 0;
        position += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_success() {
        let codes = parse_partial_success("Partial success: (0;1;0)", 3).unwrap();
        assert_eq!(codes, vec![0, 1, 0]);
    }

    #[test]
    fn test_parse_partial_success_single_recipient() {
        assert_eq!(parse_partial_success("Partial success: (7)", 1).unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_without_list_fails() {
        assert!(matches!(
            parse_partial_success("Partial success", 2),
            Err(IpxError::PartialSuccessFormat(_))
        ));
    }

    #[test]
    fn test_parse_non_numeric_fails() {
        assert!(matches!(
            parse_partial_success("Partial success: (0;x)", 2),
            Err(IpxError::PartialSuccessFormat(_))
        ));
    }

    #[test]
    fn test_parse_count_mismatch_fails() {
        assert!(matches!(
            parse_partial_success("Partial success: (0;1)", 3),
            Err(IpxError::PartialSuccessFormat(_))
        ));
    }

    #[test]
    fn test_prune_removes_nonzero_positions() {
        let mut recipients = vec![
            "+111".to_owned(),
            "+222".to_owned(),
            "+333".to_owned(),
        ];
        prune_recipients(&mut recipients, &[0, 1, 0]);
        assert_eq!(recipients, vec!["+111".to_owned(), "+333".to_owned()]);
    }

    #[test]
    fn test_prune_keeps_all_on_zero_codes() {
        let mut recipients = vec!["+111".to_owned(), "+222".to_owned()];
        prune_recipients(&mut recipients, &[0, 0]);
        assert_eq!(recipients.len(), 2);
    }
}
