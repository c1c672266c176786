//! Client SDK for the IPX SOAP SMS gateway.
//!
//! The crate covers the outbound pipeline (GSM 7-bit validation,
//! concatenated-message splitting with UDH construction, per-part dispatch
//! with partial-success reconciliation) and decoding of the gateway's
//! inbound delivery-report and mobile-originated callbacks. The SOAP stack
//! itself is a collaborator supplied by the caller behind the
//! [`SoapTransport`] trait.
//!
//! # Examples
//!
//! ## Sending a message
//!
//! ```rust,no_run
//! use ipx_sms::{ClientBuilder, SendOptions, SmsTransmitter};
//! # use ipx_sms::{SoapTransport, SubmitRequest, SubmitResponse, TransportFault};
//! # struct WsdlTransport;
//! # impl SoapTransport for WsdlTransport {
//! #     async fn call(
//! #         &mut self,
//! #         _request: &SubmitRequest,
//! #     ) -> Result<SubmitResponse, TransportFault> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut client = ClientBuilder::quick_client(WsdlTransport, "account", "secret");
//!
//!     let recipients = vec!["+358401234567".to_owned(), "+46701112233".to_owned()];
//!     let options = SendOptions::new().with_delivery_report();
//!     let report = client.send_sms("Hello!", &recipients, "Acme", &options).await;
//!
//!     for result in &report.results {
//!         println!("{result:?}");
//!     }
//!     // Recipients the gateway rejected on a partial success were pruned.
//!     println!("live recipients: {:?}", report.recipients);
//! }
//! ```
//!
//! ## Decoding a delivery report callback
//!
//! ```rust
//! use std::collections::HashMap;
//! use ipx_sms::{acknowledgement, CallbackDecoder, CallbackMethod, CallbackRequest};
//!
//! let params: HashMap<String, String> = [
//!     ("MessageId".to_owned(), "abc-123".to_owned()),
//!     ("StatusCode".to_owned(), "2".to_owned()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let decoder = CallbackDecoder::new(CallbackMethod::Post);
//! let body = match decoder.delivery_report(&CallbackRequest::from_post(params)) {
//!     Some(report) => {
//!         println!("{}: {}", report.message_id, report.status_description());
//!         acknowledgement(true)
//!     }
//!     // Not a gateway callback; refuse the acknowledgement.
//!     None => acknowledgement(false),
//! };
//! assert_eq!(body, "<DeliveryResponse ack=\"true\"/>");
//! ```

pub mod callback;
pub mod client;
pub mod datatypes;
pub mod encoding;
pub mod segment;


// Re-export the callback decoding surface
pub use callback::{
    acknowledgement, CallbackDecoder, CallbackMethod, CallbackRequest, DeliveryReport, InboundSms,
};

// Re-export the main client API for easy access
pub use client::{
    ClientBuilder, Credentials, IpxClient, IpxError, IpxResult, MessageReceipt, SendOptions,
    SendReport, SendResult, SmsTransmitter, SoapTransport, TransportConfig,
};

// Re-export wire records and code tables for direct access
pub use datatypes::{
    DataCoding, DeliveryReason, DeliveryStatus, OriginatorTon, ReasonCode, ResponseCode,
    SubmitRequest, SubmitResponse, TransportFault, UserDataHeader,
};

pub use segment::{split_message, MessagePart, MAX_MESSAGE_PARTS};
