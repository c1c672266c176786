use num_enum::TryFromPrimitive;

/// Sentinel returned for response codes absent from the table.
pub const UNKNOWN_RESPONSE_CODE: &str =
    "WARNING: unknown response code, consult the IPX API manual.";
/// Sentinel returned for reason codes absent from the table.
pub const UNKNOWN_REASON_CODE: &str =
    "WARNING: unknown reason code, consult the IPX API manual.";
/// Sentinel returned for delivery status codes absent from the table.
pub const UNKNOWN_DELIVERY_STATUS: &str =
    "WARNING: unknown delivery status code, consult the IPX API manual.";
/// Sentinel returned for delivery reason codes absent from the table.
pub const UNKNOWN_DELIVERY_REASON: &str =
    "WARNING: unknown delivery reason code, consult the IPX API manual.";

/// The responseCode field of a send response. Code 0 is full success and
/// code 50 is partial success; everything else is a hard failure for the
/// whole request. Codes outside this table must degrade to
/// [`UNKNOWN_RESPONSE_CODE`], never to a lookup failure.
#[derive(TryFromPrimitive)]
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResponseCode {
    /// Successfully executed
    Ok = 0,

    /// Temporary system error
    SystemError = 1,

    /// Invalid username or password
    InvalidAuthentication = 2,

    /// Account barred from the service
    AccountBarred = 3,

    /// Invalid originating address
    InvalidOriginator = 4,

    /// Invalid destination address
    InvalidDestination = 5,

    /// Invalid user data or user data header
    InvalidUserData = 6,

    /// Invalid data coding scheme
    InvalidDataCoding = 7,

    /// Invalid relative validity time
    InvalidValidityTime = 8,

    /// Invalid or unauthorized tariff class
    InvalidTariffClass = 9,

    /// Destination address barred
    DestinationBarred = 10,

    /// Destination operator not provisioned for the account
    OperatorNotProvisioned = 11,

    /// Allowed message throughput exceeded
    ThroughputExceeded = 20,

    /// Account message quota exceeded
    QuotaExceeded = 21,

    /// Some recipients rejected, outcomes embedded in the response message
    PartialSuccess = 50,

    /// Gateway temporarily unavailable
    GatewayUnavailable = 99,
}

impl ResponseCode {
    pub fn description(&self) -> &'static str {
        match self {
            ResponseCode::Ok => "Successfully executed.",
            ResponseCode::SystemError => "Temporary system error, try again later.",
            ResponseCode::InvalidAuthentication => "Invalid username or password.",
            ResponseCode::AccountBarred => "The account is barred from this service.",
            ResponseCode::InvalidOriginator => {
                "Invalid originating address or alphanumeric originator."
            }
            ResponseCode::InvalidDestination => "Invalid destination address.",
            ResponseCode::InvalidUserData => "Invalid user data or user data header.",
            ResponseCode::InvalidDataCoding => "Invalid data coding scheme.",
            ResponseCode::InvalidValidityTime => "Invalid relative validity time.",
            ResponseCode::InvalidTariffClass => "Invalid or unauthorized tariff class.",
            ResponseCode::DestinationBarred => "Destination address is barred.",
            ResponseCode::OperatorNotProvisioned => {
                "Destination operator is not provisioned for the account."
            }
            ResponseCode::ThroughputExceeded => "Allowed message throughput exceeded.",
            ResponseCode::QuotaExceeded => "Account message quota exceeded.",
            ResponseCode::PartialSuccess => {
                "Partial success, some recipients were rejected."
            }
            ResponseCode::GatewayUnavailable => "Gateway temporarily unavailable.",
        }
    }

    /// Total lookup: any integer maps to a description, unknown codes to
    /// the sentinel.
    pub fn describe(code: i32) -> &'static str {
        match ResponseCode::try_from(code) {
            Ok(code) => code.description(),
            Err(_) => UNKNOWN_RESPONSE_CODE,
        }
    }

    /// Lookup from a raw string field; non-numeric input degrades to "".
    pub fn describe_raw(raw: &str) -> &'static str {
        match raw.trim().parse::<i32>() {
            Ok(code) => Self::describe(code),
            Err(_) => "",
        }
    }
}

/// The reasonCode field accompanying a failed or partially billed send,
/// reporting the operator-side cause.
#[derive(TryFromPrimitive)]
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReasonCode {
    /// No additional reason
    None = 0,

    /// Subscriber has insufficient prepaid balance
    InsufficientFunds = 1,

    /// Subscriber barred from premium services
    SubscriberBarred = 2,

    /// Subscriber failed the age verification check
    AgeLimit = 3,

    /// Subscriber unknown to the operator
    SubscriberUnknown = 4,

    /// Operator billing system rejected the charge
    BillingRejected = 5,

    /// Operator billing system timed out
    BillingTimeout = 6,
}

impl ReasonCode {
    pub fn description(&self) -> &'static str {
        match self {
            ReasonCode::None => "No additional reason.",
            ReasonCode::InsufficientFunds => "Subscriber has insufficient prepaid balance.",
            ReasonCode::SubscriberBarred => "Subscriber is barred from premium services.",
            ReasonCode::AgeLimit => "Subscriber failed the age verification check.",
            ReasonCode::SubscriberUnknown => "Subscriber is unknown to the operator.",
            ReasonCode::BillingRejected => "Operator billing system rejected the charge.",
            ReasonCode::BillingTimeout => "Operator billing system timed out.",
        }
    }

    pub fn describe(code: i32) -> &'static str {
        match ReasonCode::try_from(code) {
            Ok(code) => code.description(),
            Err(_) => UNKNOWN_REASON_CODE,
        }
    }

    pub fn describe_raw(raw: &str) -> &'static str {
        match raw.trim().parse::<i32>() {
            Ok(code) => Self::describe(code),
            Err(_) => "",
        }
    }
}

/// The StatusCode field of an inbound delivery report.
#[derive(TryFromPrimitive)]
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// Message is en route to the destination
    EnRoute = 1,

    /// Message delivered to the destination handset
    Delivered = 2,

    /// Validity period expired before delivery
    Expired = 3,

    /// Message deleted by the service center
    Deleted = 4,

    /// Message permanently undeliverable
    Undeliverable = 5,

    /// Message accepted by the destination operator
    Accepted = 6,

    /// Message is in an unknown state
    Unknown = 7,

    /// Message rejected by the destination operator
    Rejected = 8,
}

impl DeliveryStatus {
    pub fn description(&self) -> &'static str {
        match self {
            DeliveryStatus::EnRoute => "Message is en route to the destination.",
            DeliveryStatus::Delivered => "Message was delivered to the destination handset.",
            DeliveryStatus::Expired => "Message validity period expired before delivery.",
            DeliveryStatus::Deleted => "Message was deleted by the service center.",
            DeliveryStatus::Undeliverable => "Message is permanently undeliverable.",
            DeliveryStatus::Accepted => "Message was accepted by the destination operator.",
            DeliveryStatus::Unknown => "Message is in an unknown state.",
            DeliveryStatus::Rejected => "Message was rejected by the destination operator.",
        }
    }

    pub fn describe(code: i32) -> &'static str {
        match DeliveryStatus::try_from(code) {
            Ok(code) => code.description(),
            Err(_) => UNKNOWN_DELIVERY_STATUS,
        }
    }

    pub fn describe_raw(raw: &str) -> &'static str {
        match raw.trim().parse::<i32>() {
            Ok(code) => Self::describe(code),
            Err(_) => "",
        }
    }
}

/// The ReasonCode field of an inbound delivery report, set when the status
/// is a failure state.
#[derive(TryFromPrimitive)]
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeliveryReason {
    /// No failure reason reported
    None = 0,

    /// Absent subscriber, handset off or out of coverage
    AbsentSubscriber = 1,

    /// Handset memory exceeded
    HandsetMemoryFull = 2,

    /// Mobile equipment failure
    EquipmentFailure = 3,

    /// Subscriber barred from receiving messages
    SubscriberBarred = 4,

    /// Temporary network failure
    NetworkFailure = 5,

    /// Unknown subscriber
    UnknownSubscriber = 6,
}

impl DeliveryReason {
    pub fn description(&self) -> &'static str {
        match self {
            DeliveryReason::None => "No failure reason reported.",
            DeliveryReason::AbsentSubscriber => {
                "Absent subscriber, handset switched off or out of coverage."
            }
            DeliveryReason::HandsetMemoryFull => "Handset memory exceeded.",
            DeliveryReason::EquipmentFailure => "Mobile equipment failure.",
            DeliveryReason::SubscriberBarred => {
                "Subscriber is barred from receiving messages."
            }
            DeliveryReason::NetworkFailure => "Temporary network failure.",
            DeliveryReason::UnknownSubscriber => "Unknown subscriber.",
        }
    }

    pub fn describe(code: i32) -> &'static str {
        match DeliveryReason::try_from(code) {
            Ok(code) => code.description(),
            Err(_) => UNKNOWN_DELIVERY_REASON,
        }
    }

    pub fn describe_raw(raw: &str) -> &'static str {
        match raw.trim().parse::<i32>() {
            Ok(code) => Self::describe(code),
            Err(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_code_zero() {
        assert_eq!(ResponseCode::describe(0), "Successfully executed.");
    }

    #[test]
    fn test_response_code_unknown_sentinel() {
        assert_eq!(ResponseCode::describe(9999), UNKNOWN_RESPONSE_CODE);
        assert_eq!(ResponseCode::describe(-1), UNKNOWN_RESPONSE_CODE);
    }

    #[test]
    fn test_partial_success_code_value() {
        assert_eq!(ResponseCode::PartialSuccess as i32, 50);
    }

    #[test]
    fn test_non_numeric_degrades_to_empty() {
        assert_eq!(ResponseCode::describe_raw("bogus"), "");
        assert_eq!(ReasonCode::describe_raw(""), "");
        assert_eq!(DeliveryStatus::describe_raw("2.5"), "");
        assert_eq!(DeliveryReason::describe_raw("x"), "");
    }

    #[test]
    fn test_raw_lookup_trims_whitespace() {
        assert_eq!(ResponseCode::describe_raw(" 0 "), "Successfully executed.");
    }

    #[test]
    fn test_delivery_status_descriptions() {
        assert_eq!(
            DeliveryStatus::describe(2),
            "Message was delivered to the destination handset."
        );
        assert_eq!(DeliveryStatus::describe(42), UNKNOWN_DELIVERY_STATUS);
    }

    #[test]
    fn test_delivery_reason_descriptions() {
        assert_eq!(DeliveryReason::describe(0), "No failure reason reported.");
        assert_eq!(DeliveryReason::describe(77), UNKNOWN_DELIVERY_REASON);
    }

    #[test]
    fn test_reason_code_descriptions() {
        assert_eq!(
            ReasonCode::describe(1),
            "Subscriber has insufficient prepaid balance."
        );
        assert_eq!(ReasonCode::describe(1234), UNKNOWN_REASON_CODE);
    }
}
