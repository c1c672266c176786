mod codes;
mod data_coding;
mod originator;
mod request;
mod udh;

pub use codes::{
    DeliveryReason, DeliveryStatus, ReasonCode, ResponseCode, UNKNOWN_DELIVERY_REASON,
    UNKNOWN_DELIVERY_STATUS, UNKNOWN_REASON_CODE, UNKNOWN_RESPONSE_CODE,
};
pub use data_coding::DataCoding;
pub use originator::OriginatorTon;
pub use request::{SubmitRequest, SubmitResponse, TransportFault};
pub use udh::UserDataHeader;
