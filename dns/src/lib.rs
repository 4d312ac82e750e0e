//! DNS message codec, RFC 1035 section 4.1.
//!
//! Every parse function takes the whole response buffer and a start offset
//! and hands back a value that carries the offset just past what it read.
//! Name compression pointers are not followed.

mod error;
mod header;
mod question;
mod request_message;
mod resource_record;
mod response_message;
mod utils;

#[cfg(test)]
mod testing;

use domain_name_query_types::QType;

pub use error::CodecError;
pub use header::{Flags, Header, HEADER_LEN};
pub use question::Question;
pub use request_message::OutgoingMessage;
pub use resource_record::ResourceRecord;
pub use response_message::{ResponseMessage, Section};
pub use utils::{decode_labels, encode_labels};

pub fn encode_request(domain: &str, id: u16, q_type: QType) -> Vec<u8> {
    OutgoingMessage::query(id, domain, q_type).to_bytes()
}

pub fn parse_header(response_bytes: &[u8]) -> Result<Header, CodecError> {
    Header::parse(response_bytes)
}

pub fn parse_question(response_bytes: &[u8], position: usize) -> Result<Question, CodecError> {
    Question::parse(response_bytes, position)
}

pub fn parse_resource_record(
    response_bytes: &[u8],
    position: usize,
) -> Result<ResourceRecord, CodecError> {
    ResourceRecord::parse(response_bytes, position)
}

pub fn decode_response(response_bytes: &[u8]) -> Result<ResponseMessage, CodecError> {
    ResponseMessage::parse_response(response_bytes)
}
