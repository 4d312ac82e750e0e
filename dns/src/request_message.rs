use crate::header::{Flags, Header, HEADER_LEN};
use crate::utils::encode_labels;
use byteorder::{ByteOrder, BE};
use domain_name_query_types::{QClass, QType};

/// A query as it goes out: the header fields, one pre-encoded question name
/// and its type and class.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutgoingMessage {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
    /// Label encoded, see [`encode_labels`].
    pub question_name: Vec<u8>,
    pub query_type: u16,
    pub query_class: u16,
}

impl OutgoingMessage {
    /// A standard recursive query for `domain`.
    pub fn query(id: u16, domain: &str, q_type: QType) -> Self {
        Self {
            id,
            flags: Flags::RECURSION_DESIRED,
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
            question_name: encode_labels(domain),
            query_type: q_type.code(),
            query_class: QClass::In.code(),
        }
    }

    pub fn header(&self) -> Header {
        Header {
            id: self.id,
            flags: Flags::from_word(self.flags),
            question_count: self.question_count,
            answer_count: self.answer_count,
            authority_count: self.authority_count,
            additional_count: self.additional_count,
        }
    }

    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.question_name.len() + 4
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let name_end = HEADER_LEN + self.question_name.len();
        let mut bytes = vec![0u8; self.encoded_len()];

        bytes[..HEADER_LEN].copy_from_slice(&self.header().to_bytes());
        bytes[HEADER_LEN..name_end].copy_from_slice(&self.question_name);
        BE::write_u16(&mut bytes[name_end..name_end + 2], self.query_type);
        BE::write_u16(&mut bytes[name_end + 2..], self.query_class);

        bytes
    }
}
