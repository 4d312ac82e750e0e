use crate::error::CodecError;
use crate::utils::{read_name, read_u16};
use domain_name_query_types::{QClass, QType};
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub name: String,
    pub query_type: u16,
    pub query_class: u16,
    /// Offset of the first byte after this question.
    pub position: usize,
}

impl Question {
    pub fn parse(buf: &[u8], position: usize) -> Result<Self, CodecError> {
        let (name, position) = read_name(buf, position)?;
        let (query_type, position) = read_u16(buf, position)?;
        let (query_class, position) = read_u16(buf, position)?;

        let q = Self {
            name,
            query_type,
            query_class,
            position,
        };

        Ok(q)
    }
}

pub(crate) fn type_name(code: u16) -> String {
    match QType::from_code(code) {
        Some(t) => t.to_string(),
        None => format!("TYPE{}", code),
    }
}

pub(crate) fn class_name(code: u16) -> String {
    if code == QClass::In.code() {
        QClass::In.to_string()
    } else {
        format!("CLASS{}", code)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.name,
            class_name(self.query_class),
            type_name(self.query_type)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::HEADER_LEN;
    use crate::testing::from_hex;

    // header + dns.google.com A IN
    const QUERY_HEX: &str = "00160100000100000000000003646e7306676f6f676c6503636f6d0000010001";

    #[test]
    fn parse_after_header() {
        let buf = from_hex(QUERY_HEX);
        let q = Question::parse(&buf, HEADER_LEN).unwrap();

        assert_eq!(q.name, "dns.google.com");
        assert_eq!(q.query_type, 1);
        assert_eq!(q.query_class, 1);
        assert_eq!(q.position, buf.len());
    }

    #[test]
    fn position_is_four_past_terminator() {
        let mut buf = from_hex(QUERY_HEX);
        buf.extend([0xc0, 0x0c]);
        let q = Question::parse(&buf, HEADER_LEN).unwrap();

        let terminator = HEADER_LEN + 15;
        assert_eq!(buf[terminator], 0);
        assert_eq!(q.position, terminator + 1 + 4);
    }

    #[test]
    fn root_name_is_empty() {
        let buf = [0, 0, 2, 0, 1];
        let q = Question::parse(&buf, 0).unwrap();

        assert_eq!(q.name, "");
        assert_eq!(q.query_type, 2);
        assert_eq!(q.position, 5);
    }

    #[test]
    fn missing_class_is_truncated() {
        let buf = from_hex(QUERY_HEX);
        let short = &buf[..buf.len() - 1];

        assert!(matches!(
            Question::parse(short, HEADER_LEN),
            Err(CodecError::Truncated { .. })
        ));
    }

    #[test]
    fn unterminated_name_is_truncated() {
        let buf = from_hex("000000000000000000000000076578616d706c65");
        assert!(matches!(
            Question::parse(&buf, HEADER_LEN),
            Err(CodecError::Truncated { .. })
        ));
    }

    #[test]
    fn compressed_name_is_rejected() {
        let buf = [0xc0, 0x0c, 0, 1, 0, 1];
        assert_eq!(
            Question::parse(&buf, 0),
            Err(CodecError::CompressionNotSupported { offset: 0 })
        );
    }

    #[test]
    fn display() {
        let buf = from_hex(QUERY_HEX);
        let q = Question::parse(&buf, HEADER_LEN).unwrap();
        assert_eq!(q.to_string(), "dns.google.com\tIN\tA");
    }
}
