use crate::error::CodecError;
use byteorder::{ByteOrder, BE};
use std::fmt;

pub const HEADER_LEN: usize = 12;

/// The 16-bit flags word, one field per RFC 1035 4.1.1 bit group.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flags {
    pub qr: u8,
    pub opcode: u8,
    pub aa: u8,
    pub tc: u8,
    pub rd: u8,
    pub ra: u8,
    pub z: u8,
    pub rcode: u8,
}

impl Flags {
    // rd = 1, the server resolves recursively and answers in one round trip
    pub const RECURSION_DESIRED: u16 = 0x0100;

    pub fn from_word(word: u16) -> Self {
        Self {
            qr: ((word >> 15) & 0x1) as u8,
            opcode: ((word >> 11) & 0xf) as u8,
            aa: ((word >> 10) & 0x1) as u8,
            tc: ((word >> 9) & 0x1) as u8,
            rd: ((word >> 8) & 0x1) as u8,
            ra: ((word >> 7) & 0x1) as u8,
            z: ((word >> 4) & 0x7) as u8,
            rcode: (word & 0xf) as u8,
        }
    }

    pub fn to_word(&self) -> u16 {
        (u16::from(self.qr & 0x1) << 15)
            | (u16::from(self.opcode & 0xf) << 11)
            | (u16::from(self.aa & 0x1) << 10)
            | (u16::from(self.tc & 0x1) << 9)
            | (u16::from(self.rd & 0x1) << 8)
            | (u16::from(self.ra & 0x1) << 7)
            | (u16::from(self.z & 0x7) << 4)
            | u16::from(self.rcode & 0xf)
    }
}

// 12 bytes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn parse(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() < HEADER_LEN {
            return Err(CodecError::Truncated {
                offset: 0,
                needed: HEADER_LEN,
                len: buf.len(),
            });
        }

        let h = Self {
            id: BE::read_u16(&buf[0..2]),
            flags: Flags::from_word(BE::read_u16(&buf[2..4])),
            question_count: BE::read_u16(&buf[4..6]),
            answer_count: BE::read_u16(&buf[6..8]),
            authority_count: BE::read_u16(&buf[8..10]),
            additional_count: BE::read_u16(&buf[10..12]),
        };

        Ok(h)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        BE::write_u16_into(
            &[
                self.id,
                self.flags.to_word(),
                self.question_count,
                self.answer_count,
                self.authority_count,
                self.additional_count,
            ],
            &mut bytes,
        );

        bytes
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fl = &self.flags;
        writeln!(f, "id: {}", self.id)?;
        writeln!(
            f,
            "flags: qr={} opcode={} aa={} tc={} rd={} ra={} z={} rcode={}",
            fl.qr, fl.opcode, fl.aa, fl.tc, fl.rd, fl.ra, fl.z, fl.rcode
        )?;
        write!(
            f,
            "questions: {}, answers: {}, authority: {}, additional: {}",
            self.question_count, self.answer_count, self.authority_count, self.additional_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::from_hex;

    fn response_flags(rcode: u8) -> Flags {
        Flags {
            qr: 1,
            rd: 1,
            ra: 1,
            rcode,
            ..Flags::default()
        }
    }

    fn header(id: u16, rcode: u8, counts: [u16; 4]) -> Header {
        Header {
            id,
            flags: response_flags(rcode),
            question_count: counts[0],
            answer_count: counts[1],
            authority_count: counts[2],
            additional_count: counts[3],
        }
    }

    #[test]
    fn parse_single_answer() {
        let h = Header::parse(&from_hex("123481800001000100000000")).unwrap();
        assert_eq!(h, header(4660, 0, [1, 1, 0, 0]));
    }

    #[test]
    fn parse_two_answers() {
        let h = Header::parse(&from_hex("ABCD81800001000200000000")).unwrap();
        assert_eq!(h, header(43981, 0, [1, 2, 0, 0]));
    }

    #[test]
    fn parse_server_failure_rcode() {
        let h = Header::parse(&from_hex("567881820001000000000000")).unwrap();
        assert_eq!(h, header(22136, 2, [1, 0, 0, 0]));
    }

    #[test]
    fn parse_authority_count() {
        let h = Header::parse(&from_hex("9F3481800001000000010000")).unwrap();
        assert_eq!(h, header(40756, 0, [1, 0, 1, 0]));
    }

    #[test]
    fn every_flag_bit_lands_in_its_field() {
        let f = Flags::from_word(0xffff);
        assert_eq!((f.qr, f.opcode, f.aa, f.tc), (1, 15, 1, 1));
        assert_eq!((f.rd, f.ra, f.z, f.rcode), (1, 1, 7, 15));

        let f = Flags::from_word(0b0_0101_0_1_0_1_010_0011);
        assert_eq!(f.qr, 0);
        assert_eq!(f.opcode, 5);
        assert_eq!(f.aa, 0);
        assert_eq!(f.tc, 1);
        assert_eq!(f.rd, 0);
        assert_eq!(f.ra, 1);
        assert_eq!(f.z, 2);
        assert_eq!(f.rcode, 3);
    }

    #[test]
    fn flags_word_round_trip() {
        for word in [0x0000, 0x0100, 0x8180, 0x8183, 0x8580, 0x7ff0, 0xffff].iter() {
            assert_eq!(Flags::from_word(*word).to_word(), *word);
        }
    }

    #[test]
    fn short_buffer_is_truncated() {
        for len in 0..HEADER_LEN {
            let buf = vec![0u8; len];
            assert_eq!(
                Header::parse(&buf),
                Err(CodecError::Truncated {
                    offset: 0,
                    needed: HEADER_LEN,
                    len
                })
            );
        }
    }

    #[test]
    fn to_bytes_matches_parse() {
        let bytes = from_hex("9F3481800001000000010000");
        let h = Header::parse(&bytes).unwrap();
        assert_eq!(h.to_bytes().to_vec(), bytes);
    }
}
