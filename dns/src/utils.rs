use crate::error::CodecError;
use byteorder::{ByteOrder, BE};

// A length byte with both high bits set is a compression pointer (RFC 1035 4.1.4).
const POINTER_MASK: u8 = 0b1100_0000;

// Borrow `needed` bytes starting at `offset`, or fail without reading.
pub fn take(buf: &[u8], offset: usize, needed: usize) -> Result<&[u8], CodecError> {
    let truncated = CodecError::Truncated {
        offset,
        needed,
        len: buf.len(),
    };

    match offset.checked_add(needed) {
        Some(end) if end <= buf.len() => Ok(&buf[offset..end]),
        _ => Err(truncated),
    }
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<(u8, usize), CodecError> {
    let bytes = take(buf, offset, 1)?;
    Ok((bytes[0], offset + 1))
}

pub fn read_u16(buf: &[u8], offset: usize) -> Result<(u16, usize), CodecError> {
    let bytes = take(buf, offset, 2)?;
    Ok((BE::read_u16(bytes), offset + 2))
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<(u32, usize), CodecError> {
    let bytes = take(buf, offset, 4)?;
    Ok((BE::read_u32(bytes), offset + 4))
}

/// Reads a sequence of length-prefixed labels starting at `position` and
/// joins them with dots. Returns the name and the offset just past the zero
/// terminator.
///
/// Compression pointers are rejected rather than followed.
pub fn read_name(buf: &[u8], mut position: usize) -> Result<(String, usize), CodecError> {
    let mut labels = Vec::new();

    loop {
        let (label_len, next) = read_u8(buf, position)?;
        if label_len & POINTER_MASK == POINTER_MASK {
            return Err(CodecError::CompressionNotSupported { offset: position });
        }
        position = next;

        if label_len == 0 {
            break;
        }

        let label_bytes = take(buf, position, label_len as usize)?;
        // one char per byte, so non-ASCII bytes keep their value (Latin-1)
        labels.push(label_bytes.iter().map(|&b| b as char).collect::<String>());
        position += label_len as usize;
    }

    Ok((labels.join("."), position))
}

/// Turns `dns.google.com` into `3dns6google3com0`.
///
/// Labels are not validated: a label longer than 255 bytes has its length
/// truncated to a byte, and an empty hostname yields `[0, 0]`.
pub fn encode_labels(domain: &str) -> Vec<u8> {
    let mut qname: Vec<u8> = Vec::with_capacity(domain.len() + 2);

    for label in domain.split('.') {
        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }

    qname.push(0);

    qname
}

/// Inverse of [`encode_labels`].
pub fn decode_labels(qname: &[u8]) -> Result<String, CodecError> {
    read_name(qname, 0).map(|(domain, _)| domain)
}
