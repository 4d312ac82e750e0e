use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Truncated input: {needed} bytes needed at offset {offset}, buffer has {len}")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Compressed name pointer at offset {offset} is not supported")]
    CompressionNotSupported { offset: usize },
}
