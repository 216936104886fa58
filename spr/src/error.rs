#[derive(Debug, thiserror::Error)]
pub enum SprError {
    #[error(
        "Truncated header: field `{field}` at byte {cursor} needs {needed} bytes but the buffer is {available} bytes long"
    )]
    TruncatedHeader {
        field: &'static str,
        cursor: usize,
        needed: usize,
        available: usize,
    },
    #[error(
        "Frame {index} is out of bounds: pixels [{offset}, {offset} + {length}) exceed buffer of {buffer_len} bytes"
    )]
    OutOfBoundsFrame {
        index: usize,
        offset: usize,
        length: usize,
        buffer_len: usize,
    },
    #[error("Field `{field}` has unsupported width {width}. Expect 1 to 4 bytes")]
    InvalidFieldWidth { field: &'static str, width: usize },
    #[error("Missing field `{field}` in parsed header")]
    MissingField { field: &'static str },
    #[error("Strip of {width} pixels is too wide for an image")]
    StripTooLarge { width: u64 },
    #[error("Palette needs 768 bytes. Have ({length})")]
    PaletteTooShort { length: usize },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
