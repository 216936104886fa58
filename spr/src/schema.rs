//! Byte-layout schemas and the cursor-based field reader.
//!
//! Every field is an unsigned little-endian integer of 1 to 4 bytes.
use nom::{bytes::complete::take, combinator::map, IResult as _IResult, Parser};

use crate::error::SprError;

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

pub const MAX_FIELD_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Byte count
    pub width: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, width: usize) -> Self {
        Self { name, width }
    }
}

pub const NUM_SPRITES: &str = "num_sprites";
pub const OFFSET: &str = "offset";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";

pub const FILE_HEADER_FORMAT: &[FieldSpec] = &[FieldSpec::new(NUM_SPRITES, 2)];

pub const FRAME_HEADER_FORMAT: &[FieldSpec] = &[
    FieldSpec::new(OFFSET, 4),
    FieldSpec::new(WIDTH, 2),
    FieldSpec::new(HEIGHT, 2),
];

/// Total byte size of a schema.
pub fn schema_size(schema: &[FieldSpec]) -> usize {
    schema.iter().map(|spec| spec.width).sum()
}

/// Values read from a schema, in schema order, and the cursor right after the last field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    values: Vec<(&'static str, u32)>,
    end_cursor: usize,
}

impl ParsedFields {
    pub fn get(&self, name: &str) -> Option<u32> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    /// Same as [`ParsedFields::get`] but a missing name is an error.
    pub fn require(&self, name: &'static str) -> Result<u32, SprError> {
        self.get(name).ok_or(SprError::MissingField { field: name })
    }

    pub fn end_cursor(&self) -> usize {
        self.end_cursor
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// First byte is the least significant.
///
/// Only the first 4 bytes count.
pub fn combine_bytes(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(MAX_FIELD_WIDTH)
        .enumerate()
        .fold(0u32, |acc, (i, byte)| acc | ((*byte as u32) << (8 * i)))
}

fn parse_field(i: &[u8], width: usize) -> IResult<'_, u32> {
    map(take(width), |bytes: &[u8]| combine_bytes(bytes)).parse(i)
}

/// Reads `schema` from `buffer` starting at `start_cursor`.
///
/// Chain reads by passing the previous [`ParsedFields::end_cursor`] as the next `start_cursor`.
pub fn read_fields(
    schema: &[FieldSpec],
    buffer: &[u8],
    start_cursor: usize,
) -> Result<ParsedFields, SprError> {
    let mut cursor = start_cursor;
    let mut values = Vec::with_capacity(schema.len());

    for spec in schema {
        if !(1..=MAX_FIELD_WIDTH).contains(&spec.width) {
            return Err(SprError::InvalidFieldWidth {
                field: spec.name,
                width: spec.width,
            });
        }

        let truncated = || SprError::TruncatedHeader {
            field: spec.name,
            cursor,
            needed: spec.width,
            available: buffer.len(),
        };

        let rest = buffer.get(cursor..).ok_or_else(truncated)?;
        let (_, value) = parse_field(rest, spec.width).map_err(|_| truncated())?;

        values.push((spec.name, value));
        cursor += spec.width;
    }

    Ok(ParsedFields {
        values,
        end_cursor: cursor,
    })
}
