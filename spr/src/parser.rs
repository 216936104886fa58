use std::{ffi::OsStr, fs::OpenOptions, io::Read, path::Path};

use crate::{
    error::SprError,
    schema::{
        read_fields, ParsedFields, FILE_HEADER_FORMAT, FRAME_HEADER_FORMAT, HEIGHT, NUM_SPRITES,
        OFFSET, WIDTH,
    },
    OutOfBoundsPolicy, Spr, SprFrame, SprFrameHeader, SprFrames, SprHeader,
};

impl Spr {
    pub fn open_from_bytes(bytes: &[u8]) -> Result<Spr, SprError> {
        Self::open_from_bytes_with(bytes, OutOfBoundsPolicy::default())
    }

    pub fn open_from_bytes_with(bytes: &[u8], policy: OutOfBoundsPolicy) -> Result<Spr, SprError> {
        parse_spr(bytes, policy)
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Spr, SprError> {
        Self::open_from_file_with(path, OutOfBoundsPolicy::default())
    }

    pub fn open_from_file_with(
        path: impl AsRef<OsStr> + AsRef<Path>,
        policy: OutOfBoundsPolicy,
    ) -> Result<Spr, SprError> {
        let mut file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|op| SprError::IOError { source: op })?;
        let mut bytes = vec![];

        file.read_to_end(&mut bytes)
            .map_err(|op| SprError::IOError { source: op })?;

        Self::open_from_bytes_with(&bytes, policy)
    }
}

/// Decodes every frame of a sprite file. Any out of bounds frame fails the decode.
pub fn decode_sprite(buffer: &[u8]) -> Result<SprFrames, SprError> {
    decode_sprite_with(buffer, OutOfBoundsPolicy::Abort)
}

pub fn decode_sprite_with(
    buffer: &[u8],
    policy: OutOfBoundsPolicy,
) -> Result<SprFrames, SprError> {
    parse_spr(buffer, policy).map(|spr| spr.frames)
}

impl TryFrom<&ParsedFields> for SprHeader {
    type Error = SprError;

    fn try_from(fields: &ParsedFields) -> Result<Self, Self::Error> {
        Ok(SprHeader {
            num_sprites: fields.require(NUM_SPRITES)?,
        })
    }
}

impl TryFrom<&ParsedFields> for SprFrameHeader {
    type Error = SprError;

    fn try_from(fields: &ParsedFields) -> Result<Self, Self::Error> {
        Ok(SprFrameHeader {
            offset: fields.require(OFFSET)?,
            width: fields.require(WIDTH)?,
            height: fields.require(HEIGHT)?,
        })
    }
}

/// Returns the header and the cursor right after it.
pub fn parse_header(i: &[u8]) -> Result<(SprHeader, usize), SprError> {
    let fields = read_fields(FILE_HEADER_FORMAT, i, 0)?;

    Ok((SprHeader::try_from(&fields)?, fields.end_cursor()))
}

/// Frame headers are packed back to back starting at `cursor`.
pub fn parse_frame_headers(
    i: &[u8],
    cursor: usize,
    frame_count: usize,
) -> Result<Vec<SprFrameHeader>, SprError> {
    let mut cursor = cursor;
    let mut headers = Vec::with_capacity(frame_count);

    for frame_index in 0..frame_count {
        let fields = read_fields(FRAME_HEADER_FORMAT, i, cursor)?;
        let header = SprFrameHeader::try_from(&fields)?;

        log::debug!(
            "frame {frame_index}: offset {} size {}x{}",
            header.offset,
            header.width,
            header.height
        );

        headers.push(header);
        cursor = fields.end_cursor();
    }

    Ok(headers)
}

/// Copies `width * height` bytes at the absolute `offset`.
pub fn parse_frame_image(
    i: &[u8],
    header: &SprFrameHeader,
    frame_index: usize,
) -> Result<SprFrame, SprError> {
    let offset = header.offset as usize;
    let length = (header.width as usize).checked_mul(header.height as usize);

    let out_of_bounds = || SprError::OutOfBoundsFrame {
        index: frame_index,
        offset,
        length: length.unwrap_or(usize::MAX),
        buffer_len: i.len(),
    };

    let length = length.ok_or_else(out_of_bounds)?;

    // nothing to read so the offset does not matter
    if length == 0 {
        return Ok(SprFrame {
            width: header.width,
            height: header.height,
            pixels: vec![],
        });
    }

    let end = offset.checked_add(length).ok_or_else(out_of_bounds)?;
    let pixels = i.get(offset..end).ok_or_else(out_of_bounds)?;

    Ok(SprFrame {
        width: header.width,
        height: header.height,
        pixels: pixels.to_vec(),
    })
}

pub fn parse_frames(
    i: &[u8],
    headers: &[SprFrameHeader],
    policy: OutOfBoundsPolicy,
) -> Result<SprFrames, SprError> {
    headers
        .iter()
        .enumerate()
        .map(
            |(frame_index, header)| match parse_frame_image(i, header, frame_index) {
                Ok(frame) => Ok(frame),
                Err(err @ SprError::OutOfBoundsFrame { .. })
                    if policy == OutOfBoundsPolicy::EmptyFrame =>
                {
                    log::warn!("{err}. Replacing with an empty frame");

                    Ok(SprFrame {
                        width: 0,
                        height: 0,
                        pixels: vec![],
                    })
                }
                Err(err) => Err(err),
            },
        )
        .collect()
}

pub fn parse_spr(i: &[u8], policy: OutOfBoundsPolicy) -> Result<Spr, SprError> {
    let (header, cursor) = parse_header(i)?;
    let frame_headers = parse_frame_headers(i, cursor, header.num_sprites as usize)?;
    let frames = parse_frames(i, &frame_headers, policy)?;

    Ok(Spr { header, frames })
}
