//! Little-endian byte builder.
//!
//! Lays out sprite buffers field by field and patches offsets once the pixel data position is known.

pub struct ByteWriter {
    pub data: Vec<u8>,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Current write position, which is also the absolute offset of the next byte.
    pub fn get_offset(&self) -> usize {
        self.data.len()
    }

    /// Appends the lowest `width` bytes of `value`, least significant first.
    ///
    /// Widths above 8 are zero-filled.
    pub fn append_field(&mut self, value: u64, width: usize) {
        let bytes = value.to_le_bytes();

        for k in 0..width {
            self.data.push(bytes.get(k).copied().unwrap_or(0));
        }
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
    }

    pub fn append_u16(&mut self, i: u16) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
    }

    /// Pads with `value` until the writer reaches `offset`. Does nothing if already past it.
    pub fn pad_to(&mut self, offset: usize, value: u8) {
        if offset > self.data.len() {
            self.data.resize(offset, value);
        }
    }

    pub fn replace(&mut self, start: usize, length: usize, slice: &[u8]) {
        self.data[start..(length + start)].copy_from_slice(&slice[..length]);
    }

    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        let bytes = val.to_le_bytes();
        self.replace(start, 4, &bytes);
    }
}

#[cfg(test)]
mod test {
    use super::ByteWriter;

    #[test]
    fn field_is_little_endian() {
        let mut writer = ByteWriter::new();
        writer.append_field(0x1234, 2);
        writer.append_field(0x56, 3);

        assert_eq!(writer.data, vec![0x34, 0x12, 0x56, 0x00, 0x00]);
        assert_eq!(writer.get_offset(), 5);
    }

    #[test]
    fn patch_offset_after_layout() {
        let mut writer = ByteWriter::new();
        let slot = writer.get_offset();
        writer.append_u32(0);
        writer.pad_to(8, 0xff);
        writer.append_u8(7);

        writer.replace_with_u32(slot, 8);

        assert_eq!(writer.data, vec![8, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 7]);
    }
}
