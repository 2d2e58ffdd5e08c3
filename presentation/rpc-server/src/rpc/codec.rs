use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Separator between the decimal length and the JSON body.
const DELIMITER: u8 = b'#';
/// Longest accepted length prefix, in digits.
const MAX_LENGTH_DIGITS: usize = 20;
pub const DEFAULT_MAX_FRAME_LENGTH: usize = 8 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupted length value: {0:?}")]
    CorruptedLength(String),
    #[error("frame of {length} code units exceeds the {max} code unit limit")]
    FrameTooLarge { length: usize, max: usize },
    #[error("frame body is not valid UTF-8")]
    InvalidUtf8,
}

/// Length-prefixed JSON framing: every message is `<length>#<json>`.
///
/// This is the wire format spoken by NestJS TCP microservice clients. The
/// length counts UTF-16 code units of the body (a JavaScript string length),
/// not bytes, so non-ASCII text has a prefix shorter than its UTF-8 size.
#[derive(Debug, Clone)]
pub struct JsonSocketCodec {
    max_frame_length: usize,
    /// Frame being read, once its prefix is consumed.
    pending: Option<PendingFrame>,
}

/// Progress through a frame body, kept across partial reads.
#[derive(Debug, Clone, Copy)]
struct PendingFrame {
    units: usize,
    scanned_bytes: usize,
    scanned_units: usize,
}

impl JsonSocketCodec {
    pub fn new(max_frame_length: usize) -> Self {
        Self {
            max_frame_length,
            pending: None,
        }
    }

    fn read_length(&self, src: &mut BytesMut) -> Result<Option<usize>, CodecError> {
        let Some(position) = src.iter().position(|b| *b == DELIMITER) else {
            if src.len() > MAX_LENGTH_DIGITS {
                let prefix = String::from_utf8_lossy(&src[..MAX_LENGTH_DIGITS]).into_owned();
                return Err(CodecError::CorruptedLength(prefix));
            }
            return Ok(None);
        };

        let prefix = src.split_to(position);
        src.advance(1);

        let raw = std::str::from_utf8(&prefix)
            .map_err(|_| CodecError::CorruptedLength(String::from_utf8_lossy(&prefix).into_owned()))?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::CorruptedLength(raw.to_string()));
        }
        let length: usize = raw
            .parse()
            .map_err(|_| CodecError::CorruptedLength(raw.to_string()))?;

        if length > self.max_frame_length {
            return Err(CodecError::FrameTooLarge {
                length,
                max: self.max_frame_length,
            });
        }
        Ok(Some(length))
    }
}

/// UTF-8 width and UTF-16 width of the character starting with `lead`.
fn char_widths(lead: u8) -> Result<(usize, usize), CodecError> {
    match lead {
        0x00..=0x7F => Ok((1, 1)),
        0xC2..=0xDF => Ok((2, 1)),
        0xE0..=0xEF => Ok((3, 1)),
        0xF0..=0xF4 => Ok((4, 2)),
        _ => Err(CodecError::InvalidUtf8),
    }
}

impl Default for JsonSocketCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME_LENGTH)
    }
}

impl Decoder for JsonSocketCodec {
    type Item = Bytes;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let mut frame = match self.pending {
            Some(frame) => frame,
            None => match self.read_length(src)? {
                Some(units) => PendingFrame {
                    units,
                    scanned_bytes: 0,
                    scanned_units: 0,
                },
                None => return Ok(None),
            },
        };

        while frame.scanned_units < frame.units {
            let Some(&lead) = src.get(frame.scanned_bytes) else {
                self.pending = Some(frame);
                src.reserve(frame.units - frame.scanned_units);
                return Ok(None);
            };
            let (bytes, units) = char_widths(lead)?;
            if src.len() < frame.scanned_bytes + bytes {
                self.pending = Some(frame);
                return Ok(None);
            }
            frame.scanned_bytes += bytes;
            frame.scanned_units += units;
        }

        self.pending = None;
        // A prefix ending inside a surrogate pair cannot be honoured.
        if frame.scanned_units != frame.units {
            return Err(CodecError::CorruptedLength(frame.units.to_string()));
        }
        let body = src.split_to(frame.scanned_bytes).freeze();
        std::str::from_utf8(&body).map_err(|_| CodecError::InvalidUtf8)?;
        Ok(Some(body))
    }
}

impl Encoder<Bytes> for JsonSocketCodec {
    type Error = CodecError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let text = std::str::from_utf8(&item).map_err(|_| CodecError::InvalidUtf8)?;
        let units = text.encode_utf16().count();
        if units > self.max_frame_length {
            return Err(CodecError::FrameTooLarge {
                length: units,
                max: self.max_frame_length,
            });
        }

        let prefix = units.to_string();
        dst.reserve(prefix.len() + 1 + item.len());
        dst.put_slice(prefix.as_bytes());
        dst.put_u8(DELIMITER);
        dst.put_slice(&item);
        Ok(())
    }
}
