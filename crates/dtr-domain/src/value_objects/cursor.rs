//! Cursor wire format
//!
//! On the wire a cursor is the URL-safe base64 form of the UTF-8 bytes of the
//! last returned identifier. Encoding drops padding; decoding accepts padded
//! and unpadded input. The same transform is used for identifiers embedded
//! in peer registry paths.

use crate::error::{Error, Result};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

const WIRE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reversible transform between decoded cursors and their wire form
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorCodec;

impl CursorCodec {
    /// Encode a decoded cursor (an identifier) for the wire
    pub fn encode(cursor: &str) -> String {
        WIRE_ENGINE.encode(cursor.as_bytes())
    }

    /// Decode a wire cursor back into the identifier it carries
    pub fn decode(wire: &str) -> Result<String> {
        let bytes = WIRE_ENGINE
            .decode(wire.as_bytes())
            .map_err(|_| Error::invalid_cursor(wire))?;
        String::from_utf8(bytes).map_err(|_| Error::invalid_cursor(wire))
    }
}

/// Encode an identifier for use as a path segment of the registry REST layout
pub fn encode_identifier(id: &str) -> String {
    CursorCodec::encode(id)
}
