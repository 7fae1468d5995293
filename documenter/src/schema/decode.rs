use crate::errors::{Error, ErrorKind};

use super::primitive_schema::PrimitiveDocument;

/// Decodings attempted against the schema document, in priority order.
const DECODINGS: [Decoding; 3] = [Decoding::Utf8, Decoding::Utf16Le, Decoding::Latin1];

#[derive(Clone, Copy, Debug)]
enum Decoding {
    /// UTF-8, with or without a byte order mark.
    Utf8,
    Utf16Le,
    /// ISO-8859-1. Decoding itself never fails, so this attempt can only be
    /// rejected by the JSON parse.
    Latin1,
}

impl Decoding {
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Decoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
                std::str::from_utf8(bytes).ok().map(str::to_owned)
            }
            Decoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return None;
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                let text = String::from_utf16(&units).ok()?;
                Some(strip_bom(text))
            }
            Decoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_owned(),
        None => text,
    }
}

/// Runs the decode-then-parse attempts in order and keeps the first one
/// that produces valid JSON. Individual attempts fail silently; only all
/// of them failing is reported, as a single error value.
pub(crate) fn parse_schema_document(bytes: &[u8]) -> Result<PrimitiveDocument, Error> {
    for decoding in DECODINGS {
        if let Some(text) = decoding.decode(bytes) {
            if let Ok(document) = serde_json::from_str::<PrimitiveDocument>(&text) {
                return Ok(document);
            }
        }
    }
    Err(Error::new(ErrorKind::SchemaUndecodable))
}
