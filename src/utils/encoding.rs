//! Source decoding with a UTF-8 fallback.

use crate::domain::{GeneratorError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Resolve an `encoding_rs` label such as `utf-8`, `latin1` or `shift_jis`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| GeneratorError::UnknownEncoding(label.to_string()))
}

/// Read a source file as text.
///
/// The bytes are decoded strictly with `default_encoding` first and with
/// UTF-8 second; if neither accepts them the file is a `Decode` error.
/// Newlines are normalized the way a text-mode read would see them.
pub fn read_source(path: &Path, default_encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| GeneratorError::io(path, e))?;
    let text = decode_strict(&bytes, default_encoding)
        .or_else(|| {
            debug!(
                path = %path.display(),
                encoding = default_encoding.name(),
                "default decoding failed, retrying as utf-8"
            );
            decode_strict(&bytes, UTF_8)
        })
        .ok_or_else(|| GeneratorError::Decode {
            path: path.to_path_buf(),
            encoding: default_encoding.name().to_string(),
        })?;
    Ok(normalize_newlines(&text).into_owned())
}

fn decode_strict<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Option<Cow<'a, str>> {
    let bytes =
        if encoding == UTF_8 { bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes) } else { bytes };
    encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Turn `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_utf8_and_normalizes_newlines() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("a.py");
        fs::write(&path, "\u{feff}x = 'é'\r\ny = 2\r").expect("write");

        let text = read_source(&path, UTF_8).expect("read");
        assert_eq!(text, "x = 'é'\ny = 2\n");
    }

    #[test]
    fn falls_back_to_utf8_when_default_fails() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("odd.py");
        // Three bytes cannot be UTF-16LE.
        fs::write(&path, "abc").expect("write");

        let utf16 = resolve_encoding("utf-16le").expect("label");
        assert_eq!(read_source(&path, utf16).expect("read"), "abc");
    }

    #[test]
    fn default_encoding_wins_when_it_decodes() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("latin.py");
        fs::write(&path, b"s = '\xe9'\n").expect("write");

        let latin1 = resolve_encoding("latin1").expect("label");
        assert_eq!(read_source(&path, latin1).expect("read"), "s = 'é'\n");
    }

    #[test]
    fn undecodable_bytes_are_a_decode_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.py");
        fs::write(&path, b"s = '\xff\xfe\xfd'\n").expect("write");

        let err = read_source(&path, UTF_8).expect_err("must fail");
        assert!(matches!(err, GeneratorError::Decode { .. }));
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(matches!(
            resolve_encoding("klingon"),
            Err(GeneratorError::UnknownEncoding(label)) if label == "klingon"
        ));
    }
}
