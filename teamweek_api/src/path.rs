//! Resource path validation.
//!
//! `url::Url::join` accepts almost anything, including stray `%` signs, so a
//! path is checked here first and rejected before any request is built.

use crate::errors::PathError;

/// Rejects ASCII control characters anywhere, and malformed percent escapes
/// in the path and fragment. The query is sent as written.
pub(crate) fn validate(path: &str) -> Result<(), PathError> {
    if path.bytes().any(|b| b.is_ascii_control()) {
        return Err(PathError::InvalidControlCharacter);
    }
    let (rest, fragment) = match path.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (path, None),
    };
    let path_part = rest.split_once('?').map_or(rest, |(p, _)| p);
    check_escapes(path_part)?;
    fragment.map_or(Ok(()), check_escapes)
}

fn check_escapes(part: &str) -> Result<(), PathError> {
    let bytes = part.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1..i + 3) {
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
            _ => {
                let end = (i + 3).min(bytes.len());
                return Err(PathError::InvalidEscape(
                    String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                ));
            }
        }
    }
    Ok(())
}
