//! Maps HTTP status codes onto [`Error`] categories.

use crate::Error;

/// Classifies a response status. The checks run in order and the first match
/// wins; anything left unmatched is treated as success.
///
/// This means 200, every code below 200, the 3xx range and 402 all pass,
/// while 201-299 and 404-499 are reported as unexpected.
pub fn classify(code: u16) -> Result<(), Error> {
    if code >= 500 {
        return Err(Error::Server(code));
    }
    if code == 400 {
        return Err(Error::MalformedRequest);
    }
    if code == 401 || code == 403 {
        return Err(Error::Authorization);
    }
    if (code > 200 && code < 300) || code > 403 {
        return Err(Error::UnexpectedStatus(code));
    }
    Ok(())
}
