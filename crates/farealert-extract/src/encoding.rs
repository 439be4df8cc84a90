//! Transfer-encoding normalization for HTML bodies.

use std::borrow::Cow;
use std::sync::LazyLock;

use quoted_printable::ParseMode;
use regex::Regex;

static QP_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=3D|=\r?\n").expect("valid quoted-printable marker regex"));

/// Decodes `input` when it looks quoted-printable, otherwise borrows it.
///
/// The mail transport hands over either raw HTML or its quoted-printable
/// form. An escaped `=` (`=3D`) or a soft line break (`=\n`) marks the
/// latter. Decoded bytes are read as UTF-8 with invalid sequences replaced.
#[must_use]
pub fn maybe_decode_quoted_printable(input: &str) -> Cow<'_, str> {
    if !QP_MARKER_RE.is_match(input) {
        return Cow::Borrowed(input);
    }

    match quoted_printable::decode(input, ParseMode::Robust) {
        Ok(bytes) => {
            tracing::debug!(
                encoded_len = input.len(),
                decoded_len = bytes.len(),
                "decoded quoted-printable body"
            );
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(e) => {
            tracing::debug!(error = %e, "quoted-printable decode failed; using body as-is");
            Cow::Borrowed(input)
        }
    }
}
