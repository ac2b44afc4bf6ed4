use crate::errors::TimingError;

pub const OPEN_MARKER: &str = "Executed in ";
pub const CLOSE_MARKER: &str = " milliseconds";

/// Extract `N` from the first `Executed in N milliseconds` in a solver transcript.
///
/// The closing marker must follow the opening one, and the text between them
/// must be plain ASCII digits (no sign, whitespace or separators) that fit a `u64`.
pub fn parse_elapsed_ms(output: &str) -> Result<u64, TimingError> {
    let start = output
        .find(OPEN_MARKER)
        .map(|i| i + OPEN_MARKER.len())
        .ok_or(TimingError::MissingMarker {
            marker: OPEN_MARKER,
        })?;

    let rest = &output[start..];
    let len = rest.find(CLOSE_MARKER).ok_or(TimingError::MissingMarker {
        marker: CLOSE_MARKER,
    })?;

    let text = &rest[..len];
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimingError::InvalidNumber {
            text: text.to_string(),
        });
    }

    text.parse().map_err(|_| TimingError::InvalidNumber {
        text: text.to_string(),
    })
}
