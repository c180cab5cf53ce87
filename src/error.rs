use thiserror::Error;

/// Errors surfaced by the sketchpad core.
///
/// None of these cross the UI event boundary as panics: callers log them
/// and leave the current state untouched.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A pointer-down arrived while another gesture is still in progress
    #[error("cannot begin a {new}: a {active} is already in progress")]
    GestureInProgress {
        active: &'static str,
        new: &'static str,
    },

    /// The custom glyph prompt was empty or cancelled
    #[error("custom sticker glyph is empty")]
    EmptyGlyph,

    /// The custom glyph contains characters that cannot be placed as a sticker
    #[error("invalid sticker glyph {glyph:?}: {reason}")]
    InvalidGlyph { glyph: String, reason: &'static str },
}

pub type SketchResult<T> = Result<T, SketchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let errors = [
            SketchError::GestureInProgress {
                active: "stroke",
                new: "sticker",
            },
            SketchError::EmptyGlyph,
            SketchError::InvalidGlyph {
                glyph: "a\u{7}".to_owned(),
                reason: "contains control characters",
            },
        ];
        for err in errors {
            let message = err.to_string();
            match err {
                SketchError::GestureInProgress { .. } => {
                    assert!(message.contains("stroke is already in progress"))
                }
                SketchError::EmptyGlyph => assert!(message.contains("empty")),
                SketchError::InvalidGlyph { .. } => {
                    assert!(message.contains("control characters"))
                }
            }
        }
    }
}
