use crate::State;

/// Configuration knobs that bound how much a single sequence may buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// State the parser starts in.
    pub initial_state: State,
    /// Maximum number of raw parameter bytes (digits and separators).
    pub max_param_bytes: usize,
    /// Maximum number of intermediate bytes.
    pub max_intermediates: usize,
    /// Maximum payload length of an OSC or DCS string.
    pub max_string_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            initial_state: State::Ground,
            max_param_bytes: 1024,
            max_intermediates: 2,
            max_string_bytes: 4096,
        }
    }
}
