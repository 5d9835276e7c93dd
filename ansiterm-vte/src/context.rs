//! Accumulator for the escape sequence currently being decoded.

use crate::ParserConfig;

/// Bytes collected for the in-flight sequence.
///
/// The context is owned by exactly one [`Parser`](crate::Parser) and is
/// emptied whenever the parser returns to `Ground`, aborts a sequence or
/// starts a new one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Context {
    params: Vec<u8>,
    intermediates: Vec<u8>,
    marker: Option<u8>,
    final_byte: Option<u8>,
    data: Vec<u8>,
    overflowed: bool,
    limits: Limits,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Limits {
    params: usize,
    intermediates: usize,
    data: usize,
}

impl Context {
    pub(crate) fn new(config: &ParserConfig) -> Self {
        Self {
            params: Vec::with_capacity(32),
            intermediates: Vec::with_capacity(config.max_intermediates),
            limits: Limits {
                params: config.max_param_bytes,
                intermediates: config.max_intermediates,
                data: config.max_string_bytes,
            },
            ..Self::default()
        }
    }

    /// Raw parameter run: ASCII digits and `;` separators.
    pub fn params(&self) -> &[u8] {
        &self.params
    }

    /// Intermediate bytes (0x20-0x2F) in order of appearance.
    pub fn intermediates(&self) -> &[u8] {
        &self.intermediates
    }

    /// Private marker (`<`, `=`, `>` or `?`) leading the parameters.
    pub fn marker(&self) -> Option<u8> {
        self.marker
    }

    /// Final byte selecting the action, once the sequence completed.
    pub fn final_byte(&self) -> Option<u8> {
        self.final_byte
    }

    /// Payload of an OSC or DCS string.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether any of the configured limits was exceeded.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Whether nothing has been collected for the current sequence.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
            && self.intermediates.is_empty()
            && self.marker.is_none()
            && self.final_byte.is_none()
            && self.data.is_empty()
            && !self.overflowed
    }

    pub(crate) fn clear(&mut self) {
        self.params.clear();
        self.intermediates.clear();
        self.marker = None;
        self.final_byte = None;
        self.data.clear();
        self.overflowed = false;
    }

    pub(crate) fn collect_param(&mut self, byte: u8) {
        if self.params.len() < self.limits.params {
            self.params.push(byte);
        } else {
            self.overflowed = true;
        }
    }

    pub(crate) fn collect_intermediate(&mut self, byte: u8) {
        if self.intermediates.len() < self.limits.intermediates {
            self.intermediates.push(byte);
        } else {
            self.overflowed = true;
        }
    }

    pub(crate) fn set_marker(&mut self, byte: u8) {
        self.marker = Some(byte);
    }

    pub(crate) fn set_final(&mut self, byte: u8) {
        self.final_byte = Some(byte);
    }

    pub(crate) fn put(&mut self, bytes: &[u8]) {
        if self.data.len() + bytes.len() <= self.limits.data {
            self.data.extend_from_slice(bytes);
        } else {
            self.overflowed = true;
        }
    }
}
