use utf8parse::Receiver;

#[derive(Default)]
struct Decoder {
    inner: Option<char>,
}

impl Receiver for Decoder {
    fn codepoint(&mut self, c: char) {
        self.inner.replace(c);
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

/// Incremental UTF-8 decoder used for printable text and OSC payloads.
#[derive(Default)]
pub(crate) struct Utf8Parser {
    inner: utf8parse::Parser,
    pending: bool,
}

impl Utf8Parser {
    /// Whether a multi-byte character has been started but not finished.
    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    /// Feed one byte, returning a character once one is complete.
    ///
    /// Malformed input yields `U+FFFD`.
    pub(crate) fn advance(&mut self, byte: u8) -> Option<char> {
        let mut decoder = Decoder::default();
        self.inner.advance(&mut decoder, byte);
        self.pending = decoder.inner.is_none();
        decoder.inner
    }

    pub(crate) fn reset(&mut self) {
        self.inner = utf8parse::Parser::default();
        self.pending = false;
    }
}
