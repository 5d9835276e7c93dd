use log::{debug, trace};

use crate::actor::Actor;
use crate::enums::{Action, State};
use crate::{CancelToken, Context, ParserConfig, Status, transitions, utf8};

/// Streaming escape sequence state machine.
///
/// State, [`Context`] and any partially decoded UTF-8 character survive
/// between calls to [`advance`](Self::advance), so a sequence may be split
/// across arbitrary chunk boundaries.
pub struct Parser {
    state: State,
    context: Context,
    utf8_parser: utf8::Utf8Parser,
    cancel: CancelToken,
}

impl Default for Parser {
    fn default() -> Self {
        Self::with_config(ParserConfig::default())
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            state: config.initial_state,
            context: Context::new(&config),
            utf8_parser: utf8::Utf8Parser::default(),
            cancel: CancelToken::new(),
        }
    }

    /// Start in an explicit state instead of `Ground`.
    #[must_use]
    pub fn with_state(state: State) -> Self {
        Self::with_config(ParserConfig {
            initial_state: state,
            ..ParserConfig::default()
        })
    }

    /// Replace the cancel token observed by [`advance`](Self::advance).
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Current state of the machine.
    pub fn state(&self) -> State {
        self.state
    }

    /// Sequence collected so far.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Drop any in-flight sequence and return to `Ground`.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.context.clear();
        self.utf8_parser.reset();
    }

    /// Advance the parser with a new chunk of bytes.
    ///
    /// The cancel token is checked once, before the first byte. A cancelled
    /// call consumes nothing and leaves the machine untouched.
    pub fn advance<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) -> Status {
        if self.cancel.is_cancelled() {
            debug!(
                "[cancelled] state: {}, unconsumed bytes: {}",
                self.state,
                bytes.len()
            );
            return Status::Cancelled;
        }

        for &byte in bytes {
            self.advance_byte(byte, actor);
        }

        Status::Completed
    }

    fn advance_byte<A: Actor>(&mut self, byte: u8, actor: &mut A) {
        if self.utf8_parser.is_pending() {
            if matches!(byte, 0x80..=0xbf) {
                if let Some(c) = self.utf8_parser.advance(byte) {
                    self.decoded(c, actor);
                }
                return;
            }

            // A broken character must not swallow the byte that broke it.
            self.utf8_parser.reset();
            self.decoded(char::REPLACEMENT_CHARACTER, actor);
        }

        let (next_state, action) = transitions::transit(self.state, byte);
        self.transition(next_state, action, byte, actor);
    }

    fn transition<A: Actor>(
        &mut self,
        next_state: State,
        action: Action,
        byte: u8,
        actor: &mut A,
    ) {
        if self.state == next_state {
            self.perform(action, byte, actor);
            return;
        }

        trace!("[transition] {} -> {} on {byte:#04x}", self.state, next_state);
        self.perform(action, byte, actor);
        self.state = next_state;
        self.perform(transitions::entry_action(next_state), byte, actor);
    }

    fn decoded<A: Actor>(&mut self, c: char, actor: &mut A) {
        // C1 controls encoded as UTF-8 rather than emitted as raw 8-bit
        // bytes behave exactly like their 8-bit form.
        if ('\u{80}'..='\u{9f}').contains(&c) {
            let byte = c as u8;
            let (next_state, action) = transitions::transit(self.state, byte);
            self.transition(next_state, action, byte, actor);
            return;
        }

        match self.state {
            State::OscString => {
                let mut tmp = [0u8; 4];
                self.context.put(c.encode_utf8(&mut tmp).as_bytes());
            },
            _ => actor.print(c),
        }
    }

    fn perform<A: Actor>(&mut self, action: Action, byte: u8, actor: &mut A) {
        use Action::*;

        match action {
            None | Ignore => {},
            Print => actor.print(byte as char),
            Execute => actor.execute(byte),
            Utf8 => {
                if let Some(c) = self.utf8_parser.advance(byte) {
                    self.decoded(c, actor);
                }
            },
            Clear => self.context.clear(),
            Collect => self.context.collect_intermediate(byte),
            Marker => self.context.set_marker(byte),
            Param => self.context.collect_param(byte),
            Put | OscPut => self.context.put(&[byte]),
            Hook => self.context.set_final(byte),
            EscDispatch => {
                self.context.set_final(byte);
                if self.accepts("esc") {
                    actor.esc_dispatch(&self.context);
                }
            },
            CsiDispatch => {
                self.context.set_final(byte);
                if self.accepts("csi") {
                    actor.csi_dispatch(&self.context);
                }
            },
            OscEnd => {
                if self.accepts("osc") {
                    actor.osc_dispatch(self.context.data());
                }
            },
            DcsEnd => {
                if self.accepts("dcs") {
                    actor.dcs_dispatch(&self.context);
                }
            },
        }
    }

    fn accepts(&self, kind: &str) -> bool {
        if self.context.overflowed() {
            debug!("[dropped {kind}] sequence exceeds limits: {:?}", self.context);
            return false;
        }

        true
    }
}
