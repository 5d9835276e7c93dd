use ansiterm_vte::{
    Actor as VteActor, CancelToken, Context, Parser as VtParser, ParserConfig,
    State, Status,
};

use crate::{EventHandler, control, csi, dcs, esc, osc};

/// High-level escape sequence parser that forwards semantic events to an
/// [`EventHandler`].
#[derive(Default)]
pub struct Parser {
    vt: VtParser,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            vt: VtParser::with_config(config),
        }
    }

    /// Start in an explicit state instead of `Ground`.
    #[must_use]
    pub fn with_state(state: State) -> Self {
        Self {
            vt: VtParser::with_state(state),
        }
    }

    #[must_use]
    pub fn with_cancel_token(self, token: CancelToken) -> Self {
        Self {
            vt: self.vt.with_cancel_token(token),
        }
    }

    pub fn cancel_token(&self) -> &CancelToken {
        self.vt.cancel_token()
    }

    pub fn state(&self) -> State {
        self.vt.state()
    }

    pub fn context(&self) -> &Context {
        self.vt.context()
    }

    /// Drop any in-flight sequence and return to `Ground`.
    pub fn reset(&mut self) {
        self.vt.reset();
    }

    /// Advance the parser with a new chunk of bytes.
    ///
    /// [`EventHandler::flush`] is called once the whole chunk was consumed.
    /// A cancelled call reaches neither the handler nor the parser state.
    pub fn advance<H: EventHandler>(
        &mut self,
        bytes: &[u8],
        handler: &mut H,
    ) -> Status {
        let mut performer = Performer { handler };
        let status = self.vt.advance(bytes, &mut performer);

        if status == Status::Completed {
            handler.flush();
        }

        status
    }
}

struct Performer<'a, H: EventHandler> {
    handler: &'a mut H,
}

impl<H: EventHandler> VteActor for Performer<'_, H> {
    fn print(&mut self, c: char) {
        self.handler.print(c);
    }

    fn execute(&mut self, byte: u8) {
        control::perform(byte, self.handler);
    }

    fn esc_dispatch(&mut self, context: &Context) {
        if let Some(byte) = context.final_byte() {
            esc::perform(self.handler, context.intermediates(), byte);
        }
    }

    fn csi_dispatch(&mut self, context: &Context) {
        csi::perform(self.handler, context);
    }

    fn osc_dispatch(&mut self, data: &[u8]) {
        osc::perform(self.handler, data);
    }

    fn dcs_dispatch(&mut self, context: &Context) {
        dcs::perform(self.handler, context);
    }
}
