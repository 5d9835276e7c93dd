//! Byte-level VT100/ECMA-48 escape sequence state machine.
//!
//! [`Parser`] consumes raw bytes, walks the DEC VT500 state graph and
//! reports printable text, control functions and completed ESC, CSI, OSC
//! and DCS sequences to an [`Actor`]. It never fails: malformed input is
//! swallowed and the machine falls back to [`State::Ground`].

mod actor;
mod cancel;
mod config;
mod context;
mod enums;
mod parser;
mod transitions;
mod utf8;

pub use actor::Actor;
pub use cancel::{CancelToken, Status};
pub use config::ParserConfig;
pub use context::Context;
pub use enums::State;
pub use parser::Parser;
