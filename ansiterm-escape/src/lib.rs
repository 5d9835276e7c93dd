//! Decode terminal output into semantic cursor, erase, scroll and attribute
//! actions.
//!
//! [`Parser`] drives the byte-level state machine from [`vte`] and turns
//! every completed sequence into exactly one [`EventHandler`] call with
//! validated, defaulted arguments. Unknown or malformed sequences are
//! dropped.

mod control;
mod csi;
mod dcs;
mod error;
mod esc;
mod handler;
mod mode;
mod osc;
mod params;
mod parser;
#[cfg(test)]
mod recorder;

pub use ansiterm_vte as vte;
pub use ansiterm_vte::{CancelToken, Context, ParserConfig, State, Status};
pub use control::ControlCode;
pub use error::{ParamError, Result};
pub use handler::EventHandler;
pub use mode::{EraseMode, NamedPrivateMode, PrivateMode};
pub use params::{PARAM_SEPARATOR, Params, parse_params, split_params};
pub use parser::Parser;
