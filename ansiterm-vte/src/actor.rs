//! Callbacks invoked by the escape sequence state machine.
//!
//! The [`Parser`](crate::Parser) walks a byte stream and hands every
//! completed unit of work to an [`Actor`]: printable characters, immediate
//! control functions and fully collected sequences. Sequences are passed as
//! the [`Context`] they were accumulated in, so implementations decide how
//! to interpret parameters and intermediates. Incomplete, aborted or
//! oversized sequences never reach the actor.
use crate::Context;

/// Consumer-facing interface for raw dispatches emitted by the parser.
///
/// ## Terminology:
/// An intermediate is a byte in the range 0x20-0x2f that occurs before
/// the final byte of a sequence. The final byte (0x40-0x7e for CSI and DCS,
/// 0x30-0x7e for plain escapes) selects the function.
pub trait Actor {
    /// Emits a single printable Unicode code point.
    fn print(&mut self, c: char);

    /// Executes an immediate single-byte control function (C0 or C1).
    fn execute(&mut self, byte: u8);

    /// Dispatches a plain escape sequence (`ESC I.. F`).
    fn esc_dispatch(&mut self, context: &Context);

    /// Dispatches a Control Sequence Introducer (CSI) sequence.
    ///
    /// The context holds the raw parameter run, which only ever contains
    /// ASCII digits and `;`.
    fn csi_dispatch(&mut self, context: &Context);

    /// Dispatches an Operating System Command (OSC) with its full payload.
    fn osc_dispatch(&mut self, data: &[u8]);

    /// Dispatches a terminated Device Control String (DCS).
    fn dcs_dispatch(&mut self, context: &Context);
}
