//! Transition table for the `ansiterm-vte` finite state machine.
//!
//! Each function in this module handles one parser state: given an input
//! byte it returns the next [`State`] and the [`Action`] the driver should
//! perform. Rules shared by every state (CAN, SUB, ESC, string terminators
//! and 8-bit C1 controls) are resolved in [`transit`] before the
//! state-specific table is consulted.

use crate::enums::{Action, State};

/// Action completing a control string when its terminator arrives.
#[inline(always)]
const fn string_end(state: State) -> Action {
    match state {
        State::OscString => Action::OscEnd,
        State::DcsPassthrough => Action::DcsEnd,
        _ => Action::None,
    }
}

/// 8-bit C1 controls, honoured from every state except DCS payloads.
///
/// Introducers clear the context themselves: re-entering the current state
/// skips its entry action.
#[inline(always)]
const fn c1(byte: u8) -> Option<(State, Action)> {
    use Action::*;
    use State::*;

    match byte {
        0x80..=0x8f | 0x91..=0x97 | 0x99 | 0x9a => Some((Ground, Execute)),
        0x90 => Some((DcsEntry, Clear)),
        0x9b => Some((CsiEntry, Clear)),
        0x9d => Some((OscString, Clear)),
        0x98 | 0x9e | 0x9f => Some((SosPmApcString, Clear)),
        _ => Option::None,
    }
}

/// Ground state handling printable data and C0 controls.
#[inline(always)]
const fn ground(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (Ground, Execute),
        0x20..=0x7f => (Ground, Print),
        0xc2..=0xf4 => (Ground, Utf8),
        _ => (Ground, Ignore),
    }
}

/// ESC state waiting for the next byte to identify the sequence family.
#[inline(always)]
const fn escape(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (Escape, Execute),
        0x20..=0x2f => (EscapeIntermediate, Collect),
        0x50 => (DcsEntry, None),
        0x58 | 0x5e | 0x5f => (SosPmApcString, None),
        0x5b => (CsiEntry, None),
        0x5d => (OscString, None),
        0x30..=0x7e => (Ground, EscDispatch),
        _ => (Escape, Ignore),
    }
}

/// ESC state that collects intermediate bytes before dispatch.
#[inline(always)]
const fn escape_intermediate(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (EscapeIntermediate, Execute),
        0x20..=0x2f => (EscapeIntermediate, Collect),
        0x30..=0x7e => (Ground, EscDispatch),
        _ => (EscapeIntermediate, Ignore),
    }
}

/// CSI entry point that validates and routes subsequent parameter bytes.
#[inline(always)]
const fn csi_entry(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiEntry, Execute),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x3a => (CsiIgnore, None),
        0x30..=0x39 | 0x3b => (CsiParam, Param),
        0x3c..=0x3f => (CsiParam, Marker),
        0x40..=0x7e => (Ground, CsiDispatch),
        _ => (CsiEntry, Ignore),
    }
}

/// CSI parameter collection handling numeric fields and separators.
#[inline(always)]
const fn csi_param(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiParam, Execute),
        0x30..=0x39 | 0x3b => (CsiParam, Param),
        0x3a | 0x3c..=0x3f => (CsiIgnore, None),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x40..=0x7e => (Ground, CsiDispatch),
        _ => (CsiParam, Ignore),
    }
}

/// CSI intermediate state collecting extra bytes prior to dispatch.
#[inline(always)]
const fn csi_intermediate(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiIntermediate, Execute),
        0x20..=0x2f => (CsiIntermediate, Collect),
        0x30..=0x3f => (CsiIgnore, None),
        0x40..=0x7e => (Ground, CsiDispatch),
        _ => (CsiIntermediate, Ignore),
    }
}

/// CSI ignore state consuming bytes until the final byte of a bad sequence.
#[inline(always)]
const fn csi_ignore(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x00..=0x17 | 0x19 | 0x1c..=0x1f => (CsiIgnore, Execute),
        0x40..=0x7e => (Ground, None),
        _ => (CsiIgnore, Ignore),
    }
}

/// DCS entry point collecting the introducer and preparing parameters.
#[inline(always)]
const fn dcs_entry(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x3a => (DcsIgnore, None),
        0x30..=0x39 | 0x3b => (DcsParam, Param),
        0x3c..=0x3f => (DcsParam, Marker),
        0x40..=0x7e => (DcsPassthrough, Hook),
        _ => (DcsEntry, Ignore),
    }
}

/// DCS parameter collection equivalent to `csi_param` but for DCS strings.
#[inline(always)]
const fn dcs_param(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x30..=0x39 | 0x3b => (DcsParam, Param),
        0x3a | 0x3c..=0x3f => (DcsIgnore, None),
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x40..=0x7e => (DcsPassthrough, Hook),
        _ => (DcsParam, Ignore),
    }
}

/// DCS intermediate handler prior to entering passthrough mode.
#[inline(always)]
const fn dcs_intermediate(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x20..=0x2f => (DcsIntermediate, Collect),
        0x30..=0x3f => (DcsIgnore, None),
        0x40..=0x7e => (DcsPassthrough, Hook),
        _ => (DcsIntermediate, Ignore),
    }
}

/// DCS passthrough mode buffering payload bytes until the terminator.
#[inline(always)]
const fn dcs_passthrough(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x7f => (DcsPassthrough, Ignore),
        // High-bit bytes are payload too, otherwise UTF-8 continuation
        // bytes would be taken for C1 controls and cut the string short.
        _ => (DcsPassthrough, Put),
    }
}

/// OSC payload collection until BEL or ST is observed.
#[inline(always)]
const fn osc_string(byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x07 => (Ground, OscEnd),
        0x00..=0x1f => (OscString, Ignore),
        0x20..=0x7f => (OscString, OscPut),
        0xc2..=0xf4 => (OscString, Utf8),
        _ => (OscString, Ignore),
    }
}

/// Action to trigger upon entering a new state before reading the next byte.
#[inline(always)]
pub(crate) const fn entry_action(state: State) -> Action {
    use Action::*;
    use State::*;

    match state {
        Ground | Escape | CsiEntry | DcsEntry | OscString => Clear,
        EscapeIntermediate | CsiParam | CsiIntermediate | CsiIgnore => None,
        DcsParam | DcsIntermediate | DcsIgnore | DcsPassthrough => None,
        SosPmApcString => None,
    }
}

/// Core transition table that delegates to state-specific helpers.
#[inline(always)]
pub(crate) const fn transit(state: State, byte: u8) -> (State, Action) {
    use Action::*;
    use State::*;

    match byte {
        0x18 | 0x1a => return (Ground, Clear),
        0x1b => return (Escape, string_end(state)),
        0x9c => return (Ground, string_end(state)),
        _ => {},
    }

    if !matches!(state, DcsPassthrough | DcsIgnore) {
        if let Some(transition) = c1(byte) {
            return transition;
        }
    }

    match state {
        Ground => ground(byte),
        Escape => escape(byte),
        EscapeIntermediate => escape_intermediate(byte),
        CsiEntry => csi_entry(byte),
        CsiParam => csi_param(byte),
        CsiIntermediate => csi_intermediate(byte),
        CsiIgnore => csi_ignore(byte),
        DcsEntry => dcs_entry(byte),
        DcsParam => dcs_param(byte),
        DcsIntermediate => dcs_intermediate(byte),
        DcsPassthrough => dcs_passthrough(byte),
        DcsIgnore => (DcsIgnore, Ignore),
        OscString => osc_string(byte),
        SosPmApcString => (SosPmApcString, Ignore),
    }
}
