use std::fmt;

/// Node of the escape sequence state machine.
///
/// The graph follows the DEC VT500 parser model: `Ground` is the idle
/// state, every other state is part of an in-flight sequence.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    CsiIgnore,
    DcsEntry,
    DcsParam,
    DcsIntermediate,
    DcsIgnore,
    DcsPassthrough,
    OscString,
    SosPmApcString,
}

impl State {
    /// Every state of the machine, in declaration order.
    pub const ALL: [State; 14] = [
        State::Ground,
        State::Escape,
        State::EscapeIntermediate,
        State::CsiEntry,
        State::CsiParam,
        State::CsiIntermediate,
        State::CsiIgnore,
        State::DcsEntry,
        State::DcsParam,
        State::DcsIntermediate,
        State::DcsIgnore,
        State::DcsPassthrough,
        State::OscString,
        State::SosPmApcString,
    ];

    /// Unique name of the state.
    pub const fn name(self) -> &'static str {
        match self {
            State::Ground => "Ground",
            State::Escape => "Escape",
            State::EscapeIntermediate => "EscapeIntermediate",
            State::CsiEntry => "CsiEntry",
            State::CsiParam => "CsiParam",
            State::CsiIntermediate => "CsiIntermediate",
            State::CsiIgnore => "CsiIgnore",
            State::DcsEntry => "DcsEntry",
            State::DcsParam => "DcsParam",
            State::DcsIntermediate => "DcsIntermediate",
            State::DcsIgnore => "DcsIgnore",
            State::DcsPassthrough => "DcsPassthrough",
            State::OscString => "OscString",
            State::SosPmApcString => "SosPmApcString",
        }
    }

    /// Look a state up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<State> {
        State::ALL.into_iter().find(|state| state.name() == name)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Work the driver performs for a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Ignore,
    Utf8,
    Print,
    Execute,
    Clear,
    Collect,
    Marker,
    Param,
    EscDispatch,
    CsiDispatch,
    Hook,
    Put,
    DcsEnd,
    OscPut,
    OscEnd,
}
