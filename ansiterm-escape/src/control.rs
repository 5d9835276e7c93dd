use std::fmt;

use log::debug;

use crate::EventHandler;

/// C0 and C1 control codes that may be observed outside of an escape
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCode {
    // C0
    /// (NUL, Caret = ^@) Null, filler without meaning.
    Null,
    /// (BEL, Caret = ^G, C = \a) Bell, triggers the bell, buzzer, or beeper on the terminal.
    Bell,
    /// (BS, Caret = ^H, C = \b) Backspace, can be used to define overstruck characters.
    Backspace,
    /// (HT, Caret = ^I, C = \t) Horizontal Tabulation, move to next predetermined position.
    HorizontalTab,
    /// (LF, Caret = ^J, C = \n) Linefeed, move to same position on next line.
    LineFeed,
    /// (VT, Caret = ^K, C = \v) Vertical Tabulation, move to next predetermined line.
    VerticalTab,
    /// (FF, Caret = ^L, C = \f) Form Feed, move to next form or page.
    FormFeed,
    /// (CR, Caret = ^M, C = \r) Carriage Return, move to first character of current line.
    CarriageReturn,
    /// (SO, Caret = ^N) Shift Out, switch to G1.
    ShiftOut,
    /// (SI, Caret = ^O) Shift In, switch to G0.
    ShiftIn,
    /// Any other C0 byte.
    OtherC0(u8),

    // C1
    /// (IND) Index.
    Index,
    /// (NEL) Next Line.
    NextLine,
    /// (HTS) Horizontal Tabulation Set.
    HorizontalTabSet,
    /// (RI) Reverse Index.
    ReverseIndex,

    // Misc
    /// Control outside of the C0 and known C1 sets.
    Unexpected(u8),
}

impl From<u8> for ControlCode {
    fn from(byte: u8) -> Self {
        use ControlCode::*;
        match byte {
            // C0
            0x00 => Null,
            0x07 => Bell,
            0x08 => Backspace,
            0x09 => HorizontalTab,
            0x0A => LineFeed,
            0x0B => VerticalTab,
            0x0C => FormFeed,
            0x0D => CarriageReturn,
            0x0E => ShiftOut,
            0x0F => ShiftIn,
            0x01..=0x1F => OtherC0(byte),

            // C1
            0x84 => Index,
            0x85 => NextLine,
            0x88 => HorizontalTabSet,
            0x8D => ReverseIndex,

            // Misc
            other => Unexpected(other),
        }
    }
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ControlCode::*;
        let code = match self {
            // C0
            Null => "NUL",
            Bell => "BEL",
            Backspace => "BS",
            HorizontalTab => "HT",
            LineFeed => "LF",
            VerticalTab => "VT",
            FormFeed => "FF",
            CarriageReturn => "CR",
            ShiftOut => "SO",
            ShiftIn => "SI",
            OtherC0(_) => "C0",

            // C1
            Index => "IND",
            NextLine => "NEL",
            HorizontalTabSet => "HTS",
            ReverseIndex => "RI",

            // Misc
            Unexpected(_) => "UNEXPECTED",
        };

        match self {
            OtherC0(b) | Unexpected(b) => write!(f, "{code}: 0x{:02X}", b),
            _ => write!(f, "{code}"),
        }
    }
}

pub(crate) fn perform<H: EventHandler>(byte: u8, handler: &mut H) {
    match ControlCode::from(byte) {
        // C1
        ControlCode::Index => handler.index(),
        ControlCode::NextLine => handler.next_line(),
        ControlCode::HorizontalTabSet => handler.set_tab_stop(),
        ControlCode::ReverseIndex => handler.reverse_index(),
        code @ ControlCode::Unexpected(_) => {
            debug!("[unexpected control] {code}");
        },
        // C0
        _ => handler.execute(byte),
    }
}
