/// Selector of the ED and EL erase actions.
#[repr(u16)]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum EraseMode {
    /// From the cursor to the end of the line or display.
    #[default]
    FromCursor = 0,
    /// From the start of the line or display to the cursor.
    ToCursor = 1,
    /// The whole line or display.
    All = 2,
    /// The scrollback buffer (ED only).
    Scrollback = 3,
}

impl EraseMode {
    /// Out-of-range selectors fall back to [`EraseMode::FromCursor`].
    pub fn from_raw(mode: u16) -> Self {
        match mode {
            1 => Self::ToCursor,
            2 => Self::All,
            3 => Self::Scrollback,
            _ => Self::FromCursor,
        }
    }

    /// Get the raw value of the mode.
    pub fn raw(self) -> u16 {
        self as u16
    }
}

/// Wrapper for the private DEC modes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PrivateMode {
    /// Known private mode.
    Named(NamedPrivateMode),
    /// Unknown private mode.
    Unknown(u16),
}

impl PrivateMode {
    pub(crate) fn from_raw(mode: u16) -> Self {
        match mode {
            3 => Self::Named(NamedPrivateMode::ColumnMode),
            6 => Self::Named(NamedPrivateMode::Origin),
            25 => Self::Named(NamedPrivateMode::ShowCursor),
            _ => Self::Unknown(mode),
        }
    }

    /// Get the raw value of the mode.
    pub fn raw(self) -> u16 {
        match self {
            Self::Named(named) => named as u16,
            Self::Unknown(mode) => mode,
        }
    }
}

impl From<NamedPrivateMode> for PrivateMode {
    fn from(value: NamedPrivateMode) -> Self {
        Self::Named(value)
    }
}

/// Private DEC modes.
#[repr(u16)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NamedPrivateMode {
    /// DECCOLM, 132 column mode.
    ColumnMode = 3,
    /// DECOM, cursor addressing relative to the scrolling region.
    Origin = 6,
    /// DECTCEM, cursor visibility.
    ShowCursor = 25,
}
