use ansiterm_vte::Context;
use log::{debug, error};

use crate::mode::{EraseMode, NamedPrivateMode, PrivateMode};
use crate::{EventHandler, Params};

/// Control sequence with resolved arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Csi {
    /// ICH
    InsertCharacters(u16),
    /// CUU
    CursorUp(u16),
    /// CUD
    CursorDown(u16),
    /// CUF
    CursorForward(u16),
    /// CUB
    CursorBackward(u16),
    /// CNL
    CursorNextLine(u16),
    /// CPL
    CursorPrecedingLine(u16),
    /// CHA
    CursorHorizontalAbsolute(u16),
    /// CUP
    CursorPosition(u16, u16),
    /// ED
    EraseDisplay(EraseMode),
    /// EL
    EraseLine(EraseMode),
    /// IL
    InsertLine(u16),
    /// DL
    DeleteLine(u16),
    /// DCH
    DeleteCharacter(u16),
    /// SU
    ScrollUp(u16),
    /// SD
    ScrollDown(u16),
    /// ECH
    EraseCharacters(u16),
    /// DA
    DeviceAttributes(Vec<u16>),
    /// VPA
    VerticalPositionAbsolute(u16),
    /// HVP
    HorizontalAndVerticalPosition(u16, u16),
    /// DECSET
    SetModePrivate(Vec<PrivateMode>),
    /// DECRST
    ResetModePrivate(Vec<PrivateMode>),
    /// SGR
    SelectGraphicRendition(Vec<u16>),
    /// DSR
    DeviceStatusReport(u16),
    /// DECSTBM
    SetTopAndBottomMargin(u16, Option<u16>),
    /// SCOSC
    SaveCursor,
    /// SCORC
    RestoreCursor,
    /// Well-formed but not supported.
    Unspecified,
}

impl Csi {
    fn parse(
        params: &Params<'_>,
        marker: Option<u8>,
        intermediates: &[u8],
        byte: u8,
    ) -> Self {
        if !intermediates.is_empty() {
            return Self::Unspecified;
        }

        match (byte, marker) {
            (b'@', None) => Self::InsertCharacters(params.get(0, 1)),
            (b'A', None) => Self::CursorUp(params.get(0, 1)),
            (b'B', None) => Self::CursorDown(params.get(0, 1)),
            (b'C', None) => Self::CursorForward(params.get(0, 1)),
            (b'D', None) => Self::CursorBackward(params.get(0, 1)),
            (b'E', None) => Self::CursorNextLine(params.get(0, 1)),
            (b'F', None) => Self::CursorPrecedingLine(params.get(0, 1)),
            (b'G', None) => Self::CursorHorizontalAbsolute(params.get(0, 1)),
            (b'H', None) => {
                Self::CursorPosition(params.get(0, 1), params.get(1, 1))
            },
            (b'J', None) => {
                Self::EraseDisplay(EraseMode::from_raw(params.get(0, 0)))
            },
            (b'K', None) => {
                Self::EraseLine(EraseMode::from_raw(params.get(0, 0)))
            },
            (b'L', None) => Self::InsertLine(params.get(0, 1)),
            (b'M', None) => Self::DeleteLine(params.get(0, 1)),
            (b'P', None) => Self::DeleteCharacter(params.get(0, 1)),
            (b'S', None) => Self::ScrollUp(params.get(0, 1)),
            (b'T', None) => Self::ScrollDown(params.get(0, 1)),
            (b'X', None) => Self::EraseCharacters(params.get(0, 1)),
            (b'c', None) => Self::DeviceAttributes(params.values(0)),
            (b'd', None) => Self::VerticalPositionAbsolute(params.get(0, 1)),
            (b'f', None) => Self::HorizontalAndVerticalPosition(
                params.get(0, 1),
                params.get(1, 1),
            ),
            (b'h', Some(b'?')) => Self::SetModePrivate(private_modes(params)),
            (b'l', Some(b'?')) => {
                Self::ResetModePrivate(private_modes(params))
            },
            (b'm', None) => Self::SelectGraphicRendition(params.values(0)),
            (b'n', None) => Self::DeviceStatusReport(params.get(0, 0)),
            (b'r', None) => Self::SetTopAndBottomMargin(
                params.get(0, 1),
                params.optional(1),
            ),
            (b's', None) => Self::SaveCursor,
            (b'u', None) => Self::RestoreCursor,
            _ => Self::Unspecified,
        }
    }
}

fn private_modes(params: &Params<'_>) -> Vec<PrivateMode> {
    params
        .values(0)
        .into_iter()
        .map(PrivateMode::from_raw)
        .collect()
}

pub(crate) fn perform<H: EventHandler>(handler: &mut H, context: &Context) {
    let Some(byte) = context.final_byte() else {
        error!("[csi] dispatched without a final byte: {context:?}");
        return;
    };

    let params = match Params::parse(context.params()) {
        Ok(params) => params,
        Err(err) => {
            error!("[csi] {err}: {context:?}");
            return;
        },
    };

    match Csi::parse(&params, context.marker(), context.intermediates(), byte)
    {
        Csi::InsertCharacters(count) => handler.insert_characters(count),
        Csi::CursorUp(rows) => handler.cursor_up(rows),
        Csi::CursorDown(rows) => handler.cursor_down(rows),
        Csi::CursorForward(columns) => handler.cursor_forward(columns),
        Csi::CursorBackward(columns) => handler.cursor_backward(columns),
        Csi::CursorNextLine(rows) => handler.cursor_next_line(rows),
        Csi::CursorPrecedingLine(rows) => handler.cursor_previous_line(rows),
        Csi::CursorHorizontalAbsolute(column) => {
            handler.cursor_horizontal_absolute(column)
        },
        Csi::CursorPosition(row, column) => {
            handler.cursor_position(row, column)
        },
        Csi::EraseDisplay(mode) => handler.erase_in_display(mode),
        Csi::EraseLine(mode) => handler.erase_in_line(mode),
        Csi::InsertLine(count) => handler.insert_lines(count),
        Csi::DeleteLine(count) => handler.delete_lines(count),
        Csi::DeleteCharacter(count) => handler.delete_characters(count),
        Csi::ScrollUp(count) => handler.scroll_up(count),
        Csi::ScrollDown(count) => handler.scroll_down(count),
        Csi::EraseCharacters(count) => handler.erase_characters(count),
        Csi::DeviceAttributes(params) => handler.device_attributes(&params),
        Csi::VerticalPositionAbsolute(row) => {
            handler.vertical_position_absolute(row)
        },
        Csi::HorizontalAndVerticalPosition(row, column) => {
            handler.horizontal_vertical_position(row, column)
        },
        Csi::SetModePrivate(modes) => {
            for mode in modes {
                set_private_mode(handler, mode, true);
            }
        },
        Csi::ResetModePrivate(modes) => {
            for mode in modes {
                set_private_mode(handler, mode, false);
            }
        },
        Csi::SelectGraphicRendition(attrs) => {
            handler.select_graphic_rendition(&attrs)
        },
        Csi::DeviceStatusReport(report) => handler.device_status_report(report),
        Csi::SetTopAndBottomMargin(top, bottom) => {
            handler.set_scrolling_region(top, bottom)
        },
        Csi::SaveCursor => handler.save_cursor(),
        Csi::RestoreCursor => handler.restore_cursor(),
        Csi::Unspecified => unexpected(context, byte),
    }
}

fn set_private_mode<H: EventHandler>(
    handler: &mut H,
    mode: PrivateMode,
    enabled: bool,
) {
    match mode {
        PrivateMode::Named(NamedPrivateMode::ShowCursor) => {
            handler.set_cursor_visible(enabled)
        },
        PrivateMode::Named(NamedPrivateMode::Origin) => {
            handler.set_origin_mode(enabled)
        },
        PrivateMode::Named(NamedPrivateMode::ColumnMode) => {
            handler.set_column_mode(enabled)
        },
        PrivateMode::Unknown(raw) => {
            debug!("[unexpected private mode] mode: {raw}, set: {enabled}")
        },
    }
}

fn unexpected(context: &Context, byte: u8) {
    debug!(
        "[unexpected csi] params: {:?}, marker: {:?}, intermediates: {:?}, action: {:?}",
        String::from_utf8_lossy(context.params()),
        context.marker().map(char::from),
        context.intermediates(),
        byte as char
    );
}
