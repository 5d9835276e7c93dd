//! Semantic terminal actions produced by the [`Parser`](crate::Parser).
//!
//! Arguments are already validated and defaulted: counts are at least one,
//! positions are 1-based and erase selectors are clamped to a known
//! [`EraseMode`]. Implementors decide what each action means for their
//! screen model.

use crate::EraseMode;

/// Collaborator receiving decoded terminal actions.
///
/// All methods have a default empty implementation so that downstream crates
/// only need to override the actions they actually care about. Calls are made
/// synchronously, in input order, while the parser walks the byte stream.
pub trait EventHandler {
    /// Emits a printable Unicode scalar value.
    fn print(&mut self, _: char) {}

    /// C0 control byte, passed through unchanged.
    fn execute(&mut self, _: u8) {}

    /// CUU
    fn cursor_up(&mut self, _: u16) {}

    /// CUD
    fn cursor_down(&mut self, _: u16) {}

    /// CUF
    fn cursor_forward(&mut self, _: u16) {}

    /// CUB
    fn cursor_backward(&mut self, _: u16) {}

    /// CNL
    fn cursor_next_line(&mut self, _: u16) {}

    /// CPL
    fn cursor_previous_line(&mut self, _: u16) {}

    /// CHA, 1-based column.
    fn cursor_horizontal_absolute(&mut self, _: u16) {}

    /// VPA, 1-based row.
    fn vertical_position_absolute(&mut self, _: u16) {}

    /// CUP, 1-based row and column.
    fn cursor_position(&mut self, _row: u16, _col: u16) {}

    /// HVP, 1-based row and column.
    fn horizontal_vertical_position(&mut self, _row: u16, _col: u16) {}

    fn save_cursor(&mut self) {}

    fn restore_cursor(&mut self) {}

    fn set_cursor_visible(&mut self, _: bool) {}

    fn set_origin_mode(&mut self, _: bool) {}

    fn set_column_mode(&mut self, _: bool) {}

    /// ED
    fn erase_in_display(&mut self, _: EraseMode) {}

    /// EL
    fn erase_in_line(&mut self, _: EraseMode) {}

    /// ECH
    fn erase_characters(&mut self, _: u16) {}

    /// IL
    fn insert_lines(&mut self, _: u16) {}

    /// DL
    fn delete_lines(&mut self, _: u16) {}

    /// ICH
    fn insert_characters(&mut self, _: u16) {}

    /// DCH
    fn delete_characters(&mut self, _: u16) {}

    /// SU
    fn scroll_up(&mut self, _: u16) {}

    /// SD
    fn scroll_down(&mut self, _: u16) {}

    /// DECSTBM. A missing bottom margin means the last line of the screen.
    fn set_scrolling_region(&mut self, _top: u16, _bottom: Option<u16>) {}

    /// SGR attributes, `[0]` when the sequence carried none.
    fn select_graphic_rendition(&mut self, _: &[u16]) {}

    /// DA
    fn device_attributes(&mut self, _: &[u16]) {}

    /// DSR
    fn device_status_report(&mut self, _: u16) {}

    /// IND
    fn index(&mut self) {}

    /// NEL
    fn next_line(&mut self) {}

    /// RI
    fn reverse_index(&mut self) {}

    /// HTS
    fn set_tab_stop(&mut self) {}

    /// RIS
    fn reset_state(&mut self) {}

    fn set_title(&mut self, _: &str) {}

    /// Any OSC other than a title change, with the full command string.
    fn operating_system_command(&mut self, _: &[u8]) {}

    /// Complete DCS with its parameters, intermediates, final byte and
    /// payload.
    fn device_control_string(
        &mut self,
        _params: &[u16],
        _intermediates: &[u8],
        _byte: u8,
        _data: &[u8],
    ) {
    }

    /// End of a fully consumed input chunk.
    fn flush(&mut self) {}
}
