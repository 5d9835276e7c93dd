use crate::{EraseMode, EventHandler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Print(char),
    Execute(u8),
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBackward(u16),
    CursorNextLine(u16),
    CursorPreviousLine(u16),
    CursorHorizontalAbsolute(u16),
    VerticalPositionAbsolute(u16),
    CursorPosition(u16, u16),
    HorizontalVerticalPosition(u16, u16),
    SaveCursor,
    RestoreCursor,
    SetCursorVisible(bool),
    SetOriginMode(bool),
    SetColumnMode(bool),
    EraseInDisplay(EraseMode),
    EraseInLine(EraseMode),
    EraseCharacters(u16),
    InsertLines(u16),
    DeleteLines(u16),
    InsertCharacters(u16),
    DeleteCharacters(u16),
    ScrollUp(u16),
    ScrollDown(u16),
    SetScrollingRegion(u16, Option<u16>),
    SelectGraphicRendition(Vec<u16>),
    DeviceAttributes(Vec<u16>),
    DeviceStatusReport(u16),
    Index,
    NextLine,
    ReverseIndex,
    SetTabStop,
    ResetState,
    SetTitle(String),
    OperatingSystemCommand(Vec<u8>),
    DeviceControlString {
        params: Vec<u16>,
        intermediates: Vec<u8>,
        byte: u8,
        data: Vec<u8>,
    },
    Flush,
}

#[derive(Default)]
pub(crate) struct Recorder {
    pub calls: Vec<Call>,
}

impl EventHandler for Recorder {
    fn print(&mut self, c: char) {
        self.calls.push(Call::Print(c));
    }

    fn execute(&mut self, byte: u8) {
        self.calls.push(Call::Execute(byte));
    }

    fn cursor_up(&mut self, n: u16) {
        self.calls.push(Call::CursorUp(n));
    }

    fn cursor_down(&mut self, n: u16) {
        self.calls.push(Call::CursorDown(n));
    }

    fn cursor_forward(&mut self, n: u16) {
        self.calls.push(Call::CursorForward(n));
    }

    fn cursor_backward(&mut self, n: u16) {
        self.calls.push(Call::CursorBackward(n));
    }

    fn cursor_next_line(&mut self, n: u16) {
        self.calls.push(Call::CursorNextLine(n));
    }

    fn cursor_previous_line(&mut self, n: u16) {
        self.calls.push(Call::CursorPreviousLine(n));
    }

    fn cursor_horizontal_absolute(&mut self, col: u16) {
        self.calls.push(Call::CursorHorizontalAbsolute(col));
    }

    fn vertical_position_absolute(&mut self, row: u16) {
        self.calls.push(Call::VerticalPositionAbsolute(row));
    }

    fn cursor_position(&mut self, row: u16, col: u16) {
        self.calls.push(Call::CursorPosition(row, col));
    }

    fn horizontal_vertical_position(&mut self, row: u16, col: u16) {
        self.calls.push(Call::HorizontalVerticalPosition(row, col));
    }

    fn save_cursor(&mut self) {
        self.calls.push(Call::SaveCursor);
    }

    fn restore_cursor(&mut self) {
        self.calls.push(Call::RestoreCursor);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.calls.push(Call::SetCursorVisible(visible));
    }

    fn set_origin_mode(&mut self, enabled: bool) {
        self.calls.push(Call::SetOriginMode(enabled));
    }

    fn set_column_mode(&mut self, enabled: bool) {
        self.calls.push(Call::SetColumnMode(enabled));
    }

    fn erase_in_display(&mut self, mode: EraseMode) {
        self.calls.push(Call::EraseInDisplay(mode));
    }

    fn erase_in_line(&mut self, mode: EraseMode) {
        self.calls.push(Call::EraseInLine(mode));
    }

    fn erase_characters(&mut self, n: u16) {
        self.calls.push(Call::EraseCharacters(n));
    }

    fn insert_lines(&mut self, n: u16) {
        self.calls.push(Call::InsertLines(n));
    }

    fn delete_lines(&mut self, n: u16) {
        self.calls.push(Call::DeleteLines(n));
    }

    fn insert_characters(&mut self, n: u16) {
        self.calls.push(Call::InsertCharacters(n));
    }

    fn delete_characters(&mut self, n: u16) {
        self.calls.push(Call::DeleteCharacters(n));
    }

    fn scroll_up(&mut self, n: u16) {
        self.calls.push(Call::ScrollUp(n));
    }

    fn scroll_down(&mut self, n: u16) {
        self.calls.push(Call::ScrollDown(n));
    }

    fn set_scrolling_region(&mut self, top: u16, bottom: Option<u16>) {
        self.calls.push(Call::SetScrollingRegion(top, bottom));
    }

    fn select_graphic_rendition(&mut self, attrs: &[u16]) {
        self.calls.push(Call::SelectGraphicRendition(attrs.to_vec()));
    }

    fn device_attributes(&mut self, params: &[u16]) {
        self.calls.push(Call::DeviceAttributes(params.to_vec()));
    }

    fn device_status_report(&mut self, report: u16) {
        self.calls.push(Call::DeviceStatusReport(report));
    }

    fn index(&mut self) {
        self.calls.push(Call::Index);
    }

    fn next_line(&mut self) {
        self.calls.push(Call::NextLine);
    }

    fn reverse_index(&mut self) {
        self.calls.push(Call::ReverseIndex);
    }

    fn set_tab_stop(&mut self) {
        self.calls.push(Call::SetTabStop);
    }

    fn reset_state(&mut self) {
        self.calls.push(Call::ResetState);
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(Call::SetTitle(title.to_owned()));
    }

    fn operating_system_command(&mut self, data: &[u8]) {
        self.calls.push(Call::OperatingSystemCommand(data.to_vec()));
    }

    fn device_control_string(
        &mut self,
        params: &[u16],
        intermediates: &[u8],
        byte: u8,
        data: &[u8],
    ) {
        self.calls.push(Call::DeviceControlString {
            params: params.to_vec(),
            intermediates: intermediates.to_vec(),
            byte,
            data: data.to_vec(),
        });
    }

    fn flush(&mut self) {
        self.calls.push(Call::Flush);
    }
}
