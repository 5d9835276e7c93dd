use ansiterm_escape::{EraseMode, EventHandler, Parser, State};

/// Handler that writes every call as a short line of text.
#[derive(Default)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub flushes: usize,
}

impl Transcript {
    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl EventHandler for Transcript {
    fn print(&mut self, c: char) {
        self.push(format!("print {c:?}"));
    }

    fn execute(&mut self, byte: u8) {
        self.push(format!("execute {byte:#04x}"));
    }

    fn cursor_up(&mut self, n: u16) {
        self.push(format!("cursor_up {n}"));
    }

    fn cursor_down(&mut self, n: u16) {
        self.push(format!("cursor_down {n}"));
    }

    fn cursor_forward(&mut self, n: u16) {
        self.push(format!("cursor_forward {n}"));
    }

    fn cursor_backward(&mut self, n: u16) {
        self.push(format!("cursor_backward {n}"));
    }

    fn cursor_next_line(&mut self, n: u16) {
        self.push(format!("cursor_next_line {n}"));
    }

    fn cursor_previous_line(&mut self, n: u16) {
        self.push(format!("cursor_previous_line {n}"));
    }

    fn cursor_horizontal_absolute(&mut self, col: u16) {
        self.push(format!("cursor_horizontal_absolute {col}"));
    }

    fn vertical_position_absolute(&mut self, row: u16) {
        self.push(format!("vertical_position_absolute {row}"));
    }

    fn cursor_position(&mut self, row: u16, col: u16) {
        self.push(format!("cursor_position {row} {col}"));
    }

    fn horizontal_vertical_position(&mut self, row: u16, col: u16) {
        self.push(format!("horizontal_vertical_position {row} {col}"));
    }

    fn save_cursor(&mut self) {
        self.push("save_cursor".into());
    }

    fn restore_cursor(&mut self) {
        self.push("restore_cursor".into());
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.push(format!("set_cursor_visible {visible}"));
    }

    fn set_origin_mode(&mut self, enabled: bool) {
        self.push(format!("set_origin_mode {enabled}"));
    }

    fn set_column_mode(&mut self, enabled: bool) {
        self.push(format!("set_column_mode {enabled}"));
    }

    fn erase_in_display(&mut self, mode: EraseMode) {
        self.push(format!("erase_in_display {mode:?}"));
    }

    fn erase_in_line(&mut self, mode: EraseMode) {
        self.push(format!("erase_in_line {mode:?}"));
    }

    fn erase_characters(&mut self, n: u16) {
        self.push(format!("erase_characters {n}"));
    }

    fn insert_lines(&mut self, n: u16) {
        self.push(format!("insert_lines {n}"));
    }

    fn delete_lines(&mut self, n: u16) {
        self.push(format!("delete_lines {n}"));
    }

    fn insert_characters(&mut self, n: u16) {
        self.push(format!("insert_characters {n}"));
    }

    fn delete_characters(&mut self, n: u16) {
        self.push(format!("delete_characters {n}"));
    }

    fn scroll_up(&mut self, n: u16) {
        self.push(format!("scroll_up {n}"));
    }

    fn scroll_down(&mut self, n: u16) {
        self.push(format!("scroll_down {n}"));
    }

    fn set_scrolling_region(&mut self, top: u16, bottom: Option<u16>) {
        self.push(format!("set_scrolling_region {top} {bottom:?}"));
    }

    fn select_graphic_rendition(&mut self, attrs: &[u16]) {
        self.push(format!("select_graphic_rendition {attrs:?}"));
    }

    fn device_attributes(&mut self, params: &[u16]) {
        self.push(format!("device_attributes {params:?}"));
    }

    fn device_status_report(&mut self, report: u16) {
        self.push(format!("device_status_report {report}"));
    }

    fn index(&mut self) {
        self.push("index".into());
    }

    fn next_line(&mut self) {
        self.push("next_line".into());
    }

    fn reverse_index(&mut self) {
        self.push("reverse_index".into());
    }

    fn set_tab_stop(&mut self) {
        self.push("set_tab_stop".into());
    }

    fn reset_state(&mut self) {
        self.push("reset_state".into());
    }

    fn set_title(&mut self, title: &str) {
        self.push(format!("set_title {title:?}"));
    }

    fn operating_system_command(&mut self, data: &[u8]) {
        self.push(format!(
            "operating_system_command {:?}",
            String::from_utf8_lossy(data)
        ));
    }

    fn device_control_string(
        &mut self,
        params: &[u16],
        intermediates: &[u8],
        byte: u8,
        data: &[u8],
    ) {
        self.push(format!(
            "device_control_string {params:?} {:?} {} {:?}",
            String::from_utf8_lossy(intermediates),
            byte as char,
            String::from_utf8_lossy(data)
        ));
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Feed `bytes` to a parser starting in `state`; returns the end state and
/// the recorded calls.
#[allow(dead_code)]
pub fn run(state: State, bytes: &[u8]) -> (State, Vec<String>) {
    let mut parser = Parser::with_state(state);
    let mut transcript = Transcript::default();
    parser.advance(bytes, &mut transcript);
    (parser.state(), transcript.lines)
}

#[allow(dead_code)]
pub fn calls(bytes: &[u8]) -> Vec<String> {
    run(State::Ground, bytes).1
}
