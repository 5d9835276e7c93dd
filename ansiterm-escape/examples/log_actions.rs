//! Print every action decoded from a file, or from stdin when no path is
//! given.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p ansiterm-escape --example log_actions -- <path>
//! ```

use std::{
    env,
    fs::File,
    io::{self, Read},
};

use ansiterm_escape::{EraseMode, EventHandler, Parser};
use anyhow::{Context, Result};

#[derive(Default)]
struct LoggingHandler {
    seq: usize,
}

impl LoggingHandler {
    fn log(&mut self, action: std::fmt::Arguments<'_>) {
        self.seq += 1;
        println!("{:04}: {action}", self.seq);
    }
}

impl EventHandler for LoggingHandler {
    fn print(&mut self, c: char) {
        self.log(format_args!("print {c:?}"));
    }

    fn execute(&mut self, byte: u8) {
        self.log(format_args!("execute {byte:#04x}"));
    }

    fn cursor_up(&mut self, n: u16) {
        self.log(format_args!("cursor_up {n}"));
    }

    fn cursor_down(&mut self, n: u16) {
        self.log(format_args!("cursor_down {n}"));
    }

    fn cursor_forward(&mut self, n: u16) {
        self.log(format_args!("cursor_forward {n}"));
    }

    fn cursor_backward(&mut self, n: u16) {
        self.log(format_args!("cursor_backward {n}"));
    }

    fn cursor_position(&mut self, row: u16, col: u16) {
        self.log(format_args!("cursor_position {row}:{col}"));
    }

    fn erase_in_display(&mut self, mode: EraseMode) {
        self.log(format_args!("erase_in_display {mode:?}"));
    }

    fn erase_in_line(&mut self, mode: EraseMode) {
        self.log(format_args!("erase_in_line {mode:?}"));
    }

    fn scroll_up(&mut self, n: u16) {
        self.log(format_args!("scroll_up {n}"));
    }

    fn scroll_down(&mut self, n: u16) {
        self.log(format_args!("scroll_down {n}"));
    }

    fn set_scrolling_region(&mut self, top: u16, bottom: Option<u16>) {
        self.log(format_args!("set_scrolling_region {top}..{bottom:?}"));
    }

    fn select_graphic_rendition(&mut self, attrs: &[u16]) {
        self.log(format_args!("select_graphic_rendition {attrs:?}"));
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.log(format_args!("set_cursor_visible {visible}"));
    }

    fn set_title(&mut self, title: &str) {
        self.log(format_args!("set_title {title:?}"));
    }

    fn operating_system_command(&mut self, data: &[u8]) {
        self.log(format_args!(
            "operating_system_command {:?}",
            String::from_utf8_lossy(data)
        ));
    }

    fn flush(&mut self) {
        log::trace!("chunk consumed after {} actions", self.seq);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut input: Box<dyn Read> = match env::args().nth(1) {
        Some(path) => Box::new(
            File::open(&path)
                .with_context(|| format!("failed to open {path}"))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let mut parser = Parser::new();
    let mut handler = LoggingHandler::default();
    let mut buf = [0u8; 4096];

    loop {
        let read = input.read(&mut buf).context("failed to read input")?;
        if read == 0 {
            break;
        }
        parser.advance(&buf[..read], &mut handler);
    }

    Ok(())
}
