//! `tracing` output for the browser console.
//!
//! The fmt subscriber writes one formatted event per writer; each writer
//! forwards its line to `console.log`, `console.warn` or `console.error`
//! depending on the level prefix.

use std::io::{self, Write};
use tracing::Level;
use wasm_bindgen::JsValue;

#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        let message = JsValue::from_str(line);
        match line.split_whitespace().next() {
            Some("ERROR") => web_sys::console::error_1(&message),
            Some("WARN") => web_sys::console::warn_1(&message),
            _ => web_sys::console::log_1(&message),
        }
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Install the global subscriber. Debug builds log at DEBUG, release at INFO.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(e) = installed {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[touchstone][warn] tracing already initialised: {e}"
        )));
    }
}
