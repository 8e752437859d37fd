//! Copies text to the system clipboard by piping it to the platform's
//! clipboard command:
//! - macOS: pbcopy
//! - Linux: xclip, falling back to xsel
//! - Windows: clip

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
pub fn copy(text: &str) -> Result<()> {
    pipe_to("pbcopy", &[], text)
}

#[cfg(target_os = "linux")]
pub fn copy(text: &str) -> Result<()> {
    pipe_to("xclip", &["-selection", "clipboard"], text).or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
}

#[cfg(target_os = "windows")]
pub fn copy(text: &str) -> Result<()> {
    pipe_to("clip", &[], text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub fn copy(_text: &str) -> Result<()> {
    Err(msg_error_anyhow!(Message::ClipboardUnavailable))
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| msg_error_anyhow!(Message::ClipboardCommandFailed(format!("{}: {}", program, e))))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(msg_error_anyhow!(Message::ClipboardCommandFailed(program.to_string())))
    }
}
