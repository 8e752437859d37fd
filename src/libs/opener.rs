//! Opens files, directories and URLs with the platform's default opener.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::env;
use std::ffi::OsStr;
use std::process::Command;

/// Hands the target to the OS opener without waiting for it.
///
/// Setting `ONIT_NO_OPEN` suppresses the launch entirely, which keeps the
/// tool usable over SSH and in tests.
pub fn open(target: impl AsRef<OsStr>) -> Result<()> {
    if env::var("ONIT_NO_OPEN").is_ok() {
        return Ok(());
    }

    let target = target.as_ref();
    let spawned = match env::consts::OS {
        "macos" => Command::new("open").arg(target).spawn(),
        "windows" => Command::new("cmd").args(["/C", "start", ""]).arg(target).spawn(),
        _ => Command::new("xdg-open").arg(target).spawn(),
    };

    spawned.map_err(|e| msg_error_anyhow!(Message::OpenCommandFailed(e.to_string())))?;
    Ok(())
}
