//! Clipboard integration for copying the selected representation.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{anyhow, bail, Context};
use wl_clipboard_rs::copy::{MimeType, Options, ServeRequests, Source};

/// Copy a text value to the Wayland clipboard.
///
/// Prefers the `wl-copy` command (provided by the wl-clipboard package,
/// keeps serving the selection after this process exits); falls back to
/// wl-clipboard-rs when the command path fails.
pub fn copy_text(value: &str) -> anyhow::Result<()> {
    match copy_via_command(value) {
        Ok(()) => {
            tracing::debug!("copied via wl-copy");
            Ok(())
        }
        Err(cmd_err) => {
            tracing::debug!(%cmd_err, "wl-copy unavailable, falling back to wl-clipboard-rs");
            copy_via_library(value).map_err(|lib_err| {
                anyhow!("wl-copy failed: {cmd_err}; wl-clipboard-rs failed: {lib_err}")
            })
        }
    }
}

/// Copy by shelling out to the wl-copy command.
fn copy_via_command(value: &str) -> anyhow::Result<()> {
    let mut child = Command::new("wl-copy")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawning wl-copy")?;

    child
        .stdin
        .take()
        .context("opening wl-copy stdin")?
        .write_all(value.as_bytes())
        .context("writing to wl-copy")?;

    let status = child.wait().context("waiting for wl-copy")?;
    if !status.success() {
        bail!("wl-copy exited with {status}");
    }
    Ok(())
}

/// Copy using the wl-clipboard-rs library.
fn copy_via_library(value: &str) -> anyhow::Result<()> {
    let mut opts = Options::new();
    // Keep the selection alive for one paste after this process exits.
    opts.serve_requests(ServeRequests::Only(1));
    opts.copy(Source::Bytes(value.as_bytes().into()), MimeType::Text)
        .context("wl-clipboard-rs copy")?;
    Ok(())
}
