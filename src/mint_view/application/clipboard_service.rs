use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Pipes text into the platform clipboard tool
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            pipe_to("pbcopy", &[], text)
        }

        #[cfg(target_os = "linux")]
        {
            pipe_to("xclip", &["-selection", "clipboard"], text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            let _ = text;
            Err(anyhow::anyhow!("Clipboard not supported on this platform"))
        }
    }
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {program}"))?;
    if !status.success() {
        anyhow::bail!("{program} exited with {status}");
    }
    Ok(())
}
