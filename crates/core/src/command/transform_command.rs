use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::error::{Error, Result};

/// A fully assembled jscodeshift invocation
#[derive(Debug, Clone)]
pub struct TransformCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl TransformCommand {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Render the invocation for display and logging.
    ///
    /// Arguments containing spaces are single-quoted. This string is
    /// never handed to a shell; execution goes through the argument
    /// list directly.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.display().to_string();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Run the tool to completion, capturing stdout and stderr.
    ///
    /// Blocks the calling thread until the child exits; there is no
    /// timeout, so a hung tool hangs the caller. A non-zero exit is
    /// fatal and carries the child's exit status.
    pub fn execute(&self) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(Error::ProcessFailed {
                command: self.to_shell_command(),
                status: output.status,
            });
        }

        Ok(merge_streams(&output))
    }
}

// stdout first, then stderr. Error markers land on stdout but syntax
// detail can appear on either stream, so both are scanned.
fn merge_streams(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }
    text
}
