use std::ffi::OsString;
use std::io;
use std::process::Command;

use anyhow::{Context, Result, anyhow, bail};

/// Resolves issue references to titles through the GitHub CLI.
#[derive(Clone, Debug)]
pub struct IssueTitleFetcher {
    program: OsString,
}

impl Default for IssueTitleFetcher {
    fn default() -> Self {
        Self::with_program("gh")
    }
}

impl IssueTitleFetcher {
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn fetch(&self, reference: &str) -> Result<String> {
        let reference = reference.trim();
        tracing::debug!(reference, "looking up issue title");
        let out = match Command::new(&self.program)
            .args(["issue", "view", reference, "--json", "title", "-q", ".title"])
            .output()
        {
            Ok(out) => out,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                bail!("gh: command not found (install the GitHub CLI)")
            }
            Err(err) => return Err(err).context("run gh"),
        };

        let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&out.stderr));
        let combined = combined.trim();

        if !out.status.success() {
            if combined.is_empty() {
                return Err(anyhow!("gh exited with {}", out.status));
            }
            return Err(anyhow!("gh: {}", combined));
        }

        let title = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if title.is_empty() {
            bail!("issue title is empty");
        }
        Ok(title)
    }
}

#[cfg(test)]
#[path = "tests/issue_tests.rs"]
mod tests;
