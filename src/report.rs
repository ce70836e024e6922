//! User-facing messages and their exit codes
//!
//! Progress goes to `out`, problems go to `err`. Logging is separate and
//! always written to stderr by the tracing subscriber.

use std::io::{self, Write};

use crate::command::Outcome;
use crate::version::error::AuditError;

pub struct Reporter<O, E> {
    out: O,
    err: E,
    registry_name: &'static str,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter writing to the process stdout/stderr
    pub fn stdio(registry_name: &'static str) -> Self {
        Self::new(io::stdout(), io::stderr(), registry_name)
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, registry_name: &'static str) -> Self {
        Self {
            out,
            err,
            registry_name,
        }
    }

    pub fn version(&mut self, version: &str) -> io::Result<()> {
        writeln!(self.out, "Found internal version: {}", version)
    }

    /// Print the outcome and return its exit code
    pub fn outcome(&mut self, outcome: &Outcome) -> io::Result<u8> {
        match outcome {
            Outcome::Consistent { .. } => {}
            Outcome::Unreleased { published, .. } => {
                writeln!(
                    self.out,
                    "Found all {} versions: {}",
                    self.registry_name, published
                )?;
            }
            Outcome::AlreadyPublished { published, .. } => {
                writeln!(
                    self.out,
                    "Found all {} versions: {}",
                    self.registry_name, published
                )?;
                writeln!(
                    self.err,
                    "An identical release exists on {}; bump versions before proceeding",
                    self.registry_name
                )?;
            }
        }
        Ok(outcome.exit_code())
    }

    /// Print the error and return its exit code
    pub fn error(&mut self, error: &AuditError) -> io::Result<u8> {
        match error {
            AuditError::RegistryUnavailable(source) => {
                writeln!(
                    self.err,
                    "A problem occurred when checking {} versions: {}",
                    self.registry_name, source
                )?;
            }
            AuditError::Config(_) => writeln!(self.err, "{}", error)?,
            _ => {
                writeln!(self.err, "Repository versions are not consistent")?;
                writeln!(self.err, "{}", error)?;
            }
        }
        Ok(error.exit_code())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
