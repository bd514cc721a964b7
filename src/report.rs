use std::io;
use std::io::{LineWriter, Stdout, Write};

/// What a single demonstration observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An absence marker where a value was required, `expr` is the probed
    /// call chain as written in the scenario source.
    Bug { expr: &'static str },
    /// The probed chain completed without an absence marker.
    Clean { expr: &'static str },
}

impl Outcome {
    pub fn bug(expr: &'static str) -> Self {
        Outcome::Bug { expr }
    }

    pub fn clean(expr: &'static str) -> Self {
        Outcome::Clean { expr }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    IO(#[from] io::Error),
}

/// Renders outcomes as console diagnostics, one line per outcome.
///
/// The bug line format is fixed: detection tools compare against it
/// verbatim.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<LineWriter<Stdout>> {
    /// Line-buffered stdout reporter used by the fixture binary.
    pub fn stdout() -> Self {
        Reporter::new(LineWriter::new(io::stdout()))
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    /// Print the diagnostic line for `outcome`.
    pub fn report(&mut self, outcome: &Outcome) -> Result<(), ReportError> {
        match outcome {
            Outcome::Bug { expr } => {
                writeln!(self.out, "Bug: {expr} returned a null pointer")?
            }
            Outcome::Clean { expr } => {
                writeln!(self.out, "{expr} completed without a null pointer")?
            }
        }
        Ok(())
    }

    /// Give the sink back, test helper.
    pub fn into_inner(self) -> W {
        self.out
    }
}
