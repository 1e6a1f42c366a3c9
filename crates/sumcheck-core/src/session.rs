//! One interactive checksum-and-compare cycle.

use crate::checksum;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::prompt;
use crate::render::{Renderer, Verdict, CHECKSUM_LABEL};
use std::io::{self, BufRead, Write};

pub const FILE_PROMPT: &str = "Drag and drop a file to make a checksum for it: ";
pub const COMPARE_PROMPT: &str = "Compare to checksum: ";

pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Ask for a file, print its digest, ask for the expected digest and
    /// print the verdict. Input is read exactly twice.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        renderer: &mut Renderer<W>,
    ) -> Result<Verdict> {
        let algorithm = self.config.algorithm;

        renderer.prompt(FILE_PROMPT).map_err(stdout_err)?;
        let line = prompt::read_line(input)?;
        let path = prompt::dropped_path(&line);
        tracing::debug!(%algorithm, path = %path.display(), "hashing file");

        let digest = checksum::compute(&path, algorithm)?;
        renderer
            .checksum(CHECKSUM_LABEL, &digest)
            .map_err(stdout_err)?;

        renderer.prompt(COMPARE_PROMPT).map_err(stdout_err)?;
        let expected = prompt::read_line(input)?;

        renderer
            .checksum(CHECKSUM_LABEL, &digest)
            .map_err(stdout_err)?;
        renderer
            .checksum(CHECKSUM_LABEL, &expected)
            .map_err(stdout_err)?;
        let verdict = renderer.verdict(&digest, &expected).map_err(stdout_err)?;
        tracing::debug!(?verdict, "comparison done");
        Ok(verdict)
    }
}

fn stdout_err(source: io::Error) -> Error {
    Error::Io {
        path: "<stdout>".into(),
        source,
    }
}
