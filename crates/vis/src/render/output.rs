//! Output streams the host document is written to.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::render::OutputStream;
use crate::render::error::RenderError;

const FILE_NAME: &str = "index.html";

/// Writes the host document to `index.html` in a directory.
pub struct OutputFile {
    file: BufWriter<File>,
}

impl OutputFile {
    /// Creates or truncates `index.html` in `path`.
    pub fn new(path: &Path) -> Result<OutputFile, RenderError> {
        let path = path.join(FILE_NAME);
        let file = File::create(path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }

    /// Flushes buffered output to disk.
    pub fn finish(mut self) -> Result<(), RenderError> {
        self.file.flush()?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.push_str(data);
        Ok(())
    }
}
