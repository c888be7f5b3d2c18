//! Host-side output capabilities for export artifacts.
//!
//! The engine only produces bytes and HTML. Saving files, showing documents
//! and printing belong to an [`OutputSink`] supplied by the host.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::config;
use crate::error::{EngineError, Result};

/// Proof that a presented document finished rendering.
///
/// Sinks construct these in [`OutputSink::present_document`], once the
/// surface reports the content as laid out. [`OutputSink::print`] consumes
/// it, so the export pipeline never prints before the document is ready.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderReady {
    document_id: usize,
}

impl RenderReady {
    /// For [`OutputSink`] implementations only. A token built anywhere
    /// else carries no rendering guarantee.
    #[doc(hidden)]
    pub fn new(document_id: usize) -> Self {
        Self { document_id }
    }

    pub fn document_id(&self) -> usize {
        self.document_id
    }
}

pub trait OutputSink {
    /// Persist a downloadable artifact.
    fn write_artifact(&mut self, bytes: &[u8], file_name: &str, mime: &str) -> Result<()>;

    /// Show a complete HTML document and block until it has rendered.
    fn present_document(&mut self, html: &str) -> Result<RenderReady>;

    /// Print a document previously confirmed ready.
    fn print(&mut self, ready: RenderReady) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_artifact(&mut self, bytes: &[u8], file_name: &str, mime: &str) -> Result<()> {
        (**self).write_artifact(bytes, file_name, mime)
    }

    fn present_document(&mut self, html: &str) -> Result<RenderReady> {
        (**self).present_document(html)
    }

    fn print(&mut self, ready: RenderReady) -> Result<()> {
        (**self).print(ready)
    }
}

// ---------------------------------------------------------------------------
// DirectorySink
// ---------------------------------------------------------------------------

/// Writes artifacts into a directory.
///
/// Files are written to a temp file in the same directory and renamed into
/// place, so an interrupted export never leaves a truncated artifact behind.
/// Presented reports are saved as HTML; printing is left to whoever opens
/// them, so [`print`](OutputSink::print) only records the request.
pub struct DirectorySink {
    dir: PathBuf,
    documents: Vec<PathBuf>,
    printed: Vec<PathBuf>,
}

impl DirectorySink {
    /// Create a sink writing into `dir`, creating it if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            documents: Vec::new(),
            printed: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Report files whose print was requested.
    pub fn printed(&self) -> &[PathBuf] {
        &self.printed
    }

    fn write_atomic(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let dest = self.dir.join(file_name);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.persist(&dest).map_err(|e| EngineError::Io(e.error))?;
        Ok(dest)
    }
}

impl OutputSink for DirectorySink {
    fn write_artifact(&mut self, bytes: &[u8], file_name: &str, mime: &str) -> Result<()> {
        let path = self.write_atomic(file_name, bytes)?;
        info!(path = %path.display(), mime, bytes = bytes.len(), "export artifact written");
        Ok(())
    }

    fn present_document(&mut self, html: &str) -> Result<RenderReady> {
        let path = self.write_atomic(config::REPORT_FILE_NAME, html.as_bytes())?;
        info!(path = %path.display(), mime = config::HTML_MIME, "report document saved");
        self.documents.push(path);
        Ok(RenderReady::new(self.documents.len() - 1))
    }

    fn print(&mut self, ready: RenderReady) -> Result<()> {
        let path = self.documents.get(ready.document_id()).cloned().ok_or_else(|| {
            EngineError::Output(format!("unknown document {}", ready.document_id()))
        })?;
        info!(path = %path.display(), "report ready to print");
        self.printed.push(path);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: String,
}

/// Keeps artifacts and documents in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub artifacts: Vec<Artifact>,
    pub documents: Vec<String>,
    /// Indices into `documents`, in print order.
    pub printed: Vec<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for MemorySink {
    fn write_artifact(&mut self, bytes: &[u8], file_name: &str, mime: &str) -> Result<()> {
        self.artifacts.push(Artifact {
            bytes: bytes.to_vec(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
        });
        Ok(())
    }

    fn present_document(&mut self, html: &str) -> Result<RenderReady> {
        self.documents.push(html.to_string());
        Ok(RenderReady::new(self.documents.len() - 1))
    }

    fn print(&mut self, ready: RenderReady) -> Result<()> {
        if ready.document_id() >= self.documents.len() {
            return Err(EngineError::Output(format!(
                "unknown document {}",
                ready.document_id()
            )));
        }
        self.printed.push(ready.document_id());
        Ok(())
    }
}
