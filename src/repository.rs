//! Contract storage behind a load/save interface.
//!
//! The engine never owns storage. It asks a [`ContractRepository`] for the
//! current records and hands the updated collection back.

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::config;
use crate::error::{EngineError, Result};
use crate::models::Contract;
use crate::seed;

pub trait ContractRepository {
    fn load(&mut self) -> Result<Vec<Contract>>;
    fn save(&mut self, contracts: &[Contract]) -> Result<()>;
}

impl<R: ContractRepository + ?Sized> ContractRepository for Box<R> {
    fn load(&mut self) -> Result<Vec<Contract>> {
        (**self).load()
    }

    fn save(&mut self, contracts: &[Contract]) -> Result<()> {
        (**self).save(contracts)
    }
}

// ---------------------------------------------------------------------------
// InMemoryRepository
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contracts: Vec<Contract>,
    saves: usize,
}

impl InMemoryRepository {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self {
            contracts,
            saves: 0,
        }
    }

    /// Repository pre-filled with the bundled seed dataset.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(seed::contracts()?))
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Number of completed saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ContractRepository for InMemoryRepository {
    fn load(&mut self) -> Result<Vec<Contract>> {
        Ok(self.contracts.clone())
    }

    fn save(&mut self, contracts: &[Contract]) -> Result<()> {
        self.contracts = contracts.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonFileRepository
// ---------------------------------------------------------------------------

/// Stores contracts as a JSON array on disk (gzip when the path ends in `.gz`).
///
/// A missing file loads the seed dataset. So does a file that no longer
/// parses, after logging the cause; the next save overwrites it.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Repository at the platform data directory (see [`config::default_data_dir`]).
    pub fn at_default_location() -> Self {
        Self::new(config::default_contracts_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_gzip(&self) -> bool {
        self.path.extension().and_then(|e| e.to_str()) == Some("gz")
    }

    fn read_contents(&self) -> Result<String> {
        let mut contents = String::new();
        if self.is_gzip() {
            let file = fs::File::open(&self.path)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            decoder.read_to_string(&mut contents)?;
        } else {
            contents = fs::read_to_string(&self.path)?;
        }
        Ok(contents)
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl ContractRepository for JsonFileRepository {
    fn load(&mut self) -> Result<Vec<Contract>> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no contract store yet; loading seed data");
            return seed::contracts();
        }

        let parsed = self.read_contents().and_then(|text| {
            serde_json::from_str::<Vec<Contract>>(&text).map_err(EngineError::from)
        });

        match parsed {
            Ok(contracts) => Ok(contracts),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "malformed contract store; falling back to seed data"
                );
                seed::contracts()
            }
        }
    }

    fn save(&mut self, contracts: &[Contract]) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_vec_pretty(contracts)?;
        let bytes = if self.is_gzip() {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&json)?;
            encoder.finish()?
        } else {
            json
        };

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| EngineError::Io(e.error))?;

        info!(path = %self.path.display(), contracts = contracts.len(), "contract store saved");
        Ok(())
    }
}
