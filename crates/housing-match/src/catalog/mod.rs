//! Candidate catalogs handed to the matching engine.

mod parser;

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::matching::Candidate;

/// Source of candidate records so the match service can be exercised in isolation.
pub trait CandidateCatalog: Send + Sync {
    fn candidates(&self) -> Result<Vec<Candidate>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read candidate catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("candidate catalog unavailable: {0}")]
    Unavailable(String),
}

/// Catalog held in memory, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    candidates: Vec<Candidate>,
}

impl StaticCatalog {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_csv_reader(file)?;
        info!(path = %path.display(), candidates = catalog.len(), "candidate catalog loaded");
        Ok(catalog)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let candidates = parser::parse_candidates(reader)?;
        Ok(Self::new(candidates))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl CandidateCatalog for StaticCatalog {
    fn candidates(&self) -> Result<Vec<Candidate>, CatalogError> {
        Ok(self.candidates.clone())
    }
}
