//! File-backed table.
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{reader, writer, Table};
use crate::error::Error;
use crate::record::Field;

/// Periodic save hook used during long translation runs.
pub trait Checkpoint {
    fn checkpoint(&mut self, table: &Table) -> Result<(), Error>;
}

/// Checkpoint that does nothing.
#[derive(Debug, Default)]
pub struct NoCheckpoint;

impl Checkpoint for NoCheckpoint {
    fn checkpoint(&mut self, _table: &Table) -> Result<(), Error> {
        Ok(())
    }
}

/// The master table file. Loaded fully, saved by full rewrite.
#[derive(Debug, Clone)]
pub struct TableStore {
    path: PathBuf,
}

impl TableStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self, required: &[Field]) -> Result<Table, Error> {
        if !self.path.exists() {
            return Err(Error::MissingFile(self.path.clone()));
        }
        let f = File::open(&self.path)?;
        let table = reader::read(BufReader::new(f), required).map_err(|e| match e {
            Error::EmptyTable(_) => Error::EmptyTable(self.path.clone()),
            e => e,
        })?;
        info!(
            "loaded {} records from {:?} ({} malformed rows)",
            table.len(),
            self.path,
            table.malformed().len()
        );
        Ok(table)
    }

    /// Rewrites the whole file.
    ///
    /// Any failure (destination locked by another program, permissions...) is reported as [Error::Save].
    pub fn save(&self, table: &Table) -> Result<(), Error> {
        let to_save_error = |e: Error| Error::Save {
            path: self.path.clone(),
            source: Box::new(e),
        };
        let f = File::create(&self.path).map_err(|e| to_save_error(e.into()))?;
        writer::write(BufWriter::new(f), table).map_err(to_save_error)?;
        debug!("saved {} records to {:?}", table.len(), self.path);
        Ok(())
    }
}

impl Checkpoint for TableStore {
    fn checkpoint(&mut self, table: &Table) -> Result<(), Error> {
        info!("checkpoint: saving {:?}", self.path);
        self.save(table)
    }
}
