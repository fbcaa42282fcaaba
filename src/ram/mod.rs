pub mod serialize;

use crate::error::MemError;
use crate::{Address, Word};

// Anything the cache can fill from and write through to. The cache only ever
// sees this trait, so tests can hand it a double instead of a real Ram.
pub trait BackingStore {
    fn read(&self, address: Address) -> Result<Word, MemError>;
    fn write(&mut self, address: Address, value: Word) -> Result<(), MemError>;
    fn size(&self) -> usize;
}

/// Main memory: a flat array of zero-initialized cells, fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Ram {
    cells: Vec<Word>,
}

impl Ram {
    pub fn new(size: usize) -> Self {
        Ram { cells: vec![0; size] }
    }

    pub fn cells(&self) -> &[Word] {
        &self.cells
    }

    fn index(&self, address: Address) -> Result<usize, MemError> {
        match usize::try_from(address) {
            Ok(i) if i < self.cells.len() => Ok(i),
            _ => Err(MemError::OutOfRange { address, size: self.cells.len() }),
        }
    }
}

impl BackingStore for Ram {
    fn read(&self, address: Address) -> Result<Word, MemError> {
        let i = self.index(address)?;
        Ok(self.cells[i])
    }

    fn write(&mut self, address: Address, value: Word) -> Result<(), MemError> {
        let i = self.index(address)?;
        self.cells[i] = value;
        Ok(())
    }

    fn size(&self) -> usize {
        self.cells.len()
    }
}
