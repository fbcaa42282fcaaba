pub mod serialize;

use crate::error::MemError;
use crate::ram::BackingStore;
use crate::{Address, Word};

#[derive(Clone, Debug, PartialEq)]
pub struct CacheLine {
    pub valid: bool,
    pub dirty: bool, // set by any write through this line, never cleared
    pub data: Vec<Word>,
}

impl CacheLine {
    pub fn new_cold(line_size: usize) -> Self {
        CacheLine {
            valid: false,
            dirty: false,
            data: vec![0; line_size],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    Hit,
    Miss,
    WriteThrough,
}

/// What a single cache operation did. The cache itself stays silent; callers
/// render these however they like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Access {
    pub address: Address,
    pub value: Word,
    pub line: usize,
    pub slot: usize,
    pub kind: AccessKind,
}

/// Direct-mapped cache with no address tags.
///
/// An address lives in line `address % num_lines` at slot `address % line_size`.
/// A read hits whenever that line is valid, whichever address filled it, so
/// two addresses sharing both line and slot alias the same storage. Lines go
/// from invalid to valid and never back.
#[derive(Clone, Debug)]
pub struct Cache {
    num_lines: usize,
    line_size: usize,
    lines: Vec<CacheLine>,
    cycle_count: u64, // one per successful read or write, hit or miss
}

impl Cache {
    pub fn new(num_lines: usize, line_size: usize) -> Self {
        Cache {
            num_lines,
            line_size,
            lines: vec![CacheLine::new_cold(line_size); num_lines],
            cycle_count: 0,
        }
    }

    pub fn num_lines(&self) -> usize { self.num_lines }

    pub fn line_size(&self) -> usize { self.line_size }

    pub fn lines(&self) -> &[CacheLine] { &self.lines }

    // Splits an address into (line, slot). Checked against the store first so
    // a rejected access never reaches the counter or a line.
    fn locate<S: BackingStore + ?Sized>(&self, address: Address, store: &S) -> Result<(usize, usize), MemError> {
        let a = usize::try_from(address).map_err(|_| MemError::InvalidAddress { address })?;
        if a >= store.size() {
            return Err(MemError::OutOfRange { address, size: store.size() });
        }
        Ok((a % self.num_lines, a % self.line_size))
    }

    pub fn read<S: BackingStore + ?Sized>(&mut self, address: Address, store: &S) -> Result<Access, MemError> {
        let (line, slot) = self.locate(address, store)?;
        if self.lines[line].valid {
            self.cycle_count += 1;
            let value = self.lines[line].data[slot];
            return Ok(Access { address, value, line, slot, kind: AccessKind::Hit });
        }
        // fetch before touching the line so a failing store leaves it cold
        let value = store.read(address)?;
        self.cycle_count += 1;
        let cache_line = &mut self.lines[line];
        cache_line.valid = true;
        cache_line.data[slot] = value;
        Ok(Access { address, value, line, slot, kind: AccessKind::Miss })
    }

    pub fn write<S: BackingStore + ?Sized>(&mut self, address: Address, value: Word, store: &mut S) -> Result<Access, MemError> {
        let (line, slot) = self.locate(address, &*store)?;
        store.write(address, value)?;
        let cache_line = &mut self.lines[line];
        cache_line.valid = true;
        cache_line.dirty = true;
        cache_line.data[slot] = value;
        self.cycle_count += 1;
        Ok(Access { address, value, line, slot, kind: AccessKind::WriteThrough })
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn reset_cycle_count(&mut self) {
        self.cycle_count = 0;
    }
}
