use std::io::{BufRead, Write};
use std::time::Duration;

use serde::Serialize;

use crate::cache::serialize::CacheData;
use crate::cache::{Access, AccessKind, Cache};
use crate::command::Command;
use crate::config::Geometry;
use crate::display;
use crate::error::{ConfigError, MemError, SessionError};
use crate::ram::serialize::RamData;
use crate::ram::Ram;

/// Tallies kept while replaying commands. Derived from the access records,
/// the cache only knows its cycle count.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub memory_errors: u64,
    pub invalid_commands: u64,
}

impl Stats {
    fn record(&mut self, access: &Access) {
        match access.kind {
            AccessKind::Hit => self.hits += 1,
            AccessKind::Miss => self.misses += 1,
            AccessKind::WriteThrough => self.writes += 1,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub cycle_count: u64,
    pub stats: Stats,
}

#[derive(Serialize, Debug)]
pub struct Dump {
    pub summary: Summary,
    pub cache: CacheData,
    pub ram: RamData,
}

pub struct Session {
    ram: Ram,
    cache: Cache,
    stats: Stats,
}

impl Session {
    pub fn new(geometry: Geometry) -> Result<Self, ConfigError> {
        geometry.validate()?;
        Ok(Session {
            ram: Ram::new(geometry.ram_size),
            cache: Cache::new(geometry.num_lines, geometry.line_size),
            stats: Stats::default(),
        })
    }

    pub fn ram(&self) -> &Ram { &self.ram }

    pub fn cache(&self) -> &Cache { &self.cache }

    pub fn stats(&self) -> Stats { self.stats }

    pub fn summary(&self) -> Summary {
        Summary {
            cycle_count: self.cache.cycle_count(),
            stats: self.stats,
        }
    }

    pub fn dump(&self) -> Dump {
        Dump {
            summary: self.summary(),
            cache: self.cache.save_state(),
            ram: self.ram.save_state(),
        }
    }

    pub fn read(&mut self, address: crate::Address) -> Result<Access, MemError> {
        let access = self.cache.read(address, &self.ram)?;
        self.stats.record(&access);
        Ok(access)
    }

    pub fn write(&mut self, address: crate::Address, value: crate::Word) -> Result<Access, MemError> {
        let access = self.cache.write(address, value, &mut self.ram)?;
        self.stats.record(&access);
        Ok(access)
    }

    // Runs one command. Memory errors go to `err` and the session carries on;
    // only I/O failures on the sinks abort.
    pub fn execute<I: BufRead, W: Write, E: Write>(
        &mut self,
        command: Command,
        input: &mut I,
        out: &mut W,
        err: &mut E,
    ) -> Result<(), SessionError> {
        tracing::debug!(?command, "executing");
        let result = match command {
            Command::Read(address) => self.read(address),
            Command::Write(address, value) => self.write(address, value),
            Command::DisplayCache => return Ok(display::write_cache(out, &self.cache)?),
            Command::DisplayCacheDelay(ms) => {
                return Ok(display::write_cache_with_delay(out, &self.cache, Duration::from_millis(ms))?)
            },
            Command::DisplayRam => return Ok(display::write_ram(out, &self.ram)?),
            Command::Wait => {
                write!(out, "Press Enter to continue...")?;
                out.flush()?;
                let mut discard = String::new();
                input.read_line(&mut discard)?;
                return Ok(());
            },
        };
        match result {
            Ok(access) => display::write_access(out, &access)?,
            Err(e) => {
                tracing::warn!(error = %e, ?command, "memory access rejected");
                self.stats.memory_errors += 1;
                writeln!(err, "Error: {}", e)?;
            },
        }
        Ok(())
    }

    /// Replays a command script line by line and finishes with the cycle count.
    /// `input` is where `WAIT` takes its line from.
    pub fn run<C: BufRead, I: BufRead, W: Write, E: Write>(
        &mut self,
        commands: C,
        input: &mut I,
        out: &mut W,
        err: &mut E,
    ) -> Result<Summary, SessionError> {
        for (n, line) in commands.lines().enumerate() {
            let line = line?;
            match Command::parse_line(&line) {
                Ok(Some(command)) => self.execute(command, input, out, err)?,
                Ok(None) => (),
                Err(e) => {
                    tracing::warn!(line = n + 1, error = %e, "skipping invalid command");
                    self.stats.invalid_commands += 1;
                    writeln!(err, "Invalid command: {}", line.trim())?;
                },
            }
        }
        let summary = self.summary();
        writeln!(out)?;
        writeln!(out, "Cycle count: {}", summary.cycle_count)?;
        tracing::info!(?summary, "session finished");
        Ok(summary)
    }
}
