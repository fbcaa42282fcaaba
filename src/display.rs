use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::cache::{Access, AccessKind, Cache};
use crate::ram::Ram;

pub const RAM_ROW_WIDTH: usize = 4;

fn bit(flag: bool) -> u8 {
    flag as u8
}

fn write_data(out: &mut impl Write, data: &[crate::Word]) -> io::Result<()> {
    write!(out, "Data:")?;
    for v in data {
        write!(out, " {}", v)?;
    }
    writeln!(out)
}

// Trace of one cache operation, in the order things happened.
pub fn write_access(out: &mut impl Write, access: &Access) -> io::Result<()> {
    match access.kind {
        AccessKind::Hit => {
            writeln!(out, "Cache Read {} from address: {}", access.value, access.address)
        },
        AccessKind::Miss => {
            writeln!(out, "Cache miss! Fetching data from memory...")?;
            writeln!(out, "RAM Read {} from address: {}", access.value, access.address)?;
            writeln!(out, "Cache Read {} from address: {}", access.value, access.address)
        },
        AccessKind::WriteThrough => {
            writeln!(out, "Cache Write {} to address: {}", access.value, access.address)?;
            writeln!(out, "RAM Write {} to address: {}", access.value, access.address)
        },
    }
}

pub fn write_cache(out: &mut impl Write, cache: &Cache) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Cache Contents:")?;
    for (i, line) in cache.snapshot().iter().enumerate() {
        writeln!(out, "Line {}: Valid={}, Dirty={}", i, bit(line.valid), bit(line.dirty))?;
        if line.valid {
            write_data(out, &line.data)?;
        }
    }
    Ok(())
}

// Same dump, paced: sleeps `delay` after each status line and each data line.
// Only ever called between cache operations.
pub fn write_cache_with_delay(out: &mut impl Write, cache: &Cache, delay: Duration) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Cache Contents (Delay):")?;
    for (i, line) in cache.snapshot().iter().enumerate() {
        writeln!(out, "Line {}: V={}, D={}", i, bit(line.valid), bit(line.dirty))?;
        out.flush()?;
        thread::sleep(delay);
        if line.valid {
            write_data(out, &line.data)?;
            out.flush()?;
            thread::sleep(delay);
        } else {
            writeln!(out, "No Data")?;
        }
        writeln!(out, "--")?;
    }
    Ok(())
}

pub fn write_ram(out: &mut impl Write, ram: &Ram) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "RAM Contents:")?;
    for (row, cells) in ram.cells().chunks(RAM_ROW_WIDTH).enumerate() {
        write!(out, "Address {}:", row * RAM_ROW_WIDTH)?;
        for c in cells {
            write!(out, " {}", c)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
