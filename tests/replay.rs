use std::io::Cursor;

use cachesim::{AccessKind, BackingStore, Cache, Geometry, MemError, Ram, Session};

fn replay(geometry: Geometry, script: &str) -> (Session, String, String) {
    let mut session = Session::new(geometry).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    session
        .run(Cursor::new(script), &mut Cursor::new(""), &mut out, &mut err)
        .unwrap();
    (session, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn write_then_aliased_read() {
    let (session, out, err) = replay(Geometry::default(), "W 5 42\nR 5\nR 21\n");
    assert!(err.is_empty());
    assert_eq!(
        out,
        "Cache Write 42 to address: 5\n\
         RAM Write 42 to address: 5\n\
         Cache Read 42 from address: 5\n\
         Cache Read 42 from address: 21\n\
         \n\
         Cycle count: 3\n"
    );
    let line = &session.cache().lines()[5];
    assert!(line.valid && line.dirty);
    assert_eq!(line.data, vec![0, 42, 0, 0]);
    assert_eq!(session.ram().read(5), Ok(42));
    assert_eq!(session.ram().read(21), Ok(0));
    assert_eq!(session.stats().hits, 2);
    assert_eq!(session.stats().misses, 0);
}

#[test]
fn cold_reads_fetch_from_memory() {
    let (session, out, _) = replay(Geometry::default(), "R 3\nR 3\nDISPLAYCACHE\n");
    assert!(out.starts_with(
        "Cache miss! Fetching data from memory...\n\
         RAM Read 0 from address: 3\n\
         Cache Read 0 from address: 3\n\
         Cache Read 0 from address: 3\n"
    ));
    assert!(out.contains("Line 3: Valid=1, Dirty=0\nData: 0 0 0 0\n"));
    assert!(out.contains("Line 4: Valid=0, Dirty=0\nLine 5"));
    assert_eq!(session.stats().misses, 1);
    assert_eq!(session.stats().hits, 1);
}

#[test]
fn counter_matches_successful_calls() {
    let script = "W 0 1\nW 31 2\nR 0\nR 16\nR 7\nR 31\nW 40 3\nR 32\nR -2\n";
    let (session, out, _) = replay(Geometry::default(), script);
    assert_eq!(session.cache().cycle_count(), 6);
    assert_eq!(session.stats().memory_errors, 3);
    assert!(out.ends_with("Cycle count: 6\n"));
}

#[test]
fn comments_blanks_and_junk() {
    let script = "# setup\n\nW 1 2 3\nR\nDISPLAYRAM\n";
    let (session, out, err) = replay(Geometry { ram_size: 8, ..Geometry::default() }, script);
    assert_eq!(session.stats().invalid_commands, 2);
    assert_eq!(err, "Invalid command: W 1 2 3\nInvalid command: R\n");
    assert!(out.contains("RAM Contents:\nAddress 0: 0 0 0 0\nAddress 4: 0 0 0 0\n"));
}

#[test]
fn every_address_reads_back_what_was_written() {
    let mut ram = Ram::new(32);
    for a in 0..32 {
        let mut cache = Cache::new(16, 4);
        cache.write(a, (a * 3) as i32 - 7, &mut ram).unwrap();
        assert_eq!(ram.read(a), Ok((a * 3) as i32 - 7));
        let access = cache.read(a, &ram).unwrap();
        assert_eq!(access.kind, AccessKind::Hit);
        assert_eq!(access.value, (a * 3) as i32 - 7);
    }
}

#[test]
fn boundary_addresses_are_rejected() {
    let mut cache = Cache::new(16, 4);
    let mut ram = Ram::new(32);
    assert_eq!(cache.read(-1, &ram), Err(MemError::InvalidAddress { address: -1 }));
    assert_eq!(cache.write(32, 1, &mut ram), Err(MemError::OutOfRange { address: 32, size: 32 }));
    assert_eq!(cache.cycle_count(), 0);
    assert!(cache.snapshot().iter().all(|l| !l.valid && !l.dirty && l.data == vec![0; 4]));
    assert!(ram.cells().iter().all(|&c| c == 0));
}

#[test]
fn odd_geometry() {
    // 7 lines of 3: address 22 sits in line 1, slot 1; so does 1
    let g = Geometry { ram_size: 30, num_lines: 7, line_size: 3 };
    let (session, out, _) = replay(g, "W 1 5\nR 22\nR 8\n");
    assert!(out.contains("Cache Read 5 from address: 22"));
    // 8 is line 1, slot 2: still a hit, still the cold zero
    assert!(out.contains("Cache Read 0 from address: 8"));
    assert_eq!(session.cache().cycle_count(), 3);
}
