//! The snapshot store: save a registry to a file and restore it.
//!
//! ```text
//!            save()                         load()
//! registry ─────────→ file (overwritten)   file ─────────→ registry
//!                                                 │
//!                                                 ├─ clear_rooms()
//!                                                 └─ per line: decode → add_room → check_in
//! ```
//!
//! Neither direction is transactional. A save that fails halfway leaves
//! a truncated file, and a load that fails halfway leaves the registry
//! holding only the rooms restored before the bad line. Callers recover
//! from a failed load by loading a known-good snapshot.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use innkeeper_room::RoomRegistry;

use crate::{LineCodec, RecordCodec, RoomRecord, SnapshotError};

/// Reads and writes registry snapshots at a fixed path.
///
/// Generic over the [`RecordCodec`]; `SnapshotStore::new` uses the
/// comma-separated [`LineCodec`].
#[derive(Debug, Clone)]
pub struct SnapshotStore<C = LineCodec> {
    path: PathBuf,
    codec: C,
}

impl SnapshotStore<LineCodec> {
    /// Creates a store for `path` using the comma-separated format.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, LineCodec)
    }
}

impl<C: RecordCodec> SnapshotStore<C> {
    /// Creates a store for `path` using `codec`.
    pub fn with_codec(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every room to the snapshot file, replacing its contents.
    /// Returns the number of records written.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Io`] if the file can't be created or
    /// written.
    pub fn save(&self, rooms: &RoomRegistry) -> Result<usize, SnapshotError> {
        self.save_at(rooms, &self.path)
    }

    /// Clears `rooms` and refills it from the snapshot file. Returns the
    /// number of rooms restored.
    ///
    /// # Errors
    /// - [`SnapshotError::Io`]: the file can't be opened or read
    /// - [`SnapshotError::Malformed`]: a line isn't a valid record
    /// - [`SnapshotError::UnknownRoomType`]: a record names an unknown type
    /// - [`SnapshotError::Room`]: the file lists a room number twice
    pub fn load(&self, rooms: &mut RoomRegistry) -> Result<usize, SnapshotError> {
        self.load_at(rooms, &self.path)
    }

    /// Like [`save`](Self::save), but writes to `path` instead of the
    /// store's own file.
    pub fn save_at(
        &self,
        rooms: &RoomRegistry,
        path: &Path,
    ) -> Result<usize, SnapshotError> {
        let file = File::create(path)?;
        let written = self.write_to(rooms, BufWriter::new(file))?;
        tracing::info!(path = %path.display(), rooms = written, "snapshot saved");
        Ok(written)
    }

    /// Like [`load`](Self::load), but reads `path` instead of the store's
    /// own file.
    ///
    /// The registry is cleared before the file is even opened, so a
    /// missing file leaves it empty.
    pub fn load_at(
        &self,
        rooms: &mut RoomRegistry,
        path: &Path,
    ) -> Result<usize, SnapshotError> {
        rooms.clear_rooms();
        let file = File::open(path)?;
        let restored = self.restore_lines(rooms, BufReader::new(file))?;
        tracing::info!(path = %path.display(), rooms = restored, "snapshot loaded");
        Ok(restored)
    }

    /// Writes one line per room, in registry order, to `out`.
    pub fn write_to<W: Write>(
        &self,
        rooms: &RoomRegistry,
        mut out: W,
    ) -> Result<usize, SnapshotError> {
        for room in rooms.rooms() {
            let line = self.codec.encode(&RoomRecord::from_room(room))?;
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(rooms.len())
    }

    /// Clears `rooms` and restores every record read from `input`.
    ///
    /// Blank lines are skipped. Stops at the first bad record.
    pub fn read_from<R: BufRead>(
        &self,
        rooms: &mut RoomRegistry,
        input: R,
    ) -> Result<usize, SnapshotError> {
        rooms.clear_rooms();
        self.restore_lines(rooms, input)
    }

    /// Appends one room per record line. Callers clear `rooms` first.
    fn restore_lines<R: BufRead>(
        &self,
        rooms: &mut RoomRegistry,
        input: R,
    ) -> Result<usize, SnapshotError> {
        let mut restored = 0;
        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let result = self
                .codec
                .decode(&line)
                .and_then(|record| record.restore_into(rooms).map(|_| ()))
                .map_err(|e| e.at_line(line_no));
            if let Err(e) = result {
                tracing::warn!(
                    line = line_no,
                    restored,
                    error = %e,
                    "snapshot load stopped; registry is partially restored"
                );
                return Err(e);
            }
            restored += 1;
        }

        Ok(restored)
    }
}
