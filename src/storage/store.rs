//! SQLite-backed save store.
//!
//! ## Tables
//!
//! - `players`: golfers, keyed by an autoincrementing id
//! - `saves`: one row per save, pointing at a player
//! - `courses`: dimensions, size label and hole of a stored course
//! - `cells`: one row per course cell
//!
//! The schema is created on open if it is missing, so opening an existing
//! database is harmless.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::error::{narrow, Result, StorageError};
use super::record::SaveRecord;
use crate::core::{GameMode, Position};
use crate::course::{Course, CourseError, CourseSize, HazardKind};
use crate::rules::Session;

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS saves (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id INTEGER,
    current_mode TEXT,
    strokes INTEGER,
    mulligans_remaining INTEGER,
    ball_pos_x INTEGER,
    ball_pos_y INTEGER,
    saved_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY(player_id) REFERENCES players(id)
);

CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    course_type TEXT,
    width INTEGER,
    height INTEGER,
    hole_x INTEGER,
    hole_y INTEGER,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS cells (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    course_id INTEGER,
    x INTEGER,
    y INTEGER,
    hazard_type TEXT,
    FOREIGN KEY(course_id) REFERENCES courses(id)
);
";

/// Raw `saves` columns, before names are parsed.
type SaveRow = (i64, String, i64, i64, i64, i64);

/// Persistent store for players, saves and courses.
pub struct SaveStore {
    conn: Connection,
}

impl SaveStore {
    /// Open (or create) a database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening save store at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// Open a throwaway database in memory.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // === Players ===

    /// Register a golfer, returning their id.
    pub fn create_player(&self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO players (name) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Look up a golfer's name.
    pub fn player_name(&self, player_id: i64) -> Result<String> {
        self.conn
            .query_row(
                "SELECT name FROM players WHERE id = ?1",
                params![player_id],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .ok_or(StorageError::NotFound {
                table: "players",
                id: player_id,
            })
    }

    // === Saves ===

    /// Store a save row, returning its id.
    pub fn save_game(&self, record: &SaveRecord) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO saves (
                player_id, current_mode, strokes, mulligans_remaining, ball_pos_x, ball_pos_y
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.player_id,
                record.mode.name(),
                i64::from(record.strokes),
                i64::from(record.mulligans_remaining),
                record.ball_x,
                record.ball_y,
            ],
        )?;

        let save_id = self.conn.last_insert_rowid();
        log::info!(
            "Game state saved (save {}, player {}, {} strokes)",
            save_id,
            record.player_id,
            record.strokes
        );
        Ok(save_id)
    }

    /// Load a save row by id.
    pub fn load_save(&self, save_id: i64) -> Result<SaveRecord> {
        let row = self
            .conn
            .query_row(
                "SELECT player_id, current_mode, strokes, mulligans_remaining, ball_pos_x, ball_pos_y
                 FROM saves WHERE id = ?1",
                params![save_id],
                read_save_row,
            )
            .optional()?
            .ok_or(StorageError::NotFound {
                table: "saves",
                id: save_id,
            })?;

        parse_save_row(row)
    }

    /// Most recent save for a golfer, with its id.
    pub fn latest_save(&self, player_id: i64) -> Result<Option<(i64, SaveRecord)>> {
        let row = self
            .conn
            .query_row(
                "SELECT player_id, current_mode, strokes, mulligans_remaining, ball_pos_x, ball_pos_y, id
                 FROM saves WHERE player_id = ?1 ORDER BY id DESC LIMIT 1",
                params![player_id],
                |row| Ok((row.get::<_, i64>(6)?, read_save_row(row)?)),
            )
            .optional()?;

        match row {
            Some((save_id, row)) => Ok(Some((save_id, parse_save_row(row)?))),
            None => Ok(None),
        }
    }

    // === Courses ===

    /// Store a course and all of its cells, returning the course id.
    pub fn save_course(&mut self, course: &Course) -> Result<i64> {
        let hole = course.hole();
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO courses (course_type, width, height, hole_x, hole_y)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                course.size().name(),
                course.width(),
                course.height(),
                hole.x,
                hole.y
            ],
        )?;
        let course_id = tx.last_insert_rowid();

        {
            let mut insert = tx.prepare(
                "INSERT INTO cells (course_id, x, y, hazard_type) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (pos, terrain) in course.iter() {
                insert.execute(params![course_id, pos.x, pos.y, terrain.name()])?;
            }
        }

        tx.commit()?;
        log::debug!("stored course {} ({}x{})", course_id, course.width(), course.height());
        Ok(course_id)
    }

    /// Load a stored course by id.
    pub fn load_course(&self, course_id: i64) -> Result<Course> {
        let (course_type, width, height, hole_x, hole_y) = self
            .conn
            .query_row(
                "SELECT course_type, width, height, hole_x, hole_y FROM courses WHERE id = ?1",
                params![course_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, i64>(2)?,
                        row.get::<_, i64>(3)?,
                        row.get::<_, i64>(4)?,
                    ))
                },
            )
            .optional()?
            .ok_or(StorageError::NotFound {
                table: "courses",
                id: course_id,
            })?;

        let size: CourseSize = course_type.parse()?;
        let width: i32 = narrow("width", width)?;
        let height: i32 = narrow("height", height)?;
        let hole = Position::new(narrow("hole_x", hole_x)?, narrow("hole_y", hole_y)?);

        let cell_count = (width.max(0) as usize) * (height.max(0) as usize);
        let mut terrain: Vec<Option<HazardKind>> = vec![None; cell_count];

        let mut stmt = self
            .conn
            .prepare("SELECT x, y, hazard_type FROM cells WHERE course_id = ?1")?;
        let rows = stmt.query_map(params![course_id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, String>(2)?))
        })?;

        for row in rows {
            let (x, y, hazard) = row?;
            let kind: HazardKind = hazard.parse()?;
            let in_grid = (0..i64::from(width)).contains(&x) && (0..i64::from(height)).contains(&y);
            if in_grid {
                terrain[(y * i64::from(width) + x) as usize] = Some(kind);
            }
        }

        let filled = terrain.iter().filter(|cell| cell.is_some()).count();
        let terrain: Vec<HazardKind> = terrain
            .into_iter()
            .collect::<Option<_>>()
            .ok_or(CourseError::CellCount {
                expected: cell_count,
                actual: filled,
            })?;

        Ok(Course::from_cells(size, width, height, terrain, hole)?)
    }

    // === Sessions ===

    /// Resume a saved game on a stored course.
    pub fn resume(&self, save_id: i64, course_id: i64, seed: u64) -> Result<Session> {
        let record = self.load_save(save_id)?;
        let name = self.player_name(record.player_id)?;
        let course = self.load_course(course_id)?;
        record.resume(course, &name, seed)
    }
}

fn read_save_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SaveRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn parse_save_row(row: SaveRow) -> Result<SaveRecord> {
    let (player_id, mode, strokes, mulligans, ball_x, ball_y) = row;
    let mode: GameMode = mode.parse()?;

    Ok(SaveRecord {
        player_id,
        mode,
        strokes: narrow("strokes", strokes)?,
        mulligans_remaining: narrow("mulligans_remaining", mulligans)?,
        ball_x: narrow("ball_pos_x", ball_x)?,
        ball_y: narrow("ball_pos_y", ball_y)?,
    })
}
