//! The save-game row.

use serde::{Deserialize, Serialize};

use super::error::{Result, StorageError};
use crate::core::{DieRoller, GameMode, GameRng, PlayerState, Position};
use crate::course::Course;
use crate::rules::Session;

/// What a save captures about a session in progress.
///
/// The course itself is stored separately; see
/// [`SaveStore::save_course`](super::SaveStore::save_course).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub player_id: i64,
    pub mode: GameMode,
    pub strokes: u32,
    pub mulligans_remaining: u32,
    pub ball_x: i32,
    pub ball_y: i32,
}

impl SaveRecord {
    /// Snapshot a live session for `player_id`.
    pub fn capture<R: DieRoller>(player_id: i64, session: &Session<R>) -> Self {
        let ball = session.ball_position();
        Self {
            player_id,
            mode: session.mode(),
            strokes: session.strokes(),
            mulligans_remaining: session.mulligans_remaining(),
            ball_x: ball.x,
            ball_y: ball.y,
        }
    }

    #[must_use]
    pub fn ball_position(&self) -> Position {
        Position::new(self.ball_x, self.ball_y)
    }

    /// Rebuild a session on `course` with fresh dice seeded by `seed`.
    ///
    /// Fails if the saved ball position is not on the course.
    pub fn resume(&self, course: Course, player_name: &str, seed: u64) -> Result<Session> {
        let player = PlayerState::restored(player_name, self.strokes, self.mulligans_remaining);
        let mut session = Session::with_course(self.mode, course, player, GameRng::new(seed));

        let ball = self.ball_position();
        if !session.place_ball(ball) {
            return Err(StorageError::BallOffCourse(ball));
        }
        Ok(session)
    }
}
