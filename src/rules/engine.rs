//! The turn engine: one golf session and the shots played in it.
//!
//! A `Session` owns everything about a game in progress: the mode, the
//! course, the ball, the golfer and the dice. There is no global engine;
//! callers hold the session and drop it to start over.
//!
//! ## Shot resolution
//!
//! 1. Compute distance from the mode, club and current lie.
//! 2. Scale the direction by it to get the target cell.
//! 3. Off the course: the ball stays where it is.
//!    On the course: move, then apply the landing cell's effect once.
//! 4. Either way the shot costs a stroke.

use smallvec::SmallVec;

use super::shot::{dice_distance, speed_distance, HazardEvent, ShotOutcome, ShotResult};
use crate::core::{
    BallState, DieRoller, Direction, GameMode, GameRng, PlayerState, Position, SessionConfig,
};
use crate::course::{generate, Cell, Course, CourseSize, LandingEffect};
use crate::equipment::ClubKind;
use crate::render::render_course;

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Session<R: DieRoller = GameRng> {
    mode: GameMode,
    course: Course,
    ball: BallState,
    player: PlayerState,
    /// Shots attempted this session, penalties excluded.
    shots_taken: u32,
    /// Ball position before the most recent shot.
    previous_position: Option<Position>,
    dice: R,
}

impl Session<GameRng> {
    /// Start a session on a freshly generated course with an entropy seed.
    pub fn start(mode: GameMode, size: CourseSize) -> Self {
        let config = SessionConfig::new(mode, size).with_seed(rand::random());
        Self::from_config(&config)
    }

    /// Start a session from a full configuration.
    ///
    /// The course is drawn from a stream derived from the seed, so two
    /// sessions with the same config play identically.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::seeded(config, GameRng::new(config.seed))
    }
}

/// Course stream for a seed. The dice use the seed's root stream.
fn seeded_course(config: &SessionConfig) -> Course {
    generate(config.size, &mut GameRng::new(config.seed).for_context("course"))
}

impl<R: DieRoller> Session<R> {
    /// Start on the course `config` seeds, with the given dice.
    fn seeded(config: &SessionConfig, dice: R) -> Self {
        let player = PlayerState::new(config.player_name.clone(), config.mulligans);
        Self::with_course(config.mode, seeded_course(config), player, dice)
    }

    /// Start a session on an existing course with the given dice.
    ///
    /// The ball is teed up at the centre of the start row.
    pub fn with_course(mode: GameMode, course: Course, player: PlayerState, dice: R) -> Self {
        let start = course.start_position();
        log::info!(
            "Game started: {} on {} course. Ball start: {}. Hole at {}.",
            mode,
            course.size(),
            start,
            course.hole()
        );

        Self {
            mode,
            course,
            ball: BallState::at(start),
            player,
            shots_taken: 0,
            previous_position: None,
            dice,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Bounds-checked cell lookup on the active course.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.course.cell(Position::new(x, y))
    }

    #[must_use]
    pub fn hole_position(&self) -> Position {
        self.course.hole()
    }

    #[must_use]
    pub fn ball_position(&self) -> Position {
        self.ball.position()
    }

    /// Golfer's stroke total, penalties and mulligans included.
    #[must_use]
    pub fn strokes(&self) -> u32 {
        self.player.strokes()
    }

    #[must_use]
    pub fn mulligans_remaining(&self) -> u32 {
        self.player.mulligans_remaining()
    }

    /// Shots attempted this session.
    #[must_use]
    pub fn shots_taken(&self) -> u32 {
        self.shots_taken
    }

    /// Where the ball was before the most recent shot.
    #[must_use]
    pub fn previous_position(&self) -> Option<Position> {
        self.previous_position
    }

    /// Put the ball on a specific cell, e.g. when resuming a saved game.
    ///
    /// Returns false and leaves the ball alone if `pos` is off the course.
    pub fn place_ball(&mut self, pos: Position) -> bool {
        if !self.course.contains(pos) {
            return false;
        }
        self.ball.set_position(pos);
        true
    }

    // === Shots ===

    /// Landing cells a club can reach from the current lie in speed golf.
    ///
    /// Dice golf distances are only known after the roll; see
    /// [`Course::shot_targets`] for a known distance.
    #[must_use]
    pub fn reachable(&self, club: ClubKind) -> SmallVec<[Position; 8]> {
        let from = self.ball.position();
        let distance = speed_distance(club, self.course.terrain(from));
        self.course.shot_targets(from, distance)
    }

    /// Play one shot with `club` toward `direction`.
    ///
    /// In dice golf the club is ignored and the die decides the distance.
    pub fn take_shot(&mut self, club: ClubKind, direction: impl Into<Direction>) -> ShotResult {
        let direction = direction.into();
        let from = self.ball.position();
        let lie = self.course.terrain(from);

        let (roll, distance) = match self.mode {
            GameMode::DiceGolf => {
                let roll = self.dice.roll_d6();
                (Some(roll), dice_distance(roll, lie))
            }
            GameMode::SpeedGolf => (None, speed_distance(club, lie)),
        };

        self.previous_position = Some(from);
        let target = from.offset(direction, distance);

        let (outcome, hazard) = match self.course.terrain(target) {
            Some(terrain) => {
                self.ball.set_position(target);
                (ShotOutcome::Landed { terrain }, self.apply_landing_effect())
            }
            None => {
                log::warn!("Shot to {} goes out of bounds; ball stays at {}", target, from);
                (ShotOutcome::OutOfBounds, None)
            }
        };

        self.shots_taken += 1;
        self.player.add_strokes(1);

        let result = ShotResult {
            club,
            roll,
            distance,
            from,
            target,
            outcome,
            hazard,
            position: self.ball.position(),
            strokes: self.player.strokes(),
        };

        log::debug!(
            "{} shot taken. Distance: {}, ball now at {}. Strokes: {}",
            club,
            distance,
            result.position,
            result.strokes
        );

        result
    }

    /// Apply the effect of the cell the ball just landed on.
    ///
    /// Single pass: if a push lands the ball on another hazard, that
    /// hazard does nothing until the ball lands on it from a shot. A push
    /// that would leave the course keeps the ball on its landing cell.
    fn apply_landing_effect(&mut self) -> Option<HazardEvent> {
        let landing = self.ball.position();
        let terrain = self.course.terrain(landing)?;

        match terrain.traits().landing {
            LandingEffect::None => None,
            LandingEffect::Obstructed => {
                log::debug!("Ball came down in {} at {}", terrain, landing);
                Some(HazardEvent {
                    terrain,
                    penalty: 0,
                    from: landing,
                    to: landing,
                })
            }
            LandingEffect::Displace { direction, penalty } => {
                self.player.add_strokes(penalty);

                let pushed = landing.offset(direction, 1);
                let to = if self.course.contains(pushed) { pushed } else { landing };
                self.ball.set_position(to);

                log::debug!(
                    "Ball landed in {} at {}: +{} penalty, moved to {}",
                    terrain,
                    landing,
                    penalty,
                    to
                );

                Some(HazardEvent {
                    terrain,
                    penalty,
                    from: landing,
                    to,
                })
            }
        }
    }

    // === Mulligan ===

    /// Replay the last shot: costs a mulligan and a stroke, and puts the
    /// ball back where it was before that shot.
    ///
    /// Returns false and changes nothing when no mulligans are left.
    pub fn use_mulligan(&mut self) -> bool {
        if !self.player.spend_mulligan() {
            log::warn!("No mulligans left");
            return false;
        }

        self.player.add_strokes(1);
        if let Some(previous) = self.previous_position {
            self.ball.set_position(previous);
        }

        log::info!(
            "Mulligan used! Remaining: {}. Strokes: {}",
            self.player.mulligans_remaining(),
            self.player.strokes()
        );
        true
    }

    // === Victory & scoring ===

    /// Check if the ball is in the hole.
    #[must_use]
    pub fn check_victory(&self) -> bool {
        self.ball.position() == self.course.hole()
    }

    /// Finish a turn, announcing the result if the ball is holed.
    ///
    /// Returns true when the game is over.
    pub fn end_turn(&self) -> bool {
        if self.check_victory() {
            log::info!("Ball in the hole! Total strokes: {}", self.player.strokes());
            return true;
        }
        false
    }

    /// Current score: the golfer's stroke total.
    #[must_use]
    pub fn calculate_score(&self) -> u32 {
        self.player.strokes()
    }
}

impl<R: DieRoller> std::fmt::Display for Session<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_course(&self.course, Some(self.ball.position())))
    }
}

/// Builder for creating a `Session`.
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn size(mut self, size: CourseSize) -> Self {
        self.config.size = size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn mulligans(mut self, mulligans: u32) -> Self {
        self.config.mulligans = mulligans;
        self
    }

    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.config.player_name = name.into();
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Build a session with seeded dice.
    pub fn build(self) -> Session {
        Session::from_config(&self.config)
    }

    /// Build a session on the seeded course but with caller-supplied dice.
    pub fn build_with_dice<R: DieRoller>(self, dice: R) -> Session<R> {
        Session::seeded(&self.config, dice)
    }
}
