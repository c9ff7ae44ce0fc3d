//! Save and resume through an on-disk-shaped store.

use grid_golf::{
    ClubKind, CourseSize, Direction, GameMode, Position, SaveRecord, SaveStore, SessionBuilder,
    StorageError,
};

#[test]
fn test_save_and_resume_full_game() {
    let mut store = SaveStore::open_in_memory().unwrap();
    let player_id = store.create_player("Golfer1").unwrap();

    let mut session = SessionBuilder::new()
        .mode(GameMode::SpeedGolf)
        .size(CourseSize::Medium)
        .seed(11)
        .build();
    let course_id = store.save_course(session.course()).unwrap();

    session.take_shot(ClubKind::Putter, Direction::NORTH);
    session.take_shot(ClubKind::Putter, Direction::SOUTH);
    assert!(session.use_mulligan());

    let record = SaveRecord::capture(player_id, &session);
    let save_id = store.save_game(&record).unwrap();

    let resumed = store.resume(save_id, course_id, 99).unwrap();

    assert_eq!(resumed.course(), session.course());
    assert_eq!(resumed.mode(), GameMode::SpeedGolf);
    assert_eq!(resumed.strokes(), session.strokes());
    assert_eq!(resumed.mulligans_remaining(), 5);
    assert_eq!(resumed.ball_position(), session.ball_position());
    assert_eq!(resumed.player().name(), "Golfer1");
    assert_eq!(resumed.shots_taken(), 0);
}

#[test]
fn test_resumed_game_keeps_playing() {
    let mut store = SaveStore::open_in_memory().unwrap();
    let player_id = store.create_player("Ada").unwrap();

    let session = SessionBuilder::new().mode(GameMode::SpeedGolf).seed(5).build();
    let course_id = store.save_course(session.course()).unwrap();
    let save_id = store.save_game(&SaveRecord::capture(player_id, &session)).unwrap();

    let mut resumed = store.resume(save_id, course_id, 1).unwrap();
    let start = resumed.ball_position();
    resumed.take_shot(ClubKind::Driver, Direction::SOUTH);

    assert_eq!(resumed.ball_position(), start);
    assert_eq!(resumed.strokes(), 1);
}

#[test]
fn test_latest_save_wins() {
    let store = SaveStore::open_in_memory().unwrap();
    let player_id = store.create_player("Golfer1").unwrap();

    let mut record = SaveRecord {
        player_id,
        mode: GameMode::DiceGolf,
        strokes: 1,
        mulligans_remaining: 6,
        ball_x: 4,
        ball_y: 10,
    };
    store.save_game(&record).unwrap();
    record.strokes = 2;
    record.ball_y = 6;
    let second = store.save_game(&record).unwrap();

    let (id, latest) = store.latest_save(player_id).unwrap().unwrap();
    assert_eq!(id, second);
    assert_eq!(latest.ball_position(), Position::new(4, 6));
    assert_eq!(latest.strokes, 2);
}

#[test]
fn test_resume_missing_save() {
    let mut store = SaveStore::open_in_memory().unwrap();
    let session = SessionBuilder::new().build();
    let course_id = store.save_course(session.course()).unwrap();

    let err = store.resume(404, course_id, 1).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { table: "saves", id: 404 }));
}

#[test]
fn test_reopen_file_database() {
    let path = std::env::temp_dir().join(format!("grid_golf_reopen_{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let (player_id, course_id, course) = {
        let mut store = SaveStore::open(&path).unwrap();
        let player_id = store.create_player("Golfer1").unwrap();
        let course = SessionBuilder::new().seed(3).build().course().clone();
        let course_id = store.save_course(&course).unwrap();
        (player_id, course_id, course)
    };

    let store = SaveStore::open(&path).unwrap();
    assert_eq!(store.player_name(player_id).unwrap(), "Golfer1");
    assert_eq!(store.load_course(course_id).unwrap(), course);

    drop(store);
    let _ = std::fs::remove_file(&path);
}
