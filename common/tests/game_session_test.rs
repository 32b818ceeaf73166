use anyhow::Result;
use common::{
    Clock, FoodKind, GameConfig, GameSession, ManualClock, Position, RecordingSink,
    SnakeView, SuperFoodEvent, SuperFoodStatus,
};
use std::collections::HashSet;

/// Snake that follows a Hamiltonian cycle of the board, so it eventually passes over
/// every cell.
struct TouringSnake {
    path: Vec<Position>,
    head: usize,
    length: usize,
}

impl TouringSnake {
    fn new(width: u8, height: u8) -> Self {
        // row 0 left to right, serpentine through columns 1.. on the remaining rows,
        // then back up column 0; needs an even height
        let mut path: Vec<Position> = (0..width).map(|x| Position::new(x, 0)).collect();
        for y in 1..height {
            if y % 2 == 1 {
                path.extend((1..width).rev().map(|x| Position::new(x, y)));
            } else {
                path.extend((1..width).map(|x| Position::new(x, y)));
            }
        }
        path.extend((1..height).rev().map(|y| Position::new(0, y)));
        TouringSnake {
            path,
            head: 2,
            length: 3,
        }
    }

    fn advance(&mut self) -> Position {
        self.head = (self.head + 1) % self.path.len();
        self.path[self.head]
    }

    fn body(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.path.len();
        (0..self.length).map(move |k| self.path[(self.head + n - k) % n])
    }
}

impl SnakeView for TouringSnake {
    fn is_snake_at(&self, position: Position) -> bool {
        self.body().any(|p| p == position)
    }

    fn head_position(&self) -> Position {
        self.path[self.head]
    }
}

#[test]
fn test_long_simulation_keeps_invariants() -> Result<()> {
    let mut session = GameSession::new(GameConfig::default())?;
    let clock = ManualClock::new(0);
    let mut snake = TouringSnake::new(16, 8);
    let mut sink = RecordingSink::default();
    session.new_game(clock.now(), &snake, &mut sink);

    let mut last_move = clock.now();
    let mut super_spawns = 0;
    let mut eaten_kinds = HashSet::new();

    for _ in 0..20_000 {
        clock.advance(10);
        let now = clock.now();

        if now.wrapping_sub(last_move) >= session.move_interval() {
            last_move = now;
            let head = snake.advance();
            if let Some(consumed) = session.consume_at(head) {
                eaten_kinds.insert(consumed.kind);
            }
        }

        let report = session.tick(now, &snake, &mut sink);
        if matches!(report.super_food, Some(SuperFoodEvent::Spawned(_))) {
            super_spawns += 1;
        }

        let registry = session.registry();
        let unique: HashSet<Position> = registry.positions().iter().copied().collect();
        assert_eq!(unique.len(), registry.len());
        assert!(registry.len() <= session.config().max_food);
        assert!(registry.positions().iter().all(|p| session.board().contains(*p)));

        let super_entries = registry
            .positions()
            .iter()
            .filter(|p| session.food_kind_at(**p) == Some(FoodKind::SuperFood))
            .count();
        assert!(super_entries <= 1);
        if session.super_food().status() == SuperFoodStatus::Inactive {
            assert_eq!(session.super_food().retrieve(), None);
        }

        if let Some(rat) = session.rat().retrieve() {
            assert!(session.board().contains(rat));
        }
        if let Some(rat) = session.rat().on_board() {
            assert_eq!(session.food_kind_at(rat), Some(FoodKind::Rat));
        }
        let rat_entries = session
            .registry()
            .iter()
            .filter(|&(_, p)| session.food_kind_at(p) == Some(FoodKind::Rat))
            .count();
        assert!(rat_entries <= 1);
        assert!(session.score().speed_bonus() <= 450);
    }

    assert!(super_spawns >= 5, "only {} super food spawns", super_spawns);
    assert!(session.score().score() > 0);
    assert!(eaten_kinds.contains(&FoodKind::Food));

    let tour_len = snake.path.len();
    assert_eq!(tour_len, 16 * 8);
    Ok(())
}

#[test]
fn test_super_food_timeline_with_manual_clock() -> Result<()> {
    let mut session = GameSession::new(GameConfig::default())?;
    let snake = TouringSnake::new(16, 8);
    let clock = ManualClock::new(0);
    let mut sink = RecordingSink::default();
    session.new_game(clock.now(), &snake, &mut sink);

    assert_eq!(session.tick(clock.now(), &snake, &mut sink).super_food, None);

    clock.set(16_000);
    let report = session.tick(clock.now(), &snake, &mut sink);
    assert!(matches!(report.super_food, Some(SuperFoodEvent::Spawned(_))));
    assert_eq!(session.super_food().status(), SuperFoodStatus::Active);

    clock.set(21_000);
    let report = session.tick(clock.now(), &snake, &mut sink);
    assert!(matches!(report.super_food, Some(SuperFoodEvent::Expired(_))));
    assert_eq!(session.super_food().status(), SuperFoodStatus::Inactive);
    assert_eq!(session.super_food().removal_time(), 21_000);
    Ok(())
}

#[test]
fn test_custom_config_from_json() -> Result<()> {
    let config = GameConfig::from_json_str(
        r#"{
            "board_width": 10,
            "board_height": 10,
            "max_food": 6,
            "initial_food": 4,
            "rat_move_interval_ms": 500
        }"#,
    )?;
    let mut session = GameSession::new(config)?;
    let snake = TouringSnake::new(10, 10);
    let mut sink = RecordingSink::default();
    session.new_game(0, &snake, &mut sink);

    assert_eq!(session.board().width(), 10);
    assert_eq!(session.registry().len(), 5);
    assert!(session.tick(500, &snake, &mut sink).rat.is_some());
    Ok(())
}
