use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::clock::elapsed_since;
use crate::{
    Board, ConfigError, FoodRegistry, GameConfig, PixelColour, Position, PseudoRandom,
    RandomSource, Rat, RatStep, RenderSink, ScoreKeeper, SnakeView, SuperFood, SuperFoodEvent,
    spawn_food,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Food,
    SuperFood,
    Rat,
}

impl FoodKind {
    pub fn colour(self) -> PixelColour {
        match self {
            FoodKind::Food => PixelColour::FOOD,
            FoodKind::SuperFood => PixelColour::SUPER_FOOD,
            FoodKind::Rat => PixelColour::RAT,
        }
    }
}

/// A registry entry the snake ate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumed {
    pub kind: FoodKind,
    pub position: Position,
    pub points: u16,
}

/// What changed during one call to [`GameSession::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub super_food: Option<SuperFoodEvent>,
    pub rat: Option<RatStep>,
    pub rat_placed: Option<Position>,
    pub food_spawned: Vec<Position>,
}

/// All per-game state: the registry and the entities layered on it, the score, and the
/// random source. The control loop owns one of these and calls [`GameSession::tick`] once
/// per polling interval.
pub struct GameSession<R = PseudoRandom> {
    config: GameConfig,
    board: Board,
    registry: FoodRegistry,
    rat: Rat,
    super_food: SuperFood,
    score: ScoreKeeper,
    rng: R,
    last_rat_move: u32,
}

impl GameSession<PseudoRandom> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = PseudoRandom::new(config.rng_seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GameSession {
            board: config.board(),
            registry: FoodRegistry::new(config.max_food),
            rat: Rat::new(),
            super_food: SuperFood::new(
                config.super_food_spawn_cooldown_ms,
                config.super_food_active_ms,
            ),
            score: ScoreKeeper::new(config.speed_bonus_cap),
            rng,
            last_rat_move: 0,
            config,
        })
    }

    /// Clear everything and lay out the starting food and the rat.
    ///
    /// Placement failures are logged and retried by later ticks.
    pub fn new_game(&mut self, now: u32, snake: &dyn SnakeView, sink: &mut dyn RenderSink) {
        self.registry.reset();
        self.rat.reset();
        self.super_food.reset(now);
        self.score.reset();
        self.last_rat_move = now;

        for position in self.replenish_food(now, snake) {
            sink.draw(position, PixelColour::FOOD);
        }
        if let Some(position) = self.place_rat(now, snake) {
            sink.draw(position, PixelColour::RAT);
        }
        info!(
            "new game on {}x{} board with {} entities",
            self.board.width(),
            self.board.height(),
            self.registry.len()
        );
    }

    /// Advance timed behaviour to `now`: the super-food lifecycle every call, the rat once
    /// per rat interval, then top ordinary food back up.
    pub fn tick(
        &mut self,
        now: u32,
        snake: &dyn SnakeView,
        sink: &mut dyn RenderSink,
    ) -> TickReport {
        let mut report = TickReport::default();

        report.super_food =
            self.super_food
                .tick(now, &mut self.registry, &self.board, snake, &mut self.rng);
        match report.super_food {
            Some(SuperFoodEvent::Spawned(position)) => {
                sink.draw(position, PixelColour::SUPER_FOOD)
            }
            Some(SuperFoodEvent::Expired(position)) => sink.clear(position),
            Some(SuperFoodEvent::Eaten(_)) | None => {}
        }

        if elapsed_since(now, self.last_rat_move) >= self.config.rat_move_interval_ms {
            self.last_rat_move = now;
            if self.rat.retrieve().is_none() {
                report.rat_placed = self.place_rat(now, snake);
                if let Some(position) = report.rat_placed {
                    sink.draw(position, PixelColour::RAT);
                }
            } else {
                match self.rat.step(
                    &mut self.registry,
                    &self.board,
                    snake,
                    self.super_food.retrieve(),
                    &mut self.rng,
                ) {
                    Ok(step) => {
                        if step.clear_previous {
                            sink.clear(step.previous);
                        }
                        if step.moved() {
                            sink.draw(step.current, PixelColour::RAT);
                        }
                        report.rat = Some(step);
                    }
                    Err(e) => warn!("rat could not move: {}", e),
                }
            }
        }

        report.food_spawned = self.replenish_food(now, snake);
        for &position in &report.food_spawned {
            sink.draw(position, PixelColour::FOOD);
        }

        report
    }

    /// Remove whatever the snake ate at `position` and award its points.
    pub fn consume_at(&mut self, position: Position) -> Option<Consumed> {
        let kind = self.food_kind_at(position)?;
        let id = self.registry.food_at(position)?;
        self.registry.remove(id).ok()?;
        if kind == FoodKind::Rat {
            self.rat.mark_eaten();
        }

        let points = match kind {
            FoodKind::Food => self.config.food_points,
            FoodKind::SuperFood => self.config.super_food_points,
            FoodKind::Rat => self.config.rat_points,
        };
        self.score.add(points);
        debug!("snake ate {:?} at {} for {} points", kind, position, points);

        Some(Consumed {
            kind,
            position,
            points,
        })
    }

    pub fn food_kind_at(&self, position: Position) -> Option<FoodKind> {
        if !self.registry.is_food_at(position) {
            return None;
        }
        if self.rat.on_board() == Some(position) {
            Some(FoodKind::Rat)
        } else if self.super_food.is_active() && self.super_food.retrieve() == Some(position) {
            Some(FoodKind::SuperFood)
        } else {
            Some(FoodKind::Food)
        }
    }

    /// Redraw every registry entry, e.g. after the display was cleared.
    pub fn draw_entities(&self, sink: &mut dyn RenderSink) {
        for (_, position) in self.registry.iter() {
            if let Some(kind) = self.food_kind_at(position) {
                sink.draw(position, kind.colour());
            }
        }
    }

    /// Snake move interval with the current speed bonus applied.
    pub fn move_interval(&self) -> u32 {
        self.score.move_interval(self.config.base_move_interval_ms)
    }

    /// Drop the speed-up so the next game starts at base speed.
    pub fn game_over(&mut self) {
        info!("game over with score {}", self.score.score());
        self.score.reset_speed_bonus();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn registry(&self) -> &FoodRegistry {
        &self.registry
    }

    pub fn rat(&self) -> &Rat {
        &self.rat
    }

    pub fn super_food(&self) -> &SuperFood {
        &self.super_food
    }

    pub fn score(&self) -> &ScoreKeeper {
        &self.score
    }

    fn ordinary_food_count(&self) -> usize {
        self.registry
            .iter()
            .filter(|&(_, p)| self.food_kind_at(p) == Some(FoodKind::Food))
            .count()
    }

    fn replenish_food(&mut self, now: u32, snake: &dyn SnakeView) -> Vec<Position> {
        let mut spawned = Vec::new();
        while self.ordinary_food_count() < self.config.initial_food {
            match spawn_food(
                &mut self.registry,
                &self.board,
                |p| snake.is_snake_at(p),
                &mut self.rng,
                now,
            ) {
                Ok(position) => spawned.push(position),
                Err(e) => {
                    debug!("food spawn deferred: {}", e);
                    break;
                }
            }
        }
        spawned
    }

    fn place_rat(&mut self, now: u32, snake: &dyn SnakeView) -> Option<Position> {
        match self
            .rat
            .place(&mut self.registry, &self.board, snake, &mut self.rng, now)
        {
            Ok(position) => Some(position),
            Err(e) => {
                warn!("rat placement deferred: {}", e);
                None
            }
        }
    }
}
