use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info};

use crate::clock::PausableClock;
use crate::render::board::BoardRenderer;
use crate::render::matrix::LedMatrix;
use crate::render::types::RenderConfig;
use crate::snake::{MoveOutcome, Snake};
use common::{
    Clock, Direction, GameConfig, GameSession, PixelColour, RenderSink, SuperFoodEvent,
    elapsed_since,
};

pub const SNAKE_COLOUR: PixelColour = PixelColour(0xF0);

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    NewGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

pub struct App {
    session: GameSession,
    snake: Snake,
    matrix: LedMatrix,
    clock: PausableClock,
    renderer: BoardRenderer,
    phase: Phase,
    last_move: u32,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        let session = GameSession::new(config)?;
        let board = *session.board();
        let mut app = Self {
            snake: Snake::new(&board),
            matrix: LedMatrix::new(&board),
            session,
            clock: PausableClock::new(),
            renderer: BoardRenderer::new(RenderConfig::default()),
            phase: Phase::Playing,
            last_move: 0,
        };
        app.start_game();
        Ok(app)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn matrix(&self) -> &LedMatrix {
        &self.matrix
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        let turn = match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = turn {
            if self.phase == Phase::Playing {
                self.snake.set_direction(direction);
            }
            return None;
        }

        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.toggle_pause();
                None
            }
            KeyCode::Char('n') | KeyCode::Char('N') => Some(AppCommand::NewGame),
            KeyCode::Enter if self.phase == Phase::GameOver => Some(AppCommand::NewGame),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            _ => None,
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::NewGame => self.start_game(),
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
    }

    /// Move the snake when its interval is up, then let the session run its timers.
    pub fn update(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let now = self.clock.now();

        if elapsed_since(now, self.last_move) >= self.session.move_interval() {
            self.last_move = now;
            if !self.move_snake() {
                self.phase = Phase::GameOver;
                self.session.game_over();
                info!(
                    "snake crashed at length {} with score {}",
                    self.snake.len(),
                    self.session.score().score()
                );
                return;
            }
        }

        let report = self.session.tick(now, &self.snake, &mut self.matrix);
        if let Some(event) = report.super_food {
            debug!(?event, "super food transition");
            if let SuperFoodEvent::Eaten(position) = event {
                // the head is already drawn there, repaint in case the lifecycle cleared it
                self.matrix.draw(position, SNAKE_COLOUR);
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(self.matrix.height() as u16 + 2),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let board = Paragraph::new(self.renderer.render_lines(&self.matrix))
            .block(Block::default().borders(Borders::ALL).title(" Supersnake "));
        frame.render_widget(board, chunks[0]);

        let status = match self.phase {
            Phase::Playing => Span::styled("PLAYING", Style::default().fg(Color::Green)),
            Phase::Paused => Span::styled("PAUSED", Style::default().fg(Color::Yellow)),
            Phase::GameOver => Span::styled(
                "GAME OVER - press n to start again",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        let score = self.session.score();
        let lines = vec![
            Line::from(vec![
                Span::raw(format!("Score: {:>8}  ", score.score())),
                Span::raw(format!("Length: {:>3}  ", self.snake.len())),
                Span::raw(format!("Speed bonus: {:>3}  ", score.speed_bonus())),
                status,
            ]),
            Line::from(Span::styled(
                "arrows/wasd steer  p pause  n new game  q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let info = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(info, chunks[1]);
    }

    fn start_game(&mut self) {
        if self.clock.is_paused() {
            self.clock.toggle_pause();
        }
        let board = *self.session.board();
        self.snake = Snake::new(&board);
        self.matrix.clear_all();
        for position in self.snake.body() {
            self.matrix.draw(position, SNAKE_COLOUR);
        }

        let now = self.clock.now();
        self.session.new_game(now, &self.snake, &mut self.matrix);
        self.last_move = now;
        self.phase = Phase::Playing;
        info!("started new game");
    }

    fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => return,
        };
        self.clock.toggle_pause();
    }

    /// Returns false when the snake ran into itself.
    fn move_snake(&mut self) -> bool {
        let board = *self.session.board();
        let session = &mut self.session;
        match self
            .snake
            .advance_with(&board, |head| session.consume_at(head).is_some())
        {
            MoveOutcome::Moved { head, vacated } => {
                if let Some(tail) = vacated {
                    self.matrix.clear(tail);
                }
                self.matrix.draw(head, SNAKE_COLOUR);
                true
            }
            MoveOutcome::Crashed => false,
        }
    }
}
