use common::{
    Clock, GameConfig, GameSession, ManualClock, RenderSink, SnakeView, elapsed_since,
};
use terminal::app::SNAKE_COLOUR;
use terminal::render::{
    board::BoardRenderer,
    matrix::LedMatrix,
    types::{CharDimensions, RenderConfig},
};
use terminal::snake::{MoveOutcome, Snake};

fn main() {
    // Simulate twenty seconds of play with a snake that turns every few moves
    let mut session = GameSession::new(GameConfig::default()).expect("default config is valid");
    let board = *session.board();
    let clock = ManualClock::new(0);
    let mut snake = Snake::new(&board);
    let mut matrix = LedMatrix::new(&board);

    for position in snake.body() {
        matrix.draw(position, SNAKE_COLOUR);
    }
    session.new_game(clock.now(), &snake, &mut matrix);

    let turns = [
        common::Direction::Down,
        common::Direction::Right,
        common::Direction::Up,
        common::Direction::Right,
    ];
    let mut last_move = 0;
    let mut moves = 0usize;

    while clock.now() < 20_000 {
        clock.advance(10);
        let now = clock.now();
        if elapsed_since(now, last_move) >= session.move_interval() {
            last_move = now;
            moves += 1;
            if moves % 4 == 0 {
                snake.set_direction(turns[(moves / 4) % turns.len()]);
            }
            match snake.advance_with(&board, |head| session.consume_at(head).is_some()) {
                MoveOutcome::Moved { head, vacated } => {
                    if let Some(tail) = vacated {
                        matrix.clear(tail);
                    }
                    matrix.draw(head, SNAKE_COLOUR);
                }
                MoveOutcome::Crashed => break,
            }
        }
        session.tick(now, &snake, &mut matrix);
    }

    println!(
        "After {} ms: score {}, length {}, head at {}",
        clock.now(),
        session.score().score(),
        snake.len(),
        snake.head_position()
    );

    println!("=== 1x1 Rendering (Classic) ===");
    render_with_dimensions(&matrix, CharDimensions::new(1, 1));

    println!("\n=== 2x1 Rendering (Wide) ===");
    render_with_dimensions(&matrix, CharDimensions::new(2, 1));
}

fn render_with_dimensions(matrix: &LedMatrix, char_dims: CharDimensions) {
    let renderer = BoardRenderer::new(RenderConfig {
        chars_per_point: char_dims,
    });
    let lines = renderer.render(matrix).into_lines();
    let width = matrix.width() as usize * char_dims.horizontal;

    println!("┌{}┐", "─".repeat(width));
    for line in lines {
        let row: String = line.iter().map(|cell| cell.ch).collect();
        println!("│{}│", row);
    }
    println!("└{}┘", "─".repeat(width));
}
