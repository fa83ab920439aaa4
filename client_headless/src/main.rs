//! Headless match host.
//!
//! Supplies everything the simulation treats as external: a fixed 25 ms
//! tick timer, synthetic pointer input, and a render sink that reports to
//! the terminal. Runs one full match and prints the outcome.

use std::thread;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use match_core::{
    Config, Geometry, MatchSession, Params, Rect, RenderSink, Side, Size,
};

/// Render sink that prints score changes and the final banner. Per-tick
/// rectangle updates only show up at trace level.
#[derive(Default)]
struct ConsoleRender;

impl RenderSink for ConsoleRender {
    fn draw_paddle(&mut self, side: Side, rect: Rect) {
        tracing::trace!(side = side.label(), x = rect.x, y = rect.y, "paddle");
    }

    fn draw_ball(&mut self, rect: Rect) {
        tracing::trace!(x = rect.x, y = rect.y, "ball");
    }

    fn show_score(&mut self, side: Side, value: u8) {
        println!("{}: {}", side.label(), value);
    }

    fn game_over(&mut self, message: &str) {
        println!("{message}");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let geometry = Geometry::new(
        Size::new(800.0, 400.0),
        Size::new(15.0, 100.0),
        Size::new(15.0, 100.0),
    );
    let mut session = MatchSession::new(&geometry, Config::default())
        .context("failed to start match")?;
    let mut render = ConsoleRender;

    let period = Duration::from_millis(Params::TICK_PERIOD_MS);
    let winner = loop {
        // Synthetic pointer: chase the ball, like a player hugging the
        // left rail
        if let Some(ball) = session.ball() {
            let pointer_y = ball.pos.y + geometry.viewport.height
                - geometry.human_paddle.height
                - geometry.human_paddle.height / 2.0;
            session.pointer_moved(pointer_y, &geometry);
        }

        if let Some(winner) = session.tick(&geometry, &mut render) {
            // Timer cancelled, input detached: drop out of the loop
            break winner;
        }
        thread::sleep(period);
    };

    tracing::info!(
        winner = winner.label(),
        human = session.score.human,
        computer = session.score.computer,
        "match finished"
    );
    Ok(())
}
