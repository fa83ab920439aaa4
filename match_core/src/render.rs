use crate::components::Side;
use crate::geometry::Rect;

/// Presentation boundary. The simulation pushes draw state through this
/// each tick; it never reads anything back.
pub trait RenderSink {
    /// Current paddle rectangle, emitted once per paddle per tick
    fn draw_paddle(&mut self, side: Side, rect: Rect);

    /// Current ball rectangle (radius-sized box at the ball's position)
    fn draw_ball(&mut self, rect: Rect);

    /// A side's score changed; `value` is the new total
    fn show_score(&mut self, side: Side, value: u8);

    /// Match is over. Implementations reveal the message and hide both
    /// paddles.
    fn game_over(&mut self, message: &str);
}

/// Discards all draw calls. For hosts that only care about tick results.
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn draw_paddle(&mut self, _side: Side, _rect: Rect) {}
    fn draw_ball(&mut self, _rect: Rect) {}
    fn show_score(&mut self, _side: Side, _value: u8) {}
    fn game_over(&mut self, _message: &str) {}
}

/// Append-only log of everything the simulation drew
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Paddle(Side, Rect),
    Ball(Rect),
    Score(Side, u8),
    GameOver(String),
}

/// Records draw calls for inspection, mainly by test harnesses
#[derive(Debug, Default)]
pub struct RecordingRender {
    pub events: Vec<RenderEvent>,
}

impl RecordingRender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_over_messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::GameOver(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_score(&self, side: Side) -> Option<u8> {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                RenderEvent::Score(s, value) if *s == side => Some(*value),
                _ => None,
            })
    }
}

impl RenderSink for RecordingRender {
    fn draw_paddle(&mut self, side: Side, rect: Rect) {
        self.events.push(RenderEvent::Paddle(side, rect));
    }

    fn draw_ball(&mut self, rect: Rect) {
        self.events.push(RenderEvent::Ball(rect));
    }

    fn show_score(&mut self, side: Side, value: u8) {
        self.events.push(RenderEvent::Score(side, value));
    }

    fn game_over(&mut self, message: &str) {
        self.events.push(RenderEvent::GameOver(message.to_owned()));
    }
}
