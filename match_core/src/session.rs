use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::error::GameError;
use crate::geometry::Geometry;
use crate::render::RenderSink;
use crate::resources::{Events, Score};
use crate::systems::apply_pointer;
use crate::{create_ball, create_computer_paddle, create_human_paddle, step};

/// Match lifecycle. `Ended` is terminal; there is no way back to
/// `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Running,
    Ended { winner: Side },
}

/// One match: the ball, both paddles, score and lifecycle state, driven by
/// a host-supplied fixed-period tick.
///
/// The host calls [`tick`](Self::tick) every [`crate::Params::TICK_PERIOD_MS`]
/// milliseconds and [`pointer_moved`](Self::pointer_moved) on pointer
/// events; both run on the same single-threaded context, so the session
/// needs no synchronization. Once `tick` reports a winner the host must
/// cancel its timer and detach input; the session also ignores both calls
/// from then on.
pub struct MatchSession {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub state: MatchState,
}

impl MatchSession {
    /// Validate geometry and config, then spawn the ball and both paddles.
    /// Paddle x offsets are fixed from this geometry for the whole match.
    pub fn new(geometry: &Geometry, config: Config) -> Result<Self, GameError> {
        geometry.validate()?;
        config.validate()?;

        let mut world = World::new();
        create_human_paddle(&mut world, geometry);
        create_computer_paddle(&mut world, geometry);
        create_ball(&mut world, geometry, &config);

        Ok(Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            state: MatchState::Running,
        })
    }

    /// Run one tick. Returns the winner once either side reaches the
    /// winning score; the end check runs before any physics, so the
    /// deciding tick does nothing but end the match.
    pub fn tick<R: RenderSink>(&mut self, geometry: &Geometry, render: &mut R) -> Option<Side> {
        if let MatchState::Ended { winner } = self.state {
            return Some(winner);
        }

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.state = MatchState::Ended { winner };
            render.game_over(&format!("Game over, winner: {}", winner.label()));
            tracing::info!(
                winner = winner.label(),
                human = self.score.human,
                computer = self.score.computer,
                "match ended"
            );
            return Some(winner);
        }

        step(
            &mut self.world,
            geometry,
            &self.config,
            &mut self.score,
            &mut self.events,
            render,
        );
        None
    }

    /// Feed a pointer vertical coordinate to the human paddle. Ignored
    /// after the match has ended.
    pub fn pointer_moved(&mut self, pointer_y: f32, geometry: &Geometry) {
        if matches!(self.state, MatchState::Ended { .. }) {
            return;
        }
        apply_pointer(&mut self.world, geometry, pointer_y);
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Ended { winner } => Some(winner),
            MatchState::Running => None,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.winner().is_some()
    }

    /// Current ball snapshot, for hosts that render between ticks
    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}
