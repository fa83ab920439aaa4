use hecs::World;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::geometry::Geometry;
use crate::resources::{Events, Score};

/// Detect the ball leaving the court, award the point, and reset the ball.
///
/// Both exit conditions holding at once is an invariant violation (it takes
/// a viewport narrower than the ball); exactly one point is still awarded,
/// to the side whose edge the ball is deeper past, and the tick is flagged.
pub fn check_scoring(
    world: &mut World,
    geometry: &Geometry,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exits_left = ball.pos.x - ball.radius < 0.0;
        let exits_right = ball.pos.x + ball.radius > geometry.viewport.width;

        let scorer = match (exits_left, exits_right) {
            (false, false) => None,
            (true, false) => Some(Side::Computer),
            (false, true) => Some(Side::Human),
            (true, true) => {
                events.double_exit = true;
                let left_depth = ball.radius - ball.pos.x;
                let right_depth = ball.pos.x + ball.radius - geometry.viewport.width;
                tracing::warn!(
                    left_depth,
                    right_depth,
                    "ball exited both edges in one tick"
                );
                if left_depth >= right_depth {
                    Some(Side::Computer)
                } else {
                    Some(Side::Human)
                }
            }
        };

        if let Some(side) = scorer {
            score.increment(side);
            match side {
                Side::Human => events.human_scored = true,
                Side::Computer => events.computer_scored = true,
            }
            tracing::debug!(
                scorer = side.label(),
                human = score.human,
                computer = score.computer,
                "point scored"
            );
            ball.reset(geometry, config);
        }
    }
}
