use hecs::World;

use crate::components::{Ball, Paddle, Tracking};
use crate::config::Config;
use crate::geometry::Geometry;

/// Move tracking paddles toward the ball by one damped step. The paddle
/// center converges on the ball's y without ever snapping to it.
pub fn track_ball(world: &mut World, geometry: &Geometry, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_entity, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, (paddle, _tracking)) in world.query_mut::<(&mut Paddle, &Tracking)>() {
        let half_height = geometry.paddle_size(paddle.side).height / 2.0;
        let center = paddle.pos.y + half_height;
        paddle.pos.y += (ball_y - center) * config.tracking_damping;
    }
}
