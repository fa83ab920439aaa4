use hecs::World;

use crate::components::Ball;
use crate::geometry::Geometry;
use crate::resources::Events;

/// Advance the ball one tick and bounce it off the top/bottom edges
pub fn advance_ball(world: &mut World, geometry: &Geometry, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update();

        let out_of_bounds =
            ball.pos.y < 0.0 || ball.pos.y > geometry.viewport.height - ball.radius;
        ball.edges(geometry.viewport.height);
        if out_of_bounds {
            events.ball_hit_wall = true;
        }
    }
}
