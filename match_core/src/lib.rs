pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one fixed-step tick of the match simulation.
///
/// Tick order: computer paddle tracking, paddle draws, collision
/// reflection against the far-side paddle, ball advance and edge bounce,
/// ball draw, then scoring. End-of-match detection happens before this is
/// called; see [`session::MatchSession::tick`].
pub fn step<R: RenderSink>(
    world: &mut World,
    geometry: &Geometry,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    render: &mut R,
) {
    events.clear();

    // 1. Advance the computer paddle toward the ball
    track_ball(world, geometry, config);
    draw_paddles(world, geometry, render);

    // 2. Reflect off the selected paddle on overlap
    resolve_paddle_collision(world, geometry, config, events);

    // 3. Move the ball and bounce it off the top/bottom edges
    advance_ball(world, geometry, events);
    draw_ball(world, render);

    // 4. Scoring and ball reset
    check_scoring(world, geometry, config, score, events);
    if events.computer_scored {
        render.show_score(Side::Computer, score.computer);
    }
    if events.human_scored {
        render.show_score(Side::Human, score.human);
    }
}

fn draw_paddles<R: RenderSink>(world: &World, geometry: &Geometry, render: &mut R) {
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        let size = geometry.paddle_size(paddle.side);
        render.draw_paddle(
            paddle.side,
            Rect::new(paddle.pos.x, paddle.pos.y, size.width, size.height),
        );
    }
}

fn draw_ball<R: RenderSink>(world: &World, render: &mut R) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        render.draw_ball(Rect::new(ball.pos.x, ball.pos.y, ball.radius, ball.radius));
    }
}

/// Spawn the pointer-controlled paddle pinned to the left edge
pub fn create_human_paddle(world: &mut World, geometry: &Geometry) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Human, geometry), PointerControlled))
}

/// Spawn the ball-tracking paddle pinned to the right edge
pub fn create_computer_paddle(world: &mut World, geometry: &Geometry) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Computer, geometry), Tracking))
}

/// Spawn the ball centered in the viewport
pub fn create_ball(world: &mut World, geometry: &Geometry, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(geometry, config),))
}
