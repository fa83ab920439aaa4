use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::geometry::{Aabb, Geometry, Size};
use crate::resources::Events;

/// Bounding-box overlap test over one (ball, paddle) snapshot. Built fresh
/// per check; no state outlives the call.
pub struct CollisionDetector {
    ball_box: Aabb,
    paddle_box: Aabb,
}

impl CollisionDetector {
    pub fn new(ball: &Ball, paddle: &Paddle, paddle_size: Size) -> Self {
        Self {
            ball_box: Aabb::for_ball(ball.pos, ball.radius),
            paddle_box: Aabb::for_paddle(paddle.pos, paddle_size),
        }
    }

    pub fn check(&self) -> bool {
        self.ball_box.overlaps(&self.paddle_box)
    }
}

/// Test the ball against one paddle and apply reflection physics on
/// overlap.
///
/// The paddle to test is chosen positionally: the one on the far side of
/// the midline from the human paddle. With the human pinned to the left
/// edge that is always the computer paddle; the rule only holds because
/// paddles never cross the midline.
pub fn resolve_paddle_collision(
    world: &mut World,
    geometry: &Geometry,
    config: &Config,
    events: &mut Events,
) {
    let ball = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_entity, ball)) => *ball,
            None => return,
        }
    };

    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    let human = match paddles.iter().find(|p| p.side == Side::Human) {
        Some(p) => *p,
        None => return,
    };

    let human_on_left = human.pos.x < geometry.midpoint_x();
    let selected_side = if human_on_left {
        Side::Computer
    } else {
        Side::Human
    };
    let selected = match paddles.iter().find(|p| p.side == selected_side) {
        Some(p) => *p,
        None => return,
    };

    let selected_size = geometry.paddle_size(selected_side);
    if !CollisionDetector::new(&ball, &selected, selected_size).check() {
        return;
    }

    // Offset of the contact point from the paddle center, normalized by
    // the human paddle's half height. Not clamped; geometry bounds it to
    // roughly +/-1.5 for the default sizes.
    let paddle_center = selected.pos.y + selected_size.height / 2.0;
    let distance_from_center =
        (ball.pos.y - paddle_center) / (geometry.human_paddle.height / 2.0);
    let angle = config.max_deflection_angle * distance_from_center;
    let direction = if human_on_left { 1.0 } else { -1.0 };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel.x = direction * ball.speed * angle.cos();
        ball.vel.y = ball.speed * angle.sin();
        ball.speed += config.ball_speed_increment;
    }
    events.ball_hit_paddle = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::{create_ball, create_computer_paddle, create_human_paddle};
    use glam::Vec2;

    fn setup() -> (World, Geometry, Config, Events) {
        let geometry = Geometry::new(
            Size::new(800.0, 400.0),
            Size::new(15.0, 100.0),
            Size::new(15.0, 100.0),
        );
        let config = Config::default();
        let mut world = World::new();
        create_human_paddle(&mut world, &geometry);
        create_computer_paddle(&mut world, &geometry);
        create_ball(&mut world, &geometry, &config);
        (world, geometry, config, Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    fn set_ball(world: &mut World, pos: Vec2, vel: Vec2, speed: f32) {
        for (_e, b) in world.query_mut::<&mut Ball>() {
            b.pos = pos;
            b.vel = vel;
            b.speed = speed;
        }
    }

    fn computer_center_y(world: &World, geometry: &Geometry) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == Side::Computer)
            .map(|(_e, p)| p.pos.y + geometry.computer_paddle.height / 2.0)
            .unwrap()
    }

    #[test]
    fn test_centered_hit_reflects_flat() {
        let (mut world, geometry, config, mut events) = setup();
        let center_y = computer_center_y(&world, &geometry);
        // Overlapping the computer paddle dead center
        set_ball(&mut world, Vec2::new(780.0, center_y), Vec2::ZERO, 5.0);

        resolve_paddle_collision(&mut world, &geometry, &config, &mut events);

        let b = ball(&world);
        assert!(events.ball_hit_paddle, "Overlap registers a paddle hit");
        assert_eq!(b.vel.y, 0.0, "Center hit has zero deflection");
        assert_eq!(b.vel.x, 5.0, "Center hit leaves at exactly full speed");
        assert_eq!(b.speed, 6.0, "Speed grows by the increment on each hit");
    }

    #[test]
    fn test_above_center_hit_deflects_upward() {
        let (mut world, geometry, config, mut events) = setup();
        let center_y = computer_center_y(&world, &geometry);
        set_ball(&mut world, Vec2::new(780.0, center_y - 30.0), Vec2::ZERO, 5.0);

        resolve_paddle_collision(&mut world, &geometry, &config, &mut events);

        let b = ball(&world);
        assert!(b.vel.y < 0.0, "Hit above center sends the ball upward");
        assert!(b.vel.x > 0.0);
    }

    #[test]
    fn test_below_center_hit_deflects_downward() {
        let (mut world, geometry, config, mut events) = setup();
        let center_y = computer_center_y(&world, &geometry);
        set_ball(&mut world, Vec2::new(780.0, center_y + 30.0), Vec2::ZERO, 5.0);

        resolve_paddle_collision(&mut world, &geometry, &config, &mut events);

        assert!(ball(&world).vel.y > 0.0, "Hit below center deflects down");
    }

    #[test]
    fn test_no_overlap_no_reflection() {
        let (mut world, geometry, config, mut events) = setup();
        let vel = Vec2::new(5.0, 5.0);
        set_ball(&mut world, Vec2::new(400.0, 200.0), vel, 5.0);

        resolve_paddle_collision(&mut world, &geometry, &config, &mut events);

        let b = ball(&world);
        assert_eq!(b.vel, vel, "Velocity untouched without overlap");
        assert_eq!(b.speed, 5.0, "Speed untouched without overlap");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_only_far_side_paddle_is_tested() {
        let (mut world, geometry, config, mut events) = setup();
        // Ball squarely overlapping the HUMAN paddle; the selection rule
        // still tests the computer paddle, so nothing happens.
        set_ball(&mut world, Vec2::new(10.0, 200.0), Vec2::new(-5.0, 0.0), 5.0);

        resolve_paddle_collision(&mut world, &geometry, &config, &mut events);

        assert!(
            !events.ball_hit_paddle,
            "Near-side paddle is never collision-tested"
        );
        assert_eq!(ball(&world).vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_detector_edge_touch_is_false() {
        let geometry = Geometry::new(
            Size::new(800.0, 400.0),
            Size::new(15.0, 100.0),
            Size::new(15.0, 100.0),
        );
        let paddle = Paddle::new(Side::Computer, &geometry);
        let ball = Ball {
            // Ball's right edge exactly on the paddle's left edge
            pos: Vec2::new(paddle.pos.x - 25.0, paddle.pos.y + 50.0),
            vel: Vec2::ZERO,
            speed: 5.0,
            radius: 25.0,
        };
        let detector = CollisionDetector::new(&ball, &paddle, geometry.computer_paddle);
        assert!(!detector.check(), "Touching boundaries do not collide");
    }
}
