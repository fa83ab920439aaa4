use hecs::World;

use crate::components::{Paddle, PointerControlled};
use crate::geometry::Geometry;

/// Map a pointer's vertical coordinate onto the pointer-controlled
/// paddle's top edge. Arrives from the host between ticks; never
/// concurrently with one.
pub fn apply_pointer(world: &mut World, geometry: &Geometry, pointer_y: f32) {
    for (_entity, (paddle, _pointer)) in world.query_mut::<(&mut Paddle, &PointerControlled)>() {
        let paddle_height = geometry.paddle_size(paddle.side).height;
        paddle.pos.y = pointer_y - geometry.viewport.height + paddle_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::geometry::Size;
    use crate::{create_computer_paddle, create_human_paddle};

    fn setup() -> (World, Geometry) {
        let geometry = Geometry::new(
            Size::new(800.0, 400.0),
            Size::new(15.0, 100.0),
            Size::new(15.0, 100.0),
        );
        let mut world = World::new();
        create_human_paddle(&mut world, &geometry);
        create_computer_paddle(&mut world, &geometry);
        (world, geometry)
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.pos.y)
            .unwrap()
    }

    #[test]
    fn test_pointer_maps_to_paddle_top() {
        let (mut world, geometry) = setup();

        apply_pointer(&mut world, &geometry, 350.0);

        // 350 - 400 + 100
        assert_eq!(paddle_y(&world, Side::Human), 50.0);
    }

    #[test]
    fn test_mapping_is_not_clamped() {
        let (mut world, geometry) = setup();

        apply_pointer(&mut world, &geometry, 0.0);

        // Vertical travel is not clamped to the viewport
        assert_eq!(paddle_y(&world, Side::Human), -300.0);
    }

    #[test]
    fn test_tracking_paddle_ignores_pointer() {
        let (mut world, geometry) = setup();
        let before = paddle_y(&world, Side::Computer);

        apply_pointer(&mut world, &geometry, 10.0);

        assert_eq!(paddle_y(&world, Side::Computer), before);
    }
}
