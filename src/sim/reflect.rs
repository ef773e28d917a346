use glam::Vec3;

use super::craft::CraftState;
use super::math::{normalize_or_zero, project, reflect, LENGTH_EPSILON};

/// Static wall: a point on the wall plane and its unit normal.
pub struct Wall {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Wall {
    /// The normal is normalized here so the reflection math downstream can
    /// rely on it being unit length. A degenerate input collapses to zero,
    /// which keeps everything finite (the demo just reflects to zero).
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normalize_or_zero(normal),
        }
    }
}

/// Per-tick diagnostic output of the reflection demo, consumed by the
/// renderer for the vector overlay.
pub struct ReflectionVectors {
    pub incident: Vec3,
    pub projected: Vec3,
    pub reflected: Vec3,
}

/// Computes incident/projected/reflected vectors against a fixed wall each
/// tick, and on a rising trigger edge replaces the craft's velocity with the
/// reflection.
pub struct ReflectionDemo {
    pub wall: Wall,
    was_pressed: bool,
}

impl ReflectionDemo {
    pub fn new(wall: Wall) -> Self {
        Self {
            wall,
            was_pressed: false,
        }
    }

    pub fn tick(&mut self, state: &mut CraftState, pressed: bool) -> ReflectionVectors {
        let incident = state.velocity;

        // Zero incident velocity would push NaNs through project(); guard it
        // the same way the integrator guards its renormalization.
        let (projected, reflected) = if incident.length() < LENGTH_EPSILON {
            (Vec3::ZERO, incident)
        } else {
            (
                project(incident, self.wall.normal),
                reflect(incident, self.wall.normal),
            )
        };

        if pressed && !self.was_pressed {
            // Signed closing speed against the wall; negative means the craft
            // is moving into it.
            log::debug!(
                "reflect trigger: closing speed {:.6}",
                incident.dot(self.wall.normal)
            );
            state.velocity = reflected;
        }
        self.was_pressed = pressed;

        ReflectionVectors {
            incident,
            projected,
            reflected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::craft::CraftState;

    fn demo() -> ReflectionDemo {
        // Wall to the right of the origin, facing back at the craft.
        ReflectionDemo::new(Wall::new(
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ))
    }

    fn moving_right() -> CraftState {
        let mut state = CraftState::new();
        state.velocity = Vec3::new(0.008, 0.002, 0.0);
        state
    }

    #[test]
    fn wall_normal_is_normalized_on_construction() {
        let wall = Wall::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0));
        assert!((wall.normal.length() - 1.0).abs() < 1e-6);
        // Degenerate normal collapses to zero rather than NaN.
        let wall = Wall::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(wall.normal, Vec3::ZERO);
    }

    #[test]
    fn trigger_fires_exactly_once_while_held() {
        let mut demo = demo();
        let mut state = moving_right();

        demo.tick(&mut state, false);
        let before = state.velocity;

        // First pressed tick reflects the velocity live at that tick.
        let vectors = demo.tick(&mut state, true);
        assert_eq!(vectors.incident, before);
        let reflected_once = state.velocity;
        assert!((reflected_once.x - (-before.x)).abs() < 1e-9);
        assert!((reflected_once.y - before.y).abs() < 1e-9);

        // Holding the trigger for four more ticks must not reflect again.
        for _ in 0..4 {
            demo.tick(&mut state, true);
            assert_eq!(state.velocity, reflected_once);
        }

        // Release and press again: fires once more.
        demo.tick(&mut state, false);
        demo.tick(&mut state, true);
        assert!((state.velocity.x - before.x).abs() < 1e-9);
    }

    #[test]
    fn projected_is_parallel_to_wall_normal() {
        let mut demo = demo();
        let mut state = moving_right();
        let vectors = demo.tick(&mut state, false);
        assert!(vectors.projected.cross(demo.wall.normal).length() < 1e-6);
    }

    #[test]
    fn zero_velocity_stays_finite_and_unreflected() {
        let mut demo = demo();
        let mut state = CraftState::new();
        let vectors = demo.tick(&mut state, true);
        assert_eq!(vectors.projected, Vec3::ZERO);
        assert_eq!(vectors.reflected, Vec3::ZERO);
        assert_eq!(state.velocity, Vec3::ZERO);
        assert!(state.velocity.is_finite());
    }
}
