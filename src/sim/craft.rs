use glam::Vec3;

use super::math::{point_on_circle, LENGTH_EPSILON};

/// Fixed tuning constants, all derived from the top speed.
pub struct Tuning {
    /// Speed clamp, world units per tick.
    pub top_speed: f32,
    /// Speed added per tick of held thrust.
    pub acceleration: f32,
    /// Speed removed per tick, pre-movement.
    pub drag: f32,
    /// Fraction of spin kept each tick (1.0 = no decay).
    pub momentum: f32,
    /// Spin clamp, radians per tick.
    pub top_spin: f32,
}

impl Tuning {
    pub fn new(top_speed: f32) -> Self {
        let acceleration = top_speed / 60.0;
        let drag = acceleration / 10.0;
        let tuning = Self {
            top_speed,
            acceleration,
            drag,
            momentum: 0.95,
            top_spin: 0.05,
        };
        debug_assert!(0.0 < tuning.drag && tuning.drag < tuning.acceleration);
        debug_assert!(0.0 < tuning.momentum && tuning.momentum < 1.0);
        tuning
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new(0.01)
    }
}

/// Per-tick boolean readout of the five controls. Plain data so the
/// simulation core never touches SDL directly.
#[derive(Clone, Copy, Default)]
pub struct Controls {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub reflect: bool,
}

/// The one persistent piece of simulation state, mutated in place once per
/// tick by [`steering_step`].
pub struct CraftState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Signed angular rate, radians per tick.
    pub spin: f32,
    /// Heading angle in radians. Accumulates without wraparound.
    pub angle: f32,
}

impl CraftState {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            spin: 0.0,
            angle: 0.0,
        }
    }
}

/// Advance the craft by one tick. Returns the heading vector that was used,
/// so the caller can draw it without recomputing.
///
/// Ordering is load-bearing: the angle update uses the pre-decay spin, so a
/// turn's effect on heading lags the decay by one tick. Call exactly once per
/// rendered frame; the physics is frame-rate coupled, not wall-clock coupled.
pub fn steering_step(state: &mut CraftState, controls: &Controls, tuning: &Tuning) -> Vec3 {
    let heading = point_on_circle(state.angle, 1.0);

    if controls.turn_right {
        state.spin += 0.5;
    }
    if controls.turn_left {
        state.spin -= 0.5;
    }
    state.spin = state.spin.clamp(-tuning.top_spin, tuning.top_spin);

    state.angle += state.spin;
    state.spin *= tuning.momentum;

    let mut delta = 0.0;
    if controls.thrust_forward {
        delta += tuning.acceleration;
    }
    if controls.thrust_backward {
        delta -= tuning.acceleration;
    }
    state.velocity += heading * delta;

    let old_speed = state.velocity.length();
    if old_speed >= LENGTH_EPSILON {
        let mut new_speed = old_speed - tuning.drag;
        // Magnitude-only clamp: a negative new_speed below the limit is left
        // as-is, never snapped to -top_speed.
        if new_speed.abs() > tuning.top_speed {
            new_speed = tuning.top_speed;
        }
        state.velocity *= new_speed / old_speed;
    }

    state.position += state.velocity;

    heading
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn held(
        turn_left: bool,
        turn_right: bool,
        thrust_forward: bool,
        thrust_backward: bool,
    ) -> Controls {
        Controls {
            turn_left,
            turn_right,
            thrust_forward,
            thrust_backward,
            reflect: false,
        }
    }

    #[test]
    fn tuning_invariants_hold() {
        let t = Tuning::default();
        assert!(0.0 < t.drag && t.drag < t.acceleration);
        assert!(0.0 < t.momentum && t.momentum < 1.0);
        assert!((t.acceleration - t.top_speed / 60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_velocity_stays_zero_without_thrust() {
        let tuning = Tuning::default();
        let mut state = CraftState::new();
        steering_step(&mut state, &held(false, false, false, false), &tuning);
        assert_eq!(state.velocity, Vec3::ZERO);
        assert_eq!(state.position, Vec3::ZERO);
        assert!(state.velocity.is_finite());
    }

    #[test]
    fn first_thrust_tick_from_rest() {
        let tuning = Tuning::default();
        let mut state = CraftState::new();
        steering_step(&mut state, &held(false, false, true, false), &tuning);

        // Heading is (1, 0, 0) at angle 0; thrust adds acceleration along it,
        // then drag trims the magnitude. No clamp below top_speed.
        let expected = tuning.acceleration - tuning.drag;
        assert!((state.velocity.x - expected).abs() < 1e-9);
        assert_eq!(state.velocity.y, 0.0);
        assert_eq!(state.velocity.z, 0.0);
        // Position integrates the already-updated velocity.
        assert_eq!(state.position, state.velocity);
    }

    #[test]
    fn angle_uses_pre_decay_spin() {
        let tuning = Tuning::default();
        let mut state = CraftState::new();
        steering_step(&mut state, &held(false, true, false, false), &tuning);

        // +0.5 clamps to top_spin, angle advances by the clamped value,
        // decay only applies afterwards.
        assert!((state.angle - tuning.top_spin).abs() < 1e-9);
        assert!((state.spin - tuning.top_spin * tuning.momentum).abs() < 1e-9);
    }

    #[test]
    fn spin_decays_every_tick_unconditionally() {
        let tuning = Tuning::default();
        let mut state = CraftState::new();
        steering_step(&mut state, &held(false, true, false, false), &tuning);
        let spin_after_turn = state.spin;
        steering_step(&mut state, &held(false, false, false, false), &tuning);
        assert!((state.spin - spin_after_turn * tuning.momentum).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn spin_stays_clamped(inputs in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..200)) {
            let tuning = Tuning::default();
            let mut state = CraftState::new();
            for (left, right) in inputs {
                steering_step(&mut state, &held(left, right, false, false), &tuning);
                prop_assert!(state.spin >= -tuning.top_spin - 1e-9);
                prop_assert!(state.spin <= tuning.top_spin + 1e-9);
            }
        }

        #[test]
        fn speed_stays_clamped(inputs in proptest::collection::vec(any::<(bool, bool, bool, bool)>(), 1..200)) {
            let tuning = Tuning::default();
            let mut state = CraftState::new();
            for (left, right, fwd, back) in inputs {
                steering_step(&mut state, &held(left, right, fwd, back), &tuning);
                prop_assert!(state.velocity.length() <= tuning.top_speed + 1e-6);
                prop_assert!(state.velocity.is_finite());
            }
        }
    }
}
