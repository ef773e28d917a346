use glam::Vec3;
use sdl2::Sdl;

use crate::engine::input::InputState;
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::renderer::DebugRenderer;
use crate::sim::{steering_step, CraftState, ReflectionDemo, ReflectionVectors, Tuning, Wall};

const CRAFT_RADIUS: f32 = 0.1;
// Velocities are tiny in viewport units; stretch the indicator lines so they
// are visible at all.
const VECTOR_DISPLAY_SCALE: f32 = 10.0;

const CROSS_COLOR: Vec3 = Vec3::new(0.25, 0.25, 0.25);
const CRAFT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const HEADING_COLOR: Vec3 = Vec3::new(0.2, 0.9, 0.2);
const VELOCITY_COLOR: Vec3 = Vec3::new(0.2, 0.8, 0.9);
const WALL_COLOR: Vec3 = Vec3::new(0.9, 0.9, 0.2);
const NORMAL_COLOR: Vec3 = Vec3::new(0.9, 0.5, 0.1);
const PROJECTED_COLOR: Vec3 = Vec3::new(0.9, 0.2, 0.9);
const INCIDENT_COLOR: Vec3 = Vec3::new(0.9, 0.2, 0.2);
const REFLECTED_COLOR: Vec3 = Vec3::new(0.4, 0.4, 1.0);

pub struct App {
    tuning: Tuning,
    state: CraftState,
    demo: ReflectionDemo,
    renderer: DebugRenderer,
    diagnostics: bool,
    fps_frames: u32,
    fps_elapsed: f32,
}

impl App {
    pub fn new(diagnostics: bool) -> Self {
        // Wall to the right of the start position, facing back at the craft.
        let wall = Wall::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));

        Self {
            tuning: Tuning::default(),
            state: CraftState::new(),
            demo: ReflectionDemo::new(wall),
            renderer: DebugRenderer::init(),
            diagnostics,
            fps_frames: 0,
            fps_elapsed: 0.0,
        }
    }

    pub fn run(&mut self, sdl: &Sdl, window: &GameWindow) {
        let mut event_pump = sdl.event_pump().expect("Failed to get event pump");
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.should_quit() {
                break;
            }

            // One simulation tick per rendered frame, in a fixed order:
            // steering first, then the reflection demo reads the result.
            let controls = input.controls();
            let heading = steering_step(&mut self.state, &controls, &self.tuning);
            let vectors = self.demo.tick(&mut self.state, controls.reflect);

            self.render(heading, &vectors);
            self.log_fps(timer.dt);

            window.swap();
        }
    }

    fn render(&mut self, heading: Vec3, vectors: &ReflectionVectors) {
        let position = self.state.position;

        self.renderer.begin_frame();

        // Static X pattern spanning the normalized viewport.
        self.renderer.line(
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            CROSS_COLOR,
        );
        self.renderer.line(
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            CROSS_COLOR,
        );

        self.renderer.circle(position, CRAFT_RADIUS, CRAFT_COLOR);
        self.renderer.line(position, position + heading, HEADING_COLOR);
        self.renderer.line(
            position,
            position + self.state.velocity * VECTOR_DISPLAY_SCALE,
            VELOCITY_COLOR,
        );

        if self.diagnostics {
            let wall = &self.demo.wall;
            let tangent = Vec3::new(-wall.normal.y, wall.normal.x, 0.0);
            self.renderer
                .line(wall.point - tangent, wall.point + tangent, WALL_COLOR);
            self.renderer
                .line(wall.point, wall.point + wall.normal * 0.25, NORMAL_COLOR);
            self.renderer.line(
                position,
                position + vectors.projected * VECTOR_DISPLAY_SCALE,
                PROJECTED_COLOR,
            );
            self.renderer.line(
                position,
                position + vectors.incident * VECTOR_DISPLAY_SCALE,
                INCIDENT_COLOR,
            );
            self.renderer.line(
                position,
                position + vectors.reflected * VECTOR_DISPLAY_SCALE,
                REFLECTED_COLOR,
            );
        }
    }

    fn log_fps(&mut self, dt: f32) {
        self.fps_frames += 1;
        self.fps_elapsed += dt;
        if self.fps_elapsed >= 1.0 {
            log::debug!(
                "fps {:.0}, speed {:.6}",
                self.fps_frames as f32 / self.fps_elapsed,
                self.state.velocity.length()
            );
            self.fps_frames = 0;
            self.fps_elapsed = 0.0;
        }
    }
}
