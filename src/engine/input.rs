use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

use crate::sim::Controls;

pub struct InputState {
    keys: HashSet<Scancode>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            quit: false,
        }
    }

    /// Drain all pending events, then keep the held-key set current.
    /// Events other than quit/key transitions are dropped.
    pub fn update(&mut self, event_pump: &mut EventPump) {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc), ..
                } => {
                    self.keys.insert(sc);
                }
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    self.keys.remove(&sc);
                }
                _ => {}
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    /// Per-tick boolean readout of the five simulation controls.
    pub fn controls(&self) -> Controls {
        Controls {
            turn_left: self.is_key_held(Scancode::Left),
            turn_right: self.is_key_held(Scancode::Right),
            thrust_forward: self.is_key_held(Scancode::Up),
            thrust_backward: self.is_key_held(Scancode::Down),
            reflect: self.is_key_held(Scancode::Space),
        }
    }
}
