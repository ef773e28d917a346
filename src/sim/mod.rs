pub mod craft;
pub mod math;
pub mod reflect;

pub use craft::{steering_step, Controls, CraftState, Tuning};
pub use reflect::{ReflectionDemo, ReflectionVectors, Wall};
