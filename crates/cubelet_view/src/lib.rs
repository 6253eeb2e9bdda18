//! Interactive layer of the cubelet cube: pointer gestures, layer drag
//! inference, twist animations, and the programmatic move queue.
//!
//! The host application owns rendering. It implements [`Viewport`] for hit
//! testing, forwards pointer events to [`CubeSimulation`], calls
//! [`CubeSimulation::step()`] once per frame, and draws each cubie using
//! [`CubeSimulation::render_transforms()`].

mod animations;
mod camera;
mod drag;
pub mod grip;
mod input;
mod queue;
mod simulation;

pub use animations::TwistAnimation;
pub use camera::OrbitCamera;
pub use drag::{DragSession, DragState, PickSession, snap_turns};
pub use grip::LayerGrip;
pub use input::{PickHit, PointerButton, Ray, Viewport};
pub use queue::MoveQueue;
pub use simulation::{CubeSimulation, CubieTransform};

#[cfg(test)]
mod tests;
