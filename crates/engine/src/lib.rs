//! Kinetype Engine — The Interaction Runtime
//!
//! Turns host UI events into spring animation commands:
//! - **Velocity:** Throttled pointer sampling with frame-batched publication
//! - **Scatter:** Hover displacement derived from the pointer velocity
//! - **Idle:** Inactivity detection driving the shake/reset cycle
//! - **Carousel:** Autonomous two-phase slide/stamp rotation
//!
//! Each mounted instance is one task owning all of its state; hosts
//! talk to it through a handle and receive animation commands through
//! the animator trait they provide.

pub mod carousel;
pub mod idle;
pub mod scatter;
pub mod session;
pub mod timer;
pub mod velocity;

pub use carousel::{Carousel, CarouselCycle};
pub use idle::{IdleFire, IdlePhase, IdleSupervisor};
pub use scatter::ScatterController;
pub use session::ScatterText;
pub use timer::TimerSlot;
pub use velocity::VelocityTracker;
