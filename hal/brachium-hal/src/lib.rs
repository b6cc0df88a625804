//! Brachium Hardware Abstraction Layer
//!
//! This crate defines the hardware access the motion core needs and nothing
//! more. Chip-specific code (the firmware crate) implements these traits on
//! top of its own HAL, and tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (brachium-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  brachium-core (coordinator, steppers)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  brachium-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (STEP, DIR, ENABLE, LED)
//! - [`time::Clock`] - Monotonic microsecond clock and busy-wait delays

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use time::{deadline_reached, elapsed_us, Clock};
