// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Injectable clock for the livefeed simulator.
//!
//! The simulator never reads the system clock directly: it asks a [`Timer`]
//! for the current instant and for sleep futures. Production code uses
//! [`TokioTimer`]; tests drive the same timer deterministically with tokio's
//! paused clock (`tokio::time::pause` / `advance`).

pub mod impls;
pub mod instant;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;
pub use instant::CheckedInstant;
pub use timer::Timer;
