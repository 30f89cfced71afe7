//! Runtime orchestration for a scoreboard session.
//!
//! This crate wires the pure reducer from `courtside-core` into a tokio
//! task model: a session worker owns the authoritative state and consumes
//! commands in arrival order (the serialization point that keeps every
//! operation atomic), and a clock worker feeds it one tick per second
//! while the session lives. Consumers embed [`Runtime`] and interact
//! through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`handle`] exposes the client-facing API
//! - [`event`] defines the broadcast payloads front-ends subscribe to
//! - `worker` keeps background tasks internal to the crate
pub mod error;
pub mod event;
pub mod handle;
pub mod runtime;

mod worker;

pub use error::{Result, RuntimeError};
pub use event::GameEvent;
pub use handle::RuntimeHandle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
