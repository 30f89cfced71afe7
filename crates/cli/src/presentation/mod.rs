//! Terminal presentation: setup/teardown, the event loop, and widgets.
pub mod event_loop;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;
