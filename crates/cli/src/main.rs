//! Terminal scoreboard entry point.
mod input;
mod presentation;
mod state;

use anyhow::Result;

use courtside_runtime::Runtime;
use presentation::{EventLoop, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime = Runtime::builder().build();

    let mut tui = terminal::init()?;
    let guard = terminal::TerminalGuard;
    let result = EventLoop::new(runtime.handle()).run(&mut tui).await;
    drop(guard);

    let final_state = result?;
    runtime.shutdown().await?;

    tracing::info!(
        state = %serde_json::to_string(&final_state)?,
        "final scoreboard"
    );
    println!(
        "Final: {} {} - {} {}",
        final_state.home.name,
        final_state.home.score,
        final_state.guest.name,
        final_state.guest.score
    );

    Ok(())
}
