//! Folio - Terminal portfolio
//!
//! The core owns all view state. This crate maps key presses to commands,
//! feeds carousel timer ticks back into the core, and draws frames.

mod commands;
mod opener;
mod state;
mod ui;

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyEventKind};
use folio_core::{init_logging, Config, Portfolio, TimerRuntime, TimerTick};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::MissedTickBehavior;

use commands::Command;
use state::AppState;

/// Redraw cadence while a fade is running
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load_or_default().context("failed to load config")?;
    init_logging(&config.log_path).context("failed to initialize logging")?;

    let (timers, ticks) = TimerRuntime::new()?;
    let portfolio = Portfolio::new(config, timers, Instant::now())?;
    let mut state = AppState::new(portfolio);

    let mut terminal = ratatui::try_init().context("failed to set up terminal")?;
    tracing::info!("Folio started");

    let result = event_loop(&mut terminal, &mut state, ticks).await;

    ratatui::restore();
    if let Err(e) = &result {
        tracing::error!(error = %e, "Folio stopped with an error");
    } else {
        tracing::info!("Folio exited");
    }
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut ticks: UnboundedReceiver<TimerTick>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut dirty = true;
    let mut was_animating = false;

    while !state.should_quit() {
        let now = Instant::now();
        state.portfolio_mut().advance(now);

        // One more frame after a fade ends so it settles at full opacity
        let animating = state.portfolio().is_animating(now);
        if dirty || animating || was_animating {
            terminal.draw(|frame| ui::render(frame, state, now))?;
            dirty = false;
        }
        was_animating = animating;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = Command::from_key(key) {
                        tracing::debug!(?command, "Key command");
                        commands::dispatch(state, command, Instant::now());
                    }
                    dirty = true;
                }
                Some(Ok(Event::Resize(..))) => dirty = true,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("terminal input failed"),
                None => break,
            },
            Some(tick) = ticks.recv() => {
                dirty |= state.portfolio_mut().on_timer(tick, Instant::now());
            }
            _ = frames.tick() => {}
        }
    }

    Ok(())
}
