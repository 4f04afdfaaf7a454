//! Countdown background task
//!
//! One task owns the [`TimerEngine`]; commands from handles and 1-second
//! interval ticks are serialized through a single `select!` loop, so a
//! tick in flight when a pause or reset arrives can never apply after
//! the transition. Every mutation publishes a fresh [`UiState`] on a
//! watch channel.

use std::time::Duration;

use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{interval_at, Instant, Interval},
};
use tracing::{debug, info, warn};

use crate::{
    engine::{Command, TimerEngine},
    state::{TimerConfiguration, TimerState, UiState},
};

/// Wall-clock period of one countdown decrement.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Command channel depth; commands are drained promptly, this only
/// absorbs bursts from the control surface.
const COMMAND_BUFFER: usize = 32;

struct CommandRequest {
    command: Command,
    reply: oneshot::Sender<UiState>,
}

/// Cloneable facade over the countdown task: the command surface plus
/// the observation contract.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    command_tx: mpsc::Sender<CommandRequest>,
    ui_rx: watch::Receiver<UiState>,
}

impl EngineHandle {
    /// Spawn a countdown task for one engine instance. The task exits
    /// when every handle has been dropped.
    pub fn spawn(config: TimerConfiguration) -> Self {
        let engine = TimerEngine::new(config);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (ui_tx, ui_rx) = watch::channel(engine.ui_state());

        tokio::spawn(countdown_task(engine, command_rx, ui_tx));

        Self { command_tx, ui_rx }
    }

    /// Observe the countdown: the receiver holds the current snapshot
    /// immediately and is notified on every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.ui_rx.clone()
    }

    /// Latest published snapshot.
    pub fn current(&self) -> UiState {
        self.ui_rx.borrow().clone()
    }

    pub async fn increment_minutes(&self) -> UiState {
        self.request(Command::IncrementMinutes).await
    }

    pub async fn decrement_minutes(&self) -> UiState {
        self.request(Command::DecrementMinutes).await
    }

    pub async fn increment_seconds(&self) -> UiState {
        self.request(Command::IncrementSeconds).await
    }

    pub async fn decrement_seconds(&self) -> UiState {
        self.request(Command::DecrementSeconds).await
    }

    pub async fn start_timer(&self) -> UiState {
        self.request(Command::Start).await
    }

    pub async fn pause_timer(&self) -> UiState {
        self.request(Command::Pause).await
    }

    pub async fn resume_timer(&self) -> UiState {
        self.request(Command::Resume).await
    }

    pub async fn reset_timer(&self) -> UiState {
        self.request(Command::Reset).await
    }

    /// Send a command and wait for the post-command snapshot. Invalid
    /// commands are no-ops in the engine, so this never fails; if the
    /// task is gone the last published snapshot is returned.
    async fn request(&self, command: Command) -> UiState {
        let (reply_tx, reply_rx) = oneshot::channel();
        let request = CommandRequest {
            command,
            reply: reply_tx,
        };

        if self.command_tx.send(request).await.is_err() {
            warn!("Countdown task is gone, dropping command '{}'", command.as_str());
            return self.current();
        }

        match reply_rx.await {
            Ok(ui) => ui,
            Err(_) => self.current(),
        }
    }
}

/// Drive one engine: apply commands as they arrive, tick once per second
/// while running, publish a snapshot after every mutation.
async fn countdown_task(
    mut engine: TimerEngine,
    mut command_rx: mpsc::Receiver<CommandRequest>,
    ui_tx: watch::Sender<UiState>,
) {
    info!("Starting countdown task");

    // Present only while the engine is running; dropping it is what
    // cancels a pending tick on pause, reset and finish.
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            request = command_rx.recv() => {
                let Some(CommandRequest { command, reply }) = request else {
                    info!("All handles dropped, stopping countdown task");
                    break;
                };

                engine.apply(command);
                sync_ticker(&engine, &mut ticker);
                publish(&ui_tx, &engine);

                // The handle may have stopped waiting; that is fine.
                let _ = reply.send(engine.ui_state());
            }

            _ = next_tick(ticker.as_mut()), if ticker.is_some() => {
                engine.tick();
                sync_ticker(&engine, &mut ticker);
                publish(&ui_tx, &engine);
            }
        }
    }
}

/// Keep the ticker's existence in lockstep with the engine state:
/// created on entry to Running (first tick one full period later, never
/// immediately), dropped on every exit from Running. An already-armed
/// ticker is left alone so its phase is preserved across ticks.
fn sync_ticker(engine: &TimerEngine, ticker: &mut Option<Interval>) {
    match engine.state() {
        TimerState::Running => {
            if ticker.is_none() {
                debug!("Arming 1-second ticker");
                *ticker = Some(interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD));
            }
        }
        TimerState::Ready | TimerState::Pause => {
            if ticker.take().is_some() {
                debug!("Cancelling ticker");
            }
        }
    }
}

async fn next_tick(ticker: Option<&mut Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn publish(ui_tx: &watch::Sender<UiState>, engine: &TimerEngine) {
    ui_tx.send_if_modified(|current| {
        let next = engine.ui_state();
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wait until the watch channel publishes a snapshot matching the
    /// predicate, recording every snapshot seen on the way.
    async fn wait_for(
        rx: &mut watch::Receiver<UiState>,
        seen: &mut Vec<UiState>,
        predicate: impl Fn(&UiState) -> bool,
    ) -> UiState {
        loop {
            rx.changed().await.expect("countdown task must stay alive");
            let ui = rx.borrow_and_update().clone();
            seen.push(ui.clone());
            if predicate(&ui) {
                return ui;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn subscriber_sees_initial_snapshot_immediately() {
        let handle = EngineHandle::spawn(TimerConfiguration::new(1, 30));
        let rx = handle.subscribe();

        let ui = rx.borrow().clone();
        assert_eq!(ui.timer_state, TimerState::Ready);
        assert_eq!(ui.display(), "01:30");
        assert_eq!(ui.progress, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn five_second_countdown_runs_to_ready() {
        let handle = EngineHandle::spawn(TimerConfiguration::new(0, 5));
        let mut rx = handle.subscribe();
        let mut seen = Vec::new();

        let ui = handle.start_timer().await;
        assert_eq!(ui.timer_state, TimerState::Running);
        assert_eq!(ui.seconds, 5);

        let done = wait_for(&mut rx, &mut seen, |ui| {
            ui.timer_state == TimerState::Ready
        })
        .await;
        assert_eq!(done.seconds, 5);
        assert_eq!(done.progress, 0.0);

        // Every intermediate second was published in order, none skipped.
        let running: Vec<u32> = seen
            .iter()
            .filter(|ui| ui.timer_state == TimerState::Running)
            .map(|ui| ui.seconds)
            .collect();
        assert_eq!(running, vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_and_resume_lose_no_seconds() {
        let handle = EngineHandle::spawn(TimerConfiguration::new(0, 5));
        let mut rx = handle.subscribe();
        let mut seen = Vec::new();

        handle.start_timer().await;
        wait_for(&mut rx, &mut seen, |ui| ui.seconds == 3).await;

        let paused = handle.pause_timer().await;
        assert_eq!(paused.timer_state, TimerState::Pause);
        assert_eq!(paused.seconds, 3);

        // Frozen: no tick may arrive while paused.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(handle.current(), paused);

        let resumed = handle.resume_timer().await;
        assert_eq!(resumed.timer_state, TimerState::Running);
        assert_eq!(resumed.seconds, 3);

        seen.clear();
        wait_for(&mut rx, &mut seen, |ui| {
            ui.timer_state == TimerState::Ready
        })
        .await;
        let running: Vec<u32> = seen
            .iter()
            .filter(|ui| ui.timer_state == TimerState::Running)
            .map(|ui| ui.seconds)
            .collect();
        // The resumed snapshot at 3 comes first, then the remaining ticks.
        assert_eq!(running, vec![3, 2, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_from_pause_restores_configuration() {
        let handle = EngineHandle::spawn(TimerConfiguration::new(2, 0));
        let mut rx = handle.subscribe();
        let mut seen = Vec::new();

        handle.start_timer().await;
        wait_for(&mut rx, &mut seen, |ui| ui.seconds == 55).await;
        handle.pause_timer().await;

        let ui = handle.reset_timer().await;
        assert_eq!(ui.timer_state, TimerState::Ready);
        assert_eq!(ui.display(), "02:00");
        assert_eq!(ui.progress, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn start_with_zero_duration_stays_ready() {
        let handle = EngineHandle::spawn(TimerConfiguration::new(0, 0));

        let ui = handle.start_timer().await;
        assert_eq!(ui.timer_state, TimerState::Ready);

        // No ticker was armed, so nothing changes as time passes.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(handle.current().timer_state, TimerState::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn duration_adjustments_only_apply_while_ready() {
        let handle = EngineHandle::spawn(TimerConfiguration::new(0, 10));

        let ui = handle.increment_minutes().await;
        assert_eq!((ui.minutes, ui.seconds), (1, 10));
        let ui = handle.decrement_minutes().await;
        assert_eq!((ui.minutes, ui.seconds), (0, 10));

        handle.start_timer().await;
        let ui = handle.increment_minutes().await;
        assert_eq!(ui.minutes, 0);
        assert_eq!(ui.timer_state, TimerState::Running);
    }
}
