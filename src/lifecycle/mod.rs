//! Supervised lifecycle for the orchestrated run.
//!
//! One process invocation performs exactly one run. The runner registers a
//! single interrupt listener whose only effect is to cancel the run's token,
//! then awaits the run. Cancellation is cooperative: the run observes the
//! token at its own checkpoints and unwinds cleanly, so the process never
//! force-kills in-flight generator work. There is no restart loop.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::bundler::GenerationOutcome;
use crate::error::{GeneratorError, Result};

/// Terminal state of one supervised run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The run finished its work (generated, or found the bundle up to date)
    Completed(GenerationOutcome),
    /// The run propagated an error
    Failed(GeneratorError),
    /// The run honored a cancellation request at a checkpoint
    GracefullyCancelled,
}

/// Supervises the single managed unit of work.
///
/// # Examples
///
/// ```no_run
/// use swift_sdk_bundler::bundler::GenerationOutcome;
/// use swift_sdk_bundler::lifecycle::{LifecycleRunner, RunOutcome};
///
/// # async fn example() {
/// let runner = LifecycleRunner::new();
/// let token = runner.cancellation_token();
/// let outcome = runner
///     .supervise(async move {
///         // run the orchestrator with `token` here
///         Ok(GenerationOutcome::Generated)
///     })
///     .await;
/// assert!(matches!(outcome, RunOutcome::Completed(_)));
/// # }
/// ```
#[derive(Debug, Default)]
pub struct LifecycleRunner {
    token: CancellationToken,
}

impl LifecycleRunner {
    /// Creates a runner with a fresh cancellation token.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Returns a clone of the token handed into the managed run.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Runs `work` to its terminal state under interrupt supervision.
    ///
    /// The interrupt listener is aborted on every terminal transition, so a
    /// finished run leaves no residual scheduled work behind.
    pub async fn supervise<F>(&self, work: F) -> RunOutcome
    where
        F: Future<Output = Result<GenerationOutcome>>,
    {
        let listener = tokio::spawn(listen_for_interrupt(self.token.clone()));

        let result = work.await;
        listener.abort();

        match result {
            Ok(GenerationOutcome::Cancelled) => RunOutcome::GracefullyCancelled,
            Ok(outcome) => RunOutcome::Completed(outcome),
            Err(e) => RunOutcome::Failed(e),
        }
    }
}

/// Waits for an interrupt and requests cancellation of the managed run.
///
/// Registration failure is logged and the listener exits; the run then
/// proceeds without interrupt handling rather than panicking in a task
/// nobody joins.
#[cfg(unix)]
async fn listen_for_interrupt(token: CancellationToken) {
    use tokio::signal::unix::{SignalKind, signal};

    let (mut sigterm, mut sigint) =
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("failed to register signal handlers, interrupts will not cancel the run: {}", e);
                return;
            }
        };

    tokio::select! {
        _ = sigterm.recv() => {
            log::info!("received SIGTERM, requesting graceful shutdown");
        }
        _ = sigint.recv() => {
            log::info!("received SIGINT, requesting graceful shutdown");
        }
    }

    token.cancel();
}

#[cfg(not(unix))]
async fn listen_for_interrupt(token: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        log::info!("received interrupt, requesting graceful shutdown");
        token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completed_work_reports_completed() {
        let runner = LifecycleRunner::new();
        let outcome = runner
            .supervise(async { Ok(GenerationOutcome::Generated) })
            .await;
        assert!(matches!(
            outcome,
            RunOutcome::Completed(GenerationOutcome::Generated)
        ));
    }

    #[tokio::test]
    async fn failed_work_reports_failed() {
        let runner = LifecycleRunner::new();
        let outcome = runner
            .supervise(async {
                Err(GeneratorError::RecipeConstruction {
                    reason: "boom".to_string(),
                })
            })
            .await;
        assert!(matches!(outcome, RunOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn cancellation_mid_run_is_graceful_not_failed() {
        let runner = LifecycleRunner::new();
        let token = runner.cancellation_token();

        let cancel_handle = runner.cancellation_token();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            cancel_handle.cancel();
        });

        // Work that checkpoints the token the way the generator does.
        let outcome = runner
            .supervise(async move {
                loop {
                    if token.is_cancelled() {
                        return Ok(GenerationOutcome::Cancelled);
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(1)).await;
                }
            })
            .await;

        assert!(matches!(outcome, RunOutcome::GracefullyCancelled));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn interrupt_listener_registers_and_waits_without_panicking() {
        let token = CancellationToken::new();
        let listener = tokio::spawn(listen_for_interrupt(token.clone()));

        // Give registration a chance to run, then tear the listener down the
        // way a terminal transition does.
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(!listener.is_finished());
        assert!(!token.is_cancelled());
        listener.abort();
    }

    #[tokio::test]
    async fn work_finishing_before_observing_cancel_reports_completed() {
        let runner = LifecycleRunner::new();
        runner.cancellation_token().cancel();

        // The run completed its work without reaching another checkpoint.
        let outcome = runner
            .supervise(async { Ok(GenerationOutcome::Generated) })
            .await;
        assert!(matches!(outcome, RunOutcome::Completed(_)));
    }
}
