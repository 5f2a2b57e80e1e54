//! Recurring refresh tick, owned by the view that started it.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Handle to a running periodic task. Dropping the handle aborts the task.
#[derive(Debug)]
pub struct RefreshTimer {
  handle: JoinHandle<()>,
  period: Duration,
}

impl RefreshTimer {
  /// Spawn a task that calls `on_tick` every `period`, first one `period` from now.
  ///
  /// Must be called from inside a tokio runtime.
  pub fn start<F>(period: Duration, mut on_tick: F) -> Self
  where
    F: FnMut() + Send + 'static,
  {
    let handle = tokio::spawn(async move {
      let mut interval = time::interval_at(Instant::now() + period, period);
      interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
      loop {
        interval.tick().await;
        on_tick();
      }
    });
    tracing::debug!(period_secs = period.as_secs(), "refresh timer started");
    Self { handle, period }
  }

  pub fn period(&self) -> Duration {
    self.period
  }

  pub fn is_running(&self) -> bool {
    !self.handle.is_finished()
  }

  /// Stop the task; no tick runs after this returns to the scheduler.
  pub fn cancel(self) {
    drop(self);
  }
}

impl Drop for RefreshTimer {
  fn drop(&mut self) {
    self.handle.abort();
    tracing::debug!("refresh timer cancelled");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;

  fn counting_timer(period: Duration) -> (RefreshTimer, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    let timer = RefreshTimer::start(period, move || {
      c.fetch_add(1, Ordering::SeqCst);
    });
    (timer, count)
  }

  #[tokio::test(start_paused = true)]
  async fn ticks_once_per_period() {
    let (timer, count) = counting_timer(Duration::from_secs(60));

    time::sleep(Duration::from_secs(59)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    time::sleep(Duration::from_secs(2)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);

    time::sleep(Duration::from_secs(120)).await;
    assert_eq!(count.load(Ordering::SeqCst), 3);
    assert!(timer.is_running());
  }

  #[tokio::test(start_paused = true)]
  async fn no_ticks_after_cancel() {
    let (timer, count) = counting_timer(Duration::from_secs(60));
    time::sleep(Duration::from_secs(61)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);

    timer.cancel();
    time::sleep(Duration::from_secs(600)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
  }

  #[tokio::test(start_paused = true)]
  async fn dropping_the_handle_stops_the_task() {
    let (timer, count) = counting_timer(Duration::from_secs(1));
    drop(timer);
    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
  }
}
