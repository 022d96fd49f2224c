use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::config::DebounceConfig;
use crate::error::{Result, TimingError};

/// Pending call state, guarded by the debouncer's mutex.
struct DebounceState<A, R> {
    /// Bumped on every schedule, flush and cancel. A timer only fires if
    /// the generation it was armed with is still current.
    generation: u64,
    /// Armed timer task, if any.
    timer: Option<JoinHandle<()>>,
    /// Arguments of the most recent call.
    args: Option<A>,
    /// Every caller since the last run, waiting for the shared result.
    waiters: Vec<oneshot::Sender<R>>,
}

impl<A, R> DebounceState<A, R> {
    /// Disarm the timer and take the pending call, if there is one.
    fn take_pending(&mut self) -> Option<(A, Vec<oneshot::Sender<R>>)> {
        self.generation += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let args = self.args.take()?;
        Some((args, std::mem::take(&mut self.waiters)))
    }
}

struct Inner<A, R> {
    func: Box<dyn Fn(A) -> R + Send + Sync>,
    wait: Duration,
    state: Mutex<DebounceState<A, R>>,
}

impl<A, R: Clone> Inner<A, R> {
    /// Timer callback: run the pending call unless a newer call re-armed
    /// the timer in the meantime.
    fn fire(&self, generation: u64) {
        let pending = {
            let mut state = self.state.lock().expect("debounce mutex poisoned");
            if state.generation != generation {
                trace!(generation, current = state.generation, "stale debounce timer");
                return;
            }
            state.timer = None;
            state
                .args
                .take()
                .map(|args| (args, std::mem::take(&mut state.waiters)))
        };

        if let Some((args, waiters)) = pending {
            self.run(args, waiters);
        }
    }

    fn run(&self, args: A, waiters: Vec<oneshot::Sender<R>>) {
        debug!(waiters = waiters.len(), "debounced call firing");
        let result = (self.func)(args);
        for waiter in waiters {
            // A caller that dropped its future no longer wants the result.
            let _ = waiter.send(result.clone());
        }
    }
}

/// Collapses bursts of calls into a single deferred call.
///
/// Every [`call`](Debouncer::call) re-arms a timer of `wait`. When the timer
/// finally expires, the function runs once with the arguments of the last
/// call, and every caller of the burst receives a clone of that result.
///
/// Clones share the same pending state. Timers run on the tokio runtime the
/// call was made from.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use objkit_timing::Debouncer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let save = Debouncer::new(Duration::from_millis(10), |doc: String| doc.len());
/// let first = save.call("draft".to_string());
/// let second = save.call("final draft".to_string());
/// assert_eq!(first.await, Ok(11));
/// assert_eq!(second.await, Ok(11));
/// # }
/// ```
pub struct Debouncer<A, R> {
    inner: Arc<Inner<A, R>>,
}

impl<A, R> Clone for Debouncer<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> fmt::Debug for Debouncer<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.inner.wait)
            .finish_non_exhaustive()
    }
}

impl<A, R> Debouncer<A, R>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Wrap `func` so that it runs `wait` after the last of a burst of calls.
    pub fn new<F>(wait: Duration, func: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                func: Box::new(func),
                wait,
                state: Mutex::new(DebounceState {
                    generation: 0,
                    timer: None,
                    args: None,
                    waiters: Vec::new(),
                }),
            }),
        }
    }

    pub fn with_config<F>(config: &DebounceConfig, func: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::new(config.wait, func)
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    /// Register a call and return a future for the shared result.
    ///
    /// Registration happens immediately, not when the future is first
    /// polled. The future resolves once the burst settles, or with
    /// [`TimingError::Cancelled`] if [`cancel`](Debouncer::cancel) drops the
    /// pending call.
    pub fn call(&self, args: A) -> impl Future<Output = Result<R>> + Send + 'static {
        let scheduled = self.schedule(args);
        async move {
            let receiver = scheduled?;
            receiver.await.map_err(|_| TimingError::Cancelled)
        }
    }

    fn schedule(&self, args: A) -> Result<oneshot::Receiver<R>> {
        let runtime = Handle::try_current().map_err(|_| TimingError::RuntimeUnavailable)?;
        let (sender, receiver) = oneshot::channel();

        let mut state = self.inner.state.lock().expect("debounce mutex poisoned");
        if let Some(timer) = state.timer.take() {
            timer.abort();
            trace!(generation = state.generation, "debounce timer superseded");
        }
        state.generation += 1;
        state.args = Some(args);
        state.waiters.push(sender);

        let generation = state.generation;
        let inner = Arc::clone(&self.inner);
        state.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(inner.wait).await;
            inner.fire(generation);
        }));

        debug!(
            generation,
            waiters = state.waiters.len(),
            wait_ms = self.inner.wait.as_millis() as u64,
            "debounced call scheduled"
        );
        Ok(receiver)
    }

    /// Run the pending call now instead of waiting for the timer.
    ///
    /// Returns `false` if nothing was pending.
    pub fn flush(&self) -> bool {
        let pending = self
            .inner
            .state
            .lock()
            .expect("debounce mutex poisoned")
            .take_pending();
        match pending {
            Some((args, waiters)) => {
                self.inner.run(args, waiters);
                true
            }
            None => false,
        }
    }

    /// Drop the pending call. Its callers resolve with
    /// [`TimingError::Cancelled`]. Returns `false` if nothing was pending.
    pub fn cancel(&self) -> bool {
        let pending = self
            .inner
            .state
            .lock()
            .expect("debounce mutex poisoned")
            .take_pending();
        match pending {
            Some((_, waiters)) => {
                debug!(waiters = waiters.len(), "debounced call cancelled");
                true
            }
            None => false,
        }
    }

    /// Number of callers waiting on the pending call.
    pub fn pending_callers(&self) -> usize {
        self.inner
            .state
            .lock()
            .expect("debounce mutex poisoned")
            .waiters
            .len()
    }

    /// Returns `true` while a call is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.inner
            .state
            .lock()
            .expect("debounce mutex poisoned")
            .args
            .is_some()
    }
}
