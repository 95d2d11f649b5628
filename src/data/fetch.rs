//! Frame-polled request plumbing.
//!
//! A [`Subscription`] ties a view's input key (currency, coin + range, ...) to at most
//! one in-flight request. Futures run on a [`TaskSpawner`] and report back through a
//! `poll_promise::Promise` that the view polls once per frame. Superseding a request
//! aborts its task on native; on wasm the task runs out and its result is dropped.

use std::{fmt::Debug, future::Future};

use eframe::egui::Context;
use poll_promise::Promise;

use crate::config::DF;
use crate::data::{FetchResult, MaybeSend};

#[cfg(not(target_arch = "wasm32"))]
use {
    std::sync::Arc,
    tokio::runtime::{Builder, Handle, Runtime},
};

/// What a view knows about its data right now.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    /// Human-readable message, shown inline. Never retried automatically.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Cancels its task when dropped (native only).
#[derive(Debug)]
pub struct TaskHandle {
    #[cfg(not(target_arch = "wasm32"))]
    abort: tokio::task::AbortHandle,
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        self.abort.abort();
    }
}

/// Runs request futures off the frame loop and wakes the UI when they finish.
#[derive(Clone)]
pub struct TaskSpawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: Handle,
    #[cfg(not(target_arch = "wasm32"))]
    _runtime: Option<Arc<Runtime>>,
    repaint: Option<Context>,
}

impl TaskSpawner {
    /// Owns a fresh multi-threaded runtime for the lifetime of the app.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn native() -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("cryptoscope-net")
            .enable_all()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(runtime)),
            repaint: None,
        })
    }

    /// Spawns onto an existing runtime (tests, or a caller-owned runtime).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            _runtime: None,
            repaint: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn web() -> Self {
        Self { repaint: None }
    }

    /// Request a repaint of `ctx` whenever a task completes.
    pub fn with_repaint(mut self, ctx: Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Keep the returned handle alive for as long as the result is wanted.
    pub fn spawn<T, Fut>(&self, fut: Fut) -> (Promise<T>, TaskHandle)
    where
        T: Send + 'static,
        Fut: Future<Output = T> + MaybeSend + 'static,
    {
        let (sender, promise) = Promise::new();
        let repaint = self.repaint.clone();
        let task = async move {
            // A dropped promise makes this a no-op.
            sender.send(fut.await);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        let handle = TaskHandle {
            abort: self.handle.spawn(task).abort_handle(),
        };
        #[cfg(target_arch = "wasm32")]
        let handle = {
            wasm_bindgen_futures::spawn_local(task);
            TaskHandle {}
        };

        (promise, handle)
    }
}

/// Re-fetches only when its key changes; holds the latest result.
pub struct Subscription<K, T: Send + 'static> {
    name: &'static str,
    key: Option<K>,
    state: FetchState<T>,
    pending: Option<Promise<FetchResult<T>>>,
    task: Option<TaskHandle>,
    issued: usize,
}

impl<K, T> Subscription<K, T>
where
    K: PartialEq + Debug,
    T: Send + 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            key: None,
            state: FetchState::Idle,
            pending: None,
            task: None,
            issued: 0,
        }
    }

    /// Issues `make_request(&key)` if `key` differs from the last synced key.
    /// Returns true when a request went out.
    pub fn sync<F, Fut>(&mut self, key: K, spawner: &TaskSpawner, make_request: F) -> bool
    where
        F: FnOnce(&K) -> Fut,
        Fut: Future<Output = FetchResult<T>> + MaybeSend + 'static,
    {
        if self.key.as_ref() == Some(&key) {
            return false;
        }

        #[cfg(debug_assertions)]
        if DF.log_fetches {
            log::info!("[{}] key changed to {:?}, fetching", self.name, key);
        }

        // Replacing the handle aborts whatever was in flight for the old key.
        let (promise, task) = spawner.spawn(make_request(&key));
        self.pending = Some(promise);
        self.task = Some(task);
        self.state = FetchState::Loading;
        self.key = Some(key);
        self.issued += 1;
        true
    }

    /// Moves a finished request into `state`. Call once per frame.
    pub fn poll(&mut self) -> &FetchState<T> {
        if let Some(promise) = self.pending.take() {
            match promise.try_take() {
                Ok(result) => {
                    self.task = None;
                    self.state = match result {
                        Ok(data) => FetchState::Success(data),
                        Err(err) => {
                            log::warn!("[{}] fetch for {:?} failed: {}", self.name, self.key, err);
                            FetchState::Failed(err.to_string())
                        }
                    };
                }
                Err(promise) => self.pending = Some(promise),
            }
        }
        &self.state
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Number of requests issued so far.
    pub fn issued(&self) -> usize {
        self.issued
    }

    /// Forget the key so the next `sync` fetches again, and abort any pending request.
    #[cfg(test)]
    pub(crate) fn reset(&mut self) {
        self.key = None;
        self.pending = None;
        self.task = None;
        self.state = FetchState::Idle;
    }
}


#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicBool, Ordering},
        time::Duration,
    };

    use super::test_support::settle;
    use super::*;
    use crate::data::FetchError;

    fn spawner() -> TaskSpawner {
        TaskSpawner::from_handle(Handle::current())
    }

    #[tokio::test]
    async fn same_key_does_not_refetch() {
        let spawner = spawner();
        let mut sub: Subscription<u32, &'static str> = Subscription::new("test");

        assert!(sub.sync(1, &spawner, |_| async { Ok("one") }));
        assert!(sub.state().is_loading());
        settle(&mut sub).await;
        assert_eq!(sub.state(), &FetchState::Success("one"));

        assert!(!sub.sync(1, &spawner, |_| async { Ok("again") }));
        assert_eq!(sub.issued(), 1);
        assert_eq!(sub.state(), &FetchState::Success("one"));

        assert!(sub.sync(2, &spawner, |_| async { Ok("two") }));
        settle(&mut sub).await;
        assert_eq!(sub.state(), &FetchState::Success("two"));
        assert_eq!(sub.issued(), 2);
    }

    #[tokio::test]
    async fn superseded_result_is_discarded() {
        let spawner = spawner();
        let mut sub: Subscription<&'static str, &'static str> = Subscription::new("test");

        sub.sync("slow", &spawner, |_| async {
            tokio::time::sleep(Duration::from_millis(60)).await;
            Ok("slow")
        });
        sub.sync("fast", &spawner, |_| async { Ok("fast") });
        settle(&mut sub).await;
        assert_eq!(sub.state(), &FetchState::Success("fast"));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(sub.poll(), &FetchState::Success("fast"));
        assert_eq!(sub.key(), Some(&"fast"));
    }

    #[tokio::test]
    async fn superseded_request_is_aborted() {
        let spawner = spawner();
        let finished = Arc::new(AtomicBool::new(false));
        let mut sub: Subscription<u32, u32> = Subscription::new("test");

        let flag = Arc::clone(&finished);
        sub.sync(1, &spawner, move |_| async move {
            tokio::time::sleep(Duration::from_millis(40)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(1)
        });
        // Let the first request get as far as its await point.
        tokio::time::sleep(Duration::from_millis(5)).await;
        sub.sync(2, &spawner, |_| async { Ok(2) });
        settle(&mut sub).await;

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!finished.load(Ordering::SeqCst));
        assert_eq!(sub.state().data(), Some(&2));
    }

    #[tokio::test]
    async fn reset_aborts_the_pending_request() {
        let spawner = spawner();
        let finished = Arc::new(AtomicBool::new(false));
        let mut sub: Subscription<u32, ()> = Subscription::new("test");

        let flag = Arc::clone(&finished);
        sub.sync(1, &spawner, move |_| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });
        sub.reset();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!finished.load(Ordering::SeqCst));
        assert_eq!(sub.poll(), &FetchState::Idle);
    }

    #[tokio::test]
    async fn failure_is_kept_without_retry() {
        let spawner = spawner();
        let mut sub: Subscription<u32, ()> = Subscription::new("test");

        sub.sync(7, &spawner, |_| async {
            Err(FetchError::Status {
                status: 500,
                message: "boom".to_string(),
            })
        });
        settle(&mut sub).await;
        assert_eq!(sub.state().error(), Some("boom"));

        for _ in 0..3 {
            sub.sync(7, &spawner, |_| async { Ok(()) });
            sub.poll();
        }
        assert_eq!(sub.issued(), 1);
        assert_eq!(sub.state().error(), Some("boom"));
    }

    #[tokio::test]
    async fn reset_allows_a_fresh_fetch_for_the_same_key() {
        let spawner = spawner();
        let mut sub: Subscription<u32, u32> = Subscription::new("test");

        sub.sync(1, &spawner, |k| {
            let k = *k;
            async move { Ok(k * 10) }
        });
        settle(&mut sub).await;
        sub.reset();
        assert_eq!(sub.state(), &FetchState::Idle);

        assert!(sub.sync(1, &spawner, |_| async { Ok(11) }));
        settle(&mut sub).await;
        assert_eq!(sub.state().data(), Some(&11));
    }
}
