use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use tokio::{
    task::{AbortHandle, JoinHandle},
    time::{Instant, MissedTickBehavior},
};
use ulid::Ulid;

use super::QuizSession;
use crate::models::Quiz;

const TICK: Duration = Duration::from_secs(1);

type Sessions = HashMap<Ulid, LiveSession>;

struct LiveSession {
    session: QuizSession,
    last_seen: Instant,
    ticker: Option<AbortHandle>,
}

impl LiveSession {
    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

/// In-memory home of every quiz session that belongs to an open quiz page.
///
/// Each in-progress session owns a one-second ticker task. The ticker is
/// aborted as soon as the session completes and whenever the session leaves
/// the registry, so no timer outlives its session.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<Sessions>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, Sessions> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a new attempt at `quiz`. Must be called inside a tokio runtime.
    pub fn open(&self, quiz: &Quiz) -> Ulid {
        let id = Ulid::new();
        let ticker = spawn_ticker(Arc::downgrade(&self.inner), id);

        self.sessions().insert(
            id,
            LiveSession {
                session: QuizSession::new(quiz),
                last_seen: Instant::now(),
                ticker: Some(ticker.abort_handle()),
            },
        );

        tracing::debug!("opened session {id} for quiz '{}'", quiz.id);
        id
    }

    /// Drops the session, cancelling its ticker. Returns whether it existed.
    pub fn close(&self, id: Ulid) -> bool {
        let removed = self.sessions().remove(&id);
        if removed.is_some() {
            tracing::debug!("closed session {id}");
        }
        removed.is_some()
    }

    /// Runs `f` against the session and marks it as seen. Once the session is
    /// completed its ticker is stopped for good.
    pub fn with_session<T>(&self, id: Ulid, f: impl FnOnce(&mut QuizSession) -> T) -> Option<T> {
        let mut sessions = self.sessions();
        let live = sessions.get_mut(&id)?;
        live.last_seen = Instant::now();

        let out = f(&mut live.session);
        if live.session.is_completed() {
            live.stop_ticker();
        }
        Some(out)
    }

    /// Removes sessions nobody has touched for `max_idle`.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions();
        let before = sessions.len();
        sessions.retain(|_, live| now.duration_since(live.last_seen) < max_idle);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the session still has a running ticker.
    pub fn is_ticking(&self, id: Ulid) -> bool {
        self.sessions()
            .get(&id)
            .is_some_and(|live| live.ticker.is_some())
    }
}

fn spawn_ticker(sessions: Weak<Mutex<Sessions>>, id: Ulid) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;

            let Some(sessions) = sessions.upgrade() else {
                break;
            };
            let mut sessions = sessions.lock().unwrap_or_else(PoisonError::into_inner);
            if !sessions.get_mut(&id).is_some_and(|live| live.session.tick()) {
                break;
            }
        }
    })
}

/// Periodically evicts idle sessions, e.g. pages the visitor navigated away from.
pub fn spawn_sweeper(registry: SessionRegistry, max_idle: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(max_idle / 2);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let evicted = registry.evict_idle(max_idle);
            if evicted > 0 {
                tracing::info!("evicted {evicted} idle quiz sessions");
            }
        }
    })
}
