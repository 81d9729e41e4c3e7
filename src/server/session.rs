// src/server/session.rs
//! Flash messages carried across redirects
//!
//! A session is identified by a random id held in a cookie. Notifications
//! produced by an operation are queued under that id and handed out, then
//! forgotten, by the next page that renders.

use crate::notification::Notification;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// Per-session queue of one-shot notifications
pub trait FlashStore: Send + Sync {
    /// Queue a notification for the session
    fn push(&self, session: &str, notification: Notification);

    /// Remove and return every queued notification for the session
    fn take(&self, session: &str) -> Vec<Notification>;
}

/// How long undelivered notifications are kept
pub const DEFAULT_FLASH_TTL: Duration = Duration::from_secs(10 * 60);

/// Most sessions holding undelivered notifications at once
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Undelivered notifications for one session
#[derive(Debug)]
struct FlashQueue {
    /// When the first pending notification was queued
    created_at: Instant,
    notifications: Vec<Notification>,
}

/// Flash store kept in process memory
///
/// Clients that never send the cookie back leave queues nobody will read.
/// Those expire after `ttl`, and once `max_sessions` queues are pending the
/// oldest is dropped to make room.
pub struct MemoryFlashStore {
    queues: Mutex<HashMap<String, FlashQueue>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for MemoryFlashStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_FLASH_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl MemoryFlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a custom expiry and session cap
    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Number of sessions with undelivered notifications
    pub fn pending_sessions(&self) -> usize {
        self.queues.lock().len()
    }

    /// Drop expired queues, returning how many were removed
    pub fn cleanup(&self) -> usize {
        let mut queues = self.queues.lock();
        let before = queues.len();
        queues.retain(|_, queue| queue.created_at.elapsed() < self.ttl);
        before - queues.len()
    }
}

impl FlashStore for MemoryFlashStore {
    fn push(&self, session: &str, notification: Notification) {
        let mut queues = self.queues.lock();
        queues.retain(|_, queue| queue.created_at.elapsed() < self.ttl);

        if !queues.contains_key(session) && queues.len() >= self.max_sessions {
            let oldest = queues
                .iter()
                .min_by_key(|(_, queue)| queue.created_at)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                debug!("Flash store full, dropping session {}", oldest);
                queues.remove(&oldest);
            }
        }

        queues
            .entry(session.to_string())
            .or_insert_with(|| FlashQueue {
                created_at: Instant::now(),
                notifications: Vec::new(),
            })
            .notifications
            .push(notification);
    }

    fn take(&self, session: &str) -> Vec<Notification> {
        match self.queues.lock().remove(session) {
            Some(queue) if queue.created_at.elapsed() < self.ttl => queue.notifications,
            _ => Vec::new(),
        }
    }
}

/// Return the session id from the cookie jar, issuing a new one if absent
///
/// Values that are not UUIDs are replaced rather than trusted.
pub fn ensure_session(jar: CookieJar, cookie_name: &str) -> (CookieJar, String) {
    if let Some(cookie) = jar.get(cookie_name) {
        if Uuid::parse_str(cookie.value()).is_ok() {
            let id = cookie.value().to_string();
            return (jar, id);
        }
    }

    let id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((cookie_name.to_string(), id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashes_are_delivered_once() {
        let store = MemoryFlashStore::new();
        store.push("a", Notification::created());
        store.push("a", Notification::deleted());
        store.push("b", Notification::not_found());

        assert_eq!(
            store.take("a"),
            vec![Notification::created(), Notification::deleted()]
        );
        assert!(store.take("a").is_empty());
        assert_eq!(store.pending_sessions(), 1);
        assert_eq!(store.take("b"), vec![Notification::not_found()]);
        assert_eq!(store.pending_sessions(), 0);
    }

    #[test]
    fn test_session_cap_drops_oldest() {
        let store = MemoryFlashStore::with_limits(DEFAULT_FLASH_TTL, 10);
        for i in 0..500 {
            store.push(&format!("session-{i}"), Notification::not_found());
        }

        assert_eq!(store.pending_sessions(), 10);
        assert_eq!(store.take("session-499"), vec![Notification::not_found()]);
    }

    #[test]
    fn test_expired_queues_are_evicted() {
        let store = MemoryFlashStore::with_limits(Duration::from_millis(200), 100);
        for i in 0..50 {
            store.push(&format!("session-{i}"), Notification::deleted());
        }
        assert_eq!(store.pending_sessions(), 50);

        std::thread::sleep(Duration::from_millis(300));
        assert!(store.take("session-1").is_empty());

        store.push("fresh", Notification::created());
        assert_eq!(store.pending_sessions(), 1);
        assert_eq!(store.cleanup(), 0);
    }

    #[test]
    fn test_cleanup_removes_expired() {
        let store = MemoryFlashStore::with_limits(Duration::from_millis(200), 100);
        store.push("a", Notification::created());
        store.push("b", Notification::created());

        std::thread::sleep(Duration::from_millis(300));
        assert_eq!(store.cleanup(), 2);
        assert_eq!(store.pending_sessions(), 0);
    }

    #[test]
    fn test_ensure_session_issues_cookie() {
        let (jar, id) = ensure_session(CookieJar::new(), "pantry_session");
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(jar.get("pantry_session").unwrap().value(), id);
    }

    #[test]
    fn test_ensure_session_reuses_valid_cookie() {
        let existing = Uuid::new_v4().to_string();
        let jar = CookieJar::new().add(Cookie::new("pantry_session", existing.clone()));

        let (_, id) = ensure_session(jar, "pantry_session");
        assert_eq!(id, existing);
    }

    #[test]
    fn test_ensure_session_replaces_garbage() {
        let jar = CookieJar::new().add(Cookie::new("pantry_session", "not-a-uuid"));
        let (jar, id) = ensure_session(jar, "pantry_session");

        assert_ne!(id, "not-a-uuid");
        assert_eq!(jar.get("pantry_session").unwrap().value(), id);
    }
}
