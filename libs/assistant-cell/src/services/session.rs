use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::{debug, error};

/// Tracks which capture sessions have a voice resolution in flight.
#[derive(Debug, Clone, Default)]
pub struct CaptureSessionGate {
    active: Arc<Mutex<HashSet<String>>>,
}

/// Held while a session's resolution runs; frees the session when dropped.
#[derive(Debug)]
pub struct SessionPermit {
    session_id: String,
    active: Arc<Mutex<HashSet<String>>>,
}

impl CaptureSessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `session_id`, or returns `None` while another call holds it.
    pub fn try_acquire(&self, session_id: &str) -> Option<SessionPermit> {
        let mut active = match self.active.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("Capture session registry lock was poisoned; recovering");
                poisoned.into_inner()
            }
        };

        if !active.insert(session_id.to_string()) {
            debug!("Capture session {} already has a request in flight", session_id);
            return None;
        }

        Some(SessionPermit {
            session_id: session_id.to_string(),
            active: Arc::clone(&self.active),
        })
    }

    pub fn is_active(&self, session_id: &str) -> bool {
        self.active
            .lock()
            .map(|active| active.contains(session_id))
            .unwrap_or(false)
    }
}

impl Drop for SessionPermit {
    fn drop(&mut self) {
        let mut active = match self.active.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        active.remove(&self.session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused_until_release() {
        let gate = CaptureSessionGate::new();

        let permit = gate.try_acquire("tab-1").expect("first acquire");
        assert!(gate.try_acquire("tab-1").is_none());
        assert!(gate.is_active("tab-1"));

        drop(permit);
        assert!(!gate.is_active("tab-1"));
        assert!(gate.try_acquire("tab-1").is_some());
    }

    #[test]
    fn sessions_are_independent() {
        let gate = CaptureSessionGate::new();
        let _a = gate.try_acquire("a").unwrap();
        assert!(gate.try_acquire("b").is_some());
    }
}
