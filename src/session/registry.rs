//! Session registry for hosting several terminal instances
//!
//! Every open terminal gets its own [`Session`] over the one shared tree.
//! The map is guarded by a read-write lock; each session sits behind its own
//! mutex so a session is only ever driven by one caller at a time.

use crate::config::TerminalConfig;
use crate::error::ApiError;
use crate::session::{Session, Submission};
use crate::tree::FsTree;
use crate::types::SessionId;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

pub struct SessionRegistry {
    tree: Arc<FsTree>,
    config: TerminalConfig,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
    next_id: AtomicU64,
}

impl SessionRegistry {
    pub fn new(tree: Arc<FsTree>, config: TerminalConfig) -> Self {
        Self {
            tree,
            config,
            sessions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Mount a new terminal instance
    pub fn open(&self) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = Session::new(Arc::clone(&self.tree), &self.config);
        self.sessions.write().insert(id, Arc::new(Mutex::new(session)));
        info!(session = %id, "Session opened");
        id
    }

    /// Unmount a terminal instance, discarding its path and log
    pub fn close(&self, id: SessionId) -> Result<(), ApiError> {
        match self.sessions.write().remove(&id) {
            Some(_) => {
                info!(session = %id, "Session closed");
                Ok(())
            }
            None => Err(ApiError::SessionNotFound(id.to_string())),
        }
    }

    pub fn get(&self, id: SessionId) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().get(&id).cloned()
    }

    /// Submit a line to one session
    pub fn submit_line(&self, id: SessionId, text: &str) -> Result<Submission, ApiError> {
        let session = self
            .get(id)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;
        let mut guard = session.lock();
        Ok(guard.submit_line(text))
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
