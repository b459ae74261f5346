//! Shared session handle
//!
//! The whole session sits behind one coarse lock. The I/O thread takes it
//! to apply output; the renderer takes it through
//! [`RenderDataProvider::lock_console`](crate::render::RenderDataProvider::lock_console)
//! for the duration of a frame. The lock is fair: on release it is handed
//! to the longest waiter, so neither side can starve the other.

use parking_lot::{FairMutex, FairMutexGuard};

use crate::core::Session;

/// A terminal session guarded by the console lock
#[derive(Debug)]
pub struct Console {
    session: FairMutex<Session>,
}

impl Console {
    pub fn new(session: Session) -> Self {
        Self {
            session: FairMutex::new(session),
        }
    }

    /// Acquire the console lock, blocking until it is available
    pub fn lock(&self) -> FairMutexGuard<'_, Session> {
        self.session.lock()
    }

    /// Acquire the console lock if nobody holds it
    pub fn try_lock(&self) -> Option<FairMutexGuard<'_, Session>> {
        self.session.try_lock()
    }

    pub fn is_locked(&self) -> bool {
        self.session.is_locked()
    }

    /// Consume the handle, returning the session
    pub fn into_inner(self) -> Session {
        self.session.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OutputBuffer, TextAttribute};

    fn console() -> Console {
        Console::new(Session::new(OutputBuffer::new(
            80,
            24,
            24,
            TextAttribute::default(),
        )))
    }

    #[test]
    fn test_lock_excludes_try_lock() {
        let console = console();
        let guard = console.lock();
        assert!(console.is_locked());
        assert!(console.try_lock().is_none());
        drop(guard);
        assert!(!console.is_locked());
        assert!(console.try_lock().is_some());
    }

    #[test]
    fn test_mutation_visible_after_unlock() {
        let console = console();
        console.lock().set_title("edited");
        assert_eq!(console.lock().title(), "edited");
        assert_eq!(console.into_inner().title(), "edited");
    }
}
