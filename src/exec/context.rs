// Execution Context
//
// The execution-scoped environment a result materialization runs in: a
// lightweight session handle plus the after-load callback. The context is
// injected into the processing state at construction; nothing here is
// ambient or global, so concurrent executions stay fully independent.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::exec::callback::{Callback, NoopCallback};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// A lightweight handle identifying the session an execution belongs to.
///
/// This is not an ORM session; lifecycle management, identity maps and
/// flushing live above this layer.
#[derive(Debug, Clone)]
pub struct Session {
    session_id: u64,
    tenant: Option<String>,
}

impl Session {
    pub fn open() -> Self {
        Session {
            session_id: NEXT_SESSION_ID.fetch_add(1, Ordering::SeqCst),
            tenant: None,
        }
    }

    pub fn open_for_tenant(tenant: &str) -> Self {
        Session {
            tenant: Some(tenant.to_string()),
            ..Session::open()
        }
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }
}

/// Execution-scoped environment: session plus callback.
pub struct ExecutionContext {
    session: Session,
    callback: Box<dyn Callback>,
}

impl ExecutionContext {
    /// Context with the explicit no-op callback.
    pub fn new(session: Session) -> Self {
        ExecutionContext {
            session,
            callback: Box::new(NoopCallback),
        }
    }

    pub fn with_callback(session: Session, callback: Box<dyn Callback>) -> Self {
        ExecutionContext { session, callback }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn callback(&self) -> &dyn Callback {
        self.callback.as_ref()
    }

    pub fn callback_mut(&mut self) -> &mut dyn Callback {
        self.callback.as_mut()
    }

    /// Run and drain the registered after-load actions against this
    /// context's session.
    pub fn invoke_after_load_actions(&mut self) {
        self.callback.invoke_after_load_actions(&self.session);
    }
}
