// Execution Callback
//
// The after-load callback capability of an execution. Initializers and
// consumers may register actions to run once the full result set has been
// processed. The default implementation is an explicit no-op, never a
// special-cased null.

use crate::exec::context::Session;

/// An action to run against the session after all rows are processed.
pub trait AfterLoadAction {
    fn after_load(&self, session: &Session);
}

impl<F: Fn(&Session)> AfterLoadAction for F {
    fn after_load(&self, session: &Session) {
        self(session)
    }
}

/// The callback capability exposed through the row cursor.
pub trait Callback {
    fn register_after_load(&mut self, action: Box<dyn AfterLoadAction>);

    /// Run and drain all registered actions.
    fn invoke_after_load_actions(&mut self, session: &Session);

    fn has_after_load_actions(&self) -> bool;
}

/// Callback that accepts registrations and discards them. Must not fail
/// and has no observable effect.
pub struct NoopCallback;

impl Callback for NoopCallback {
    fn register_after_load(&mut self, _action: Box<dyn AfterLoadAction>) {}

    fn invoke_after_load_actions(&mut self, _session: &Session) {}

    fn has_after_load_actions(&self) -> bool {
        false
    }
}

/// Callback that runs registered actions in registration order, draining
/// them so a second finish-up is a no-op.
#[derive(Default)]
pub struct AfterLoadCallback {
    actions: Vec<Box<dyn AfterLoadAction>>,
}

impl AfterLoadCallback {
    pub fn new() -> Self {
        AfterLoadCallback::default()
    }
}

impl Callback for AfterLoadCallback {
    fn register_after_load(&mut self, action: Box<dyn AfterLoadAction>) {
        self.actions.push(action);
    }

    fn invoke_after_load_actions(&mut self, session: &Session) {
        for action in self.actions.drain(..) {
            action.after_load(session);
        }
    }

    fn has_after_load_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}
