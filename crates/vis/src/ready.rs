//! A one-shot "document fully parsed" signal.

use crate::error::Result;
use crate::error::VisError;

type Handler<'a, T, R> = Box<dyn FnOnce(&mut T) -> R + 'a>;

/// Runs exactly one handler, exactly once, when the host document is ready.
pub struct ReadySignal<'a, T, R> {
    handler: Option<Handler<'a, T, R>>,
    fired: bool,
}

impl<'a, T, R> ReadySignal<'a, T, R> {
    /// Creates a signal that has neither a handler nor fired.
    pub fn new() -> ReadySignal<'a, T, R> {
        Self {
            handler: None,
            fired: false,
        }
    }

    /// Registers the handler. Fails if one was registered before.
    pub fn on_ready<F>(&mut self, handler: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> R + 'a,
    {
        if self.handler.is_some() || self.fired {
            return Err(VisError::HandlerAlreadyRegistered);
        }

        self.handler = Some(Box::new(handler));
        Ok(())
    }

    /// Signals readiness. Runs the handler on the first call only and
    /// returns its result; later calls return `None`.
    pub fn fire(&mut self, document: &mut T) -> Option<R> {
        if self.fired {
            return None;
        }

        self.fired = true;
        self.handler.take().map(|handler| handler(document))
    }

    /// Whether the signal has fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl<T, R> Default for ReadySignal<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}
