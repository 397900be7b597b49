use std::{
    cell::{Cell, RefCell},
    fmt::Display,
};

/// Represents a trait responsible for handling diagnostics in the tokenizer.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);
}

/// Writes every received error to the standard error stream.
#[derive(Debug, Default)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one error has been printed.
    #[must_use]
    pub fn has_printed(&self) -> bool {
        self.printed.get()
    }
}

impl<T: Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Collects every received error without printing it.
#[derive(Debug)]
pub struct SilentHandler<T> {
    received: RefCell<Vec<T>>,
}

impl<T> Default for SilentHandler<T> {
    fn default() -> Self {
        Self {
            received: RefCell::new(Vec::new()),
        }
    }
}

impl<T> SilentHandler<T> {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the errors received so far, leaving the handler empty.
    #[must_use]
    pub fn take(&self) -> Vec<T> {
        self.received.take()
    }

    /// Whether no error has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.received.borrow().is_empty()
    }
}

impl<T> Handler<T> for SilentHandler<T> {
    fn receive(&self, error: T) {
        self.received.borrow_mut().push(error);
    }
}
