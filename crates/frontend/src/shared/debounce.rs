use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Clear-then-rearm timer: only the last call within `wait_ms` fires.
///
/// Dropping the debouncer cancels a pending call.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    timeout: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            timeout: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.wait_ms, f);
        // replacing the previous Timeout drops and thereby clears it
        self.timeout.borrow_mut().replace(timeout);
    }
}
