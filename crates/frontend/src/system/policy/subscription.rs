/// Handle to an installed listener or effect.
///
/// The teardown closure runs exactly once: on [`Subscription::dispose`] or on drop.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn teardown_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        sub.dispose();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_disposes() {
        let calls = Rc::new(Cell::new(0));
        {
            let c = calls.clone();
            let _sub = Subscription::new(move || c.set(c.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }
}
