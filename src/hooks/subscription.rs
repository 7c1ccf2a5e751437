/// A browser-side registration that can be torn down.
pub trait Detach {
    fn detach(&self);
}

/// Owns a registration and detaches it exactly once, on `cancel` or on drop.
pub struct Subscription<D: Detach> {
    inner: Option<D>,
}

impl<D: Detach> Subscription<D> {
    pub fn new(handle: D) -> Self {
        Self {
            inner: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.inner.take() {
            handle.detach();
        }
    }
}

impl<D: Detach> Drop for Subscription<D> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs `attach` as an effect body and returns the matching teardown, which
/// detaches whatever was attached. A `None` attach tears down to a no-op.
pub fn mount<D: Detach + 'static>(
    attach: impl FnOnce() -> Option<Subscription<D>>,
) -> impl FnOnce() + 'static {
    let subscription = attach();
    move || drop(subscription)
}

#[cfg(test)]
pub(crate) mod spy {
    use super::Detach;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts attach/detach calls the way a mocked observer would.
    #[derive(Clone, Default)]
    pub struct Registry {
        pub attached: Rc<Cell<u32>>,
        pub detached: Rc<Cell<u32>>,
    }

    impl Registry {
        pub fn attach(&self) -> SpyHandle {
            self.attached.set(self.attached.get() + 1);
            SpyHandle {
                detached: self.detached.clone(),
            }
        }

        pub fn live(&self) -> u32 {
            self.attached.get() - self.detached.get()
        }
    }

    pub struct SpyHandle {
        detached: Rc<Cell<u32>>,
    }

    impl Detach for SpyHandle {
        fn detach(&self) {
            self.detached.set(self.detached.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::spy::{Registry, SpyHandle};
    use super::*;

    #[test]
    fn drop_detaches() {
        let registry = Registry::default();
        {
            let subscription = Subscription::new(registry.attach());
            assert!(subscription.is_active());
            assert_eq!(registry.live(), 1);
        }
        assert_eq!(registry.live(), 0);
        assert_eq!(registry.detached.get(), 1);
    }

    #[test]
    fn cancel_then_drop_detaches_once() {
        let registry = Registry::default();
        let mut subscription = Subscription::new(registry.attach());
        subscription.cancel();
        assert!(!subscription.is_active());
        subscription.cancel();
        drop(subscription);
        assert_eq!(registry.detached.get(), 1);
    }

    #[test]
    fn effect_teardown_detaches_what_it_attached() {
        let registry = Registry::default();
        let teardown = mount(|| Some(Subscription::new(registry.attach())));
        assert_eq!(registry.live(), 1);
        teardown();
        assert_eq!(registry.live(), 0);
        assert_eq!(registry.detached.get(), 1);
    }

    #[test]
    fn failed_attach_tears_down_to_nothing() {
        let registry = Registry::default();
        let teardown = mount(|| None::<Subscription<SpyHandle>>);
        teardown();
        assert_eq!(registry.attached.get(), 0);
        assert_eq!(registry.detached.get(), 0);
    }

    #[test]
    fn navigating_between_pages_leaks_nothing() {
        let registry = Registry::default();
        for _page in 0..5 {
            let teardowns: Vec<_> = (0..8)
                .map(|_| mount(|| Some(Subscription::new(registry.attach()))))
                .collect();
            assert_eq!(registry.live(), 8);
            teardowns.into_iter().for_each(|teardown| teardown());
            assert_eq!(registry.live(), 0);
        }
        assert_eq!(registry.attached.get(), 40);
        assert_eq!(registry.detached.get(), 40);
    }
}
