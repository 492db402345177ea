use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Whatever actually stops the page from scrolling.
pub trait ScrollTarget {
    fn set_locked(&self, locked: bool);
}

/// Toggles `overflow: hidden` on the document body.
pub struct BodyOverflow;

impl ScrollTarget for BodyOverflow {
    fn set_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            warn!("No document body to lock scrolling on");
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            warn!("Failed to update body overflow");
        }
    }
}

struct LockState {
    holders: usize,
    target: Box<dyn ScrollTarget>,
}

/// Reference-counted page scroll lock shared by the mobile menu and the
/// lightbox. Scrolling comes back only once every guard is dropped.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<RefCell<LockState>>,
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollLock {
    pub fn new(target: impl ScrollTarget + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LockState {
                holders: 0,
                target: Box::new(target),
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.inner.borrow_mut();
        state.holders += 1;
        if state.holders == 1 {
            state.target.set_locked(true);
        }
        ScrollLockGuard { lock: self.clone() }
    }

    pub fn is_locked(&self) -> bool {
        self.inner.borrow().holders > 0
    }

    fn release(&self) {
        let mut state = self.inner.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            state.target.set_locked(false);
        }
    }
}

pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// Holds the shared scroll lock for as long as `active` is true.
#[hook]
pub fn use_scroll_lock(active: bool) {
    let lock = use_context::<ScrollLock>();
    use_effect_with_deps(
        move |active| {
            let guard = match (*active, lock) {
                (true, Some(lock)) => Some(lock.acquire()),
                _ => None,
            };
            move || drop(guard)
        },
        active,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<bool>>>);

    impl ScrollTarget for Recorder {
        fn set_locked(&self, locked: bool) {
            self.0.borrow_mut().push(locked);
        }
    }

    #[test]
    fn test_single_holder() {
        let recorder = Recorder::default();
        let lock = ScrollLock::new(recorder.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(*recorder.0.borrow(), vec![true, false]);
    }

    #[test]
    fn test_released_only_when_all_holders_gone() {
        let recorder = Recorder::default();
        let lock = ScrollLock::new(recorder.clone());

        let menu = lock.acquire();
        let lightbox = lock.acquire();
        drop(menu);
        assert!(lock.is_locked());
        drop(lightbox);
        assert!(!lock.is_locked());

        // The target only sees the outer transitions.
        assert_eq!(*recorder.0.borrow(), vec![true, false]);
    }

    #[test]
    fn test_clones_share_state() {
        let lock = ScrollLock::new(Recorder::default());
        let other = lock.clone();
        let _guard = other.acquire();
        assert!(lock.is_locked());
        assert!(lock == other);
    }
}
