//! requestAnimationFrame loop with a cancellable handle.

use crate::error::GlobeError;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

struct FrameLoopInner {
    handle: Cell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoopInner {
    /// Schedule the stored closure for the next frame. No-op once cancelled.
    fn request_next(&self) -> Result<(), GlobeError> {
        let closure = self.closure.borrow();
        let Some(closure) = closure.as_ref() else {
            return Ok(());
        };
        let handle = web_sys::window()
            .ok_or(GlobeError::NoWindow)?
            .request_animation_frame(closure.as_ref().unchecked_ref())?;
        self.handle.set(Some(handle));
        Ok(())
    }
}

/// Calls `on_frame` with the rAF timestamp on every animation frame until the
/// callback returns `false` or the loop is cancelled. Dropping the loop
/// cancels it.
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, GlobeError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let inner = Rc::new(FrameLoopInner {
            handle: Cell::new(None),
            closure: RefCell::new(None),
        });

        let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);

            if !on_frame(timestamp) {
                return;
            }

            // Re-arm unconditionally; the callback does its own throttling.
            if let Err(e) = inner.request_next() {
                log::warn!("Frame loop stopped: {}", e);
            }
        });

        *inner.closure.borrow_mut() = Some(closure);
        inner.request_next()?;

        Ok(Self { inner })
    }

    /// Whether a frame callback is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner.handle.get().is_some()
    }

    /// Cancel the pending frame and release the callback. Idempotent.
    pub fn cancel(&self) {
        if let Some(handle) = self.inner.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.inner.closure.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
