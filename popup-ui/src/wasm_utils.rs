//! WASM utilities for browser interop
//!
//! # Observer Cleanup Pattern
//!
//! A `ResizeObserver` callback is a JS `Closure` that must outlive the
//! observer. [`DomViewport`] owns both, and disconnects the observer when it
//! is dropped, so the observer can never keep firing into freed Rust state.
//!
//! The callback holds only a `Weak` reference back to the reconciler that
//! owns the host, which breaks the ownership cycle.

use crate::viewport::{ViewportHost, ViewportReconciler, WindowWidth};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::warn;
use wasm_bindgen_x::prelude::*;

/// Reconciler over the real DOM, shared between the view's hooks
pub type SharedViewport = Rc<RefCell<ViewportReconciler<DomViewport>>>;

/// [`ViewportHost`] backed by a `ResizeObserver` on the content root and
/// the document body's inline width.
pub struct DomViewport {
    target: Option<web_sys_x::Element>,
    observer: Option<web_sys_x::ResizeObserver>,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl DomViewport {
    /// Create a reconciler whose observer reports back into itself.
    pub fn shared() -> SharedViewport {
        Rc::new_cyclic(|weak: &Weak<RefCell<ViewportReconciler<DomViewport>>>| {
            let weak = weak.clone();
            let callback: Closure<dyn FnMut(JsValue)> =
                Closure::wrap(Box::new(move |_entries: JsValue| {
                    let Some(reconciler) = weak.upgrade() else {
                        return;
                    };
                    // A notification delivered while the view holds the
                    // reconciler is dropped; the view syncs width itself.
                    if let Ok(mut reconciler) = reconciler.try_borrow_mut() {
                        reconciler.on_content_resize();
                    };
                }));

            let observer = match web_sys_x::ResizeObserver::new(callback.as_ref().unchecked_ref())
            {
                Ok(observer) => Some(observer),
                Err(e) => {
                    warn!("ResizeObserver unavailable: {:?}", e);
                    None
                }
            };

            RefCell::new(ViewportReconciler::new(DomViewport {
                target: None,
                observer,
                _callback: callback,
            }))
        })
    }

    /// Point the observer at a freshly mounted content root.
    pub fn set_target(&mut self, element: web_sys_x::Element) {
        self.target = Some(element);
    }
}

impl ViewportHost for DomViewport {
    fn observe(&mut self) {
        if let (Some(observer), Some(target)) = (&self.observer, &self.target) {
            observer.observe(target);
        }
    }

    fn disconnect(&mut self) {
        if let Some(ref observer) = self.observer {
            observer.disconnect();
        }
    }

    fn content_width(&self) -> f64 {
        self.target
            .as_ref()
            .map(|target| target.scroll_width() as f64)
            .unwrap_or(0.0)
    }

    fn set_window_width(&mut self, width: WindowWidth) {
        let Some(body) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        if let Err(e) = body.style().set_property("width", &width.to_css()) {
            warn!("Failed to set popup width: {:?}", e);
        }
    }
}

impl Drop for DomViewport {
    fn drop(&mut self) {
        self.disconnect();
    }
}
