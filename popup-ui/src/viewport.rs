//! Keeps the popup window as wide as its content
//!
//! Safari does not size extension popups to dynamic content, so the body
//! width is pinned to the content's scroll width. Observation is suspended
//! while the edit sub-view is shown so the window does not jump around.

use tracing::debug;

/// Widths below this mean the content has not been laid out yet
pub const MIN_CONTENT_WIDTH: f64 = 10.0;

/// Width applied to the popup window
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowWidth {
    Auto,
    Px(f64),
}

impl WindowWidth {
    pub fn to_css(self) -> String {
        match self {
            WindowWidth::Auto => "auto".to_string(),
            WindowWidth::Px(px) => format!("{px}px"),
        }
    }
}

/// Size-observation side channel the reconciler drives
pub trait ViewportHost {
    /// Start delivering resize notifications for the content root
    fn observe(&mut self);
    fn disconnect(&mut self);
    /// Natural scroll width of the content root, 0 when there is none
    fn content_width(&self) -> f64;
    fn set_window_width(&mut self, width: WindowWidth);
}

/// Start/stop state machine around a [`ViewportHost`].
///
/// Every operation is idempotent, and after [`teardown`](Self::teardown)
/// the host is never observed again.
pub struct ViewportReconciler<H: ViewportHost> {
    host: H,
    observing: bool,
    editing: bool,
    torn_down: bool,
}

impl<H: ViewportHost> ViewportReconciler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            observing: false,
            editing: false,
            torn_down: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Content root (re)mounted: observe it unless editing.
    pub fn mount(&mut self) {
        if self.editing {
            return;
        }
        self.restart();
    }

    /// Edit flag changed. Entering edit mode freezes the current width;
    /// leaving it resumes observation and applies the width right away.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        if editing {
            self.stop();
        } else {
            self.restart();
            self.sync_width();
        }
    }

    /// Resize notification from the host.
    pub fn on_content_resize(&mut self) {
        if self.observing {
            self.sync_width();
        }
    }

    /// Stop observing and hand the window back its automatic width.
    pub fn teardown(&mut self) {
        self.stop();
        if !self.torn_down {
            self.host.set_window_width(WindowWidth::Auto);
            self.torn_down = true;
        }
    }

    fn restart(&mut self) {
        if self.torn_down {
            return;
        }
        if self.observing {
            self.host.disconnect();
        }
        self.host.observe();
        self.observing = true;
    }

    fn stop(&mut self) {
        if self.observing {
            self.host.disconnect();
            self.observing = false;
        }
    }

    fn sync_width(&mut self) {
        if self.torn_down {
            return;
        }
        let width = self.host.content_width();
        if width < MIN_CONTENT_WIDTH {
            return;
        }
        debug!("Resizing popup to {width}px");
        self.host.set_window_width(WindowWidth::Px(width));
    }
}
