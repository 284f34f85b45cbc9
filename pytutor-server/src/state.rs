//! Application State
//!
//! Read-only state shared by every request: the widget handler and its config.

use std::sync::Arc;
use std::time::Instant;

use pytutor_core::Widget;
use pytutor_types::{CompletionResult, WidgetConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub widget: Widget,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: WidgetConfig) -> CompletionResult<Self> {
        Ok(Self::with_widget(Widget::new(config)?))
    }

    pub fn with_widget(widget: Widget) -> Self {
        Self { inner: Arc::new(AppStateInner { widget, started_at: Instant::now() }) }
    }

    pub fn widget(&self) -> &Widget {
        &self.inner.widget
    }

    pub fn uptime_secs(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
