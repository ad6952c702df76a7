//! Analytics gate.
//!
//! Page views and named events are forwarded to an injected [`TrackingHook`]
//! only when a measurement id is configured and a hook is available. When
//! either is missing every call is a silent no-op: analytics must never be
//! the reason a request fails.

use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use crate::config::AnalyticsConfig;

/// Free-form parameters attached to a tracking call.
pub type Params = Map<String, Value>;

/// The capability the analytics gate reports to.
///
/// `command` is the tracker verb (`"config"` or `"event"`), `target` is the
/// measurement id or event action, and `params` is the payload.
pub trait TrackingHook: Send + Sync {
    fn call(&self, command: &str, target: &str, params: &Params);
}

/// One buffered call made against a [`DataLayer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingCall {
    pub command: String,
    pub target: String,
    pub params: Params,
}

/// In-memory hook that buffers every call in order.
#[derive(Debug, Default)]
pub struct DataLayer {
    calls: Mutex<Vec<TrackingCall>>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call recorded so far.
    pub fn calls(&self) -> Vec<TrackingCall> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.calls().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TrackingHook for DataLayer {
    fn call(&self, command: &str, target: &str, params: &Params) {
        let call = TrackingCall {
            command: command.to_string(),
            target: target.to_string(),
            params: params.clone(),
        };

        match self.calls.lock() {
            Ok(mut calls) => calls.push(call),
            Err(poisoned) => poisoned.into_inner().push(call),
        }
    }
}

/// Hook that emits each call as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHook;

impl TrackingHook for LogHook {
    fn call(&self, command: &str, target: &str, params: &Params) {
        tracing::info!(
            command,
            tracking_target = target,
            params = %serde_json::Value::Object(params.clone()),
            "analytics"
        );
    }
}

/// Gate in front of an optional tracking hook.
#[derive(Clone)]
pub struct Analytics {
    measurement_id: String,
    hook: Option<Arc<dyn TrackingHook>>,
}

impl Analytics {
    pub fn new(config: &AnalyticsConfig, hook: Option<Arc<dyn TrackingHook>>) -> Self {
        Self {
            measurement_id: config.measurement_id.clone(),
            hook,
        }
    }

    /// A gate that never reports.
    pub fn disabled() -> Self {
        Self {
            measurement_id: String::new(),
            hook: None,
        }
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }

    pub fn is_enabled(&self) -> bool {
        !self.measurement_id.is_empty() && self.hook.is_some()
    }

    fn enabled_hook(&self) -> Option<&Arc<dyn TrackingHook>> {
        if self.measurement_id.is_empty() {
            return None;
        }
        self.hook.as_ref()
    }

    /// Records a page view for `path`.
    pub fn pageview(&self, path: &str) {
        let Some(hook) = self.enabled_hook() else {
            tracing::trace!(path, "analytics disabled, dropping page view");
            return;
        };

        let mut params = Params::new();
        params.insert("page_path".to_string(), Value::String(path.to_string()));
        hook.call("config", &self.measurement_id, &params);
    }

    /// Records a named event with its parameters.
    pub fn event(&self, action: &str, params: Params) {
        let Some(hook) = self.enabled_hook() else {
            tracing::trace!(action, "analytics disabled, dropping event");
            return;
        };

        hook.call("event", action, &params);
    }

    /// Records a named event with no parameters.
    pub fn track(&self, action: &str) {
        self.event(action, Params::new());
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("measurement_id", &self.measurement_id)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
