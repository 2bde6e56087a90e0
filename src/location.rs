//! Device position updates.
//!
//! A [`LocationFeed`] pushes fixes (or a failure) into a single sink until the
//! returned [`WatchGuard`] is dropped.

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Position, PositionError};

use crate::model::Coordinate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

impl LocationError {
    /// Map a `PositionError` code.
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            2 => LocationError::PositionUnavailable,
            3 => LocationError::Timeout,
            _ => LocationError::Other(message),
        }
    }
}

pub type LocationSink = Rc<dyn Fn(Result<Coordinate, LocationError>)>;

/// Stops the subscription when dropped.
pub struct WatchGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl WatchGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait LocationFeed {
    fn subscribe(&self, sink: LocationSink) -> Result<WatchGuard, LocationError>;
}

/// `navigator.geolocation.watchPosition`.
#[derive(Default, Clone, Copy, Debug)]
pub struct BrowserLocationFeed;

impl LocationFeed for BrowserLocationFeed {
    fn subscribe(&self, sink: LocationSink) -> Result<WatchGuard, LocationError> {
        let window = web_sys::window().ok_or(LocationError::Unsupported)?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|_| LocationError::Unsupported)?;

        let on_fix = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |pos: Position| {
                let c = pos.coords();
                sink(Ok(Coordinate::clamped(c.latitude(), c.longitude())));
            }) as Box<dyn FnMut(Position)>)
        };
        let on_error = Closure::wrap(Box::new(move |err: PositionError| {
            sink(Err(LocationError::from_code(err.code(), err.message())));
        }) as Box<dyn FnMut(PositionError)>);

        let watch_id = geolocation
            .watch_position_with_error_callback(
                on_fix.as_ref().unchecked_ref::<js_sys::Function>(),
                Some(on_error.as_ref().unchecked_ref::<js_sys::Function>()),
            )
            .map_err(|e| LocationError::Other(format!("{e:?}")))?;

        Ok(WatchGuard::new(move || {
            geolocation.clear_watch(watch_id);
            // Closures must outlive the watch.
            drop(on_fix);
            drop(on_error);
        }))
    }
}
