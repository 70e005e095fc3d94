use std::{sync::Arc, time::Duration};

use crate::{color::ColorService, forecast::ForecastService, service::TodoService, store::TodoStore};

/// Bound on all store calls made while serving one request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared handles passed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub todos: TodoService,
    pub color: ColorService,
    pub forecast: Arc<ForecastService>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>, color: ColorService, forecast: ForecastService) -> Self {
        Self {
            todos: TodoService::new(store),
            color,
            forecast: Arc::new(forecast),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
