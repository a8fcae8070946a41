use calbook_core::EventStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: EventStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: EventStore::new(),
        }
    }
}
