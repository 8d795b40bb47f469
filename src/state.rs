use todo_core::CoreState;

#[derive(Clone)]
pub struct AppState {
    pub core: CoreState,
}

impl AppState {
    pub fn new(core: CoreState) -> Self {
        Self { core }
    }
}
