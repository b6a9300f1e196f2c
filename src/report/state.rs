/// Request lifecycle for one fetch-on-submit action.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Drops any previous data or error.
    pub fn begin(&mut self) {
        *self = FetchState::Loading;
    }

    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => FetchState::Failed(e.to_string()),
        };
    }

    pub fn into_result(self) -> Option<Result<T, String>> {
        match self {
            FetchState::Loaded(data) => Some(Ok(data)),
            FetchState::Failed(message) => Some(Err(message)),
            FetchState::Idle | FetchState::Loading => None,
        }
    }
}
