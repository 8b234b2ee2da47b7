use crate::cache::ImageCache;
// app's shared state

pub struct AppState {
    pub cache: ImageCache,
}

impl AppState {
    pub fn new(cache: ImageCache) -> Self {
        Self { cache }
    }
}
