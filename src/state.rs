use std::sync::Arc;

use crate::upstream::CoreApi;

#[derive(Clone)]
pub struct AppState {
    pub core: Arc<dyn CoreApi>,
}
