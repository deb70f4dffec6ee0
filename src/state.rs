use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::Landing;
use crate::views::Templates;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub landing: Arc<Landing>,
    pub templates: Arc<Templates>,
}
