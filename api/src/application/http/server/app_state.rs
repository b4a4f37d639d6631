use std::sync::Arc;

use nutriai_core::application::NutriAiService;

use crate::application::http::nutrition::page::PageRenderer;
use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriAiService,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriAiService, pages: PageRenderer) -> Self {
        Self {
            args,
            service,
            pages: Arc::new(pages),
        }
    }
}
