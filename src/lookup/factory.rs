use std::sync::Arc;
use crate::books::factory;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::logger::{Logger, TracingLogger};
use crate::lookup::domain::LookupService;
use crate::lookup::domain::service::LookupServiceImpl;

pub async fn create_lookup_service(config: &Configuration) -> LibraryResult<Arc<dyn LookupService>> {
    let book_store = factory::create_book_store(config.store).await;
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());
    let svc = LookupServiceImpl::new(Some(book_store), &config.supported_authors, Some(logger))?;
    Ok(Arc::new(svc))
}
