pub mod backend_health_handler;
pub mod catalog_handler;
pub mod draft_handler;
