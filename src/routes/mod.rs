use actix_web::web;

pub mod backend_health;
pub mod catalog;
pub mod drafts;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Read-only sport catalog
    cfg.service(
        web::scope("/catalog")
            .service(catalog::list_sports)
            .service(catalog::get_sport)
    );
    // Tournament drafts: selection, ordering, configuration and submission
    cfg.service(
        web::scope("/drafts")
            .service(drafts::list_drafts)
            .service(drafts::create_draft)
            .service(drafts::get_draft)
            .service(drafts::update_draft)
            .service(drafts::delete_draft)
            .service(drafts::add_sport)
            .service(drafts::remove_sport)
            .service(drafts::move_sport)
            .service(drafts::configure_sport)
            .service(drafts::sport_readiness)
            .service(drafts::assemble_draft)
            .service(drafts::submit_draft)
    );
}
