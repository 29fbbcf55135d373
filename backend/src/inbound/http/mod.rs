//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the phonebook endpoints and the JSON error handler on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use phonebook::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// # let _ = app;
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::list_users)
        .service(users::add_user)
        .service(users::edit_user)
        .service(users::delete_user);
}
