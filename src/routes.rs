use crate::{api::employee, error::ApiError};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Body parse failures share the JSON error shape of every other error
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidBody(err.to_string()).into());

    cfg.app_data(json_config).service(
        web::scope("/employee")
            // /employee
            .service(
                web::resource("")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employee/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );
}
