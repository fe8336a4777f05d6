use actix_web::web;
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{
    config::{build_config, PortalConfig},
    telemetry::initialize_telemetry,
    ServiceProvider,
};

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => return eprintln!("{}: {}", "Cannot build tokio runtime".red(), e),
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config().and_then(PortalConfig::from_config) {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    if let Err(e) = initialize_telemetry(config.telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => web::Data::new(x),
        Err(e) => {
            error!("Cannot build service provider: {e:?}");
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
        }
    }
}

pub async fn initialize_web_host(sp: web::Data<ServiceProvider>) {
    let host = sp.config().host().clone();
    let server = actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .app_data(sp.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(api::registration::landing)
            .service(api::registration::personal_form)
            .service(api::registration::submit_personal)
            .service(api::registration::project_form)
            .service(api::registration::submit_project)
            .service(api::registration::register)
            .service(api::listing::list)
            .service(api::listing::search_page)
            .service(api::listing::search)
            .service(api::admin::edit_form)
            .service(api::admin::confirm_edit)
            .service(api::admin::apply_edit)
            .service(api::admin::delete_form)
            .service(api::admin::delete)
    })
    .bind((host.bind_address().to_owned(), *host.bind_port()));

    let server = match server {
        Ok(x) => x,
        Err(e) => return error!("Cannot bind {}:{}: {e}", host.bind_address(), host.bind_port()),
    };
    info!("Listening on {}:{}.", host.bind_address(), host.bind_port());
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}
