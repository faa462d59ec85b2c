use actix_web::{web, App, HttpServer};

/// Starts an actix server on an ephemeral port inside the current test
/// runtime and returns its base URL, e.g. `http://127.0.0.1:41234`.
pub async fn spawn_server<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind test server");
    let addr = server.addrs()[0];

    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}
