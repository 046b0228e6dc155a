use actix_web::{HttpResponse, Responder};

/// GET / - Liveness. Não consulta o banco.
pub async fn root() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Server is running")
}
