pub mod handlers;
pub mod repositories;
pub mod middlewares;
pub mod routes;
