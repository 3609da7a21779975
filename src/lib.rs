pub mod db;
pub mod handlers;
pub mod identifier;
pub mod models;
pub mod names;
pub mod rejections;
pub mod session;
pub mod statics;
pub mod utils;
pub mod views;

use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub secure_cookies: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::catalog::routes())
        .merge(handlers::identifier::routes())
        .merge(handlers::quiz::routes())
        .nest("/static", statics::routes())
        .with_state(state)
}
