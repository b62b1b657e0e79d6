use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors, routes};

// 加好友相关的路由
pub fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/api/friend/getLink", get(routes::friend::get_link))
        .route("/addFriend", get(routes::friend::add_friend))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(friend_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
