use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, error::AppError};

use super::model::{
    AddFriendQuery, FriendLinkResponse, GetLinkQuery, Redemption, issue_link, redeem_link,
};

#[axum::debug_handler]
pub async fn get_link(
    State(state): State<AppState>,
    Query(query): Query<GetLinkQuery>,
) -> Json<FriendLinkResponse> {
    Json(issue_link(
        &state.tokens,
        &state.config.base_url,
        query.user_id_or_default(),
    ))
}

#[axum::debug_handler]
pub async fn add_friend(
    State(state): State<AppState>,
    Query(query): Query<AddFriendQuery>,
) -> Response {
    let redemption = redeem_link(&state.tokens, &query.token);

    // 默认保持 200 + 提示文本，兼容已有客户端
    if redemption == Redemption::UnknownToken && state.config.reject_unknown_token {
        return AppError::InvalidToken.into_response();
    }

    redemption.message().into_response()
}
