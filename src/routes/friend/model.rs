use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::TokenTable;
use crate::error::INVALID_TOKEN_MESSAGE;

pub const DEFAULT_USER_ID: &str = "testUser";

#[derive(Debug, Deserialize)]
pub struct GetLinkQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl GetLinkQuery {
    /// 未传或传空字符串时使用默认用户
    pub fn user_id_or_default(&self) -> &str {
        self.user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_USER_ID)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddFriendQuery {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FriendLinkResponse {
    #[serde(rename = "friendId")]
    pub friend_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redemption {
    Accepted { user_id: String },
    UnknownToken,
}

impl Redemption {
    pub fn message(&self) -> String {
        match self {
            Redemption::Accepted { user_id } => {
                format!("Friend request sent to user: {}", user_id)
            }
            Redemption::UnknownToken => INVALID_TOKEN_MESSAGE.to_string(),
        }
    }
}

pub fn build_link(base_url: &str, token: &str) -> String {
    format!("{}?token={}", base_url, token)
}

/// 生成 token 并登记到表中，返回带 token 的加好友链接
pub fn issue_link(tokens: &TokenTable, base_url: &str, user_id: &str) -> FriendLinkResponse {
    let mut token = Uuid::new_v4().to_string();
    // v4 碰撞概率可以忽略，这里只保证已有 token 不被覆盖
    while !tokens.insert(&token, user_id) {
        token = Uuid::new_v4().to_string();
    }

    tracing::info!("friend link issued, user_id={}, token={}", user_id, token);

    FriendLinkResponse {
        friend_id: build_link(base_url, &token),
    }
}

// TODO: 持久化好友关系，目前只回显 token 对应的用户
pub fn redeem_link(tokens: &TokenTable, token: &str) -> Redemption {
    match tokens.get(token) {
        Some(user_id) => Redemption::Accepted { user_id },
        None => Redemption::UnknownToken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/addFriend";

    fn token_of(link: &str) -> &str {
        link.strip_prefix(BASE)
            .and_then(|rest| rest.strip_prefix("?token="))
            .unwrap()
    }

    #[test]
    fn issued_link_redeems_to_its_user() {
        let tokens = TokenTable::new();
        let link = issue_link(&tokens, BASE, "alice").friend_id;
        let token = token_of(&link);

        assert!(Uuid::parse_str(token).is_ok());
        let redemption = redeem_link(&tokens, token);
        assert_eq!(
            redemption,
            Redemption::Accepted {
                user_id: "alice".to_string()
            }
        );
        assert_eq!(redemption.message(), "Friend request sent to user: alice");
    }

    #[test]
    fn every_issue_gets_a_fresh_token() {
        let tokens = TokenTable::new();
        let first = issue_link(&tokens, BASE, "alice").friend_id;
        let second = issue_link(&tokens, BASE, "alice").friend_id;

        assert_ne!(token_of(&first), token_of(&second));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn unknown_token_leaves_table_untouched() {
        let tokens = TokenTable::new();
        issue_link(&tokens, BASE, "alice");

        let redemption = redeem_link(&tokens, "not-a-token");
        assert_eq!(redemption, Redemption::UnknownToken);
        assert_eq!(redemption.message(), "Invalid or expired QR code!");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn redeem_is_repeatable() {
        let tokens = TokenTable::new();
        let link = issue_link(&tokens, BASE, "bob").friend_id;
        let token = token_of(&link);

        let first = redeem_link(&tokens, token);
        let second = redeem_link(&tokens, token);
        assert_eq!(first, second);
        assert!(tokens.contains(token));
    }

    #[test]
    fn missing_or_blank_user_id_falls_back_to_default() {
        let absent = GetLinkQuery { user_id: None };
        let blank = GetLinkQuery {
            user_id: Some(String::new()),
        };
        let given = GetLinkQuery {
            user_id: Some("carol".to_string()),
        };

        assert_eq!(absent.user_id_or_default(), DEFAULT_USER_ID);
        assert_eq!(blank.user_id_or_default(), DEFAULT_USER_ID);
        assert_eq!(given.user_id_or_default(), "carol");
    }

    #[test]
    fn response_serializes_with_friend_id_key() {
        let body = serde_json::to_value(FriendLinkResponse {
            friend_id: build_link(BASE, "abc"),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "friendId": "http://localhost:8080/addFriend?token=abc" })
        );
    }
}
