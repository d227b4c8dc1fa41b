use serde::{Deserialize, Serialize};

/// Scrobbler session as stored by the accounts page. Absence means the
/// account is not linked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionData {
    #[serde(rename = "sessionID")]
    pub session_id: Option<String>,
    pub session_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_session_shape() {
        let session: SessionData =
            serde_json::from_value(json!({ "sessionID": "abc", "sessionName": "rj" })).unwrap();
        assert_eq!(session.session_id.as_deref(), Some("abc"));
        assert_eq!(session.session_name.as_deref(), Some("rj"));
    }

    #[test]
    fn test_token_only_session() {
        let session: SessionData = serde_json::from_value(json!({ "token": "t" })).unwrap();
        assert_eq!(session, SessionData::default());
    }
}
