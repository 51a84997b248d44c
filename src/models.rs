use serde::{Deserialize, Serialize};

/// A server-owned post. Never edited locally once received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    /// Some servers omit this on create responses
    #[serde(default)]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Unsaved local input that becomes a new post on submit.
///
/// Serializes directly to the create payload `{"title": .., "body": ..}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Draft {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Body => &self.body,
        }
    }

    /// True when both fields are empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.body.trim().is_empty()
    }
}

/// Editable fields of a draft, also used as the form focus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftField {
    #[default]
    Title,
    Body,
}

impl DraftField {
    pub fn next(&self) -> DraftField {
        match self {
            DraftField::Title => DraftField::Body,
            DraftField::Body => DraftField::Title,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "post title",
            DraftField::Body => "post body...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_uses_wire_field_names() {
        let json = r#"{"userId": 1, "id": 7, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 7);

        let back = serde_json::to_value(&post).unwrap();
        assert_eq!(back["userId"], 1);
    }

    #[test]
    fn test_post_without_user_id_defaults_to_zero() {
        let post: Post = serde_json::from_str(r#"{"title": "T", "body": "B", "id": 101}"#).unwrap();
        assert_eq!(post.id, 101);
        assert_eq!(post.user_id, 0);
    }

    #[test]
    fn test_draft_payload_shape() {
        let draft = Draft::new("T", "B");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, serde_json::json!({"title": "T", "body": "B"}));
    }

    #[test]
    fn test_blank_draft() {
        assert!(Draft::default().is_blank());
        assert!(Draft::new("  ", "\n").is_blank());
        assert!(!Draft::new("", "body").is_blank());
    }
}
