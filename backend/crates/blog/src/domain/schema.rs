//! Post Schemas

use kernel::id::PostId;
use kernel::validation::{ValidationErrors, Validator};
use serde_json::Value;

use crate::domain::post::PostDraft;

pub const TITLE_LENGTH: std::ops::RangeInclusive<usize> = 5..=20;
pub const CONTENT_LENGTH: std::ops::RangeInclusive<usize> = 5..=500;

const TITLE_MESSAGE: &str = "Post title must be between 5 and 20 characters long";
const CONTENT_MESSAGE: &str = "Post content must be between 5 and 500 characters long";
const ACTIVE_MESSAGE: &str = "Active must be either true or false";
const ID_MESSAGE: &str = "Post id can't be null or <= 0";

/// Validated update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    pub id: PostId,
    pub draft: PostDraft,
}

/// `{ title, content, active? }`, `active` defaulting to `true`
pub fn validate_new_post(payload: &Value) -> Result<PostDraft, ValidationErrors> {
    let mut v = Validator::new();

    let title = text_field(&mut v, payload, "title", TITLE_LENGTH, TITLE_MESSAGE);
    let content = text_field(&mut v, payload, "content", CONTENT_LENGTH, CONTENT_MESSAGE);
    let active = match payload.get("active") {
        None | Some(Value::Null) => Some(true),
        Some(_) => v.bool_field(payload, "active", ACTIVE_MESSAGE),
    };

    match (title, content, active) {
        (Some(title), Some(content), Some(active)) => Ok(PostDraft {
            title,
            content,
            active,
        }),
        _ => Err(v.into_errors()),
    }
}

/// `{ id, title, content, active }`, all required
pub fn validate_post_update(payload: &Value) -> Result<PostUpdate, ValidationErrors> {
    let mut v = Validator::new();

    let id = match v.int_field(payload, "id", ID_MESSAGE) {
        Some(raw) => {
            let id = i32::try_from(raw).ok().and_then(PostId::new);
            v.check("id", id.is_some(), ID_MESSAGE);
            id
        }
        None => None,
    };
    let title = text_field(&mut v, payload, "title", TITLE_LENGTH, TITLE_MESSAGE);
    let content = text_field(&mut v, payload, "content", CONTENT_LENGTH, CONTENT_MESSAGE);
    let active = v.bool_field(payload, "active", ACTIVE_MESSAGE);

    match (id, title, content, active) {
        (Some(id), Some(title), Some(content), Some(active)) => Ok(PostUpdate {
            id,
            draft: PostDraft {
                title,
                content,
                active,
            },
        }),
        _ => Err(v.into_errors()),
    }
}

fn text_field(
    v: &mut Validator,
    payload: &Value,
    field: &'static str,
    range: std::ops::RangeInclusive<usize>,
    message: &'static str,
) -> Option<String> {
    let value = v.string_field(payload, field, message)?;
    v.length(field, &value, &range, message).then_some(value)
}
