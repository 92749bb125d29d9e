use serde_json::Value;

use crate::models::NewSystemRecord;

pub const INVALID_SUBMISSION: &str = "Invalid data. The request body must contain \"computador\" (string), \
     \"informacoes\" (JSON object) and \"descricao\" (string).";

/// Parse and validate a raw submit body.
///
/// The body is only read as JSON when `content_type` is `application/json`.
/// All three fields are checked together: the body is accepted only when
/// `computador` and `descricao` are non-empty strings and `informacoes` is a
/// JSON object. Anything else, including a body that is not JSON at all,
/// yields `INVALID_SUBMISSION`.
pub fn parse_submission(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<NewSystemRecord, &'static str> {
    if !content_type.is_some_and(is_json_media_type) {
        return Err(INVALID_SUBMISSION);
    }

    let mut value: Value = serde_json::from_slice(body).map_err(|_| INVALID_SUBMISSION)?;
    let Some(fields) = value.as_object_mut() else {
        return Err(INVALID_SUBMISSION);
    };

    let computer_name = non_empty_string(fields.remove("computador"));
    let description = non_empty_string(fields.remove("descricao"));
    let information_data = fields.remove("informacoes").filter(Value::is_object);

    match (computer_name, description, information_data) {
        (Some(computer_name), Some(description), Some(information_data)) => Ok(NewSystemRecord {
            computer_name,
            description,
            information_data,
        }),
        _ => Err(INVALID_SUBMISSION),
    }
}

/// `application/json`, ignoring case and any `; charset=...` parameters.
fn is_json_media_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}
