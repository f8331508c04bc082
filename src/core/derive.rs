use serde_json::Value;
use std::collections::HashMap;

use crate::core::{PresentationModel, RequestId, Result, Variant};
use crate::utils::error::BootError;

/// Field-extraction rules for the presentation model. All-or-nothing: the
/// caller only gets here once every configured request has settled with a
/// decoded body.
pub fn derive_model(
    variant: Variant,
    mut responses: HashMap<RequestId, Value>,
) -> Result<PresentationModel> {
    let options = take(&mut responses, RequestId::Options)?;

    let (logged_in, available_for_trading) = if variant.fetches_user_info() {
        let user = take(&mut responses, RequestId::UserInfo)?;
        let logged_in = is_truthy(user.get("access_token").unwrap_or(&Value::Null));
        let cash = if variant.extracts_cash() {
            user.pointer("/user_info/cash_available").and_then(Value::as_f64)
        } else {
            None
        };
        (logged_in, cash)
    } else {
        let logged_in = is_truthy(options.get("tda_auth").unwrap_or(&Value::Null));
        (logged_in, None)
    };

    Ok(PresentationModel {
        logged_in,
        available_for_trading,
        // Passed through verbatim.
        options: options.get("options").cloned().unwrap_or(Value::Null),
        suggestions: options.get("suggestions").cloned().unwrap_or(Value::Null),
    })
}

fn take(responses: &mut HashMap<RequestId, Value>, id: RequestId) -> Result<Value> {
    responses
        .remove(&id)
        .ok_or(BootError::MissingResponse { request: id })
}

/// A value counts as set unless it is null, `false`, zero or an empty
/// string. This is what the login-state flags in the payloads rely on.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
