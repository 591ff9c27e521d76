//! HTTP helper functions for the portal core.

use crux_http::Response;

use crate::model::Model;

/// Base URL for portal endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// making them relative to the portal's own origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use portal_ui_core::http_helpers::build_url;
/// let url = build_url("/");
/// assert_eq!(url, "https://relative/");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Serialize the active form's fields into an urlencoded body.
///
/// Pairs follow the declared field order, keyed by wire key, with values
/// taken verbatim from the mirrored inputs.
pub fn encode_form_body(model: &Model) -> String {
    model
        .form
        .fields()
        .iter()
        .map(|spec| format!("{}={}", spec.wire_key, model.field_value(spec.name)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Reduce an HTTP result to its status code.
///
/// The response body is never read; the portal backend speaks a
/// status-code-only contract.
pub fn process_submit_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<u16, String> {
    match result {
        Ok(response) => Ok(response.status().into()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormVariant;

    #[test]
    fn body_follows_declared_field_order() {
        let mut model = Model {
            form: FormVariant::Sensor,
            ..Default::default()
        };
        model
            .field_values
            .insert("serialcode".to_string(), "abc-1".to_string());
        model
            .field_values
            .insert("username".to_string(), "maria".to_string());
        model
            .field_values
            .insert("cpf".to_string(), "12345678900".to_string());
        model
            .field_values
            .insert("password".to_string(), "s3cret".to_string());

        assert_eq!(
            encode_form_body(&model),
            "username=maria&password=s3cret&cpf=12345678900&serialCode=abc-1"
        );
    }

    #[test]
    fn missing_values_serialize_as_empty() {
        let model = Model {
            form: FormVariant::Wifi,
            ..Default::default()
        };

        assert_eq!(encode_form_body(&model), "ssid=&password=");
    }
}
