use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, Email Id, and Contact are required fields.";
pub const SUCCESS_MESSAGE: &str = "Registration successful! We will send you the webinar details soon.";
pub const DISPATCH_FAILURE_MESSAGE: &str = "An error occurred during registration. Please try again later.";
pub const NOT_CONFIGURED_MESSAGE: &str = "Email service not configured (EMAIL_USER/PASS).";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

/// One webinar registration form submission.
///
/// Scalar JSON values are accepted for every field and kept as text. `null`,
/// `false` and `0` are treated like a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
  #[serde(default, deserialize_with = "optional_text")]
  pub webinar_title: Option<String>,
  #[serde(default, deserialize_with = "required_text")]
  #[validate(custom(function = "not_blank"))]
  pub name: String,
  #[serde(default, deserialize_with = "required_text")]
  #[validate(custom(function = "not_blank"))]
  pub email: String,
  #[serde(default, deserialize_with = "required_text")]
  #[validate(custom(function = "not_blank"))]
  pub contact: String,
  #[serde(default, deserialize_with = "optional_text")]
  pub company_name: Option<String>,
  #[serde(default, deserialize_with = "optional_text")]
  pub department: Option<String>,
  #[serde(default, deserialize_with = "optional_text")]
  pub designation: Option<String>,
  #[serde(default, deserialize_with = "optional_text")]
  pub country: Option<String>,
  #[serde(default, deserialize_with = "optional_text")]
  pub state: Option<String>,
  #[serde(default, deserialize_with = "optional_text")]
  pub city: Option<String>,
}

impl RegistrationSubmission {
  /// Parses a request body. Only a JSON object carries fields; an empty
  /// body, `null`, arrays and bare scalars yield a submission with every
  /// field absent.
  pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(Self::default());
    }

    match serde_json::from_slice::<Value>(body)? {
      Value::Object(fields) => serde_json::from_value(Value::Object(fields)),
      _ => Ok(Self::default()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistrationResponse {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub message: String,
}

impl RegistrationResponse {
  pub fn success(id: Option<String>) -> Self {
    Self {
      success: true,
      id,
      message: SUCCESS_MESSAGE.to_string(),
    }
  }
}

/// Returns the value when it has non-whitespace content.
pub fn present(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("blank"));
  }
  Ok(())
}

fn scalar_to_text(value: Value) -> Option<String> {
  match value {
    Value::Null | Value::Bool(false) => None,
    Value::Number(n) if n.as_f64() == Some(0.0) => None,
    Value::String(s) => Some(s),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(true) => Some("true".to_string()),
    other => Some(other.to_string()),
  }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Value::deserialize(deserializer).map(scalar_to_text)
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(optional_text(deserializer)?.unwrap_or_default())
}
