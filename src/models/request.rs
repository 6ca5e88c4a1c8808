//! Request payloads accepted by the action endpoints.
//!
//! The page submits one flat JSON object per action. Every field arrives
//! optional; the accessors below enforce presence where an endpoint
//! requires it. Day counts may arrive as JSON numbers or as numeric
//! strings (HTML inputs submit strings), so they are kept as raw values
//! until parsed.

use crate::errors::AppError;
use serde::Deserialize;
use serde_json::Value;

/// Object key used when `/upload_file` is called without a `file_key`.
pub const DEFAULT_SAMPLE_KEY: &str = "sample-media-file.txt";

/// Flat request body shared by all four action endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ActionRequest {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
    pub bucket_name: Option<String>,

    /// Only read by `/upload_file`.
    pub file_key: Option<String>,

    /// Only read by `/apply_custom_lifecycle`.
    pub glacier_days: Option<Value>,
    pub deep_archive_days: Option<Value>,
    pub expiration_days: Option<Value>,
}

/// The credential set every action needs: who to authenticate as, where,
/// and which bucket to act on. Built per request, used once to construct
/// a client, never persisted and never logged.
#[derive(Debug, Clone)]
pub struct BucketCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub bucket_name: String,
}

/// Day offsets for the custom archival policy.
///
/// No ordering between the three values is enforced here; the provider is
/// the authority on whether a given combination is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicySpec {
    pub glacier_days: i32,
    pub deep_archive_days: i32,
    pub expiration_days: i32,
}

impl ActionRequest {
    /// Extract the four required fields, treating empty strings as absent.
    pub fn credentials(&self) -> Result<BucketCredentials, AppError> {
        match (
            non_empty(self.access_key.as_deref()),
            non_empty(self.secret_key.as_deref()),
            non_empty(self.region.as_deref()),
            non_empty(self.bucket_name.as_deref()),
        ) {
            (Some(access_key), Some(secret_key), Some(region), Some(bucket_name)) => {
                Ok(BucketCredentials {
                    access_key: access_key.to_string(),
                    secret_key: secret_key.to_string(),
                    region: region.to_string(),
                    bucket_name: bucket_name.to_string(),
                })
            }
            _ => Err(AppError::MissingCredentials),
        }
    }

    /// Object key for the sample upload, falling back to the fixed default.
    pub fn object_key(&self) -> String {
        non_empty(self.file_key.as_deref())
            .unwrap_or(DEFAULT_SAMPLE_KEY)
            .to_string()
    }

    /// Parse the three day fields for `/apply_custom_lifecycle`.
    ///
    /// All three must be present and must parse as integers; both checks
    /// fail the request before any provider call is made.
    pub fn lifecycle_spec(&self) -> Result<LifecyclePolicySpec, AppError> {
        let (glacier, deep_archive, expiration) = match (
            self.glacier_days.as_ref(),
            self.deep_archive_days.as_ref(),
            self.expiration_days.as_ref(),
        ) {
            (Some(g), Some(d), Some(e)) => (g, d, e),
            _ => return Err(AppError::MissingPolicyDays),
        };

        match (parse_days(glacier), parse_days(deep_archive), parse_days(expiration)) {
            (Some(glacier_days), Some(deep_archive_days), Some(expiration_days)) => {
                Ok(LifecyclePolicySpec {
                    glacier_days,
                    deep_archive_days,
                    expiration_days,
                })
            }
            _ => Err(AppError::InvalidPolicyDays),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept a day count as either a JSON integer or a numeric string.
fn parse_days(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> ActionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn credentials_require_all_four_fields() {
        let req = request(json!({
            "access_key": "AKIA",
            "secret_key": "secret",
            "region": "us-west-2",
            "bucket_name": "demo"
        }));
        let creds = req.credentials().unwrap();
        assert_eq!(creds.region, "us-west-2");
        assert_eq!(creds.bucket_name, "demo");

        for missing in ["access_key", "secret_key", "region", "bucket_name"] {
            let mut body = json!({
                "access_key": "AKIA",
                "secret_key": "secret",
                "region": "us-west-2",
                "bucket_name": "demo"
            });
            body.as_object_mut().unwrap().remove(missing);
            assert!(request(body).credentials().is_err(), "{missing} accepted");
        }
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let req = request(json!({
            "access_key": "",
            "secret_key": "secret",
            "region": "us-west-2",
            "bucket_name": "demo"
        }));
        assert!(matches!(req.credentials(), Err(AppError::MissingCredentials)));
    }

    #[test]
    fn object_key_defaults_when_absent() {
        assert_eq!(request(json!({})).object_key(), DEFAULT_SAMPLE_KEY);
        assert_eq!(
            request(json!({"file_key": "archive/a.bin"})).object_key(),
            "archive/a.bin"
        );
    }

    #[test]
    fn lifecycle_spec_accepts_numbers_and_numeric_strings() {
        let req = request(json!({
            "glacier_days": 30,
            "deep_archive_days": "90",
            "expiration_days": 365
        }));
        assert_eq!(
            req.lifecycle_spec().unwrap(),
            LifecyclePolicySpec {
                glacier_days: 30,
                deep_archive_days: 90,
                expiration_days: 365,
            }
        );
    }

    #[test]
    fn lifecycle_spec_rejects_non_integers() {
        let req = request(json!({
            "glacier_days": "abc",
            "deep_archive_days": 90,
            "expiration_days": 365
        }));
        assert!(matches!(req.lifecycle_spec(), Err(AppError::InvalidPolicyDays)));

        let req = request(json!({
            "glacier_days": 1.5,
            "deep_archive_days": 90,
            "expiration_days": 365
        }));
        assert!(matches!(req.lifecycle_spec(), Err(AppError::InvalidPolicyDays)));
    }

    #[test]
    fn lifecycle_spec_requires_all_three_days() {
        let req = request(json!({
            "glacier_days": 30,
            "expiration_days": 365
        }));
        assert!(matches!(req.lifecycle_spec(), Err(AppError::MissingPolicyDays)));
    }
}
