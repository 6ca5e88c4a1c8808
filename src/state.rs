//! Shared application state handed to every handler.

use crate::{
    models::request::BucketCredentials,
    services::{activity_log::ActivityLog, admin_service::AdminService},
};

/// State carried by the router. Credentials are deliberately absent: they
/// travel in request bodies only and are never cached between requests.
#[derive(Clone, Debug)]
pub struct AppState {
    pub activity_log: ActivityLog,

    /// Optional S3 endpoint override, for self-hosted gateways (MinIO,
    /// LocalStack) and for the stand-in provider used in tests.
    pub s3_endpoint: Option<String>,
}

impl AppState {
    pub fn new(activity_log: ActivityLog, s3_endpoint: Option<String>) -> Self {
        Self {
            activity_log,
            s3_endpoint,
        }
    }

    /// Build the per-request admin service for one credential set.
    pub fn admin(&self, credentials: &BucketCredentials) -> AdminService {
        AdminService::new(
            credentials,
            self.s3_endpoint.as_deref(),
            self.activity_log.clone(),
        )
    }
}
