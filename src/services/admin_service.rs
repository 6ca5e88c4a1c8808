//! S3 administration actions behind the control panel.
//!
//! `AdminService` binds a freshly built client to the target bucket and the
//! activity log for the duration of one request. Each action performs a
//! single provider call, writes exactly one activity-log line for its
//! terminal outcome, and reports through the uniform [`ActionResult`]
//! envelope — provider rejections are caught here, never propagated to the
//! transport layer.

use crate::{
    models::{
        envelope::ActionResult,
        request::{BucketCredentials, LifecyclePolicySpec},
    },
    services::activity_log::ActivityLog,
};
use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    error::{BuildError, DisplayErrorContext},
    primitives::ByteStream,
    types::{
        BucketLifecycleConfiguration, BucketLocationConstraint, CreateBucketConfiguration,
        ExpirationStatus, IntelligentTieringAccessTier, IntelligentTieringConfiguration,
        IntelligentTieringStatus, LifecycleExpiration, LifecycleRule, LifecycleRuleFilter,
        Tiering, Transition, TransitionStorageClass,
    },
};

/// S3's home region; CreateBucket rejects an explicit location constraint
/// for it.
const DEFAULT_REGION: &str = "us-east-1";

/// Payload written by the sample upload, used to exercise policy
/// transitions on a fresh bucket.
const SAMPLE_CONTENT: &str = "Sample data for S3 optimization project.";

/// Identifier of the single rule submitted by the custom policy action.
const LIFECYCLE_RULE_ID: &str = "CustomArchivalPolicy";

/// The custom policy only governs objects under this key prefix.
const ARCHIVE_PREFIX: &str = "archive/";

/// Fixed intelligent-tiering preset: identifier and the two access-tier
/// thresholds. Deliberately not user-configurable.
const TIERING_ID: &str = "ExhibitIntelligentTiering";
const ARCHIVE_ACCESS_DAYS: i32 = 90;
const DEEP_ARCHIVE_ACCESS_DAYS: i32 = 180;

/// Build a client from the user-supplied credential set.
///
/// Authentication is lazy — no network traffic happens here; bad keys
/// surface on the first real call. An endpoint override (MinIO,
/// LocalStack) also switches to path-style addressing, since
/// virtual-hosted addressing assumes real AWS DNS.
pub fn build_client(credentials: &BucketCredentials, endpoint: Option<&str>) -> Client {
    let mut builder = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(credentials.region.clone()))
        .credentials_provider(Credentials::new(
            &credentials.access_key,
            &credentials.secret_key,
            None,
            None,
            "user-supplied",
        ));

    if let Some(endpoint) = endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

/// One request's worth of administration capability: a client, the bucket
/// it targets, and the log that records outcomes.
pub struct AdminService {
    client: Client,
    bucket: String,
    log: ActivityLog,
}

impl AdminService {
    pub fn new(credentials: &BucketCredentials, endpoint: Option<&str>, log: ActivityLog) -> Self {
        Self {
            client: build_client(credentials, endpoint),
            bucket: credentials.bucket_name.clone(),
            log,
        }
    }

    /// Create the target bucket in `region`.
    pub async fn create_bucket(&self, region: &str) -> ActionResult {
        let request = self.client.create_bucket().bucket(&self.bucket);
        let request = if region == DEFAULT_REGION {
            request
        } else {
            request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            )
        };

        match request.send().await {
            Ok(_) => {
                self.report_success(format!(
                    "Bucket '{}' created in {}.",
                    self.bucket, region
                ))
                .await
            }
            Err(err) => {
                self.report_failure(format!(
                    "Error creating bucket '{}': {}",
                    self.bucket,
                    DisplayErrorContext(err)
                ))
                .await
            }
        }
    }

    /// Upload the fixed sample object under `key`.
    pub async fn upload_sample(&self, key: &str) -> ActionResult {
        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from_static(SAMPLE_CONTENT.as_bytes()))
            .send()
            .await;

        match result {
            Ok(_) => {
                self.report_success(format!(
                    "Sample file '{}' uploaded to '{}'.",
                    key, self.bucket
                ))
                .await
            }
            Err(err) => {
                self.report_failure(format!(
                    "Error uploading file '{}': {}",
                    key,
                    DisplayErrorContext(err)
                ))
                .await
            }
        }
    }

    /// Replace the bucket's lifecycle configuration with the single
    /// archival rule described by `spec`. This is a destructive overwrite,
    /// not a merge — any existing rules on the bucket are dropped.
    pub async fn apply_lifecycle(&self, spec: LifecyclePolicySpec) -> ActionResult {
        let configuration = match lifecycle_configuration(spec) {
            Ok(configuration) => configuration,
            Err(err) => {
                return self
                    .report_failure(format!("Error applying lifecycle policy: {err}"))
                    .await;
            }
        };

        let result = self
            .client
            .put_bucket_lifecycle_configuration()
            .bucket(&self.bucket)
            .lifecycle_configuration(configuration)
            .send()
            .await;

        match result {
            Ok(_) => {
                self.report_success(format!(
                    "Custom lifecycle policy applied to {}. Transitions: Glacier@{} days, \
                     DeepArchive@{} days. Expiration: {} days.",
                    self.bucket, spec.glacier_days, spec.deep_archive_days, spec.expiration_days
                ))
                .await
            }
            Err(err) => {
                self.report_failure(format!(
                    "Error applying lifecycle policy: {}",
                    DisplayErrorContext(err)
                ))
                .await
            }
        }
    }

    /// Enable the fixed intelligent-tiering preset on the target bucket.
    pub async fn enable_intelligent_tiering(&self) -> ActionResult {
        let configuration = match intelligent_tiering_configuration() {
            Ok(configuration) => configuration,
            Err(err) => {
                return self
                    .report_failure(format!("Error enabling Intelligent-Tiering: {err}"))
                    .await;
            }
        };

        let result = self
            .client
            .put_bucket_intelligent_tiering_configuration()
            .bucket(&self.bucket)
            .id(TIERING_ID)
            .intelligent_tiering_configuration(configuration)
            .send()
            .await;

        match result {
            Ok(_) => {
                self.report_success(format!(
                    "Intelligent-Tiering enabled on {} with Archive after {} days.",
                    self.bucket, ARCHIVE_ACCESS_DAYS
                ))
                .await
            }
            Err(err) => {
                self.report_failure(format!(
                    "Error enabling Intelligent-Tiering: {}",
                    DisplayErrorContext(err)
                ))
                .await
            }
        }
    }

    async fn report_success(&self, message: String) -> ActionResult {
        self.log.info(&message).await;
        ActionResult::success(message)
    }

    async fn report_failure(&self, message: String) -> ActionResult {
        self.log.error(&message).await;
        ActionResult::error(message)
    }
}

/// Build the full lifecycle configuration submitted by
/// [`AdminService::apply_lifecycle`]: one enabled rule scoped to
/// [`ARCHIVE_PREFIX`], two storage-class transitions, one expiration.
pub fn lifecycle_configuration(
    spec: LifecyclePolicySpec,
) -> Result<BucketLifecycleConfiguration, BuildError> {
    let rule = LifecycleRule::builder()
        .id(LIFECYCLE_RULE_ID)
        .status(ExpirationStatus::Enabled)
        .filter(LifecycleRuleFilter::builder().prefix(ARCHIVE_PREFIX).build())
        .transitions(
            Transition::builder()
                .days(spec.glacier_days)
                .storage_class(TransitionStorageClass::Glacier)
                .build(),
        )
        .transitions(
            Transition::builder()
                .days(spec.deep_archive_days)
                .storage_class(TransitionStorageClass::DeepArchive)
                .build(),
        )
        .expiration(
            LifecycleExpiration::builder()
                .days(spec.expiration_days)
                .build(),
        )
        .build()?;

    BucketLifecycleConfiguration::builder().rules(rule).build()
}

/// Build the fixed intelligent-tiering configuration. Identical for every
/// bucket — see the constants above.
pub fn intelligent_tiering_configuration() -> Result<IntelligentTieringConfiguration, BuildError> {
    IntelligentTieringConfiguration::builder()
        .id(TIERING_ID)
        .status(IntelligentTieringStatus::Enabled)
        .tierings(
            Tiering::builder()
                .days(ARCHIVE_ACCESS_DAYS)
                .access_tier(IntelligentTieringAccessTier::ArchiveAccess)
                .build()?,
        )
        .tierings(
            Tiering::builder()
                .days(DEEP_ARCHIVE_ACCESS_DAYS)
                .access_tier(IntelligentTieringAccessTier::DeepArchiveAccess)
                .build()?,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_configuration_has_single_archive_rule() {
        let cfg = lifecycle_configuration(LifecyclePolicySpec {
            glacier_days: 17,
            deep_archive_days: 43,
            expiration_days: 204,
        })
        .unwrap();

        let rules = cfg.rules();
        assert_eq!(rules.len(), 1);

        let rule = &rules[0];
        assert_eq!(rule.id(), Some(LIFECYCLE_RULE_ID));
        assert_eq!(rule.status(), &ExpirationStatus::Enabled);
        assert_eq!(rule.filter().and_then(|f| f.prefix()), Some(ARCHIVE_PREFIX));

        let transitions = rule.transitions();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].days(), Some(17));
        assert_eq!(
            transitions[0].storage_class(),
            Some(&TransitionStorageClass::Glacier)
        );
        assert_eq!(transitions[1].days(), Some(43));
        assert_eq!(
            transitions[1].storage_class(),
            Some(&TransitionStorageClass::DeepArchive)
        );

        assert_eq!(rule.expiration().and_then(|e| e.days()), Some(204));
    }

    #[test]
    fn lifecycle_configuration_places_supplied_days() {
        for (g, d, e) in [(1, 2, 3), (30, 90, 365), (500, 100, 7)] {
            let cfg = lifecycle_configuration(LifecyclePolicySpec {
                glacier_days: g,
                deep_archive_days: d,
                expiration_days: e,
            })
            .unwrap();
            let rule = &cfg.rules()[0];
            assert_eq!(rule.transitions()[0].days(), Some(g));
            assert_eq!(rule.transitions()[1].days(), Some(d));
            assert_eq!(rule.expiration().and_then(|x| x.days()), Some(e));
        }
    }

    #[test]
    fn intelligent_tiering_preset_is_fixed() {
        let cfg = intelligent_tiering_configuration().unwrap();
        assert_eq!(cfg.id(), TIERING_ID);
        assert_eq!(cfg.status(), &IntelligentTieringStatus::Enabled);

        let tierings = cfg.tierings();
        assert_eq!(tierings.len(), 2);
        assert_eq!(tierings[0].days(), ARCHIVE_ACCESS_DAYS);
        assert_eq!(
            tierings[0].access_tier(),
            &IntelligentTieringAccessTier::ArchiveAccess
        );
        assert_eq!(tierings[1].days(), DEEP_ARCHIVE_ACCESS_DAYS);
        assert_eq!(
            tierings[1].access_tier(),
            &IntelligentTieringAccessTier::DeepArchiveAccess
        );
    }
}
