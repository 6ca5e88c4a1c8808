//! Service layer: the S3 administration actions and the activity log
//! they report into.

pub mod activity_log;
pub mod admin_service;
