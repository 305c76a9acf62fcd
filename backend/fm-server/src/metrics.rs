use fm_auth::Rejection;

use metrics::counter;

/// Counters for launch-data verification
#[derive(Clone)]
pub struct AuthMetrics {
    prefix: &'static str,
}

impl AuthMetrics {
    pub fn new() -> Self {
        Self { prefix: "fm_auth" }
    }

    pub fn verification_succeeded(&self) {
        counter!(format!("{}.verification.succeeded", self.prefix)).increment(1);
    }

    /// Record a rejected payload, labelled by cause
    pub fn verification_rejected(&self, rejection: Rejection) {
        counter!(format!("{}.verification.rejected", self.prefix)).increment(1);
        counter!(format!(
            "{}.verification.rejected.{}",
            self.prefix,
            rejection.as_str()
        ))
        .increment(1);
    }

    /// Record a request that could not be verified because the bot token is missing
    pub fn configuration_error(&self) {
        counter!(format!("{}.configuration_errors", self.prefix)).increment(1);
    }
}

impl Default for AuthMetrics {
    fn default() -> Self {
        Self::new()
    }
}
