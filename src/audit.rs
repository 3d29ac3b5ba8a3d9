use serde_json::Value;

/// Records a completed mutation on the `audit` tracing target.
pub fn log_audit(user_id: &str, action: &str, resource: &str, metadata: Value) {
    tracing::info!(
        target: "audit",
        user_id = %user_id,
        action = %action,
        resource = %resource,
        metadata = %metadata,
        "audit"
    );
}
