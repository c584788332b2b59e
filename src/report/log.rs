use crate::report::{ErrorReport, ErrorReporter};
use async_trait::async_trait;

/// Reporter that writes each report to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

#[async_trait]
impl ErrorReporter for LogReporter {
    async fn report(&self, report: &ErrorReport) {
        tracing::error!(
            method = %report.method,
            url = %report.url,
            user_agent = %report.user_agent,
            referrer = %report.referrer,
            status = ?report.response_status_code,
            "Request failed: {}",
            report.message
        );
    }
}
