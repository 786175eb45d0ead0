use chrono::Duration;
use tracing::{Instrument, debug, info, info_span};

use crate::{
    clients::webhook::WebhookClient,
    models::{build::Build, error::HandleError, message::WebhookPayload},
};

const GITHUB_BASE: &str = "https://github.com/seankhliao";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Non-terminal status, nothing sent.
    Ignored,
    Delivered,
}

/// Filter, format and deliver one build status event. At most one
/// outbound webhook call per invocation.
pub async fn process_build(
    build: &Build,
    webhook: &WebhookClient,
) -> Result<Outcome, HandleError> {
    if !build.status.is_terminal() {
        debug!(status = %build.status, build = %build.id, "Ignoring non-terminal status");
        return Ok(Outcome::Ignored);
    }

    let text = format_message(build);

    webhook
        .post(WebhookPayload { text })
        .instrument(info_span!("send_message", build = %build.id))
        .await
        .map_err(HandleError::Delivery)?;

    info!(status = %build.status, build = %build.id, "Build status reported");

    Ok(Outcome::Delivered)
}

/// Render the notification text for a finished build:
///
/// ```text
/// status | trigger-name | repo@branch:commit
/// duration | build-log
/// ```
///
/// Missing substitution keys render as empty strings.
pub fn format_message(build: &Build) -> String {
    let repo = build.substitution("REPO_NAME");
    let branch = build.substitution("BRANCH_NAME");
    let sha = build.substitution("COMMIT_SHA");
    let short_sha = build.substitution("SHORT_SHA");

    let mut text = format!("{} | {} | ", build.status, build.substitution("TRIGGER_NAME"));
    text.push_str(&format!("<{GITHUB_BASE}/{repo}|{repo}>"));
    text.push_str(&format!("@<{GITHUB_BASE}/{repo}/tree/{branch}|{branch}>"));
    text.push_str(&format!(":<{GITHUB_BASE}/{repo}/commit/{sha}|{short_sha}>"));
    text.push_str(&format!(
        "\n{} | <{}|build log>",
        format_duration(build.duration()),
        build.log_url
    ));
    text
}

/// Render a duration as `1h2m3s` / `1m30s` / `45s`. Negative
/// durations clamp to `0s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&format!("{seconds}s"));
    out
}
