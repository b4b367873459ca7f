//! Digest orchestration: fetch one ranking, build its document, deliver it.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use tracing::{info, warn};

use crate::config::Config;
use crate::hn::{HnClient, RankingKind};
use crate::webhook::payload::{build_notification, DigestProfile};
use crate::webhook::WebhookClient;

/// Run every configured digest once, in order.
///
/// # Errors
///
/// Returns an error when a ranking list cannot be fetched or a delivery
/// fails at the transport level. A digest that ends up with zero posts is
/// skipped, not failed.
pub async fn run(config: &Config) -> Result<()> {
    let hn = HnClient::new(config);
    let webhook = WebhookClient::new(config);

    for ranking in &config.digests {
        run_digest(&hn, &webhook, config, *ranking).await?;
    }

    Ok(())
}

/// Fetch one ranking, build its digest document, and deliver it.
async fn run_digest(
    hn: &HnClient,
    webhook: &WebhookClient,
    config: &Config,
    ranking: RankingKind,
) -> Result<()> {
    info!(
        ranking = ranking.as_str(),
        max_posts = config.max_posts,
        "Fetching posts"
    );

    let posts = hn
        .fetch_top_n(ranking, config.max_posts)
        .await
        .with_context(|| format!("Failed to fetch {} posts", ranking.as_str()))?;

    if posts.is_empty() {
        warn!(
            ranking = ranking.as_str(),
            "No posts survived fetching, skipping delivery"
        );
        return Ok(());
    }

    let profile = DigestProfile::for_ranking(ranking);
    let date = heading_date(Utc::now(), config.digest_tz);
    let document = build_notification(&posts, &profile, &date);

    let result = webhook
        .deliver(&document)
        .await
        .context("Failed to deliver digest")?;

    if result.is_success() {
        info!(
            ranking = ranking.as_str(),
            posts = posts.len(),
            status = %result.status,
            "Digest delivered"
        );
    } else {
        warn!(
            ranking = ranking.as_str(),
            status = %result.status,
            body = %result.body,
            "Webhook rejected digest"
        );
    }

    Ok(())
}

/// Render an instant as the heading date, e.g. `November 14, 2023`, in the
/// configured display timezone.
fn heading_date(now: DateTime<Utc>, tz: FixedOffset) -> String {
    now.with_timezone(&tz).format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_heading_date_format() {
        let now = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(heading_date(now, utc), "November 14, 2023");
    }

    #[test]
    fn test_heading_date_respects_offset() {
        // 22:13 UTC is already the next day at UTC+9.
        let now = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        let plus_nine = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(heading_date(now, plus_nine), "November 15, 2023");
    }
}
