//! Webhook document construction.
//!
//! Everything here is pure: one digest document in, deterministic JSON
//! structure out, with embed order following input order.

use serde::Serialize;

use crate::hn::{PostItem, RankingKind};

/// Sender display name on every digest message.
const SENDER_USERNAME: &str = "Y Combinator's Hacker News";

/// Sender avatar image.
const SENDER_AVATAR_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/b/b2/Y_Combinator_logo.svg/240px-Y_Combinator_logo.svg.png";

/// Card accent color, HN orange.
const EMBED_COLOR: u32 = 16_737_792;

/// Footer branding line.
const FOOTER_TEXT: &str = "HN Digest Bot";

/// Footer icon.
const FOOTER_ICON_URL: &str = "https://news.ycombinator.com/y18.gif";

/// Branding for one digest variant.
///
/// The top and best digests share one pipeline and differ only in this data.
#[derive(Debug, Clone, Copy)]
pub struct DigestProfile {
    pub ranking: RankingKind,
    /// Heading fragment rendered between the post count and the date.
    pub heading: &'static str,
    /// Footer text on every card.
    pub footer_text: &'static str,
}

impl DigestProfile {
    /// The profile belonging to a ranking endpoint.
    #[must_use]
    pub fn for_ranking(ranking: RankingKind) -> Self {
        match ranking {
            RankingKind::Top => Self {
                ranking,
                heading: "Trending Posts Today 🔥",
                footer_text: FOOTER_TEXT,
            },
            RankingKind::Best => Self {
                ranking,
                heading: "Best Posts Lately 🚀",
                footer_text: FOOTER_TEXT,
            },
        }
    }
}

/// The JSON document POSTed to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub avatar_url: String,
    pub content: String,
    pub embeds: Vec<Embed>,
}

/// One embedded card.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    pub title: String,
    pub url: String,
    pub description: String,
    pub timestamp: String,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

/// Build one digest document from normalized posts.
///
/// The heading embeds the number of posts actually included and the
/// caller-supplied display date. An empty input still yields a well-formed
/// document with a heading and no cards.
#[must_use]
pub fn build_notification(
    posts: &[PostItem],
    profile: &DigestProfile,
    current_date: &str,
) -> WebhookPayload {
    let content = format!(
        "__**{} {} ({current_date})**__",
        posts.len(),
        profile.heading
    );

    let embeds = posts.iter().map(|post| embed_for(post, profile)).collect();

    WebhookPayload {
        username: SENDER_USERNAME.to_string(),
        avatar_url: SENDER_AVATAR_URL.to_string(),
        content,
        embeds,
    }
}

/// Render one post as an embed card.
fn embed_for(post: &PostItem, profile: &DigestProfile) -> Embed {
    let comments = post
        .comment_count
        .map_or_else(|| "null".to_string(), |c| c.to_string());

    Embed {
        color: EMBED_COLOR,
        author: post.author.clone().map(|name| EmbedAuthor { name }),
        title: post.title.clone(),
        url: post.external_url.clone(),
        description: post.body_text.clone(),
        timestamp: post.created_at.clone(),
        fields: vec![
            EmbedField {
                name: "Post ID".to_string(),
                value: format!("[{}]({})", post.id, post.permalink),
                inline: true,
            },
            EmbedField {
                name: "Score".to_string(),
                value: format!("{} points", post.score),
                inline: true,
            },
            EmbedField {
                name: "Comments".to_string(),
                value: comments,
                inline: true,
            },
        ],
        footer: EmbedFooter {
            text: profile.footer_text.to_string(),
            icon_url: FOOTER_ICON_URL.to_string(),
        },
    }
}
