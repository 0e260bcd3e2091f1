//! The guide-block formatter: achievement records in, markdown out.

use ra_api_client::types::Achievement;

use crate::markdown;

/// Render one achievement as its guide-ready snippet: the badge image floated
/// left of a fenced title/points/description body.
#[must_use]
pub fn achievement_block(achievement: &Achievement) -> String {
    let body = format!(
        "{} [{} {}]\n{}",
        achievement.title,
        achievement.points,
        markdown::points_label(achievement.points),
        achievement.description,
    );
    format!(
        "{}\n\n{}\n",
        markdown::badge_image(&achievement.badge_url()),
        markdown::fenced(&body),
    )
}

/// Render the whole achievement list, one block per record, in input order.
#[must_use]
pub fn render_blocks<'a, I>(achievements: I) -> String
where
    I: IntoIterator<Item = &'a Achievement>,
{
    let blocks: Vec<String> = achievements.into_iter().map(achievement_block).collect();
    blocks.join("\n")
}
