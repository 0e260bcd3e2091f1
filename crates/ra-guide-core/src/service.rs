use std::sync::Arc;

use anyhow::{Context, Result};
use ra_api_client::{Authorization, GameExtended, RaClient};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::blocks;

/// Fetch-and-format pipeline behind the one user-facing operation.
#[derive(Clone)]
pub struct GuideService {
    client: Arc<RaClient>,
}

/// Result of one guide generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GuideOutput {
    pub game_id: u32,
    pub title: String,
    pub console_name: String,
    pub achievement_count: usize,
    pub total_points: u64,
    pub markdown: String,
}

impl GuideOutput {
    /// Build the output from an already-fetched game record.
    #[must_use]
    pub fn from_game(game: &GameExtended) -> Self {
        let markdown = blocks::render_blocks(game.achievements.values());
        let total_points = game
            .achievements
            .values()
            .map(|achievement| u64::from(achievement.points))
            .sum();
        Self {
            game_id: game.id,
            title: game.title.clone(),
            console_name: game.console_name.clone(),
            achievement_count: game.achievements.len(),
            total_points,
            markdown,
        }
    }
}

impl GuideService {
    #[must_use]
    pub fn new(client: RaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Fetch the game's achievement list and render its guide blocks.
    #[instrument(name = "guide_service.generate", skip(self, authorization))]
    pub async fn generate(
        &self,
        authorization: &Authorization,
        game_id: u32,
    ) -> Result<GuideOutput> {
        let game = self
            .client
            .get_game_extended(authorization, game_id)
            .await
            .with_context(|| format!("failed to fetch achievements for game {game_id}"))?;

        let output = GuideOutput::from_game(&game);
        debug!(
            target: "ra_guide_core",
            game = %output.title,
            achievements = output.achievement_count,
            total_points = output.total_points,
            "rendered guide blocks"
        );
        Ok(output)
    }
}
