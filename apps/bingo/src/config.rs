use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::card::CardConfig;
use crate::layout::{FontFamily, HostContainer, Padding};

const DEFAULT_PHRASES_SOURCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/phrases.json");

/// Application configuration loaded from environment variables.
/// Every variable has a default; a present but malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// File path or http(s) URL of the phrase JSON.
    pub phrases_source: String,
    pub phrases_fetch_timeout: Duration,
    /// Initial host container, used for the first resize before any client reports one.
    pub container: HostContainer,
    pub card: CardConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CardConfig::default();

        let font_name = lookup("CARD_FONT").unwrap_or_else(|| defaults.font.to_string());
        let font = FontFamily::from_str(&font_name)
            .map_err(|e| anyhow!(e))
            .context("CARD_FONT must be serif, sans-serif or monospace")?;

        let card = CardConfig {
            total_squares: parse_or(&lookup, "CARD_TOTAL_SQUARES", defaults.total_squares)?,
            squares_per_row: parse_or(&lookup, "CARD_SQUARES_PER_ROW", defaults.squares_per_row)?,
            gutter_size: parse_or(&lookup, "CARD_GUTTER_SIZE", defaults.gutter_size)?,
            free_space_index: parse_or(&lookup, "CARD_FREE_SPACE_INDEX", defaults.free_space_index)?,
            free_space_text: lookup("CARD_FREE_SPACE_TEXT").unwrap_or(defaults.free_space_text),
            font,
            font_size_px: parse_or(&lookup, "CARD_FONT_SIZE_PX", defaults.font_size_px)?,
            line_height: defaults.line_height,
            line_spacing: parse_or(&lookup, "CARD_LINE_SPACING", defaults.line_spacing)?,
        };
        card.validate().context("Card configuration is invalid")?;

        let padding: f32 = parse_or(&lookup, "CARD_CONTAINER_PADDING", 15.0)?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            phrases_source: lookup("PHRASES_SOURCE")
                .unwrap_or_else(|| DEFAULT_PHRASES_SOURCE.to_string()),
            phrases_fetch_timeout: Duration::from_secs(parse_or(
                &lookup,
                "PHRASES_FETCH_TIMEOUT_SECS",
                10,
            )?),
            container: HostContainer {
                inner_width: parse_or(&lookup, "CARD_CONTAINER_WIDTH", 600.0)?,
                padding: Padding::uniform(padding),
            },
            card,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
