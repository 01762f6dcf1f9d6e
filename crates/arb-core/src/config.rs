use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{errors::Error, Result};

/// Typed configuration for the relay bot.
///
/// Everything comes from the environment (with an optional `.env` file); the
/// bot token and the administrator identity are required, the rest has
/// defaults suitable for a single-file deployment.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    /// The single administrator all messages are relayed to.
    pub admin_id: i64,
    pub database_path: PathBuf,
    /// Prohibited substrings checked by the moderation gate.
    pub banned_words: Vec<String>,
    /// Port for the liveness HTTP endpoint.
    pub health_port: u16,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let admin_id = env_str("TELEGRAM_ADMIN_ID")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                Error::Config(
                    "TELEGRAM_ADMIN_ID environment variable is required (numeric user id)"
                        .to_string(),
                )
            })?;

        let database_path =
            env_path("DATABASE_PATH").unwrap_or_else(|| PathBuf::from("bot_data.db"));

        let banned_words = parse_csv(env_str("BANNED_WORDS"));

        let health_port = env_u16("PORT").unwrap_or(8000);

        Ok(Self {
            bot_token,
            admin_id,
            database_path,
            banned_words,
            health_port,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).map(PathBuf::from)
}

fn env_u16(key: &str) -> Option<u16> {
    env_str(key).and_then(|s| s.trim().parse::<u16>().ok())
}

fn parse_csv(v: Option<String>) -> Vec<String> {
    v.unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}
