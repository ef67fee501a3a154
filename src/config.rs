//! Environment configuration

use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_PATH: &str = ".data/contacts.db";

/// Deployment stage, read from `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Staging,
    Development,
}

impl Environment {
    /// Unset means development.
    pub fn parse(value: Option<&str>) -> anyhow::Result<Self> {
        let value = value.unwrap_or("development").trim().to_lowercase();
        match value.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => anyhow::bail!("Invalid APP_ENV: {other}"),
        }
    }

    /// Production and staging ship JSON logs.
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Where the store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub port: u16,
    pub database: DatabaseLocation,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let environment = Environment::parse(lookup("APP_ENV").as_deref())?;

        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {p:?}"))?,
            None => DEFAULT_PORT,
        };

        let database = match lookup("DATABASE_PATH").as_deref().map(str::trim) {
            Some(":memory:") => DatabaseLocation::InMemory,
            Some(path) if !path.is_empty() => DatabaseLocation::File(PathBuf::from(path)),
            _ => DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH)),
        };

        Ok(Self {
            environment,
            port,
            database,
        })
    }
}
