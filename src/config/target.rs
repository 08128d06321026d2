//
//  reporte-client
//  config/target.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Target Resolution
//!
//! Picks the base URL of the Reporte backend from the build environment and
//! the client platform. Development builds talk to a local server whose
//! address depends on where the client runs; production builds always use
//! the hosted deployment.
//!
//! | Environment | Platform | Base URL |
//! |-------------|----------|----------|
//! | development | android | `http://10.0.2.2:5000` |
//! | development | ios | `http://192.168.4.49:5000` |
//! | development | web | `http://localhost:5000` |
//! | production | any | `https://reporte-ciudadano-15eb46ea2557.herokuapp.com` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hosted production backend.
pub const PRODUCTION_URL: &str = "https://reporte-ciudadano-15eb46ea2557.herokuapp.com";

/// Host loopback as seen from the Android emulator.
pub const ANDROID_DEV_URL: &str = "http://10.0.2.2:5000";

/// LAN address of the development machine for iOS devices.
pub const IOS_DEV_URL: &str = "http://192.168.4.49:5000";

pub const WEB_DEV_URL: &str = "http://localhost:5000";

/// Build environment the client targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    #[default]
    #[value(alias = "prod")]
    Production,
}

/// Platform the client runs on. Only matters in development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    #[default]
    Web,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => anyhow::bail!("Unknown environment: {} (expected development or production)", s),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Ios => write!(f, "ios"),
            Self::Web => write!(f, "web"),
        }
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "web" => Ok(Self::Web),
            _ => anyhow::bail!("Unknown platform: {} (expected android, ios or web)", s),
        }
    }
}

/// Returns the base URL for an environment/platform pair.
///
/// # Example
///
/// ```rust
/// use reporte_client::config::{default_base_url, Environment, Platform, PRODUCTION_URL};
///
/// assert_eq!(default_base_url(Environment::Development, Platform::Android), "http://10.0.2.2:5000");
/// assert_eq!(default_base_url(Environment::Production, Platform::Ios), PRODUCTION_URL);
/// ```
pub fn default_base_url(environment: Environment, platform: Platform) -> &'static str {
    match (environment, platform) {
        (Environment::Production, _) => PRODUCTION_URL,
        (Environment::Development, Platform::Android) => ANDROID_DEV_URL,
        (Environment::Development, Platform::Ios) => IOS_DEV_URL,
        (Environment::Development, Platform::Web) => WEB_DEV_URL,
    }
}

/// Strips whitespace and trailing slashes so endpoints can be appended
/// with a leading `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_urls_per_platform() {
        assert_eq!(
            default_base_url(Environment::Development, Platform::Android),
            ANDROID_DEV_URL
        );
        assert_eq!(
            default_base_url(Environment::Development, Platform::Ios),
            IOS_DEV_URL
        );
        assert_eq!(
            default_base_url(Environment::Development, Platform::Web),
            WEB_DEV_URL
        );
    }

    #[test]
    fn test_production_ignores_platform() {
        for platform in [Platform::Android, Platform::Ios, Platform::Web] {
            assert_eq!(default_base_url(Environment::Production, platform), PRODUCTION_URL);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert!("windows".parse::<Platform>().is_err());
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://localhost:5000/ "), "http://localhost:5000");
        assert_eq!(normalize_base_url("http://x//"), "http://x");
    }
}
