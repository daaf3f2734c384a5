//! Generation options and error types for browserprint.
//!
//! [`FingerprintOptions`] is the loose, string-typed request surface that
//! callers (and the HTTP service) hand to a generator. [`FingerprintOptions::resolve`]
//! turns it into strongly typed [`ProfileConstraints`] or a [`GenerationError`]
//! whose message is meant to be shown to the caller as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Locale used when a request does not name any.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Caller-facing generation options.
///
/// Every list is ordered. Empty `browsers`, `operating_systems` and `devices`
/// lists leave that dimension unconstrained; an empty `locales` list falls
/// back to [`DEFAULT_LOCALE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintOptions {
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub browsers: Vec<String>,
    #[serde(default)]
    pub operating_systems: Vec<String>,
    #[serde(default)]
    pub devices: Vec<String>,
}

impl FingerprintOptions {
    /// Create empty (unconstrained) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locales, most preferred first.
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the browsers a profile may be drawn from.
    pub fn with_browsers<I, S>(mut self, browsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.browsers = browsers.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the operating systems a profile may be drawn from.
    pub fn with_operating_systems<I, S>(mut self, operating_systems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operating_systems = operating_systems.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the device classes a profile may be drawn from.
    pub fn with_devices<I, S>(mut self, devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.devices = devices.into_iter().map(Into::into).collect();
        self
    }

    /// Parse every name and locale into typed constraints.
    pub fn resolve(&self) -> Result<ProfileConstraints, GenerationError> {
        let browsers = parse_all::<Browser>(&self.browsers)?;
        let operating_systems = parse_all::<OperatingSystem>(&self.operating_systems)?;
        let devices = parse_all::<Device>(&self.devices)?;

        let mut locales = Vec::with_capacity(self.locales.len().max(1));
        for locale in &self.locales {
            let trimmed = locale.trim();
            if !is_valid_locale(trimmed) {
                return Err(GenerationError::InvalidLocale(locale.clone()));
            }
            locales.push(trimmed.to_string());
        }
        if locales.is_empty() {
            locales.push(DEFAULT_LOCALE.to_string());
        }

        Ok(ProfileConstraints {
            browsers,
            operating_systems,
            devices,
            locales,
        })
    }
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>, GenerationError>
where
    T: FromStr<Err = GenerationError>,
{
    values.iter().map(|value| value.parse()).collect()
}

fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && locale.len() <= 35
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Typed constraints derived from [`FingerprintOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConstraints {
    pub browsers: Vec<Browser>,
    pub operating_systems: Vec<OperatingSystem>,
    pub devices: Vec<Device>,
    /// Never empty.
    pub locales: Vec<String>,
}

impl ProfileConstraints {
    /// Whether a catalog combination satisfies every non-empty dimension.
    pub fn allows(&self, browser: Browser, os: OperatingSystem, device: Device) -> bool {
        (self.browsers.is_empty() || self.browsers.contains(&browser))
            && (self.operating_systems.is_empty() || self.operating_systems.contains(&os))
            && (self.devices.is_empty() || self.devices.contains(&device))
    }

    pub(crate) fn no_match_error(&self) -> GenerationError {
        GenerationError::NoMatchingProfile {
            browsers: describe(&self.browsers),
            operating_systems: describe(&self.operating_systems),
            devices: describe(&self.devices),
        }
    }
}

fn describe<T: fmt::Display>(values: &[T]) -> String {
    if values.is_empty() {
        return "any".to_string();
    }
    let names: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(", "))
}

/// Browsers the catalog knows how to emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl Browser {
    pub const ALL: [Browser; 4] = [
        Browser::Chrome,
        Browser::Edge,
        Browser::Firefox,
        Browser::Safari,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
        }
    }

    /// Chrome and Edge share the Chromium code base.
    pub fn is_chromium(&self) -> bool {
        matches!(self, Browser::Chrome | Browser::Edge)
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" | "google chrome" => Ok(Browser::Chrome),
            "edge" | "msedge" | "microsoft edge" => Ok(Browser::Edge),
            "firefox" | "mozilla firefox" => Ok(Browser::Firefox),
            "safari" => Ok(Browser::Safari),
            _ => Err(GenerationError::unsupported("browser", s, &Browser::ALL)),
        }
    }
}

/// Operating systems the catalog knows how to emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
    Android,
    Ios,
}

impl OperatingSystem {
    pub const ALL: [OperatingSystem; 5] = [
        OperatingSystem::Windows,
        OperatingSystem::MacOs,
        OperatingSystem::Linux,
        OperatingSystem::Android,
        OperatingSystem::Ios,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOs => "macos",
            OperatingSystem::Linux => "linux",
            OperatingSystem::Android => "android",
            OperatingSystem::Ios => "ios",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(OperatingSystem::Windows),
            "macos" | "mac" | "osx" | "mac os" => Ok(OperatingSystem::MacOs),
            "linux" => Ok(OperatingSystem::Linux),
            "android" => Ok(OperatingSystem::Android),
            "ios" | "iphone" | "iphone os" => Ok(OperatingSystem::Ios),
            _ => Err(GenerationError::unsupported(
                "operating system",
                s,
                &OperatingSystem::ALL,
            )),
        }
    }
}

/// Device classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Mobile,
}

impl Device {
    pub const ALL: [Device; 2] = [Device::Desktop, Device::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Device::Desktop),
            "mobile" => Ok(Device::Mobile),
            _ => Err(GenerationError::unsupported("device", s, &Device::ALL)),
        }
    }
}

/// Errors returned by fingerprint generation.
///
/// The `Display` text is caller-facing: the HTTP service forwards it verbatim
/// in the `details` field of its 500 response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("unsupported {kind} '{value}' (expected one of: {expected})")]
    Unsupported {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error(
        "no fingerprint profile satisfies browsers={browsers}, \
         operatingSystems={operating_systems}, devices={devices}"
    )]
    NoMatchingProfile {
        browsers: String,
        operating_systems: String,
        devices: String,
    },

    #[error("invalid locale '{0}'")]
    InvalidLocale(String),

    #[error("invalid weight table: {0}")]
    InvalidWeights(String),
}

impl GenerationError {
    fn unsupported<T: fmt::Display>(kind: &'static str, value: &str, expected: &[T]) -> Self {
        let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        GenerationError::Unsupported {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
