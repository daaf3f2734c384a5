//! # browserprint
//!
//! Synthetic browser fingerprint generation.
//!
//! Given high-level constraints (locales, browsers, operating systems and
//! device classes) the generator produces a fingerprint whose parts agree
//! with each other: the user agent, navigator properties, screen metrics,
//! WebGL renderer, codecs and request header order all describe the same
//! plausible client.
//!
//! ## Contract
//!
//! - Callers talk to generation through the [`GenerateFingerprint`] trait so
//!   the HTTP service (or a test) can inject any implementation.
//! - Generation is stateless: a generator can be shared behind an `Arc` and
//!   called from any number of threads.
//! - Impossible constraint sets fail with a [`GenerationError`] whose message
//!   is safe to show to the caller.
//!
//! ## Example Usage
//!
//! ```
//! use browserprint::{FingerprintGenerator, FingerprintOptions, GenerateFingerprint};
//!
//! let generator = FingerprintGenerator::with_seed(7);
//! let options = FingerprintOptions::new()
//!     .with_browsers(["firefox"])
//!     .with_operating_systems(["linux"])
//!     .with_locales(["de-DE", "de"]);
//!
//! let profile = generator.generate(&options).unwrap();
//!
//! assert!(profile.fingerprint.navigator.user_agent.contains("Firefox/"));
//! assert_eq!(profile.fingerprint.navigator.language, "de-DE");
//! assert_eq!(profile.headers["Accept-Language"], "de-DE,de;q=0.9");
//! ```

pub mod catalog;
pub mod fingerprint;
pub mod generator;
pub mod headers;
pub mod options;

pub use crate::fingerprint::{
    BatteryFingerprint, Brand, Fingerprint, GeneratedProfile, Headers, NavigatorFingerprint,
    PluginsData, ScreenFingerprint, UserAgentData, VideoCard,
};
pub use crate::generator::FingerprintGenerator;
pub use crate::options::{
    Browser, Device, FingerprintOptions, GenerationError, OperatingSystem, ProfileConstraints,
    DEFAULT_LOCALE,
};

/// Fingerprint generation capability.
///
/// Implementations must be cheap to share: the HTTP service holds exactly one
/// behind an `Arc` for the lifetime of the process.
pub trait GenerateFingerprint: Send + Sync {
    fn generate(&self, options: &FingerprintOptions) -> Result<GeneratedProfile, GenerationError>;
}

impl<T: GenerateFingerprint + ?Sized> GenerateFingerprint for std::sync::Arc<T> {
    fn generate(&self, options: &FingerprintOptions) -> Result<GeneratedProfile, GenerationError> {
        (**self).generate(options)
    }
}
