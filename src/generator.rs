//! Weighted, constraint-aware fingerprint generator.
//!
//! Generation is a chain of weighted choices where each step only sees
//! candidates compatible with the previous ones:
//!
//! 1. browser/OS/device triple, filtered by the caller's constraints
//! 2. browser version
//! 3. screen for the OS
//! 4. GPU for the OS
//! 5. CPU/memory for the device class
//!
//! The navigator surface, codecs, plugins and request headers are then
//! derived from those choices so that, for example, an iPhone never reports
//! `navigator.deviceMemory` and a Windows box never renders with an Apple GPU.

use indexmap::IndexMap;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{
    self, Combination, Engine, GpuSpec, HardwareSpec, ScreenSpec, VersionSpec, COMBINATIONS,
};
use crate::fingerprint::{
    BatteryFingerprint, Brand, Fingerprint, GeneratedProfile, NavigatorFingerprint, PluginsData,
    ScreenFingerprint, UserAgentData, VideoCard,
};
use crate::headers::{accept_language, navigation_headers};
use crate::options::{
    Browser, Device, FingerprintOptions, GenerationError, OperatingSystem, ProfileConstraints,
};
use crate::GenerateFingerprint;

/// Default [`GenerateFingerprint`] implementation backed by [`crate::catalog`].
///
/// The generator holds no mutable state. Unseeded generators draw from the
/// thread-local RNG on every call; seeded generators rebuild a [`StdRng`]
/// from the seed on every call, so the same options always produce the same
/// profile.
#[derive(Debug, Clone, Default)]
pub struct FingerprintGenerator {
    seed: Option<u64>,
}

impl FingerprintGenerator {
    /// Create a generator with a random seed per call.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create a reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Generate a profile drawing randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &FingerprintOptions,
        rng: &mut R,
    ) -> Result<GeneratedProfile, GenerationError> {
        let constraints = options.resolve()?;
        let choice = choose(&constraints, rng)?;
        tracing::debug!(
            browser = %choice.browser,
            os = %choice.os,
            device = %choice.device,
            version = choice.version.full,
            "sampled fingerprint profile"
        );
        Ok(assemble(&choice, &constraints.locales, rng))
    }
}

impl GenerateFingerprint for FingerprintGenerator {
    fn generate(&self, options: &FingerprintOptions) -> Result<GeneratedProfile, GenerationError> {
        match self.seed {
            Some(seed) => self.generate_with_rng(options, &mut StdRng::seed_from_u64(seed)),
            None => self.generate_with_rng(options, &mut rand::thread_rng()),
        }
    }
}

/// The sampled skeleton everything else is derived from.
#[derive(Debug, Clone, Copy)]
struct Choice {
    browser: Browser,
    os: OperatingSystem,
    device: Device,
    engine: Engine,
    version: VersionSpec,
    /// WebKit release; drives the iOS version on iPhones.
    webkit: VersionSpec,
    screen: ScreenSpec,
    gpu: GpuSpec,
    hardware: HardwareSpec,
}

fn choose<R: Rng + ?Sized>(
    constraints: &ProfileConstraints,
    rng: &mut R,
) -> Result<Choice, GenerationError> {
    let candidates: Vec<Combination> = COMBINATIONS
        .iter()
        .copied()
        .filter(|c| constraints.allows(c.browser, c.os, c.device))
        .collect();
    if candidates.is_empty() {
        return Err(constraints.no_match_error());
    }

    let combination = *weighted_choice(rng, &candidates, |c| c.weight)?;
    let Combination {
        browser,
        os,
        device,
        ..
    } = combination;

    let version = *weighted_choice(rng, catalog::versions_for(browser), |v| v.weight)?;
    let webkit = if browser == Browser::Safari {
        version
    } else {
        *weighted_choice(rng, catalog::SAFARI_VERSIONS, |v| v.weight)?
    };
    let screen = *weighted_choice(rng, catalog::screens_for(os), |s| s.weight)?;
    let gpu = *weighted_choice(rng, catalog::gpus_for(os), |g| g.weight)?;
    let hardware = *weighted_choice(rng, catalog::hardware_for(device), |h| h.weight)?;

    Ok(Choice {
        browser,
        os,
        device,
        engine: Engine::of(browser, os),
        version,
        webkit,
        screen,
        gpu,
        hardware,
    })
}

fn weighted_choice<'a, T, R, F>(
    rng: &mut R,
    items: &'a [T],
    weight: F,
) -> Result<&'a T, GenerationError>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    let dist = WeightedIndex::new(items.iter().map(weight))
        .map_err(|err| GenerationError::InvalidWeights(err.to_string()))?;
    Ok(&items[dist.sample(rng)])
}

fn assemble<R: Rng + ?Sized>(choice: &Choice, locales: &[String], rng: &mut R) -> GeneratedProfile {
    let user_agent = user_agent(choice);
    let hints = (choice.engine == Engine::Blink).then(|| client_hints(choice));
    let accept_language = accept_language(locales);
    let headers = navigation_headers(
        choice.engine,
        choice.device,
        &user_agent,
        &accept_language,
        hints.as_ref(),
    );

    let fingerprint = Fingerprint {
        screen: screen(choice),
        navigator: navigator(choice, user_agent, hints, locales),
        video_card: video_card(choice),
        audio_codecs: audio_codecs(choice.engine),
        video_codecs: video_codecs(choice.engine),
        plugins_data: plugins(choice),
        battery: battery(choice, rng),
        multimedia_devices: multimedia_devices(choice.device),
        fonts: catalog::fonts_for(choice.os)
            .iter()
            .map(|f| f.to_string())
            .collect(),
        mock_web_rtc: false,
    };

    GeneratedProfile {
        fingerprint,
        headers,
    }
}

fn ios_version(choice: &Choice) -> String {
    choice.webkit.full.replace('.', "_")
}

fn user_agent(choice: &Choice) -> String {
    let major = choice.version.major;
    let full = choice.version.full;
    let webkit = choice.webkit.full;

    match (choice.browser, choice.os) {
        (Browser::Safari, OperatingSystem::MacOs) => format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/{full} Safari/605.1.15"
        ),
        (_, OperatingSystem::Ios) => {
            // Only Safari and Chrome ship on iOS in the catalog.
            let token = match choice.browser {
                Browser::Chrome => format!("CriOS/{full}"),
                _ => format!("Version/{webkit}"),
            };
            format!(
                "Mozilla/5.0 (iPhone; CPU iPhone OS {} like Mac OS X) AppleWebKit/605.1.15 \
                 (KHTML, like Gecko) {token} Mobile/15E148 Safari/604.1",
                ios_version(choice)
            )
        }
        (Browser::Firefox, os) => {
            let platform = match os {
                OperatingSystem::Windows => "Windows NT 10.0; Win64; x64",
                OperatingSystem::MacOs => "Macintosh; Intel Mac OS X 10.15",
                OperatingSystem::Android => "Android 14; Mobile",
                _ => "X11; Linux x86_64",
            };
            format!("Mozilla/5.0 ({platform}; rv:{major}.0) Gecko/20100101 Firefox/{major}.0")
        }
        (browser, os) => {
            let platform = match os {
                OperatingSystem::Windows => "Windows NT 10.0; Win64; x64",
                OperatingSystem::MacOs => "Macintosh; Intel Mac OS X 10_15_7",
                OperatingSystem::Android => "Linux; Android 10; K",
                _ => "X11; Linux x86_64",
            };
            let mobile = if choice.device == Device::Mobile {
                "Mobile "
            } else {
                ""
            };
            let mut ua = format!(
                "Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) \
                 Chrome/{chromium}.0.0.0 {mobile}Safari/537.36",
                chromium = major
            );
            if browser == Browser::Edge {
                if os == OperatingSystem::Android {
                    ua.push_str(&format!(" EdgA/{full}"));
                } else {
                    ua.push_str(&format!(" Edg/{major}.0.0.0"));
                }
            }
            ua
        }
    }
}

fn client_hints(choice: &Choice) -> UserAgentData {
    let major = choice.version.major.to_string();
    let brand_name = match choice.browser {
        Browser::Edge => "Microsoft Edge",
        _ => "Google Chrome",
    };
    let brands = vec![
        Brand {
            brand: brand_name.to_string(),
            version: major.clone(),
        },
        Brand {
            brand: "Chromium".to_string(),
            version: major,
        },
        Brand {
            brand: "Not_A Brand".to_string(),
            version: "24".to_string(),
        },
    ];
    let full_version_list = brands
        .iter()
        .map(|b| Brand {
            brand: b.brand.clone(),
            version: if b.brand == "Not_A Brand" {
                "24.0.0.0".to_string()
            } else {
                choice.version.full.to_string()
            },
        })
        .collect();

    let (platform, platform_version, architecture, model) = match choice.os {
        OperatingSystem::Windows => ("Windows", "15.0.0", "x86", ""),
        OperatingSystem::MacOs => ("macOS", "14.6.1", "arm", ""),
        OperatingSystem::Android => ("Android", "14.0.0", "", "K"),
        _ => ("Linux", "6.5.0", "x86", ""),
    };

    UserAgentData {
        brands,
        mobile: choice.device == Device::Mobile,
        platform: platform.to_string(),
        architecture: architecture.to_string(),
        bitness: "64".to_string(),
        model: model.to_string(),
        platform_version: platform_version.to_string(),
        ua_full_version: choice.version.full.to_string(),
        full_version_list,
    }
}

fn navigator(
    choice: &Choice,
    user_agent: String,
    user_agent_data: Option<UserAgentData>,
    locales: &[String],
) -> NavigatorFingerprint {
    let platform = match choice.os {
        OperatingSystem::Windows => "Win32",
        OperatingSystem::MacOs => "MacIntel",
        OperatingSystem::Linux => "Linux x86_64",
        OperatingSystem::Android => "Linux armv81",
        OperatingSystem::Ios => "iPhone",
    };

    let (app_version, oscpu, product_sub, vendor, do_not_track) = match choice.engine {
        Engine::Gecko => {
            let (app, cpu) = match choice.os {
                OperatingSystem::Windows => ("5.0 (Windows)", "Windows NT 10.0; Win64; x64"),
                OperatingSystem::MacOs => ("5.0 (Macintosh)", "Intel Mac OS X 10.15"),
                OperatingSystem::Android => ("5.0 (Android 14)", "Linux armv81"),
                _ => ("5.0 (X11)", "Linux x86_64"),
            };
            (
                app.to_string(),
                Some(cpu.to_string()),
                "20100101",
                "",
                Some("unspecified".to_string()),
            )
        }
        Engine::Blink => (
            app_version_of(&user_agent),
            None,
            "20030107",
            "Google Inc.",
            None,
        ),
        Engine::WebKit => (
            app_version_of(&user_agent),
            None,
            "20030107",
            "Apple Computer, Inc.",
            None,
        ),
    };

    let device_memory = (choice.engine == Engine::Blink).then(|| choice.hardware.memory_gb.min(8));
    let max_touch_points = match choice.device {
        Device::Mobile => 5,
        Device::Desktop => 0,
    };

    NavigatorFingerprint {
        user_agent,
        user_agent_data,
        do_not_track,
        app_code_name: "Mozilla".to_string(),
        app_name: "Netscape".to_string(),
        app_version,
        oscpu,
        language: locales[0].clone(),
        languages: locales.to_vec(),
        platform: platform.to_string(),
        device_memory,
        hardware_concurrency: choice.hardware.cpu_cores,
        product: "Gecko".to_string(),
        product_sub: product_sub.to_string(),
        vendor: vendor.to_string(),
        vendor_sub: String::new(),
        max_touch_points,
        webdriver: false,
    }
}

fn app_version_of(user_agent: &str) -> String {
    user_agent
        .strip_prefix("Mozilla/")
        .unwrap_or(user_agent)
        .to_string()
}

fn screen(choice: &Choice) -> ScreenFingerprint {
    let spec = choice.screen;
    let reserved = catalog::os_reserved_height(choice.os);
    let avail_height = spec.height.saturating_sub(reserved);
    let avail_top = if choice.os == OperatingSystem::Windows {
        0
    } else {
        reserved
    };
    let toolbar = catalog::browser_chrome_height(choice.engine, choice.device);

    ScreenFingerprint {
        width: spec.width,
        height: spec.height,
        avail_width: spec.width,
        avail_height,
        avail_top,
        avail_left: 0,
        color_depth: if choice.os == OperatingSystem::MacOs {
            30
        } else {
            24
        },
        pixel_depth: if choice.os == OperatingSystem::MacOs {
            30
        } else {
            24
        },
        device_pixel_ratio: spec.device_pixel_ratio,
        inner_width: spec.width,
        inner_height: avail_height.saturating_sub(toolbar),
        outer_width: spec.width,
        outer_height: avail_height,
        screen_x: 0,
        screen_y: avail_top as i32,
        has_hdr: false,
    }
}

fn video_card(choice: &Choice) -> VideoCard {
    let GpuSpec { vendor, model, .. } = choice.gpu;
    let (vendor, renderer) = match (choice.engine, choice.os) {
        (Engine::WebKit, _) => ("Apple Inc.".to_string(), "Apple GPU".to_string()),
        (Engine::Blink | Engine::Gecko, OperatingSystem::Windows) => (
            format!("Google Inc. ({vendor})"),
            format!("ANGLE ({vendor}, {model} Direct3D11 vs_5_0 ps_5_0, D3D11)"),
        ),
        (Engine::Blink, OperatingSystem::MacOs) => (
            format!("Google Inc. ({vendor})"),
            format!("ANGLE ({vendor}, ANGLE Metal Renderer: {model}, Unspecified Version)"),
        ),
        (Engine::Blink, OperatingSystem::Linux) => (
            format!("Google Inc. ({vendor})"),
            format!("ANGLE ({vendor}, {model}, OpenGL 4.6)"),
        ),
        // Firefox on macOS buckets GPUs into coarse families.
        (Engine::Gecko, OperatingSystem::MacOs) => {
            (vendor.to_string(), format!("{model}, or similar"))
        }
        _ => (vendor.to_string(), model.to_string()),
    };
    VideoCard { vendor, renderer }
}

fn codec_map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(codec, support)| (codec.to_string(), support.to_string()))
        .collect()
}

fn audio_codecs(engine: Engine) -> IndexMap<String, String> {
    match engine {
        Engine::Blink => codec_map(&[
            ("ogg", "probably"),
            ("mp3", "probably"),
            ("wav", "probably"),
            ("m4a", "maybe"),
            ("aac", "probably"),
        ]),
        Engine::Gecko => codec_map(&[
            ("ogg", "probably"),
            ("mp3", "maybe"),
            ("wav", "probably"),
            ("m4a", "maybe"),
            ("aac", "maybe"),
        ]),
        Engine::WebKit => codec_map(&[
            ("ogg", ""),
            ("mp3", "maybe"),
            ("wav", "probably"),
            ("m4a", "maybe"),
            ("aac", "maybe"),
        ]),
    }
}

fn video_codecs(engine: Engine) -> IndexMap<String, String> {
    match engine {
        Engine::Blink => codec_map(&[("ogg", ""), ("h264", "probably"), ("webm", "probably")]),
        Engine::Gecko => codec_map(&[
            ("ogg", "probably"),
            ("h264", "probably"),
            ("webm", "probably"),
        ]),
        Engine::WebKit => codec_map(&[("ogg", ""), ("h264", "probably"), ("webm", "probably")]),
    }
}

fn plugins(choice: &Choice) -> PluginsData {
    if choice.device == Device::Mobile {
        return PluginsData::default();
    }
    let plugins = [
        "PDF Viewer",
        "Chrome PDF Viewer",
        "Chromium PDF Viewer",
        "Microsoft Edge PDF Viewer",
        "WebKit built-in PDF",
    ];
    PluginsData {
        plugins: plugins.iter().map(|p| p.to_string()).collect(),
        mime_types: vec!["application/pdf".to_string(), "text/pdf".to_string()],
    }
}

fn battery<R: Rng + ?Sized>(choice: &Choice, rng: &mut R) -> Option<BatteryFingerprint> {
    // Only Chromium exposes navigator.getBattery().
    if choice.engine != Engine::Blink {
        return None;
    }
    if choice.device == Device::Desktop && rng.gen_bool(0.6) {
        // Mains-powered desktop.
        return Some(BatteryFingerprint {
            charging: true,
            charging_time: Some(0.0),
            discharging_time: None,
            level: 1.0,
        });
    }
    let level = f64::from(rng.gen_range(15u32..=100)) / 100.0;
    let charging = rng.gen_bool(0.3);
    Some(BatteryFingerprint {
        charging,
        charging_time: if charging && level >= 1.0 {
            Some(0.0)
        } else {
            None
        },
        discharging_time: if charging {
            None
        } else {
            Some(f64::from(rng.gen_range(3_600u32..=36_000)))
        },
        level,
    })
}

fn multimedia_devices(device: Device) -> Vec<String> {
    let kinds: &[&str] = match device {
        Device::Desktop => &["audioinput", "audiooutput", "videoinput"],
        Device::Mobile => &["audioinput", "videoinput", "videoinput"],
    };
    kinds.iter().map(|k| k.to_string()).collect()
}
