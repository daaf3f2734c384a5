//! Fingerprint types produced by the generator.
//!
//! Field names serialize in the camelCase shape browser-side injection
//! scripts expect (`navigator.userAgent`, `screen.availHeight`, ...).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Request headers in the order the emulated browser sends them.
pub type Headers = IndexMap<String, String>;

/// A generated fingerprint together with its matching request headers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedProfile {
    pub fingerprint: Fingerprint,
    pub headers: Headers,
}

/// A complete, internally consistent browser fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fingerprint {
    pub screen: ScreenFingerprint,
    pub navigator: NavigatorFingerprint,
    pub video_card: VideoCard,
    pub audio_codecs: IndexMap<String, String>,
    pub video_codecs: IndexMap<String, String>,
    pub plugins_data: PluginsData,
    /// `None` for browsers that do not ship the Battery Status API.
    pub battery: Option<BatteryFingerprint>,
    pub multimedia_devices: Vec<String>,
    pub fonts: Vec<String>,
    #[serde(rename = "mockWebRTC")]
    pub mock_web_rtc: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenFingerprint {
    pub width: u32,
    pub height: u32,
    pub avail_width: u32,
    pub avail_height: u32,
    pub avail_top: u32,
    pub avail_left: u32,
    pub color_depth: u32,
    pub pixel_depth: u32,
    pub device_pixel_ratio: f64,
    pub inner_width: u32,
    pub inner_height: u32,
    pub outer_width: u32,
    pub outer_height: u32,
    pub screen_x: i32,
    pub screen_y: i32,
    #[serde(rename = "hasHDR")]
    pub has_hdr: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorFingerprint {
    pub user_agent: String,
    /// Client hints; Chromium-only.
    pub user_agent_data: Option<UserAgentData>,
    pub do_not_track: Option<String>,
    pub app_code_name: String,
    pub app_name: String,
    pub app_version: String,
    /// Gecko-only.
    pub oscpu: Option<String>,
    pub language: String,
    pub languages: Vec<String>,
    pub platform: String,
    /// Chromium-only; capped at 8 like the real API.
    pub device_memory: Option<u32>,
    pub hardware_concurrency: u32,
    pub product: String,
    pub product_sub: String,
    pub vendor: String,
    pub vendor_sub: String,
    pub max_touch_points: u32,
    pub webdriver: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub brand: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAgentData {
    pub brands: Vec<Brand>,
    pub mobile: bool,
    pub platform: String,
    pub architecture: String,
    pub bitness: String,
    pub model: String,
    pub platform_version: String,
    pub ua_full_version: String,
    pub full_version_list: Vec<Brand>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoCard {
    pub vendor: String,
    pub renderer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatteryFingerprint {
    pub charging: bool,
    pub charging_time: Option<f64>,
    pub discharging_time: Option<f64>,
    pub level: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginsData {
    pub plugins: Vec<String>,
    pub mime_types: Vec<String>,
}
