//! Static market-share tables the generator samples from.
//!
//! Every table is weighted; weights are relative and need not sum to 100.
//! The combination table is the single source of truth for which
//! browser/OS/device triples are allowed to appear together.

use crate::options::{Browser, Device, OperatingSystem};

/// Rendering engine actually running a browser on a given OS.
///
/// Every browser on iOS is WebKit underneath, so Chrome on an iPhone
/// exposes the Safari navigator surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Blink,
    Gecko,
    WebKit,
}

impl Engine {
    pub fn of(browser: Browser, os: OperatingSystem) -> Self {
        match (browser, os) {
            (_, OperatingSystem::Ios) | (Browser::Safari, _) => Engine::WebKit,
            (Browser::Firefox, _) => Engine::Gecko,
            (Browser::Chrome | Browser::Edge, _) => Engine::Blink,
        }
    }
}

/// One browser/OS/device triple that exists in the wild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    pub browser: Browser,
    pub os: OperatingSystem,
    pub device: Device,
    pub weight: f64,
}

const fn combo(browser: Browser, os: OperatingSystem, device: Device, weight: f64) -> Combination {
    Combination {
        browser,
        os,
        device,
        weight,
    }
}

pub const COMBINATIONS: &[Combination] = &[
    combo(Browser::Chrome, OperatingSystem::Windows, Device::Desktop, 40.0),
    combo(Browser::Chrome, OperatingSystem::MacOs, Device::Desktop, 12.0),
    combo(Browser::Chrome, OperatingSystem::Linux, Device::Desktop, 4.0),
    combo(Browser::Chrome, OperatingSystem::Android, Device::Mobile, 30.0),
    combo(Browser::Chrome, OperatingSystem::Ios, Device::Mobile, 4.0),
    combo(Browser::Edge, OperatingSystem::Windows, Device::Desktop, 12.0),
    combo(Browser::Edge, OperatingSystem::MacOs, Device::Desktop, 2.0),
    combo(Browser::Edge, OperatingSystem::Android, Device::Mobile, 1.0),
    combo(Browser::Firefox, OperatingSystem::Windows, Device::Desktop, 6.0),
    combo(Browser::Firefox, OperatingSystem::MacOs, Device::Desktop, 2.0),
    combo(Browser::Firefox, OperatingSystem::Linux, Device::Desktop, 3.0),
    combo(Browser::Firefox, OperatingSystem::Android, Device::Mobile, 1.0),
    combo(Browser::Safari, OperatingSystem::MacOs, Device::Desktop, 8.0),
    combo(Browser::Safari, OperatingSystem::Ios, Device::Mobile, 20.0),
];

/// A released browser version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionSpec {
    pub major: u32,
    pub full: &'static str,
    pub weight: f64,
}

const fn version(major: u32, full: &'static str, weight: f64) -> VersionSpec {
    VersionSpec {
        major,
        full,
        weight,
    }
}

const CHROME_VERSIONS: &[VersionSpec] = &[
    version(131, "131.0.6778.86", 30.0),
    version(130, "130.0.6723.117", 25.0),
    version(129, "129.0.6668.101", 20.0),
    version(128, "128.0.6613.138", 15.0),
];

const EDGE_VERSIONS: &[VersionSpec] = &[
    version(131, "131.0.2903.70", 35.0),
    version(130, "130.0.2849.80", 30.0),
    version(129, "129.0.2792.89", 20.0),
];

const FIREFOX_VERSIONS: &[VersionSpec] = &[
    version(133, "133.0", 40.0),
    version(132, "132.0", 35.0),
    version(131, "131.0", 25.0),
];

/// Safari releases double as iOS releases: on an iPhone the WebKit version
/// is pinned to the OS version whatever the browser.
pub const SAFARI_VERSIONS: &[VersionSpec] = &[
    version(18, "18.1", 45.0),
    version(17, "17.6", 35.0),
    version(17, "17.5", 20.0),
];

pub fn versions_for(browser: Browser) -> &'static [VersionSpec] {
    match browser {
        Browser::Chrome => CHROME_VERSIONS,
        Browser::Edge => EDGE_VERSIONS,
        Browser::Firefox => FIREFOX_VERSIONS,
        Browser::Safari => SAFARI_VERSIONS,
    }
}

/// Screen size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSpec {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
    pub weight: f64,
}

const fn screen(width: u32, height: u32, device_pixel_ratio: f64, weight: f64) -> ScreenSpec {
    ScreenSpec {
        width,
        height,
        device_pixel_ratio,
        weight,
    }
}

const WINDOWS_SCREENS: &[ScreenSpec] = &[
    screen(1920, 1080, 1.0, 23.0),
    screen(1366, 768, 1.0, 19.0),
    screen(1440, 900, 1.0, 9.0),
    screen(1536, 864, 1.25, 8.0),
    screen(1280, 720, 1.5, 7.0),
    screen(2560, 1440, 1.0, 6.0),
    screen(1600, 900, 1.0, 5.0),
    screen(1280, 1024, 1.0, 4.0),
    screen(1920, 1200, 1.0, 3.5),
    screen(1680, 1050, 1.0, 2.0),
];

const MAC_SCREENS: &[ScreenSpec] = &[
    screen(1440, 900, 2.0, 30.0),
    screen(1512, 982, 2.0, 20.0),
    screen(1728, 1117, 2.0, 15.0),
    screen(1920, 1080, 1.0, 15.0),
    screen(2560, 1440, 1.0, 10.0),
    screen(1680, 1050, 2.0, 10.0),
];

const LINUX_SCREENS: &[ScreenSpec] = &[
    screen(1920, 1080, 1.0, 40.0),
    screen(2560, 1440, 1.0, 25.0),
    screen(1366, 768, 1.0, 15.0),
    screen(1680, 1050, 1.0, 10.0),
    screen(1920, 1200, 1.0, 10.0),
];

const ANDROID_SCREENS: &[ScreenSpec] = &[
    screen(412, 915, 2.625, 30.0),
    screen(393, 873, 2.75, 25.0),
    screen(360, 800, 3.0, 25.0),
    screen(384, 854, 2.8125, 20.0),
];

const IOS_SCREENS: &[ScreenSpec] = &[
    screen(390, 844, 3.0, 30.0),
    screen(393, 852, 3.0, 30.0),
    screen(430, 932, 3.0, 20.0),
    screen(375, 667, 2.0, 20.0),
];

pub fn screens_for(os: OperatingSystem) -> &'static [ScreenSpec] {
    match os {
        OperatingSystem::Windows => WINDOWS_SCREENS,
        OperatingSystem::MacOs => MAC_SCREENS,
        OperatingSystem::Linux => LINUX_SCREENS,
        OperatingSystem::Android => ANDROID_SCREENS,
        OperatingSystem::Ios => IOS_SCREENS,
    }
}

/// Height in CSS pixels reserved by the OS (taskbar, menu bar, panel).
pub fn os_reserved_height(os: OperatingSystem) -> u32 {
    match os {
        OperatingSystem::Windows => 40,
        OperatingSystem::MacOs => 25,
        OperatingSystem::Linux => 27,
        OperatingSystem::Android | OperatingSystem::Ios => 0,
    }
}

/// Height in CSS pixels taken by the browser's own toolbars.
pub fn browser_chrome_height(engine: Engine, device: Device) -> u32 {
    match (engine, device) {
        (Engine::Blink, Device::Desktop) => 85,
        (Engine::Gecko, Device::Desktop) => 80,
        (Engine::WebKit, Device::Desktop) => 78,
        (Engine::Blink | Engine::Gecko, Device::Mobile) => 56,
        (Engine::WebKit, Device::Mobile) => 100,
    }
}

/// Graphics adapter as reported through WebGL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuSpec {
    /// Short vendor name as ANGLE prints it.
    pub vendor: &'static str,
    pub model: &'static str,
    pub weight: f64,
}

const fn gpu(vendor: &'static str, model: &'static str, weight: f64) -> GpuSpec {
    GpuSpec {
        vendor,
        model,
        weight,
    }
}

const WINDOWS_GPUS: &[GpuSpec] = &[
    gpu("Intel", "Intel(R) UHD Graphics 630", 15.0),
    gpu("Intel", "Intel(R) Iris(R) Xe Graphics", 12.0),
    gpu("NVIDIA", "NVIDIA GeForce RTX 3060", 12.0),
    gpu("NVIDIA", "NVIDIA GeForce RTX 4060", 10.0),
    gpu("NVIDIA", "NVIDIA GeForce RTX 3070", 8.0),
    gpu("AMD", "AMD Radeon RX 6800", 8.0),
    gpu("AMD", "AMD Radeon RX 7800 XT", 7.0),
    gpu("NVIDIA", "NVIDIA GeForce GTX 1660", 6.0),
];

const MAC_GPUS: &[GpuSpec] = &[
    gpu("Apple", "Apple M3 Pro", 25.0),
    gpu("Apple", "Apple M3 Max", 20.0),
    gpu("Apple", "Apple M2 Pro", 15.0),
    gpu("Apple", "Apple M2", 12.0),
    gpu("Apple", "Apple M1 Pro", 10.0),
    gpu("Apple", "Apple M1", 8.0),
    gpu("Intel", "Intel(R) Iris(TM) Plus Graphics 655", 5.0),
];

const LINUX_GPUS: &[GpuSpec] = &[
    gpu("Intel", "Mesa Intel(R) UHD Graphics 630 (CFL GT2)", 25.0),
    gpu("NVIDIA", "NVIDIA GeForce RTX 3060/PCIe/SSE2", 20.0),
    gpu("AMD", "AMD Radeon RX 6800 (radeonsi, navi21, LLVM 15.0.7)", 15.0),
    gpu("NVIDIA", "NVIDIA GeForce RTX 4070/PCIe/SSE2", 12.0),
    gpu("Intel", "Mesa Intel(R) Xe Graphics (TGL GT2)", 10.0),
];

const ANDROID_GPUS: &[GpuSpec] = &[
    gpu("Qualcomm", "Adreno (TM) 740", 30.0),
    gpu("Qualcomm", "Adreno (TM) 730", 25.0),
    gpu("Qualcomm", "Adreno (TM) 650", 20.0),
    gpu("ARM", "Mali-G710 MC10", 15.0),
    gpu("ARM", "Mali-G78 MP20", 10.0),
];

const IOS_GPUS: &[GpuSpec] = &[gpu("Apple Inc.", "Apple GPU", 1.0)];

pub fn gpus_for(os: OperatingSystem) -> &'static [GpuSpec] {
    match os {
        OperatingSystem::Windows => WINDOWS_GPUS,
        OperatingSystem::MacOs => MAC_GPUS,
        OperatingSystem::Linux => LINUX_GPUS,
        OperatingSystem::Android => ANDROID_GPUS,
        OperatingSystem::Ios => IOS_GPUS,
    }
}

/// CPU cores and memory (GiB).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareSpec {
    pub cpu_cores: u32,
    pub memory_gb: u32,
    pub weight: f64,
}

const fn hardware(cpu_cores: u32, memory_gb: u32, weight: f64) -> HardwareSpec {
    HardwareSpec {
        cpu_cores,
        memory_gb,
        weight,
    }
}

const DESKTOP_HARDWARE: &[HardwareSpec] = &[
    hardware(8, 16, 25.0),
    hardware(6, 8, 20.0),
    hardware(4, 8, 18.0),
    hardware(12, 32, 12.0),
    hardware(8, 32, 10.0),
    hardware(4, 4, 10.0),
    hardware(16, 64, 5.0),
];

const MOBILE_HARDWARE: &[HardwareSpec] = &[
    hardware(8, 8, 40.0),
    hardware(8, 6, 25.0),
    hardware(8, 4, 20.0),
    hardware(6, 4, 15.0),
];

pub fn hardware_for(device: Device) -> &'static [HardwareSpec] {
    match device {
        Device::Desktop => DESKTOP_HARDWARE,
        Device::Mobile => MOBILE_HARDWARE,
    }
}

/// Fonts a default install of each OS exposes to font probing.
pub fn fonts_for(os: OperatingSystem) -> &'static [&'static str] {
    match os {
        OperatingSystem::Windows => &[
            "Arial",
            "Calibri",
            "Cambria",
            "Consolas",
            "Courier New",
            "Georgia",
            "Segoe UI",
            "Tahoma",
            "Times New Roman",
            "Verdana",
        ],
        OperatingSystem::MacOs => &[
            "American Typewriter",
            "Arial",
            "Avenir",
            "Futura",
            "Geneva",
            "Helvetica",
            "Helvetica Neue",
            "Menlo",
            "Monaco",
            "Times",
        ],
        OperatingSystem::Linux => &[
            "DejaVu Sans",
            "DejaVu Sans Mono",
            "DejaVu Serif",
            "Liberation Mono",
            "Liberation Sans",
            "Noto Sans",
            "Ubuntu",
        ],
        OperatingSystem::Android => &["Roboto", "Noto Sans", "Noto Serif", "Droid Sans Mono"],
        OperatingSystem::Ios => &[
            "Courier",
            "Georgia",
            "Helvetica",
            "Helvetica Neue",
            "Menlo",
            "Times New Roman",
        ],
    }
}
