//! Navigation request headers, in per-engine order.
//!
//! Anti-bot systems compare header order against the claimed user agent, so
//! each engine keeps the order its real network stack emits.

use crate::catalog::Engine;
use crate::fingerprint::{Headers, UserAgentData};
use crate::options::Device;

const ACCEPT_BLINK: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,\
image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
const ACCEPT_GECKO: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const ACCEPT_WEBKIT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Build an `Accept-Language` value: the first locale carries no q-value,
/// then q decreases by 0.1 per entry and bottoms out at 0.1.
pub fn accept_language(locales: &[String]) -> String {
    locales
        .iter()
        .enumerate()
        .map(|(idx, locale)| {
            if idx == 0 {
                locale.clone()
            } else {
                let q = 10usize.saturating_sub(idx).max(1);
                format!("{locale};q=0.{q}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Format client-hint brands the way `sec-ch-ua` carries them.
pub fn sec_ch_ua(data: &UserAgentData) -> String {
    data.brands
        .iter()
        .map(|b| format!("\"{}\";v=\"{}\"", b.brand, b.version))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Headers for a top-level navigation.
pub fn navigation_headers(
    engine: Engine,
    device: Device,
    user_agent: &str,
    accept_language: &str,
    client_hints: Option<&UserAgentData>,
) -> Headers {
    let mut headers = Headers::new();
    let mut put = |name: &str, value: &str| {
        headers.insert(name.to_string(), value.to_string());
    };

    match engine {
        Engine::Blink => {
            if let Some(data) = client_hints {
                put("sec-ch-ua", &sec_ch_ua(data));
                put(
                    "sec-ch-ua-mobile",
                    if device == Device::Mobile { "?1" } else { "?0" },
                );
                put("sec-ch-ua-platform", &format!("\"{}\"", data.platform));
            }
            put("Upgrade-Insecure-Requests", "1");
            put("User-Agent", user_agent);
            put("Accept", ACCEPT_BLINK);
            put("Sec-Fetch-Site", "none");
            put("Sec-Fetch-Mode", "navigate");
            put("Sec-Fetch-User", "?1");
            put("Sec-Fetch-Dest", "document");
            put("Accept-Encoding", "gzip, deflate, br, zstd");
            put("Accept-Language", accept_language);
        }
        Engine::Gecko => {
            put("User-Agent", user_agent);
            put("Accept", ACCEPT_GECKO);
            put("Accept-Language", accept_language);
            put("Accept-Encoding", "gzip, deflate, br, zstd");
            put("Upgrade-Insecure-Requests", "1");
            put("Sec-Fetch-Dest", "document");
            put("Sec-Fetch-Mode", "navigate");
            put("Sec-Fetch-Site", "none");
            put("Sec-Fetch-User", "?1");
            put("Priority", "u=0, i");
        }
        Engine::WebKit => {
            put("Accept", ACCEPT_WEBKIT);
            put("Sec-Fetch-Site", "none");
            put("Sec-Fetch-Dest", "document");
            put("Accept-Language", accept_language);
            put("Sec-Fetch-Mode", "navigate");
            put("User-Agent", user_agent);
            put("Accept-Encoding", "gzip, deflate, br");
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::Brand;

    fn locales(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accept_language_weights_descend() {
        assert_eq!(accept_language(&locales(&["en-US"])), "en-US");
        assert_eq!(
            accept_language(&locales(&["en", "en-US", "de"])),
            "en,en-US;q=0.9,de;q=0.8"
        );
    }

    #[test]
    fn accept_language_floors_at_point_one() {
        let many: Vec<String> = (0..12).map(|i| format!("l{i}")).collect();
        let value = accept_language(&many);
        assert!(value.ends_with("l9;q=0.1,l10;q=0.1,l11;q=0.1"), "{value}");
    }

    #[test]
    fn blink_sends_client_hints_first() {
        let hints = UserAgentData {
            brands: vec![
                Brand {
                    brand: "Google Chrome".into(),
                    version: "131".into(),
                },
                Brand {
                    brand: "Chromium".into(),
                    version: "131".into(),
                },
            ],
            mobile: false,
            platform: "Windows".into(),
            architecture: "x86".into(),
            bitness: "64".into(),
            model: String::new(),
            platform_version: "15.0.0".into(),
            ua_full_version: "131.0.6778.86".into(),
            full_version_list: Vec::new(),
        };

        let headers = navigation_headers(Engine::Blink, Device::Desktop, "UA", "en", Some(&hints));
        let names: Vec<&str> = headers.keys().map(String::as_str).collect();
        assert_eq!(&names[..3], ["sec-ch-ua", "sec-ch-ua-mobile", "sec-ch-ua-platform"]);
        assert_eq!(
            headers["sec-ch-ua"],
            "\"Google Chrome\";v=\"131\", \"Chromium\";v=\"131\""
        );
        assert_eq!(headers["sec-ch-ua-platform"], "\"Windows\"");
        assert_eq!(names.last(), Some(&"Accept-Language"));
    }

    #[test]
    fn gecko_and_webkit_skip_client_hints() {
        for engine in [Engine::Gecko, Engine::WebKit] {
            let headers = navigation_headers(engine, Device::Desktop, "UA", "en", None);
            assert!(!headers.keys().any(|k| k.starts_with("sec-ch-ua")));
            assert_eq!(headers["User-Agent"], "UA");
        }

        let gecko = navigation_headers(Engine::Gecko, Device::Desktop, "UA", "en", None);
        assert_eq!(gecko.get_index(0).map(|(k, _)| k.as_str()), Some("User-Agent"));
        let webkit = navigation_headers(Engine::WebKit, Device::Mobile, "UA", "en", None);
        assert_eq!(webkit.get_index(0).map(|(k, _)| k.as_str()), Some("Accept"));
    }
}
