use browserprint::{FingerprintGenerator, FingerprintOptions, GenerateFingerprint};

fn chrome_desktop() -> FingerprintOptions {
    FingerprintOptions::new()
        .with_locales(["en", "en-US"])
        .with_browsers(["chrome"])
        .with_devices(["desktop"])
}

#[test]
fn same_seed_same_options_match() {
    let generator_a = FingerprintGenerator::with_seed(0xF00D_BAAD);
    let generator_b = FingerprintGenerator::with_seed(0xF00D_BAAD);

    let profile_a = generator_a.generate(&chrome_desktop()).expect("first profile");
    let profile_b = generator_b.generate(&chrome_desktop()).expect("second profile");

    assert_eq!(profile_a, profile_b);
}

#[test]
fn seeded_generator_is_stable_across_calls() {
    let generator = FingerprintGenerator::with_seed(42);
    let first = generator.generate(&FingerprintOptions::new()).expect("first");

    for _ in 0..5 {
        let again = generator.generate(&FingerprintOptions::new()).expect("again");
        assert_eq!(first, again);
    }
}

#[test]
fn seeded_output_serializes_identically() {
    let generator = FingerprintGenerator::with_seed(7);
    let a = serde_json::to_string(&generator.generate(&chrome_desktop()).unwrap()).unwrap();
    let b = serde_json::to_string(&generator.generate(&chrome_desktop()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_diverge() {
    let profiles: std::collections::HashSet<String> = (0..32u64)
        .map(|seed| {
            let profile = FingerprintGenerator::with_seed(seed)
                .generate(&FingerprintOptions::new())
                .expect("profile");
            serde_json::to_string(&profile.fingerprint).expect("serialize")
        })
        .collect();

    assert!(profiles.len() > 1, "32 seeds should not collapse to one profile");
}

#[test]
fn unseeded_generator_produces_variety() {
    let generator = FingerprintGenerator::new();
    let mut platforms = std::collections::HashSet::new();
    let mut screens = std::collections::HashSet::new();

    for _ in 0..200 {
        let fp = generator
            .generate(&FingerprintOptions::new())
            .expect("profile")
            .fingerprint;
        platforms.insert(fp.navigator.platform);
        screens.insert((fp.screen.width, fp.screen.height));
    }

    assert!(platforms.len() > 1, "should generate different platforms");
    assert!(screens.len() > 3, "should generate different resolutions");
}
