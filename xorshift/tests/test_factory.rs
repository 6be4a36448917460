//! Tests for runtime generator selection

use xorshift::prelude::*;
use xorshift::{create_generator, AnyGenerator, GeneratorConfig, GeneratorError, GeneratorKind};

#[test]
fn test_any_generator_matches_concrete_type() {
    let mut any = create_generator(&GeneratorConfig::new(GeneratorKind::Xoshiro256StarStar, 42));
    let mut concrete = Xoshiro256StarStar::new(42);

    for _ in 0..100 {
        assert_eq!(any.next_u64(), concrete.next());
    }
}

#[test]
fn test_any_generator_widens_32_bit_outputs() {
    let mut any = AnyGenerator::new(GeneratorKind::Xoshiro128Plus, 42);
    let mut concrete = Xoshiro128Plus::new(42);

    for _ in 0..100 {
        assert_eq!(any.next_u64(), concrete.next() as u64);
    }
    assert_eq!(any.output_max(), u32::MAX as u64);
}

#[test]
fn test_any_generator_discard_and_reseed() {
    let mut any = AnyGenerator::new(GeneratorKind::Sfc64, 10);
    let mut concrete = Sfc64::new(10);

    any.discard(37);
    concrete.discard(37);
    assert_eq!(any.next_u64(), concrete.next());

    any.reseed(11);
    assert_eq!(any, AnyGenerator::Sfc64(Sfc64::new(11)));
}

#[test]
fn test_config_from_json() {
    let config = GeneratorConfig::from_json(r#"{"kind": "xoroshiro128p", "seed": 7}"#).unwrap();
    assert_eq!(config, GeneratorConfig::new(GeneratorKind::Xoroshiro128Plus, 7));

    let mut rng = config.build();
    assert_eq!(rng.kind(), GeneratorKind::Xoroshiro128Plus);
    assert_eq!(rng.next_u64(), Xoroshiro128Plus::new(7).next());
}

#[test]
fn test_config_json_round_trip() {
    for kind in GeneratorKind::ALL {
        let config = GeneratorConfig::new(kind, u64::MAX);
        let json = config.to_json().unwrap();
        assert!(json.contains(kind.name()), "{} missing from {}", kind, json);
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }
}

#[test]
fn test_config_unknown_kind_rejected() {
    let result = GeneratorConfig::from_json(r#"{"kind": "mt19937", "seed": 1}"#);
    assert!(matches!(result, Err(GeneratorError::InvalidConfig(_))));
}

#[test]
fn test_config_missing_seed_rejected() {
    let result = GeneratorConfig::from_json(r#"{"kind": "sfc64"}"#);
    assert!(matches!(result, Err(GeneratorError::InvalidConfig(_))));
}

#[test]
fn test_zero_seed_xorshift_still_built() {
    // Degenerate but well-defined: the caller asked for it.
    let mut rng = create_generator(&GeneratorConfig::new(GeneratorKind::Xorshift64Star, 0));
    assert_eq!(rng.next_u64(), 0);
    assert_eq!(rng.state_words(), vec![0]);
}

#[test]
fn test_kind_metadata() {
    assert_eq!(GeneratorKind::Xoroshiro128Plus.state_words(), 2);
    assert_eq!(GeneratorKind::Xoshiro128StarStar.state_words(), 4);
    assert_eq!(GeneratorKind::Xorshift64Star.state_words(), 1);
    assert_eq!(GeneratorKind::Xoshiro128Plus.output_bits(), 32);
    assert_eq!(GeneratorKind::Sfc64.output_bits(), 64);
}
