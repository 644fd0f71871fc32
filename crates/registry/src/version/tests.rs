use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("1.2.3", Version::new(1, 2, 3))]
#[case("1.2", Version::new(1, 2, 0))]
#[case("4", Version::new(4, 0, 0))]
#[case(" v2.0.10 ", Version::new(2, 0, 10))]
#[case("0.0.0", Version::new(0, 0, 0))]
fn parses_versions(#[case] input: &str, #[case] expected: Version) {
	assert_eq!(Version::parse(input), Ok(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("1.2.3.4")]
#[case("1..2")]
#[case("1.x")]
#[case("-1.0")]
#[case("1.2.3-beta")]
#[case("99999999999")]
fn rejects_malformed_versions(#[case] input: &str) {
	assert_eq!(Version::parse(input), Err(RegistryError::InvalidVersion(input.to_string())));
}

#[test]
fn first_differing_component_decides() {
	assert!(Version::new(2, 0, 0).is_newer_than(Version::new(1, 9, 9)));
	assert!(Version::new(1, 3, 0).is_newer_than(Version::new(1, 2, 7)));
	assert!(Version::new(1, 2, 8).is_newer_than(Version::new(1, 2, 7)));
	assert!(!Version::new(1, 2, 7).is_newer_than(Version::new(1, 2, 7)));
	assert!(!Version::new(1, 2, 7).is_newer_than(Version::new(1, 10, 0)));
}

#[test]
fn current_matches_package_version() {
	assert_eq!(Version::current().to_string(), VERSION);
	assert_eq!(newer_than(VERSION), Ok(false));
	assert_eq!(newer_than("0.0.1"), Ok(true));
	assert_eq!(newer_than("9999"), Ok(false));
	assert!(newer_than("junk").is_err());
}

proptest! {
	#[test]
	fn ordering_matches_tuple_ordering(a in any::<(u16, u16, u16)>(), b in any::<(u16, u16, u16)>()) {
		let va = Version::new(a.0.into(), a.1.into(), a.2.into());
		let vb = Version::new(b.0.into(), b.1.into(), b.2.into());
		prop_assert_eq!(va.is_newer_than(vb), a > b);
	}
}
