//! Cross-check ordering of strictly valid versions against the `semver` crate

use rstest::rstest;
use semver_engine::compare;

const VERSIONS: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-0",
    "1.0.0-0.3.7",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0-x-y-z.--",
    "1.0.0",
    "1.2.3",
    "1.10.0",
    "2.0.0-Alpha",
    "2.0.0-alpha",
    "2.0.0",
    "10.0.0",
];

#[test]
fn ordering_matches_semver_crate() {
    for a in VERSIONS {
        for b in VERSIONS {
            let expected = semver::Version::parse(a)
                .unwrap()
                .cmp(&semver::Version::parse(b).unwrap());
            assert_eq!(compare(*a, *b), expected, "comparing {a} with {b}");
        }
    }
}

#[rstest]
#[case("1.2.3", "^1.2.3")]
#[case("1.9.0", "^1.2.3")]
#[case("2.0.0", "^1.2.3")]
#[case("0.2.5", "^0.2.3")]
#[case("0.3.0", "^0.2.3")]
#[case("1.2.9", "~1.2.3")]
#[case("1.3.0", "~1.2.3")]
#[case("1.5.0", ">=1.0.0, <2.0.0")]
#[case("2.0.0", ">=1.0.0, <2.0.0")]
fn release_satisfaction_matches_semver_crate(#[case] version: &str, #[case] cargo_req: &str) {
    let expected = semver::VersionReq::parse(cargo_req)
        .unwrap()
        .matches(&semver::Version::parse(version).unwrap());
    // npm ranges separate comparators with spaces, Cargo with commas
    let npm_range = cargo_req.replace(',', "");

    assert_eq!(semver_engine::satisfies(version, &npm_range), expected);
}
