//! End-to-end resolution over a real content root layout.

use naucse::catalog::discovery::{CourseDiscovery, RootScan};
use naucse::catalog::resolver::resolve;
use naucse::config::load_declarations;
use naucse::trust::TrustPolicy;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn add_course(root: &Path, rel: &str) {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("info.yml"), "title: test\n").unwrap();
}

/// A root with one external declaration, one local declaration, and
/// discovered self-study plus run courses.
fn sample_root() -> TempDir {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join("courses.yml"),
        concat!(
            "mi-pyt:\n",
            "  url: https://github.com/pyvec/mi-pyt\n",
            "  branch: main\n",
            "  path: compiled\n",
            "homework: {}\n",
        ),
    )
    .unwrap();
    add_course(root.path(), "courses/intro");
    add_course(root.path(), "runs/2024/beginners");
    root
}

#[test]
fn resolves_a_full_root_with_a_trusted_repo() {
    let root = sample_root();
    let declarations = load_declarations(root.path()).unwrap();
    let discovered = RootScan::new(root.path()).list_courses().unwrap();
    let trust = TrustPolicy::from_env_value(Some("https://github.com/pyvec/*"));

    let catalog = resolve(&declarations, &discovered, &trust).unwrap();

    assert_eq!(
        catalog.slugs().collect::<Vec<_>>(),
        vec!["mi-pyt", "homework", "courses/intro", "2024/beginners"]
    );
    assert!(catalog.has_curated_homepage());
    assert!(catalog.excluded().is_empty());

    let mi_pyt = catalog.get("mi-pyt").unwrap().repo.as_ref().unwrap();
    assert_eq!(mi_pyt.checked_url(), "https://github.com/pyvec/mi-pyt#main");
    assert_eq!(mi_pyt.path.as_deref(), Some("compiled"));
}

#[test]
fn default_trust_excludes_the_external_course_but_keeps_the_rest() {
    let root = sample_root();
    let declarations = load_declarations(root.path()).unwrap();
    let discovered = RootScan::new(root.path()).list_courses().unwrap();

    let catalog = resolve(&declarations, &discovered, &TrustPolicy::deny_all()).unwrap();

    assert_eq!(
        catalog.slugs().collect::<Vec<_>>(),
        vec!["homework", "courses/intro", "2024/beginners"]
    );
    assert_eq!(catalog.excluded().len(), 1);
    assert_eq!(catalog.excluded()[0].slug, "mi-pyt");
}

#[test]
fn root_without_configuration_lists_discovered_courses_only() {
    let root = TempDir::new().unwrap();
    add_course(root.path(), "courses/intro");

    let declarations = load_declarations(root.path()).unwrap();
    let discovered = RootScan::new(root.path()).list_courses().unwrap();
    let catalog = resolve(&declarations, &discovered, &TrustPolicy::deny_all()).unwrap();

    assert_eq!(catalog.slugs().collect::<Vec<_>>(), vec!["courses/intro"]);
    assert!(!catalog.has_curated_homepage());
}

#[test]
fn freeze_manifest_is_deterministic_and_records_exclusions() {
    let root = sample_root();
    let declarations = load_declarations(root.path()).unwrap();
    let discovered = RootScan::new(root.path()).list_courses().unwrap();

    let first = serde_json::to_string_pretty(
        &resolve(&declarations, &discovered, &TrustPolicy::deny_all()).unwrap(),
    )
    .unwrap();
    let second = serde_json::to_string_pretty(
        &resolve(&declarations, &discovered, &TrustPolicy::deny_all()).unwrap(),
    )
    .unwrap();
    assert_eq!(first, second);

    let manifest: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(manifest["has_curated_homepage"], true);
    assert_eq!(manifest["entries"]["homework"]["source"], "declared");
    assert_eq!(manifest["excluded"][0]["slug"], "mi-pyt");
    assert_eq!(manifest["excluded"][0]["reason"], "untrusted_repo");
    assert_eq!(
        manifest["excluded"][0]["repo"]["url"],
        "https://github.com/pyvec/mi-pyt"
    );
}
