use apt_pages::config::read_string;
use apt_pages::{write_frontpage, DistributionSummary, SiteSettings, Templates};
use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MATRIX: &str = r#"
distributions:
  - distro: ubuntu
    version: "18.04"
    codename: bionic
    architectures: [amd64, arm64]
    display_name: Ubuntu 18.04
    eol: "2023-05-31"
  - distro: debian
    version: "12"
    codename: bookworm
    architectures: [amd64, armhf]
    display_name: Debian 12
"#;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap()
}

fn add_debs(root: &Path, codename: &str, count: usize) {
    let main = root.join("pool").join(codename).join("main");
    fs::create_dir_all(&main).unwrap();
    for i in 0..count {
        fs::write(main.join(format!("pkg{}_1.0_amd64.deb", i)), b"!<arch>").unwrap();
    }
}

#[test]
fn test_empty_repository() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("index.html");
    let config = read_string(MATRIX).unwrap();

    let page = write_frontpage(
        temp_dir.path(),
        &output,
        &config,
        &SiteSettings::default(),
        &Templates::builtin().unwrap(),
        fixed_time(),
    )
    .unwrap();

    assert_eq!(page.package_count, 0);
    assert!(page.distributions.is_empty());
    assert_eq!(page.architectures, vec!["amd64", "arm64", "armhf"]);
    assert!(output.is_file());
}

#[test]
fn test_matched_distribution() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    add_debs(root, "bionic", 3);
    let config = read_string(MATRIX).unwrap();

    let page = write_frontpage(
        root,
        &root.join("index.html"),
        &config,
        &SiteSettings::default(),
        &Templates::builtin().unwrap(),
        fixed_time(),
    )
    .unwrap();

    assert_eq!(page.package_count, 3);
    assert_eq!(page.distributions.len(), 1);
    let bionic = &page.distributions[0];
    assert_eq!(bionic.codename, "bionic");
    assert_eq!(bionic.package_count, 3);
    assert_eq!(bionic.display_name, "Ubuntu 18.04");
    assert_eq!(bionic.architectures, vec!["amd64", "arm64"]);
    assert_eq!(bionic.eol, "2023-05-31");
}

#[test]
fn test_unmatched_distribution() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    add_debs(root, "unknown-codename", 1);
    add_debs(root, "bookworm", 2);
    let config = read_string(MATRIX).unwrap();

    let page = write_frontpage(
        root,
        &root.join("site/front.html"),
        &config,
        &SiteSettings::default(),
        &Templates::builtin().unwrap(),
        fixed_time(),
    )
    .unwrap();

    assert_eq!(page.package_count, 3);
    assert_eq!(
        page.distributions
            .iter()
            .map(|d| d.codename.as_str())
            .collect::<Vec<_>>(),
        vec!["bookworm", "unknown-codename"]
    );
    assert_eq!(
        page.distributions[1],
        DistributionSummary::unmatched("unknown-codename", 1)
    );
    assert_eq!(page.distributions[1].display_name, "Unknown-Codename");
    assert_eq!(page.distributions[1].distro, "unknown");

    let html = fs::read_to_string(root.join("site/front.html")).unwrap();
    assert!(html.contains("Unknown-Codename"));
    assert!(html.contains("Debian 12"));
}

#[test]
fn test_idempotent_with_fixed_time() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    add_debs(root, "bionic", 2);
    add_debs(root, "bookworm", 4);
    let config = read_string(MATRIX).unwrap();
    let site = SiteSettings::new("example", "apt");
    let templates = Templates::builtin().unwrap();
    let output = root.join("index.html");

    write_frontpage(root, &output, &config, &site, &templates, fixed_time()).unwrap();
    let first = fs::read(&output).unwrap();
    write_frontpage(root, &output, &config, &site, &templates, fixed_time()).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    let html = String::from_utf8(first).unwrap();
    assert!(html.contains("2025-06-01 12:30:00 UTC"));
}

#[test]
fn test_custom_template_receives_context() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("repo");
    let templates_dir = temp_dir.path().join("templates");
    add_debs(&root, "bionic", 3);
    fs::create_dir_all(&templates_dir).unwrap();
    fs::write(
        templates_dir.join("frontpage.html.j2"),
        "{{ repo_owner }}|{{ package_count }}|{% for d in distributions %}{{ d.codename }}:{{ d.package_count }}:{{ d.architectures|join(',') }}{% endfor %}|{{ architectures|join(',') }}|{{ generated_date }}",
    )
    .unwrap();
    let config = read_string(MATRIX).unwrap();

    write_frontpage(
        &root,
        &root.join("index.html"),
        &config,
        &SiteSettings::new("octo", "apt"),
        &Templates::from_dir(&templates_dir),
        fixed_time(),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(root.join("index.html")).unwrap(),
        "octo|3|bionic:3:amd64,arm64|amd64,arm64,armhf|2025-06-01 12:30:00 UTC"
    );
}
