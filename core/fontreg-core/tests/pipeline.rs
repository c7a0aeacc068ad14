//! End-to-end runs over throwaway React Native projects
//!
//! Each test builds a small `android/` tree in a temp dir, points the
//! registrar at it, and checks what ended up on disk. Running twice must be
//! as harmless as running once.
use std::fs;
use std::path::PathBuf;

use fontreg_core::config::RegistrarConfig;
use fontreg_core::descriptor::DescriptorOutcome;
use fontreg_core::patch::{registration_line, PatchOutcome, FONT_MANAGER_IMPORT};
use fontreg_core::registrar::{register_all, register_family};
use tempfile::TempDir;

const MAIN_APPLICATION: &str = "package com.sample;

import android.app.Application;
import com.facebook.react.ReactApplication;
import com.facebook.soloader.SoLoader;

public class MainApplication extends Application implements ReactApplication {
  @Override
  public void onCreate() {
    super.onCreate();
    SoLoader.init(this, /* native exopackage */ false);
  }
}
";

struct Project {
    _tmp: TempDir,
    config: RegistrarConfig,
    main_app: PathBuf,
}

fn project(assets: &[&str]) -> Project {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = RegistrarConfig::for_root(tmp.path()).expect("config");

    fs::create_dir_all(&config.asset_dir).expect("mkdir assets");
    for name in assets {
        fs::write(config.asset_dir.join(name), name.as_bytes()).expect("write asset");
    }

    let pkg = config.java_dir.join("com/sample");
    fs::create_dir_all(&pkg).expect("mkdir java");
    let main_app = pkg.join("MainApplication.java");
    fs::write(&main_app, MAIN_APPLICATION).expect("write main app");

    Project {
        _tmp: tmp,
        config,
        main_app,
    }
}

fn families(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn roboto_bold_and_italic_produce_two_entries() {
    let p = project(&["Roboto-Bold.ttf", "Roboto-Italic.ttf"]);

    let report = register_family(&p.config, "Roboto").expect("register");

    let xml = fs::read_to_string(p.config.descriptor_path("Roboto")).expect("descriptor");
    assert_eq!(xml.matches("<font ").count(), 2);
    assert!(xml.contains(
        r#"<font app:fontStyle="normal" app:fontWeight="700" app:font="@font/roboto_bold"/>"#
    ));
    assert!(xml.contains(
        r#"<font app:fontStyle="italic" app:fontWeight="400" app:font="@font/roboto_italic"/>"#
    ));

    assert!(p.config.resource_dir.join("roboto_bold.ttf").exists());
    assert!(p.config.resource_dir.join("roboto_italic.ttf").exists());
    assert_eq!(
        report.patch,
        PatchOutcome::Registered {
            path: p.main_app.clone(),
            import_added: true
        }
    );
}

#[test]
fn second_run_changes_nothing() {
    let p = project(&[
        "Roboto-Bold.ttf",
        "Roboto-ExtraBoldItalic.ttf",
        "Inter-Regular.ttf",
    ]);
    let names = families(&["Roboto", "Inter"]);

    register_all(&p.config, &names).expect("first run");
    let roboto_xml = fs::read(p.config.descriptor_path("Roboto")).expect("roboto xml");
    let inter_xml = fs::read(p.config.descriptor_path("Inter")).expect("inter xml");
    let java = fs::read_to_string(&p.main_app).expect("java");

    let reports = register_all(&p.config, &names).expect("second run");

    assert_eq!(fs::read(p.config.descriptor_path("Roboto")).unwrap(), roboto_xml);
    assert_eq!(fs::read(p.config.descriptor_path("Inter")).unwrap(), inter_xml);
    assert_eq!(fs::read_to_string(&p.main_app).unwrap(), java);

    assert_eq!(java.matches(FONT_MANAGER_IMPORT).count(), 1);
    assert_eq!(java.matches(&registration_line("Roboto")).count(), 1);
    assert_eq!(java.matches(&registration_line("Inter")).count(), 1);

    for report in reports {
        assert!(matches!(
            report.descriptor,
            DescriptorOutcome::AlreadyExists { .. }
        ));
        assert!(matches!(
            report.patch,
            PatchOutcome::AlreadyRegistered { .. }
        ));
    }
}

#[test]
fn families_are_patched_in_configured_order() {
    let p = project(&["Roboto-Bold.ttf", "Inter-Regular.ttf"]);

    register_all(&p.config, &families(&["Roboto", "Inter"])).expect("run");

    // Each insertion lands right below super.onCreate(), so the last family comes first.
    let java = fs::read_to_string(&p.main_app).expect("java");
    let roboto = java.find(&registration_line("Roboto")).expect("roboto line");
    let inter = java.find(&registration_line("Inter")).expect("inter line");
    assert!(inter < roboto);
}

#[test]
fn existing_registration_leaves_file_byte_identical() {
    let p = project(&["Roboto-Bold.ttf"]);
    let patched = MAIN_APPLICATION.replace(
        "super.onCreate();",
        &format!("super.onCreate();\n    {}", registration_line("Roboto")),
    );
    fs::write(&p.main_app, &patched).expect("write");

    let report = register_family(&p.config, "Roboto").expect("register");

    assert_eq!(fs::read_to_string(&p.main_app).unwrap(), patched);
    assert_eq!(
        report.patch,
        PatchOutcome::AlreadyRegistered {
            path: p.main_app.clone()
        }
    );
}

#[test]
fn existing_descriptor_survives_new_assets() {
    let p = project(&["Roboto-Bold.ttf"]);
    register_family(&p.config, "Roboto").expect("first");
    let before = fs::read(p.config.descriptor_path("Roboto")).unwrap();

    fs::write(p.config.asset_dir.join("Roboto-Thin.ttf"), b"thin").unwrap();
    register_family(&p.config, "Roboto").expect("second");

    assert_eq!(fs::read(p.config.descriptor_path("Roboto")).unwrap(), before);
    assert!(p.config.resource_dir.join("roboto_thin.ttf").exists());
}

#[test]
fn unmatched_family_creates_dir_but_no_files() {
    let p = project(&["Inter-Regular.ttf"]);

    let report = register_family(&p.config, "Roboto").expect("register");

    assert!(p.config.resource_dir.is_dir());
    assert!(report.copied.is_empty());
    assert_eq!(report.descriptor, DescriptorOutcome::NoMatchingAssets);
    assert_eq!(
        fs::read_dir(&p.config.resource_dir).unwrap().count(),
        0,
        "nothing should be written for an unmatched family"
    );
}

#[test]
fn ambiguous_entry_point_is_skipped_untouched() {
    let p = project(&["Roboto-Bold.ttf"]);
    let other = p.config.java_dir.join("com/other/MainApplication.java");
    fs::create_dir_all(other.parent().unwrap()).unwrap();
    fs::write(&other, MAIN_APPLICATION).unwrap();

    let reports = register_all(&p.config, &families(&["Roboto"])).expect("run");

    assert!(matches!(reports[0].patch, PatchOutcome::Skipped { .. }));
    assert_eq!(fs::read_to_string(&p.main_app).unwrap(), MAIN_APPLICATION);
    assert_eq!(fs::read_to_string(&other).unwrap(), MAIN_APPLICATION);
}

#[test]
fn unreadable_entry_point_does_not_stop_later_families() {
    let p = project(&["Roboto-Bold.ttf", "Lato-Black.ttf"]);
    let mut latin1 = b"// \xA9 Acme\n".to_vec();
    latin1.extend_from_slice(MAIN_APPLICATION.as_bytes());
    fs::write(&p.main_app, &latin1).unwrap();

    let reports = register_all(&p.config, &families(&["Roboto", "Lato"])).expect("run");

    assert_eq!(reports.len(), 2);
    for report in &reports {
        match &report.patch {
            PatchOutcome::Skipped { reason } => assert!(reason.contains("reading entry point")),
            other => panic!("expected a skipped patch, got {other:?}"),
        }
    }
    assert!(p.config.resource_dir.join("lato_black.ttf").exists());
    assert!(matches!(
        reports[1].descriptor,
        DescriptorOutcome::Generated { .. }
    ));
    assert!(p.config.descriptor_path("Lato").exists());
    assert_eq!(fs::read(&p.main_app).unwrap(), latin1);
}

#[cfg(unix)]
#[test]
fn symlinked_assets_are_copied() {
    use std::os::unix::fs::symlink;

    let p = project(&[]);
    let store = p.config.root.join("shared-fonts");
    fs::create_dir_all(&store).unwrap();
    fs::write(store.join("Roboto-Medium.ttf"), b"medium").unwrap();
    symlink(
        store.join("Roboto-Medium.ttf"),
        p.config.asset_dir.join("Roboto-Medium.ttf"),
    )
    .unwrap();

    let report = register_family(&p.config, "Roboto").expect("register");

    let copy = p.config.resource_dir.join("roboto_medium.ttf");
    assert_eq!(report.copied, vec![copy.clone()]);
    assert_eq!(fs::read(copy).unwrap(), b"medium");
    let xml = fs::read_to_string(p.config.descriptor_path("Roboto")).unwrap();
    assert!(xml.contains(r#"app:fontWeight="500" app:font="@font/roboto_medium""#));
}
