use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use plotcanvas_cli::{Args, run};

/// Collects all .toml scene files from a directory
fn collect_scene_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo scenes live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn tex_args(input: &Path, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        strict: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_scene_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.tex", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&tex_args(demo_path, output_path.clone())) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let document = fs::read_to_string(&output_path).expect("TeX output written");
        assert!(document.contains("\\begin{tikzpicture}"));
        assert!(document.ends_with("\\end{document}\n"));
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_scene_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.tex",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&tex_args(demo_path, output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_single_box_document_body() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("single_box.tex");

    run(&tex_args(
        &demos_path().join("single_box.toml"),
        output_path.clone(),
    ))
    .expect("single_box renders");

    let document = fs::read_to_string(&output_path).expect("TeX output written");
    assert!(document.contains("paperwidth=14.000000cm,paperheight=10.000000cm"));
    assert!(document.contains(
        "\\begin{tikzpicture}\n \\draw (0.100000,0.200000) -- (0.600000,0.700000);\n\\end{tikzpicture}"
    ));
}

#[test]
fn e2e_layered_document_order() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("layered.tex");

    run(&tex_args(&demos_path().join("layered.toml"), output_path.clone()))
        .expect("layered renders");

    let document = fs::read_to_string(&output_path).expect("TeX output written");
    let frame = document.find("(0.000000,0.000000) -- (8.000000,6.000000)").unwrap();
    let inner = document.find("(1.000000,1.000000) -- (7.000000,5.000000)").unwrap();
    let highlight = document.find("(2.000000,2.000000) -- (3.000000,3.000000)").unwrap();

    assert!(frame < inner && inner < highlight);
}

#[test]
fn e2e_unsupported_output_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("single_box.svg");

    let result = run(&tex_args(&demos_path().join("single_box.toml"), output_path));

    assert!(result.is_err(), "SVG output is not supported");
}
