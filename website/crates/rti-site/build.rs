//! Build script for rti-site
//!
//! - Emits `BUILD_VERSION` for cache busting static assets
//! - In release builds, minifies the stylesheet with lightningcss

use std::process::Command;

const CSS_DIR: &str = "../../public/css";

fn main() {
    println!("cargo:rerun-if-changed={CSS_DIR}");
    println!("cargo:rerun-if-changed=../../../.git/HEAD");

    generate_build_version();

    #[cfg(not(debug_assertions))]
    {
        minify_css();
    }
}

fn generate_build_version() {
    let version = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| format!("{:x}", d.as_secs()))
                .unwrap_or_else(|_| "unknown".to_string())
        });

    println!("cargo:rustc-env=BUILD_VERSION={version}");
}

#[cfg(not(debug_assertions))]
fn minify_css() {
    use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
    use std::{fs, path::Path};

    let css_dir = Path::new(CSS_DIR);
    let Ok(css) = fs::read_to_string(css_dir.join("style.css")) else {
        println!("cargo:warning=style.css not found, skipping minification");
        return;
    };

    let Ok(mut stylesheet) = StyleSheet::parse(&css, ParserOptions::default()) else {
        println!("cargo:warning=failed to parse style.css");
        return;
    };

    if stylesheet.minify(MinifyOptions::default()).is_err() {
        println!("cargo:warning=failed to minify style.css");
        return;
    }

    let Ok(result) = stylesheet.to_css(PrinterOptions {
        minify: true,
        ..Default::default()
    }) else {
        println!("cargo:warning=failed to print minified css");
        return;
    };

    if let Err(e) = fs::write(css_dir.join("style.min.css"), result.code) {
        println!("cargo:warning=failed to write style.min.css: {e}");
    }
}
