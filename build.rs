//! Bundles the component stylesheets into `assets/dist/bundle.css`, which the
//! layout loads through `asset!`.

use lightningcss::bundler::{Bundler, FileProvider};
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions};
use std::fs;
use std::path::Path;

const STYLE_ROOT: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn main() -> Result<(), String> {
    println!("cargo:rerun-if-changed={STYLE_ROOT}");

    let css = bundle_stylesheet(Path::new(ENTRY))?;
    fs::create_dir_all(OUT_DIR).map_err(|e| format!("{OUT_DIR}: {e}"))?;
    fs::write(OUT_FILE, css).map_err(|e| format!("{OUT_FILE}: {e}"))?;
    Ok(())
}

/// Inlines every `@import` reachable from `entry` and returns the minified sheet.
fn bundle_stylesheet(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut sheet = bundler
        .bundle(entry)
        .map_err(|e| format!("{}: {e}", entry.display()))?;

    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify {}: {e}", entry.display()))?;
    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| format!("print {}: {e}", entry.display()))?;
    Ok(printed.code)
}
