// File: crates/skychart-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        if std::env::var_os("CARGO_FEATURE_RASTER").is_some() {
            // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
            println!("cargo:rustc-link-lib=advapi32");
        }
    }
}
