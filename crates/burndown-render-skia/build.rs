// File: crates/burndown-render-skia/build.rs
// Summary: Link Windows system libraries needed by Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
