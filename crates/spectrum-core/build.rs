// File: crates/spectrum-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need when rendering spectra.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
