// File: crates/cadence-core/build.rs
// Summary: Links the Windows registry API that Skia's font manager and ICU (label shaping) call into.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW come from advapi32.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
