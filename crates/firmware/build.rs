//! Passes the Cortex-M and defmt linker scripts to the binary. `memory.x` itself comes from `embassy-stm32`'s `memory-x`
//! feature.

fn main() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if std::env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
