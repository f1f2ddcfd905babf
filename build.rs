//! Records the version of the compiler building the agent so the runtime
//! gate compares against the real toolchain.

fn main() -> Result<(), rustc_version::Error> {
    let version = rustc_version::version()?;
    println!("cargo:rustc-env=AGENT_CONFIG_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
    Ok(())
}
