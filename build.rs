//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time. It also records the build time, which seeds
//! the watch clock until a real time source exists.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    // Put memory layout in the output directory and ensure it's on the linker search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    File::create(out.join("memory.x"))
        .and_then(|mut f| f.write_all(include_bytes!("memory.x")))
        .expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out.display());

    // Seconds since the UNIX epoch at build time
    File::create(out.join("utc.rs"))
        .and_then(|mut f| {
            f.write_fmt(format_args!(
                "const UTC_EPOCH: i64 = {:?};",
                chrono::Utc::now().timestamp()
            ))
        })
        .expect("failed to write utc.rs");

    // No `rerun-if-changed` here: re-running on every package change keeps the
    // embedded build time fresh.
}
