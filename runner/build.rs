use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=../hello");
    println!("cargo:rerun-if-changed=../syscall");

    let workspace = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap())
        .parent()
        .unwrap()
        .to_path_buf();
    // separate target tree so the nested cargo never contends with the
    // invoking build's lock on target/
    let target_dir = workspace.join("target").join("hello-bin");

    // always release: the dev-profile link of the freestanding binary fails
    // on rust_eh_personality (libcore eh_frame data, nothing strips it)
    let output = Command::new("cargo")
        .args(["build", "-p", "hello", "--release", "--target-dir"])
        .arg(&target_dir)
        .current_dir(&workspace)
        .output()
        .expect("failed to execute cargo build");

    if !output.status.success() {
        let _ = std::io::stderr().write_all(&output.stdout);
        let _ = std::io::stderr().write_all(&output.stderr);
        panic!("Failed to compile hello");
    }

    let hello = target_dir.join("release").join("hello");
    // pass the binary path as an env variable to main.rs and the tests
    println!("cargo:rustc-env=HELLO_PATH={}", hello.display());
}
