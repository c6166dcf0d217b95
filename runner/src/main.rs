use std::process::Command;

use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    // built and exported by the build script
    let hello = env!("HELLO_PATH");

    let output = Command::new(hello)
        .output()
        .with_context(|| format!("Failed to execute {hello}"))?;

    print!("{}", String::from_utf8_lossy(&output.stdout));
    match output.status.code() {
        Some(0) => Ok(()),
        code => bail!("hello exited with {code:?}"),
    }
}
