fn main() {
    // libc's crt1.o would bring a competing _start; drop it so ours is the
    // process entry point
    println!("cargo:rustc-link-arg-bins=-nostartfiles");
}
