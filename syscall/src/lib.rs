//! Userspace wrappers over the x86-64 Linux system-call interface.
//!
//! No libc involved: the [`raw`] module issues the `syscall` instruction
//! directly and this crate only adds syscall numbers, typed wrappers, and
//! errno decoding on top.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod raw;

use core::hint::unreachable_unchecked;
use num_enum::{FromPrimitive, IntoPrimitive};

/// Syscall numbers from `arch/x86/entry/syscalls/syscall_64.tbl`.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(usize)]
pub enum Nr {
    Write = 1,
    Exit = 60,
}

/// Errno values this crate's callers can actually observe. Anything else
/// decodes to [`Error::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(i32)]
pub enum Error {
    Interrupted = 4,
    BadFileDescriptor = 9,
    BadAddress = 14,
    InvalidArgument = 22,
    NoSpace = 28,
    BrokenPipe = 32,
    #[num_enum(default)]
    Unknown = -1,
}

pub type Result<T> = core::result::Result<T, Error>;

/// The kernel returns `-errno` in rax; only the range -4095..=-1 is an
/// error, everything else (including large "negative" addresses from mmap)
/// is a success value.
fn decode(ret: usize) -> Result<usize> {
    let signed = ret as isize;
    if (-4095..=-1).contains(&signed) {
        Err(Error::from(-signed as i32))
    } else {
        Ok(ret)
    }
}

/// Writes `bytes` to the open file descriptor `fd`, returning the number of
/// bytes the kernel accepted (which may be short).
pub fn write(fd: u32, bytes: &[u8]) -> Result<usize> {
    // SAFETY: pointer and length come from a live slice, so the kernel reads
    // only memory this process owns for the duration of the call
    decode(unsafe {
        raw::syscall3(
            Nr::Write.into(),
            fd as usize,
            bytes.as_ptr() as usize,
            bytes.len(),
        )
    })
}

/// Terminates the calling thread with the given status. Never returns.
pub fn exit(code: u32) -> ! {
    // SAFETY: SYS_exit takes a plain integer and cannot fault
    unsafe { raw::syscall1(Nr::Exit.into(), code as usize) };
    // SAFETY: SYS_exit does not return
    unsafe { unreachable_unchecked() }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The test host is the target platform, so these exercise the real
    // syscall path end to end.

    #[test]
    fn write_reports_bytes_written() {
        let msg = b"write syscall smoke test\n";
        assert_eq!(write(1, msg), Ok(msg.len()));
    }

    #[test]
    fn write_to_unopened_fd_is_ebadf() {
        // beyond the default RLIMIT_NOFILE, never a valid descriptor
        assert_eq!(write(4095, b"x"), Err(Error::BadFileDescriptor));
    }

    #[test]
    fn decode_passes_successes_through() {
        assert_eq!(decode(0), Ok(0));
        assert_eq!(decode(13), Ok(13));
        // one past the errno range
        assert_eq!(decode(-4096isize as usize), Ok(-4096isize as usize));
    }

    #[test]
    fn decode_maps_errno_range() {
        assert_eq!(decode(-9isize as usize), Err(Error::BadFileDescriptor));
        assert_eq!(decode(-28isize as usize), Err(Error::NoSpace));
        // errno 1 (EPERM) and 4095 are both outside the enum
        assert_eq!(decode(-1isize as usize), Err(Error::Unknown));
        assert_eq!(decode(-4095isize as usize), Err(Error::Unknown));
    }

    #[test]
    fn unrecognized_errno_decodes_to_unknown() {
        assert_eq!(Error::from(9999), Error::Unknown);
    }
}
