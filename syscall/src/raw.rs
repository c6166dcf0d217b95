//! Raw x86-64 Linux syscall entry.

use core::arch::asm;

// Kernel syscall format we have to match before issuing syscall
//
// rax  system call number (return value on the way back)
// rdi  arg0
// rsi  arg1
// rdx  arg2
// r10  arg3
// r8   arg4
// r9   arg5
// rcx  return address (written by syscall)
// r11  saved rflags (written by syscall)

/// # Safety
/// The caller must uphold the contract of the requested syscall: `arg0` is
/// passed to the kernel unchecked.
pub unsafe fn syscall1(nr: usize, arg0: usize) -> usize {
    let ret;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") nr => ret,
            in("rdi") arg0,
            // the kernel writes the return rip and rflags here
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, preserves_flags),
        );
    }
    ret
}

/// # Safety
/// The caller must uphold the contract of the requested syscall. In
/// particular, any argument the kernel treats as a pointer must be valid for
/// the access the syscall performs.
pub unsafe fn syscall3(nr: usize, arg0: usize, arg1: usize, arg2: usize) -> usize {
    let ret;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") nr => ret,
            in("rdi") arg0,
            in("rsi") arg1,
            in("rdx") arg2,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, preserves_flags),
        );
    }
    ret
}
