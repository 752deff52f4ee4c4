//! Hardware Dispatcher
//!
//! Selects the fastest available kernel (AES-NI or portable) for the
//! current CPU. The portable kernel is always available, so dispatch is
//! total and `eval` never fails.

use crate::kernels;
use crate::types::KernelFn;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest kernel for this CPU.
#[must_use]
pub fn get_best_kernel() -> KernelFn {
    // 1. Runtime Dispatch (Std-only)
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
            return safe_aesni_wrapper;
        }
    }

    // 2. Compile-Time Dispatch (no_std)
    #[cfg(not(feature = "std"))]
    {
        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "aes",
            target_feature = "sse2"
        ))]
        return safe_aesni_wrapper;
    }

    // 3. Portable Fallback
    kernels::portable::eval
}

/// Returns the name of the active hardware backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
            return "AES-NI";
        }
    }

    #[cfg(all(
        not(feature = "std"),
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "aes",
        target_feature = "sse2"
    ))]
    {
        return "AES-NI";
    }

    "Portable"
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// Safe wrapper around the unsafe AES-NI kernel entry point.
#[inline]
#[allow(unsafe_code)]
#[allow(unused_variables)]
#[allow(dead_code)]
fn safe_aesni_wrapper(
    message: &[u8; kernels::constants::BLOCK_SIZE],
    tweak: &[u8; kernels::constants::BLOCK_SIZE],
    key: &[u8; kernels::constants::BLOCK_SIZE],
    out: &mut [u8; kernels::constants::OUTPUT_SIZE],
) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    // SAFETY: Only reachable after CPUID validation (AES + SSE2) or a
    // compile-time target_feature guarantee. All parameters are fixed-size
    // references validated by the type system.
    unsafe {
        kernels::aesni::eval(message, tweak, key, out);
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    unreachable!("CPUID escape");
}
