//! Consistency & Regression Tests
//!
//! Verifies internal logic consistency and architectural invariants.
//! - Determinism across repeated calls
//! - Portable vs dispatched kernel equality (cross-backend consistency)
//! - eval / eval_into agreement
//! - Thread safety (concurrent evals match sequential results)

#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]

use butterknife::{eval, eval_into, kernels};

/// Fixed, structured sample inputs; no RNG so failures reproduce exactly.
fn sample_inputs() -> Vec<([u8; 16], [u8; 16], [u8; 16])> {
    let mut inputs = vec![([0u8; 16], [0u8; 16], [0u8; 16])];
    for n in 1u8..8 {
        let message = core::array::from_fn(|i| (i as u8).wrapping_mul(17) ^ n);
        let tweak = core::array::from_fn(|i| (i as u8).wrapping_add(n).wrapping_mul(29));
        let key = core::array::from_fn(|i| 0xa5 ^ (i as u8).wrapping_mul(n));
        inputs.push((message, tweak, key));
    }
    inputs
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_determinism() {
    for (message, tweak, key) in sample_inputs() {
        let first = eval(&message, &tweak, &key);
        for _ in 0..10 {
            assert_eq!(
                first,
                eval(&message, &tweak, &key),
                "eval must be deterministic"
            );
        }
    }
}

#[test]
fn test_eval_into_matches_eval() {
    for (message, tweak, key) in sample_inputs() {
        let direct = eval(&message, &tweak, &key);

        let mut buffered = [0u8; 128];
        eval_into(&message, &tweak, &key, &mut buffered);

        assert_eq!(direct, buffered, "eval and eval_into must agree");
    }
}

// =============================================================================
// CROSS-BACKEND CONSISTENCY
// =============================================================================

#[test]
fn test_portable_matches_dispatch() {
    for (message, tweak, key) in sample_inputs() {
        let dispatched = eval(&message, &tweak, &key);

        let mut portable = [0u8; 128];
        kernels::portable::eval(&message, &tweak, &key, &mut portable);

        assert_eq!(
            dispatched, portable,
            "Dispatched backend ({}) diverged from portable",
            butterknife::active_backend()
        );
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[test]
fn test_aesni_matches_portable() {
    if !(is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2")) {
        println!("Skipping: AES-NI not supported.");
        return;
    }

    for (message, tweak, key) in sample_inputs() {
        let mut hw = [0u8; 128];
        unsafe { kernels::aesni::eval(&message, &tweak, &key, &mut hw) };

        let mut sw = [0u8; 128];
        kernels::portable::eval(&message, &tweak, &key, &mut sw);

        assert_eq!(hw, sw, "AES-NI and portable kernels must be bit-identical");
    }
}

// =============================================================================
// THREAD SAFETY
// =============================================================================

#[test]
fn test_concurrent_eval_matches_sequential() {
    let inputs = sample_inputs();
    let sequential: Vec<[u8; 128]> = inputs.iter().map(|(m, t, k)| eval(m, t, k)).collect();

    let handles: Vec<_> = inputs
        .iter()
        .map(|&(message, tweak, key)| {
            std::thread::spawn(move || eval(&message, &tweak, &key))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(sequential) {
        assert_eq!(
            handle.join().unwrap(),
            expected,
            "Concurrent eval diverged from sequential"
        );
    }
}
