//! # Trait Assertions

/// Compile-time check that a value is `Send + Sync`.
///
/// ```rust
/// use tokenpress::compat::traits::static_is_send_sync_check;
///
/// static_is_send_sync_check(&vec![1_u32]);
/// ```
pub fn static_is_send_sync_check<S: Send + Sync>(_: &S) {}
