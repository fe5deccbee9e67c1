//! User-input decoding — quadrature encoder and debounced toggle button.
//!
//! Pure logic: both state machines consume raw pin levels supplied by the
//! polling loop and carry no hardware dependencies, so they run unchanged
//! in host-side tests.

pub mod button;
pub mod quadrature;
