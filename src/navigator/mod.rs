//! Navigator module.
//!
//! Provides the `Navigator` capability trait, the `NavigatorCommand` values the
//! reconciler emits, and `StackNavigator`, an in-memory implementation.

pub mod memory;
pub mod traits;

pub use memory::StackNavigator;
pub use traits::{Navigator, NavigatorCommand};
