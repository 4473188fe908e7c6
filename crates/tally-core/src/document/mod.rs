//! Sheet state and operations (UI-agnostic).

mod ops;
mod state;

pub use state::Sheet;
