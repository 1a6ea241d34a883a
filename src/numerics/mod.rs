// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules
// and the grid factorization built on top of them.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector;
}

pub mod grid;
