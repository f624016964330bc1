//! Binary entry point used by `trunk serve` / `trunk build`.

#[cfg(target_arch = "wasm32")]
fn main() {
    gambit_frontend::boot();
}

// The UI is wasm-only; a host build of this binary has nothing to run.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
