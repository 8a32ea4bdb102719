//! Optionally seeded pseudorandom number generator.
//!
//! A seeded [`Prng`] produces a reproducible sequence from the sine of an
//! advancing seed; an unseeded one draws from platform entropy. The
//! generator is fine for tests, simulations and games. It is not suitable
//! anywhere an adversary must not predict the output.
//!
//! The same type is exported to JavaScript via wasm-bindgen as `Prng`.

pub mod config;
pub mod entropy;
pub mod generator;

pub use config::PrngConfig;
pub use generator::{Prng, PrngState};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use serde::Serialize;
    use wasm_bindgen::prelude::*;
    use crate::generator::{Prng, PrngState};

    /// JS-facing generator.
    #[wasm_bindgen(js_name = "Prng")]
    pub struct WasmPrng {
        inner: Prng,
    }

    #[wasm_bindgen(js_class = "Prng")]
    impl WasmPrng {
        /// `new Prng()` or `new Prng(seed)`. A seed of 0 means unseeded.
        #[wasm_bindgen(constructor)]
        pub fn new(seed: Option<f64>) -> WasmPrng {
            WasmPrng { inner: Prng::new(seed) }
        }

        /// Float in [0, 1).
        #[wasm_bindgen(js_name = "getRandom")]
        pub fn get_random(&mut self) -> f64 {
            self.inner.random()
        }

        /// Float in [min, max).
        #[wasm_bindgen(js_name = "getRandomFloat")]
        pub fn get_random_float(&mut self, min: f64, max: f64) -> f64 {
            self.inner.random_float(min, max)
        }

        /// Integer in [min, max], both inclusive.
        #[wasm_bindgen(js_name = "getRandomInt")]
        pub fn get_random_int(&mut self, min: i32, max: i32) -> i32 {
            self.inner.random_int(min as i64, max as i64) as i32
        }

        #[wasm_bindgen(js_name = "isSeeded")]
        pub fn is_seeded(&self) -> bool {
            self.inner.is_seeded()
        }

        /// Returns `{ seed: number | null }`.
        pub fn state(&self) -> Result<JsValue, JsValue> {
            let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
            Ok(self.inner.state().serialize(&serializer)?)
        }

        /// Resume from an object previously returned by `state()`.
        #[wasm_bindgen(js_name = "fromState")]
        pub fn from_state(state: JsValue) -> Result<WasmPrng, JsValue> {
            let state: PrngState = serde_wasm_bindgen::from_value(state)?;
            Ok(WasmPrng { inner: Prng::from_state(state) })
        }
    }
}
