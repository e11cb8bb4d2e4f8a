#![deny(missing_docs)]
//! Streaming reservoir sampling over an explicit accumulator.
//!
//! The core is a pure state transition: a [`SamplerState`] holds the sample,
//! the number of items seen and the fixed capacity, and [`update`] folds a
//! batch of items into it using an injected RNG. Callers may read the sample
//! between batches; at any point it is a uniform sample of everything seen.
//!
//! ```
//! use reservoir_core::{Capacity, Sampler, SamplerState};
//!
//! let mut sampler = Sampler::from_seed(7);
//! let state = SamplerState::new(Capacity::new(3).unwrap());
//! let state = sampler.update(state, [1, 2, 3, 4, 5]);
//! let state = sampler.update(state, [10, 20, 30, 40, 50]);
//! assert_eq!(state.seen_count(), 10);
//! assert_eq!(state.len(), 3);
//! ```

pub mod capacity;
pub mod errors;
pub mod rng;
pub mod sampler;
pub mod state;

pub use capacity::Capacity;
pub use errors::{ErrorInfo, SampleError};
pub use rng::{derive_substream_seed, RngHandle};
pub use sampler::{update, Sampler};
pub use state::{Phase, SamplerState};
