pub mod wasm_api;

pub use wasm_api::{DemoHandle, start_demo};
