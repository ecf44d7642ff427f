// Adapters layer: concrete implementations of the domain ports.

pub mod compressor;

pub use compressor::LzStringCompressor;
