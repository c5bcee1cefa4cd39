//! Resilient conversion of freeform text into structured markdown notes.
//!
//! The pipeline sanitizes raw input, asks a remote model to structure it,
//! validates the generated output, and falls back to a deterministic
//! synthesizer so every conversion yields a well-formed note.

pub mod config;
pub mod pipeline;

pub use pipeline::{ConversionRequest, ConversionResult, ConvertError, NoteConverter, Provenance};
