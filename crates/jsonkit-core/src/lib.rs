//! # jsonkit-core
//!
//! Self-contained JSON encoder and decoder built on a closed value model.
//!
//! Nothing here delegates to another JSON library: the [`encoder`] walks a
//! [`Value`] and writes minimal JSON text, and the [`decoder`] reads text
//! with a single forward-only cursor, reporting the first problem as a
//! [`SyntaxError`] with a byte offset.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonkit_core::{decode, encode};
//!
//! let value = decode(r#"{ "name": "Alice", "scores": [95, 87.5] }"#).unwrap();
//! assert_eq!(value["scores"][1].as_f64(), Some(87.5));
//! assert_eq!(encode(&value), r#"{"name":"Alice","scores":[95,87.5]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Value`, `Map`, and the `Serializable` hook
//! - [`encoder`] — `Value` → JSON text
//! - [`decoder`] — JSON text → `Value`
//! - [`transcode`] — `normalize` and the `decode_or_empty` fallback
//! - [`options`] — nesting limits
//! - [`error`] — error types for decode and depth-limited encode

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod options;
pub mod transcode;
pub mod value;

pub use decoder::{decode, decode_with};
pub use encoder::{encode, encode_str, encode_with};
pub use error::{EncodeError, ErrorKind, SyntaxError};
pub use options::{DecodeOptions, EncodeOptions, DEFAULT_MAX_DEPTH};
pub use transcode::{decode_or_empty, normalize};
pub use value::{object_from_members, Map, Serializable, Value};
