pub mod adapter;
pub mod dynamic;
pub mod format;
pub mod json_schema;
pub mod kind;
pub mod options;
pub mod schema;

pub use adapter::{adapt, AdaptError, SchemaAdapter};
pub use dynamic::DynamicSchema;
pub use format::{decode_document, DecodeError, DocumentFormat};
pub use json_schema::{JsonObjectSchema, SchemaLoadError};
pub use kind::SchemaKind;
pub use options::{parse_adapter_options, AdapterOptions, OptionsError};
pub use schema::{SafeParse, SafeParseReport, Schema};
