use crate::kind::SchemaKind;
use crate::schema::{SafeParse, SafeParseReport, Schema};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;
use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::future::Future;

type ValidateFn = dyn Fn(Value) -> LocalBoxFuture<'static, SafeParseReport>;

/// A schema whose kind is only known at runtime, backed by a validator that
/// reports results in the foreign [`SafeParseReport`] shape.
///
/// The kind can be rebound after construction; adapters re-read it on every
/// parse.
pub struct DynamicSchema {
    kind: Cell<SchemaKind>,
    validate: Box<ValidateFn>,
}

impl DynamicSchema {
    pub fn new<F, Fut>(kind: SchemaKind, validate: F) -> Self
    where
        F: Fn(Value) -> Fut + 'static,
        Fut: Future<Output = SafeParseReport> + 'static,
    {
        Self {
            kind: Cell::new(kind),
            validate: Box::new(move |value| validate(value).boxed_local()),
        }
    }

    pub fn from_tag<F, Fut>(tag: &str, validate: F) -> Self
    where
        F: Fn(Value) -> Fut + 'static,
        Fut: Future<Output = SafeParseReport> + 'static,
    {
        Self::new(SchemaKind::from_tag(tag), validate)
    }

    pub fn set_kind(&self, kind: SchemaKind) {
        self.kind.set(kind);
    }
}

impl Schema for DynamicSchema {
    type Output = Value;

    fn kind(&self) -> SchemaKind {
        self.kind.get()
    }

    fn safe_parse_async<'a>(&'a self, value: &'a Value) -> LocalBoxFuture<'a, SafeParse<Value>> {
        let report = (self.validate)(value.clone());
        async move { report.await.into_safe_parse() }.boxed_local()
    }
}

impl Debug for DynamicSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicSchema")
            .field("kind", &self.kind.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "dynamic_test.rs"]
mod tests;
