#![forbid(unsafe_code)]
//! Row source/sink over the backing sheet service, plus the secondary
//! membership store and fetch-cycle liveness gate.

mod client;
mod cycle;
mod error;
mod instrument;
mod membership;
mod wire;

pub use client::{RowSink, RowSource, SheetClient, WriteReceipt};
pub use cycle::CycleGate;
pub use error::{SheetError, SheetErrorCode};
pub use instrument::{
    NoopInstrumentation, StoreInstrumentation, StoreMetrics, StoreMetricsCollector,
};
pub use membership::{FileMembershipStore, InMemoryMembershipStore, MembershipStore};
pub use wire::{decode_body, form_fields, looks_like_html, FetchEnvelope, WriteEnvelope};

pub const CRATE_NAME: &str = "crewdesk-store";
