//! Protobuf types and gRPC client bindings for the uplink metrics service.
//!
//! The message and client code under [`v1`] is generated from
//! `proto/uplink/v1/perf_metrics.proto` and committed so downstream crates
//! build without `protoc`. Regenerate with `prost-build`/`tonic-build` after
//! editing the schema.

pub mod time;

/// Bindings for the `uplink.v1` protobuf package.
pub mod v1 {
    include!("gen/uplink.v1.rs");
}
