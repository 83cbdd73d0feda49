//! HTTP route handlers grouped by resource domain.
//!
//! Handlers are annotated with `#[openapi]` so `rocket_okapi` can derive an
//! OpenAPI document automatically. The template download streams CSV rather
//! than JSON and is mounted as a plain Rocket route.

pub mod contacts;
pub mod health;
pub mod imports;
