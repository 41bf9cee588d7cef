//! Treatment protocol generation.
//!
//! Maps a detected condition to a protocol bundle (drugs, warnings,
//! follow-up) through an ordered dispatch table, applies allergy-aware drug
//! substitution and age banding, and renders the final report text.

mod builders;
mod dispatch;
mod render;

pub use builders::generate;
pub use dispatch::ProtocolTag;
pub use render::render_report;
