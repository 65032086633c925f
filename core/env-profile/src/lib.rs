// core/env-profile/src/lib.rs
// Environment endpoint profiles for the multi-chain storage web frontend

pub mod error;
pub mod key;
pub mod literal;
pub mod network;
pub mod profile;
pub mod render;
pub mod variant;

pub use error::ProfileError;
pub use key::{EnvKey, KeyKind};
pub use literal::QuotedLiteral;
pub use network::{url_join, Network};
pub use profile::{EnvProfile, TEST_ENTRIES};
pub use render::{
    check_module, define_entries, parse_module, render, render_dotenv, render_module, RenderFormat,
};
pub use variant::EnvironmentVariant;
