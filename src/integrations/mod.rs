//! External service integrations.

pub mod scoring_client {
    pub use crate::scoring_client::*;
}
