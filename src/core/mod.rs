// Domain-layer modules and shared errors/models
pub mod prediction {
    pub use crate::prediction::*;
}

pub mod risk {
    pub use crate::risk::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
