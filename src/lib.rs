pub mod agent;
pub mod othello;
pub mod otp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;
        pub use itertools::Itertools;

        pub use std::ops::Add;
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::othello::prelude::*;
    pub use super::otp_server::*;
    pub use super::utils::prelude::*;
}
