pub(crate) mod agent;
pub(crate) mod error;
pub(crate) mod ucci;
pub mod xiangqi;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        error::{Error, Kind, Result},
        ucci::{Server, UcciOptions},
        xiangqi::*,
    };
}
