pub mod cli;
pub mod endpoints;
pub mod enrich;
pub mod error;
pub mod fetch;
pub mod model;
pub mod output;
pub mod session;
pub mod term;

#[cfg(test)]
pub(crate) mod testutil;
