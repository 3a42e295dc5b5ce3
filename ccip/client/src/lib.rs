mod approval;
pub mod bindings;
mod client;
mod config;
mod credential;
mod error;
mod gateway;
mod orchestrator;
mod receipt;
mod traits;

pub use {
    approval::*, client::*, config::*, credential::*, error::*, gateway::*, orchestrator::*,
    receipt::*, traits::*,
};
