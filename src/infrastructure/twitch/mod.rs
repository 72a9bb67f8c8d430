pub mod constants;
pub mod helix_client;
