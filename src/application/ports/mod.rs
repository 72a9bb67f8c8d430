pub mod helix_api;
