pub mod search_livestreams;
pub mod top_livestreams;
