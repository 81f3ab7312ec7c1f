mod api;
mod provider;

pub use provider::OmdbProvider;
