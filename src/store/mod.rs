mod playlist;

pub use playlist::PlaylistStore;
