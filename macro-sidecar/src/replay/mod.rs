pub mod player;

pub use player::{
    enigo_backend, BackendFactory, MacroPlayer, PlaybackError, PlaybackEvent, PlaybackOptions,
    PlayerTiming,
};
