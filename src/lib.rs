pub mod compare;
pub mod config;
pub mod error;
pub mod payload;
pub mod sprite;
pub mod suggestions;

pub use compare::{
    calculate_sprite_difference, try_sprite_difference, validate_sprite_difference,
    DifferenceResult, SpriteComparator,
};
pub use config::ComparatorConfig;
pub use error::SpriteError;
pub use payload::GameConfig;
pub use sprite::{is_sprite_empty, Sprite};
pub use suggestions::{generate_smart_suggestions, Suggestion};
