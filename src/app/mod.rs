//! Application layer: page state and the logic behind every control.
//!
//! # Structure
//!
//! - `catalog` - Fixed page content (facts, breeds, quiz questions)
//! - `facts`, `carousel`, `quiz`, `scroll`, `adoption` - One component per
//!   interactive feature
//! - `settings` - Persisted preferences (theme)
//! - `state` - Main application coordinator
//! - `messages` - The channel protocol between widgets and the dispatch loop

pub mod adoption;
pub mod carousel;
pub mod catalog;
pub mod error;
pub mod facts;
pub mod messages;
pub mod quiz;
pub mod scroll;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use adoption::{AdoptionIntake, AdoptionRequest, SubmitOutcome};
pub use carousel::BreedCarousel;
pub use catalog::{Breed, QuizQuestion};
pub use error::{AppError, Result};
pub use facts::{FactGenerator, OsRandom, RandomSource};
pub use messages::Message;
pub use quiz::{QuizEngine, QuizState};
pub use scroll::{ScrollWatcher, SCROLL_THRESHOLD};
pub use settings::{AppSettings, ThemeMode};
pub use state::AppState;
