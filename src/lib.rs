//! CatWorld: a playful native desktop page all about cats.
//!
//! The interesting part is the interaction state machine in [`app`]: a
//! random fact generator, a breed carousel, a three-question quiz, a
//! scroll-aware back-to-top control, and a persisted theme toggle. The
//! [`ui`] layer builds the FLTK widget tree and forwards every click and
//! scroll as a message for the dispatch loop in `main`.

pub mod app;
pub mod ui;
