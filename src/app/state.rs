use fltk::{app::Sender, prelude::*};

use super::adoption::{AdoptionIntake, AdoptionRequest};
use super::carousel::BreedCarousel;
use super::facts::{FactGenerator, OsRandom};
use super::messages::Message;
use super::quiz::{QuizEngine, QuizState};
use super::scroll::ScrollWatcher;
use super::settings::AppSettings;
use crate::ui::page::PageWidgets;
use crate::ui::theme::{accent_color, apply_theme, text_color};

/// How long the fact label keeps the accent color after a regenerate.
const FACT_FLASH_SECS: f64 = 0.35;

/// Seconds between animated scroll-to-top steps (roughly one frame).
const SCROLL_TICK_SECS: f64 = 0.016;

/// Owns all interactive page state and the built widget tree.
///
/// Widgets never mutate state themselves; the dispatch loop in `main`
/// receives their messages and calls into here, so every mutation has a
/// single owner.
pub struct AppState {
    pub widgets: PageWidgets,
    settings: AppSettings,
    facts: FactGenerator<OsRandom>,
    carousel: BreedCarousel,
    quiz: QuizEngine,
    scroll_watcher: ScrollWatcher,
    intake: AdoptionIntake,
    sender: Sender<Message>,
}

impl AppState {
    pub fn new(widgets: PageWidgets, settings: AppSettings, sender: Sender<Message>) -> Self {
        let mut state = Self {
            widgets,
            settings,
            facts: FactGenerator::new(),
            carousel: BreedCarousel::new(),
            quiz: QuizEngine::new(),
            scroll_watcher: ScrollWatcher::new(),
            intake: AdoptionIntake::new(),
            sender,
        };

        let dark = state.dark_mode();
        apply_theme(&mut state.widgets, dark);
        state.widgets.fact_label.set_label(state.facts.current());
        state.render_breed();
        state.render_quiz();
        state
    }

    fn dark_mode(&self) -> bool {
        self.settings.theme_mode.is_dark()
    }

    // --- Fact generator ---

    pub fn generate_fact(&mut self) {
        let fact = self.facts.regenerate();
        self.widgets.fact_label.set_label(fact);

        // Brief accent flash in place of the original fade transition;
        // purely cosmetic and never awaited by other state changes.
        self.widgets
            .fact_label
            .set_label_color(accent_color(self.dark_mode()));
        self.widgets.fact_label.redraw();

        let s = self.sender;
        fltk::app::add_timeout3(FACT_FLASH_SECS, move |_| {
            s.send(Message::EndFactFlash);
        });
    }

    pub fn end_fact_flash(&mut self) {
        self.widgets
            .fact_label
            .set_label_color(text_color(self.dark_mode()));
        self.widgets.fact_label.redraw();
    }

    // --- Breed carousel ---

    pub fn carousel_next(&mut self) {
        self.carousel.next();
        self.render_breed();
    }

    pub fn carousel_prev(&mut self) {
        self.carousel.prev();
        self.render_breed();
    }

    fn render_breed(&mut self) {
        let breed = self.carousel.current();
        self.widgets.breed_name.set_label(breed.name);
        self.widgets.breed_desc.set_label(breed.description);
        self.widgets
            .breed_image_ref
            .set_label(&format!("Photo: {}", breed.image_url));
        self.widgets.scroll.redraw();
    }

    // --- Quiz ---

    pub fn quiz_answer(&mut self, selected: &str) {
        self.quiz.answer(selected);
        self.render_quiz();
    }

    pub fn quiz_reset(&mut self) {
        self.quiz.reset();
        self.render_quiz();
    }

    fn render_quiz(&mut self) {
        let count = self.quiz.question_count();
        match self.quiz.state() {
            QuizState::InProgress { index, score } => {
                let question = self
                    .quiz
                    .current_question()
                    .expect("in-progress quiz always has a current question");
                self.widgets.quiz_progress.set_label(&format!(
                    "Question {} of {}  \u{2022}  Score {}",
                    index + 1,
                    count,
                    score
                ));
                self.widgets.quiz_prompt.set_label(question.prompt);
                for (button, option) in self
                    .widgets
                    .option_buttons
                    .iter_mut()
                    .zip(question.options)
                {
                    button.set_label(option);
                    button.show();
                }
                self.widgets.reset_button.hide();
            }
            QuizState::Completed { score } => {
                self.widgets.quiz_progress.set_label("Quiz complete");
                self.widgets
                    .quiz_prompt
                    .set_label(&format!("You scored {} of {}!", score, count));
                for button in &mut self.widgets.option_buttons {
                    button.hide();
                }
                self.widgets.reset_button.show();
            }
        }
        self.widgets.scroll.redraw();
    }

    // --- Theme ---

    pub fn toggle_theme(&mut self) {
        self.settings.theme_mode = self.settings.theme_mode.toggle();
        let dark = self.dark_mode();
        apply_theme(&mut self.widgets, dark);

        // Persist the choice; a failed save only costs the preference
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    // --- Scrolling ---

    pub fn on_scroll(&mut self, scroll_y: i32) {
        if self.scroll_watcher.observe(scroll_y) {
            if self.scroll_watcher.past_threshold() {
                self.widgets.back_to_top.show();
            } else {
                self.widgets.back_to_top.hide();
            }
            self.widgets.wind.redraw();
        }
    }

    /// Start the animated scroll back to the top. Fire-and-forget: each
    /// tick moves a step and schedules the next until the offset reaches
    /// zero. A user scroll mid-flight just changes where the next step
    /// starts from.
    pub fn scroll_to_top(&mut self) {
        self.scroll_animation_tick();
    }

    pub fn scroll_animation_tick(&mut self) {
        let y = self.widgets.scroll.yposition();
        if y <= 0 {
            return;
        }

        let step = (y / 4).max(40);
        let new_y = (y - step).max(0);
        self.widgets.scroll.scroll_to(0, new_y);
        self.widgets.scroll.redraw();

        if new_y > 0 {
            let s = self.sender;
            fltk::app::add_timeout3(SCROLL_TICK_SECS, move |_| {
                s.send(Message::ScrollAnimationTick);
            });
        }
    }

    // --- Adoption form ---

    pub fn submit_adoption(&mut self) {
        let request = AdoptionRequest {
            name: self.widgets.name_input.value(),
            email: self.widgets.email_input.value(),
            phone: self.widgets.phone_input.value(),
            cat_preference: self.widgets.preference_input.value(),
        };
        let name = request.name.clone();

        self.intake.submit(request);

        let status = if name.trim().is_empty() {
            "Thanks! Your adoption request was received.".to_string()
        } else {
            format!("Thanks, {}! Your adoption request was received.", name.trim())
        };
        self.widgets.form_status.set_label(&status);

        self.widgets.name_input.set_value("");
        self.widgets.email_input.set_value("");
        self.widgets.phone_input.set_value("");
        self.widgets.preference_input.set_value("");
        self.widgets.scroll.redraw();
    }

    // --- Footer ---

    pub fn open_link(&self, url: &str) {
        if let Err(e) = open::that(url) {
            eprintln!("Failed to open {}: {}", url, e);
        }
    }
}
