use fltk::app;
use fltk::prelude::*;

use cat_world::app::{AppSettings, AppState, Message};
use cat_world::ui::{build_page, ScrollFeed};

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_page(&sender);

    let scroll_feed = ScrollFeed::start(&widgets.scroll, &sender);
    let mut state = AppState::new(widgets, settings, sender);

    state.widgets.wind.show();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::GenerateFact => state.generate_fact(),
                Message::EndFactFlash => state.end_fact_flash(),

                Message::CarouselNext => state.carousel_next(),
                Message::CarouselPrev => state.carousel_prev(),

                Message::QuizAnswer(selected) => state.quiz_answer(&selected),
                Message::QuizReset => state.quiz_reset(),

                Message::ToggleTheme => state.toggle_theme(),

                Message::ScrollChanged(y) => state.on_scroll(y),
                Message::ScrollToTop => state.scroll_to_top(),
                Message::ScrollAnimationTick => state.scroll_animation_tick(),

                Message::SubmitAdoption => state.submit_adoption(),

                Message::OpenLink(url) => state.open_link(url),

                Message::Quit => {
                    // Revoke the scroll subscription before tearing the
                    // window down so no callback runs against a dead view.
                    scroll_feed.stop();
                    app::quit();
                }
            }
        }
    }
}
