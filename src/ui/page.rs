use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    input::Input,
    prelude::*,
    window::Window,
};
use std::cell::Cell;
use std::rc::Rc;

use crate::app::catalog;
use crate::app::messages::Message;

pub const PAGE_WIDTH: i32 = 880;
pub const PAGE_HEIGHT: i32 = 640;
pub const HEADER_HEIGHT: i32 = 56;

const MARGIN: i32 = 20;
const CONTENT_WIDTH: i32 = PAGE_WIDTH - 2 * MARGIN;

/// How often the scroll feed samples the viewport offset, in seconds.
/// Sampling instead of hooking every wheel event throttles rapid scrolling;
/// the settled position is always delivered.
const SCROLL_POLL_SECS: f64 = 0.05;

/// Footer links. Labels and URLs stay together so the buttons and their
/// callbacks can be built in one pass.
const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com/catworld"),
    ("Twitter", "https://twitter.com/catworld"),
    ("Instagram", "https://instagram.com/catworld"),
    ("GitHub", "https://github.com/catworld/catworld"),
];

/// Every widget the dispatch loop or the theme pass needs to touch later.
///
/// The `Vec` fields hold clones of widgets that only ever get recolored;
/// fltk widgets are cheap handles, so a clone refers to the same widget.
pub struct PageWidgets {
    pub wind: Window,
    pub scroll: Scroll,
    pub header: Group,
    pub title: Frame,
    pub theme_button: Button,
    pub hero: Frame,

    pub cards: Vec<Group>,
    pub card_titles: Vec<Frame>,
    pub text_frames: Vec<Frame>,
    pub dim_frames: Vec<Frame>,

    pub fact_label: Frame,
    pub fact_button: Button,

    pub breed_name: Frame,
    pub breed_desc: Frame,
    pub breed_image_ref: Frame,
    pub prev_button: Button,
    pub next_button: Button,

    pub quiz_progress: Frame,
    pub quiz_prompt: Frame,
    pub option_buttons: Vec<Button>,
    pub reset_button: Button,

    pub name_input: Input,
    pub email_input: Input,
    pub phone_input: Input,
    pub preference_input: Input,
    pub submit_button: Button,
    pub form_status: Frame,

    pub footer: Group,
    pub footer_note: Frame,
    pub link_buttons: Vec<Button>,

    pub back_to_top: Button,
}

fn card_title(x: i32, y: i32, label: &str) -> Frame {
    let mut title = Frame::default()
        .with_pos(x, y)
        .with_size(400, 24)
        .with_label(label);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(15);
    title.set_align(Align::Inside | Align::Left);
    title
}

fn body_frame(x: i32, y: i32, w: i32, h: i32) -> Frame {
    let mut frame = Frame::default().with_pos(x, y).with_size(w, h);
    frame.set_label_size(13);
    frame.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
    frame
}

/// Build the whole page. Widgets never mutate state themselves; every
/// callback just sends a `Message` for the dispatch loop.
pub fn build_page(sender: &Sender<Message>) -> PageWidgets {
    let mut wind = Window::new(100, 100, PAGE_WIDTH, PAGE_HEIGHT, "\u{1f431} CatWorld");
    wind.set_xclass("CatWorld");

    let mut cards = Vec::new();
    let mut card_titles = Vec::new();
    let mut text_frames = Vec::new();
    let mut dim_frames = Vec::new();

    // --- Header (fixed, outside the scroll area) ---

    let mut header = Group::new(0, 0, PAGE_WIDTH, HEADER_HEIGHT, None);
    header.set_frame(FrameType::FlatBox);

    let mut title = Frame::default()
        .with_pos(MARGIN, 0)
        .with_size(240, HEADER_HEIGHT)
        .with_label("\u{1f431} CatWorld");
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(22);
    title.set_align(Align::Inside | Align::Left);

    let mut theme_button = Button::default()
        .with_pos(PAGE_WIDTH - 60, 12)
        .with_size(40, 32);
    theme_button.set_frame(FrameType::FlatBox);
    theme_button.set_tooltip("Toggle light/dark theme");

    header.end();

    // --- Scrollable page body ---

    let mut scroll = Scroll::new(
        0,
        HEADER_HEIGHT,
        PAGE_WIDTH,
        PAGE_HEIGHT - HEADER_HEIGHT,
        None,
    );
    scroll.set_type(ScrollType::Vertical);
    scroll.set_frame(FrameType::FlatBox);

    // Hero banner
    let mut hero = Frame::default()
        .with_pos(MARGIN, 72)
        .with_size(CONTENT_WIDTH, 180)
        .with_label("All About Cats");
    hero.set_frame(FrameType::FlatBox);
    hero.set_label_font(Font::HelveticaBold);
    hero.set_label_size(32);

    // Characteristics card
    let mut char_card = Group::new(MARGIN, 268, 412, 170, None);
    char_card.set_frame(FrameType::FlatBox);
    card_titles.push(card_title(36, 280, "Characteristics of Cats"));
    let mut char_body = body_frame(36, 308, 380, 118);
    char_body.set_label(
        "\u{2022} Independent nature\n\
         \u{2022} Excellent hunters with sharp claws and teeth\n\
         \u{2022} Flexible bodies and quick reflexes\n\
         \u{2022} Keen senses, especially hearing and night vision\n\
         \u{2022} Communicate through vocalizations, body language, and scent",
    );
    text_frames.push(char_body);
    char_card.end();
    cards.push(char_card);

    // Breeds list card, populated from the catalog so the two stay in sync
    let mut breeds_card = Group::new(448, 268, 412, 170, None);
    breeds_card.set_frame(FrameType::FlatBox);
    card_titles.push(card_title(464, 280, "Popular Cat Breeds"));
    let mut breeds_body = body_frame(464, 308, 380, 118);
    let breed_list = catalog::breeds()
        .iter()
        .map(|b| format!("\u{2022} {}", b.name))
        .collect::<Vec<_>>()
        .join("\n");
    breeds_body.set_label(&breed_list);
    text_frames.push(breeds_body);
    breeds_card.end();
    cards.push(breeds_card);

    // Fact generator card
    let mut fact_card = Group::new(MARGIN, 454, CONTENT_WIDTH, 150, None);
    fact_card.set_frame(FrameType::FlatBox);
    card_titles.push(card_title(36, 466, "Cat Fact Generator"));
    let fact_label = body_frame(36, 494, CONTENT_WIDTH - 32, 56);
    text_frames.push(fact_label.clone());
    let mut fact_button = Button::default()
        .with_pos(36, 556).with_size(170, 34)
        .with_label("Generate New Fact");
    fact_button.set_frame(FrameType::FlatBox);
    fact_card.end();
    cards.push(fact_card);

    // Breed carousel card
    let mut carousel_card = Group::new(MARGIN, 620, CONTENT_WIDTH, 170, None);
    carousel_card.set_frame(FrameType::FlatBox);
    card_titles.push(card_title(36, 632, "Breed Spotlight"));
    let mut breed_name = Frame::default().with_pos(36, 660).with_size(CONTENT_WIDTH - 32, 26);
    breed_name.set_label_font(Font::HelveticaBold);
    breed_name.set_label_size(18);
    breed_name.set_align(Align::Inside | Align::Left);
    text_frames.push(breed_name.clone());
    let breed_desc = body_frame(36, 688, CONTENT_WIDTH - 32, 36);
    text_frames.push(breed_desc.clone());
    let mut breed_image_ref = Frame::default().with_pos(36, 728).with_size(600, 20);
    breed_image_ref.set_label_size(11);
    breed_image_ref.set_align(Align::Inside | Align::Left);
    dim_frames.push(breed_image_ref.clone());
    let mut prev_button = Button::default()
        .with_pos(684, 724).with_size(80, 34)
        .with_label("\u{25c0} Prev");
    prev_button.set_frame(FrameType::FlatBox);
    let mut next_button = Button::default()
        .with_pos(772, 724).with_size(80, 34)
        .with_label("Next \u{25b6}");
    next_button.set_frame(FrameType::FlatBox);
    carousel_card.end();
    cards.push(carousel_card);

    // Quiz card
    let mut quiz_card = Group::new(MARGIN, 806, CONTENT_WIDTH, 260, None);
    quiz_card.set_frame(FrameType::FlatBox);
    card_titles.push(card_title(36, 818, "Cat Quiz"));
    let mut quiz_progress = Frame::default().with_pos(536, 818).with_size(308, 24);
    quiz_progress.set_label_size(12);
    quiz_progress.set_align(Align::Inside | Align::Right);
    dim_frames.push(quiz_progress.clone());
    let mut quiz_prompt = Frame::default().with_pos(36, 848).with_size(CONTENT_WIDTH - 32, 30);
    quiz_prompt.set_label_size(15);
    quiz_prompt.set_align(Align::Inside | Align::Left);
    text_frames.push(quiz_prompt.clone());

    let mut option_buttons = Vec::new();
    for row in 0..4 {
        let mut option = Button::default().with_pos(36, 884 + row * 38).with_size(420, 34);
        option.set_frame(FrameType::FlatBox);
        option.set_align(Align::Inside | Align::Left);
        option_buttons.push(option);
    }

    let mut reset_button = Button::default()
        .with_pos(36, 922).with_size(170, 34)
        .with_label("Play Again");
    reset_button.set_frame(FrameType::FlatBox);
    reset_button.hide();
    quiz_card.end();
    cards.push(quiz_card);

    // Adoption form card
    let mut adoption_card = Group::new(MARGIN, 1082, CONTENT_WIDTH, 300, None);
    adoption_card.set_frame(FrameType::FlatBox);
    card_titles.push(card_title(36, 1094, "Adopt a Cat"));

    let field = |label: &str, y: i32, text_frames: &mut Vec<Frame>| -> Input {
        let mut caption = Frame::default().with_pos(36, y).with_size(120, 30).with_label(label);
        caption.set_label_size(13);
        caption.set_align(Align::Inside | Align::Left);
        text_frames.push(caption);
        let mut input = Input::default().with_pos(166, y).with_size(380, 30);
        input.set_text_size(13);
        input
    };

    let name_input = field("Name", 1130, &mut text_frames);
    let email_input = field("Email", 1168, &mut text_frames);
    let phone_input = field("Phone", 1206, &mut text_frames);
    let preference_input = field("Preferred breed", 1244, &mut text_frames);

    let mut submit_button = Button::default()
        .with_pos(166, 1286).with_size(140, 34)
        .with_label("Submit");
    submit_button.set_frame(FrameType::FlatBox);
    let mut form_status = Frame::default().with_pos(320, 1286).with_size(500, 34);
    form_status.set_label_size(13);
    form_status.set_align(Align::Inside | Align::Left);
    text_frames.push(form_status.clone());
    adoption_card.end();
    cards.push(adoption_card);

    // Footer
    let mut footer = Group::new(MARGIN, 1398, CONTENT_WIDTH, 110, None);
    footer.set_frame(FrameType::FlatBox);
    let mut link_buttons = Vec::new();
    for (i, (label, _)) in FOOTER_LINKS.iter().enumerate() {
        let mut link = Button::default()
            .with_pos(230 + (i as i32) * 120, 1412)
            .with_size(110, 30)
            .with_label(label);
        link.set_frame(FrameType::FlatBox);
        link_buttons.push(link);
    }
    let mut footer_note = Frame::default()
        .with_pos(36, 1452).with_size(CONTENT_WIDTH - 32, 40)
        .with_label("\u{00a9} 2025 CatWorld. All rights reserved.");
    footer_note.set_label_size(12);
    footer.end();

    // Bottom padding so the footer is not flush against the scroll edge
    Frame::default().with_pos(MARGIN, 1508).with_size(CONTENT_WIDTH, 16);

    scroll.end();

    // Floating back-to-top control; added after the scroll group so it
    // stays put while the page scrolls under it. Hidden until the
    // watcher reports the threshold was passed.
    let mut back_to_top = Button::default()
        .with_pos(PAGE_WIDTH - 76, PAGE_HEIGHT - 64).with_size(60, 48)
        .with_label("\u{2191} Top");
    back_to_top.set_frame(FrameType::FlatBox);
    back_to_top.set_tooltip("Back to top");
    back_to_top.hide();

    wind.end();
    wind.make_resizable(false);

    // --- Wiring: every widget just sends a message ---

    let s = sender;
    theme_button.set_callback({ let s = *s; move |_| s.send(Message::ToggleTheme) });
    fact_button.set_callback({ let s = *s; move |_| s.send(Message::GenerateFact) });
    prev_button.set_callback({ let s = *s; move |_| s.send(Message::CarouselPrev) });
    next_button.set_callback({ let s = *s; move |_| s.send(Message::CarouselNext) });
    for option in &mut option_buttons {
        option.set_callback({ let s = *s; move |b| s.send(Message::QuizAnswer(b.label())) });
    }
    reset_button.set_callback({ let s = *s; move |_| s.send(Message::QuizReset) });
    submit_button.set_callback({ let s = *s; move |_| s.send(Message::SubmitAdoption) });
    back_to_top.set_callback({ let s = *s; move |_| s.send(Message::ScrollToTop) });
    for (link, (_, url)) in link_buttons.iter_mut().zip(FOOTER_LINKS) {
        link.set_callback({ let s = *s; move |_| s.send(Message::OpenLink(url)) });
    }
    wind.set_callback({ let s = *s; move |_| s.send(Message::Quit) });

    PageWidgets {
        wind,
        scroll,
        header,
        title,
        theme_button,
        hero,
        cards,
        card_titles,
        text_frames,
        dim_frames,
        fact_label,
        fact_button,
        breed_name,
        breed_desc,
        breed_image_ref,
        prev_button,
        next_button,
        quiz_progress,
        quiz_prompt,
        option_buttons,
        reset_button,
        name_input,
        email_input,
        phone_input,
        preference_input,
        submit_button,
        form_status,
        footer,
        footer_note,
        link_buttons,
        back_to_top,
    }
}

/// Revocable subscription to the page's scroll offset.
///
/// A repeating FLTK timeout samples the scroll position and forwards
/// changes as `Message::ScrollChanged`. Once `stop` is called (or the feed
/// is dropped) the timeout fires one last time, sees the cleared flag,
/// declines to reschedule, and its captured widget handle is released.
pub struct ScrollFeed {
    active: Rc<Cell<bool>>,
}

impl ScrollFeed {
    pub fn start(scroll: &Scroll, sender: &Sender<Message>) -> Self {
        let active = Rc::new(Cell::new(true));
        let flag = active.clone();
        let scroll = scroll.clone();
        let s = *sender;
        let mut last = scroll.yposition();

        fltk::app::add_timeout3(SCROLL_POLL_SECS, move |handle| {
            if !flag.get() {
                return;
            }
            let y = scroll.yposition();
            if y != last {
                last = y;
                s.send(Message::ScrollChanged(y));
            }
            fltk::app::repeat_timeout3(SCROLL_POLL_SECS, handle);
        });

        Self { active }
    }

    pub fn stop(&self) {
        self.active.set(false);
    }
}

impl Drop for ScrollFeed {
    fn drop(&mut self) {
        self.active.set(false);
    }
}
