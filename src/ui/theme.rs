use fltk::{enums::Color, prelude::*};

use super::page::PageWidgets;

/// Accent used for primary buttons and the fact-label flash.
pub fn accent_color(is_dark: bool) -> Color {
    if is_dark {
        Color::from_rgb(120, 140, 255)
    } else {
        Color::from_rgb(70, 90, 180)
    }
}

/// Primary text color for the active mode.
pub fn text_color(is_dark: bool) -> Color {
    if is_dark {
        Color::from_rgb(220, 220, 220)
    } else {
        Color::from_rgb(25, 25, 30)
    }
}

/// Recolor the whole page for the given mode and redraw.
///
/// Widget visibility and labels are owned by the dispatch loop; this pass
/// only touches colors and the toggle glyph.
pub fn apply_theme(widgets: &mut PageWidgets, is_dark: bool) {
    let text = text_color(is_dark);
    let accent = accent_color(is_dark);

    let (window_bg, header_bg, card_bg, hero_bg, dim, button_bg, input_bg, footer_bg, footer_text) =
        if is_dark {
            (
                Color::from_rgb(25, 25, 28),
                Color::from_rgb(35, 35, 40),
                Color::from_rgb(38, 38, 44),
                Color::from_rgb(45, 40, 80),
                Color::from_rgb(150, 150, 150),
                Color::from_rgb(55, 55, 64),
                Color::from_rgb(45, 45, 50),
                Color::from_rgb(15, 15, 18),
                Color::from_rgb(200, 200, 205),
            )
        } else {
            (
                Color::from_rgb(240, 240, 243),
                Color::from_rgb(228, 228, 234),
                Color::White,
                Color::from_rgb(70, 90, 180),
                Color::from_rgb(100, 100, 100),
                Color::from_rgb(222, 225, 233),
                Color::White,
                Color::from_rgb(45, 45, 52),
                Color::from_rgb(225, 225, 228),
            )
        };

    widgets.wind.set_color(window_bg);
    widgets.scroll.set_color(window_bg);
    widgets.header.set_color(header_bg);
    widgets.title.set_label_color(text);

    // Hero keeps light text in both modes; the banner is always a dark block
    widgets.hero.set_color(hero_bg);
    widgets.hero.set_label_color(Color::White);

    for card in &mut widgets.cards {
        card.set_color(card_bg);
    }
    for title in &mut widgets.card_titles {
        title.set_label_color(text);
    }
    for frame in &mut widgets.text_frames {
        frame.set_label_color(text);
    }
    for frame in &mut widgets.dim_frames {
        frame.set_label_color(dim);
    }

    // Primary actions get the accent, secondary ones the neutral button color
    for button in [
        &mut widgets.fact_button,
        &mut widgets.submit_button,
        &mut widgets.back_to_top,
        &mut widgets.reset_button,
    ] {
        button.set_color(accent);
        button.set_label_color(Color::White);
    }
    for button in widgets
        .option_buttons
        .iter_mut()
        .chain([&mut widgets.prev_button, &mut widgets.next_button])
    {
        button.set_color(button_bg);
        button.set_label_color(text);
    }

    for input in [
        &mut widgets.name_input,
        &mut widgets.email_input,
        &mut widgets.phone_input,
        &mut widgets.preference_input,
    ] {
        input.set_color(input_bg);
        input.set_text_color(text);
        input.set_cursor_color(text);
    }

    widgets.footer.set_color(footer_bg);
    widgets.footer_note.set_label_color(footer_text);
    for link in &mut widgets.link_buttons {
        link.set_color(footer_bg);
        link.set_label_color(footer_text);
    }

    // Glyph shows the mode you would switch to
    widgets.theme_button.set_color(header_bg);
    widgets.theme_button.set_label_color(text);
    widgets
        .theme_button
        .set_label(if is_dark { "\u{2600}" } else { "\u{263d}" });

    widgets.wind.redraw();
}
