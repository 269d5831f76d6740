/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them in delivery order.
#[derive(Debug, Clone)]
pub enum Message {
    // Fact generator
    GenerateFact,
    EndFactFlash,

    // Breed carousel
    CarouselNext,
    CarouselPrev,

    // Quiz
    QuizAnswer(String),
    QuizReset,

    // Theme
    ToggleTheme,

    // Scrolling
    ScrollChanged(i32),
    ScrollToTop,
    ScrollAnimationTick,

    // Adoption form
    SubmitAdoption,

    // Footer
    OpenLink(&'static str),

    Quit,
}
