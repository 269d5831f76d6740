//! Static page content: facts, breeds, and quiz questions.
//!
//! Everything here is fixed at compile time and ordering is stable, so
//! indices held elsewhere (carousel position, quiz progress) always refer
//! to the same item.

/// A cat breed shown in the carousel.
///
/// `image_url` is an opaque reference for the rendering layer; it is never
/// fetched by the app itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breed {
    pub name: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
}

/// A single quiz question. `answer` is always one of `options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

const FACTS: [&str; 10] = [
    "Cats sleep for about 70% of their lives.",
    "A group of cats is called a clowder.",
    "Cats have over 20 vocalizations, including the purr, meow, and hiss.",
    "The first cat in space was a French cat named Felicette in 1963.",
    "Cats can jump up to six times their length.",
    "A cat's ear is controlled by 32 muscles.",
    "Indoor cats typically live 15-20 years.",
    "A cat's nose print is unique, much like a human fingerprint.",
    "Cats walk like camels and giraffes, moving both right feet, then both left feet.",
    "Whiskers are roughly as wide as the cat's body and help judge tight spaces.",
];

const BREEDS: [Breed; 5] = [
    Breed {
        name: "Siamese",
        image_url: "https://images.unsplash.com/photo-1513245543132-31f507417b26",
        description: "Vocal and social, with striking blue eyes and point coloration.",
    },
    Breed {
        name: "Persian",
        image_url: "https://images.unsplash.com/photo-1518791841217-8f162f1e1131",
        description: "Long-haired and laid-back, happiest on a quiet lap.",
    },
    Breed {
        name: "Maine Coon",
        image_url: "https://images.unsplash.com/photo-1533738363-b7f9aef128ce",
        description: "One of the largest domestic breeds, gentle and dog-like.",
    },
    Breed {
        name: "Bengal",
        image_url: "https://images.unsplash.com/photo-1574158622682-e40e69881006",
        description: "Leopard-spotted and athletic, always looking for the next climb.",
    },
    Breed {
        name: "British Shorthair",
        image_url: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba",
        description: "Round-faced and plush-coated, calm enough for any household.",
    },
];

const QUIZ_QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        prompt: "What is a group of cats called?",
        options: ["A pride", "A clowder", "A pack", "A colony"],
        answer: "A clowder",
    },
    QuizQuestion {
        prompt: "How many muscles control a cat's ear?",
        options: ["12", "20", "32", "48"],
        answer: "32",
    },
    QuizQuestion {
        prompt: "How long do indoor cats typically live?",
        options: ["5-8 years", "10-12 years", "15-20 years", "25-30 years"],
        answer: "15-20 years",
    },
];

/// Ordered list of cat facts shown by the fact generator.
pub fn facts() -> &'static [&'static str] {
    &FACTS
}

/// Ordered list of breeds shown in the carousel.
pub fn breeds() -> &'static [Breed] {
    &BREEDS
}

/// Ordered list of quiz questions.
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUIZ_QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(facts().len(), 10);
        assert_eq!(breeds().len(), 5);
        assert_eq!(quiz_questions().len(), 3);
    }

    #[test]
    fn test_quiz_answers_are_members_of_options() {
        for question in quiz_questions() {
            assert!(
                question.options.contains(&question.answer),
                "answer {:?} missing from options of {:?}",
                question.answer,
                question.prompt
            );
        }
    }

    #[test]
    fn test_known_correct_answers() {
        let answers: Vec<&str> = quiz_questions().iter().map(|q| q.answer).collect();
        assert_eq!(answers, vec!["A clowder", "32", "15-20 years"]);
    }

    #[test]
    fn test_ordering_is_stable_across_calls() {
        assert_eq!(facts(), facts());
        assert_eq!(breeds(), breeds());
        assert_eq!(quiz_questions(), quiz_questions());
    }

    #[test]
    fn test_no_empty_content() {
        assert!(facts().iter().all(|f| !f.is_empty()));
        for breed in breeds() {
            assert!(!breed.name.is_empty());
            assert!(!breed.image_url.is_empty());
            assert!(!breed.description.is_empty());
        }
    }
}
