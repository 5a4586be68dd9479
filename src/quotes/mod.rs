//! Motivational quotes and the startup-quote gate.

use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Theme of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteCategory {
    General,
    Workout,
    Nutrition,
    Goals,
    Persistence,
}

/// A motivational quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationalQuote {
    pub id: u32,
    pub text: &'static str,
    pub category: QuoteCategory,
}

const QUOTES: &[MotivationalQuote] = &[
    MotivationalQuote {
        id: 1,
        text: "Every workout counts. Show up today and your future self will thank you.",
        category: QuoteCategory::General,
    },
    MotivationalQuote {
        id: 2,
        text: "Small steps every day add up to big results.",
        category: QuoteCategory::General,
    },
    MotivationalQuote {
        id: 3,
        text: "The only bad workout is the one that didn't happen.",
        category: QuoteCategory::Workout,
    },
    MotivationalQuote {
        id: 4,
        text: "Sweat now, shine later.",
        category: QuoteCategory::Workout,
    },
    MotivationalQuote {
        id: 5,
        text: "Eat to fuel your body, not to feed your emotions.",
        category: QuoteCategory::Nutrition,
    },
    MotivationalQuote {
        id: 6,
        text: "Good nutrition is a habit, not a diet.",
        category: QuoteCategory::Nutrition,
    },
    MotivationalQuote {
        id: 7,
        text: "A goal without a plan is just a wish. Write yours down.",
        category: QuoteCategory::Goals,
    },
    MotivationalQuote {
        id: 8,
        text: "Set the goal, track the progress, celebrate the win.",
        category: QuoteCategory::Goals,
    },
    MotivationalQuote {
        id: 9,
        text: "Progress, not perfection.",
        category: QuoteCategory::Persistence,
    },
    MotivationalQuote {
        id: 10,
        text: "Don't break the chain. One more day makes the streak.",
        category: QuoteCategory::Persistence,
    },
];

/// The full quote catalog.
pub fn all_quotes() -> &'static [MotivationalQuote] {
    QUOTES
}

/// Quotes in one category.
pub fn by_category(category: QuoteCategory) -> Vec<&'static MotivationalQuote> {
    QUOTES.iter().filter(|q| q.category == category).collect()
}

/// Pick a quote at random.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static MotivationalQuote {
    // The catalog is a non-empty constant.
    QUOTES.choose(rng).unwrap_or(&QUOTES[0])
}

/// Whether a startup quote is due.
///
/// A quote is due when none has been shown yet, or when strictly more than
/// `interval_hours` have passed since the last one.
pub fn startup_quote_due(
    last_shown: Option<NaiveDateTime>,
    now: NaiveDateTime,
    interval_hours: u32,
) -> bool {
    match last_shown {
        None => true,
        Some(last) => now - last > Duration::hours(i64::from(interval_hours)),
    }
}
