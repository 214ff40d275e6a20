//! Startup quotes

use rand::seq::SliceRandom;

const QUOTES: &[&str] = &[
    "It's no use going back to yesterday, because I was a different person then.",
    "We're all mad here.",
    "Curiouser and curiouser!",
    "I don't think -- \" \"Then you shouldn't talk.",
    "Your hair wants cutting",
    "Not all who wander are lost.",
    "I am not crazy; my reality is just different from yours.",
];

/// Pick one quote at random
pub fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}
