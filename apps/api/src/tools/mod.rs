// Resume improvement toolkit.
// Implements: job-description keyword matching, power-word catalog and weak-phrase
// detection, structural resume analytics. Pure functions, no model calls.

pub mod analytics;
pub mod handlers;
pub mod keywords;
pub mod power_words;
