//! Inspirational messages shown when a focus session starts.

/// Curated quotes about focus, one of which is included in each focus
/// notification.
pub const INSPIRATIONAL_MESSAGES: &[&str] = &[
    "Deep work is the superpower of the 21st century. - Cal Newport",
    "Focus is saying no to 1,000 other things. - Steve Jobs",
    "The successful warrior is the average man with laser-like focus. - Bruce Lee",
    "Concentrate all your thoughts upon the work at hand. - Alexander Graham Bell",
    "Where focus goes, energy flows. - Tony Robbins",
    "The ability to concentrate is a skill that gets valuable things done.",
    "Single-tasking is the new superpower in a world of distractions.",
    "Your focus determines your reality. - George Lucas",
    "Lack of direction, not lack of time, is the problem. - Zig Ziglar",
    "Focus on being productive instead of busy. - Tim Ferriss",
    "The shorter way to do many things is to do only one thing at a time.",
    "Starve your distractions, feed your focus.",
    "Focus is a matter of deciding what things you're not going to do. - John Carmack",
    "Multitasking is the enemy of focus and excellence.",
    "25 minutes of deep focus beats 2 hours of scattered attention.",
];

/// Picks the message included in a focus notification.
///
/// Selection is stateless and needs no seeding, but sits behind a trait so
/// tests can pin the choice.
#[cfg_attr(test, mockall::automock)]
pub trait MessagePicker: Send + Sync {
    /// Choose one message from the list.
    fn pick(&self, messages: &'static [&'static str]) -> &'static str;
}

/// Uniform random selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl MessagePicker for RandomPicker {
    fn pick(&self, messages: &'static [&'static str]) -> &'static str {
        use rand::seq::SliceRandom;

        messages
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("Stay focused.")
    }
}
