use serde::{Deserialize, Serialize};

use crate::*;

/// Pieces of the hanged figure, in drawing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigurePart {
    pub const ALL: [FigurePart; 6] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// How many parts are drawn after `wrong` misses out of `max_attempts`.
    ///
    /// The first miss draws the head and the last one completes the figure, misses in between are spread evenly over
    /// the remaining parts whatever the difficulty.
    pub const fn visible_count(wrong: Attempts, max_attempts: Attempts) -> usize {
        let parts = Self::ALL.len();
        if wrong == 0 {
            return 0;
        }
        if wrong >= max_attempts {
            return parts;
        }
        let wrong = wrong as usize;
        let max = max_attempts as usize;
        1 + (wrong - 1) * (parts - 1) / (max - 1)
    }

    /// Parts to draw after `wrong` misses out of `max_attempts`
    pub fn visible(wrong: Attempts, max_attempts: Attempts) -> &'static [FigurePart] {
        static PARTS: [FigurePart; 6] = FigurePart::ALL;
        &PARTS[..Self::visible_count(wrong, max_attempts)]
    }
}
