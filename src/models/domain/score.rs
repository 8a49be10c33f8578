use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum ScoreBand {
    Perfect,  // Every question right
    Poor,     // None right
    Middling, // Anything in between
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Perfect => "perfect",
            ScoreBand::Poor => "poor",
            ScoreBand::Middling => "middling",
        };
        f.write_str(label)
    }
}

/// Classifies a finished quiz. The perfect check wins over the zero check.
pub fn classify(score: usize, total: usize) -> ScoreBand {
    if score == total {
        ScoreBand::Perfect
    } else if score == 0 {
        ScoreBand::Poor
    } else {
        ScoreBand::Middling
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub struct FinalScore {
    pub score: usize,
    pub total: usize,
}

impl FinalScore {
    pub fn band(&self) -> ScoreBand {
        classify(self.score, self.total)
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} correct", self.score, self.total)
    }
}
