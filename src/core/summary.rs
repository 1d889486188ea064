/// Score bracket a summary template is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBracket {
    Exceptional,
    High,
    Good,
    Moderate,
    Fair,
    Low,
}

impl ScoreBracket {
    /// Inclusive brackets: 90-100, 80-89, 70-79, 60-69, 50-59, 0-49
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBracket::Exceptional,
            80..=89 => ScoreBracket::High,
            70..=79 => ScoreBracket::Good,
            60..=69 => ScoreBracket::Moderate,
            50..=59 => ScoreBracket::Fair,
            _ => ScoreBracket::Low,
        }
    }
}

/// Canned narrative for a score, naming both people
pub fn generate_summary(score: u8, name1: &str, name2: &str) -> String {
    match ScoreBracket::from_score(score) {
        ScoreBracket::Exceptional => format!(
            "{name1} and {name2} are remarkably compatible! You seem made for each other, \
             with striking similarities and complementary strengths across personality, \
             interests and daily habits. A match this close has every chance of growing \
             into a long and happy partnership."
        ),
        ScoreBracket::High => format!(
            "{name1} and {name2} are highly compatible! You line up well on the things that \
             matter, with strong mutual attraction and understanding. The small differences \
             between you tend to complement each other and make the relationship richer."
        ),
        ScoreBracket::Good => format!(
            "{name1} and {name2} have good compatibility. You share enough common ground to \
             build a stable relationship, and enough differences to keep it fresh. With open \
             communication and mutual respect there is real room to grow together."
        ),
        ScoreBracket::Moderate => format!(
            "{name1} and {name2} have moderate compatibility. You click in some areas but will \
             need patience and understanding in others. It takes willingness to compromise \
             on both sides, but handled well this can become a steady partnership."
        ),
        ScoreBracket::Fair => format!(
            "{name1} and {name2} have average compatibility. You may hold different views and \
             habits on important parts of life, so keeping things harmonious will take extra \
             effort. Differences can also be a chance to learn and grow if you both want it."
        ),
        ScoreBracket::Low => format!(
            "{name1} and {name2} have low compatibility. You may differ significantly in \
             several important areas, which can bring more challenges and friction. Still, \
             love is sometimes about overcoming obstacles, and any relationship can work if \
             both people are willing to change and grow for each other."
        ),
    }
}
