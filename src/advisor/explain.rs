//! Human-readable "why this?" report for a recommendation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::advisor::context::HoleContext;
use crate::advisor::engine::Recommendation;
use crate::core::types::{Grade, HoleNumber, Player};

/// Render a shot log as letters, or a dash when empty
pub fn letters(grades: &[Grade]) -> String {
    if grades.is_empty() {
        return "—".to_string();
    }
    grades
        .iter()
        .map(|g| g.letter().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Par, strokes received and the resulting net par for both players
pub fn net_targets(ctx: &HoleContext<'_>) -> String {
    let (a, b) = (Player::A, Player::B);
    format!(
        "Par {}. Strokes here: {} {}, {} {}. Net par: {} {}, {} {}.",
        ctx.par,
        ctx.name(a),
        ctx.strokes(a),
        ctx.name(b),
        ctx.strokes(b),
        ctx.name(a),
        ctx.par + ctx.strokes(a),
        ctx.name(b),
        ctx.par + ctx.strokes(b)
    )
}

/// Everything behind a recommendation, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub hole: u8,
    pub par: u8,
    pub rating: u8,
    pub names: [String; 2],
    pub grades: [String; 2],
    pub strength: [f64; 2],
    pub day2: bool,
    pub improve_holes: Vec<u8>,
    pub expected_net_advantage: f64,
    pub attacker: Option<String>,
    pub rules_fired: Vec<String>,
    pub net_targets: String,
}

impl Explanation {
    pub fn new(
        ctx: &HoleContext<'_>,
        recommendation: &Recommendation,
        day2: bool,
        improve_holes: &[HoleNumber],
    ) -> Self {
        Self {
            hole: ctx.hole.number(),
            par: ctx.par,
            rating: ctx.rating,
            names: Player::ALL.map(|p| ctx.name(p).to_string()),
            grades: Player::ALL.map(|p| letters(ctx.log(p))),
            strength: Player::ALL.map(|p| ctx.strength(p)),
            day2,
            improve_holes: improve_holes.iter().map(|h| h.number()).collect(),
            expected_net_advantage: recommendation.expected_net_advantage,
            attacker: recommendation
                .recommended_attacker
                .map(|p| ctx.name(p).to_string()),
            rules_fired: recommendation.rules_fired.clone(),
            net_targets: net_targets(ctx),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let improve = if self.improve_holes.is_empty() {
            "—".to_string()
        } else {
            self.improve_holes
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let attacker = self
            .attacker
            .as_ref()
            .map(|name| format!(" for {}", name))
            .unwrap_or_default();

        let mut lines = vec![
            format!("Hole: {} (Par {}, HCP {})", self.hole, self.par, self.rating),
            format!("{} grades: {}", self.names[0], self.grades[0]),
            format!("{} grades: {}", self.names[1], self.grades[1]),
            format!(
                "Per-hole strength: {} {:.2} · {} {:.2}",
                self.names[0], self.strength[0], self.names[1], self.strength[1]
            ),
            format!(
                "Day-2 bias: {} · Improve list: {}",
                if self.day2 { "ON" } else { "OFF" },
                improve
            ),
            format!(
                "Expected Net Advantage (ATTACK vs ANCHOR): {:+.2}{}",
                self.expected_net_advantage, attacker
            ),
            "Rules fired:".to_string(),
        ];
        if self.rules_fired.is_empty() {
            lines.push("  - (none yet)".to_string());
        } else {
            lines.extend(self.rules_fired.iter().map(|r| format!("  - {}", r)));
        }
        lines
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::engine::advise;
    use crate::core::config::AdvisoryConfig;
    use crate::course::{Course, Team};

    #[test]
    fn test_letters() {
        assert_eq!(letters(&[]), "—");
        assert_eq!(letters(&[Grade::GOOD, Grade::PENALTY]), "B F");
    }

    #[test]
    fn test_net_targets() {
        let (course, team) = (Course::default(), Team::default());
        let ctx = HoleContext::new(&course, &team, HoleNumber::new(5).unwrap(), [19, 13], [&[], &[]]);
        assert_eq!(
            net_targets(&ctx),
            "Par 4. Strokes here: Matt 2, Mike 1. Net par: Matt 6, Mike 5."
        );
    }

    #[test]
    fn test_explanation_lines() {
        let (course, team) = (Course::default(), Team::default());
        let matt = [Grade::PERFECT];
        let hole = HoleNumber::new(5).unwrap();
        let ctx = HoleContext::new(&course, &team, hole, [19, 13], [&matt[..], &[]]);
        let rec = advise(&ctx, &AdvisoryConfig::default());
        let explanation = Explanation::new(&ctx, &rec, true, &[hole, HoleNumber::new(7).unwrap()]);

        let lines = explanation.lines();
        assert_eq!(lines[0], "Hole: 5 (Par 4, HCP 1)");
        assert_eq!(lines[1], "Matt grades: A");
        assert_eq!(lines[2], "Mike grades: —");
        assert_eq!(lines[3], "Per-hole strength: Matt 0.20 · Mike 0.50");
        assert_eq!(lines[4], "Day-2 bias: ON · Improve list: 5, 7");
        assert_eq!(lines[5], "Expected Net Advantage (ATTACK vs ANCHOR): +0.42 for Mike");
        assert_eq!(lines[6], "Rules fired:");
        assert_eq!(lines[7], "  - Matt safe (≥B).");
    }

    #[test]
    fn test_explanation_without_attacker() {
        let (course, team) = (Course::default(), Team::default());
        let ctx = HoleContext::new(&course, &team, HoleNumber::new(1).unwrap(), [19, 13], [&[], &[]]);
        let mut rec = advise(&ctx, &AdvisoryConfig::default());
        rec.rules_fired.clear();
        let text = Explanation::new(&ctx, &rec, false, &[]).to_string();
        assert!(text.contains("Day-2 bias: OFF · Improve list: —"));
        assert!(text.contains("(ATTACK vs ANCHOR): +0.00\n"));
        assert!(text.contains("  - (none yet)"));
    }
}
