//! Mission briefing and success screens.

use std::fmt;

use super::RULE_WIDTH;
use crate::mission::Mission;

/// The briefing shown above the tool menu.
pub struct BriefingView(pub Mission);

impl fmt::Display for BriefingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let briefing = self.0.briefing();
        writeln!(f, "🎯 {}", briefing.title)?;
        writeln!(f, "📋 OBJECTIVE: {}", briefing.objective)?;
        writeln!(f)?;
        writeln!(f, "📝 MISSION DETAILS:")?;
        for detail in briefing.details {
            writeln!(f, "   • {detail}")?;
        }
        writeln!(f)?;
        writeln!(f, "💡 INTEL: {}", briefing.hint)?;
        writeln!(f)?;
        writeln!(f, "{}", "─".repeat(RULE_WIDTH))
    }
}

/// The narration shown once a mission is solved.
pub struct MissionSuccess(pub Mission);

impl fmt::Display for MissionSuccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let confetti = "🎉".repeat(20);
        writeln!(f, "{confetti}")?;
        writeln!(f, "✅ MISSION ACCOMPLISHED!")?;
        writeln!(f, "{confetti}")?;
        writeln!(f)?;
        writeln!(f, "📡 TRANSMISSION FROM FIELD AGENT:")?;
        for line in self.0.success_transmission() {
            writeln!(f, "   '{line}'")?;
        }
        writeln!(f)?;
        writeln!(f, "🏆 MISSION COMPLETE - RETURNING TO BASE...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_briefing_view() {
        let output = BriefingView(Mission::NightShift).to_string();
        assert!(output.starts_with("🎯 OPERATION: NIGHT SHIFT\n"));
        assert!(output.contains("   • Agent needs to infiltrate the facility at 1 AM\n"));
        assert!(output.contains("💡 INTEL: Check employee shifts"));
    }

    #[test]
    fn test_mission_success() {
        let output = MissionSuccess(Mission::NightShift).to_string();
        assert!(output.contains("✅ MISSION ACCOMPLISHED!"));
        assert!(output.contains("'I'll create a coffee emergency to distract him.'"));
    }
}
