//! Payload marker sniffing.
//!
//! The relay does not type its events. Two literal substrings carry meaning:
//! a battle-ended marker and the summary fragment's class attribute. The two
//! checks are independent, a single payload may carry both.

/// Substrings announcing the end of the battle.
pub const ENDED_MARKERS: [&str; 2] = ["|win|", "Batalla terminada"];

/// Substring identifying a full summary fragment.
pub const SUMMARY_MARKER: &str = "class='battle-summary'";

/// Result of sniffing one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayloadKind {
    /// The payload announces the end of the battle
    pub ended: bool,
    /// The payload is a summary fragment replacing the summary panel
    pub summary: bool,
}

/// Sniff a payload for the ended and summary markers.
pub fn classify_payload(payload: &str) -> PayloadKind {
    PayloadKind {
        ended: ENDED_MARKERS.iter().any(|marker| payload.contains(marker)),
        summary: payload.contains(SUMMARY_MARKER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        assert_eq!(classify_payload("Turn 1"), PayloadKind::default());
    }

    #[test]
    fn test_win_marker() {
        let kind = classify_payload("|win| foo");
        assert!(kind.ended);
        assert!(!kind.summary);
    }

    #[test]
    fn test_spanish_ended_marker() {
        let kind = classify_payload("<p class='success'>¡Batalla terminada! El servidor sigue funcionando.</p>");
        assert!(kind.ended);
    }

    #[test]
    fn test_summary_marker() {
        let kind = classify_payload("<div class='battle-summary'><h3>Turno: 3</h3></div>");
        assert!(kind.summary);
        assert!(!kind.ended);
    }

    #[test]
    fn test_double_quoted_class_is_not_summary() {
        let kind = classify_payload("<div class=\"battle-summary\"></div>");
        assert!(!kind.summary);
    }

    #[test]
    fn test_both_markers() {
        let kind = classify_payload("<div class='battle-summary'>|win|p1</div>");
        assert!(kind.ended);
        assert!(kind.summary);
    }

    #[test]
    fn test_lose_is_not_ended() {
        assert!(!classify_payload("<p class='logline'>|lose|p2</p>").ended);
    }
}
