use crate::models::{ColorClass, DailyInputs, DailyResults, Status, SwitchLevel};

impl Status {
    pub fn color_class(self) -> ColorClass {
        match self {
            Status::Focused => ColorClass::Green,
            Status::Drifting => ColorClass::Yellow,
            Status::BurnoutRisk => ColorClass::Red,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Focused => "You are in a good flow state. Keep it up!",
            Status::Drifting => "Your focus is fragmented. Try single-tasking.",
            Status::BurnoutRisk => "High fatigue indicators detected. Prioritize rest today.",
        }
    }

    /// Guidance tips for this status, in display order.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Status::Focused => &[
                "💧 Stay hydrated to maintain these levels.",
                "👀 Follow the 20-20-20 rule for eye health.",
            ],
            Status::Drifting => &[
                "🔕 Turn off notifications for the next hour.",
                "⏱️ Try the Pomodoro technique (25m work / 5m break).",
                "📝 Write down your top 3 tasks and hide the rest.",
            ],
            Status::BurnoutRisk => &[
                "🛑 Stop looking at screens for at least 30 minutes.",
                "💤 Aim for 8 hours of sleep tonight.",
                "🌳 Go for a walk outside without your phone.",
            ],
        }
    }
}

/// Scores one day's inputs. Pure and total: any numeric inputs produce a
/// result, scores always land in [0, 100].
pub fn compute(inputs: &DailyInputs) -> DailyResults {
    let mut burnout: i32 = 0;

    // Screen time: highest crossed threshold wins, the brackets do not stack.
    if inputs.screen_time > 12.0 {
        burnout += 50;
    } else if inputs.screen_time > 8.0 {
        burnout += 30;
    } else if inputs.screen_time > 5.0 {
        burnout += 10;
    }

    if inputs.sleep < 5.0 {
        burnout += 30;
    } else if inputs.sleep < 7.0 {
        burnout += 15;
    }

    if !inputs.breaks {
        burnout += 20;
    }

    let mut focus: i32 = 100;

    focus -= match inputs.switches {
        SwitchLevel::High => 30,
        SwitchLevel::Medium => 15,
        SwitchLevel::Low => 0,
    };

    // Self-rating 1..5: 5 costs nothing, 1 costs 40.
    focus -= (5 - i32::from(inputs.focus)) * 10;

    // Fatigue bleeds into focus once burnout passes 60.
    if burnout > 60 {
        focus -= 15;
    }

    let burnout_score = burnout.clamp(0, 100) as u8;
    let focus_stability = focus.clamp(0, 100) as u8;

    let status = if burnout_score > 65 {
        Status::BurnoutRisk
    } else if focus_stability < 50 {
        Status::Drifting
    } else {
        Status::Focused
    };

    DailyResults {
        burnout_score,
        focus_stability,
        status,
        color_class: status.color_class(),
        message: status.message().to_string(),
        tips: status.tips().iter().map(|tip| tip.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        screen_time: f64,
        sleep: f64,
        breaks: bool,
        switches: SwitchLevel,
        focus: u8,
    ) -> DailyInputs {
        DailyInputs {
            screen_time,
            sleep,
            breaks,
            switches,
            focus,
        }
    }

    #[test]
    fn worst_day_pins_both_scores() {
        let results = compute(&inputs(13.0, 4.0, false, SwitchLevel::High, 1));
        assert_eq!(results.burnout_score, 100);
        // 100 - 30 (high switching) - 40 (focus 1) - 15 (fatigue) = 15.
        assert_eq!(results.focus_stability, 15);
        assert_eq!(results.status, Status::BurnoutRisk);
        assert_eq!(results.color_class, ColorClass::Red);
        assert_eq!(results.tips.len(), 3);
    }

    #[test]
    fn calm_day_is_focused() {
        let results = compute(&inputs(3.0, 8.0, true, SwitchLevel::Low, 5));
        assert_eq!(results.burnout_score, 0);
        assert_eq!(results.focus_stability, 100);
        assert_eq!(results.status, Status::Focused);
        assert_eq!(results.tips.len(), 2);
    }

    #[test]
    fn middling_day_stays_focused() {
        let results = compute(&inputs(6.0, 6.0, true, SwitchLevel::Medium, 3));
        assert_eq!(results.burnout_score, 25);
        assert_eq!(results.focus_stability, 65);
        assert_eq!(results.status, Status::Focused);
    }

    #[test]
    fn screen_time_brackets_do_not_stack() {
        let at_eight = compute(&inputs(8.0, 8.0, true, SwitchLevel::Low, 5));
        let past_eight = compute(&inputs(8.1, 8.0, true, SwitchLevel::Low, 5));
        assert_eq!(at_eight.burnout_score, 10);
        assert_eq!(past_eight.burnout_score, 30);
    }

    #[test]
    fn burnout_outranks_good_focus() {
        // 50 + 30 = 80 burnout with an otherwise steady day.
        let results = compute(&inputs(13.0, 4.0, true, SwitchLevel::Low, 5));
        assert_eq!(results.burnout_score, 80);
        assert!(results.focus_stability >= 50);
        assert_eq!(results.status, Status::BurnoutRisk);
    }

    #[test]
    fn fatigue_penalty_starts_above_sixty() {
        // Exactly 60 burnout: no cross-metric penalty.
        let at_sixty = compute(&inputs(9.0, 4.0, true, SwitchLevel::Low, 5));
        assert_eq!(at_sixty.burnout_score, 60);
        assert_eq!(at_sixty.focus_stability, 100);

        // 80 burnout: focus loses the extra 15.
        let past_sixty = compute(&inputs(9.0, 4.0, false, SwitchLevel::Low, 5));
        assert_eq!(past_sixty.burnout_score, 80);
        assert_eq!(past_sixty.focus_stability, 85);
    }

    #[test]
    fn fragmented_day_is_drifting() {
        // Low burnout, heavy switching, poor self-rating.
        let results = compute(&inputs(3.0, 8.0, true, SwitchLevel::High, 2));
        assert_eq!(results.burnout_score, 0);
        assert_eq!(results.focus_stability, 40);
        assert_eq!(results.status, Status::Drifting);
        assert_eq!(results.color_class, ColorClass::Yellow);
        assert_eq!(results.tips.len(), 3);
    }

    #[test]
    fn out_of_range_inputs_stay_clamped() {
        let results = compute(&inputs(-2.0, -1.0, false, SwitchLevel::High, 0));
        assert!(results.burnout_score <= 100);
        assert!(results.focus_stability <= 100);

        let absurd = compute(&inputs(1000.0, 0.0, false, SwitchLevel::High, 1));
        assert_eq!(absurd.burnout_score, 100);
        assert_eq!(absurd.focus_stability, 15);
    }
}
