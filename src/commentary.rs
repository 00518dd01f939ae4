//! Play-by-play lines for an outcome.

use crate::outcome::OutcomeCategory;

pub const DEFAULT_BATTER_NAME: &str = "the batter";
pub const DEFAULT_PITCHER_NAME: &str = "the pitcher";

/// Renders the narrative line for `outcome`, naming the participants where the template calls for
/// them. Absent or blank names are replaced with generic labels.
pub fn commentary(outcome: OutcomeCategory, batter: Option<&str>, pitcher: Option<&str>) -> String {
    let batter = display_name(batter, DEFAULT_BATTER_NAME);
    let pitcher = display_name(pitcher, DEFAULT_PITCHER_NAME);
    match outcome {
        OutcomeCategory::HomeRun => format!("That one is gone! A towering home run for {batter}!"),
        OutcomeCategory::Triple => {
            format!("Split the right-center gap! {batter} is racing all the way to third!")
        }
        OutcomeCategory::Double => "Over the left fielder's head! That's a double.".into(),
        OutcomeCategory::Single => "A clean single up the middle!".into(),
        OutcomeCategory::Walk => format!("Ball four. A patient eye earns {batter} the walk."),
        OutcomeCategory::Strikeout => {
            format!("Swing and a miss, strike three! Overpowering stuff from {pitcher}.")
        }
        OutcomeCategory::Out => "Grounder to short, thrown out at first.".into(),
    }
}

fn display_name<'a>(name: Option<&'a str>, default: &'a str) -> &'a str {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => default,
    }
}
