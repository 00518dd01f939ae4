//! Season stat lines for the two participants of a matchup.
//!
//! Stat records arrive loosely typed: a field may be a number, a numeric string, `null`, something
//! unparseable or missing altogether. Every numeric field is therefore optional, and anything that
//! is not a finite, non-negative number is read as absent. Substitution of defaults for absent
//! values happens in one place, [crate::rates].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A batter's season line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingLine {
    #[serde(
        default,
        alias = "선수명",
        deserialize_with = "lenient_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(rename = "PA", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub plate_appearances: Option<f64>,

    #[serde(rename = "AB", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub at_bats: Option<f64>,

    #[serde(rename = "H", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hits: Option<f64>,

    #[serde(rename = "2B", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub doubles: Option<f64>,

    #[serde(rename = "3B", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub triples: Option<f64>,

    #[serde(rename = "HR", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub home_runs: Option<f64>,

    #[serde(rename = "BB", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub walks: Option<f64>,

    #[serde(rename = "SO", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub strikeouts: Option<f64>,

    #[serde(rename = "AVG", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

/// A pitcher's season line. Hits and home runs allowed are carried for completeness; the matchup
/// model reads only batters faced, walks, strikeouts and the opponent batting average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingLine {
    #[serde(
        default,
        alias = "선수명",
        deserialize_with = "lenient_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(rename = "TBF", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub batters_faced: Option<f64>,

    #[serde(rename = "BB", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub walks: Option<f64>,

    #[serde(rename = "SO", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub strikeouts: Option<f64>,

    #[serde(rename = "AVG", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,

    #[serde(rename = "H", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hits: Option<f64>,

    #[serde(rename = "HR", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub home_runs: Option<f64>,
}

/// Interprets a loosely-typed stat value. Numbers and numeric strings are accepted; the result
/// must be finite and non-negative.
pub fn parse_stat(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(string) => string.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (number.is_finite() && number >= 0.0).then_some(number)
}

fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_stat))
}

/// Names may arrive as strings or numbers; a number is kept in its JSON rendering.
fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(name)) => Some(name),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_stat_numbers_and_strings() {
        assert_eq!(Some(0.337), parse_stat(&json!(0.337)));
        assert_eq!(Some(517.0), parse_stat(&json!(517)));
        assert_eq!(Some(0.337), parse_stat(&json!("0.337")));
        assert_eq!(Some(454.0), parse_stat(&json!(" 454 ")));
    }

    #[test]
    fn parse_stat_rejects_garbage() {
        assert_eq!(None, parse_stat(&json!("-")));
        assert_eq!(None, parse_stat(&json!("")));
        assert_eq!(None, parse_stat(&json!("NaN")));
        assert_eq!(None, parse_stat(&json!("inf")));
        assert_eq!(None, parse_stat(&json!(-3)));
        assert_eq!(None, parse_stat(&json!(true)));
        assert_eq!(None, parse_stat(&json!([1])));
        assert_eq!(None, parse_stat(&Value::Null));
    }

    #[test]
    fn deserialise_batting_line() {
        let line: BattingLine = serde_json::from_value(json!({
            "name": "Yang Eui-ji",
            "AVG": 0.337,
            "H": 153,
            "2B": "27",
            "3B": 1,
            "HR": 20,
            "BB": 50,
            "SO": 63,
            "PA": 517,
            "AB": "n/a"
        }))
        .unwrap();
        assert_eq!(
            BattingLine {
                name: Some("Yang Eui-ji".into()),
                plate_appearances: Some(517.0),
                at_bats: None,
                hits: Some(153.0),
                doubles: Some(27.0),
                triples: Some(1.0),
                home_runs: Some(20.0),
                walks: Some(50.0),
                strikeouts: Some(63.0),
                average: Some(0.337),
            },
            line
        );
    }

    #[test]
    fn deserialise_empty_lines() {
        let batter: BattingLine = serde_json::from_value(json!({})).unwrap();
        assert_eq!(BattingLine::default(), batter);
        let pitcher: PitchingLine = serde_json::from_value(json!({"TBF": null})).unwrap();
        assert_eq!(PitchingLine::default(), pitcher);
    }

    #[test]
    fn deserialise_stat_table_row() {
        let pitcher: PitchingLine = serde_json::from_value(json!({
            "player_id": "76715",
            "선수명": "Ryu Hyun-jin",
            "ERA": "3.23",
            "TBF": "574",
            "BB": "25",
            "SO": "122",
            "AVG": "0.267",
            "H": "144",
            "HR": "12"
        }))
        .unwrap();
        assert_eq!(Some("Ryu Hyun-jin"), pitcher.name.as_deref());
        assert_eq!(Some(574.0), pitcher.batters_faced);
        assert_eq!(Some(0.267), pitcher.average);
        assert_eq!(Some(12.0), pitcher.home_runs);
    }

    #[test]
    fn deserialise_non_string_names() {
        let batter: BattingLine = serde_json::from_value(json!({"name": 12, "PA": 10})).unwrap();
        assert_eq!(Some("12"), batter.name.as_deref());
        assert_eq!(Some(10.0), batter.plate_appearances);

        let pitcher: PitchingLine = serde_json::from_value(json!({"선수명": 4.5})).unwrap();
        assert_eq!(Some("4.5"), pitcher.name.as_deref());

        let batter: BattingLine = serde_json::from_value(json!({"name": ["x"]})).unwrap();
        assert_eq!(None, batter.name);
        let pitcher: PitchingLine = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(None, pitcher.name);
    }

    #[test]
    fn serialise_skips_absent_fields() {
        let batter = BattingLine {
            plate_appearances: Some(10.0),
            ..BattingLine::default()
        };
        assert_eq!(r#"{"PA":10.0}"#, serde_json::to_string(&batter).unwrap());
    }
}
