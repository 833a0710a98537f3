use serde::{Deserialize, Serialize};

/// Display-ready weather snapshot. Every field is a preformatted string and
/// may be empty when the provider left the corresponding data out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// `"Area, Country"` or empty.
    pub location: String,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind_speed: String,
}

/// Icon shown next to the temperature, derived from the condition text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionIcon {
    Sunny,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Fog,
    Wind,
    Generic,
}

/// Ordered rule table; the first rule with a matching keyword wins.
const ICON_RULES: &[(&[&str], ConditionIcon)] = &[
    (&["sun", "clear"], ConditionIcon::Sunny),
    (&["cloud"], ConditionIcon::Cloudy),
    (&["rain"], ConditionIcon::Rain),
    (&["storm", "thunder"], ConditionIcon::Storm),
    (&["snow"], ConditionIcon::Snow),
    (&["fog", "mist"], ConditionIcon::Fog),
    (&["wind"], ConditionIcon::Wind),
];

impl ConditionIcon {
    /// Case-insensitive substring match of `condition` against the rule table.
    pub fn for_condition(condition: &str) -> Self {
        let condition = condition.to_lowercase();

        ICON_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
            .map(|(_, icon)| *icon)
            .unwrap_or(ConditionIcon::Generic)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ConditionIcon::Sunny => "☀️",
            ConditionIcon::Cloudy => "☁️",
            ConditionIcon::Rain => "🌧️",
            ConditionIcon::Storm => "⛈️",
            ConditionIcon::Snow => "❄️",
            ConditionIcon::Fog => "🌫️",
            ConditionIcon::Wind => "💨",
            ConditionIcon::Generic => "🌤️",
        }
    }
}

impl WeatherRecord {
    pub fn icon(&self) -> ConditionIcon {
        ConditionIcon::for_condition(&self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_match_is_case_insensitive() {
        assert_eq!(ConditionIcon::for_condition("Light Rain"), ConditionIcon::Rain);
        assert_eq!(ConditionIcon::for_condition("SUNNY"), ConditionIcon::Sunny);
        assert_eq!(ConditionIcon::for_condition("Mist"), ConditionIcon::Fog);
    }

    #[test]
    fn thunderstorm_is_storm_not_generic() {
        assert_eq!(ConditionIcon::for_condition("Thunderstorm"), ConditionIcon::Storm);
        assert_eq!(ConditionIcon::for_condition("Thundery outbreaks possible"), ConditionIcon::Storm);
    }

    #[test]
    fn first_rule_wins_on_multiple_matches() {
        // "rain" comes before "storm" and "wind" in the table.
        assert_eq!(ConditionIcon::for_condition("windy rain storm"), ConditionIcon::Rain);
        assert_eq!(ConditionIcon::for_condition("Partly cloudy, clear later"), ConditionIcon::Sunny);
    }

    #[test]
    fn unknown_or_empty_condition_is_generic() {
        assert_eq!(ConditionIcon::for_condition(""), ConditionIcon::Generic);
        assert_eq!(ConditionIcon::for_condition("Haze"), ConditionIcon::Generic);
        assert_eq!(ConditionIcon::Generic.symbol(), "🌤️");
    }

    #[test]
    fn record_icon_uses_condition() {
        let record = WeatherRecord { condition: "Heavy snow".into(), ..Default::default() };
        assert_eq!(record.icon(), ConditionIcon::Snow);
        assert_eq!(record.icon().symbol(), "❄️");
    }
}
