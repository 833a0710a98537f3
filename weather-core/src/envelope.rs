//! Wire schema of the wttr.in `format=j1` payload and its projection into
//! [`WeatherRecord`].
//!
//! Only the handful of fields the card displays are decoded. Every list is
//! optional on the wire: a missing or `null` list decodes as empty and simply
//! leaves the matching record field blank.

use serde::{Deserialize, Deserializer};

use crate::model::WeatherRecord;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_condition: Vec<CurrentCondition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nearest_area: Vec<NearestArea>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C", default, deserialize_with = "null_as_default")]
    pub temp_c: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub humidity: String,
    #[serde(rename = "windspeedKmph", default, deserialize_with = "null_as_default")]
    pub windspeed_kmph: String,
    #[serde(rename = "weatherDesc", default, deserialize_with = "null_as_default")]
    pub weather_desc: Vec<TextValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearestArea {
    #[serde(rename = "areaName", default, deserialize_with = "null_as_default")]
    pub area_name: Vec<TextValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<TextValue>,
}

/// The provider wraps every free-text field as `[{"value": "..."}]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// First element of a provider list, or the element type's default.
pub fn first_or_default<T: Default + Clone>(items: &[T]) -> T {
    items.first().cloned().unwrap_or_default()
}

impl From<WeatherEnvelope> for WeatherRecord {
    fn from(envelope: WeatherEnvelope) -> Self {
        let mut record = WeatherRecord::default();

        if let Some(current) = envelope.current_condition.first() {
            record.temperature = format!("{}°C", current.temp_c);
            record.humidity = format!("{}%", current.humidity);
            record.wind_speed = format!("{} km/h", current.windspeed_kmph);
            record.condition = first_or_default(&current.weather_desc).value;
        }

        if let Some(area) = envelope.nearest_area.first() {
            if !area.area_name.is_empty() && !area.country.is_empty() {
                record.location = format!(
                    "{}, {}",
                    first_or_default(&area.area_name).value,
                    first_or_default(&area.country).value,
                );
            }
        }

        record
    }
}
