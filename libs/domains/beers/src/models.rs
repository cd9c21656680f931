use axum_helpers::pagination::{InvalidPageSize, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use chrono::{DateTime, FixedOffset, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Wire format of `createdDate` / `lastModifiedDate`, e.g. `2019-05-12T10:20:30+0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Beer style
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

/// Beer entity
///
/// Unset values (zero numbers, empty name, missing timestamps) are left out
/// of the JSON instead of being written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    /// Unique identifier, never changes once assigned
    pub id: Uuid,
    /// Optimistic-lock version, incremented on every change
    #[serde(default, skip_serializing_if = "is_zero")]
    pub version: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[schema(example = "Mango Bobs")]
    pub beer_name: String,
    pub beer_style: BeerStyle,
    #[serde(
        default,
        with = "rust_decimal::serde::float",
        skip_serializing_if = "Decimal::is_zero"
    )]
    #[schema(value_type = f64, example = 12.95)]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub quantity_on_hand: i32,
    /// Universal Product Code
    #[serde(default, skip_serializing_if = "is_zero")]
    #[schema(example = 631_234_200_036_i64)]
    pub upc: i64,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2019-05-12T10:20:30+0000")]
    pub created_date: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2019-05-12T10:20:30+0000")]
    pub last_modified_date: Option<DateTime<FixedOffset>>,
}

impl Beer {
    /// Create a beer with a fresh id, version 0 and both timestamps set to
    /// the current second.
    pub fn new(
        beer_name: impl Into<String>,
        beer_style: BeerStyle,
        price: Decimal,
        quantity_on_hand: i32,
        upc: i64,
    ) -> Self {
        let now = Utc::now().trunc_subsecs(0).fixed_offset();
        Self {
            id: Uuid::now_v7(),
            version: 0,
            beer_name: beer_name.into(),
            beer_style,
            price,
            quantity_on_hand,
            upc,
            created_date: Some(now),
            last_modified_date: Some(now),
        }
    }
}

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.collect_str(&ts.format(TIMESTAMP_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| DateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom))
            .transpose()
    }
}

/// Filters applied when listing beers. Present filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeerFilter {
    /// Exact, case-sensitive beer name
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
}

impl BeerFilter {
    /// An empty name means "no name filter".
    pub fn new(beer_name: Option<String>, beer_style: Option<BeerStyle>) -> Self {
        Self {
            beer_name: beer_name.filter(|name| !name.is_empty()),
            beer_style,
        }
    }

    pub fn matches(&self, beer: &Beer) -> bool {
        if let Some(ref name) = self.beer_name {
            if &beer.beer_name != name {
                return false;
            }
        }
        if let Some(style) = self.beer_style {
            if beer.beer_style != style {
                return false;
            }
        }
        true
    }
}

/// Query parameters for `GET /beer`
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct BeerListQuery {
    /// Only beers with exactly this name
    #[serde(default, deserialize_with = "empty_as_none")]
    pub beer_name: Option<String>,
    /// Only beers of this style
    #[serde(default, deserialize_with = "empty_as_none")]
    pub beer_style: Option<BeerStyle>,
    /// Zero-based page index
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    pub page_number: u32,
    /// Number of beers per page, capped at 1000
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    #[param(default = 25, minimum = 1)]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// An empty query value (`?beerStyle=`) means the parameter was not given.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

impl BeerListQuery {
    /// The page to serve. Sizes above [`MAX_PAGE_SIZE`] are capped.
    pub fn page_request(&self) -> Result<PageRequest, InvalidPageSize> {
        PageRequest::new(self.page_number, self.page_size.min(MAX_PAGE_SIZE))
    }
}

impl Default for BeerListQuery {
    fn default() -> Self {
        Self {
            beer_name: None,
            beer_style: None,
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
