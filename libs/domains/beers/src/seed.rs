//! Starter catalog loaded into the in-memory repository at startup.

use rust_decimal::Decimal;

use crate::models::{Beer, BeerStyle};

/// The brewery's starter catalog.
///
/// Every call produces fresh ids and timestamps.
pub fn sample_beers() -> Vec<Beer> {
    [
        ("Mango Bobs", BeerStyle::Ale, 1295, 12, 631_234_200_036),
        ("Galaxy Cat", BeerStyle::PaleAle, 1195, 56, 9_122_089_364_369),
        ("No Hammers On The Bar", BeerStyle::Wheat, 1395, 144, 8_380_495_518_610),
        ("Blessed", BeerStyle::Stout, 1495, 89, 4_666_337_557_578),
        ("Adjunct Trail", BeerStyle::Stout, 1095, 45, 8_380_495_518_611),
        ("Very GGGreenn", BeerStyle::Ipa, 1295, 32, 8_380_495_518_612),
        ("Double Barrel Hunahpu's", BeerStyle::Stout, 1595, 17, 8_380_495_518_613),
        ("Pinball Porter", BeerStyle::Porter, 1395, 63, 8_380_495_518_614),
        ("Golden Budda", BeerStyle::Lager, 995, 208, 8_380_495_518_615),
        ("Grand Central Red", BeerStyle::Lager, 1095, 71, 8_380_495_518_616),
        ("Pac-Man", BeerStyle::Pilsner, 1050, 120, 8_380_495_518_617),
        ("Sour Kraut Gose", BeerStyle::Gose, 1195, 24, 8_380_495_518_618),
        ("Farmhouse Dawn", BeerStyle::Saison, 1350, 40, 8_380_495_518_619),
    ]
    .into_iter()
    .map(|(name, style, cents, quantity, upc)| {
        Beer::new(name, style, Decimal::new(cents, 2), quantity, upc)
    })
    .collect()
}
