//! The compiled-in catalog table.

use crate::{
  geo::Coordinates,
  seafood::{
    Co2Emissions, Co2Rating, MercuryLevel, Nutrition, Recommendation,
    SeafoodRecord, StockStatus,
  },
};

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_owned()).collect()
}

pub(crate) fn records() -> Vec<SeafoodRecord> {
  vec![
    SeafoodRecord {
      id:              "FISH001".into(),
      name:            "Atlantic Salmon".into(),
      scientific_name: "Salmo salar".into(),
      stock_status:    StockStatus::Moderate,
      recommendation:  Recommendation::ConsiderAlternatives,
      nutrition:       Nutrition {
        protein:  20.0,
        omega3:   2.2,
        calories: 208.0,
        mercury:  MercuryLevel::Low,
      },
      origin:          "Norway".into(),
      fishery:         "Fjord Aquaculture".into(),
      fishing_method:  "Open-net pen aquaculture".into(),
      co2_emissions:   Co2Emissions { value: 5.1, rating: Co2Rating::Medium },
      certifications:  strings(&["ASC Certified"]),
      coordinates:     Some(Coordinates::new(62.47, 6.15)),
      description:     "Farm-raised Atlantic salmon from Norwegian fjords. \
                        Medium environmental impact with good nutrition profile."
        .into(),
    },
    SeafoodRecord {
      id:              "FISH002".into(),
      name:            "Alaskan Pollock".into(),
      scientific_name: "Gadus chalcogrammus".into(),
      stock_status:    StockStatus::Abundant,
      recommendation:  Recommendation::Recommended,
      nutrition:       Nutrition {
        protein:  15.6,
        omega3:   0.5,
        calories: 92.0,
        mercury:  MercuryLevel::VeryLow,
      },
      origin:          "Bering Sea, Alaska".into(),
      fishery:         "North Pacific Sustainable Fishery".into(),
      fishing_method:  "Midwater trawl".into(),
      co2_emissions:   Co2Emissions { value: 1.6, rating: Co2Rating::Low },
      certifications:  strings(&["MSC Certified", "Ocean Wise"]),
      coordinates:     Some(Coordinates::new(57.0, -170.0)),
      description:     "Wild-caught whitefish from sustainable Alaskan \
                        fisheries. Low environmental impact and an excellent \
                        choice for consumers."
        .into(),
    },
    SeafoodRecord {
      id:              "FISH003".into(),
      name:            "Bluefin Tuna".into(),
      scientific_name: "Thunnus thynnus".into(),
      stock_status:    StockStatus::Critical,
      recommendation:  Recommendation::Avoid,
      nutrition:       Nutrition {
        protein:  23.3,
        omega3:   1.2,
        calories: 144.0,
        mercury:  MercuryLevel::High,
      },
      origin:          "Mediterranean Sea".into(),
      fishery:         "Open Ocean Fishing".into(),
      fishing_method:  "Purse seine".into(),
      co2_emissions:   Co2Emissions { value: 11.4, rating: Co2Rating::VeryHigh },
      certifications:  Vec::new(),
      coordinates:     Some(Coordinates::new(38.0, 5.0)),
      description:     "Wild-caught predatory fish with declining populations. \
                        High mercury content and unsustainable fishing \
                        practices."
        .into(),
    },
    SeafoodRecord {
      id:              "FISH004".into(),
      name:            "Rainbow Trout".into(),
      scientific_name: "Oncorhynchus mykiss".into(),
      stock_status:    StockStatus::Abundant,
      recommendation:  Recommendation::Recommended,
      nutrition:       Nutrition {
        protein:  20.5,
        omega3:   1.0,
        calories: 141.0,
        mercury:  MercuryLevel::VeryLow,
      },
      origin:          "Idaho, USA".into(),
      fishery:         "Clear Springs Aquaculture".into(),
      fishing_method:  "Land-based raceway aquaculture".into(),
      co2_emissions:   Co2Emissions { value: 2.9, rating: Co2Rating::Low },
      certifications:  strings(&["BAP Certified", "Ocean Wise"]),
      coordinates:     Some(Coordinates::new(42.58, -114.46)),
      description:     "Farm-raised freshwater trout from land-based tanks. \
                        Environmentally responsible with excellent nutrition \
                        profile."
        .into(),
    },
    SeafoodRecord {
      id:              "FISH005".into(),
      name:            "Pacific Cod".into(),
      scientific_name: "Gadus macrocephalus".into(),
      stock_status:    StockStatus::Moderate,
      recommendation:  Recommendation::Recommended,
      nutrition:       Nutrition {
        protein:  18.0,
        omega3:   0.3,
        calories: 85.0,
        mercury:  MercuryLevel::Low,
      },
      origin:          "Gulf of Alaska".into(),
      fishery:         "Alaska Sustainable Fisheries".into(),
      fishing_method:  "Bottom longline".into(),
      co2_emissions:   Co2Emissions { value: 3.8, rating: Co2Rating::High },
      certifications:  strings(&["MSC Certified"]),
      coordinates:     None,
      description:     "Wild-caught whitefish from managed Alaskan fisheries. \
                        Good alternative to overfished Atlantic cod."
        .into(),
    },
  ]
}
