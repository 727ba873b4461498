//! General free-text filter
//!
//! Extracts independent structured signals from loose text and combines
//! them into one [`VehicleFilter`]. Each kind of signal contributes at most
//! one predicate; several values of the same kind ("blue or white") match
//! any of them. Text with no recognizable signal yields the plain in-stock
//! filter.

use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::inventory::VehicleRecord;

use super::predicate::VehiclePredicate;
use super::vehicle_filter::VehicleFilter;

const COLORS: &[&str] = &[
    "red", "blue", "black", "white", "silver", "gray", "grey", "green", "yellow", "orange",
    "brown", "gold", "beige", "purple",
];

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b({})\b", COLORS.join("|"))).expect("color pattern is valid")
});

static PRICE_CEILING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:under|below|max(?:imum)?|less than|up to|at most)\s*:?\s*\$?\s*(\d[\d,]*(?:\.\d+)?)(\s*k\b)?",
    )
    .expect("price ceiling pattern is valid")
});

static PRICE_TRAILING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?(\d[\d,]*(?:\.\d+)?)(\s*k\b)?\s+or\s+(?:less|below|under)\b")
        .expect("trailing price pattern is valid")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19[89]\d|20[0-4]\d)\b").expect("year pattern is valid"));

static FUEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(plug-in hybrid|electric|hybrid|gasoline|gas|diesel)\b")
        .expect("fuel pattern is valid")
});

static DRIVETRAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(awd|fwd|rwd|4wd)\b").expect("drivetrain pattern is valid"));

static SEATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})\s*-?\s*seat(?:er|s)?\b").expect("seating pattern is valid")
});

static SAFETY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})\s*-?\s*stars?\b").expect("safety pattern is valid")
});

/// A parsed free-text query: the source text and the filter it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralQuery {
    text: String,
    filter: VehicleFilter,
}

impl GeneralQuery {
    /// Parse `text` against the make/model vocabulary of `vehicles`.
    pub fn parse(text: &str, vehicles: &[VehicleRecord]) -> Self {
        let lower = text.to_lowercase();
        let mut filter = VehicleFilter::in_stock();

        let colors = extract_colors(&lower);
        if !colors.is_empty() {
            filter = filter.and(VehiclePredicate::Color(colors));
        }

        let (ceiling, price_spans) = extract_price_ceiling(&lower);
        if let Some(max) = ceiling {
            filter = filter.and(VehiclePredicate::PriceAtMost(max));
        }

        let years = extract_years(&lower, &price_spans);
        if !years.is_empty() {
            filter = filter.and(VehiclePredicate::Year(years));
        }

        let makes = mentioned_values(&lower, vehicles.iter().map(|v| v.make.as_str()));
        if !makes.is_empty() {
            filter = filter.and(VehiclePredicate::Make(makes));
        }

        let models = mentioned_values(&lower, vehicles.iter().map(|v| v.model.as_str()));
        if !models.is_empty() {
            filter = filter.and(VehiclePredicate::Model(models));
        }

        let fuels = capture_set(&FUEL_RE, &lower, |fuel| match fuel {
            "gas" => "gasoline".to_string(),
            other => other.to_string(),
        });
        if !fuels.is_empty() {
            filter = filter.and(VehiclePredicate::FuelType(fuels));
        }

        let drives = capture_set(&DRIVETRAIN_RE, &lower, str::to_string);
        if !drives.is_empty() {
            filter = filter.and(VehiclePredicate::Drivetrain(drives));
        }

        if let Some(seats) = first_number::<u32>(&SEATING_RE, &lower) {
            filter = filter.and(VehiclePredicate::Seating(seats));
        }

        if let Some(stars) = first_number::<u8>(&SAFETY_RE, &lower) {
            filter = filter.and(VehiclePredicate::SafetyRating(stars));
        }

        Self {
            text: text.to_string(),
            filter,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn filter(&self) -> &VehicleFilter {
        &self.filter
    }

    pub fn into_filter(self) -> VehicleFilter {
        self.filter
    }

    /// True when nothing beyond the in-stock gate was understood
    pub fn is_unstructured(&self) -> bool {
        self.filter.signal_count() == 0
    }
}

fn extract_colors(text: &str) -> Vec<String> {
    capture_set(&COLOR_RE, text, str::to_string)
}

/// Lowest price ceiling mentioned, plus the byte spans that held prices
/// (so "under 2000" is not also read as a model year).
fn extract_price_ceiling(text: &str) -> (Option<f64>, Vec<Range<usize>>) {
    let mut ceiling: Option<f64> = None;
    let mut spans = Vec::new();

    for re in [&*PRICE_CEILING_RE, &*PRICE_TRAILING_RE] {
        for caps in re.captures_iter(text) {
            let Some(number) = caps.get(1) else {
                continue;
            };
            let Ok(mut amount) = number.as_str().replace(',', "").parse::<f64>() else {
                continue;
            };
            if caps.get(2).is_some() {
                amount *= 1_000.0;
            }
            spans.push(number.range());
            ceiling = Some(ceiling.map_or(amount, |c| c.min(amount)));
        }
    }

    (ceiling, spans)
}

fn extract_years(text: &str, price_spans: &[Range<usize>]) -> Vec<i32> {
    let mut years = BTreeSet::new();
    for m in YEAR_RE.find_iter(text) {
        let preceded_by_dollar = text[..m.start()].ends_with('$');
        let inside_price = price_spans
            .iter()
            .any(|span| span.start <= m.start() && m.end() <= span.end);
        if preceded_by_dollar || inside_price {
            continue;
        }
        if let Ok(year) = m.as_str().parse() {
            years.insert(year);
        }
    }
    years.into_iter().collect()
}

/// Distinct values (lowercased) that appear in `text` as whole words.
fn mentioned_values<'a>(text: &str, values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut found = BTreeSet::new();
    for value in values {
        let needle = value.trim().to_lowercase();
        if !needle.is_empty() && contains_word(text, &needle) {
            found.insert(needle);
        }
    }
    found.into_iter().collect()
}

/// Substring test that refuses matches glued to letters or digits,
/// so "ford" is not found inside "affordable".
fn contains_word(text: &str, needle: &str) -> bool {
    text.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

fn capture_set(re: &Regex, text: &str, normalize: impl Fn(&str) -> String) -> Vec<String> {
    let set: BTreeSet<String> = re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| normalize(m.as_str()))
        .collect();
    set.into_iter().collect()
}

fn first_number<T: std::str::FromStr>(re: &Regex, text: &str) -> Option<T> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::canonical_fleet;

    fn run(text: &str) -> Vec<String> {
        let fleet = canonical_fleet();
        GeneralQuery::parse(text, &fleet)
            .filter()
            .apply(&fleet)
            .into_iter()
            .map(|v| v.id)
            .collect()
    }

    #[test]
    fn test_red_toyota_under_30000_is_an_intersection() {
        assert_eq!(run("red Toyota under 30000"), vec!["V001"]);
        // Without the make, the red Elantra also qualifies
        assert_eq!(run("something red under 30000"), vec!["V001", "V006"]);
    }

    #[test]
    fn test_no_signal_returns_all_in_stock() {
        let fleet = canonical_fleet();
        let parsed = GeneralQuery::parse("what do you recommend?", &fleet);
        assert!(parsed.is_unstructured());
        assert_eq!(run("what do you recommend?").len(), 6);
    }

    #[test]
    fn test_make_requires_whole_word() {
        // "affordable" contains "ford" but is not a mention of Ford
        let fleet = canonical_fleet();
        assert!(GeneralQuery::parse("something affordable", &fleet).is_unstructured());
    }

    #[test]
    fn test_price_patterns() {
        let fleet = canonical_fleet();
        let parse = |t: &str| GeneralQuery::parse(t, &fleet).into_filter();

        assert!(parse("max $25,000").predicates().contains(&VehiclePredicate::PriceAtMost(25_000.0)));
        assert!(parse("below $30k").predicates().contains(&VehiclePredicate::PriceAtMost(30_000.0)));
        assert!(parse("$35000 or less").predicates().contains(&VehiclePredicate::PriceAtMost(35_000.0)));
        assert_eq!(run("hybrid $35k or below"), vec!["V001"]);
    }

    #[test]
    fn test_price_number_is_not_a_year() {
        let fleet = canonical_fleet();
        let filter = GeneralQuery::parse("under 2000", &fleet).into_filter();
        assert!(!filter.predicates().iter().any(|p| matches!(p, VehiclePredicate::Year(_))));
    }

    #[test]
    fn test_year_model_and_fuel() {
        assert_eq!(run("2024 electric"), vec!["V003"]);
        assert!(run("2019 electric").is_empty());
        assert_eq!(run("tesla model 3"), vec!["V003"]);
        assert_eq!(run("a gas truck like the F-150"), vec!["V004"]);
    }

    #[test]
    fn test_drivetrain_seating_and_safety() {
        assert_eq!(run("5 star awd"), vec!["V002", "V005"]);
        assert_eq!(run("4-star fwd"), vec!["V006"]);
        assert!(run("7-seater").is_empty());
        assert_eq!(run("5 seats").len(), 6);
    }

    #[test]
    fn test_out_of_range_seats_and_stars_match_nothing() {
        let fleet = canonical_fleet();
        let filter = GeneralQuery::parse("6 star", &fleet).into_filter();
        assert!(filter.predicates().contains(&VehiclePredicate::SafetyRating(6)));

        assert!(run("6 star").is_empty());
        assert!(run("0-star").is_empty());
        assert!(run("0 seats").is_empty());
    }

    #[test]
    fn test_multiple_colors_match_any() {
        // Every vehicle offers white; only the CR-V, Tesla, F-150 and X3 offer gray
        assert_eq!(run("grey"), vec!["V002", "V003", "V004", "V005"]);
        assert_eq!(run("electric in blue or white"), vec!["V003"]);
    }

    #[test]
    fn test_grey_inventory_matches_either_spelling() {
        let mut fleet = canonical_fleet();
        for vehicle in &mut fleet {
            for color in &mut vehicle.colors_available {
                if color == "Gray" {
                    *color = "Grey".to_string();
                }
            }
        }

        for query in ["grey", "gray"] {
            let ids: Vec<String> = GeneralQuery::parse(query, &fleet)
                .filter()
                .apply(&fleet)
                .into_iter()
                .map(|v| v.id)
                .collect();
            assert_eq!(ids, vec!["V002", "V003", "V004", "V005"], "query {query:?}");
        }
    }

    #[test]
    fn test_empty_inventory() {
        let parsed = GeneralQuery::parse("red toyota", &[]);
        assert!(parsed.filter().apply(&[]).is_empty());
    }
}
