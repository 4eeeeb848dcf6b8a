//! Festival years resolved against the analytic ephemeris.

use chrono::{Datelike, NaiveDate};
use kaal_core::AnalyticEphemeris;
use kaal_festival::{
    FestivalCategory, FestivalConfig, FestivalDate, FestivalError, FestivalResolver,
    ResolutionMode, Region, to_ical, to_json,
};
use kaal_panchang::PanchangCalculator;

fn calculator() -> PanchangCalculator<AnalyticEphemeris> {
    PanchangCalculator::new(AnalyticEphemeris::new())
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn find<'f>(list: &'f [FestivalDate], name: &str) -> &'f FestivalDate {
    list.iter()
        .find(|f| f.name() == name)
        .unwrap_or_else(|| panic!("{name} missing"))
}

#[test]
fn bengal_2024_regional_filter() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver.resolve(2024, &[Region::Bengal], &[]).unwrap();

    let durga = find(&list, "Durga Puja");
    assert!(durga.date >= ymd(2024, 10, 1) && durga.date <= ymd(2024, 10, 15));
    let diwali = find(&list, "Diwali");
    assert!(
        diwali.date >= ymd(2024, 10, 28) && diwali.date <= ymd(2024, 11, 3),
        "{}",
        diwali.date
    );
    assert!(!list.iter().any(|f| f.name() == "Onam"));
    assert!(!list.iter().any(|f| f.name() == "Lohri"));
    assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn ekadashi_both_pakshas() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver
        .resolve(2024, &[], &[FestivalCategory::Spiritual])
        .unwrap();
    let ekadashis: Vec<_> = list.iter().filter(|f| f.name() == "Ekadashi").collect();
    assert!(ekadashis.len() >= 20, "{}", ekadashis.len());
    assert!(ekadashis.len() <= 27);
    assert!(ekadashis.iter().any(|f| f.info["paksha"] == "shukla"));
    assert!(ekadashis.iter().any(|f| f.info["paksha"] == "krishna"));
    assert!(ekadashis.iter().all(|f| f.info.contains_key("ekadashi_type")));
    for pair in ekadashis.windows(2) {
        let gap = (pair[1].date - pair[0].date).num_days();
        assert!((12..=18).contains(&gap), "{} -> {}", pair[0].date, pair[1].date);
    }
}

#[test]
fn first_and_last_covered_years_resolve() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    for year in [1800, 2050] {
        let list = resolver
            .resolve(year, &[], &[FestivalCategory::Spiritual])
            .unwrap_or_else(|e| panic!("{year}: {e}"));
        let ekadashis = list.iter().filter(|f| f.name() == "Ekadashi").count();
        assert!((20..=27).contains(&ekadashis), "{year}: {ekadashis}");
        assert!(list.iter().all(|f| f.date.year() == year));
    }
}

#[test]
fn makar_sankranti_mid_january() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    for year in [2024, 2025] {
        let list = resolver
            .resolve(year, &[], &[FestivalCategory::Seasonal])
            .unwrap();
        let ms = find(&list, "Makar Sankranti");
        assert_eq!(ms.date.month(), 1);
        assert!((13..=15).contains(&ms.date.day()), "{}", ms.date);
        assert!(ms.info.contains_key("exact_time"));
    }
}

#[test]
fn lohri_is_eve_of_sankranti() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver.resolve(2025, &[Region::Punjab], &[]).unwrap();
    let lohri = find(&list, "Lohri");
    let ms = find(&list, "Makar Sankranti");
    assert_eq!((ms.date - lohri.date).num_days(), 1);
    let baisakhi = find(&list, "Baisakhi");
    assert_eq!(baisakhi.date.month(), 4);
}

#[test]
fn category_filter_applies() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver
        .resolve(2024, &[Region::NorthIndia], &[FestivalCategory::Major])
        .unwrap();
    assert!(!list.is_empty());
    assert!(list.iter().all(|f| f.rule.category == FestivalCategory::Major));
    assert!(list.iter().any(|f| f.name() == "Karva Chauth"));
}

#[test]
fn diwali_cycle_in_order() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver.resolve(2024, &[Region::NorthIndia], &[]).unwrap();
    let dhanteras = find(&list, "Dhanteras").date;
    let diwali = find(&list, "Diwali").date;
    let govardhan = find(&list, "Govardhan Puja").date;
    let bhai_dooj = find(&list, "Bhai Dooj").date;
    assert!(dhanteras < diwali);
    assert!((diwali - dhanteras).num_days() <= 3);
    assert!(diwali < govardhan && govardhan < bhai_dooj);

    let holika = find(&list, "Holika Dahan").date;
    let holi = find(&list, "Holi").date;
    assert!((1..=2).contains(&(holi - holika).num_days()));
    assert_eq!(holi.month(), 3);
}

#[test]
fn onam_in_chingam() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver.resolve(2024, &[Region::Kerala], &[]).unwrap();
    let onam = find(&list, "Onam");
    assert!(onam.date >= ymd(2024, 8, 16) && onam.date <= ymd(2024, 9, 17));
    assert_eq!(onam.info["nakshatra"], "Shravana");
}

#[test]
fn eclipse_candidates_2024() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver
        .resolve(2024, &[], &[FestivalCategory::Astronomical])
        .unwrap();
    let solar: Vec<_> = list
        .iter()
        .filter(|f| f.name() == "Surya Grahan")
        .map(|f| f.date)
        .collect();
    assert!(
        solar.iter().any(|d| *d == ymd(2024, 4, 8) || *d == ymd(2024, 4, 9)),
        "{solar:?}"
    );
    assert!(
        solar.iter().any(|d| *d == ymd(2024, 10, 2) || *d == ymd(2024, 10, 3)),
        "{solar:?}"
    );
    assert!(solar.len() <= 4);

    let june = find(&list, "Dakshinayana").date;
    assert!(june >= ymd(2024, 6, 20) && june <= ymd(2024, 6, 22));
}

#[test]
fn date_and_month_queries() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let year = resolver.resolve(2024, &[], &[]).unwrap();
    let diwali = find(&year, "Diwali").date;

    let on_day = resolver.festivals_for_date(diwali, &[]).unwrap();
    assert!(on_day.iter().any(|f| f.name() == "Diwali"));
    assert!(on_day.iter().all(|f| f.date == diwali));

    let in_month = resolver
        .festivals_for_month(2024, diwali.month(), &[])
        .unwrap();
    assert!(in_month.iter().all(|f| f.date.month() == diwali.month()));
    assert!(in_month.len() >= on_day.len());
}

#[test]
fn calendar_spans_year_boundary() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let start = ymd(2024, 12, 1);
    let end = ymd(2025, 1, 31);
    let cal = resolver.generate_calendar(start, end, &[], &[]).unwrap();
    assert!(cal.keys().any(|k| k.starts_with("2024-12")));
    assert!(cal.keys().any(|k| k.starts_with("2025-01")));
    for (key, festivals) in &cal {
        assert!(festivals.iter().all(|f| f.date.to_string() == *key));
    }
    assert!(matches!(
        resolver.generate_calendar(end, start, &[], &[]),
        Err(FestivalError::InvalidInput(_))
    ));
}

#[test]
fn exports_from_resolved_year() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver.resolve(2024, &[Region::Gujarat], &[]).unwrap();
    let ics = to_ical(&list);
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("END:VCALENDAR"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), list.len());

    let json = to_json(&list).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(list.len()));
}

#[test]
fn approximate_mode_equivalents() {
    let calc = calculator();
    let cfg = FestivalConfig {
        mode: ResolutionMode::Approximate,
        ..FestivalConfig::default()
    };
    let resolver = FestivalResolver::with_config(&calc, cfg).unwrap();

    let bengal = resolver.resolve(2024, &[Region::Bengal], &[]).unwrap();
    assert!(bengal.iter().any(|f| f.name() == "Durga Puja"));
    assert!(bengal.iter().any(|f| f.name() == "Diwali"));
    assert!(!bengal.iter().any(|f| f.name() == "Onam"));
    assert!(!bengal.iter().any(|f| f.name() == "Surya Grahan"));

    let ekadashis = bengal.iter().filter(|f| f.name() == "Ekadashi").count();
    assert_eq!(ekadashis, 24);

    let ms = find(&bengal, "Makar Sankranti");
    assert_eq!(ms.date, ymd(2024, 1, 14));
    assert!(bengal.iter().all(|f| f.info["resolution"] == "approximate"));
}

#[test]
fn day_info_reports_sunrise_panchang() {
    let calc = calculator();
    let resolver = FestivalResolver::new(&calc);
    let list = resolver.resolve(2024, &[], &[]).unwrap();
    let purnima = find(&list, "Guru Purnima").date;
    let info = resolver.day_info(purnima).unwrap();
    assert_eq!(info.date, purnima);
    assert!(info.tithi == 15 || info.tithi == 14);
    assert_eq!(info.masa.map(|m| m.name()), Some("Ashadha"));
}
