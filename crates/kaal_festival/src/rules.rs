//! The static festival rule table.
//!
//! Lunar rules use amanta months. Krishna-paksha festivals that are
//! commonly named by the purnimanta month (Diwali in "Kartik", Holi in
//! "Chaitra") therefore sit one month earlier here.

use kaal_vedic_base::{Masa, Nakshatra, Paksha, Rashi};

use crate::types::{
    EclipseKind, FestivalCategory, FestivalCategory as C, FestivalRule, Observance, Region,
    Region as R, RuleKind,
};

const DEFAULTS: FestivalRule = FestivalRule {
    name: "",
    english_name: "",
    rule: RuleKind::Ekadashi,
    category: C::Religious,
    regions: ALL_INDIA,
    description: "",
    alternative_names: &[],
    duration_days: 1,
    observance: Observance::FullDay,
};

const ALL_INDIA: &[R] = &[R::AllIndia];
const NORTH: &[R] = &[R::NorthIndia];

const fn lunar(masa: Masa, paksha: Paksha, tithi: u8) -> RuleKind {
    RuleKind::Lunar { masa, paksha, tithi }
}

const SHUKLA: Paksha = Paksha::Shukla;
const KRISHNA: Paksha = Paksha::Krishna;

pub static FESTIVAL_RULES: &[FestivalRule] = &[
    // Diwali cycle
    FestivalRule {
        name: "Dhanteras",
        english_name: "Dhanteras",
        rule: lunar(Masa::Ashwin, KRISHNA, 13),
        category: C::Major,
        description: "First day of Diwali, worship of wealth and prosperity",
        alternative_names: &["Dhanatrayodashi"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Naraka Chaturdashi",
        english_name: "Choti Diwali",
        rule: lunar(Masa::Ashwin, KRISHNA, 14),
        category: C::Major,
        description: "Second day of Diwali, defeat of the demon Narakasura",
        alternative_names: &["Choti Diwali", "Roop Chaudas"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Diwali",
        english_name: "Diwali",
        rule: lunar(Masa::Ashwin, KRISHNA, 15),
        category: C::Major,
        description: "Festival of lights, worship of Goddess Lakshmi",
        alternative_names: &["Deepavali", "Lakshmi Puja"],
        observance: Observance::Sunset,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Govardhan Puja",
        english_name: "Govardhan Puja",
        rule: lunar(Masa::Kartik, SHUKLA, 1),
        category: C::Major,
        regions: NORTH,
        description: "Fourth day of Diwali, worship of Mount Govardhan",
        alternative_names: &["Annakut"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Bhai Dooj",
        english_name: "Bhai Dooj",
        rule: lunar(Masa::Kartik, SHUKLA, 2),
        category: C::Major,
        regions: NORTH,
        description: "Fifth day of Diwali, bond between brothers and sisters",
        alternative_names: &["Bhai Tika", "Yama Dwitiya"],
        ..DEFAULTS
    },
    // Holi
    FestivalRule {
        name: "Holika Dahan",
        english_name: "Holika Dahan",
        rule: lunar(Masa::Phalguna, SHUKLA, 15),
        category: C::Major,
        description: "Bonfire night before Holi, burning of Holika",
        observance: Observance::Sunset,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Holi",
        english_name: "Holi",
        rule: lunar(Masa::Phalguna, KRISHNA, 1),
        category: C::Major,
        description: "Festival of colors, celebration of spring",
        alternative_names: &["Rangwali Holi", "Dhulandi"],
        ..DEFAULTS
    },
    // Navaratri
    FestivalRule {
        name: "Chaitra Navaratri",
        english_name: "Chaitra Navaratri",
        rule: lunar(Masa::Chaitra, SHUKLA, 1),
        category: C::Major,
        regions: NORTH,
        description: "Nine nights dedicated to Goddess Durga",
        duration_days: 9,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Sharad Navaratri",
        english_name: "Navaratri",
        rule: lunar(Masa::Ashwin, SHUKLA, 1),
        category: C::Major,
        description: "Nine nights dedicated to Goddess Durga",
        alternative_names: &["Durga Puja", "Dussehra"],
        duration_days: 9,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Dussehra",
        english_name: "Dussehra",
        rule: lunar(Masa::Ashwin, SHUKLA, 10),
        category: C::Major,
        description: "Victory of good over evil, Rama's victory over Ravana",
        alternative_names: &["Vijayadashami", "Dasara"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Krishna Janmashtami",
        english_name: "Krishna Janmashtami",
        rule: lunar(Masa::Shravana, KRISHNA, 8),
        category: C::Major,
        description: "Birth of Lord Krishna",
        alternative_names: &["Janmashtami", "Gokulashtami"],
        observance: Observance::Midnight,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Ganesh Chaturthi",
        english_name: "Ganesh Chaturthi",
        rule: lunar(Masa::Bhadrapada, SHUKLA, 4),
        category: C::Major,
        description: "Birth of Lord Ganesha",
        alternative_names: &["Vinayaka Chaturthi"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Ram Navami",
        english_name: "Ram Navami",
        rule: lunar(Masa::Chaitra, SHUKLA, 9),
        category: C::Major,
        description: "Birth of Lord Rama",
        observance: Observance::Noon,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Karva Chauth",
        english_name: "Karva Chauth",
        rule: lunar(Masa::Ashwin, KRISHNA, 4),
        category: C::Major,
        regions: NORTH,
        description: "Fast by married women for their husbands' longevity",
        observance: Observance::Moonrise,
        ..DEFAULTS
    },
    // Religious
    FestivalRule {
        name: "Maha Shivaratri",
        english_name: "Maha Shivaratri",
        rule: lunar(Masa::Magha, KRISHNA, 14),
        description: "Great night of Lord Shiva",
        observance: Observance::Night,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Hanuman Jayanti",
        english_name: "Hanuman Jayanti",
        rule: lunar(Masa::Chaitra, SHUKLA, 15),
        description: "Birth of Lord Hanuman",
        observance: Observance::Sunrise,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Guru Purnima",
        english_name: "Guru Purnima",
        rule: lunar(Masa::Ashadha, SHUKLA, 15),
        description: "Honoring spiritual teachers and gurus",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Saraswati Puja",
        english_name: "Saraswati Puja",
        rule: lunar(Masa::Magha, SHUKLA, 5),
        regions: &[R::Bengal, R::EastIndia],
        description: "Worship of Goddess Saraswati",
        alternative_names: &["Vasant Panchami"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Varalakshmi Vratam",
        english_name: "Varalakshmi Vratam",
        rule: lunar(Masa::Shravana, SHUKLA, 15),
        regions: &[R::SouthIndia, R::Karnataka, R::AndhraPradesh, R::TamilNadu],
        description: "Worship of Goddess Lakshmi by married women",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Akshaya Tritiya",
        english_name: "Akshaya Tritiya",
        rule: lunar(Masa::Vaishakha, SHUKLA, 3),
        description: "Day of imperishable merit, auspicious for new ventures",
        alternative_names: &["Akha Teej"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Raksha Bandhan",
        english_name: "Raksha Bandhan",
        rule: lunar(Masa::Shravana, SHUKLA, 15),
        category: C::Cultural,
        regions: &[R::NorthIndia, R::WestIndia],
        description: "Sisters tie a protective thread on their brothers' wrists",
        alternative_names: &["Rakhi"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Nag Panchami",
        english_name: "Nag Panchami",
        rule: lunar(Masa::Shravana, SHUKLA, 5),
        description: "Worship of serpent deities",
        ..DEFAULTS
    },
    // Seasonal
    FestivalRule {
        name: "Makar Sankranti",
        english_name: "Makar Sankranti",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Makara,
            day_offset: 0,
        },
        category: C::Seasonal,
        description: "Sun enters Makara, harvest festival",
        alternative_names: &["Pongal", "Lohri", "Uttarayan"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Basant Panchami",
        english_name: "Basant Panchami",
        rule: lunar(Masa::Magha, SHUKLA, 5),
        category: C::Seasonal,
        regions: NORTH,
        description: "Arrival of spring, worship of Saraswati",
        alternative_names: &["Vasant Panchami", "Saraswati Puja"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Teej",
        english_name: "Teej",
        rule: lunar(Masa::Shravana, SHUKLA, 3),
        category: C::Seasonal,
        regions: &[R::NorthIndia, R::Rajasthan],
        description: "Monsoon festival, worship of Parvati",
        alternative_names: &["Hariyali Teej"],
        ..DEFAULTS
    },
    // Regional
    FestivalRule {
        name: "Durga Puja",
        english_name: "Durga Puja",
        rule: lunar(Masa::Ashwin, SHUKLA, 6),
        category: C::Regional,
        regions: &[R::Bengal, R::Assam, R::Odisha],
        description: "Grand worship of Goddess Durga, Shashthi to Dashami",
        duration_days: 5,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Kali Puja",
        english_name: "Kali Puja",
        rule: lunar(Masa::Ashwin, KRISHNA, 15),
        category: C::Regional,
        regions: &[R::Bengal],
        description: "Worship of Goddess Kali on the night of Diwali",
        observance: Observance::Night,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Mahalaya",
        english_name: "Mahalaya",
        rule: lunar(Masa::Bhadrapada, KRISHNA, 15),
        category: C::Spiritual,
        regions: &[R::Bengal],
        description: "Ancestral worship before Durga Puja",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Onam",
        english_name: "Onam",
        rule: RuleKind::Nakshatra {
            nakshatra: Nakshatra::Shravana,
            solar_month: Rashi::Simha,
        },
        category: C::Regional,
        regions: &[R::Kerala],
        description: "Harvest festival of Kerala on Thiruvonam in Chingam",
        alternative_names: &["Thiruvonam"],
        duration_days: 10,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Pongal",
        english_name: "Pongal",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Makara,
            day_offset: 0,
        },
        category: C::Regional,
        regions: &[R::TamilNadu],
        description: "Harvest festival of Tamil Nadu",
        alternative_names: &["Thai Pongal"],
        duration_days: 4,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Navratri",
        english_name: "Navratri",
        rule: lunar(Masa::Ashwin, SHUKLA, 1),
        category: C::Regional,
        regions: &[R::Gujarat],
        description: "Nine nights of garba and devotion in Gujarat",
        duration_days: 9,
        observance: Observance::Night,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Gudi Padwa",
        english_name: "Gudi Padwa",
        rule: lunar(Masa::Chaitra, SHUKLA, 1),
        category: C::Regional,
        regions: &[R::Maharashtra],
        description: "Marathi New Year",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Ugadi",
        english_name: "Ugadi",
        rule: lunar(Masa::Chaitra, SHUKLA, 1),
        category: C::Regional,
        regions: &[R::Karnataka, R::AndhraPradesh],
        description: "Telugu and Kannada New Year",
        alternative_names: &["Yugadi"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Gangaur",
        english_name: "Gangaur",
        rule: lunar(Masa::Chaitra, SHUKLA, 3),
        category: C::Regional,
        regions: &[R::Rajasthan],
        description: "Worship of Gauri by the women of Rajasthan",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Rath Yatra",
        english_name: "Rath Yatra",
        rule: lunar(Masa::Ashadha, SHUKLA, 2),
        category: C::Regional,
        regions: &[R::Odisha],
        description: "Chariot festival of Lord Jagannath at Puri",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Chhath Puja",
        english_name: "Chhath Puja",
        rule: lunar(Masa::Kartik, SHUKLA, 6),
        category: C::Regional,
        regions: &[R::EastIndia],
        description: "Offerings to the setting and rising Sun",
        duration_days: 4,
        observance: Observance::Sunset,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Lohri",
        english_name: "Lohri",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Makara,
            day_offset: -1,
        },
        category: C::Regional,
        regions: &[R::Punjab],
        description: "Punjabi bonfire festival on the eve of Makar Sankranti",
        observance: Observance::Night,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Baisakhi",
        english_name: "Baisakhi",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Mesha,
            day_offset: 0,
        },
        category: C::Regional,
        regions: &[R::Punjab],
        description: "Punjabi New Year and harvest festival",
        alternative_names: &["Vaisakhi"],
        ..DEFAULTS
    },
    FestivalRule {
        name: "Vishu",
        english_name: "Vishu",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Mesha,
            day_offset: 0,
        },
        category: C::Regional,
        regions: &[R::Kerala],
        description: "Malayalam New Year",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Puthandu",
        english_name: "Tamil New Year",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Mesha,
            day_offset: 0,
        },
        category: C::Regional,
        regions: &[R::TamilNadu],
        description: "Tamil New Year",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Rongali Bihu",
        english_name: "Bohag Bihu",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Mesha,
            day_offset: 0,
        },
        category: C::Regional,
        regions: &[R::Assam],
        description: "Assamese New Year and spring festival",
        duration_days: 7,
        ..DEFAULTS
    },
    FestivalRule {
        name: "Pohela Boishakh",
        english_name: "Bengali New Year",
        rule: RuleKind::Sankranti {
            rashi: Rashi::Mesha,
            day_offset: 1,
        },
        category: C::Regional,
        regions: &[R::Bengal],
        description: "Bengali New Year",
        ..DEFAULTS
    },
    // Spiritual
    FestivalRule {
        name: "Ekadashi",
        english_name: "Ekadashi",
        rule: RuleKind::Ekadashi,
        category: C::Spiritual,
        description: "Fasting day dedicated to Lord Vishnu",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Kartik Purnima",
        english_name: "Kartik Purnima",
        rule: lunar(Masa::Kartik, SHUKLA, 15),
        category: C::Spiritual,
        description: "Sacred full moon of Kartik",
        alternative_names: &["Dev Deepavali"],
        ..DEFAULTS
    },
    // Astronomical
    FestivalRule {
        name: "Dakshinayana",
        english_name: "Dakshinayana",
        rule: RuleKind::Solstice {
            tropical_longitude_deg: 90.0,
        },
        category: C::Astronomical,
        description: "Sun's southward journey begins",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Uttarayana",
        english_name: "Uttarayana",
        rule: RuleKind::Solstice {
            tropical_longitude_deg: 270.0,
        },
        category: C::Astronomical,
        description: "Sun's northward journey begins",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Surya Grahan",
        english_name: "Solar Eclipse",
        rule: RuleKind::Eclipse {
            eclipse: EclipseKind::Solar,
        },
        category: C::Astronomical,
        description: "Solar eclipse observance",
        ..DEFAULTS
    },
    FestivalRule {
        name: "Chandra Grahan",
        english_name: "Lunar Eclipse",
        rule: RuleKind::Eclipse {
            eclipse: EclipseKind::Lunar,
        },
        category: C::Astronomical,
        description: "Lunar eclipse observance",
        observance: Observance::Night,
        ..DEFAULTS
    },
];

/// Rules matching the filters. Empty `regions` means all-India only; empty
/// `categories` means every category.
pub fn matching_rules<'r>(
    regions: &'r [Region],
    categories: &'r [FestivalCategory],
) -> impl Iterator<Item = &'static FestivalRule> + 'r {
    let regions: &[Region] = if regions.is_empty() {
        &[Region::AllIndia]
    } else {
        regions
    };
    FESTIVAL_RULES.iter().filter(move |r| {
        r.matches_regions(regions) && (categories.is_empty() || categories.contains(&r.category))
    })
}

/// Rule by exact name.
pub fn rule_by_name(name: &str) -> Option<&'static FestivalRule> {
    FESTIVAL_RULES.iter().find(|r| r.name == name)
}
