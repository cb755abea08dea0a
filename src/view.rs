use crate::record::Record;
use std::cmp::Ordering;

/// One of the six contributing factor sub-scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Factor {
    GdpPerCapita,
    SocialSupport,
    HealthyLifeExpectancy,
    FreedomToMakeLifeChoices,
    Generosity,
    PerceptionsOfCorruption,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::GdpPerCapita,
        Factor::SocialSupport,
        Factor::HealthyLifeExpectancy,
        Factor::FreedomToMakeLifeChoices,
        Factor::Generosity,
        Factor::PerceptionsOfCorruption,
    ];

    /// The human-readable label, identical to the dataset column name.
    pub fn label(self) -> &'static str {
        match self {
            Factor::GdpPerCapita => "GDP per capita",
            Factor::SocialSupport => "Social support",
            Factor::HealthyLifeExpectancy => "Healthy life expectancy",
            Factor::FreedomToMakeLifeChoices => "Freedom to make life choices",
            Factor::Generosity => "Generosity",
            Factor::PerceptionsOfCorruption => "Perceptions of corruption",
        }
    }

    /// Informational paragraph shown when the factor is selected.
    pub fn blurb(self) -> &'static str {
        match self {
            Factor::GdpPerCapita => {
                "GDP per capita is a measure of a country's economic output per person. \
                 Higher economic prosperity is associated with higher levels of happiness."
            }
            Factor::SocialSupport => {
                "Social support refers to the support and assistance people receive from \
                 their friends, family, and community. Strong social connections contribute \
                 to higher happiness levels."
            }
            Factor::HealthyLifeExpectancy => {
                "Healthy life expectancy is the average number of years a person can expect \
                 to live in good health. Longer and healthier lives are linked to increased \
                 happiness."
            }
            Factor::FreedomToMakeLifeChoices => {
                "Freedom to make life choices reflects the level of autonomy and control \
                 people have over their lives. Greater freedom is associated with higher \
                 happiness levels."
            }
            Factor::Generosity => {
                "Generosity is measured by the proportion of people who donate money to \
                 charity. Acts of kindness and giving contribute to both individual and \
                 societal happiness."
            }
            Factor::PerceptionsOfCorruption => {
                "Perceptions of corruption indicate the extent to which people believe \
                 corruption is widespread in their country. Lower levels of perceived \
                 corruption are associated with higher happiness."
            }
        }
    }

    /// The factor's value in a record.
    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            Factor::GdpPerCapita => record.gdp_per_capita,
            Factor::SocialSupport => record.social_support,
            Factor::HealthyLifeExpectancy => record.healthy_life_expectancy,
            Factor::FreedomToMakeLifeChoices => record.freedom_to_make_life_choices,
            Factor::Generosity => record.generosity,
            Factor::PerceptionsOfCorruption => record.perceptions_of_corruption,
        }
    }

    pub fn from_label(label: &str) -> Option<Factor> {
        Factor::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// What the current view is ordered by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortCriteria {
    /// Descending by overall happiness score (the default).
    Score,
    /// Ascending by country name.
    Alphabetical,
    /// Descending by one factor's value.
    Factor(Factor),
}

impl SortCriteria {
    /// Maps a sort-dropdown value to a criteria. The empty value is the
    /// default score ordering.
    pub fn from_select_value(value: &str) -> SortCriteria {
        if value == "alphabetical" {
            SortCriteria::Alphabetical
        } else if let Some(factor) = Factor::from_label(value) {
            SortCriteria::Factor(factor)
        } else {
            SortCriteria::Score
        }
    }

    pub fn select_value(self) -> &'static str {
        match self {
            SortCriteria::Score => "",
            SortCriteria::Alphabetical => "alphabetical",
            SortCriteria::Factor(factor) => factor.label(),
        }
    }

    /// The factor driving this criteria, when there is one.
    pub fn selected_factor(self) -> Option<Factor> {
        match self {
            SortCriteria::Factor(factor) => Some(factor),
            _ => None,
        }
    }
}

/// Derive the rendered view from the fetched records
///
/// Keeps records whose country name contains the search term
/// (case-insensitively; an empty term matches everything), then orders them
/// by the sort criteria. The sort is stable, so records with equal keys keep
/// their input order; records whose sort key is null order after all records
/// with a value.
///
/// # Arguments
/// * `records` - The full fetched dataset
/// * `search_term` - Case-insensitive substring filter on country name
/// * `sort` - Ordering criteria
///
/// # Returns
/// * `Vec<Record>` - The filtered, ordered view
pub fn filter_and_sort(records: &[Record], search_term: &str, sort: SortCriteria) -> Vec<Record> {
    let needle = search_term.to_lowercase();

    let mut view: Vec<Record> = records
        .iter()
        .filter(|r| r.country.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortCriteria::Alphabetical => {
            view.sort_by(|a, b| a.country.to_lowercase().cmp(&b.country.to_lowercase()));
        }
        SortCriteria::Score => sort_descending(&mut view, |r| r.score),
        SortCriteria::Factor(factor) => sort_descending(&mut view, |r| factor.value(r)),
    }

    view
}

fn sort_descending(view: &mut [Record], key: impl Fn(&Record) -> Option<f64>) {
    view.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
