use std::collections::HashMap;

/// The 75 districts of Uttar Pradesh, in the order the dashboard lists them.
///
/// This is the authoritative set of valid district names. Entries with a
/// former name keep the parenthetical qualifier, e.g. "Ayodhya (Faizabad)".
pub(crate) const UTTAR_PRADESH_DISTRICTS: [&str; 75] = [
    "Agra",
    "Aligarh",
    "Ambedkar Nagar",
    "Amethi",
    "Amroha",
    "Auraiya",
    "Ayodhya (Faizabad)",
    "Azamgarh",
    "Baghpat",
    "Bahraich",
    "Ballia",
    "Balrampur",
    "Banda",
    "Barabanki",
    "Bareilly",
    "Basti",
    "Bhadohi",
    "Bijnor",
    "Budaun",
    "Bulandshahr",
    "Chandauli",
    "Chitrakoot",
    "Deoria",
    "Etah",
    "Etawah",
    "Farrukhabad",
    "Fatehpur",
    "Firozabad",
    "Gautam Buddha Nagar (Noida)",
    "Ghaziabad",
    "Ghazipur",
    "Gonda",
    "Gorakhpur",
    "Hamirpur",
    "Hapur",
    "Hardoi",
    "Hathras",
    "Jalaun",
    "Jaunpur",
    "Jhansi",
    "Kannauj",
    "Kanpur Dehat",
    "Kanpur Nagar",
    "Kasganj",
    "Kaushambi",
    "Kheri (Lakhimpur)",
    "Kushinagar",
    "Lalitpur",
    "Lucknow",
    "Maharajganj",
    "Mahoba",
    "Mainpuri",
    "Mathura",
    "Mau",
    "Meerut",
    "Mirzapur",
    "Moradabad",
    "Muzaffarnagar",
    "Pilibhit",
    "Prayagraj (Allahabad)",
    "Pratapgarh",
    "Raebareli",
    "Rampur",
    "Saharanpur",
    "Sambhal",
    "Sant Kabir Nagar",
    "Shahjahanpur",
    "Shamli",
    "Shrawasti",
    "Siddharthnagar",
    "Sitapur",
    "Sonbhadra",
    "Sultanpur",
    "Unnao",
    "Varanasi",
];

/// An immutable, ordered set of canonical district names with a
/// case-insensitive lookup index built once at construction.
///
/// The index maps each lower-cased name to its position in the original
/// list. Names are unique under lower-casing; if a duplicate were ever
/// supplied, the first-listed entry wins.
pub(crate) struct DistrictSet {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl DistrictSet {
    pub(crate) fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            index.entry(name.to_lowercase()).or_insert(i);
        }
        Self { names, index }
    }

    pub(crate) fn uttar_pradesh() -> Self {
        Self::new(&UTTAR_PRADESH_DISTRICTS)
    }

    /// Case-insensitive literal match of a trimmed name against the set.
    /// Returns the canonical spelling.
    pub(crate) fn exact_match(&self, name: &str) -> Option<&str> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| self.names[i].as_str())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_all_75_districts() {
        let set = DistrictSet::uttar_pradesh();
        assert_eq!(set.iter().count(), 75);
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let set = DistrictSet::uttar_pradesh();
        for name in UTTAR_PRADESH_DISTRICTS {
            assert_eq!(set.exact_match(name), Some(name));
            assert_eq!(set.exact_match(&name.to_uppercase()), Some(name));
            assert_eq!(set.exact_match(&name.to_lowercase()), Some(name));
        }
    }

    #[test]
    fn exact_match_trims_whitespace() {
        let set = DistrictSet::uttar_pradesh();
        assert_eq!(set.exact_match("  lucknow  "), Some("Lucknow"));
    }

    #[test]
    fn exact_match_is_literal_not_normalized() {
        let set = DistrictSet::uttar_pradesh();
        // Dropping the parentheses changes the literal spelling, so this
        // must miss even though the normalized forms coincide.
        assert_eq!(set.exact_match("Kheri Lakhimpur"), None);
        assert_eq!(set.exact_match("kheri (lakhimpur)"), Some("Kheri (Lakhimpur)"));
    }

    #[test]
    fn no_two_names_collide_under_lowercasing() {
        let set = DistrictSet::uttar_pradesh();
        assert_eq!(set.index.len(), set.names.len());
    }

    #[test]
    fn first_listed_wins_on_duplicate() {
        let set = DistrictSet::new(&["Agra", "AGRA"]);
        assert_eq!(set.exact_match("agra"), Some("Agra"));
    }
}
