//! 30-day baseline of service-application counts per district, aligned
//! index-for-index with the canonical district list.

/// `(district, received, delivered, pending)` for the last 30 days.
pub(crate) const SERVICE_BASELINE: [(&str, i32, i32, i32); 75] = [
    ("Agra", 450, 390, 60),
    ("Aligarh", 510, 420, 90),
    ("Ambedkar Nagar", 150, 135, 15),
    ("Amethi", 180, 150, 30),
    ("Amroha", 220, 180, 40),
    ("Auraiya", 110, 90, 20),
    ("Ayodhya (Faizabad)", 380, 300, 80),
    ("Azamgarh", 550, 480, 70),
    ("Baghpat", 130, 110, 20),
    ("Bahraich", 330, 280, 50),
    ("Ballia", 270, 210, 60),
    ("Balrampur", 190, 150, 40),
    ("Banda", 170, 140, 30),
    ("Barabanki", 300, 250, 50),
    ("Bareilly", 480, 400, 80),
    ("Basti", 230, 180, 50),
    ("Bhadohi", 140, 125, 15),
    ("Bijnor", 290, 240, 50),
    ("Budaun", 210, 160, 50),
    ("Bulandshahr", 350, 310, 40),
    ("Chandauli", 160, 130, 30),
    ("Chitrakoot", 100, 85, 15),
    ("Deoria", 320, 270, 50),
    ("Etah", 180, 150, 30),
    ("Etawah", 250, 200, 50),
    ("Farrukhabad", 200, 160, 40),
    ("Fatehpur", 270, 220, 50),
    ("Firozabad", 310, 260, 50),
    ("Gautam Buddha Nagar (Noida)", 600, 550, 50),
    ("Ghaziabad", 580, 500, 80),
    ("Ghazipur", 280, 230, 50),
    ("Gonda", 340, 290, 50),
    ("Gorakhpur", 530, 460, 70),
    ("Hamirpur", 120, 100, 20),
    ("Hapur", 240, 210, 30),
    ("Hardoi", 370, 310, 60),
    ("Hathras", 190, 160, 30),
    ("Jalaun", 170, 140, 30),
    ("Jaunpur", 410, 350, 60),
    ("Jhansi", 330, 290, 40),
    ("Kannauj", 150, 130, 20),
    ("Kanpur Dehat", 220, 190, 30),
    ("Kanpur Nagar", 590, 510, 80),
    ("Kasganj", 130, 110, 20),
    ("Kaushambi", 140, 115, 25),
    ("Kheri (Lakhimpur)", 380, 330, 50),
    ("Kushinagar", 260, 210, 50),
    ("Lalitpur", 160, 135, 25),
    ("Lucknow", 700, 620, 80),
    ("Maharajganj", 290, 250, 40),
    ("Mahoba", 110, 95, 15),
    ("Mainpuri", 200, 170, 30),
    ("Mathura", 520, 450, 70),
    ("Mau", 210, 180, 30),
    ("Meerut", 650, 580, 70),
    ("Mirzapur", 250, 200, 50),
    ("Moradabad", 490, 420, 70),
    ("Muzaffarnagar", 400, 350, 50),
    ("Pilibhit", 190, 160, 30),
    ("Prayagraj (Allahabad)", 680, 600, 80),
    ("Pratapgarh", 280, 230, 50),
    ("Raebareli", 310, 260, 50),
    ("Rampur", 350, 300, 50),
    ("Saharanpur", 430, 370, 60),
    ("Sambhal", 230, 190, 40),
    ("Sant Kabir Nagar", 180, 150, 30),
    ("Shahjahanpur", 320, 270, 50),
    ("Shamli", 150, 130, 20),
    ("Shrawasti", 100, 85, 15),
    ("Siddharthnagar", 210, 170, 40),
    ("Sitapur", 360, 300, 60),
    ("Sonbhadra", 240, 200, 40),
    ("Sultanpur", 300, 250, 50),
    ("Unnao", 330, 280, 50),
    ("Varanasi", 620, 540, 80),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::districts::UTTAR_PRADESH_DISTRICTS;

    #[test]
    fn baseline_is_aligned_with_the_district_list() {
        assert_eq!(SERVICE_BASELINE.len(), UTTAR_PRADESH_DISTRICTS.len());
        for ((name, ..), district) in SERVICE_BASELINE.iter().zip(UTTAR_PRADESH_DISTRICTS) {
            assert_eq!(*name, district);
        }
    }

    #[test]
    fn received_splits_into_delivered_and_pending() {
        for (name, received, delivered, pending) in SERVICE_BASELINE {
            assert_eq!(received, delivered + pending, "inconsistent row for {name}");
        }
    }
}
