//! The 81 provinces (il) of Türkiye, in licence-plate code order.
//!
//! Position `n` in [`PROVINCES`] is plate code `n + 1`, so `"06"` and `"6"`
//! both resolve to Ankara through [`find_province`].

pub const PROVINCES: [&str; 81] = [
    "Adana",
    "Adıyaman",
    "Afyonkarahisar",
    "Ağrı",
    "Amasya",
    "Ankara",
    "Antalya",
    "Artvin",
    "Aydın",
    "Balıkesir",
    "Bilecik",
    "Bingöl",
    "Bitlis",
    "Bolu",
    "Burdur",
    "Bursa",
    "Çanakkale",
    "Çankırı",
    "Çorum",
    "Denizli",
    "Diyarbakır",
    "Edirne",
    "Elazığ",
    "Erzincan",
    "Erzurum",
    "Eskişehir",
    "Gaziantep",
    "Giresun",
    "Gümüşhane",
    "Hakkari",
    "Hatay",
    "Isparta",
    "Mersin",
    "İstanbul",
    "İzmir",
    "Kars",
    "Kastamonu",
    "Kayseri",
    "Kırklareli",
    "Kırşehir",
    "Kocaeli",
    "Konya",
    "Kütahya",
    "Malatya",
    "Manisa",
    "Kahramanmaraş",
    "Mardin",
    "Muğla",
    "Muş",
    "Nevşehir",
    "Niğde",
    "Ordu",
    "Rize",
    "Sakarya",
    "Samsun",
    "Siirt",
    "Sinop",
    "Sivas",
    "Tekirdağ",
    "Tokat",
    "Trabzon",
    "Tunceli",
    "Şanlıurfa",
    "Uşak",
    "Van",
    "Yozgat",
    "Zonguldak",
    "Aksaray",
    "Bayburt",
    "Karaman",
    "Kırıkkale",
    "Batman",
    "Şırnak",
    "Bartın",
    "Ardahan",
    "Iğdır",
    "Yalova",
    "Karabük",
    "Kilis",
    "Osmaniye",
    "Düzce",
];

/// Resolves user input to the canonical province name.
///
/// Accepts, in order of precedence: a plate code (`"6"`, `"06"`), an exact
/// name, a Turkish-aware case-insensitive name (`"izmir"`, `"ISPARTA"`), or
/// a name typed without Turkish letters (`"canakkale"`, `"igdir"`).
#[must_use]
pub fn find_province(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(code) = input.parse::<usize>() {
        return code
            .checked_sub(1)
            .and_then(|idx| PROVINCES.get(idx))
            .copied();
    }

    if let Some(exact) = PROVINCES.iter().find(|p| **p == input) {
        return Some(exact);
    }

    let lowered = turkish_lowercase(input);
    if let Some(found) = PROVINCES.iter().find(|p| turkish_lowercase(p) == lowered) {
        return Some(found);
    }

    let folded = ascii_fold(&lowered);
    PROVINCES
        .iter()
        .find(|p| ascii_fold(&turkish_lowercase(p)) == folded)
        .copied()
}

/// Lowercases with the Turkish dotted/dotless `i` rules.
fn turkish_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

fn ascii_fold(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'ç' => 'c',
            'ğ' => 'g',
            'ı' => 'i',
            'ö' => 'o',
            'ş' => 's',
            'ü' => 'u',
            other => other,
        })
        .collect()
}
