//! Terminal rendering of the view model, plus the banner and footer.

use chrono::{Datelike, NaiveDateTime, Timelike};
use nobetci_core::messages;
use nobetci_core::{Card, NoticeKind, View, ViewBody, PROVINCES};

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const WEEKDAYS_TR: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

/// Title block with the live clock, e.g.
/// `81 İl · 7/24 Canlı Veri · 14:05 · 19 Ekim Pazartesi`.
pub(crate) fn banner(now: NaiveDateTime) -> String {
    format!(
        "{title}\n81 İl \u{b7} 7/24 Canlı Veri \u{b7} {time} \u{b7} {date}\n",
        title = messages::APP_TITLE,
        time = format_time_tr(now),
        date = format_date_tr(now),
    )
}

pub(crate) fn footer(now: NaiveDateTime) -> String {
    format!(
        "Veriler CollectAPI üzerinden anlık çekilmektedir \u{b7} \u{a9} {} {}",
        now.year(),
        messages::APP_TITLE
    )
}

fn format_time_tr(now: NaiveDateTime) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Long Turkish date without the year: `"19 Ekim Pazartesi"`.
fn format_date_tr(now: NaiveDateTime) -> String {
    let month = MONTHS_TR[now.month0() as usize];
    let weekday = WEEKDAYS_TR[now.weekday().num_days_from_monday() as usize];
    format!("{} {month} {weekday}", now.day())
}

/// Numbered province list, one per line.
pub(crate) fn province_list() -> String {
    PROVINCES
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:02} {name}\n", i + 1))
        .collect()
}

/// Renders a view as plain text.
pub(crate) fn render_view(view: &View) -> String {
    let mut out = String::new();

    if let Some(header) = &view.header {
        out.push_str(&format!("{} \u{b7} {}\n\n", header.title, header.count_label));
    }

    match &view.body {
        ViewBody::Notice(notice) => {
            let marker = match notice.kind {
                NoticeKind::Loading => "\u{2026}",
                NoticeKind::Error => "\u{2716}",
                NoticeKind::NoResults => "\u{2139}",
                NoticeKind::Prompt => "\u{203a}",
            };
            out.push_str(&format!("{marker} {}\n", notice.text));
        }
        ViewBody::Cards(cards) => {
            for card in cards {
                out.push_str(&render_card(card));
            }
        }
    }

    out
}

fn render_card(card: &Card) -> String {
    let mut out = format!("{:>2}. {}", card.number, card.name);
    if let Some(badge) = &card.district_badge {
        out.push_str(&format!("  [{badge}]"));
    }
    out.push('\n');

    if let Some(address) = &card.address {
        out.push_str(&format!("    Adres  : {address}\n"));
    }
    if let Some(phone) = &card.phone {
        out.push_str(&format!("    Telefon: {phone}\n"));
    }

    let mut actions = Vec::new();
    if let Some(link) = &card.call_link {
        actions.push(format!("{}: {link}", messages::CALL_LABEL));
    }
    if let Some(link) = &card.directions_link {
        actions.push(format!("{}: {link}", messages::DIRECTIONS_LABEL));
    }
    if !actions.is_empty() {
        out.push_str(&format!("    {}\n", actions.join("  |  ")));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use nobetci_core::{render, PharmacyRecord, SearchState};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("valid date")
    }

    #[test]
    fn date_is_formatted_in_turkish() {
        assert_eq!(format_date_tr(at(2026, 10, 19, 9, 5)), "19 Ekim Pazartesi");
        assert_eq!(format_date_tr(at(2025, 1, 5, 23, 59)), "5 Ocak Pazar");
    }

    #[test]
    fn time_is_zero_padded() {
        assert_eq!(format_time_tr(at(2026, 10, 19, 9, 5)), "09:05");
    }

    #[test]
    fn banner_contains_clock_and_title() {
        let text = banner(at(2026, 10, 19, 14, 30));
        assert!(text.starts_with("Nöbetçi Eczane Bulucu\n"));
        assert!(text.contains("14:30"));
        assert!(text.contains("19 Ekim Pazartesi"));
    }

    #[test]
    fn footer_has_year() {
        assert!(footer(at(2026, 10, 19, 0, 0)).contains("\u{a9} 2026 Nöbetçi Eczane Bulucu"));
    }

    #[test]
    fn province_list_has_81_numbered_lines() {
        let list = province_list();
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(lines.len(), 81);
        assert_eq!(lines[0], "01 Adana");
        assert_eq!(lines[5], "06 Ankara");
        assert_eq!(lines[80], "81 Düzce");
    }

    #[test]
    fn cards_render_links_only_when_present() {
        let state = SearchState::Success {
            province: "Ankara".to_string(),
            results: vec![
                PharmacyRecord {
                    name: "HAYAT ECZANESİ".to_string(),
                    dist: Some("Çankaya".to_string()),
                    address: Some("Kızılay".to_string()),
                    phone: Some("03124181234".to_string()),
                    loc: Some("39.92,32.85".to_string()),
                },
                PharmacyRecord {
                    name: "SADE ECZANESİ".to_string(),
                    dist: None,
                    address: None,
                    phone: None,
                    loc: None,
                },
            ],
        };
        let text = render_view(&render(&state));

        assert!(text.starts_with("Ankara \u{2014} Nöbetçi Eczaneler \u{b7} 2 eczane aktif\n"));
        assert!(text.contains(" 1. HAYAT ECZANESİ  [Çankaya]"));
        assert!(text.contains("Ara: tel:03124181234"));
        assert!(text.contains("Yol Tarifi: https://maps.google.com/?q=39.92,32.85"));
        assert!(text.contains(" 2. SADE ECZANESİ\n"));
        assert_eq!(text.matches("tel:").count(), 1);
        assert_eq!(text.matches("maps.google.com").count(), 1);
    }

    #[test]
    fn error_and_no_results_use_different_markers() {
        let error = render_view(&render(&SearchState::Error {
            message: "X".to_string(),
        }));
        let empty = render_view(&render(&SearchState::Success {
            province: "Ankara".to_string(),
            results: Vec::new(),
        }));
        assert_eq!(error, "\u{2716} X\n");
        assert_eq!(
            empty,
            "\u{2139} Bu kriterlere uygun nöbetçi eczane bulunamadı.\n"
        );
    }
}
