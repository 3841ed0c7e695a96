//! User-facing Turkish strings.

pub const MISSING_API_KEY: &str = "Lütfen .env dosyasına API anahtarını ekleyin.";
pub const NO_RESULTS: &str = "Bu kriterlere uygun nöbetçi eczane bulunamadı.";
pub const API_FAILURE_FALLBACK: &str = "Eczane bilgileri alınırken bir hata oluştu.";
pub const TRANSPORT_FAILURE_FALLBACK: &str = "Bilinmeyen bir hata oluştu.";

pub const LOADING: &str = "Nöbetçi eczaneler aranıyor...";
pub const IDLE_PROMPT: &str = "İl seçerek nöbetçi eczane aramasını başlatın.";

pub const SEARCH_LABEL: &str = "Eczane Bul";
pub const SEARCH_LABEL_BUSY: &str = "Aranıyor...";

pub const APP_TITLE: &str = "Nöbetçi Eczane Bulucu";
pub const RESULTS_TITLE_SUFFIX: &str = "Nöbetçi Eczaneler";
pub const CALL_LABEL: &str = "Ara";
pub const DIRECTIONS_LABEL: &str = "Yol Tarifi";
