//! Pure rendering of a [`SearchState`] into a front-end neutral view model.
//!
//! Front ends only decide how a [`View`] looks; which blocks exist, their
//! text, and which links a card carries are decided here.

use crate::messages;
use crate::pharmacy::PharmacyRecord;
use crate::search::SearchState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub search_label: &'static str,
    pub busy: bool,
    pub header: Option<ResultsHeader>,
    pub body: ViewBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsHeader {
    /// `"<province> — Nöbetçi Eczaneler"`
    pub title: String,
    /// `"<n> eczane aktif"`
    pub count_label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Notice(Notice),
    Cards(Vec<Card>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Loading,
    Error,
    /// Successful search with zero matches; styled as information.
    NoResults,
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// 1-based position in the result list.
    pub number: usize,
    pub name: String,
    pub district_badge: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub call_link: Option<String>,
    pub directions_link: Option<String>,
}

impl Card {
    fn from_record(number: usize, record: &PharmacyRecord) -> Self {
        Self {
            number,
            name: record.name.clone(),
            district_badge: record.dist.clone(),
            address: record.address.clone(),
            phone: record.phone.clone(),
            call_link: record.call_link(),
            directions_link: record.directions_link(),
        }
    }
}

impl View {
    /// Cards in display order; empty unless the body is a card list.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            ViewBody::Cards(cards) => cards,
            ViewBody::Notice(_) => &[],
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        match &self.body {
            ViewBody::Notice(notice) => Some(notice),
            ViewBody::Cards(_) => None,
        }
    }
}

/// Builds the view for `state`.
#[must_use]
pub fn render(state: &SearchState) -> View {
    let busy = state.is_loading();
    let search_label = if busy {
        messages::SEARCH_LABEL_BUSY
    } else {
        messages::SEARCH_LABEL
    };

    let (header, body) = match state {
        SearchState::Idle => (None, notice(NoticeKind::Prompt, messages::IDLE_PROMPT)),
        SearchState::Loading { .. } => (None, notice(NoticeKind::Loading, messages::LOADING)),
        SearchState::Error { message } => (None, notice(NoticeKind::Error, message)),
        SearchState::Success { results, .. } if results.is_empty() => {
            (None, notice(NoticeKind::NoResults, messages::NO_RESULTS))
        }
        SearchState::Success { province, results } => {
            let header = ResultsHeader {
                title: format!("{province} \u{2014} {}", messages::RESULTS_TITLE_SUFFIX),
                count_label: format!("{} eczane aktif", results.len()),
                count: results.len(),
            };
            let cards = results
                .iter()
                .enumerate()
                .map(|(i, record)| Card::from_record(i + 1, record))
                .collect();
            (Some(header), ViewBody::Cards(cards))
        }
    };

    View {
        search_label,
        busy,
        header,
        body,
    }
}

fn notice(kind: NoticeKind, text: &str) -> ViewBody {
    ViewBody::Notice(Notice {
        kind,
        text: text.to_string(),
    })
}
