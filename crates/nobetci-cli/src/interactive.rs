//! Line-based form loop.
//!
//! The province prompt takes a name or plate code (empty keeps the current
//! one). The district prompt line ends with Enter, which submits the same
//! request the search action (`:ara`) would. Results arrive on a channel
//! while the prompt stays usable; a newer search supersedes older ones.

use std::io::Write as _;

use nobetci_core::messages;
use nobetci_core::{
    render, Field, FormError, FormEvent, Key, SearchForm, SearchRequest, SearchSession,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::lookup::Lookup;
use crate::render::{banner, footer, render_view};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineAction {
    Continue,
    Submit(SearchRequest),
    Invalid(FormError),
    Quit,
}

/// Turns one input line into form events according to the focused field.
pub(crate) fn handle_line(form: &mut SearchForm, focus: &mut Field, line: &str) -> LineAction {
    let trimmed = line.trim();
    match trimmed {
        ":q" | ":quit" | ":çık" => return LineAction::Quit,
        ":ara" => {
            *focus = Field::Province;
            return match form.handle(FormEvent::SearchClicked) {
                Ok(Some(request)) => LineAction::Submit(request),
                Ok(None) => LineAction::Continue,
                Err(e) => LineAction::Invalid(e),
            };
        }
        _ => {}
    }

    match *focus {
        Field::Province => {
            if !trimmed.is_empty() {
                if let Err(e) = form.handle(FormEvent::SelectProvince(trimmed.to_string())) {
                    return LineAction::Invalid(e);
                }
            }
            *focus = Field::District;
            LineAction::Continue
        }
        Field::District => {
            let edited = form.handle(FormEvent::EditDistrict(trimmed.to_string()));
            let submitted = edited.and_then(|_| {
                form.handle(FormEvent::KeyDown {
                    field: Field::District,
                    key: Key::Enter,
                })
            });
            *focus = Field::Province;
            match submitted {
                Ok(Some(request)) => LineAction::Submit(request),
                Ok(None) => LineAction::Continue,
                Err(e) => LineAction::Invalid(e),
            }
        }
    }
}

fn prompt(form: &SearchForm, focus: Field, busy: bool) -> std::io::Result<()> {
    let status = if busy {
        messages::SEARCH_LABEL_BUSY
    } else {
        messages::SEARCH_LABEL
    };
    match focus {
        Field::Province => print!("İl [{}] ({status}): ", form.province()),
        Field::District => print!("İlçe (Opsiyonel, Enter = {}): ", messages::SEARCH_LABEL),
    }
    std::io::stdout().flush()
}

/// Runs the form until `:q` or end of input.
///
/// On end of input a search still in flight is awaited so piped input
/// (`printf 'Ankara\nÇankaya\n' | nobetci interactive`) prints its result.
///
/// # Errors
///
/// Returns an error if `province` is unknown or stdin/stdout fail.
pub(crate) async fn run_interactive(lookup: Lookup, province: &str) -> anyhow::Result<()> {
    let mut form = SearchForm::new(province)?;
    let mut session = SearchSession::new();
    let mut focus = Field::Province;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", banner(chrono::Local::now().naive_local()));
    println!("{}", render_view(&render(session.state())));
    prompt(&form, focus, false)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match handle_line(&mut form, &mut focus, &line) {
                    LineAction::Quit => return Ok(()),
                    LineAction::Continue => {}
                    LineAction::Invalid(e) => println!("\u{2716} {e}"),
                    LineAction::Submit(request) => {
                        lookup.spawn(&mut session, request, &tx);
                        println!("{}", render_view(&render(session.state())));
                    }
                }
                prompt(&form, focus, session.state().is_loading())?;
            }
            Some((ticket, outcome)) = rx.recv() => {
                if session.complete(ticket, outcome) {
                    println!();
                    println!("{}", render_view(&render(session.state())));
                    prompt(&form, focus, false)?;
                }
            }
        }
    }

    while session.state().is_loading() {
        let Some((ticket, outcome)) = rx.recv().await else {
            break;
        };
        if session.complete(ticket, outcome) {
            println!();
            println!("{}", render_view(&render(session.state())));
        }
    }
    println!("{}", footer(chrono::Local::now().naive_local()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SearchForm {
        SearchForm::new("Ankara").expect("Ankara is a province")
    }

    #[test]
    fn province_then_district_submits() {
        let mut f = form();
        let mut focus = Field::Province;
        assert_eq!(handle_line(&mut f, &mut focus, "35"), LineAction::Continue);
        assert_eq!(focus, Field::District);
        assert_eq!(
            handle_line(&mut f, &mut focus, "Bornova"),
            LineAction::Submit(SearchRequest {
                province: "İzmir".to_string(),
                district: "Bornova".to_string(),
            })
        );
        assert_eq!(focus, Field::Province);
    }

    #[test]
    fn empty_province_line_keeps_selection() {
        let mut f = form();
        let mut focus = Field::Province;
        handle_line(&mut f, &mut focus, "");
        assert_eq!(f.province(), "Ankara");
        assert_eq!(focus, Field::District);
    }

    #[test]
    fn empty_district_line_submits_without_filter() {
        let mut f = form();
        let mut focus = Field::District;
        assert_eq!(
            handle_line(&mut f, &mut focus, ""),
            LineAction::Submit(SearchRequest {
                province: "Ankara".to_string(),
                district: String::new(),
            })
        );
    }

    #[test]
    fn enter_in_district_matches_search_command() {
        let mut by_enter = form();
        let mut focus = Field::Province;
        handle_line(&mut by_enter, &mut focus, "Bursa");
        let from_enter = handle_line(&mut by_enter, &mut focus, "Nilüfer");

        let mut by_command = form();
        by_command.select_province("Bursa").expect("Bursa is a province");
        by_command.edit_district("Nilüfer");
        let mut focus = Field::Province;
        let from_command = handle_line(&mut by_command, &mut focus, ":ara");

        assert!(matches!(from_enter, LineAction::Submit(_)));
        assert_eq!(from_enter, from_command);
    }

    #[test]
    fn unknown_province_stays_on_province_prompt() {
        let mut f = form();
        let mut focus = Field::Province;
        let action = handle_line(&mut f, &mut focus, "Mordor");
        assert_eq!(
            action,
            LineAction::Invalid(FormError::UnknownProvince("Mordor".to_string()))
        );
        assert_eq!(focus, Field::Province);
    }

    #[test]
    fn quit_commands() {
        let mut f = form();
        let mut focus = Field::District;
        assert_eq!(handle_line(&mut f, &mut focus, ":q"), LineAction::Quit);
        assert_eq!(handle_line(&mut f, &mut focus, ":quit"), LineAction::Quit);
    }
}
