//! Static dashboard content: link groups, addons, informational documents
//! and the fixed external destinations.

use chrono::NaiveDate;

use crate::addon::{Addon, Browser, BrowserBadge};
use crate::clock::{DateLocale, format_short_date};
use crate::document::{Block, Document, Inline, Leaf, Section};
use crate::link::{LinkGroup, LinkItem, MarkerColor};

pub const PRODUCT_TITLE: &str = "DEV LABS R&S";
pub const PRODUCT_VERSION: &str = "v1.1.0 Dev";

/// Opened after a successful console login.
pub const PORTAL_URL: &str = "https://devospanel.carrd.co/";
pub const PLAYLIVEOS_URL: &str = "https://playliveos.carrd.co/";
pub const DRIVERS_URL: &str = "https://w5e.carrd.co/";

pub const ADDONS_TITLE: &str = "Navigation Options";
pub const PRIVACY_TITLE: &str = "Privacy Policy";
pub const HELP_TITLE: &str = "Pomoc - Logowanie";

/// Link cards in the left column of the main grid.
#[must_use]
pub fn left_groups() -> Vec<LinkGroup> {
    vec![
        LinkGroup {
            columns: vec![
                vec![
                    LinkItem::new("Outlook", "fa-envelope", "https://outlook.office.com/"),
                    LinkItem::new("Teams", "fa-comments", "https://teams.microsoft.com/"),
                    LinkItem::new("Calendar", "fa-calendar-alt", "https://outlook.office.com/calendar/"),
                ],
                vec![
                    LinkItem::new("SharePoint", "fa-share-alt", "https://www.microsoft.com/microsoft-365/sharepoint/"),
                    LinkItem::new("OneDrive", "fa-cloud", "https://onedrive.live.com/"),
                    LinkItem::new("Office", "fa-file-word", "https://www.office.com/"),
                ],
            ],
            marker_color: Some(MarkerColor::Orange),
        },
        LinkGroup {
            columns: vec![vec![
                LinkItem::new("GitHub", "fa-code-branch", "https://github.com/"),
                LinkItem::new("Jira", "fa-tasks", "https://www.atlassian.com/software/jira"),
                LinkItem::new("Confluence", "fa-book", "https://www.atlassian.com/software/confluence"),
            ]],
            marker_color: Some(MarkerColor::Blue),
        },
    ]
}

/// Link cards in the right column of the main grid.
#[must_use]
pub fn right_groups() -> Vec<LinkGroup> {
    vec![
        LinkGroup {
            columns: vec![
                vec![
                    LinkItem::new("ChatGPT", "fa-robot", "https://chatgpt.com/"),
                    LinkItem::new("Gemini", "fa-gem", "https://gemini.google.com/"),
                ],
                vec![
                    LinkItem::new("Perplexity", "fa-search", "https://www.perplexity.ai/"),
                    LinkItem::new("Copilot", "fa-magic", "https://copilot.microsoft.com/"),
                ],
            ],
            marker_color: Some(MarkerColor::Green),
        },
        LinkGroup {
            columns: vec![vec![
                LinkItem::new("PlayLiveOS", "fa-play", PLAYLIVEOS_URL),
                LinkItem::new("Lista Driverów", "fa-users", DRIVERS_URL),
                LinkItem::label("Intranet"),
            ]],
            marker_color: Some(MarkerColor::Purple),
        },
    ]
}

fn badge(browser: Browser, url: &str) -> BrowserBadge {
    BrowserBadge {
        browser,
        url: url.to_string(),
    }
}

fn addon(name: &str, icon: &str, description: &str, badges: Vec<BrowserBadge>) -> Addon {
    Addon {
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        badges,
    }
}

/// Recommended browser extensions.
#[must_use]
pub fn addons() -> Vec<Addon> {
    use Browser::{Chrome, Edge, Firefox};

    vec![
        addon(
            "uBlock Origin",
            "fas fa-shield-alt",
            "Wydajny bloker reklam i elementów śledzących",
            vec![
                badge(Firefox, "https://addons.mozilla.org/pl/firefox/addon/ublock-origin/"),
                badge(Edge, "https://microsoftedge.microsoft.com/addons/detail/ublock-origin/odfafepnkmbhccpbejgmiehpchacaeak"),
                badge(Chrome, "https://chromewebstore.google.com/detail/ublock-origin/cjpalhdlnbpafiamejdnhcphjbkeiagm"),
            ],
        ),
        addon(
            "Dark Reader",
            "fas fa-moon",
            "Ciemny motyw dla każdej strony internetowej",
            vec![
                badge(Firefox, "https://addons.mozilla.org/pl/firefox/addon/darkreader/"),
                badge(Edge, "https://microsoftedge.microsoft.com/addons/detail/dark-reader/ifoakfbpdcdoeenechcleahebpibofpc"),
                badge(Chrome, "https://chromewebstore.google.com/detail/dark-reader/eimadpbcbfnmbkopoojfekhnkhdbieeh"),
            ],
        ),
        addon(
            "Stylus",
            "fas fa-palette",
            "Menedżer stylów do modyfikacji wyglądu stron",
            vec![
                badge(Firefox, "https://addons.mozilla.org/pl/firefox/addon/styl-us/"),
                badge(Chrome, "https://chromewebstore.google.com/detail/stylus/clngdbkpkpeebahjckkjfobafhncgmne"),
            ],
        ),
        addon(
            "Tampermonkey",
            "fas fa-code",
            "Menedżer skryptów użytkownika",
            vec![
                badge(Firefox, "https://addons.mozilla.org/pl/firefox/addon/tampermonkey/"),
                badge(Edge, "https://microsoftedge.microsoft.com/addons/detail/tampermonkey/iikmkjmpaadaobahmlepeloendndfphd"),
                badge(Chrome, "https://chromewebstore.google.com/detail/tampermonkey/dhdgffkkebhmkfjojejmpbldmpobfkfo"),
            ],
        ),
        addon(
            "Inspecta",
            "fas fa-search",
            "Narzędzie do inspekcji wizualnej i CSS",
            vec![badge(Chrome, "https://chromewebstore.google.com/detail/inspecta-visual-qa-and-cs/pjcfmgokdbdffkcldahbehpemeejglhh")],
        ),
        addon(
            "Inspect CSS",
            "fas fa-eye",
            "Zaawansowane narzędzie do inspekcji i analizy CSS",
            vec![badge(Chrome, "https://chromewebstore.google.com/detail/inspect-css/fbopfffegfehobgoommphghohinpkego")],
        ),
        addon(
            "BezPrzerwy YouTube™",
            "fab fa-youtube",
            "Automatyczne odtwarzanie YouTube bez przerw",
            vec![badge(Edge, "https://microsoftedge.microsoft.com/addons/detail/bezprzerwy-youtube%E2%84%A2/klfgmbgpidpnfkpjmpdlegfcjilgkcec")],
        ),
    ]
}

fn bullets(items: &[(&str, &str)]) -> Vec<Vec<Inline>> {
    items
        .iter()
        .map(|(highlight, rest)| vec![Inline::highlight(*highlight), Inline::text(*rest)])
        .collect()
}

/// The addon catalog modal.
#[must_use]
pub fn addons_document() -> Document {
    Document::new(ADDONS_TITLE)
        .block(Block::heading("Polecane Dodatki"))
        .block(Block::text("Przydatne rozszerzenia do przeglądarek:"))
        .block(Block::Section(
            Section::info("Jak zainstalować dodatek:").leaf(Leaf::List(vec![
                vec![Inline::text("Kliknij na ikonę przeglądarki przy wybranym dodatku")],
                vec![Inline::text("Zostaniesz przekierowany do sklepu z rozszerzeniami")],
                vec![
                    Inline::text("Kliknij przycisk "),
                    Inline::highlight("\"Dodaj do przeglądarki\""),
                ],
                vec![Inline::text("Potwierdź instalację w oknie dialogowym")],
            ])),
        ))
        .block(Block::Section(Section::warning().leaf(Leaf::text(
            "Instaluj tylko dodatki z oficjalnych sklepów przeglądarek dla swojego bezpieczeństwa.",
        ))))
        .block(Block::AddonGrid(addons()))
        .block(Block::Section(
            Section::info("Przydatne informacje:").leaf(Leaf::List(bullets(&[
                ("uBlock Origin", " - Najlepszy bloker reklam, redukuje zużycie danych i przyspiesza przeglądanie"),
                ("Dark Reader", " - Automatycznie zmienia jasne strony na ciemne, oszczędza baterie"),
                ("Stylus", " - Pozwala na personalizację wyglądu stron internetowych"),
                ("Tampermonkey", " - Umożliwia uruchamianie skryptów modyfikujących strony"),
            ]))),
        ))
}

fn date_stamp(today: NaiveDate, locale: DateLocale) -> Block {
    Block::Paragraph(vec![
        Inline::strong("Data:"),
        Inline::text(format!(" {}", format_short_date(today, locale))),
    ])
}

/// The privacy policy modal, stamped with `today`.
#[must_use]
pub fn privacy_document(today: NaiveDate, locale: DateLocale) -> Document {
    Document::new(PRIVACY_TITLE)
        .block(Block::heading("Polityka Prywatności"))
        .block(Block::text(
            "Niniejsza polityka prywatności określa zasady funkcjonowania korporacyjnej aplikacji pulpitu nawigacyjnego.",
        ))
        .block(Block::Section(Section::info("Informacje ogólne:").leaf(Leaf::text(
            "Serwis nie zbiera ani nie przetwarza żadnych danych osobowych użytkowników, co zapewnia pełną ochronę prywatności.",
        ))))
        .block(Block::Section(Section::info("Pliki cookies:").leaf(Leaf::text(
            "Serwis wykorzystuje wyłącznie niezbędne pliki cookies techniczne, które są wymagane do prawidłowego działania strony. Te pliki cookies nie służą do zbierania żadnych danych osobowych ani do śledzenia użytkowników.",
        ))))
        .block(Block::Section(
            Section::info("Brak zbierania danych:")
                .leaf(Leaf::text("Serwis:"))
                .leaf(Leaf::List(bullets(&[
                    ("Nie zbiera", " danych osobowych"),
                    ("Nie wymaga", " rejestracji"),
                    ("Nie prowadzi", " newslettera"),
                    ("Nie śledzi", " zachowań użytkowników"),
                    ("Nie wykorzystuje", " narzędzi analitycznych"),
                ]))),
        ))
        .block(Block::Section(Section::warning().leaf(Leaf::text(
            "Wszystkie dane są przechowywane lokalnie w przeglądarce i nie są przekazywane do żadnych zewnętrznych serwisów.",
        ))))
        .block(Block::Section(Section::info("Zmiany w polityce prywatności:").leaf(Leaf::text(
            "Administrator zastrzega sobie prawo do zmiany niniejszej polityki prywatności w dowolnym czasie. O wszelkich zmianach użytkownicy będą informowani z odpowiednim wyprzedzeniem.",
        ))))
        .block(date_stamp(today, locale))
}

/// The login help modal, stamped with `today`.
#[must_use]
pub fn help_document(today: NaiveDate, locale: DateLocale) -> Document {
    let labelled = |label: &str, rest: &str| vec![Inline::strong(label), Inline::text(rest)];

    Document::new(HELP_TITLE)
        .block(Block::heading("Pomoc - Logowanie"))
        .block(Block::text(
            "Witamy w sekcji pomocy Corporate App Dashboard. Znajdziesz tutaj informacje dotyczące logowania do systemu.",
        ))
        .block(Block::Section(Section::info("Jak się zalogować:").leaf(Leaf::List(vec![
            labelled("Nazwa użytkownika:", " Wprowadź swoją nazwę użytkownika w pierwszym polu"),
            labelled("Hasło:", " Wprowadź hasło w drugim polu"),
            vec![
                Inline::strong("Logowanie:"),
                Inline::text(" Kliknij przycisk "),
                Inline::highlight("\"Zaloguj się\""),
                Inline::text(" lub naciśnij Enter"),
            ],
            vec![
                Inline::strong("Motyw:"),
                Inline::text(" Użyj przycisku "),
                Inline::icon("fas fa-moon"),
                Inline::text("/"),
                Inline::icon("fas fa-sun"),
                Inline::text(" aby zmienić motyw"),
            ],
        ]))))
        .block(Block::Section(Section::info("Problemy z logowaniem:").leaf(Leaf::List(vec![
            vec![
                Inline::text("Sprawdź czy "),
                Inline::highlight("caps lock"),
                Inline::text(" nie jest włączony"),
            ],
            vec![Inline::text("Upewnij się, że używasz prawidłowych danych logowania")],
            vec![Inline::text("Odśwież stronę (F5 lub Ctrl+R) i spróbuj ponownie")],
            vec![Inline::text("Wyczyść pamięć podręczną przeglądarki")],
            vec![Inline::text("Skontaktuj się z administratorem systemu")],
        ]))))
        .block(Block::Section(Section::warning().leaf(Leaf::text(
            "Dane logowania są przechowywane lokalnie w przeglądarce i nie są wysyłane do żadnych stron trzecich.",
        ))))
        .block(Block::Section(Section::info("Bezpieczeństwo:").leaf(Leaf::List(vec![
            vec![Inline::text("Nie udostępniaj swoich danych logowania innym osobom")],
            vec![Inline::text("Wyloguj się po zakończeniu pracy")],
            vec![Inline::text("Zgłoś podejrzane aktywności administratorowi")],
        ]))))
        .block(Block::Paragraph(vec![
            Inline::strong("Wersja systemu:"),
            Inline::text(" 1.0.0"),
        ]))
        .block(date_stamp(today, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn should_only_link_to_https_destinations() {
        let groups = left_groups().into_iter().chain(right_groups());
        for group in groups {
            for item in group.items() {
                if let Some(url) = &item.url {
                    assert!(url.starts_with("https://"), "{url}");
                }
            }
        }
        for addon in addons() {
            assert!(addon.badges.iter().all(|b| b.url.starts_with("https://")));
        }
    }

    #[test]
    fn should_give_every_addon_at_least_one_badge() {
        let all = addons();
        assert_eq!(all.len(), 7);
        assert!(all.iter().all(|a| !a.badges.is_empty()));
    }

    #[test]
    fn should_embed_addon_grid_in_catalog_document() {
        let doc = addons_document();
        assert_eq!(doc.title, ADDONS_TITLE);
        assert_eq!(doc.addons().len(), addons().len());
    }

    #[test]
    fn should_stamp_privacy_and_help_with_date() {
        assert!(privacy_document(today(), DateLocale::Polish)
            .plain_text()
            .contains("Data: 19.10.2026"));
        assert!(help_document(today(), DateLocale::Polish)
            .plain_text()
            .contains("Wersja systemu: 1.0.0"));
    }
}
