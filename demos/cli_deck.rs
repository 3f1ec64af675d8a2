//! CLI deck-of-cards example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckhand::{Card, Intent, Suit, Table, TableOptions, TableView};

fn main() {
    env_logger::init();

    println!("Deck of Cards CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    loop {
        print_table(&table.view());
        println!("{}", format_actions(&table.view()));

        let input = prompt_line("Action: ");
        let intent = match parse_intent(&input, &table.options().deal_sizes) {
            Some(Command::Quit) => {
                println!("Goodbye.");
                return;
            }
            Some(Command::Apply(intent)) => intent,
            None => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = table.apply(intent) {
            println!("Nothing happened: {err}");
        }
    }
}

enum Command {
    Apply(Intent),
    Quit,
}

/// Parses one line of input. A bare number is a deal shortcut and only
/// accepts the configured `deal_sizes`; any size needs `deal N`.
fn parse_intent(input: &str, deal_sizes: &[usize]) -> Option<Command> {
    let mut words = input.split_whitespace();
    let command = match words.next()? {
        "q" | "quit" => return Some(Command::Quit),
        "d" | "draw" => Intent::Draw,
        "r" | "reset" => Intent::Reset,
        "t" | "toss" => Intent::Toss,
        "w" | "wildcard" => Intent::Wildcard,
        "g" | "regroup" => Intent::Regroup,
        "p" | "pick" => Intent::PickAt(words.next()?.parse().ok()?),
        "deal" => Intent::Deal(words.next()?.parse().ok()?),
        other => {
            let size = other.parse().ok()?;
            if !deal_sizes.contains(&size) {
                return None;
            }
            Intent::Deal(size)
        }
    };
    Some(Command::Apply(command))
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    if view.can_draw {
        println!("\nDeck: {} cards left", view.cards_remaining);
    } else {
        println!("\nDeck: no cards remaining");
    }

    if view.hand.is_empty() {
        println!("Hand: (empty)\n");
        return;
    }

    let slots: Vec<String> = view
        .hand
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let card = format_card(&slot.card);
            if slot.selected {
                format!("{index}:[{card}]")
            } else {
                format!("{index}:{card}")
            }
        })
        .collect();
    println!("Hand: {}\n", slots.join(" "));
}

fn format_actions(view: &TableView) -> String {
    let mut parts = vec![format_action("draw", "d", view.can_draw)];
    for deal in &view.deals {
        parts.push(format_action(
            &format!("deal {}", deal.size),
            &deal.size.to_string(),
            deal.enabled,
        ));
    }
    parts.push(format_action("reset", "r", true));
    parts.push(format_action("pick N", "p", !view.hand.is_empty()));
    parts.push(format_action("toss", "t", view.can_toss));
    parts.push(format_action("wildcard", "w", true));
    parts.push(format_action("regroup", "g", view.can_regroup));
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
