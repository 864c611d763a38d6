//! # Main Menu
//!
//! ```text
//! ┌──────────────┐
//! │   welcome    │
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐  1-5   ┌──────────────┐   Ok / Err(message)
//! │  choose 1-6  │───────►│  run flow    │──────────────┐
//! └──────┬───────┘        └──────────────┘              │
//!    ▲   │ 6 / input closed                              │
//!    │   ▼                                               │
//!    │  goodbye                                          │
//!    └───────────────────────────────────────────────────┘
//! ```
//!
//! A failing flow never ends the loop: its message is printed and the menu
//! comes back. Only option 6 or closed input (Ctrl-D at the menu prompt)
//! leave.

use chrono::Local;
use std::io::Write;

use crate::commands::{dashboard, price, report, sale, stock};
use crate::console::{Console, LineSource};
use crate::error::AppResult;
use crate::state::{DisplaySettings, Station};

const OPTIONS: [(&str, &str); 6] = [
    ("1", "Stock dashboard"),
    ("2", "Record sale"),
    ("3", "Sales report"),
    ("4", "Add stock"),
    ("5", "Change price"),
    ("6", "Exit"),
];

pub fn run_menu<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    station: &mut Station,
    display: &DisplaySettings,
) -> AppResult<()> {
    console.panel(&[
        format!("Welcome to {}", display.store_name),
        "Fuel inventory and sales ledger".to_string(),
    ])?;

    let keys: Vec<String> = OPTIONS.iter().map(|(key, _)| key.to_string()).collect();
    loop {
        console.rule("Main Menu")?;
        for (key, label) in OPTIONS {
            console.say(format!("{}. {}", key, label))?;
        }

        let choice = match console.choose("Select menu", &keys) {
            Ok(choice) => choice,
            Err(e) if e.is_cancelled() => break,
            Err(e) => return Err(e),
        };

        let result = match choice.as_str() {
            "1" => dashboard::show(console.out(), station, display),
            "2" => sale::record_sale(console, station),
            "3" => report::show_report(console, station, Local::now().date_naive()),
            "4" => stock::add_stock(console, station),
            "5" => price::change_price(console, station),
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => console.say("Cancelled.")?,
            Err(e) => console.say(format!("✗ {}", e.message))?,
        }
    }

    console.say("Thank you for using the system. Goodbye!")
}
